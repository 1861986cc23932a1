//! Create/delete behaviour and the after-mutation policies.

#![allow(clippy::unwrap_used)]

use assert_matches::assert_matches;
use serde_json::json;
use std::sync::Arc;

use postboard_app::queries::{CREATE_POST_OPERATION, DELETE_POST_OPERATION, GET_DATA_OPERATION};
use postboard_app::{
    AfterMutation, AppConfig, AppError, AppResult, FeedClient, FeedController, FeedState,
    MemoryNavigator, Navigator, PostDraft, PostId,
};
use postboard_testkit::{controller_at, seeded_backend, TEST_ORIGIN};

fn reload_config() -> AppConfig {
    AppConfig {
        after_mutation: AfterMutation::Reload,
        ..AppConfig::default()
    }
}

// =============================================================================
// Create
// =============================================================================

/// Navigator whose document reload always fails.
struct BrokenReload(MemoryNavigator);

impl Navigator for BrokenReload {
    fn query_param(&self, key: &str) -> Option<String> {
        self.0.query_param(key)
    }

    fn push_query_param(&self, key: &str, value: &str) -> AppResult<()> {
        self.0.push_query_param(key, value)
    }

    fn reload(&self) -> AppResult<()> {
        Err(AppError::Navigation("reload blocked".into()))
    }
}

#[tokio::test]
async fn submit_sends_current_user_and_clears_draft() {
    let href = format!("{TEST_ORIGIN}?userId=2");
    let (feed, backend, _nav) = controller_at(&href, AppConfig::default());
    feed.refresh().await;

    let mut draft = PostDraft::new("Hello", "");
    let created = feed.submit(&mut draft).await.unwrap();

    assert_eq!(created.title, "Hello");
    assert!(draft.is_empty());

    let creates = backend.requests_for(CREATE_POST_OPERATION);
    assert_eq!(creates.len(), 1);
    assert_eq!(
        creates[0].variables,
        json!({"title": "Hello", "content": "", "userId": "2"})
    );
    assert_eq!(backend.titles_of(2).last().map(String::as_str), Some("Hello"));
}

#[tokio::test]
async fn create_refetches_the_combined_read() {
    let (feed, backend, nav) = controller_at(TEST_ORIGIN, AppConfig::default());
    feed.refresh().await;

    feed.create_post(&PostDraft::new("Fresh", "body")).await.unwrap();

    assert_eq!(backend.requests_for(GET_DATA_OPERATION).len(), 2);
    assert_eq!(nav.reloads(), 0);

    let state = feed.state();
    let snapshot = state.snapshot().unwrap();
    assert!(snapshot.own_posts().iter().any(|p| p.title == "Fresh"));
    assert_eq!(snapshot.all_posts[0].title, "Fresh");
    assert_eq!(snapshot.all_posts[0].author_name(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn create_failure_keeps_state_and_surfaces_error() {
    let (feed, backend, _nav) = controller_at(TEST_ORIGIN, AppConfig::default());
    feed.refresh().await;
    let before = feed.state();

    backend.fail_next_graphql(CREATE_POST_OPERATION, "title too long");
    let mut draft = PostDraft::new("Hello", "kept");
    let err = feed.submit(&mut draft).await.unwrap_err();

    assert_eq!(err.to_string(), "title too long");
    assert_eq!(feed.mutation_error(), Some(err));
    assert_eq!(feed.state(), before);
    assert_eq!(draft, PostDraft::new("Hello", "kept"));
    assert_eq!(backend.requests_for(GET_DATA_OPERATION).len(), 1);
}

#[tokio::test]
async fn successful_mutation_clears_previous_error() {
    let (feed, backend, _nav) = controller_at(TEST_ORIGIN, AppConfig::default());
    backend.fail_next(CREATE_POST_OPERATION, AppError::Network("offline".into()));
    assert!(feed.create_post(&PostDraft::new("a", "")).await.is_err());
    assert!(feed.mutation_error().is_some());

    feed.create_post(&PostDraft::new("a", "")).await.unwrap();
    assert_eq!(feed.mutation_error(), None);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_sends_post_id_and_refetches() {
    let (feed, backend, _nav) = controller_at(TEST_ORIGIN, AppConfig::default());
    feed.refresh().await;

    feed.delete_post(&PostId::new("3")).await.unwrap();

    let deletes = backend.requests_for(DELETE_POST_OPERATION);
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].variables, json!({"id": "3"}));

    let state = feed.state();
    let own: Vec<_> = state
        .snapshot()
        .unwrap()
        .own_posts()
        .iter()
        .map(|p| p.id.as_str().to_string())
        .collect();
    assert_eq!(own, vec!["1"]);
}

#[tokio::test]
async fn delete_failure_leaves_view_unchanged() {
    let (feed, backend, _nav) = controller_at(TEST_ORIGIN, AppConfig::default());
    feed.refresh().await;
    let before = feed.state();

    backend.fail_next(
        DELETE_POST_OPERATION,
        AppError::Http {
            status: 500,
            message: "Internal Server Error".into(),
        },
    );
    let err = feed.delete_post(&PostId::new("1")).await.unwrap_err();

    assert_matches!(err, AppError::Http { status: 500, .. });
    assert_eq!(feed.state(), before);
    assert_eq!(backend.post_count(), 4);
    assert!(feed.mutation_error().is_some());
}

// =============================================================================
// Reload policy
// =============================================================================

#[tokio::test]
async fn reload_policy_reloads_instead_of_refetching() {
    let (feed, backend, nav) = controller_at(TEST_ORIGIN, reload_config());
    feed.refresh().await;

    feed.delete_post(&PostId::new("1")).await.unwrap();
    feed.create_post(&PostDraft::new("x", "")).await.unwrap();

    assert_eq!(nav.reloads(), 2);
    assert_eq!(backend.requests_for(GET_DATA_OPERATION).len(), 1);
    assert_matches!(feed.state(), FeedState::Loaded(_));
}

#[tokio::test]
async fn failed_reload_still_reports_created_post() {
    let backend = Arc::new(seeded_backend());
    let feed = FeedController::new(
        FeedClient::new(Arc::clone(&backend)),
        BrokenReload(MemoryNavigator::new(TEST_ORIGIN)),
        reload_config(),
    );

    let mut draft = PostDraft::new("Once", "");
    let created = feed.submit(&mut draft).await.unwrap();

    assert_eq!(created.title, "Once");
    assert!(draft.is_empty());
    assert_eq!(feed.mutation_error(), None);
    assert_eq!(backend.requests_for(CREATE_POST_OPERATION).len(), 1);

    feed.delete_post(&created.id).await.unwrap();
    assert!(!backend.titles_of(1).contains(&"Once".to_string()));
}
