//! # Feed Controller
//!
//! Owns the selected user and the per-fetch state machine:
//!
//! ```text
//! Idle → Loading → { Loaded | Failed }
//!          ↑ selection change (switcher, back/forward), mutation resync
//! ```
//!
//! Every combined read takes a ticket when it is issued. A response is only
//! applied if its ticket is still the newest one, so a slow response for an
//! earlier selection can never overwrite a later one.

use parking_lot::Mutex;
use std::future::Future;

use crate::client::FeedClient;
use crate::config::{AfterMutation, AppConfig};
use crate::errors::{AppError, AppResult};
use crate::navigation::{Navigator, SelectedUserId};
use crate::queries::CreatedPost;
use crate::transport::GraphqlTransport;
use crate::views::{FeedSnapshot, PostId, UserId};
use crate::workflows::PostDraft;

/// State of the current fetch cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    /// No read issued yet
    #[default]
    Idle,
    /// A combined read for `user` is outstanding
    Loading {
        /// User the outstanding read is keyed by
        user: UserId,
    },
    /// The newest read succeeded
    Loaded(FeedSnapshot),
    /// The newest read failed; only the message is shown
    Failed {
        /// Error message
        message: String,
    },
}

impl FeedState {
    /// Snapshot, when loaded.
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Whether a completed read was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response became the current state.
    Applied,
    /// A newer read was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
struct FetchTicket {
    generation: u64,
    user: UserId,
}

#[derive(Debug)]
struct FeedSession {
    selected: SelectedUserId,
    generation: u64,
    state: FeedState,
    mutation_error: Option<AppError>,
}

/// Drives the combined read and the mutations for one page
pub struct FeedController<T, N> {
    client: FeedClient<T>,
    navigator: N,
    config: AppConfig,
    fallback: SelectedUserId,
    session: Mutex<FeedSession>,
}

impl<T, N> FeedController<T, N>
where
    T: GraphqlTransport,
    N: Navigator,
{
    /// Create a controller; the selection comes from the current location.
    pub fn new(client: FeedClient<T>, navigator: N, config: AppConfig) -> Self {
        let fallback = config.default_selection();
        let selected = SelectedUserId::resolve(
            navigator.query_param(&config.user_param).as_deref(),
            &fallback,
        );
        tracing::info!(user = %selected, "feed controller initialised");

        Self {
            client,
            navigator,
            config,
            fallback,
            session: Mutex::new(FeedSession {
                selected,
                generation: 0,
                state: FeedState::Idle,
                mutation_error: None,
            }),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Injected navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Currently selected user.
    pub fn selected_user(&self) -> SelectedUserId {
        self.session.lock().selected.clone()
    }

    /// Current fetch state.
    pub fn state(&self) -> FeedState {
        self.session.lock().state.clone()
    }

    /// Last mutation failure, cleared by the next successful mutation.
    pub fn mutation_error(&self) -> Option<AppError> {
        self.session.lock().mutation_error.clone()
    }

    /// Dismiss the last mutation failure.
    pub fn clear_mutation_error(&self) {
        self.session.lock().mutation_error = None;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Switch to `raw`, recording it in the location without navigating.
    ///
    /// Callers issue [`refresh`](Self::refresh) afterwards.
    pub fn select_user(&self, raw: &str) -> AppResult<()> {
        let selected = SelectedUserId::parse(raw)?;
        self.navigator
            .push_query_param(&self.config.user_param, selected.as_str())?;
        tracing::info!(user = %selected, "user selected");
        self.session.lock().selected = selected;
        Ok(())
    }

    /// Re-derive the selection after a history traversal.
    ///
    /// Returns true when the selection changed.
    pub fn sync_from_location(&self) -> bool {
        let selected = SelectedUserId::resolve(
            self.navigator.query_param(&self.config.user_param).as_deref(),
            &self.fallback,
        );
        let mut session = self.session.lock();
        if session.selected == selected {
            return false;
        }
        tracing::info!(from = %session.selected, to = %selected, "selection changed by history");
        session.selected = selected;
        true
    }

    // =========================================================================
    // Combined read
    // =========================================================================

    /// Issue the combined read for the current selection.
    ///
    /// The request is registered (and the state set to `Loading`) when this
    /// is called, not when the returned future is first polled.
    pub fn refresh(&self) -> impl Future<Output = FetchOutcome> + '_ {
        let ticket = self.begin_fetch();
        async move {
            let result = self.client.combined_read(&ticket.user).await;
            self.finish_fetch(ticket, result)
        }
    }

    fn begin_fetch(&self) -> FetchTicket {
        let mut session = self.session.lock();
        session.generation += 1;
        let user = session.selected.user_id().clone();
        session.state = FeedState::Loading { user: user.clone() };
        tracing::debug!(generation = session.generation, user = %user, "combined read issued");
        FetchTicket {
            generation: session.generation,
            user,
        }
    }

    fn finish_fetch(&self, ticket: FetchTicket, result: AppResult<FeedSnapshot>) -> FetchOutcome {
        let mut session = self.session.lock();
        if ticket.generation != session.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = session.generation,
                user = %ticket.user,
                "dropping stale combined read"
            );
            return FetchOutcome::Stale;
        }
        session.state = match result {
            Ok(snapshot) => FeedState::Loaded(snapshot),
            Err(err) => {
                tracing::warn!(user = %ticket.user, error = %err, "combined read failed");
                FeedState::Failed {
                    message: err.to_string(),
                }
            }
        };
        FetchOutcome::Applied
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Delete a post from the profile panel.
    ///
    /// On failure the feed state is left as it was.
    pub async fn delete_post(&self, id: &PostId) -> AppResult<()> {
        match self.client.delete_post(id).await {
            Ok(()) => {
                tracing::info!(post = %id, "post deleted");
                self.after_mutation().await;
                Ok(())
            }
            Err(err) => Err(self.record_mutation_failure("delete", err)),
        }
    }

    /// Submit the compose form: create the post and clear `draft` on success.
    ///
    /// On failure the draft keeps its text so the user can retry.
    pub async fn submit(&self, draft: &mut PostDraft) -> AppResult<CreatedPost> {
        let post = self.create_post(draft).await?;
        draft.clear();
        Ok(post)
    }

    /// Create a post owned by the current selection.
    ///
    /// The draft is not touched; see [`submit`](Self::submit).
    pub async fn create_post(&self, draft: &PostDraft) -> AppResult<CreatedPost> {
        let owner = self.selected_user();
        let vars = match draft.to_variables(owner.user_id()) {
            Ok(vars) => vars,
            Err(err) => return Err(self.record_mutation_failure("create", err)),
        };
        match self.client.create_post(vars).await {
            Ok(post) => {
                tracing::info!(post = %post.id, owner = %owner, "post created");
                self.after_mutation().await;
                Ok(post)
            }
            Err(err) => Err(self.record_mutation_failure("create", err)),
        }
    }

    /// Resync after a mutation the server already applied. A failed reload
    /// is only logged so the mutation is never reported as failed.
    async fn after_mutation(&self) {
        self.clear_mutation_error();
        match self.config.after_mutation {
            AfterMutation::Refetch => {
                self.refresh().await;
            }
            AfterMutation::Reload => {
                if let Err(err) = self.navigator.reload() {
                    tracing::warn!(error = %err, "reload after mutation failed");
                }
            }
        }
    }

    fn record_mutation_failure(&self, action: &str, err: AppError) -> AppError {
        tracing::error!(action, error = %err, "mutation failed");
        self.session.lock().mutation_error = Some(err.clone());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::queries::GraphqlRequest;

    /// Answers every read with an empty feed.
    struct EmptyFeed;

    #[async_trait(?Send)]
    impl GraphqlTransport for EmptyFeed {
        async fn execute(&self, _request: &GraphqlRequest) -> AppResult<serde_json::Value> {
            Ok(json!({"data": {"getUser": {"user": null}, "allPosts": []}}))
        }
    }

    fn controller(href: &str) -> FeedController<EmptyFeed, MemoryNavigator> {
        FeedController::new(
            FeedClient::new(EmptyFeed),
            MemoryNavigator::new(href),
            AppConfig::default(),
        )
    }

    #[test]
    fn initial_selection_from_location() {
        assert_eq!(controller("http://h/").selected_user().as_str(), "1");
        assert_eq!(controller("http://h/?userId=2").selected_user().as_str(), "2");
        assert_eq!(controller("http://h/?userId=bad").selected_user().as_str(), "1");
    }

    #[test]
    fn refresh_marks_loading_before_poll() {
        let feed = controller("http://h/?userId=2");
        assert_eq!(feed.state(), FeedState::Idle);
        let pending = feed.refresh();
        assert_eq!(
            feed.state(),
            FeedState::Loading {
                user: UserId::new("2")
            }
        );
        drop(pending);
    }

    #[test]
    fn invalid_selection_leaves_location_alone() {
        let feed = controller("http://h/");
        assert!(feed.select_user("nope").is_err());
        assert_eq!(feed.navigator().len(), 1);
        assert_eq!(feed.selected_user().as_str(), "1");
    }

    #[tokio::test]
    async fn blank_draft_is_rejected_without_request() {
        let feed = controller("http://h/");
        let err = feed.create_post(&PostDraft::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(feed.mutation_error(), Some(err));
        assert_eq!(feed.state(), FeedState::Idle);
    }
}
