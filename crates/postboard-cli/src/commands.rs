//! Subcommand handlers. Each returns the text to print.

use anyhow::Result;
use postboard_app::{AppConfig, FeedClient, GraphqlTransport, PostDraft, PostId, SelectedUserId};

use crate::render;

fn selected(config: &AppConfig, user: Option<&str>) -> Result<SelectedUserId> {
    match user {
        Some(raw) => Ok(SelectedUserId::parse(raw)?),
        None => Ok(config.default_selection()),
    }
}

pub async fn feed<T: GraphqlTransport>(
    client: &FeedClient<T>,
    config: &AppConfig,
    user: Option<&str>,
) -> Result<String> {
    let selection = selected(config, user)?;
    tracing::info!(user = %selection, "fetching feed");
    let snapshot = client.combined_read(selection.user_id()).await?;
    Ok(render::snapshot(&snapshot))
}

pub async fn create<T: GraphqlTransport>(
    client: &FeedClient<T>,
    config: &AppConfig,
    user: Option<&str>,
    title: String,
    content: String,
) -> Result<String> {
    let owner = selected(config, user)?;
    let vars = PostDraft::new(title, content).to_variables(owner.user_id())?;
    let created = client.create_post(vars).await?;
    tracing::info!(post = %created.id, owner = %owner, "post created");
    Ok(format!("Created post {}: {}", created.id, created.title))
}

pub async fn delete<T: GraphqlTransport>(client: &FeedClient<T>, id: &str) -> Result<String> {
    let id = PostId::new(id.trim());
    client.delete_post(&id).await?;
    tracing::info!(post = %id, "post deleted");
    Ok(format!("Deleted post {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_testkit::{seeded_backend, InMemoryBackend};
    use std::sync::Arc;

    fn client() -> (FeedClient<Arc<InMemoryBackend>>, Arc<InMemoryBackend>) {
        let backend = Arc::new(seeded_backend());
        (FeedClient::new(Arc::clone(&backend)), backend)
    }

    #[tokio::test]
    async fn feed_defaults_to_configured_user() {
        let (client, _) = client();
        let out = feed(&client, &AppConfig::default(), None).await.unwrap();
        assert!(out.contains("Ada Lovelace"));
        assert!(out.contains("@Bob Builder"));
    }

    #[tokio::test]
    async fn feed_rejects_malformed_user() {
        let (client, backend) = client();
        assert!(feed(&client, &AppConfig::default(), Some("abc")).await.is_err());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn create_then_delete() {
        let (client, backend) = client();
        let config = AppConfig::default();

        let out = create(&client, &config, Some("2"), "Fresh".into(), String::new())
            .await
            .unwrap();
        assert!(out.starts_with("Created post "));
        assert!(backend.titles_of(2).contains(&"Fresh".to_string()));

        let out = delete(&client, "1").await.unwrap();
        assert_eq!(out, "Deleted post 1");
        assert!(!backend.titles_of(1).contains(&"Notes on the engine".to_string()));
    }

    #[tokio::test]
    async fn create_with_blank_title_sends_nothing() {
        let (client, backend) = client();
        let result = create(&client, &AppConfig::default(), None, "  ".into(), "x".into()).await;
        assert!(result.is_err());
        assert!(backend.requests().is_empty());
    }
}
