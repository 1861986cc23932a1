//! Typed client for the feed operations

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::queries::{
    CreatePostData, CreatePostVariables, CreatedPost, DeletePostData, DeletePostVariables,
    GetDataData, GetDataVariables, GraphqlRequest, GraphqlResponse, CREATE_POST,
    CREATE_POST_OPERATION, DELETE_POST, DELETE_POST_OPERATION, GET_DATA, GET_DATA_OPERATION,
};
use crate::transport::GraphqlTransport;
use crate::views::{FeedSnapshot, PostId, UserId};

/// Issues the combined read and the two mutations over a transport.
#[derive(Debug, Clone)]
pub struct FeedClient<T> {
    transport: T,
}

impl<T: GraphqlTransport> FeedClient<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `user`'s profile together with the global feed.
    pub async fn combined_read(&self, user: &UserId) -> AppResult<FeedSnapshot> {
        let vars = GetDataVariables { id: user.clone() };
        let data: GetDataData = self.run(GET_DATA, GET_DATA_OPERATION, &vars).await?;
        let snapshot = FeedSnapshot::from(data);
        tracing::debug!(
            user = %user,
            own_posts = snapshot.own_posts().len(),
            all_posts = snapshot.all_posts.len(),
            "combined read complete"
        );
        Ok(snapshot)
    }

    /// Create a post.
    pub async fn create_post(&self, vars: CreatePostVariables) -> AppResult<CreatedPost> {
        let data: CreatePostData = self.run(CREATE_POST, CREATE_POST_OPERATION, &vars).await?;
        let post = data.create_post.post;
        tracing::debug!(post = %post.id, owner = %vars.user_id, "post created");
        Ok(post)
    }

    /// Delete a post by identifier.
    ///
    /// A `false` success indicator is treated as a failure.
    pub async fn delete_post(&self, id: &PostId) -> AppResult<()> {
        let vars = DeletePostVariables { id: id.clone() };
        let data: DeletePostData = self.run(DELETE_POST, DELETE_POST_OPERATION, &vars).await?;
        if !data.delete_post {
            return Err(AppError::Operation(format!("post {id} was not deleted")));
        }
        tracing::debug!(post = %id, "post deleted");
        Ok(())
    }

    async fn run<V, D>(&self, query: &str, operation: &'static str, vars: &V) -> AppResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let request = GraphqlRequest::new(query, operation, vars)?;
        tracing::debug!(operation, "sending graphql request");
        let body = self.transport.execute(&request).await?;
        let response: GraphqlResponse<D> = serde_json::from_value(body)?;
        response.into_result(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    /// Replays one canned body and remembers the request.
    struct CannedTransport {
        body: serde_json::Value,
        seen: Mutex<Vec<GraphqlRequest>>,
    }

    impl CannedTransport {
        fn new(body: serde_json::Value) -> Self {
            Self {
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl GraphqlTransport for CannedTransport {
        async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value> {
            self.seen.lock().push(request.clone());
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn delete_sends_post_id() {
        let client = FeedClient::new(CannedTransport::new(json!({"data": {"deletePost": true}})));
        client.delete_post(&PostId::new("9")).await.unwrap();

        let seen = client.transport().seen.lock();
        assert_eq!(seen[0].operation_name, "DeletePost");
        assert_eq!(seen[0].variables, json!({"id": "9"}));
    }

    #[tokio::test]
    async fn delete_false_is_an_error() {
        let client = FeedClient::new(CannedTransport::new(json!({"data": {"deletePost": false}})));
        let err = client.delete_post(&PostId::new("9")).await.unwrap_err();
        assert!(matches!(err, AppError::Operation(_)));
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let client = FeedClient::new(CannedTransport::new(json!({"data": {"allPosts": 3}})));
        let err = client.combined_read(&UserId::new("1")).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn create_returns_created_post() {
        let client = FeedClient::new(CannedTransport::new(
            json!({"data": {"createPost": {"post": {"id": "12", "title": "Hello"}}}}),
        ));
        let post = client
            .create_post(CreatePostVariables {
                title: "Hello".into(),
                content: String::new(),
                user_id: UserId::new("2"),
            })
            .await
            .unwrap();
        assert_eq!(post.id, PostId::new("12"));
    }
}
