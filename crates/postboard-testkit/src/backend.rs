//! In-memory GraphQL backend
//!
//! Answers the three client operations from an in-memory store, mirroring the
//! observable behaviour of the real server: numeric ids, newest-first global
//! feed, "no user found" for unknown users, and `deletePost` returning `true`
//! whether or not the row existed.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{BTreeMap, VecDeque};

use postboard_app::queries::{
    CreatePostVariables, DeletePostVariables, GetDataVariables, GraphqlRequest,
    CREATE_POST_OPERATION, DELETE_POST_OPERATION, GET_DATA_OPERATION,
};
use postboard_app::{AppError, AppResult, GraphqlTransport, PostId, UserId};

#[derive(Debug, Clone)]
struct StoredUser {
    name: String,
    email: String,
}

#[derive(Debug, Clone)]
struct StoredPost {
    title: String,
    content: Option<String>,
    author: u64,
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<u64, StoredUser>,
    posts: BTreeMap<u64, StoredPost>,
    next_post_id: u64,
}

#[derive(Debug, Clone)]
enum Failure {
    Transport(AppError),
    Graphql(String),
}

/// In-memory stand-in for the GraphQL server
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
    requests: Mutex<Vec<GraphqlRequest>>,
    failures: Mutex<VecDeque<(String, Failure)>>,
}

impl InMemoryBackend {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user.
    pub fn with_user(self, id: u64, name: &str, email: &str) -> Self {
        self.store.lock().users.insert(
            id,
            StoredUser {
                name: name.to_string(),
                email: email.to_string(),
            },
        );
        self
    }

    /// Add a post and return its id.
    pub fn add_post(&self, author: u64, title: &str, content: Option<&str>) -> PostId {
        let mut store = self.store.lock();
        store.next_post_id += 1;
        let id = store.next_post_id;
        store.posts.insert(
            id,
            StoredPost {
                title: title.to_string(),
                content: content.map(str::to_string),
                author,
            },
        );
        PostId::new(id.to_string())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().clone()
    }

    /// Requests for one operation, in order.
    pub fn requests_for(&self, operation: &str) -> Vec<GraphqlRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.operation_name == operation)
            .cloned()
            .collect()
    }

    /// Titles of `author`'s posts, oldest first.
    pub fn titles_of(&self, author: u64) -> Vec<String> {
        self.store
            .lock()
            .posts
            .values()
            .filter(|p| p.author == author)
            .map(|p| p.title.clone())
            .collect()
    }

    /// Total stored posts.
    pub fn post_count(&self) -> usize {
        self.store.lock().posts.len()
    }

    // =========================================================================
    // Failure injection
    // =========================================================================

    /// Fail the next `operation` request at the transport level.
    pub fn fail_next(&self, operation: &str, error: AppError) {
        self.failures
            .lock()
            .push_back((operation.to_string(), Failure::Transport(error)));
    }

    /// Answer the next `operation` request with a GraphQL error.
    pub fn fail_next_graphql(&self, operation: &str, message: &str) {
        self.failures
            .lock()
            .push_back((operation.to_string(), Failure::Graphql(message.to_string())));
    }

    fn take_failure(&self, operation: &str) -> Option<Failure> {
        let mut failures = self.failures.lock();
        let index = failures.iter().position(|(op, _)| op == operation)?;
        failures.remove(index).map(|(_, failure)| failure)
    }

    // =========================================================================
    // Resolvers
    // =========================================================================

    fn get_data(&self, vars: GetDataVariables) -> Value {
        let store = self.store.lock();
        let all_posts: Vec<Value> = store
            .posts
            .iter()
            .rev()
            .map(|(id, post)| {
                let author = store.users.get(&post.author).map(|u| u.name.clone());
                json!({
                    "id": id.to_string(),
                    "title": post.title,
                    "content": post.content,
                    "author": author.map(|name| json!({"name": name})),
                })
            })
            .collect();

        let user = match parse_id(&vars.id) {
            Some(id) => match store.users.get(&id) {
                Some(user) => {
                    let posts: Vec<Value> = store
                        .posts
                        .iter()
                        .filter(|(_, p)| p.author == id)
                        .map(|(pid, p)| {
                            json!({"id": pid.to_string(), "title": p.title, "content": p.content})
                        })
                        .collect();
                    Ok(json!({
                        "id": id.to_string(),
                        "name": user.name,
                        "email": user.email,
                        "posts": posts,
                    }))
                }
                None => Err("no user found: no rows in result set".to_string()),
            },
            None => Err(format!("invalid user id: {}", vars.id)),
        };

        match user {
            Ok(user) => json!({"data": {"getUser": {"user": user}, "allPosts": all_posts}}),
            Err(message) => json!({
                "data": {"getUser": null, "allPosts": all_posts},
                "errors": [{"message": message, "path": ["getUser"]}],
            }),
        }
    }

    fn create_post(&self, vars: CreatePostVariables) -> Value {
        let Some(author) = parse_id(&vars.user_id) else {
            return graphql_error(&format!("invalid userID: {}", vars.user_id), "createPost");
        };
        let id = self.add_post(author, &vars.title, Some(&vars.content));
        json!({"data": {"createPost": {"post": {"id": id, "title": vars.title}}}})
    }

    fn delete_post(&self, vars: DeletePostVariables) -> Value {
        let Ok(id) = vars.id.as_str().parse::<u64>() else {
            return graphql_error(&format!("invalid user id: {}", vars.id), "deletePost");
        };
        self.store.lock().posts.remove(&id);
        json!({"data": {"deletePost": true}})
    }
}

fn parse_id(id: &UserId) -> Option<u64> {
    id.as_str().parse().ok()
}

fn graphql_error(message: &str, path: &str) -> Value {
    json!({"data": null, "errors": [{"message": message, "path": [path]}]})
}

#[async_trait(?Send)]
impl GraphqlTransport for InMemoryBackend {
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<Value> {
        self.requests.lock().push(request.clone());
        let operation = request.operation_name.as_str();
        tracing::trace!(operation, "in-memory backend request");

        match self.take_failure(operation) {
            Some(Failure::Transport(err)) => return Err(err),
            Some(Failure::Graphql(message)) => return Ok(graphql_error(&message, operation)),
            None => {}
        }

        let body = match operation {
            GET_DATA_OPERATION => self.get_data(request.variables_as()?),
            CREATE_POST_OPERATION => self.create_post(request.variables_as()?),
            DELETE_POST_OPERATION => self.delete_post(request.variables_as()?),
            other => graphql_error(&format!("unknown operation {other}"), other),
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_app::FeedClient;

    #[tokio::test]
    async fn feed_is_newest_first_and_profile_is_scoped() {
        let backend = InMemoryBackend::new()
            .with_user(1, "Ada", "ada@example.com")
            .with_user(2, "Bob", "bob@example.com");
        backend.add_post(1, "first", None);
        backend.add_post(2, "second", Some("hi"));

        let client = FeedClient::new(backend);
        let snapshot = client.combined_read(&UserId::new("1")).await.unwrap();

        let titles: Vec<_> = snapshot.all_posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(snapshot.all_posts[0].author_name(), Some("Bob"));
        assert_eq!(snapshot.own_posts().len(), 1);
        assert_eq!(snapshot.own_posts()[0].title, "first");
    }

    #[tokio::test]
    async fn unknown_user_is_a_graphql_error() {
        let client = FeedClient::new(InMemoryBackend::new());
        let err = client.combined_read(&UserId::new("7")).await.unwrap_err();
        assert!(err.to_string().starts_with("no user found"));
    }

    #[tokio::test]
    async fn injected_failure_applies_once() {
        let backend = InMemoryBackend::new().with_user(1, "Ada", "a@x");
        backend.fail_next(GET_DATA_OPERATION, AppError::Network("down".into()));
        let client = FeedClient::new(backend);

        assert!(client.combined_read(&UserId::new("1")).await.is_err());
        assert!(client.combined_read(&UserId::new("1")).await.is_ok());
    }
}
