//! Query type definitions
//!
//! ## Request Structure
//!
//! Every operation is sent as a standard GraphQL-over-HTTP body:
//! `{"query": ..., "operationName": ..., "variables": {...}}`.
//! Responses are `{"data": ..., "errors": [...]}` and are collapsed into a
//! single `Result` by [`GraphqlResponse::into_result`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::views::{FeedPost, FeedSnapshot, PostId, UserId, UserProfile};

// =============================================================================
// Envelope
// =============================================================================

/// One GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Document text
    pub query: String,
    /// Operation selected from the document
    pub operation_name: String,
    /// Operation variables
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    /// Build a request from a document and typed variables.
    pub fn new<V: Serialize>(
        query: &str,
        operation_name: &str,
        variables: &V,
    ) -> AppResult<Self> {
        Ok(Self {
            query: query.to_string(),
            operation_name: operation_name.to_string(),
            variables: serde_json::to_value(variables)?,
        })
    }

    /// Decode the variables back into a typed struct.
    pub fn variables_as<V: DeserializeOwned>(&self) -> AppResult<V> {
        Ok(serde_json::from_value(self.variables.clone())?)
    }
}

/// One entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message
    pub message: String,
    /// Response path the error belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
}

/// Response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Operation result (may be partial when errors are present)
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Errors reported by the server
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Collapse the envelope into a result.
    ///
    /// Any error makes the whole operation fail, partial data included.
    pub fn into_result(self, operation: &'static str) -> AppResult<T> {
        if !self.errors.is_empty() {
            return Err(AppError::Graphql {
                operation,
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        self.data.ok_or(AppError::EmptyResponse { operation })
    }
}

// =============================================================================
// GetData
// =============================================================================

/// Variables for the combined read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDataVariables {
    /// Selected user
    pub id: UserId,
}

/// `getUser` payload wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserPayload {
    /// Resolved user
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// `data` of the combined read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDataData {
    /// Profile of the selected user
    #[serde(default)]
    pub get_user: Option<GetUserPayload>,
    /// Global feed
    #[serde(default)]
    pub all_posts: Option<Vec<FeedPost>>,
}

impl From<GetDataData> for FeedSnapshot {
    fn from(data: GetDataData) -> Self {
        Self {
            user: data.get_user.and_then(|payload| payload.user),
            all_posts: data.all_posts.unwrap_or_default(),
        }
    }
}

// =============================================================================
// CreatePost
// =============================================================================

/// Variables for the create mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostVariables {
    /// Post title
    pub title: String,
    /// Post body, sent as-is (empty string when left blank)
    pub content: String,
    /// Owner
    pub user_id: UserId,
}

/// Fields returned for a created post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPost {
    /// Assigned identifier
    pub id: PostId,
    /// Stored title
    pub title: String,
}

/// `createPost` payload wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostPayload {
    /// The created post
    pub post: CreatedPost,
}

/// `data` of the create mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostData {
    /// Mutation payload
    pub create_post: CreatePostPayload,
}

// =============================================================================
// DeletePost
// =============================================================================

/// Variables for the delete mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePostVariables {
    /// Post to delete
    pub id: PostId,
}

/// `data` of the delete mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostData {
    /// Success indicator
    pub delete_post: bool,
}
