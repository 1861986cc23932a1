//! # GraphQL Operations
//!
//! Documents, variables and response shapes for the three operations the
//! client issues. The schema itself is owned by the server.

mod types;

pub use types::{
    CreatePostData, CreatePostPayload, CreatePostVariables, CreatedPost, DeletePostData,
    DeletePostVariables, GetDataData, GetDataVariables, GetUserPayload, GraphqlError,
    GraphqlRequest, GraphqlResponse,
};

/// Operation name of the combined read.
pub const GET_DATA_OPERATION: &str = "GetData";
/// Operation name of the create mutation.
pub const CREATE_POST_OPERATION: &str = "CreatePost";
/// Operation name of the delete mutation.
pub const DELETE_POST_OPERATION: &str = "DeletePost";

/// Combined read: the selected user's profile plus every post.
pub const GET_DATA: &str = r#"
  query GetData($id: ID!) {
    getUser(input: { id: $id }) {
      user {
        id
        name
        email
        posts { id title content }
      }
    }
    allPosts {
      id
      title
      content
      author { name }
    }
  }
"#;

/// Create a post owned by `$userId`.
pub const CREATE_POST: &str = r#"
  mutation CreatePost($title: String!, $content: String, $userId: ID!) {
    createPost(input: { title: $title, content: $content, userId: $userId }) {
      post {
        id
        title
      }
    }
  }
"#;

/// Delete a post by id.
pub const DELETE_POST: &str = r#"
  mutation DeletePost($id: ID!) {
    deletePost(id: $id)
  }
"#;
