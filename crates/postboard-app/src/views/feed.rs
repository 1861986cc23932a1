//! # Feed View State

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Remote user identifier (GraphQL `ID`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote post identifier (GraphQL `ID`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Posts
// =============================================================================

/// A post listed under its owner's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Title (required by the schema)
    pub title: String,
    /// Body text
    #[serde(default)]
    pub content: Option<String>,
}

/// Author reference carried by global-feed posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,
}

/// A post in the global feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    /// Post identifier
    pub id: PostId,
    /// Title
    pub title: String,
    /// Body text
    #[serde(default)]
    pub content: Option<String>,
    /// Author, when the server resolved one
    #[serde(default)]
    pub author: Option<Author>,
}

impl FeedPost {
    /// Author display name, if present.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }
}

// =============================================================================
// Profile & Snapshot
// =============================================================================

/// The selected user's profile with their own posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Owned posts in server order
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Result of one combined read
///
/// Lives exactly as long as the fetch cycle that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Selected user's profile (absent if the server returned none)
    pub user: Option<UserProfile>,
    /// Every post across all users
    pub all_posts: Vec<FeedPost>,
}

impl FeedSnapshot {
    /// Owner of the profile panel, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }

    /// Posts shown in the profile panel.
    pub fn own_posts(&self) -> &[Post] {
        self.user.as_ref().map(|u| u.posts.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&PostId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
        let id: UserId = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(id.as_str(), "2");
    }

    #[test]
    fn feed_post_tolerates_missing_optional_fields() {
        let post: FeedPost = serde_json::from_str(r#"{"id":"1","title":"t"}"#).unwrap();
        assert_eq!(post.content, None);
        assert_eq!(post.author_name(), None);
    }

    #[test]
    fn own_posts_empty_without_user() {
        let snapshot = FeedSnapshot::default();
        assert!(snapshot.own_posts().is_empty());
        assert!(snapshot.user_id().is_none());
    }
}
