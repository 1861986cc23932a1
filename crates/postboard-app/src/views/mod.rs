//! # View State
//!
//! Client-held view models decoded from the combined read. None of these are
//! edited locally; a mutation is followed by a fresh read.

mod feed;

pub use feed::{Author, FeedPost, FeedSnapshot, Post, PostId, UserId, UserProfile};
