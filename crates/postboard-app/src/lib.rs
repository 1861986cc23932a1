//! # Postboard App Core
//!
//! Portable, UI-free core of the Postboard social feed: the GraphQL client,
//! the selected-user/location model, and the feed and compose workflows.
//!
//! ## Layout
//!
//! - [`views`]: decoded view models (users, posts, feed snapshot)
//! - [`queries`]: GraphQL documents and wire types
//! - [`transport`]: the transport seam and its HTTP implementation
//! - [`client`]: typed operations over a transport
//! - [`navigation`]: selected-user resolution and the [`Navigator`] service
//! - [`workflows`]: [`FeedController`] and [`PostDraft`]
//! - [`config`] / [`errors`]: ambient configuration and error types

pub mod client;
pub mod config;
pub mod errors;
pub mod navigation;
pub mod platform;
pub mod queries;
pub mod transport;
pub mod views;
pub mod workflows;

pub use client::FeedClient;
pub use config::{AfterMutation, AppConfig};
pub use errors::{AppError, AppResult, ErrorCategory};
pub use navigation::{MemoryNavigator, Navigator, SelectedUserId};
pub use transport::{GraphqlTransport, HttpTransport};
pub use views::{Author, FeedPost, FeedSnapshot, Post, PostId, UserId, UserProfile};
pub use workflows::{FeedController, FeedState, FetchOutcome, PostDraft};
