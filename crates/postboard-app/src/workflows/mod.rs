//! # Workflows
//!
//! Portable feed logic shared by all frontends. Frontends own rendering and
//! event wiring; everything that decides *what* request to send and *which*
//! response to keep lives here.

mod compose;
mod feed;

pub use compose::PostDraft;
pub use feed::{FeedController, FeedState, FetchOutcome};
