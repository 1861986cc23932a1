//! Postboard Testing Infrastructure
//!
//! In-memory GraphQL backend, a gated transport for ordering tests, and
//! seeded fixtures.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! postboard-testkit = { path = "../postboard-testkit" }
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod backend;
pub mod fixtures;
pub mod gated;

pub use backend::InMemoryBackend;
pub use fixtures::{controller_at, seeded_backend, TestController, TEST_ORIGIN};
pub use gated::GatedTransport;
