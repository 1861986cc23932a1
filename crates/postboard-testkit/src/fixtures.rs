//! Seeded fixtures

use std::sync::Arc;

use postboard_app::{AppConfig, FeedClient, FeedController, MemoryNavigator};

use crate::backend::InMemoryBackend;

/// Origin used by fixture navigators.
pub const TEST_ORIGIN: &str = "http://localhost:3000/";

/// Two users with two posts each.
///
/// Post ids: 1 and 3 belong to user 1 (Ada), 2 and 4 to user 2 (Bob).
pub fn seeded_backend() -> InMemoryBackend {
    let backend = InMemoryBackend::new()
        .with_user(1, "Ada Lovelace", "ada@example.com")
        .with_user(2, "Bob Builder", "bob@example.com");
    backend.add_post(1, "Notes on the engine", Some("On the analytical engine"));
    backend.add_post(2, "Can we fix it", Some("Yes we can"));
    backend.add_post(1, "Loops", None);
    backend.add_post(2, "Scaffolding", Some(""));
    backend
}

/// Controller over a shared backend and navigator.
pub type TestController = FeedController<Arc<InMemoryBackend>, Arc<MemoryNavigator>>;

/// Build a controller for `href` with `config`, returning the shared handles.
pub fn controller_at(
    href: &str,
    config: AppConfig,
) -> (TestController, Arc<InMemoryBackend>, Arc<MemoryNavigator>) {
    let backend = Arc::new(seeded_backend());
    let navigator = Arc::new(MemoryNavigator::new(href));
    let controller = FeedController::new(
        FeedClient::new(Arc::clone(&backend)),
        Arc::clone(&navigator),
        config,
    );
    (controller, backend, navigator)
}
