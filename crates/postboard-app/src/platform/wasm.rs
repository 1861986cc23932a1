//! # WASM Platform Helpers

/// Initialize the WASM platform
///
/// Call this before creating a `FeedController`.
pub fn initialize() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}
