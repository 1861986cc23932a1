//! # Platform Helpers
//!
//! Per-target initialisation hooks called by frontends before anything else.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod wasm;
        pub use wasm::initialize;
    } else {
        /// Non-WASM fallback: nothing to set up.
        pub fn initialize() {}
    }
}
