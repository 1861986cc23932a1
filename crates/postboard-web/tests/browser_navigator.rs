//! Browser navigator against a real `window` (wasm-pack test --headless).

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use postboard_app::Navigator;
use postboard_web::BrowserNavigator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn push_updates_location_without_navigating() {
    let nav = BrowserNavigator;
    let history_len = web_sys::window().unwrap().history().unwrap().length().unwrap();

    nav.push_query_param("userId", "2").unwrap();

    assert_eq!(nav.query_param("userId").as_deref(), Some("2"));
    let after = web_sys::window().unwrap().history().unwrap().length().unwrap();
    assert_eq!(after, history_len + 1);
}

#[wasm_bindgen_test]
fn push_replaces_existing_value() {
    let nav = BrowserNavigator;
    nav.push_query_param("userId", "1").unwrap();
    nav.push_query_param("userId", "2").unwrap();

    let href = web_sys::window().unwrap().location().href().unwrap();
    assert_eq!(href.matches("userId=").count(), 1);
}
