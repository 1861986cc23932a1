//! Postboard browser frontend

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;

pub use app::services::{BrowserNavigator, FeedHandle};
use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    postboard_app::platform::initialize();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Postboard initializing...");

    mount_to_body(App);

    log::info!("Postboard mounted successfully");
}
