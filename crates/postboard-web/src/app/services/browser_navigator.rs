/// Browser Navigator
///
/// `Navigator` backed by `window.location` and `window.history`. Holds no
/// JS handles, so it can live inside shared (Send + Sync) state.
use postboard_app::navigation::{read_query_param, with_query_param};
use postboard_app::{AppError, AppResult, Navigator};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn window() -> AppResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| AppError::Navigation("no window available".into()))
    }

    fn href() -> AppResult<String> {
        Self::window()?.location().href().map_err(js_error)
    }
}

fn js_error(value: JsValue) -> AppError {
    AppError::Navigation(
        value
            .as_string()
            .unwrap_or_else(|| "Unknown JavaScript error".to_string()),
    )
}

impl Navigator for BrowserNavigator {
    fn query_param(&self, key: &str) -> Option<String> {
        match Self::href() {
            Ok(href) => read_query_param(&href, key),
            Err(err) => {
                log::warn!("Could not read location: {err}");
                None
            }
        }
    }

    fn push_query_param(&self, key: &str, value: &str) -> AppResult<()> {
        let window = Self::window()?;
        let href = window.location().href().map_err(js_error)?;
        let next = with_query_param(&href, key, value)?;
        window
            .history()
            .map_err(js_error)?
            .push_state_with_url(&JsValue::NULL, "", Some(&next))
            .map_err(js_error)?;
        log::debug!("Pushed history entry {next}");
        Ok(())
    }

    fn reload(&self) -> AppResult<()> {
        log::info!("Reloading page");
        Self::window()?.location().reload().map_err(js_error)
    }
}
