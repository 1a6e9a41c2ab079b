//! Telegram WebApp bridge
//!
//! Binds `window.Telegram.WebApp` and exposes it as the app's [`Host`].
//! Outside Telegram the host has no init data and alerts fall back to
//! `window.alert`.

use disare::host::Host;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`
    pub type WebApp;

    #[wasm_bindgen(method, getter, js_name = initData)]
    fn init_data(this: &WebApp) -> Option<String>;

    #[wasm_bindgen(method, js_name = showAlert)]
    fn show_alert(this: &WebApp, message: &str);

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);
}

/// The WebApp object, if the page runs inside Telegram
fn web_app() -> Option<WebApp> {
    let window = web_sys::window()?;
    let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() {
        return None;
    }
    let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() {
        return None;
    }
    Some(web_app.unchecked_into())
}

pub struct TelegramHost {
    web_app: Option<WebApp>,
}

impl TelegramHost {
    pub fn connect() -> Self {
        let web_app = web_app();
        if web_app.is_none() {
            web_sys::console::warn_1(&"Telegram WebApp not found".into());
        }
        Self { web_app }
    }
}

impl Host for TelegramHost {
    fn init_data(&self) -> Option<String> {
        self.web_app.as_ref().and_then(|app| app.init_data())
    }

    fn show_alert(&self, message: &str) {
        match &self.web_app {
            Some(app) => app.show_alert(message),
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
        }
    }

    fn expand(&self) {
        if let Some(app) = &self.web_app {
            app.expand();
        }
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }
}
