//! App Context
//!
//! One [`MiniApp`] shared by every component. The controller keeps its own
//! state; a Leptos trigger fires whenever it changes so views re-render.

use disare::app::MiniApp;
use disare::client::ApiClient;
use leptos::*;
use std::rc::Rc;

use crate::api::{get_api_base, GlooTransport};
use crate::telegram::TelegramHost;

pub type UiApp = MiniApp<GlooTransport, TelegramHost>;

#[derive(Clone)]
pub struct AppContext {
    pub app: Rc<UiApp>,
    changed: Trigger,
}

impl AppContext {
    /// Subscribe the current reactive scope to controller changes
    pub fn track(&self) {
        self.changed.track();
    }

    /// Run `f` against the controller inside a spawned task
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<UiApp>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_local(f(Rc::clone(&self.app)));
    }
}

/// Build the controller and provide it to the component tree
pub fn provide_app() -> AppContext {
    let client = ApiClient::new(GlooTransport::new(get_api_base()));
    let app = Rc::new(MiniApp::new(client, TelegramHost::connect()));

    let changed = create_trigger();
    app.subscribe(move || changed.notify());

    let ctx = AppContext { app, changed };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}
