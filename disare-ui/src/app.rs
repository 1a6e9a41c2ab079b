//! App Root Component
//!
//! Provides the controller, starts the session and lays out the panels.

use disare::panel::Panel;
use leptos::*;

use crate::components::{Nav, Screen};
use crate::pages::{Chat, Insights, Journal, Mood, Welcome};
use crate::state::provide_app;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app();

    // Authentication runs once at load; failures are alerted by the controller
    ctx.spawn(|app| async move {
        let _ = app.bootstrap().await;
    });

    let show_nav = {
        let ctx = ctx.clone();
        move || {
            ctx.track();
            !ctx.app.is_active(Panel::Welcome)
        }
    };

    view! {
        <div class="app">
            <Screen panel=Panel::Welcome><Welcome /></Screen>
            <Screen panel=Panel::Mood><Mood /></Screen>
            <Screen panel=Panel::Chat><Chat /></Screen>
            <Screen panel=Panel::Journal><Journal /></Screen>
            <Screen panel=Panel::Insights><Insights /></Screen>

            <Show when=show_nav>
                <Nav />
            </Show>
        </div>
    }
}
