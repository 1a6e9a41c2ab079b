//! Navigation Component
//!
//! Bottom bar switching between the feature panels.

use disare::panel::Panel;
use leptos::*;

use crate::state::use_app;

/// Navigation bar component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <NavButton panel=Panel::Mood icon="😊" />
            <NavButton panel=Panel::Chat icon="💬" />
            <NavButton panel=Panel::Journal icon="📔" />
            <NavButton panel=Panel::Insights icon="📈" />
        </nav>
    }
}

/// Individual navigation button
#[component]
fn NavButton(panel: Panel, icon: &'static str) -> impl IntoView {
    let ctx = use_app();
    let app = ctx.app.clone();

    let class = move || {
        ctx.track();
        if ctx.app.is_active(panel) {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <button
            class=class
            data-screen=panel.id()
            on:click=move |_| app.show_panel(panel)
        >
            <span class="nav-icon">{icon}</span>
            <span class="nav-label">{panel.label()}</span>
        </button>
    }
}
