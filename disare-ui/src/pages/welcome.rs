//! Welcome Page

use leptos::*;

use crate::state::use_app;

#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_app();
    let app = ctx.app.clone();

    let greeting = move || {
        ctx.track();
        ctx.app
            .session()
            .map(|s| format!("Hi, {}!", s.display_name()))
            .unwrap_or_else(|| "Welcome to Disare".to_string())
    };

    view! {
        <div class="welcome">
            <div class="welcome-logo">"🌿"</div>
            <h1>{greeting}</h1>
            <p class="welcome-text">
                "Track your mood, talk things through and keep an eye on your sleep."
            </p>
            <button id="start-btn" class="primary-btn" on:click=move |_| app.start()>
                "Get Started"
            </button>
        </div>
    }
}
