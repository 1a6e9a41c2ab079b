//! Mood Page
//!
//! Five-point scale, optional comment and a save button.

use disare::app::MoodLevel;
use leptos::*;

use crate::components::InlineLoading;
use crate::state::use_app;

#[component]
pub fn Mood() -> impl IntoView {
    let ctx = use_app();
    // Requests in flight; repeat submits are allowed
    let (in_flight, set_in_flight) = create_signal(0u32);

    let on_submit = {
        let ctx = ctx.clone();
        move |_| {
            set_in_flight.update(|n| *n += 1);
            ctx.spawn(|app| async move {
                let _ = app.submit_mood().await;
                set_in_flight.update(|n| *n = n.saturating_sub(1));
            });
        }
    };

    let comment = {
        let ctx = ctx.clone();
        move || {
            ctx.track();
            ctx.app.mood_comment()
        }
    };
    let app = ctx.app.clone();

    view! {
        <h2>"How are you feeling?"</h2>

        <div class="mood-options">
            {MoodLevel::all()
                .map(|level| view! { <MoodButton level=level /> })
                .collect_view()}
        </div>

        <textarea
            id="mood-comment"
            placeholder="Anything on your mind? (optional)"
            prop:value=comment
            on:input=move |ev| app.set_mood_comment(event_target_value(&ev))
        />

        <button
            id="submit-mood"
            class="primary-btn"
            on:click=on_submit
        >
            {move || if in_flight.get() > 0 {
                view! { <InlineLoading /> <span>"Saving..."</span> }.into_view()
            } else {
                view! { <span>"Save Mood"</span> }.into_view()
            }}
        </button>
    }
}

#[component]
fn MoodButton(level: MoodLevel) -> impl IntoView {
    let ctx = use_app();
    let app = ctx.app.clone();

    let class = move || {
        ctx.track();
        if ctx.app.selected_mood() == Some(level) {
            "mood-btn selected"
        } else {
            "mood-btn"
        }
    };

    view! {
        <button
            class=class
            data-mood=level.to_string()
            title=level.label()
            on:click=move |_| app.select_mood(level)
        >
            {level.emoji()}
        </button>
    }
}
