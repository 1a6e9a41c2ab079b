//! Journal Page
//!
//! Sleep window (browser-local times) and nutrition notes.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::use_app;

#[component]
pub fn Journal() -> impl IntoView {
    let ctx = use_app();
    // Requests in flight; repeat submits are allowed
    let (in_flight, set_in_flight) = create_signal(0u32);

    let form = {
        let ctx = ctx.clone();
        move || {
            ctx.track();
            ctx.app.journal_form()
        }
    };
    let sleep_start = {
        let form = form.clone();
        move || form().sleep_start
    };
    let sleep_end = {
        let form = form.clone();
        move || form().sleep_end
    };
    let notes = move || form().nutrition_notes;

    let app = ctx.app.clone();
    let set_start = move |ev: web_sys::Event| app.set_sleep_start(event_target_value(&ev));
    let app = ctx.app.clone();
    let set_end = move |ev: web_sys::Event| app.set_sleep_end(event_target_value(&ev));
    let app = ctx.app.clone();
    let set_notes = move |ev: web_sys::Event| app.set_nutrition_notes(event_target_value(&ev));

    let on_save = move |_| {
        set_in_flight.update(|n| *n += 1);
        ctx.spawn(|app| async move {
            let _ = app.save_journal().await;
            set_in_flight.update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <h2>"Journal"</h2>

        <label for="sleep-start">"Went to sleep"</label>
        <input id="sleep-start" type="datetime-local" prop:value=sleep_start on:input=set_start />

        <label for="sleep-end">"Woke up"</label>
        <input id="sleep-end" type="datetime-local" prop:value=sleep_end on:input=set_end />

        <label for="nutrition-notes">"What did you eat?"</label>
        <textarea id="nutrition-notes" prop:value=notes on:input=set_notes />

        <button
            id="save-journal"
            class="primary-btn"
            on:click=on_save
        >
            {move || if in_flight.get() > 0 {
                view! { <InlineLoading /> <span>"Saving..."</span> }.into_view()
            } else {
                view! { <span>"Save Entry"</span> }.into_view()
            }}
        </button>
    }
}
