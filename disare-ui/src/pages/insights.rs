//! Insights Page
//!
//! Weekly summaries, reloaded each time the panel opens.

use disare::app::Insights as WeeklyInsights;
use disare::panel::Panel;
use leptos::*;

use crate::state::use_app;

#[component]
pub fn Insights() -> impl IntoView {
    let ctx = use_app();

    {
        let ctx = ctx.clone();
        create_effect(move |was_active: Option<bool>| {
            ctx.track();
            let active = ctx.app.is_active(Panel::Insights);
            if active && was_active != Some(true) && ctx.app.session().is_some() {
                ctx.spawn(|app| async move {
                    let _ = app.refresh_insights().await;
                });
            }
            active
        });
    }

    let body = move || {
        ctx.track();
        match ctx.app.insights() {
            Some(insights) => view! { <Summary insights=insights /> }.into_view(),
            None => view! { <p class="insights-empty">"No insights yet"</p> }.into_view(),
        }
    };

    view! {
        <h2>"Your week"</h2>
        {body}
    }
}

fn one_decimal(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{:.1}{}", v, unit))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
fn Summary(insights: WeeklyInsights) -> impl IntoView {
    let sentiment = insights
        .average_sentiment()
        .map(|s| s.label())
        .unwrap_or("-");

    view! {
        <div class="insight-cards">
            <div class="insight-card">
                <span class="insight-value">{one_decimal(insights.mood.average_mood, "")}</span>
                <span class="insight-label">"Average mood"</span>
            </div>
            <div class="insight-card">
                <span class="insight-value">{sentiment}</span>
                <span class="insight-label">"Overall sentiment"</span>
            </div>
            <div class="insight-card">
                <span class="insight-value">{insights.mood.total_entries}</span>
                <span class="insight-label">"Mood entries"</span>
            </div>
            <div class="insight-card">
                <span class="insight-value">
                    {one_decimal(insights.journal.average_sleep_duration, " h")}
                </span>
                <span class="insight-label">"Average sleep"</span>
            </div>
        </div>
    }
}
