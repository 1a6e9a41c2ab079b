//! Screen Component
//!
//! Panel container; exactly one is marked `active` at a time.

use disare::panel::Panel;
use leptos::*;

use crate::state::use_app;

#[component]
pub fn Screen(panel: Panel, children: Children) -> impl IntoView {
    let ctx = use_app();

    let class = move || {
        ctx.track();
        if ctx.app.is_active(panel) {
            "screen active"
        } else {
            "screen"
        }
    };

    view! {
        <section id=panel.id() class=class>
            {children()}
        </section>
    }
}
