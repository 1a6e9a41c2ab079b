//! Chat Page
//!
//! Conversation log with a draft input. Enter or the send button submits.

use leptos::*;

use crate::state::{use_app, AppContext};

fn send(ctx: &AppContext) {
    ctx.spawn(|app| async move {
        let _ = app.send_chat().await;
    });
}

#[component]
pub fn Chat() -> impl IntoView {
    let ctx = use_app();

    let messages = {
        let ctx = ctx.clone();
        move || {
            ctx.track();
            ctx.app
                .chat_log()
                .into_iter()
                .map(|turn| view! { <div class=turn.sender.css_class()>{turn.text}</div> })
                .collect_view()
        }
    };

    let draft = {
        let ctx = ctx.clone();
        move || {
            ctx.track();
            ctx.app.chat_input()
        }
    };

    let on_input = {
        let ctx = ctx.clone();
        move |ev: web_sys::Event| ctx.app.set_chat_input(event_target_value(&ev))
    };
    let on_keydown = {
        let ctx = ctx.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                send(&ctx);
            }
        }
    };
    let on_click = move |_| send(&ctx);

    view! {
        <div id="chat-messages" class="chat-messages">
            {messages}
        </div>

        <div class="chat-input">
            <input
                id="message-input"
                type="text"
                placeholder="Type a message..."
                prop:value=draft
                on:input=on_input
                on:keydown=on_keydown
            />
            <button id="send-message" class="primary-btn" on:click=on_click>
                "Send"
            </button>
        </div>
    }
}
