//! Disare Mini App
//!
//! Mental health companion running inside Telegram, built with Leptos (WASM).
//!
//! # Features
//!
//! - Mood tracking on a five-point scale
//! - Chat with the assistant
//! - Sleep and nutrition journal
//! - Weekly insights
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. All
//! behaviour lives in the `disare` core; this crate supplies the browser
//! transport, the Telegram host bridge and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod telegram;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
