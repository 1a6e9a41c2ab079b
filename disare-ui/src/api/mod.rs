//! Browser transport for the Disare API.

pub mod client;

pub use client::{get_api_base, GlooTransport};
