//! # Disare
//!
//! Core of the Disare mental health mini app: the logic behind the
//! Telegram-hosted single-page interface, independent of any UI toolkit.
//!
//! ## Features
//!
//! - **Session bootstrap**: exchange the container's init data for an identity
//! - **Panel controller**: one active screen at a time
//! - **Mood tracking**: five-point scale with an optional comment
//! - **Chat**: optimistic, append-only conversation log
//! - **Journal**: sleep window and nutrition notes
//! - **Insights**: weekly mood and sleep summaries
//!
//! ## Modules
//!
//! - [`client`]: typed API client over a pluggable [`client::Transport`]
//! - [`host`]: the container primitives (init data, alerts, expand)
//! - [`app`]: the controller tying session, panels and forms together
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use disare::app::{MiniApp, MoodLevel};
//! use disare::client::{ApiClient, HttpTransport};
//! use disare::config::Config;
//! use disare::host::Host;
//!
//! struct Terminal(String);
//!
//! impl Host for Terminal {
//!     fn init_data(&self) -> Option<String> { Some(self.0.clone()) }
//!     fn show_alert(&self, message: &str) { println!("{}", message) }
//!     fn expand(&self) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ApiClient::new(HttpTransport::new(&config.api)?);
//!     let app = MiniApp::new(client, Terminal("query_id=...".to_string()));
//!
//!     app.bootstrap().await?;
//!     app.start();
//!     app.select_mood(MoodLevel::new(4).unwrap());
//!     app.set_mood_comment("slept well");
//!     app.submit_mood().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod host;
pub mod panel;
pub mod session;

pub use app::{
    alerts, BootstrapError, ChatTurn, Insights, LocalZone, MiniApp, MoodLevel, Sender, Sentiment,
    SubmitError,
};
pub use client::{ApiClient, ApiRequest, ApiResponse, ClientError, Method, Transport};
#[cfg(feature = "native")]
pub use client::HttpTransport;
pub use config::{generate_default_config, ApiConfig, Config, LoggingConfig};
#[cfg(feature = "native")]
pub use config::{ConfigError, LoadedConfig};
pub use host::Host;
pub use panel::{Panel, PanelParseError, PanelSet};
pub use session::Session;
