//! Pages
//!
//! One component per panel.

pub mod chat;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod welcome;

pub use chat::Chat;
pub use insights::Insights;
pub use journal::Journal;
pub use mood::Mood;
pub use welcome::Welcome;
