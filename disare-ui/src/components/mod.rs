//! UI Components
//!
//! Reusable Leptos components shared by the panels.

pub mod loading;
pub mod nav;
pub mod screen;

pub use loading::InlineLoading;
pub use nav::Nav;
pub use screen::Screen;
