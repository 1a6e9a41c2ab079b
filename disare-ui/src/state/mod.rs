//! State Management
//!
//! The shared controller and its change trigger.

pub mod context;

pub use context::{provide_app, use_app, AppContext, UiApp};
