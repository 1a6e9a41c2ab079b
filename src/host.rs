//! Host Runtime
//!
//! The primitives the chat-platform container offers the mini app.

/// Services provided by the embedding container
///
/// In the browser this is the Telegram `WebApp` object; natively it is a
/// terminal; in tests it records what was shown.
pub trait Host {
    /// Opaque signed init payload, `None` when the page was opened outside
    /// the container
    fn init_data(&self) -> Option<String>;

    /// Blocking modal alert
    fn show_alert(&self, message: &str);

    /// Expand the viewport to full height
    fn expand(&self);

    /// Developer-facing diagnostic channel, in addition to `tracing`
    fn log_error(&self, _message: &str) {}
}

impl<H: Host + ?Sized> Host for std::rc::Rc<H> {
    fn init_data(&self) -> Option<String> {
        (**self).init_data()
    }

    fn show_alert(&self, message: &str) {
        (**self).show_alert(message)
    }

    fn expand(&self) {
        (**self).expand()
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message)
    }
}
