//! Mini App Controller
//!
//! Owns the session, the active panel and the state of every form, and runs
//! each submission's request/response cycle.
//!
//! # Concurrency
//!
//! Everything runs on one thread. Operations take `&self` and keep state in
//! `RefCell`s that are never borrowed across an `await`, so the user can keep
//! navigating (or submit again) while a request is in flight. Chat replies
//! are appended in completion order.
//!
//! # Failures
//!
//! Every failure is handled where it happens: the detail goes to the
//! diagnostic log and the user sees one static alert. The `Result` each
//! operation returns is informational only.

mod chat;
mod error;
mod insights;
mod journal;
mod mood;

#[cfg(test)]
pub(crate) mod testing;

pub use chat::{ChatTurn, Sender};
pub use error::{BootstrapError, SubmitError};
pub use insights::{Insights, Sentiment};
pub use journal::{to_utc_iso, InvalidDateTime, JournalForm, LocalZone};
pub use mood::{MoodForm, MoodLevel};

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::{ApiClient, TelegramId, Transport};
use crate::host::Host;
use crate::panel::{Panel, PanelSet};
use crate::session::Session;

/// User-facing alert texts
pub mod alerts {
    pub const AUTH_FAILED: &str = "Failed to authenticate. Please try again.";
    pub const SELECT_MOOD: &str = "Please select your mood";
    pub const MOOD_SAVED: &str = "Mood saved successfully!";
    pub const MOOD_FAILED: &str = "Failed to save mood. Please try again.";
    pub const CHAT_FAILED: &str = "Failed to send message. Please try again.";
    pub const JOURNAL_SAVED: &str = "Journal entry saved successfully!";
    pub const JOURNAL_FAILED: &str = "Failed to save journal entry. Please try again.";
    pub const INSIGHTS_FAILED: &str = "Failed to load insights. Please try again.";
}

type Listener = Rc<dyn Fn()>;

/// The mini app: session bootstrap plus the panel controller
pub struct MiniApp<T, H> {
    client: ApiClient<T>,
    host: H,
    zone: LocalZone,
    session: RefCell<Option<Session>>,
    panels: RefCell<PanelSet>,
    mood: RefCell<MoodForm>,
    chat_input: RefCell<String>,
    chat_log: RefCell<Vec<ChatTurn>>,
    journal: RefCell<JournalForm>,
    insights: RefCell<Option<Insights>>,
    listeners: RefCell<Vec<Listener>>,
}

impl<T: Transport, H: Host> MiniApp<T, H> {
    /// Create the app on the welcome panel with no session
    pub fn new(client: ApiClient<T>, host: H) -> Self {
        Self {
            client,
            host,
            zone: LocalZone::System,
            session: RefCell::new(None),
            panels: RefCell::new(PanelSet::new()),
            mood: RefCell::new(MoodForm::default()),
            chat_input: RefCell::new(String::new()),
            chat_log: RefCell::new(Vec::new()),
            journal: RefCell::new(JournalForm::default()),
            insights: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Interpret journal date-times in `zone` instead of the system zone
    pub fn with_zone(mut self, zone: LocalZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register a callback run after every state change
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        // Snapshot so a listener may subscribe without a double borrow
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    // ============================================
    // Session bootstrap
    // ============================================

    /// Expand the viewport and exchange the host's init data for a session
    ///
    /// Runs once at load. Without init data it gives up silently; an
    /// authentication failure alerts the user and leaves the session unset.
    pub async fn bootstrap(&self) -> Result<Session, BootstrapError> {
        self.host.expand();

        let init_data = match self.host.init_data() {
            Some(data) if !data.is_empty() => data,
            _ => {
                tracing::warn!("No init data from host, session not started");
                self.host.log_error("No init data from Telegram");
                return Err(BootstrapError::MissingInitData);
            }
        };

        match self.client.authenticate(&init_data).await {
            Ok(auth) => {
                let session = Session::from(auth);
                tracing::info!(telegram_id = session.telegram_id, "User authenticated");
                *self.session.borrow_mut() = Some(session.clone());
                self.notify();
                Ok(session)
            }
            Err(e) => {
                tracing::error!("Authentication error: {}", e);
                self.host.log_error(&format!("Authentication error: {}", e));
                self.host.show_alert(alerts::AUTH_FAILED);
                Err(BootstrapError::Auth(e))
            }
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn telegram_id(&self) -> Result<TelegramId, SubmitError> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.telegram_id)
            .ok_or(SubmitError::NotAuthenticated)
    }

    // ============================================
    // Panels
    // ============================================

    pub fn active_panel(&self) -> Panel {
        self.panels.borrow().active()
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.panels.borrow().is_active(panel)
    }

    /// Activate `panel`, deactivating all others; never guarded by session
    pub fn show_panel(&self, panel: Panel) {
        self.panels.borrow_mut().show(panel);
        tracing::debug!(panel = %panel, "Panel shown");
        self.notify();
    }

    /// Leave the splash screen for the mood panel
    pub fn start(&self) {
        self.show_panel(Panel::Mood);
    }

    /// Log the detail, then show the static alert
    fn report_failure(&self, context: &str, err: &SubmitError, alert: &str) {
        tracing::error!("Error {}: {}", context, err);
        self.host.log_error(&format!("Error {}: {}", context, err));
        self.host.show_alert(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{app_with_session, new_app};
    use super::*;
    use crate::client::{ApiResponse, ClientError};
    use serde_json::json;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_bootstrap_success() {
        let (app, transport, host) = new_app();
        host.set_init_data("query_id=AAE&hash=ff");
        transport.reply_json("/auth/telegram", json!({"user_id": 9, "telegram_id": 42, "username": "ann"}));

        let session = app.bootstrap().await.unwrap();
        assert_eq!(session.telegram_id, 42);
        assert_eq!(app.session(), Some(session));
        assert_eq!(host.expand_calls(), 1);
        assert!(host.alerts().is_empty());

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/auth/telegram");
        assert_eq!(requests[0].body, Some(json!("query_id=AAE&hash=ff")));
    }

    #[tokio::test]
    async fn test_bootstrap_without_init_data_is_silent() {
        let (app, transport, host) = new_app();

        let err = app.bootstrap().await.unwrap_err();
        assert_eq!(err, BootstrapError::MissingInitData);
        assert!(transport.requests().is_empty());
        assert!(host.alerts().is_empty());
        assert!(app.session().is_none());
        assert_eq!(host.expand_calls(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_rejected_alerts() {
        let (app, transport, host) = new_app();
        host.set_init_data("tampered");
        transport.reply("/auth/telegram", ApiResponse::new(401, r#"{"detail":"Invalid authentication"}"#));

        let err = app.bootstrap().await.unwrap_err();
        assert!(matches!(err, BootstrapError::Auth(ClientError::Status { status: 401, .. })));
        assert_eq!(host.alerts(), vec![alerts::AUTH_FAILED.to_string()]);
        assert!(host.diagnostics()[0].contains("401"));
        assert!(app.session().is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_transport_failure_alerts() {
        let (app, transport, host) = new_app();
        host.set_init_data("query_id=AAE");
        transport.fail("/auth/telegram", ClientError::Transport("connection refused".to_string()));

        assert!(app.bootstrap().await.is_err());
        assert_eq!(host.alerts(), vec![alerts::AUTH_FAILED.to_string()]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_show_panel_ignores_session() {
        let (app, _transport, _host) = new_app();
        assert_eq!(app.active_panel(), Panel::Welcome);

        for panel in Panel::ALL {
            app.show_panel(panel);
            let active: Vec<Panel> = Panel::ALL.into_iter().filter(|p| app.is_active(*p)).collect();
            assert_eq!(active, vec![panel]);
        }

        app.show_panel(Panel::Journal);
        app.start();
        assert_eq!(app.active_panel(), Panel::Mood);
    }

    #[test]
    fn test_listeners_notified() {
        let (app, _transport, _host) = app_with_session(1);
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        app.subscribe(move || seen.set(seen.get() + 1));

        app.show_panel(Panel::Chat);
        app.set_chat_input("hello");
        assert_eq!(count.get(), 2);
    }

    #[tokio::test]
    async fn test_submission_without_session_fails_at_identity() {
        let (app, transport, host) = new_app();

        app.select_mood(MoodLevel::new(2).unwrap());
        let err = app.submit_mood().await.unwrap_err();
        assert_eq!(err, SubmitError::NotAuthenticated);
        assert!(transport.requests().is_empty());
        assert_eq!(host.alerts(), vec![alerts::MOOD_FAILED.to_string()]);
        assert_eq!(app.selected_mood(), MoodLevel::new(2));
    }
}
