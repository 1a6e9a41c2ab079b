//! Test doubles for the controller: a scripted transport and a recording host.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use tokio::sync::oneshot;

use super::MiniApp;
use crate::client::{ApiClient, ApiRequest, ApiResponse, ClientError, ClientResult, Transport};
use crate::host::Host;
use crate::session::Session;

enum Reply {
    Ready(ClientResult<ApiResponse>),
    Gated(oneshot::Receiver<ClientResult<ApiResponse>>),
}

/// Transport answering from per-path queues and recording every request
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply(&self, path: &str, response: ApiResponse) {
        self.push(path, Reply::Ready(Ok(response)));
    }

    pub fn reply_json(&self, path: &str, body: serde_json::Value) {
        self.reply(path, ApiResponse::ok_json(&body));
    }

    pub fn fail(&self, path: &str, error: ClientError) {
        self.push(path, Reply::Ready(Err(error)));
    }

    /// Queue a reply that resolves only when the returned sender fires
    pub fn gate(&self, path: &str) -> oneshot::Sender<ClientResult<ApiResponse>> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);

        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&path)
            .and_then(|queue| queue.pop_front());

        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Transport("gate dropped".to_string()))),
            None => Err(ClientError::Transport(format!("no mock reply for {}", path))),
        }
    }
}

/// Host recording alerts and expand calls
#[derive(Default)]
pub struct RecordingHost {
    init_data: RefCell<Option<String>>,
    alerts: RefCell<Vec<String>>,
    diagnostics: RefCell<Vec<String>>,
    expands: Cell<usize>,
}

impl RecordingHost {
    pub fn set_init_data(&self, data: &str) {
        *self.init_data.borrow_mut() = Some(data.to_string());
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.borrow().clone()
    }

    pub fn expand_calls(&self) -> usize {
        self.expands.get()
    }
}

impl Host for RecordingHost {
    fn init_data(&self) -> Option<String> {
        self.init_data.borrow().clone()
    }

    fn show_alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn expand(&self) {
        self.expands.set(self.expands.get() + 1);
    }

    fn log_error(&self, message: &str) {
        self.diagnostics.borrow_mut().push(message.to_string());
    }
}

pub type TestApp = MiniApp<Rc<MockTransport>, Rc<RecordingHost>>;

/// Fresh app with no session
pub fn new_app() -> (TestApp, Rc<MockTransport>, Rc<RecordingHost>) {
    let transport = Rc::new(MockTransport::new());
    let host = Rc::new(RecordingHost::default());
    let app = MiniApp::new(ApiClient::new(Rc::clone(&transport)), Rc::clone(&host));
    (app, transport, host)
}

/// App already authenticated as `telegram_id`
pub fn app_with_session(telegram_id: i64) -> (TestApp, Rc<MockTransport>, Rc<RecordingHost>) {
    let (app, transport, host) = new_app();
    *app.session.borrow_mut() = Some(Session {
        telegram_id,
        user_id: Some(1),
        username: None,
    });
    (app, transport, host)
}
