//! Chat panel
//!
//! Append-only log of turns. The user's turn is shown before the request is
//! sent and is kept even when the request fails.

use super::{alerts, MiniApp, SubmitError};
use crate::client::{ChatRequest, Transport};
use crate::host::Host;

/// Who produced a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Responder,
}

impl Sender {
    /// CSS class of the message bubble
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "message user-message",
            Sender::Responder => "message ai-message",
        }
    }
}

/// One displayed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn responder(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Responder,
            text: text.into(),
        }
    }
}

impl<T: Transport, H: Host> MiniApp<T, H> {
    pub fn set_chat_input(&self, text: impl Into<String>) {
        *self.chat_input.borrow_mut() = text.into();
        self.notify();
    }

    pub fn chat_input(&self) -> String {
        self.chat_input.borrow().clone()
    }

    pub fn chat_log(&self) -> Vec<ChatTurn> {
        self.chat_log.borrow().clone()
    }

    fn append_turn(&self, turn: ChatTurn) {
        self.chat_log.borrow_mut().push(turn);
        self.notify();
    }

    /// Send the current draft
    ///
    /// Returns `Ok(None)` without sending when the draft is blank. Otherwise
    /// the trimmed message is logged and the draft cleared immediately, then
    /// the reply is logged when it arrives.
    pub async fn send_chat(&self) -> Result<Option<String>, SubmitError> {
        let message = self.chat_input.borrow().trim().to_string();
        if message.is_empty() {
            return Ok(None);
        }

        self.chat_log.borrow_mut().push(ChatTurn::user(message.clone()));
        self.chat_input.borrow_mut().clear();
        self.notify();

        match self.request_reply(message).await {
            Ok(reply) => {
                self.append_turn(ChatTurn::responder(reply.clone()));
                Ok(Some(reply))
            }
            Err(e) => {
                self.report_failure("sending message", &e, alerts::CHAT_FAILED);
                Err(e)
            }
        }
    }

    async fn request_reply(&self, message: String) -> Result<String, SubmitError> {
        let request = ChatRequest {
            telegram_id: self.telegram_id()?,
            message,
        };
        let reply = self.client.send_chat(&request).await?;
        Ok(reply.response)
    }
}
