//! Session
//!
//! The authenticated identity, set once by bootstrap and never refreshed.

use crate::client::{AuthResponse, TelegramId};

/// Identity obtained from `POST /auth/telegram`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub telegram_id: TelegramId,
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

impl Session {
    /// Username when known, otherwise the numeric id
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(name) if !name.is_empty() => format!("@{}", name),
            _ => format!("user {}", self.telegram_id),
        }
    }
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            telegram_id: auth.telegram_id,
            user_id: auth.user_id,
            username: auth.username,
        }
    }
}
