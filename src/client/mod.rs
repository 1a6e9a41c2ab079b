//! Disare API Client
//!
//! Typed calls for every endpoint the mini app uses. Requests go through a
//! [`Transport`]; this layer owns status checking and JSON decoding.
//!
//! # Endpoints
//!
//! - `POST /auth/telegram` - exchange init data for an identity
//! - `POST /auth/phone` - attach a phone number
//! - `POST /mood/track`, `GET /mood/history/:id`, `GET /mood/stats/:id`
//! - `POST /chat/send`, `GET /chat/history/:id`
//! - `POST /journal/entry`, `GET /journal/entries/:id`, `GET /journal/stats/:id`

pub mod dto;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod transport;

pub use dto::*;
pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed client over any [`Transport`]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange raw host init data for the user's identity
    ///
    /// The init data is sent as a JSON string literal, untouched.
    pub async fn authenticate(&self, init_data: &str) -> ClientResult<AuthResponse> {
        self.post("/auth/telegram", init_data).await
    }

    /// Attach a phone number to the user's profile
    pub async fn attach_phone(
        &self,
        telegram_id: TelegramId,
        phone_number: &str,
    ) -> ClientResult<MessageResponse> {
        let path = format!(
            "/auth/phone?telegram_id={}&phone_number={}",
            telegram_id,
            urlencoding::encode(phone_number)
        );
        self.execute(ApiRequest::post_empty(path)).await
    }

    pub async fn track_mood(&self, request: &MoodRequest) -> ClientResult<MoodRecord> {
        self.post("/mood/track", request).await
    }

    pub async fn mood_history(
        &self,
        telegram_id: TelegramId,
        limit: Option<u32>,
    ) -> ClientResult<Vec<MoodHistoryItem>> {
        self.get(&with_limit(format!("/mood/history/{}", telegram_id), limit))
            .await
    }

    pub async fn mood_stats(&self, telegram_id: TelegramId) -> ClientResult<MoodStats> {
        self.get(&format!("/mood/stats/{}", telegram_id)).await
    }

    pub async fn send_chat(&self, request: &ChatRequest) -> ClientResult<ChatReply> {
        self.post("/chat/send", request).await
    }

    pub async fn chat_history(
        &self,
        telegram_id: TelegramId,
        limit: Option<u32>,
    ) -> ClientResult<Vec<ChatHistoryItem>> {
        self.get(&with_limit(format!("/chat/history/{}", telegram_id), limit))
            .await
    }

    pub async fn save_journal(&self, request: &JournalRequest) -> ClientResult<JournalRecord> {
        self.post("/journal/entry", request).await
    }

    pub async fn journal_entries(
        &self,
        telegram_id: TelegramId,
        query: &JournalQuery,
    ) -> ClientResult<Vec<JournalHistoryItem>> {
        let mut params = Vec::new();
        if let Some(start) = query.start_date {
            params.push(format!("start_date={}", start));
        }
        if let Some(end) = query.end_date {
            params.push(format!("end_date={}", end));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={}", limit));
        }

        let mut path = format!("/journal/entries/{}", telegram_id);
        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }

        self.get(&path).await
    }

    pub async fn journal_stats(&self, telegram_id: TelegramId) -> ClientResult<JournalStats> {
        self.get(&format!("/journal/stats/{}", telegram_id)).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.execute(ApiRequest::get(path)).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.execute(ApiRequest::post(path, body)).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<R> {
        tracing::debug!(method = %request.method, path = %request.path, "API request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn with_limit(mut path: String, limit: Option<u32>) -> String {
    if let Some(limit) = limit {
        path.push_str(&format!("?limit={}", limit));
    }
    path
}
