//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the Disare API.
//! Field names match the backend's JSON exactly.

use serde::{Deserialize, Serialize};

/// Numeric Telegram user identifier, the only identity the API knows
pub type TelegramId = i64;

// ============================================
// AUTH DTOs
// ============================================

/// Response from `POST /auth/telegram`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Backend row id
    #[serde(default)]
    pub user_id: Option<i64>,
    pub telegram_id: TelegramId,
    #[serde(default)]
    pub username: Option<String>,
}

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================
// MOOD DTOs
// ============================================

/// Body of `POST /mood/track`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRequest {
    pub telegram_id: TelegramId,
    /// 1-5 scale
    pub mood_level: u8,
    /// Sent verbatim, empty when the user left it blank
    pub comment: String,
}

/// Stored mood entry as echoed back by the API
///
/// Every field is optional: the front end only cares that the call
/// succeeded, so any JSON object is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub mood_level: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Item of `GET /mood/history/{telegram_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodHistoryItem {
    pub mood_level: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /mood/stats/{telegram_id}` (last 7 days)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodStats {
    #[serde(default)]
    pub average_mood: Option<f64>,
    #[serde(default)]
    pub average_sentiment: Option<f64>,
    #[serde(default)]
    pub sentiment_distribution: Option<SentimentDistribution>,
    #[serde(default)]
    pub total_entries: u32,
}

/// Count of scored comments per sentiment bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(default)]
    pub very_positive: u32,
    #[serde(default)]
    pub positive: u32,
    #[serde(default)]
    pub neutral: u32,
    #[serde(default)]
    pub negative: u32,
    #[serde(default)]
    pub very_negative: u32,
}

// ============================================
// CHAT DTOs
// ============================================

/// Body of `POST /chat/send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub telegram_id: TelegramId,
    pub message: String,
}

/// Response of `POST /chat/send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Responder text appended to the chat log
    pub response: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Item of `GET /chat/history/{telegram_id}`, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    pub message: String,
    pub response: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ============================================
// JOURNAL DTOs
// ============================================

/// Body of `POST /journal/entry`
///
/// Absent sleep times serialize as explicit `null`, never as missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRequest {
    pub telegram_id: TelegramId,
    /// UTC ISO-8601 (`2024-03-01T22:30:00.000Z`) or null
    pub sleep_start: Option<String>,
    pub sleep_end: Option<String>,
    pub nutrition_notes: String,
}

/// Stored journal entry as echoed back by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub sleep_start: Option<String>,
    #[serde(default)]
    pub sleep_end: Option<String>,
    #[serde(default)]
    pub nutrition_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Item of `GET /journal/entries/{telegram_id}`, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalHistoryItem {
    #[serde(default)]
    pub sleep_start: Option<String>,
    #[serde(default)]
    pub sleep_end: Option<String>,
    #[serde(default)]
    pub nutrition_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /journal/stats/{telegram_id}` (last 7 days)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalStats {
    /// Hours
    #[serde(default)]
    pub average_sleep_duration: Option<f64>,
    #[serde(default)]
    pub total_entries: u32,
}

/// Filters for `GET /journal/entries/{telegram_id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_journal_request_keeps_null_keys() {
        let req = JournalRequest {
            telegram_id: 7,
            sleep_start: None,
            sleep_end: None,
            nutrition_notes: String::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "telegram_id": 7,
                "sleep_start": null,
                "sleep_end": null,
                "nutrition_notes": ""
            })
        );
    }

    #[test]
    fn test_auth_response_minimal() {
        let auth: AuthResponse = serde_json::from_str(r#"{"telegram_id": 42}"#).unwrap();
        assert_eq!(auth.telegram_id, 42);
        assert_eq!(auth.user_id, None);
        assert_eq!(auth.username, None);
    }

    #[test]
    fn test_mood_record_accepts_any_object() {
        let record: MoodRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, MoodRecord::default());

        let record: MoodRecord = serde_json::from_value(json!({
            "id": 3,
            "mood_level": 4,
            "comment": null,
            "sentiment_score": null,
            "sentiment_text": null,
            "created_at": "2024-03-01T10:00:00.123456"
        }))
        .unwrap();
        assert_eq!(record.mood_level, Some(4));
    }

    #[test]
    fn test_chat_reply_requires_response() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"timestamp": "x"}"#).is_err());
    }

    #[test]
    fn test_empty_mood_stats() {
        let stats: MoodStats = serde_json::from_value(json!({
            "average_mood": null,
            "average_sentiment": null,
            "sentiment_distribution": null,
            "total_entries": 0
        }))
        .unwrap();
        assert_eq!(stats, MoodStats::default());
    }
}
