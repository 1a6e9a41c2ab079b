//! Insights panel
//!
//! Weekly mood and sleep summaries computed by the backend.

use futures_util::future;
use serde::Serialize;

use super::{alerts, MiniApp, SubmitError};
use crate::client::{JournalStats, MoodStats, Transport};
use crate::host::Host;

/// Last loaded weekly statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub mood: MoodStats,
    pub journal: JournalStats,
}

impl Insights {
    /// Label for the week's average sentiment, if any comment was scored
    pub fn average_sentiment(&self) -> Option<Sentiment> {
        self.mood.average_sentiment.map(Sentiment::from_score)
    }
}

/// Sentiment bucket of a comment score in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Sentiment {
    /// Same thresholds the backend uses for its distribution
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Sentiment::VeryPositive
        } else if score > 0.1 {
            Sentiment::Positive
        } else if score > -0.1 {
            Sentiment::Neutral
        } else if score > -0.5 {
            Sentiment::Negative
        } else {
            Sentiment::VeryNegative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "Very positive",
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::VeryNegative => "Very negative",
        }
    }
}

impl<T: Transport, H: Host> MiniApp<T, H> {
    pub fn insights(&self) -> Option<Insights> {
        self.insights.borrow().clone()
    }

    /// Reload both weekly summaries; the previous ones stay on failure
    pub async fn refresh_insights(&self) -> Result<Insights, SubmitError> {
        match self.fetch_insights().await {
            Ok(insights) => {
                *self.insights.borrow_mut() = Some(insights.clone());
                self.notify();
                Ok(insights)
            }
            Err(e) => {
                self.report_failure("loading insights", &e, alerts::INSIGHTS_FAILED);
                Err(e)
            }
        }
    }

    async fn fetch_insights(&self) -> Result<Insights, SubmitError> {
        let telegram_id = self.telegram_id()?;
        let (mood, journal) = future::try_join(
            self.client.mood_stats(telegram_id),
            self.client.journal_stats(telegram_id),
        )
        .await?;
        Ok(Insights { mood, journal })
    }
}
