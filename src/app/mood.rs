//! Mood panel
//!
//! Five-point mood buttons plus an optional comment.

use std::fmt;

use super::{alerts, MiniApp, SubmitError};
use crate::client::{MoodRecord, MoodRequest, Transport};
use crate::host::Host;

/// Selected mood button, 1 (worst) to 5 (best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// `None` outside 1..=5
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// All buttons in display order
    pub fn all() -> impl Iterator<Item = MoodLevel> {
        (Self::MIN..=Self::MAX).map(MoodLevel)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn emoji(&self) -> &'static str {
        match self.0 {
            1 => "😢",
            2 => "😕",
            3 => "😐",
            4 => "🙂",
            _ => "😄",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Awful",
            2 => "Bad",
            3 => "Okay",
            4 => "Good",
            _ => "Great",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Form fields of the mood panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodForm {
    pub selected: Option<MoodLevel>,
    pub comment: String,
}

impl MoodForm {
    pub fn clear(&mut self) {
        self.selected = None;
        self.comment.clear();
    }
}

impl<T: Transport, H: Host> MiniApp<T, H> {
    /// Mark `level` selected, replacing any previous selection
    pub fn select_mood(&self, level: MoodLevel) {
        self.mood.borrow_mut().selected = Some(level);
        self.notify();
    }

    pub fn selected_mood(&self) -> Option<MoodLevel> {
        self.mood.borrow().selected
    }

    pub fn set_mood_comment(&self, comment: impl Into<String>) {
        self.mood.borrow_mut().comment = comment.into();
        self.notify();
    }

    pub fn mood_comment(&self) -> String {
        self.mood.borrow().comment.clone()
    }

    /// Submit the selected mood and comment
    ///
    /// Without a selection nothing is sent. The form is cleared only on
    /// success.
    pub async fn submit_mood(&self) -> Result<MoodRecord, SubmitError> {
        let form = self.mood.borrow().clone();

        let level = match form.selected {
            Some(level) => level,
            None => {
                self.host.show_alert(alerts::SELECT_MOOD);
                return Err(SubmitError::MissingMood);
            }
        };

        match self.track_mood(level, form.comment).await {
            Ok(record) => {
                self.host.show_alert(alerts::MOOD_SAVED);
                self.mood.borrow_mut().clear();
                self.notify();
                Ok(record)
            }
            Err(e) => {
                self.report_failure("saving mood", &e, alerts::MOOD_FAILED);
                Err(e)
            }
        }
    }

    async fn track_mood(&self, level: MoodLevel, comment: String) -> Result<MoodRecord, SubmitError> {
        let request = MoodRequest {
            telegram_id: self.telegram_id()?,
            mood_level: level.value(),
            comment,
        };
        Ok(self.client.track_mood(&request).await?)
    }
}
