//! Journal panel
//!
//! Sleep window and nutrition notes. Sleep times arrive as `datetime-local`
//! strings and leave as UTC ISO-8601.

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, SecondsFormat,
    TimeZone, Utc,
};
use thiserror::Error;

use super::{alerts, MiniApp, SubmitError};
use crate::client::{JournalRecord, JournalRequest, TelegramId, Transport};
use crate::host::Host;

/// Formats a `datetime-local` input can produce
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Zone used to interpret local date-time inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    /// The device's zone (the browser's in WASM)
    #[default]
    System,
    Fixed(FixedOffset),
}

/// Input that is not a date-time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid local date-time: {0:?}")]
pub struct InvalidDateTime(pub String);

/// Normalize a local date-time input to UTC ISO-8601 with milliseconds
///
/// Blank input yields `Ok(None)`.
pub fn to_utc_iso(input: &str, zone: LocalZone) -> Result<Option<String>, InvalidDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let invalid = || InvalidDateTime(input.to_string());

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(invalid)?;

    let utc = match zone {
        LocalZone::System => resolve_local(&Local, &naive),
        LocalZone::Fixed(offset) => resolve_local(&offset, &naive),
    }
    .ok_or_else(invalid)?;

    Ok(Some(utc.to_rfc3339_opts(SecondsFormat::Millis, true)))
}

/// Resolve a wall-clock time in `zone` the way browsers do
///
/// A repeated time (clocks set back) takes the earlier instant. A skipped
/// time (clocks set forward) is read with the offset in effect before the
/// transition, so it lands just after the gap.
fn resolve_local<Tz: TimeZone>(zone: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => Some(a.with_timezone(&Utc).min(b.with_timezone(&Utc))),
        LocalResult::None => {
            let day_before = naive.checked_sub_signed(Duration::days(1))?;
            let offset = zone.offset_from_utc_datetime(&day_before).fix();
            let utc = naive.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Form fields of the journal panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalForm {
    pub sleep_start: String,
    pub sleep_end: String,
    pub nutrition_notes: String,
}

impl JournalForm {
    pub fn clear(&mut self) {
        self.sleep_start.clear();
        self.sleep_end.clear();
        self.nutrition_notes.clear();
    }

    fn to_request(&self, telegram_id: TelegramId, zone: LocalZone) -> Result<JournalRequest, SubmitError> {
        Ok(JournalRequest {
            telegram_id,
            sleep_start: normalize_field("sleep_start", &self.sleep_start, zone)?,
            sleep_end: normalize_field("sleep_end", &self.sleep_end, zone)?,
            nutrition_notes: self.nutrition_notes.clone(),
        })
    }
}

fn normalize_field(field: &'static str, value: &str, zone: LocalZone) -> Result<Option<String>, SubmitError> {
    to_utc_iso(value, zone).map_err(|_| SubmitError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

impl<T: Transport, H: Host> MiniApp<T, H> {
    pub fn set_sleep_start(&self, value: impl Into<String>) {
        self.journal.borrow_mut().sleep_start = value.into();
        self.notify();
    }

    pub fn set_sleep_end(&self, value: impl Into<String>) {
        self.journal.borrow_mut().sleep_end = value.into();
        self.notify();
    }

    pub fn set_nutrition_notes(&self, value: impl Into<String>) {
        self.journal.borrow_mut().nutrition_notes = value.into();
        self.notify();
    }

    pub fn journal_form(&self) -> JournalForm {
        self.journal.borrow().clone()
    }

    /// Save the journal entry; fields reset only on success
    pub async fn save_journal(&self) -> Result<JournalRecord, SubmitError> {
        let form = self.journal.borrow().clone();

        match self.post_journal(&form).await {
            Ok(record) => {
                self.host.show_alert(alerts::JOURNAL_SAVED);
                self.journal.borrow_mut().clear();
                self.notify();
                Ok(record)
            }
            Err(e) => {
                self.report_failure("saving journal entry", &e, alerts::JOURNAL_FAILED);
                Err(e)
            }
        }
    }

    async fn post_journal(&self, form: &JournalForm) -> Result<JournalRecord, SubmitError> {
        let request = form.to_request(self.telegram_id()?, self.zone)?;
        Ok(self.client.save_journal(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::app_with_session;
    use super::*;
    use crate::client::ApiResponse;
    use futures_util::{pin_mut, poll};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn utc_plus_3() -> LocalZone {
        LocalZone::Fixed(FixedOffset::east_opt(3 * 3600).unwrap())
    }

    #[test]
    fn test_to_utc_iso_formats() {
        let zone = utc_plus_3();
        assert_eq!(
            to_utc_iso("2024-03-01T23:30", zone),
            Ok(Some("2024-03-01T20:30:00.000Z".to_string()))
        );
        assert_eq!(
            to_utc_iso("2024-03-02T01:15:45", zone),
            Ok(Some("2024-03-01T22:15:45.000Z".to_string()))
        );
        assert_eq!(
            to_utc_iso("2024-03-01T00:00", LocalZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())),
            Ok(Some("2024-03-01T05:00:00.000Z".to_string()))
        );
    }

    #[test]
    fn test_to_utc_iso_blank_and_invalid() {
        assert_eq!(to_utc_iso("", utc_plus_3()), Ok(None));
        assert_eq!(to_utc_iso("   ", utc_plus_3()), Ok(None));
        assert_eq!(
            to_utc_iso("last night", utc_plus_3()),
            Err(InvalidDateTime("last night".to_string()))
        );
        assert!(to_utc_iso("2024-02-30T10:00", utc_plus_3()).is_err());
    }

    /// US Eastern rules for 2024: EDT from 03-10 07:00Z to 11-03 06:00Z
    #[derive(Debug, Clone, Copy)]
    struct Eastern2024;

    impl Eastern2024 {
        fn est() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn edt() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }
    }

    impl TimeZone for Eastern2024 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Eastern2024
        }

        fn offset_from_local_date(&self, local: &chrono::NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            // Later instant first, so callers cannot rely on the order
            let fits = |offset: FixedOffset| {
                let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
                self.offset_from_utc_datetime(&utc) == offset
            };
            match (fits(Self::est()), fits(Self::edt())) {
                (true, true) => LocalResult::Ambiguous(Self::est(), Self::edt()),
                (true, false) => LocalResult::Single(Self::est()),
                (false, true) => LocalResult::Single(Self::edt()),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &chrono::NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            let start = "2024-03-10T07:00:00".parse::<NaiveDateTime>().unwrap();
            let end = "2024-11-03T06:00:00".parse::<NaiveDateTime>().unwrap();
            if *utc >= start && *utc < end {
                Self::edt()
            } else {
                Self::est()
            }
        }
    }

    fn eastern(input: &str) -> String {
        let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M").unwrap();
        resolve_local(&Eastern2024, &naive)
            .unwrap()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[test]
    fn test_repeated_local_time_takes_earlier_instant() {
        assert_eq!(eastern("2024-11-03T01:30"), "2024-11-03T05:30:00.000Z");
    }

    #[test]
    fn test_skipped_local_time_uses_offset_before_gap() {
        assert_eq!(eastern("2024-03-10T02:30"), "2024-03-10T07:30:00.000Z");
    }

    #[test]
    fn test_regular_local_times_in_zone_with_dst() {
        assert_eq!(eastern("2024-01-15T08:00"), "2024-01-15T13:00:00.000Z");
        assert_eq!(eastern("2024-07-04T20:45"), "2024-07-05T00:45:00.000Z");
        assert_eq!(eastern("2024-11-03T02:30"), "2024-11-03T07:30:00.000Z");
    }

    #[tokio::test]
    async fn test_blank_sleep_fields_sent_as_null() {
        let (app, transport, _host) = app_with_session(42);
        transport.reply_json("/journal/entry", json!({"id": 1}));

        app.save_journal().await.unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({
                "telegram_id": 42,
                "sleep_start": null,
                "sleep_end": null,
                "nutrition_notes": ""
            }))
        );
    }

    #[tokio::test]
    async fn test_filled_fields_normalized_and_reset() {
        let (app, transport, host) = app_with_session(42);
        let app = app.with_zone(utc_plus_3());
        transport.reply_json("/journal/entry", json!({}));

        app.set_sleep_start("2024-03-01T23:30");
        app.set_sleep_end("2024-03-02T07:10");
        app.set_nutrition_notes("oatmeal, two coffees");
        app.save_journal().await.unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({
                "telegram_id": 42,
                "sleep_start": "2024-03-01T20:30:00.000Z",
                "sleep_end": "2024-03-02T04:10:00.000Z",
                "nutrition_notes": "oatmeal, two coffees"
            }))
        );
        assert_eq!(host.alerts(), vec![alerts::JOURNAL_SAVED.to_string()]);
        assert_eq!(app.journal_form(), JournalForm::default());
    }

    #[tokio::test]
    async fn test_failure_retains_fields() {
        let (app, transport, host) = app_with_session(42);
        transport.reply("/journal/entry", ApiResponse::new(400, r#"{"detail":"Sleep start time must be before sleep end time"}"#));

        app.set_sleep_start("2024-03-02T07:00");
        app.set_sleep_end("2024-03-01T23:00");
        app.set_nutrition_notes("salad");
        let before = app.journal_form();

        assert!(app.save_journal().await.is_err());
        assert_eq!(app.journal_form(), before);
        assert_eq!(host.alerts(), vec![alerts::JOURNAL_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_timestamp_never_sent() {
        let (app, transport, host) = app_with_session(42);

        app.set_sleep_start("tonight");
        let err = app.save_journal().await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::InvalidTimestamp {
                field: "sleep_start",
                value: "tonight".to_string()
            }
        );
        assert!(transport.requests().is_empty());
        assert_eq!(host.alerts(), vec![alerts::JOURNAL_FAILED.to_string()]);
        assert_eq!(app.journal_form().sleep_start, "tonight");
    }

    #[tokio::test]
    async fn test_double_save_sends_twice() {
        let (app, transport, host) = app_with_session(42);
        let first_gate = transport.gate("/journal/entry");
        let second_gate = transport.gate("/journal/entry");

        app.set_nutrition_notes("soup");
        let first = app.save_journal();
        pin_mut!(first);
        assert!(poll!(first.as_mut()).is_pending());

        let second = app.save_journal();
        pin_mut!(second);
        assert!(poll!(second.as_mut()).is_pending());

        let bodies: Vec<_> = transport.requests().into_iter().map(|r| r.body).collect();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], bodies[1]);

        let _ = second_gate.send(Ok(ApiResponse::ok_json(&json!({"id": 2}))));
        second.await.unwrap();
        let _ = first_gate.send(Ok(ApiResponse::ok_json(&json!({"id": 1}))));
        first.await.unwrap();

        assert_eq!(
            host.alerts(),
            vec![alerts::JOURNAL_SAVED.to_string(), alerts::JOURNAL_SAVED.to_string()]
        );
    }
}
