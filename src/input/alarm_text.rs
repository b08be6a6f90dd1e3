use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot read alarm `{0}` (use YYYY-MM-DD HH:MM or HH:MM)")]
pub struct AlarmParseError(pub String);

/// Parse the alarm field of the add form.
///
/// Empty input means no alarm. A bare `HH:MM` is taken as that time on `today`.
pub fn parse_alarm(input: &str, today: NaiveDate) -> Result<Option<NaiveDateTime>, AlarmParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(time));
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Ok(Some(today.and_time(time)));
    }

    Err(AlarmParseError(trimmed.to_string()))
}
