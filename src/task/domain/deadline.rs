//! Deadline parsing shared by the HTTP surface and the client.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, Utc};

/// Parses a deadline given either as a calendar date (`YYYY-MM-DD`, read as
/// midnight UTC) or as an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] when neither form matches.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let value = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TaskDomainError::InvalidDeadline(raw.to_owned()))
}
