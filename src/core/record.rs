use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Calendar date format accepted for training session dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generate a fresh opaque record identifier (UUID v4, hyphenated)
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is rejected; chrono would otherwise skip it.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    if raw.trim() != raw {
        return Err(AppError::internal(format!(
            "Calendar date has surrounding whitespace: {:?}",
            raw
        )));
    }
    Ok(NaiveDate::parse_from_str(raw, DATE_FORMAT)?)
}

/// Serde default for optional text fields that fall back to an empty string
/// when omitted. An explicit `null` still deserializes to `None`.
pub fn empty_text() -> Option<String> {
    Some(String::new())
}
