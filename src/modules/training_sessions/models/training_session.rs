use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{parse_calendar_date, Result};

/// A scheduled training session.
///
/// `selected_players` and `selected_exercises` are comma-joined identifier
/// lists (e.g. `"p1,p2,p3"`). They are stored as given and may reference
/// records that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TrainingSession {
    pub id: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Free-form clock text such as `"09:00 AM"`
    pub start_time: String,
    pub end_time: String,
    pub focus: String,
    pub intensity: String,
    pub selected_players: String,
    pub selected_exercises: String,
}

/// Create/replace payload for a training session. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSessionCreate {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub focus: String,
    pub intensity: String,
    pub selected_players: String,
    pub selected_exercises: String,
}

impl TrainingSession {
    /// Map a payload to a row, parsing the calendar date.
    ///
    /// # Errors
    /// `AppError::InvalidDate` when `date` is not a valid `YYYY-MM-DD` date.
    pub fn from_payload(id: String, payload: TrainingSessionCreate) -> Result<Self> {
        Ok(Self {
            id,
            date: parse_calendar_date(&payload.date)?,
            start_time: payload.start_time,
            end_time: payload.end_time,
            focus: payload.focus,
            intensity: payload.intensity,
            selected_players: payload.selected_players,
            selected_exercises: payload.selected_exercises,
        })
    }
}
