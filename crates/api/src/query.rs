//! Shared query parameter types for API handlers.

use dailycheck_core::types::CalendarDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Optional calendar-day filter (`?date=YYYY-MM-DD`).
///
/// Kept as a string so a malformed date becomes a JSON `BAD_REQUEST` error
/// instead of the framework's plain-text query rejection.
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}

impl DateParams {
    /// The parsed date, if one was given.
    pub fn date(&self) -> AppResult<Option<CalendarDate>> {
        self.date
            .as_deref()
            .map(|raw| {
                raw.parse::<CalendarDate>().map_err(|e| {
                    AppError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD: {e}"))
                })
            })
            .transpose()
    }
}
