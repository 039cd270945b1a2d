//! Calendar due dates.

use super::DueDateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Due date kept in its ISO 8601 textual form.
///
/// New input is validated on entry, but records loaded from persistence keep
/// whatever string was stored. Reading the calendar date is therefore
/// fallible, and an unparsable value is reported as [`DueDateError`] rather
/// than treated as "no due date".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    /// Validates user-supplied due date input.
    ///
    /// Blank input means "no due date" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError`] when the input is not an ISO 8601 date or
    /// date-time.
    pub fn parse_input(value: &str) -> Result<Option<Self>, DueDateError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        parse_calendar_date(trimmed)?;
        Ok(Some(Self(trimmed.to_owned())))
    }

    /// Creates a due date from a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// Wraps a stored value without validating it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError`] when the stored text is not a valid date.
    pub fn date(&self) -> Result<NaiveDate, DueDateError> {
        parse_calendar_date(self.0.trim())
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and offset-less local
/// timestamps; the calendar day is taken in UTC for timestamps with an offset.
fn parse_calendar_date(value: &str) -> Result<NaiveDate, DueDateError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, LOCAL_DATETIME_FORMAT)
        .map(|timestamp| timestamp.date())
        .map_err(|_| DueDateError(value.to_owned()))
}
