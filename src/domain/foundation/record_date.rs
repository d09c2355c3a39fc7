//! Calendar date attached to records (enrollment, visit, award dates).

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A calendar day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDate(NaiveDate);

impl RecordDate {
    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Wraps an existing date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its parts, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
    }

    /// Returns the inner date.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }
}

impl Default for RecordDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for RecordDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("date", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date: RecordDate = "2024-01-15".parse().unwrap();
        assert_eq!(date, RecordDate::from_ymd(2024, 1, 15).unwrap());
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = RecordDate::parse("visit_date", "15/01/2024").unwrap_err();
        assert_eq!(err.field(), "visit_date");
    }

    #[test]
    fn today_matches_utc_calendar_day() {
        assert_eq!(RecordDate::today().as_naive(), &Utc::now().date_naive());
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = RecordDate::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-02-01\"");
    }
}
