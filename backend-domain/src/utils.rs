use chrono::NaiveDate;

use crate::error::EventError;

pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

// chrono's %Y takes 1-4 digits and year 0; the year must be exactly four
// digits and at least 0001.
pub fn parse_event_date(value: &str) -> Result<NaiveDate, EventError> {
    let invalid = || EventError::InvalidDateFormat(value.to_string());
    let year = value.split('-').next().unwrap_or_default();
    if year.len() != 4
        || !year.bytes().all(|b| b.is_ascii_digit())
        || year == "0000"
        || value.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_event_date(date: &NaiveDate) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

pub mod event_date {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_event_date(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_event_date(&raw).map_err(D::Error::custom)
    }
}
