//! Public holiday records as delivered by the holiday provider.
//! Dates are kept as fixed-width `YYYY-MM-DD` strings, so lexical order
//! is chronological order and year or day-month matches are plain
//! prefix and suffix comparisons.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::provider::FetchError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single public holiday
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Holiday {
    /// Date of the holiday in `YYYY-MM-DD` format
    pub date: String,
    /// Name in the local language of the country
    #[serde(rename = "localname")]
    pub local_name: String,
    /// Name in English
    pub name: String,
    #[serde(rename = "countrycode", default)]
    pub country_code: String,
    /// Holiday falls on the same calendar day every year
    // Both spellings in one object are a duplicate field and fail decoding
    #[serde(rename = "fixed", alias = "isfixeddate", default)]
    pub is_fixed_date: bool,
    /// Holiday is observed nationwide
    #[serde(rename = "global", alias = "isglobal", default)]
    pub is_global: bool,
}

impl Holiday {
    /// Create a holiday with the flags unset, as decoding does for missing keys
    pub fn new(date: &str, local_name: &str, name: &str) -> Holiday {
        Holiday {
            date: date.to_string(),
            local_name: local_name.to_string(),
            name: name.to_string(),
            country_code: String::new(),
            is_fixed_date: false,
            is_global: false,
        }
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn year(&self) -> Option<i32> {
        self.naive_date().map(|d| d.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.naive_date().map(|d| d.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.naive_date().map(|d| d.day())
    }

    /// Case-insensitive search in both the local and the English name
    pub fn name_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.local_name.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }

    fn validate(&self) -> Result<(), FetchError> {
        if self.date.len() != 10 || self.naive_date().is_none() {
            return Err(FetchError::InvalidRecord(format!(
                "invalid date '{}'",
                self.date
            )));
        }
        if self.local_name.trim().is_empty() || self.name.trim().is_empty() {
            return Err(FetchError::InvalidRecord(format!(
                "missing holiday name on {}",
                self.date
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.date, self.local_name, self.name)
    }
}

// Keys are folded to lower case to match field names case-insensitively
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let folded: Map<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            Value::Object(folded)
        }
        other => other,
    }
}

/// Decode a provider response body, a JSON array of holiday objects.
/// A single malformed record fails the whole body.
pub fn decode_holidays(body: &str) -> Result<Vec<Holiday>, FetchError> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    let mut holidays = Vec::with_capacity(values.len());
    for value in values {
        let holiday: Holiday = serde_json::from_value(fold_keys(value))?;
        holiday.validate()?;
        holidays.push(holiday);
    }
    Ok(holidays)
}
