//! Place Records
//!
//! The `data.json` record type: one visited location with a date, a
//! category key, and optional descriptive fields. Missing or empty
//! optional fields are tolerated permissively; an unparseable date never
//! fails a load, it only falls out of date-based ordering.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// A single visited-location record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Place {
    /// Display name of the location
    pub name: String,
    /// Visit date as written in the document (ISO-parseable)
    pub date: String,
    /// Foreign key into the configured categories, may be unmatched
    pub category: String,
    /// Free-form note shown on the card and in the detail overlay
    #[serde(default)]
    pub memo: Option<String>,
    /// Street address, shown only in the detail overlay
    #[serde(default)]
    pub address: Option<String>,
    /// Image filename, resolved under `images/`
    #[serde(default)]
    pub image: Option<String>,
}

impl Place {
    /// Parse the visit date
    ///
    /// Accepts a plain calendar date (`2023-06-01`) or a full RFC 3339
    /// timestamp. Returns `None` when the string parses as neither.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        if let Ok(date) = self.date.parse::<NaiveDate>() {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.date_naive())
    }

    /// Memo text, treating an empty string the same as an absent field
    pub fn memo_text(&self) -> Option<&str> {
        self.memo.as_deref().filter(|m| !m.is_empty())
    }

    /// Image filename, treating an empty string the same as an absent field
    pub fn image_file(&self) -> Option<&str> {
        self.image.as_deref().filter(|f| !f.is_empty())
    }
}
