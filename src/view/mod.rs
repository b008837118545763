//! View Models
//!
//! Pure view-model construction for the three visual surfaces:
//!
//! - [`filter`]: the category filter bar and its single-select state
//! - [`card`]: the card grid (or its empty-state placeholder)
//! - [`overlay`]: the detail overlay state machine
//!
//! Nothing here touches I/O or markup; the structures built by these
//! modules are consumed by the presentation adapter in [`crate::render`].

pub mod card;
pub mod filter;
pub mod overlay;

use chrono::{Datelike, NaiveDate};

/// Long localized calendar form used on cards and in the overlay
///
/// Matches the ja-JP long date format: `2023年6月1日`.
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Short localized form used for the last-updated footer: `2023/6/1`
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// Display form of a place's raw date string
///
/// Long form when the string parses as a date; the raw string as-is when
/// it does not, so a bad record still shows something.
pub fn display_date(place: &crate::place::Place) -> String {
    match place.parsed_date() {
        Some(date) => format_date_long(date),
        None => place.date.clone(),
    }
}

/// Resolve an image filename against the site's image directory
pub fn image_source(filename: &str) -> String {
    format!("images/{filename}")
}
