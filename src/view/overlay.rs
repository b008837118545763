//! Detail Overlay
//!
//! Two-state overlay for a single selected place: Hidden or Shown. Opening
//! while already shown just replaces the displayed content; there is no
//! stacking. Background scroll is locked exactly while the overlay is
//! shown.

use crate::category::CategoryIndex;
use crate::place::Place;
use crate::view::{display_date, image_source};

/// Fully-resolved overlay content for one place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDetail {
    /// Category badge text (fallback label for unmatched ids)
    pub badge_label: String,
    /// Category badge background color
    pub badge_color: String,
    pub name: String,
    /// Long-form visit date
    pub date_label: String,
    /// Memo text, empty string when the record has none
    pub memo: String,
    /// Address text, empty string when the record has none
    pub address: String,
    /// Resolved image path, `None` clears the image region
    pub image: Option<String>,
}

impl PlaceDetail {
    /// Resolve a place into overlay content
    pub fn build(place: &Place, categories: &CategoryIndex) -> Self {
        let cat = categories.lookup(&place.category);
        Self {
            badge_label: cat.label,
            badge_color: cat.color,
            name: place.name.clone(),
            date_label: display_date(place),
            memo: place.memo.clone().unwrap_or_default(),
            address: place.address.clone().unwrap_or_default(),
            image: place.image_file().map(image_source),
        }
    }
}

/// What dismissed the overlay; every trigger closes it the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    BackdropClick,
    CancelKey,
}

/// The overlay state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailOverlay {
    #[default]
    Hidden,
    Shown(PlaceDetail),
}

impl DetailOverlay {
    /// Show detail for a place, replacing any content already shown
    pub fn open(&mut self, place: &Place, categories: &CategoryIndex) {
        *self = DetailOverlay::Shown(PlaceDetail::build(place, categories));
    }

    /// Hide the overlay and release the scroll lock
    pub fn close(&mut self) {
        *self = DetailOverlay::Hidden;
    }

    /// Close in response to a dismiss trigger
    pub fn dismiss(&mut self, _trigger: DismissTrigger) {
        self.close();
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, DetailOverlay::Shown(_))
    }

    /// Background scroll is suppressed exactly while shown
    pub fn scroll_locked(&self) -> bool {
        self.is_shown()
    }

    /// Displayed content, when shown
    pub fn detail(&self) -> Option<&PlaceDetail> {
        match self {
            DetailOverlay::Hidden => None,
            DetailOverlay::Shown(detail) => Some(detail),
        }
    }
}
