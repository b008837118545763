//! Card Grid
//!
//! Builds the card view models for a place sequence, or the empty-state
//! placeholder when the sequence is empty. Cards keep the input order;
//! the grid is always rebuilt from scratch, never diffed.

use crate::category::CategoryIndex;
use crate::place::Place;
use crate::view::{display_date, image_source};

/// Glyph shown when no records match
pub const EMPTY_STATE_EMOJI: &str = "📭";

/// Localized "No records yet" message
pub const EMPTY_STATE_MESSAGE: &str = "まだ記録がありません";

/// Header media of a card: the place photo, or the category glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    /// Resolved image path plus alt text (the place name)
    Image { src: String, alt: String },
    /// Category emoji fallback when the record has no image
    Emoji(String),
}

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    /// Long-form visit date
    pub date_label: String,
    /// Resolved category label (fallback label for unmatched ids)
    pub category_label: String,
    /// Resolved category color
    pub category_color: String,
    /// CSS gradient for the header region, derived from the color
    pub header_gradient: String,
    pub media: CardMedia,
    /// Memo line, omitted entirely when the record has none
    pub memo: Option<String>,
}

impl CardView {
    /// Build one card, resolving the category through the index
    pub fn build(place: &Place, categories: &CategoryIndex) -> Self {
        let cat = categories.lookup(&place.category);
        let media = match place.image_file() {
            Some(file) => CardMedia::Image {
                src: image_source(file),
                alt: place.name.clone(),
            },
            None => CardMedia::Emoji(cat.emoji),
        };
        Self {
            name: place.name.clone(),
            date_label: display_date(place),
            category_label: cat.label,
            header_gradient: header_gradient(&cat.color),
            category_color: cat.color,
            media,
            memo: place.memo_text().map(str::to_string),
        }
    }
}

/// The card grid, or its empty-state placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardList {
    Empty,
    Cards(Vec<CardView>),
}

impl CardList {
    /// Build the grid for a place sequence, preserving input order
    pub fn build(places: &[Place], categories: &CategoryIndex) -> Self {
        if places.is_empty() {
            return CardList::Empty;
        }
        CardList::Cards(
            places
                .iter()
                .map(|place| CardView::build(place, categories))
                .collect(),
        )
    }

    /// Number of cards (zero for the empty state)
    pub fn len(&self) -> usize {
        match self {
            CardList::Empty => 0,
            CardList::Cards(cards) => cards.len(),
        }
    }

    /// Whether this is the empty-state placeholder
    pub fn is_empty(&self) -> bool {
        matches!(self, CardList::Empty)
    }
}

/// Header gradient derived from a category color
pub fn header_gradient(color: &str) -> String {
    format!("linear-gradient(135deg, {color}88 0%, {color} 100%)")
}
