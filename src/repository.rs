//! Place Repository
//!
//! Holds the canonical place sequence for the session: sorted by date
//! descending once at construction, then only read. Filtering derives a
//! view; it never reorders or mutates the canonical sequence.

use crate::place::Place;
use chrono::NaiveDate;

/// Selection value meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "all";

/// The canonical, date-sorted place collection
#[derive(Debug, Clone, Default)]
pub struct PlaceRepository {
    places: Vec<Place>,
}

impl PlaceRepository {
    /// Build the repository, sorting the records newest-first
    pub fn new(mut places: Vec<Place>) -> Self {
        sort_by_date_descending(&mut places);
        Self { places }
    }

    /// The full date-sorted sequence
    pub fn canonical(&self) -> &[Place] {
        &self.places
    }

    /// Derive the view for a filter selection
    ///
    /// `"all"` returns the canonical sequence unchanged. Any other value
    /// keeps only places whose raw `category` field equals it exactly —
    /// a place with an unmatched category id is reachable only via "all".
    pub fn filter_by_category(&self, selection: &str) -> Vec<Place> {
        if selection == ALL_CATEGORIES {
            return self.places.clone();
        }
        self.places
            .iter()
            .filter(|place| place.category == selection)
            .cloned()
            .collect()
    }

    /// Most recent parsed date, `None` when nothing is loaded (or parses)
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.places.iter().filter_map(Place::parsed_date).max()
    }

    /// Number of loaded places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Check if no places are loaded
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Stable newest-first sort by parsed date
///
/// Equal dates keep their relative input order; records whose date does
/// not parse sort after every dated record.
pub fn sort_by_date_descending(places: &mut [Place]) {
    places.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, date: &str, category: &str) -> Place {
        Place {
            name: name.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            memo: None,
            address: None,
            image: None,
        }
    }

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut places = vec![
            place("A", "2023-01-01", "cafe"),
            place("B", "2023-06-01", "park"),
            place("C", "2023-06-01", "cafe"),
            place("D", "2022-12-31", "cafe"),
        ];
        sort_by_date_descending(&mut places);

        // B and C share a date; B entered first, so B stays first.
        assert_eq!(names(&places), vec!["B", "C", "A", "D"]);

        for pair in places.windows(2) {
            assert!(pair[0].parsed_date() >= pair[1].parsed_date());
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = vec![
            place("A", "2023-01-01", "cafe"),
            place("B", "2023-06-01", "park"),
            place("C", "2023-06-01", "cafe"),
        ];
        sort_by_date_descending(&mut once);
        let mut twice = once.clone();
        sort_by_date_descending(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let mut places = vec![
            place("X", "someday", "cafe"),
            place("A", "2023-01-01", "cafe"),
        ];
        sort_by_date_descending(&mut places);
        assert_eq!(names(&places), vec!["A", "X"]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let repo = PlaceRepository::new(vec![
            place("A", "2023-01-01", "cafe"),
            place("B", "2023-06-01", "park"),
        ]);
        assert_eq!(repo.filter_by_category(ALL_CATEGORIES), repo.canonical());
    }

    #[test]
    fn test_filter_keeps_exact_matches_in_order() {
        let repo = PlaceRepository::new(vec![
            place("A", "2023-01-01", "cafe"),
            place("B", "2023-06-01", "park"),
            place("C", "2023-03-01", "cafe"),
        ]);

        let cafes = repo.filter_by_category("cafe");
        assert_eq!(names(&cafes), vec!["C", "A"]);

        // Filtering never disturbs the canonical order.
        assert_eq!(names(repo.canonical()), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_filter_unmatched_category_is_empty() {
        let repo = PlaceRepository::new(vec![place("A", "2023-01-01", "cafe")]);
        assert!(repo.filter_by_category("museum").is_empty());
    }

    #[test]
    fn test_latest_date() {
        let empty = PlaceRepository::new(vec![]);
        assert_eq!(empty.latest_date(), None);

        let repo = PlaceRepository::new(vec![
            place("A", "2023-01-01", "cafe"),
            place("B", "2023-06-01", "park"),
        ]);
        assert_eq!(repo.latest_date(), NaiveDate::from_ymd_opt(2023, 6, 1));
    }
}
