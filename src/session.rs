//! Session Context
//!
//! The explicit owner of all per-session state: the site config, the
//! derived category index, and the canonical place sequence. Constructed
//! atomically after both loads succeed; a failed load yields `LoadError`
//! and no session at all.

use crate::category::CategoryIndex;
use crate::config::SiteConfig;
use crate::error::LoadResult;
use crate::fetch::Loader;
use crate::place::Place;
use crate::repository::PlaceRepository;

/// Immutable per-session state built from the two startup documents
#[derive(Debug, Clone)]
pub struct Session {
    config: SiteConfig,
    categories: CategoryIndex,
    places: PlaceRepository,
}

impl Session {
    /// Load both documents and build the session
    ///
    /// Sequential by design: category metadata must exist before any
    /// category-dependent view is generated, so the config load completes
    /// before the data load starts.
    pub async fn initialize(loader: &Loader) -> LoadResult<Self> {
        let config = loader.load_config().await?;
        tracing::info!(
            title = config.title(),
            categories = config.categories.len(),
            "site config loaded"
        );

        let records = loader.load_places().await?;
        tracing::info!(places = records.len(), "place records loaded");

        Ok(Self::from_parts(config, records))
    }

    /// Build a session from already-parsed documents
    pub fn from_parts(config: SiteConfig, records: Vec<Place>) -> Self {
        let categories = CategoryIndex::build(&config.categories);
        let places = PlaceRepository::new(records);
        Self {
            config,
            categories,
            places,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn places(&self) -> &PlaceRepository {
        &self.places
    }
}
