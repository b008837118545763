//! # Odekake
//!
//! Place-log gallery: loads a small site config and a collection of
//! visited-place records, then renders them as a filterable card gallery
//! with a detail overlay.
//!
//! ## Modules
//!
//! - [`config`]: the `config.json` document (site text + categories)
//! - [`place`]: the `data.json` record type
//! - [`category`]: id → category lookup with a fallback default
//! - [`repository`]: the canonical date-sorted sequence and its filters
//! - [`fetch`]: async loading of the two documents (HTTP or directory)
//! - [`session`]: atomic construction of the per-session context
//! - [`view`]: pure view models for the filter bar, cards, and overlay
//! - [`render`]: the HTML presentation adapter (escaping boundary)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use odekake::fetch::Loader;
//! use odekake::render::render_page;
//! use odekake::session::Session;
//! use odekake::view::card::CardList;
//! use odekake::view::filter::FilterBar;
//! use odekake::view::overlay::DetailOverlay;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = Loader::dir("./site");
//!     let session = Session::initialize(&loader).await?;
//!
//!     let mut bar = FilterBar::new(&session.config().categories);
//!     let visible = session.places().filter_by_category(bar.select("all"));
//!     let cards = CardList::build(&visible, session.categories());
//!
//!     let html = render_page(&session, &bar, &cards, &DetailOverlay::Hidden);
//!     println!("{html}");
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod fetch;
pub mod place;
pub mod render;
pub mod repository;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use category::CategoryIndex;
pub use config::{Category, SiteConfig};
pub use error::{LoadError, LoadResult};
pub use fetch::Loader;
pub use place::Place;
pub use repository::{PlaceRepository, ALL_CATEGORIES};
pub use session::Session;
pub use view::card::{CardList, CardMedia, CardView};
pub use view::filter::{FilterBar, FilterButton};
pub use view::overlay::{DetailOverlay, DismissTrigger, PlaceDetail};
