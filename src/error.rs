//! Load Error Taxonomy
//!
//! Both startup fetches (site config and place records) share one error
//! kind: the resource could not be read, or it was read but did not parse
//! as the expected JSON shape. All later operations (filtering, card
//! building, overlay transitions) are infallible.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `config.json` or `data.json`
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP fetch failed (connect, timeout, or non-success status)
    #[error("Failed to fetch {resource}: {error}")]
    Http { resource: String, error: String },

    /// Local file read failed
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Document was retrieved but is not valid JSON for the expected shape
    #[error("Failed to parse {resource}: {error}")]
    Parse { resource: String, error: String },
}

/// Result alias for the load path
pub type LoadResult<T> = Result<T, LoadError>;
