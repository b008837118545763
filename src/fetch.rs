//! Resource Loader
//!
//! Fetches the two startup documents, `config.json` and `data.json`, from
//! either an HTTP base URL or a local directory. Responses are read as
//! text and parsed separately so a malformed body reports as a parse
//! failure rather than a transport one.

use crate::config::SiteConfig;
use crate::error::{LoadError, LoadResult};
use crate::place::Place;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

/// Relative path of the site config document
pub const CONFIG_RESOURCE: &str = "config.json";

/// Relative path of the place records document
pub const DATA_RESOURCE: &str = "data.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the documents live
#[derive(Debug, Clone)]
enum Source {
    /// HTTP base URL, resources resolved as `{base}/{resource}`
    Http(String),
    /// Local directory, resources read as files
    Dir(PathBuf),
}

/// Loader for the two startup documents
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
    source: Source,
}

impl Loader {
    /// Load over HTTP from a base URL
    pub fn http(base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: build_client(),
            source: Source::Http(base),
        }
    }

    /// Load from a local directory
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            client: build_client(),
            source: Source::Dir(path.into()),
        }
    }

    /// Fetch and parse `config.json`
    pub async fn load_config(&self) -> LoadResult<SiteConfig> {
        self.fetch_json(CONFIG_RESOURCE).await
    }

    /// Fetch and parse `data.json`
    pub async fn load_places(&self) -> LoadResult<Vec<Place>> {
        self.fetch_json(DATA_RESOURCE).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> LoadResult<T> {
        let body = match &self.source {
            Source::Http(base) => {
                let url = format!("{base}/{resource}");
                tracing::debug!(%url, "fetching resource");
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| LoadError::Http {
                        resource: resource.to_string(),
                        error: e.to_string(),
                    })?;
                response.text().await.map_err(|e| LoadError::Http {
                    resource: resource.to_string(),
                    error: e.to_string(),
                })?
            }
            Source::Dir(dir) => {
                let path = dir.join(resource);
                tracing::debug!(?path, "reading resource");
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| LoadError::Io {
                        path,
                        error: e.to_string(),
                    })?
            }
        };

        serde_json::from_str(&body).map_err(|e| LoadError::Parse {
            resource: resource.to_string(),
            error: e.to_string(),
        })
    }
}

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &std::path::Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            CONFIG_RESOURCE,
            r#"{"siteTitle": "T", "categories": []}"#,
        );
        write(
            dir.path(),
            DATA_RESOURCE,
            r#"[{"name": "A", "date": "2023-01-01", "category": "cafe"}]"#,
        );

        let loader = Loader::dir(dir.path());
        let config = loader.load_config().await.unwrap();
        assert_eq!(config.title(), "T");

        let places = loader.load_places().await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "A");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::dir(dir.path());

        match loader.load_config().await {
            Err(LoadError::Io { path, .. }) => {
                assert!(path.ends_with(CONFIG_RESOURCE));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), DATA_RESOURCE, "not json");

        let loader = Loader::dir(dir.path());
        match loader.load_places().await {
            Err(LoadError::Parse { resource, .. }) => {
                assert_eq!(resource, DATA_RESOURCE);
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
