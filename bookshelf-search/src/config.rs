//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls where each source lives, per-source timeouts
//! and where decoded local thumbnails are written.

use std::path::PathBuf;

use crate::error::SearchError;

/// Default endpoint of the external catalog provider.
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Configuration for a two-source book search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Full URL of the catalog volume search endpoint; the query is sent as `q`.
    pub catalog_url: String,
    /// Base URL of the local library backend (`/books/search` is appended).
    pub library_base_url: String,
    /// Per-source timeout in seconds. A source exceeding it counts as failed.
    pub timeout_seconds: u64,
    /// Directory that receives decoded local thumbnails for the session.
    pub thumbnail_dir: PathBuf,
    /// Custom User-Agent string. If `None`, a crate-specific default is sent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            library_base_url: "http://127.0.0.1:8000".to_owned(),
            timeout_seconds: 8,
            thumbnail_dir: std::env::temp_dir().join("bookshelf-thumbnails"),
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `catalog_url` and `library_base_url` must parse as absolute URLs
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        url::Url::parse(&self.catalog_url)
            .map_err(|e| SearchError::Config(format!("invalid catalog_url: {e}")))?;
        url::Url::parse(&self.library_base_url)
            .map_err(|e| SearchError::Config(format!("invalid library_base_url: {e}")))?;
        Ok(())
    }

    /// URL of the local library search endpoint.
    pub fn library_search_url(&self) -> String {
        format!("{}/books/search", self.library_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.user_agent.is_none());
        assert!(config.thumbnail_dir.ends_with("bookshelf-thumbnails"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn relative_catalog_url_rejected() {
        let config = SearchConfig {
            catalog_url: "books/v1/volumes".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("catalog_url"));
    }

    #[test]
    fn bad_library_url_rejected() {
        let config = SearchConfig {
            library_base_url: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("library_base_url"));
    }

    #[test]
    fn library_search_url_trims_trailing_slash() {
        let config = SearchConfig {
            library_base_url: "http://localhost:9000/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.library_search_url(),
            "http://localhost:9000/books/search"
        );
    }
}
