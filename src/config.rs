//! Configuration types for the library client.

use std::path::{Path, PathBuf};

use bookshelf_search::SearchConfig;
use bookshelf_search::config::DEFAULT_CATALOG_URL;
use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Local library backend settings.
    pub backend: BackendConfig,
    /// External catalog settings.
    pub catalog: CatalogConfig,
    /// Search behaviour.
    pub search: SearchSettings,
}

/// Local library backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the REST service, without a trailing path.
    pub base_url: String,
    /// Request timeout in seconds for backend calls.
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_owned(),
            timeout_seconds: 10,
        }
    }
}

/// External catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Volume search endpoint; the query is sent as `q`.
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_owned(),
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Per-source timeout in seconds.
    pub timeout_seconds: u64,
    /// Where decoded local thumbnails go (None = cache dir).
    pub thumbnail_dir: Option<PathBuf>,
    /// Custom User-Agent for source requests.
    pub user_agent: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            thumbnail_dir: None,
            user_agent: None,
        }
    }
}

impl LibraryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LibraryError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LibraryError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_file()
    }

    /// Load from `path` if given, else from the default path if it exists,
    /// else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::default_config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validates the backend section.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Config`] for an unparsable base URL or zero timeout.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.backend.base_url)
            .map_err(|e| LibraryError::Config(format!("invalid backend.base_url: {e}")))?;
        if self.backend.timeout_seconds == 0 {
            return Err(LibraryError::Config(
                "backend.timeout_seconds must be greater than 0".into(),
            ));
        }
        self.search_config().validate()?;
        Ok(())
    }

    /// Derive the search crate's configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            catalog_url: self.catalog.url.clone(),
            library_base_url: self.backend.base_url.clone(),
            timeout_seconds: self.search.timeout_seconds,
            thumbnail_dir: self
                .search
                .thumbnail_dir
                .clone()
                .unwrap_or_else(crate::app_dirs::thumbnails_dir),
            user_agent: self.search.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(LibraryConfig::default().validate().is_ok());
    }

    #[test]
    fn search_config_shares_backend_url() {
        let mut config = LibraryConfig::default();
        config.backend.base_url = "http://library.test".into();
        config.search.timeout_seconds = 3;
        let search = config.search_config();
        assert_eq!(search.library_base_url, "http://library.test");
        assert_eq!(search.timeout_seconds, 3);
        assert_eq!(search.catalog_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn thumbnail_dir_defaults_to_cache() {
        let search = LibraryConfig::default().search_config();
        assert_eq!(search.thumbnail_dir, crate::app_dirs::thumbnails_dir());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: LibraryConfig = toml::from_str(
            r#"
            [backend]
            base_url = "https://books.example.org"
            "#,
        )
        .expect("parse");
        assert_eq!(config.backend.base_url, "https://books.example.org");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert_eq!(config.search.timeout_seconds, 8);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = LibraryConfig::default();
        config.search.user_agent = Some("ShelfBot/2".into());
        config.save_to_file(&path).expect("save");

        let loaded = LibraryConfig::from_file(&path).expect("load");
        assert_eq!(loaded.search.user_agent.as_deref(), Some("ShelfBot/2"));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        let err = LibraryConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LibraryError::Config(_)));
    }

    #[test]
    fn invalid_backend_url_rejected() {
        let mut config = LibraryConfig::default();
        config.backend.base_url = "railway.app".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend.base_url"));
    }

    #[test]
    fn zero_search_timeout_rejected() {
        let mut config = LibraryConfig::default();
        config.search.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
