//! Centralized application directory paths for Bookshelf.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! # Environment Overrides
//!
//! - `BOOKSHELF_CONFIG_DIR` overrides [`config_dir`]
//! - `BOOKSHELF_CACHE_DIR` overrides [`cache_dir`]

use std::path::PathBuf;

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/bookshelf/` by default.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("BOOKSHELF_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("bookshelf"))
        .unwrap_or_else(|| std::env::temp_dir().join("bookshelf-config"))
}

/// Application cache directory.
///
/// Resolves to `dirs::cache_dir()/bookshelf/` by default.
#[must_use]
pub fn cache_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("BOOKSHELF_CACHE_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::cache_dir()
        .map(|d| d.join("bookshelf"))
        .unwrap_or_else(|| std::env::temp_dir().join("bookshelf-cache"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Decoded search thumbnails (`cache_dir()/thumbnails/`).
#[must_use]
pub fn thumbnails_dir() -> PathBuf {
    cache_dir().join("thumbnails")
}
