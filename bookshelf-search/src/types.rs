//! Core types for normalized book records and source identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thumbnail used whenever a source provides no usable image.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// Description used whenever a source provides none.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Title and author used whenever a source omits them.
pub const UNKNOWN: &str = "Unknown";

/// The two sources a search draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookSource {
    /// Third-party catalog provider (Google Books).
    ExternalCatalog,
    /// The user's own backend-managed collection.
    LocalLibrary,
}

impl BookSource {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExternalCatalog => "External Catalog",
            Self::LocalLibrary => "Local Library",
        }
    }

    /// Returns both sources in merge order.
    pub fn all() -> &'static [BookSource] {
        &[Self::ExternalCatalog, Self::LocalLibrary]
    }
}

impl fmt::Display for BookSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a record within and across searches.
///
/// The key is the catalog's volume id for [`BookSource::ExternalCatalog`]
/// and the stored title for [`BookSource::LocalLibrary`]. Two records with
/// the same display title but different sources never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    source: BookSource,
    key: String,
}

impl RecordId {
    /// Build an identity from a source and a source-specific key.
    pub fn new(source: BookSource, key: impl Into<String>) -> Self {
        Self {
            source,
            key: key.into(),
        }
    }

    /// The source this identity belongs to.
    pub fn source(&self) -> BookSource {
        self.source
    }

    /// The source-specific key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.source {
            BookSource::ExternalCatalog => "catalog",
            BookSource::LocalLibrary => "local",
        };
        write!(f, "{tag}:{}", self.key)
    }
}

/// A book normalized from either source.
///
/// Every field is populated; absent inputs are resolved to [`UNKNOWN`],
/// [`NO_DESCRIPTION`] or [`PLACEHOLDER_THUMBNAIL`] at normalization time.
/// Text fields are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    id: RecordId,
    /// Escaped title.
    pub title: String,
    /// Escaped author list, joined with `", "`.
    pub author: String,
    /// Remote URL, decoded local image path, or the placeholder.
    pub thumbnail: String,
    /// Escaped description.
    pub description: String,
}

impl BookRecord {
    /// Create a record. The source is fixed by `id` and cannot change later.
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        author: impl Into<String>,
        thumbnail: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            thumbnail: thumbnail.into(),
            description: description.into(),
        }
    }

    /// Stable identity of this record.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Which source produced this record.
    pub fn source(&self) -> BookSource {
        self.id.source
    }
}
