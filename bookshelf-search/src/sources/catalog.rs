//! External catalog source (Google Books volumes API).
//!
//! Each returned item carries a nested `volumeInfo` block with optional
//! `title`, `authors`, `description` and `imageLinks.thumbnail`.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http::check_status;
use crate::normalize;
use crate::source::BookSourceTrait;
use crate::types::{BookRecord, BookSource, RecordId, PLACEHOLDER_THUMBNAIL};

/// Top-level volumes response. `items` is absent when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// One catalog item.
#[derive(Debug, Default, Deserialize)]
pub struct Volume {
    pub id: Option<String>,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

/// Normalize one catalog item at `position` in the provider's order.
pub fn normalize_volume(position: usize, volume: Volume) -> BookRecord {
    let info = volume.volume_info;
    let key = volume.id.unwrap_or_else(|| format!("#{position}"));
    let thumbnail = info
        .image_links
        .and_then(|links| links.thumbnail)
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_owned());

    BookRecord::new(
        RecordId::new(BookSource::ExternalCatalog, key),
        normalize::title(info.title.as_deref()),
        normalize::authors(info.authors.as_deref()),
        thumbnail,
        normalize::description(info.description.as_deref()),
    )
}

/// Catalog source backed by a shared HTTP client.
pub struct CatalogSource {
    client: reqwest::Client,
}

impl CatalogSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl BookSourceTrait for CatalogSource {
    async fn fetch(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<BookRecord>, SearchError> {
        tracing::trace!(query, "querying external catalog");
        let response = self
            .client
            .get(&config.catalog_url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("catalog request failed: {e}")))?;
        let response = check_status(response, "catalog")?;

        let body: VolumesResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("catalog response: {e}")))?;

        Ok(body
            .items
            .into_iter()
            .enumerate()
            .map(|(position, volume)| normalize_volume(position, volume))
            .collect())
    }

    fn source(&self) -> BookSource {
        BookSource::ExternalCatalog
    }
}
