//! Local library source (`GET /books/search?query=`).
//!
//! Local records carry a flat `title`/`author`/`description` shape and an
//! optional base64 thumbnail that is decoded into the session's thumbnail
//! directory.

use std::path::Path;

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http::check_status;
use crate::normalize;
use crate::source::BookSourceTrait;
use crate::thumbnail;
use crate::types::{BookRecord, BookSource, RecordId};

/// A book as returned by the library's search endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LocalBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// Normalize one local record at `position` in the backend's order.
///
/// The identity key is the raw stored title, since the backend addresses
/// books by title. The thumbnail is resolved on the blocking pool.
pub async fn normalize_local(
    position: usize,
    book: LocalBook,
    thumbnail_dir: &Path,
) -> BookRecord {
    let key = book
        .title
        .clone()
        .unwrap_or_else(|| format!("#{position}"));
    let thumbnail =
        thumbnail::resolve_blocking(book.thumbnail.clone(), thumbnail_dir.to_path_buf()).await;

    BookRecord::new(
        RecordId::new(BookSource::LocalLibrary, key),
        normalize::title(book.title.as_deref()),
        normalize::author(book.author.as_deref()),
        thumbnail,
        normalize::description(book.description.as_deref()),
    )
}

/// Library source backed by a shared HTTP client.
pub struct LibrarySource {
    client: reqwest::Client,
}

impl LibrarySource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl BookSourceTrait for LibrarySource {
    async fn fetch(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<BookRecord>, SearchError> {
        tracing::trace!(query, "querying local library");
        let response = self
            .client
            .get(config.library_search_url())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("library request failed: {e}")))?;
        let response = check_status(response, "library")?;

        let books: Vec<LocalBook> = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("library response: {e}")))?;

        let records = books
            .into_iter()
            .enumerate()
            .map(|(position, book)| normalize_local(position, book, &config.thumbnail_dir));
        Ok(futures::future::join_all(records).await)
    }

    fn source(&self) -> BookSource {
        BookSource::LocalLibrary
    }
}
