//! # bookshelf-search
//!
//! Session-scoped book search for Bookshelf.
//!
//! A query is sent to two heterogeneous sources, the external catalog
//! (Google Books) and the user's local library backend. Their records are
//! normalized into one [`BookRecord`] shape and merged into a
//! [`SearchSession`] that also tracks the user's current selection.
//!
//! ## Design
//!
//! - Both sources are queried concurrently, each under its own timeout
//! - A failing source contributes zero records; only a double failure is an error
//! - Catalog records always precede library records, each in source order
//! - Every record field is populated and every text field is HTML-escaped
//! - Local base64 thumbnails are decoded, validated and written to a
//!   transient directory; broken ones fall back to a placeholder URL

pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod orchestrator;
pub mod session;
pub mod source;
pub mod sources;
pub mod thumbnail;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use orchestrator::SearchAggregator;
pub use session::SearchSession;
pub use source::BookSourceTrait;
pub use types::{BookRecord, BookSource, RecordId};

/// Search both sources once, without a session.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config and
/// [`SearchError::SourceUnavailable`] if both sources fail.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> bookshelf_search::Result<()> {
/// let config = bookshelf_search::SearchConfig::default();
/// let records = bookshelf_search::search("the hobbit", &config).await?;
/// for record in &records {
///     println!("[{}] {} by {}", record.source(), record.title, record.author);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<BookRecord>> {
    let aggregator = SearchAggregator::new(config.clone())?;
    let mut session = SearchSession::new();
    aggregator.search(&mut session, query).await?;
    Ok(session.results().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = search("test", &config).await.unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn search_validates_catalog_url() {
        let config = SearchConfig {
            catalog_url: "::".into(),
            ..Default::default()
        };
        let err = search("test", &config).await.unwrap_err();
        assert!(err.to_string().contains("catalog_url"));
    }
}
