//! Trait definition for pluggable book sources.
//!
//! Each source (the external catalog, the local library backend)
//! implements [`BookSourceTrait`] to provide a uniform interface for
//! fetching and normalizing records.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{BookRecord, BookSource};

/// A pluggable book source.
///
/// Implementors own:
///
/// - URL construction with query encoding
/// - the HTTP request
/// - decoding of the source's wire shape
/// - normalization into [`BookRecord`], resolving every absent field
///
/// All implementations must be `Send + Sync` so both sources can be
/// queried concurrently.
pub trait BookSourceTrait: Send + Sync {
    /// Fetch and normalize records for `query`, in the source's own order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the source answers with
    /// a non-success status, or the body cannot be decoded. Per-record
    /// problems (such as a broken thumbnail) are resolved in place and never
    /// fail the batch.
    fn fetch(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<BookRecord>, SearchError>> + Send;

    /// Returns which [`BookSource`] this implementation represents.
    fn source(&self) -> BookSource;
}
