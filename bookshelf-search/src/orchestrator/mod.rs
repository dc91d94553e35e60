//! Search orchestrator: concurrent two-source fan-out, deterministic merge,
//! and session installation.

pub mod merge;
pub mod search;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http::build_client;
use crate::session::SearchSession;
use crate::source::BookSourceTrait;
use crate::sources::{CatalogSource, LibrarySource};
use crate::types::BookRecord;

/// Combines the external catalog and the local library into one result list.
///
/// The aggregator holds no per-user state; each call writes into the
/// caller's [`SearchSession`].
pub struct SearchAggregator<C = CatalogSource, L = LibrarySource> {
    catalog: C,
    library: L,
    config: SearchConfig,
}

impl SearchAggregator {
    /// Build an aggregator over the HTTP sources described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the config is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = build_client(&config)?;
        Ok(Self {
            catalog: CatalogSource::new(client.clone()),
            library: LibrarySource::new(client),
            config,
        })
    }
}

impl<C: BookSourceTrait, L: BookSourceTrait> SearchAggregator<C, L> {
    /// Build an aggregator over caller-supplied sources.
    pub fn with_sources(config: SearchConfig, catalog: C, library: L) -> Self {
        Self {
            catalog,
            library,
            config,
        }
    }

    /// Configuration this aggregator searches with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run `query` against both sources and install the merged results in
    /// `session`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SourceUnavailable`] if both sources fail. The
    /// session's results and selection are then left as they were.
    pub async fn search<'s>(
        &self,
        session: &'s mut SearchSession,
        query: &str,
    ) -> Result<&'s [BookRecord], SearchError> {
        let results =
            search::orchestrate_search(&self.catalog, &self.library, query, &self.config).await?;
        tracing::debug!(count = results.len(), "installing search results");
        session.replace_results(query, results);
        Ok(session.results())
    }
}
