//! Two-source fan-out: query catalog and library concurrently, then merge.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::source::BookSourceTrait;
use crate::types::BookRecord;

use super::merge::{merge, SourceOutcome};

/// Query both sources concurrently and merge their records.
///
/// # Pipeline
///
/// 1. Issue both requests with [`futures::future::join`]; neither waits on the other
/// 2. Bound each by `config.timeout_seconds`; an elapsed timer is that source's failure
/// 3. Merge catalog-then-library via [`merge`]
///
/// # Errors
///
/// Returns [`SearchError::SourceUnavailable`] only if both sources fail.
pub async fn orchestrate_search<C, L>(
    catalog: &C,
    library: &L,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<BookRecord>, SearchError>
where
    C: BookSourceTrait,
    L: BookSourceTrait,
{
    let timeout = Duration::from_secs(config.timeout_seconds);
    let (catalog_outcome, library_outcome) = futures::future::join(
        query_source(catalog, query, config, timeout),
        query_source(library, query, config, timeout),
    )
    .await;

    merge(catalog_outcome, library_outcome)
}

/// Query a single source under a timeout.
async fn query_source<S: BookSourceTrait>(
    source: &S,
    query: &str,
    config: &SearchConfig,
    timeout: Duration,
) -> SourceOutcome {
    match tokio::time::timeout(timeout, source.fetch(query, config)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SearchError::Timeout(format!(
            "{} exceeded {}s limit",
            source.source(),
            timeout.as_secs()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookSource, RecordId, NO_DESCRIPTION, PLACEHOLDER_THUMBNAIL};

    /// Source that answers after `delay`, or fails when `fail` is set.
    struct StubSource {
        source: BookSource,
        titles: Vec<&'static str>,
        delay: Duration,
        fail: bool,
    }

    impl StubSource {
        fn ok(source: BookSource, titles: Vec<&'static str>) -> Self {
            Self {
                source,
                titles,
                delay: Duration::ZERO,
                fail: false,
            }
        }

        fn failing(source: BookSource) -> Self {
            Self {
                source,
                titles: vec![],
                delay: Duration::ZERO,
                fail: true,
            }
        }
    }

    impl BookSourceTrait for StubSource {
        async fn fetch(
            &self,
            _query: &str,
            _config: &SearchConfig,
        ) -> Result<Vec<BookRecord>, SearchError> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(SearchError::Http("stub failure".into()));
            }
            Ok(self
                .titles
                .iter()
                .map(|t| {
                    BookRecord::new(
                        RecordId::new(self.source, *t),
                        *t,
                        "A",
                        PLACEHOLDER_THUMBNAIL,
                        NO_DESCRIPTION,
                    )
                })
                .collect())
        }

        fn source(&self) -> BookSource {
            self.source
        }
    }

    fn config(timeout_seconds: u64) -> SearchConfig {
        SearchConfig {
            timeout_seconds,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn slower_catalog_still_comes_first() {
        let mut catalog = StubSource::ok(BookSource::ExternalCatalog, vec!["The Hobbit"]);
        catalog.delay = Duration::from_millis(50);
        let library = StubSource::ok(BookSource::LocalLibrary, vec!["Hobbit, The"]);

        let results = orchestrate_search(&catalog, &library, "Hobbit", &config(5))
            .await
            .expect("search");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source(), BookSource::ExternalCatalog);
        assert_eq!(results[0].title, "The Hobbit");
        assert_eq!(results[1].source(), BookSource::LocalLibrary);
        assert_eq!(results[1].title, "Hobbit, The");
    }

    #[tokio::test(start_paused = true)]
    async fn hung_source_times_out_without_blocking_other() {
        let mut catalog = StubSource::ok(BookSource::ExternalCatalog, vec!["never"]);
        catalog.delay = Duration::from_secs(3600);
        let library = StubSource::ok(BookSource::LocalLibrary, vec!["Emma"]);

        let results = orchestrate_search(&catalog, &library, "emma", &config(1))
            .await
            .expect("partial results");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Emma");
    }

    #[tokio::test]
    async fn both_failing_is_source_unavailable() {
        let catalog = StubSource::failing(BookSource::ExternalCatalog);
        let library = StubSource::failing(BookSource::LocalLibrary);
        let err = orchestrate_search(&catalog, &library, "x", &config(5))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn empty_query_is_forwarded() {
        let catalog = StubSource::ok(BookSource::ExternalCatalog, vec![]);
        let library = StubSource::ok(BookSource::LocalLibrary, vec!["Everything"]);
        let results = orchestrate_search(&catalog, &library, "", &config(5))
            .await
            .expect("empty query accepted");
        assert_eq!(results.len(), 1);
    }
}
