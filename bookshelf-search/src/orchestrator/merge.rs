//! Deterministic join of the two per-source outcomes.
//!
//! Catalog records always precede library records, each in source order,
//! regardless of which request finished first.

use crate::error::SearchError;
use crate::types::{BookRecord, BookSource};

/// Outcome of querying one source.
pub type SourceOutcome = Result<Vec<BookRecord>, SearchError>;

/// Join the catalog and library outcomes.
///
/// A failed source contributes zero records and is logged at warn level.
///
/// # Errors
///
/// Returns [`SearchError::SourceUnavailable`] only if **both** sources failed.
/// A source that answered with zero records is a success.
pub fn merge(
    catalog: SourceOutcome,
    library: SourceOutcome,
) -> Result<Vec<BookRecord>, SearchError> {
    let mut merged = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (source, outcome) in [
        (BookSource::ExternalCatalog, catalog),
        (BookSource::LocalLibrary, library),
    ] {
        match outcome {
            Ok(records) => {
                tracing::debug!(%source, count = records.len(), "source returned records");
                merged.extend(records);
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "source query failed");
                errors.push(format!("{source}: {err}"));
            }
        }
    }

    if errors.len() == BookSource::all().len() {
        return Err(SearchError::SourceUnavailable(errors.join("; ")));
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordId, NO_DESCRIPTION, PLACEHOLDER_THUMBNAIL};

    fn records(source: BookSource, titles: &[&str]) -> Vec<BookRecord> {
        titles
            .iter()
            .map(|t| {
                BookRecord::new(
                    RecordId::new(source, *t),
                    *t,
                    "A",
                    PLACEHOLDER_THUMBNAIL,
                    NO_DESCRIPTION,
                )
            })
            .collect()
    }

    fn titles(records: &[BookRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn catalog_precedes_library() {
        let merged = merge(
            Ok(records(BookSource::ExternalCatalog, &["c1", "c2"])),
            Ok(records(BookSource::LocalLibrary, &["l1", "l2"])),
        )
        .expect("merge");
        assert_eq!(titles(&merged), ["c1", "c2", "l1", "l2"]);
        assert!(merged[..2]
            .iter()
            .all(|r| r.source() == BookSource::ExternalCatalog));
        assert!(merged[2..]
            .iter()
            .all(|r| r.source() == BookSource::LocalLibrary));
    }

    #[test]
    fn catalog_failure_keeps_library() {
        let merged = merge(
            Err(SearchError::Http("down".into())),
            Ok(records(BookSource::LocalLibrary, &["l1"])),
        )
        .expect("partial results");
        assert_eq!(titles(&merged), ["l1"]);
    }

    #[test]
    fn library_failure_keeps_catalog() {
        let merged = merge(
            Ok(records(BookSource::ExternalCatalog, &["c1"])),
            Err(SearchError::Timeout("slow".into())),
        )
        .expect("partial results");
        assert_eq!(titles(&merged), ["c1"]);
    }

    #[test]
    fn both_failed_is_source_unavailable() {
        let err = merge(
            Err(SearchError::Http("a".into())),
            Err(SearchError::Http("b".into())),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::SourceUnavailable(_)));
        let msg = err.to_string();
        assert!(msg.contains("External Catalog"));
        assert!(msg.contains("Local Library"));
    }

    #[test]
    fn both_empty_is_ok_empty() {
        let merged = merge(Ok(vec![]), Ok(vec![])).expect("empty is success");
        assert!(merged.is_empty());
    }
}
