//! Per-user search state: the latest merged results and the current selection.

use crate::types::{BookRecord, RecordId};

/// Ephemeral search state owned by exactly one user session.
///
/// Results are only ever replaced wholesale by a successful search; a
/// failed search leaves both results and selection untouched.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<BookRecord>,
    selected: Option<BookRecord>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query that produced the current results.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current merged results, catalog records first.
    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    /// Currently selected record, if any.
    pub fn selected(&self) -> Option<&BookRecord> {
        self.selected.as_ref()
    }

    /// Look up a record in the current results by identity.
    pub fn find(&self, id: &RecordId) -> Option<&BookRecord> {
        self.results.iter().find(|r| r.id() == id)
    }

    /// Select `record`. Selecting the already-selected record is a no-op.
    pub fn select(&mut self, record: &BookRecord) {
        if self.selected.as_ref() != Some(record) {
            self.selected = Some(record.clone());
        }
    }

    /// Select the result with identity `id`. Returns `false` if no current
    /// result has that identity, leaving the selection unchanged.
    pub fn select_by_id(&mut self, id: &RecordId) -> bool {
        match self.find(id).cloned() {
            Some(record) => {
                self.selected = Some(record);
                true
            }
            None => false,
        }
    }

    /// Clear the selection. Clearing an empty selection is a no-op.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Install the results of a successful search.
    ///
    /// The selection survives if a record with the same identity is among
    /// the new results (and is refreshed to that record); otherwise it is
    /// cleared.
    pub fn replace_results(&mut self, query: &str, results: Vec<BookRecord>) {
        self.query = query.to_owned();
        self.results = results;
        self.selected = self
            .selected
            .take()
            .and_then(|old| self.results.iter().find(|r| r.id() == old.id()).cloned());
    }
}
