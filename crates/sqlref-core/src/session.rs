//! The search state object driven by presentation-layer events.
//!
//! [`SearchSession`] keeps the raw query, the sections currently matching it,
//! and which of them are expanded. The presentation layer feeds it events
//! (`query_changed`, `section_toggled`, `search_cleared`) and re-reads the
//! derived state afterwards; nothing is pushed back to it.
//!
//! Query edits go through a [`Debouncer`]: the filter only runs once the query
//! has been quiet for the configured delay, and a newer edit discards an older
//! pending one. Clearing the search bypasses the debouncer entirely.
//!
//! ```rust
//! use std::sync::Arc;
//! use sqlref_core::{Catalog, SearchSession};
//!
//! let mut session = SearchSession::new(Arc::new(Catalog::builtin()?));
//! session.apply_query("recursive");
//! assert_eq!(session.result_count(), 1);
//!
//! let id = session.filtered_sections()[0].id;
//! assert!(session.is_expanded(id));
//!
//! session.search_cleared();
//! assert!(!session.is_expanded(id));
//! # Ok::<(), sqlref_core::Error>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::Catalog;
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::expansion::ExpansionState;
use crate::search::{filter, highlight_spans};
use crate::types::{Section, SectionId, Span};

#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Arc<Catalog>,
    query: String,
    filtered: Vec<SectionId>,
    expansion: ExpansionState,
    debouncer: Debouncer<String>,
}

impl SearchSession {
    /// Start with an empty query: every section listed, none expanded.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_debounce(catalog, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(catalog: Arc<Catalog>, delay: Duration) -> Self {
        let filtered = catalog.sections().iter().map(|s| s.id).collect();
        Self {
            catalog,
            query: String::new(),
            filtered,
            expansion: ExpansionState::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    /// Record a query edit; filtering happens once the edit settles.
    pub fn query_changed(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.query.clone_from(&text);
        self.debouncer.push(text, now);
    }

    /// Apply a pending edit whose quiet period has elapsed.
    ///
    /// Returns `true` when the derived state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.settle(&query);
                true
            },
            None => false,
        }
    }

    /// Apply a pending edit immediately.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => {
                self.settle(&query);
                true
            },
            None => false,
        }
    }

    /// Set the query and filter synchronously, dropping any pending edit.
    pub fn apply_query(&mut self, text: &str) {
        self.debouncer.cancel();
        text.clone_into(&mut self.query);
        self.settle(text);
    }

    /// Flip a section between expanded and collapsed.
    ///
    /// Ids that do not belong to the catalog are ignored. Returns whether the
    /// section is expanded afterwards.
    pub fn section_toggled(&mut self, id: SectionId) -> bool {
        if self.catalog.section(id).is_none() {
            debug!(section = id.0, "ignoring toggle for unknown section");
            return false;
        }
        self.expansion.toggle(id)
    }

    /// Reset to the empty query without waiting for the debouncer.
    pub fn search_cleared(&mut self) {
        self.debouncer.cancel();
        self.query.clear();
        self.settle("");
    }

    fn settle(&mut self, query: &str) {
        let hits = filter(&self.catalog, query);
        self.filtered = hits.iter().map(|s| s.id).collect();
        let blank = query.trim().is_empty();
        self.expansion
            .on_query_changed(blank, self.filtered.iter().copied());
        debug!(
            query = %query.trim(),
            results = self.filtered.len(),
            expanded = self.expansion.len(),
            "search settled"
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The raw query as last edited, possibly not yet applied.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the current query is non-blank.
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn filtered_sections(&self) -> Vec<&Section> {
        self.filtered
            .iter()
            .filter_map(|id| self.catalog.section(*id))
            .collect()
    }

    pub fn filtered_ids(&self) -> &[SectionId] {
        &self.filtered
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn expanded_ids(&self) -> Vec<SectionId> {
        self.expansion.ids()
    }

    /// Highlight `text` against the current query.
    pub fn highlight<'t>(&self, text: &'t str) -> Vec<Span<'t>> {
        highlight_spans(text, &self.query)
    }

    pub const fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
}
