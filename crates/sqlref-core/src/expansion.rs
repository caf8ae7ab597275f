//! Expand/collapse bookkeeping for sections.

use std::collections::HashSet;

use crate::types::SectionId;

/// Set of sections currently shown with their examples visible.
///
/// Ids are opaque here: toggling an id that no longer belongs to a visible
/// section is allowed and simply flips its membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<SectionId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns the new state.
    pub fn toggle(&mut self, id: SectionId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded.contains(&id)
    }

    /// Re-establish the search invariant after a query settles.
    ///
    /// A blank query collapses everything; otherwise exactly the matching
    /// sections are expanded and earlier manual toggles are dropped.
    pub fn on_query_changed<I>(&mut self, query_is_empty: bool, filtered: I)
    where
        I: IntoIterator<Item = SectionId>,
    {
        self.expanded.clear();
        if !query_is_empty {
            self.expanded.extend(filtered);
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded ids in ascending order.
    pub fn ids(&self) -> Vec<SectionId> {
        let mut ids: Vec<_> = self.expanded.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = ExpansionState::new();
        let id = SectionId(4);

        assert!(state.toggle(id));
        assert!(state.is_expanded(id));

        assert!(!state.toggle(id));
        assert!(!state.is_expanded(id));

        assert!(state.toggle(id));
        assert!(state.is_expanded(id));
    }

    #[test]
    fn test_toggle_unknown_id_is_harmless() {
        let mut state = ExpansionState::new();
        state.toggle(SectionId(9_999));
        assert_eq!(state.ids(), vec![SectionId(9_999)]);
    }

    #[test]
    fn test_non_empty_query_replaces_manual_toggles() {
        let mut state = ExpansionState::new();
        state.toggle(SectionId(0));
        state.toggle(SectionId(7));

        state.on_query_changed(false, [SectionId(2), SectionId(3)]);
        assert_eq!(state.ids(), vec![SectionId(2), SectionId(3)]);
    }

    #[test]
    fn test_empty_query_collapses_everything() {
        let mut state = ExpansionState::new();
        state.on_query_changed(false, [SectionId(1), SectionId(5)]);
        state.on_query_changed(true, [SectionId(1), SectionId(5)]);
        assert!(state.is_empty());
    }

    #[test]
    fn test_no_matches_leaves_nothing_expanded() {
        let mut state = ExpansionState::new();
        state.toggle(SectionId(3));
        state.on_query_changed(false, std::iter::empty());
        assert_eq!(state.len(), 0);
    }
}
