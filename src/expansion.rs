use crate::incident::IncidentId;
use std::collections::HashSet;

/// Ids whose detail line is shown. Keyed by id, so it survives any
/// re-filtering or re-sorting of the list.
#[derive(Debug, Clone, Default)]
pub struct ExpansionTracker {
    expanded: HashSet<IncidentId>,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new state: `true` if `id` is now expanded.
    pub fn toggle(&mut self, id: IncidentId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut t = ExpansionTracker::new();
        assert!(t.toggle(IncidentId(2)));
        assert!(t.is_expanded(IncidentId(2)));
        assert!(!t.toggle(IncidentId(2)));
        assert!(!t.is_expanded(IncidentId(2)));
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut t = ExpansionTracker::new();
        t.toggle(IncidentId(1));
        for id in [1, 2, 3] {
            let before = t.is_expanded(IncidentId(id));
            t.toggle(IncidentId(id));
            t.toggle(IncidentId(id));
            assert_eq!(t.is_expanded(IncidentId(id)), before);
        }
    }

    #[test]
    fn ids_are_independent() {
        let mut t = ExpansionTracker::new();
        t.toggle(IncidentId(1));
        t.toggle(IncidentId(3));
        assert!(t.is_expanded(IncidentId(1)));
        assert!(!t.is_expanded(IncidentId(2)));
        assert!(t.is_expanded(IncidentId(3)));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn unknown_id_is_inert() {
        let mut t = ExpansionTracker::new();
        t.toggle(IncidentId(9999));
        assert!(t.is_expanded(IncidentId(9999)));
    }

    #[test]
    fn collapse_all_clears() {
        let mut t = ExpansionTracker::new();
        t.toggle(IncidentId(1));
        t.toggle(IncidentId(2));
        t.collapse_all();
        assert!(t.is_empty());
    }
}
