//! Append-only incident store.

use crate::incident::{format_timestamp, Incident, IncidentId};
use crate::validator::Draft;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("duplicate incident id {0} in seed data")]
    DuplicateId(IncidentId),
}

/// Records in creation order, newest first. Nothing is ever removed or edited.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Incident>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store from seed records, keeping their order.
    ///
    /// New ids continue from the highest seeded id, so they stay unique no
    /// matter how sparse the seed ids are.
    pub fn from_records(records: Vec<Incident>) -> Result<Self, SeedError> {
        let mut seen = std::collections::HashSet::new();
        for r in &records {
            if !seen.insert(r.id) {
                return Err(SeedError::DuplicateId(r.id));
            }
        }
        let next_id = records.iter().map(|r| r.id.0).max().map_or(1, |m| m + 1);
        Ok(Self {
            records,
            next_id,
        })
    }

    /// Commits an already-validated draft as a new record at the front.
    pub fn add_record(&mut self, draft: &Draft, now: DateTime<Utc>) -> IncidentId {
        let id = IncidentId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            0,
            Incident {
                id,
                title: draft.title.clone(),
                description: draft.description.clone(),
                severity: draft.severity,
                reported_at: format_timestamp(now),
            },
        );
        id
    }

    pub fn records(&self) -> &[Incident] {
        &self.records
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::Severity;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn seed(id: u64) -> Incident {
        Incident {
            id: IncidentId(id),
            title: format!("Seed {id}"),
            description: "seeded".to_string(),
            severity: Severity::Low,
            reported_at: "2025-03-15T10:00:00Z".to_string(),
        }
    }

    fn draft(title: &str) -> Draft {
        Draft {
            title: title.to_string(),
            description: "desc".to_string(),
            severity: Severity::High,
        }
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        let id = store.add_record(&draft("a"), Utc::now());
        assert_eq!(id, IncidentId(1));
    }

    #[test]
    fn add_prepends() {
        let mut store = RecordStore::from_records(vec![seed(1), seed(2)]).unwrap();
        let id = store.add_record(&draft("new"), Utc::now());
        assert_eq!(store.records()[0].id, id);
        assert_eq!(store.records()[0].title, "new");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ids_continue_after_max_seed() {
        let mut store = RecordStore::from_records(vec![seed(3), seed(10), seed(1)]).unwrap();
        assert_eq!(store.add_record(&draft("a"), Utc::now()), IncidentId(11));
        assert_eq!(store.add_record(&draft("b"), Utc::now()), IncidentId(12));
    }

    #[test]
    fn ids_stay_unique_across_many_adds() {
        let mut store = RecordStore::from_records(vec![seed(1), seed(2), seed(3)]).unwrap();
        for i in 0..50 {
            store.add_record(&draft(&format!("r{i}")), Utc::now());
        }
        let ids: HashSet<_> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), store.len());
        assert_eq!(store.len(), 53);
    }

    #[test]
    fn duplicate_seed_id_rejected() {
        let err = RecordStore::from_records(vec![seed(1), seed(1)]).unwrap_err();
        assert_eq!(err, SeedError::DuplicateId(IncidentId(1)));
    }

    #[test]
    fn stores_draft_text_untrimmed() {
        let mut store = RecordStore::new();
        let d = Draft {
            title: "  padded  ".to_string(),
            description: " body ".to_string(),
            severity: Severity::Medium,
        };
        let id = store.add_record(&d, Utc::now());
        let rec = store.get(id).unwrap();
        assert_eq!(rec.title, "  padded  ");
        assert_eq!(rec.description, " body ");
        assert_eq!(rec.severity, Severity::Medium);
    }

    #[test]
    fn reported_at_is_creation_instant() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut store = RecordStore::new();
        let id = store.add_record(&draft("a"), now);
        let rec = store.get(id).unwrap();
        assert_eq!(rec.reported_at, "2026-01-02T03:04:05Z");
        assert_eq!(rec.reported_instant(), Some(now));
    }

    #[test]
    fn get_missing_id() {
        let store = RecordStore::from_records(vec![seed(1)]).unwrap();
        assert!(store.get(IncidentId(99)).is_none());
    }
}
