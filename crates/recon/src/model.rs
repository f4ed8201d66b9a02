use chrono::{DateTime, Utc};
use listwise_core::{CandidateItem, ExistingItem, ListId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The items of one target list, as read from the store before a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub list_id: ListId,
    #[serde(default)]
    pub items: Vec<ExistingItem>,
}

impl ListSnapshot {
    pub fn new(list_id: ListId, items: Vec<ExistingItem>) -> Self {
        Self { list_id, items }
    }

    pub fn empty(list_id: ListId) -> Self {
        Self { list_id, items: Vec::new() }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Same name, same unit: quantities add up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeProposal {
    pub candidate: CandidateItem,
    pub existing: ExistingItem,
}

impl MergeProposal {
    /// The existing item after absorbing the candidate.
    ///
    /// Quantity is added; the store section is replaced only by a non-empty
    /// one; `picked` is last-write-wins.
    pub fn merged(&self, at: DateTime<Utc>) -> ExistingItem {
        let mut item = self.existing.clone();
        item.quantity = item.quantity.saturating_add(self.candidate.quantity);
        if !self.candidate.store_section.is_empty() {
            item.store_section = self.candidate.store_section.clone();
        }
        item.picked = self.candidate.picked;
        item.last_modified = at;
        item
    }
}

/// Same name under a different unit. Needs a caller decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub candidate: CandidateItem,
    pub existing: ExistingItem,
}

/// Proposed treatment of a batch of candidates, in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationOutcome {
    pub to_insert: Vec<CandidateItem>,
    pub to_merge: Vec<MergeProposal>,
    pub conflicts: Vec<Conflict>,
}

impl ReconciliationOutcome {
    /// Fallback when the target list cannot be read: everything is new.
    pub fn all_new(candidates: &[CandidateItem]) -> Self {
        Self {
            to_insert: candidates.to_vec(),
            ..Self::default()
        }
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_insert.len() + self.to_merge.len() + self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listwise_core::ItemId;
    use rust_decimal::Decimal;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn proposal(existing_section: &str, candidate: CandidateItem) -> MergeProposal {
        let base = CandidateItem::parsed("Arroz", d("2"), "Kilogram").with_section(existing_section);
        let existing = ExistingItem::from_candidate(&base, ListId::new(), ItemId::new(), Utc::now());
        MergeProposal { candidate, existing }
    }

    #[test]
    fn merged_adds_quantity() {
        let p = proposal("", CandidateItem::parsed("arroz", d("1.5"), "Kilogram"));
        let at = Utc::now();
        let m = p.merged(at);
        assert_eq!(m.quantity, d("3.5"));
        assert_eq!(m.id, p.existing.id);
        assert_eq!(m.name, "Arroz");
        assert_eq!(m.last_modified, at);
    }

    #[test]
    fn merged_keeps_section_when_candidate_has_none() {
        let p = proposal("Mercearia", CandidateItem::parsed("Arroz", d("1"), "Kilogram"));
        assert_eq!(p.merged(Utc::now()).store_section, "Mercearia");
    }

    #[test]
    fn merged_overwrites_section_when_candidate_has_one() {
        let c = CandidateItem::parsed("Arroz", d("1"), "Kilogram").with_section("Grãos");
        let p = proposal("Mercearia", c);
        assert_eq!(p.merged(Utc::now()).store_section, "Grãos");
    }

    #[test]
    fn merged_picked_is_last_write_wins() {
        let mut p = proposal("", CandidateItem::parsed("Arroz", d("1"), "Kilogram"));
        p.existing.picked = true;
        assert!(!p.merged(Utc::now()).picked);

        p.existing.picked = false;
        p.candidate.picked = true;
        assert!(p.merged(Utc::now()).picked);
    }

    #[test]
    fn all_new_inserts_everything() {
        let cs = vec![
            CandidateItem::parsed("Arroz", d("1"), "Kilogram"),
            CandidateItem::parsed("Leite", d("2"), "Liter"),
        ];
        let outcome = ReconciliationOutcome::all_new(&cs);
        assert_eq!(outcome.to_insert, cs);
        assert!(outcome.to_merge.is_empty());
        assert!(!outcome.has_conflicts());
        assert_eq!(outcome.len(), 2);
    }
}
