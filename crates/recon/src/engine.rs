use listwise_core::{CandidateItem, ItemId};

use crate::classify::{classify_candidate, Decision};
use crate::error::ReconError;
use crate::matcher::NameIndex;
use crate::model::{Conflict, ListSnapshot, MergeProposal, ReconciliationOutcome};

/// Reconcile a batch of candidates against one list snapshot.
///
/// Every candidate is matched against the snapshot as given, never against
/// other candidates of the same batch: two "Leite" candidates both produce a
/// merge proposal for the same existing "Leite".
pub fn reconcile(
    candidates: &[CandidateItem],
    snapshot: &ListSnapshot,
    self_exclude: Option<ItemId>,
) -> ReconciliationOutcome {
    let index = NameIndex::build(snapshot);
    let mut outcome = ReconciliationOutcome::default();

    for candidate in candidates {
        match classify_candidate(candidate, index.find(candidate), self_exclude) {
            Decision::Insert => outcome.to_insert.push(candidate.clone()),
            Decision::Merge(existing) => outcome.to_merge.push(MergeProposal {
                candidate: candidate.clone(),
                existing: existing.clone(),
            }),
            Decision::Conflict(existing) => {
                log::debug!(
                    "conflict: '{}' as {} vs existing {} ({})",
                    candidate.name,
                    candidate.unit,
                    existing.unit,
                    existing.id
                );
                outcome.conflicts.push(Conflict {
                    candidate: candidate.clone(),
                    existing: existing.clone(),
                });
            }
        }
    }

    log::debug!(
        "reconciled {} candidate(s) against list {}: {} insert, {} merge, {} conflict",
        candidates.len(),
        snapshot.list_id,
        outcome.to_insert.len(),
        outcome.to_merge.len(),
        outcome.conflicts.len()
    );
    outcome
}

/// Load a list snapshot from JSON, checking item invariants.
pub fn load_snapshot(json: &str) -> Result<ListSnapshot, ReconError> {
    let snapshot: ListSnapshot =
        serde_json::from_str(json).map_err(|e| ReconError::SnapshotParse(e.to_string()))?;

    for item in &snapshot.items {
        if item.name.trim().is_empty() {
            return Err(ReconError::InvalidItem {
                id: item.id,
                reason: "empty name".into(),
            });
        }
        if item.quantity.is_sign_negative() && !item.quantity.is_zero() {
            return Err(ReconError::InvalidItem {
                id: item.id,
                reason: format!("negative quantity {}", item.quantity),
            });
        }
        if item.unit.trim().is_empty() {
            return Err(ReconError::InvalidItem {
                id: item.id,
                reason: "empty unit".into(),
            });
        }
    }

    Ok(snapshot)
}
