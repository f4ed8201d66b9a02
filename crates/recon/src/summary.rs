use serde::Serialize;

use crate::model::ReconciliationOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub total_candidates: usize,
    pub inserts: usize,
    pub merges: usize,
    pub conflicts: usize,
    /// Candidate names needing a decision, in batch order.
    pub conflict_names: Vec<String>,
}

/// Compute summary statistics from an outcome.
pub fn compute_summary(outcome: &ReconciliationOutcome) -> ReconSummary {
    ReconSummary {
        total_candidates: outcome.len(),
        inserts: outcome.to_insert.len(),
        merges: outcome.to_merge.len(),
        conflicts: outcome.conflicts.len(),
        conflict_names: outcome
            .conflicts
            .iter()
            .map(|c| c.candidate.name.clone())
            .collect(),
    }
}
