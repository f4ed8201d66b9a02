use listwise_core::CandidateItem;
use serde::{Deserialize, Serialize};

use crate::model::{Conflict, MergeProposal, ReconciliationOutcome};

/// Caller decision for one conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Keep the candidate as a separate line item.
    InsertAnyway,
    /// Drop the candidate.
    Discard,
}

/// What the persistence layer commits, as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitPlan {
    pub inserts: Vec<CandidateItem>,
    pub merges: Vec<MergeProposal>,
    pub discarded: Vec<CandidateItem>,
}

impl ReconciliationOutcome {
    /// Settle every conflict with `decide`, producing a commit plan.
    /// Conflicts marked [`Resolution::InsertAnyway`] follow the plain inserts.
    pub fn resolve(self, mut decide: impl FnMut(&Conflict) -> Resolution) -> CommitPlan {
        let mut plan = CommitPlan {
            inserts: self.to_insert,
            merges: self.to_merge,
            discarded: Vec::new(),
        };
        for conflict in self.conflicts {
            match decide(&conflict) {
                Resolution::InsertAnyway => plan.inserts.push(conflict.candidate),
                Resolution::Discard => plan.discarded.push(conflict.candidate),
            }
        }
        plan
    }

    /// Settle all conflicts the same way.
    pub fn resolve_all(self, resolution: Resolution) -> CommitPlan {
        self.resolve(|_| resolution)
    }
}

impl CommitPlan {
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.merges.is_empty()
    }
}
