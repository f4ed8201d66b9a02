//! `listwise-recon`: reconciles newly parsed items against a list.
//!
//! Pure engine crate: receives candidates and a snapshot of the target list,
//! returns a proposed outcome. Committing it is the caller's job.

pub mod classify;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod resolve;
pub mod summary;

pub use engine::{load_snapshot, reconcile};
pub use error::ReconError;
pub use model::{Conflict, ListSnapshot, MergeProposal, ReconciliationOutcome};
pub use resolve::{CommitPlan, Resolution};
pub use summary::{compute_summary, ReconSummary};
