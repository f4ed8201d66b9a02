//! `listwise-core`: shared shopping-item model.
//!
//! Types produced by the parser and consumed by the reconciliation engine.
//! No IO, no vocabulary knowledge.

pub mod error;
pub mod item;
pub mod quantity;
pub mod section;

pub use error::ItemError;
pub use item::{CandidateItem, ExistingItem, ItemId, ListId, DEFAULT_UNIT};
pub use quantity::format_quantity;
pub use section::{group_by_section, SectionGroup};
