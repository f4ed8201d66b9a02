use std::fmt;

use listwise_core::ItemId;

#[derive(Debug)]
pub enum ReconError {
    /// JSON parse / deserialization error in a list snapshot.
    SnapshotParse(String),
    /// A snapshot item breaks an item invariant.
    InvalidItem { id: ItemId, reason: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SnapshotParse(msg) => write!(f, "snapshot parse error: {msg}"),
            Self::InvalidItem { id, reason } => write!(f, "item '{id}': {reason}"),
        }
    }
}

impl std::error::Error for ReconError {}
