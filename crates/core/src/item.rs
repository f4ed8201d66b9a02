use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::error::ItemError;

/// Unit label used when nothing better is known.
pub const DEFAULT_UNIT: &str = "Unit";

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Durable identifier of a committed item. Assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of a shopping list. Name matching never crosses lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub Uuid);

impl ListId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A parsed-but-not-yet-committed shopping entry.
///
/// Has no identity: two candidates are "the same item" when their names are
/// equal ignoring case, and only within one target list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(default)]
    pub store_section: String,
    #[serde(default)]
    pub picked: bool,
}

impl CandidateItem {
    /// Candidate as produced by the parser: empty section, not picked.
    pub fn parsed(name: impl Into<String>, quantity: Decimal, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            store_section: String::new(),
            picked: false,
        }
    }

    /// Candidate typed in by hand.
    ///
    /// The name is trimmed and must not be blank. A negative quantity is
    /// clamped to zero and a blank unit becomes [`DEFAULT_UNIT`].
    pub fn manual(name: &str, quantity: Decimal, unit: &str) -> Result<Self, ItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        let unit = match unit.trim() {
            "" => DEFAULT_UNIT,
            u => u,
        };
        Ok(Self::parsed(name, quantity.max(Decimal::ZERO), unit))
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.store_section = section.into();
        self
    }

    /// Key used for duplicate detection.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

// ---------------------------------------------------------------------------
// Existing
// ---------------------------------------------------------------------------

/// An item already committed to a list. Owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingItem {
    pub id: ItemId,
    pub list_id: ListId,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(default)]
    pub store_section: String,
    #[serde(default)]
    pub picked: bool,
    pub last_modified: DateTime<Utc>,
}

impl ExistingItem {
    /// Commit a candidate as a brand-new item of `list_id`.
    pub fn from_candidate(
        candidate: &CandidateItem,
        list_id: ListId,
        id: ItemId,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            name: candidate.name.clone(),
            quantity: candidate.quantity,
            unit: candidate.unit.clone(),
            store_section: candidate.store_section.clone(),
            picked: candidate.picked,
            last_modified: at,
        }
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

/// Composed (NFC) and lowercased, so "Café" typed with a combining accent
/// matches the precomposed form.
fn name_key(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}
