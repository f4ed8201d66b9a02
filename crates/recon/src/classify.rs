use listwise_core::{CandidateItem, ExistingItem, ItemId};

/// Bucket for one candidate against its (optional) name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'a> {
    Insert,
    Merge(&'a ExistingItem),
    Conflict(&'a ExistingItem),
}

/// Decide what happens to `candidate` given the first same-name item of the
/// list. A match on the item being edited is no match at all.
pub fn classify_candidate<'a>(
    candidate: &CandidateItem,
    matched: Option<&'a ExistingItem>,
    self_exclude: Option<ItemId>,
) -> Decision<'a> {
    match matched {
        None => Decision::Insert,
        Some(existing) if Some(existing.id) == self_exclude => Decision::Insert,
        Some(existing) if existing.unit == candidate.unit => Decision::Merge(existing),
        Some(existing) => Decision::Conflict(existing),
    }
}
