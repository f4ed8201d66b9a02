use std::collections::HashMap;

use listwise_core::{CandidateItem, ExistingItem};

use crate::model::ListSnapshot;

/// Case-insensitive name lookup over one list snapshot.
///
/// Names are unique per list by convention only; when several items share a
/// name the first one in snapshot order is the match.
pub struct NameIndex<'a> {
    by_name: HashMap<String, &'a ExistingItem>,
}

impl<'a> NameIndex<'a> {
    pub fn build(snapshot: &'a ListSnapshot) -> Self {
        let mut by_name: HashMap<String, &'a ExistingItem> = HashMap::new();
        for item in &snapshot.items {
            if item.list_id != snapshot.list_id {
                log::debug!(
                    "ignoring '{}' ({}): belongs to list {}, not {}",
                    item.name,
                    item.id,
                    item.list_id,
                    snapshot.list_id
                );
                continue;
            }
            by_name.entry(item.name_key()).or_insert(item);
        }
        Self { by_name }
    }

    pub fn find(&self, candidate: &CandidateItem) -> Option<&'a ExistingItem> {
        self.by_name.get(&candidate.name_key()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
