use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::ExistingItem;

/// Items of one store section, as walked during a shopping session.
#[derive(Debug, Clone, Serialize)]
pub struct SectionGroup {
    pub section: String,
    pub items: Vec<ExistingItem>,
}

/// Group items by store section, sections in label order and items by name.
/// Items with a blank section land under `fallback`.
pub fn group_by_section(items: &[ExistingItem], fallback: &str) -> Vec<SectionGroup> {
    let mut groups: BTreeMap<String, Vec<ExistingItem>> = BTreeMap::new();
    for item in items {
        let section = match item.store_section.trim() {
            "" => fallback.to_string(),
            s => s.to_string(),
        };
        groups.entry(section).or_default().push(item.clone());
    }

    groups
        .into_iter()
        .map(|(section, mut items)| {
            items.sort_by(|a, b| a.name_key().cmp(&b.name_key()).then_with(|| a.name.cmp(&b.name)));
            SectionGroup { section, items }
        })
        .collect()
}
