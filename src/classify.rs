//! Base-resource classification

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::ItemId;

/// Items never chained further even though some craft produces them
pub const DEFAULT_BASE_RESOURCES: &[&str] = &[
    "item:foraging:plant-fiber",
    "item:foraging:tough-fiber",
    "item:foraging:rough-stick",
    "item:mining:pebbles",
];

/// Decides whether an item is gathered rather than crafted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseResources {
    allow_list: HashSet<ItemId>,
}

impl BaseResources {
    /// Classifier with an empty allow-list: only items nobody crafts are base
    pub fn empty() -> Self {
        Self {
            allow_list: HashSet::new(),
        }
    }

    pub fn insert(&mut self, item: ItemId) {
        self.allow_list.insert(item);
    }

    pub fn is_allow_listed(&self, item: &str) -> bool {
        self.allow_list.contains(item)
    }

    /// True for allow-listed items and items with no producing craft.
    ///
    /// Zero-output recipes are not considered here; the resolvers handle them per step.
    pub fn is_base(&self, catalog: &Catalog, item: &str) -> bool {
        self.is_allow_listed(item) || catalog.crafts_producing(item).is_empty()
    }
}

impl Default for BaseResources {
    fn default() -> Self {
        Self {
            allow_list: DEFAULT_BASE_RESOURCES.iter().map(|&id| ItemId::new(id)).collect(),
        }
    }
}
