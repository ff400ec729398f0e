//! Read-only item/craft catalog queried by the engine

use std::collections::HashMap;

use crate::models::{Craft, CraftId, Item, ItemId};

/// In-memory view of items and crafts.
///
/// Crafts keep their catalog order; `crafts_producing` returns producers in that order,
/// which is what recipe pins index into.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    crafts: Vec<Craft>,
    by_id: HashMap<ItemId, usize>,
    by_craft_id: HashMap<CraftId, usize>,
    by_output: HashMap<ItemId, Vec<usize>>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, crafts: Vec<Craft>) -> Self {
        let mut by_id = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            by_id.entry(item.id.clone()).or_insert(i);
        }

        let mut by_craft_id = HashMap::new();
        let mut by_output: HashMap<ItemId, Vec<usize>> = HashMap::new();
        for (i, craft) in crafts.iter().enumerate() {
            by_craft_id.entry(craft.id.clone()).or_insert(i);
            for output in &craft.outputs {
                let producers = by_output.entry(output.item.clone()).or_default();
                // A craft listing the same output twice still counts once
                if producers.last() != Some(&i) {
                    producers.push(i);
                }
            }
        }

        Self {
            items,
            crafts,
            by_id,
            by_craft_id,
            by_output,
        }
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Display name of an item, falling back to its id
    pub fn name_of(&self, id: &str) -> String {
        self.item(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn crafts(&self) -> &[Craft] {
        &self.crafts
    }

    /// First craft with this id
    pub fn craft(&self, id: &CraftId) -> Option<&Craft> {
        self.by_craft_id.get(id).map(|&i| &self.crafts[i])
    }

    /// Every craft with `id` among its outputs, in catalog order
    pub fn crafts_producing(&self, id: &str) -> Vec<&Craft> {
        self.producer_positions(id)
            .iter()
            .map(|&i| &self.crafts[i])
            .collect()
    }

    /// Catalog positions of the crafts `crafts_producing` returns, index for index
    pub fn producer_positions(&self, id: &str) -> &[usize] {
        self.by_output.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("item:forest:wood", "Wood", 1, "common"),
                Item::new("item:carpentry:plank", "Plank", 1, "common"),
                Item::new("item:carpentry:sawdust", "Sawdust", 1, "common"),
            ],
            vec![
                Craft::new("saw_plank", "Saw Plank")
                    .material("item:forest:wood", 2)
                    .output("item:carpentry:plank", 1)
                    .output("item:carpentry:sawdust", 3),
                Craft::new("split_plank", "Split Plank")
                    .material("item:forest:wood", 1)
                    .output_text("item:carpentry:plank", "0-1"),
            ],
        )
    }

    #[test]
    fn test_crafts_producing_in_catalog_order() {
        let catalog = catalog();
        let producers = catalog.crafts_producing("item:carpentry:plank");
        assert_eq!(producers.len(), 2);
        assert_eq!(producers[0].id.as_str(), "saw_plank");
        assert_eq!(producers[1].id.as_str(), "split_plank");
    }

    #[test]
    fn test_byproduct_has_producer() {
        let catalog = catalog();
        let producers = catalog.crafts_producing("item:carpentry:sawdust");
        assert_eq!(producers.len(), 1);
        assert_eq!(producers[0].id.as_str(), "saw_plank");
    }

    #[test]
    fn test_raw_item_has_no_producers() {
        let catalog = catalog();
        assert!(catalog.crafts_producing("item:forest:wood").is_empty());
        assert!(catalog.crafts_producing("item:nowhere:nothing").is_empty());
    }

    #[test]
    fn test_item_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.name_of("item:forest:wood"), "Wood");
        assert_eq!(catalog.name_of("item:nowhere:nothing"), "item:nowhere:nothing");
        assert!(!catalog.contains("item:nowhere:nothing"));
    }

    #[test]
    fn test_producer_positions() {
        let catalog = catalog();
        assert_eq!(catalog.producer_positions("item:carpentry:plank"), &[0, 1]);
        assert_eq!(catalog.producer_positions("item:carpentry:sawdust"), &[0]);
        assert!(catalog.producer_positions("item:forest:wood").is_empty());
    }

    #[test]
    fn test_positions_distinguish_shared_craft_ids() {
        let catalog = Catalog::new(
            vec![
                Item::new("item:alchemy:x", "X", 1, "common"),
                Item::new("item:alchemy:y", "Y", 1, "common"),
            ],
            vec![
                Craft::new("dup", "Make X").output("item:alchemy:x", 1),
                Craft::new("dup", "Make Y").output("item:alchemy:y", 1),
            ],
        );
        assert_eq!(catalog.producer_positions("item:alchemy:x"), &[0]);
        assert_eq!(catalog.producer_positions("item:alchemy:y"), &[1]);
        assert_eq!(catalog.craft(&CraftId::new("dup")).map(|c| c.name.as_str()), Some("Make X"));
    }

    #[test]
    fn test_craft_lookup() {
        let catalog = catalog();
        assert_eq!(
            catalog.craft(&CraftId::new("split_plank")).map(|c| c.name.as_str()),
            Some("Split Plank")
        );
        assert!(catalog.craft(&CraftId::new("nope")).is_none());
    }
}
