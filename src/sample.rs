//! Built-in sample catalog for trying the planner without game data

use crate::catalog::Catalog;
use crate::models::{Craft, Item};

/// A small settlement catalog covering the interesting cases: alternative recipes,
/// ranged outputs, byproducts, an allow-listed fiber with a producer, a recipe that can
/// yield nothing and a seed loop.
pub fn sample_catalog() -> Catalog {
    let items = vec![
        // Gathered
        Item::new("item:forest:wood", "Wood", 1, "common"),
        Item::new("item:forest:bark", "Bark", 1, "common"),
        Item::new("item:mining:stone", "Stone", 1, "common"),
        Item::new("item:mining:iron-ore", "Iron Ore", 2, "common"),
        Item::new("item:mining:coal", "Coal", 1, "common"),
        Item::new("item:foraging:plant-fiber", "Plant Fiber", 1, "common"),
        Item::new("item:fishing:oyster", "Oyster", 1, "common"),
        Item::new("item:farming:water", "Water", 1, "common"),
        // Crafted
        Item::new("item:carpentry:plank", "Plank", 1, "common"),
        Item::new("item:carpentry:sawdust", "Sawdust", 1, "common"),
        Item::new("item:carpentry:table", "Table", 2, "common"),
        Item::new("item:carpentry:chair", "Chair", 2, "common"),
        Item::new("item:smelting:iron-ingot", "Iron Ingot", 2, "uncommon"),
        Item::new("item:smelting:slag", "Slag", 1, "common"),
        Item::new("item:smithing:nail", "Nail", 2, "common"),
        Item::new("item:weaving:rope", "Rope", 2, "common"),
        Item::new("item:fishing:pearl", "Pearl", 4, "rare"),
        Item::new("item:fishing:oyster-meat", "Oyster Meat", 1, "common"),
        Item::new("item:farming:embergrain-seed", "Embergrain Seed", 2, "uncommon"),
        Item::new("item:farming:embergrain", "Embergrain", 2, "uncommon"),
        Item::new("item:cooking:ember-bread", "Ember Bread", 3, "uncommon"),
        Item::new("item:building:workbench", "Workbench", 3, "uncommon"),
    ];

    let crafts = vec![
        Craft::new("saw_planks", "Saw Planks")
            .requires("carpentry", Some(1))
            .material("item:forest:wood", 2)
            .output("item:carpentry:plank", 3)
            .output_text("item:carpentry:sawdust", "1-2"),
        Craft::new("split_planks", "Split Planks")
            .material("item:forest:wood", 3)
            .output("item:carpentry:plank", 2),
        Craft::new("build_table", "Build Table")
            .requires("carpentry", Some(2))
            .material("item:carpentry:plank", 4)
            .material("item:smithing:nail", 6)
            .output("item:carpentry:table", 1),
        Craft::new("build_chair", "Build Chair")
            .requires("carpentry", Some(1))
            .material("item:carpentry:plank", 3)
            .material("item:smithing:nail", 4)
            .output("item:carpentry:chair", 1),
        Craft::new("smelt_iron", "Smelt Iron")
            .requires("smelter", None)
            .material("item:mining:iron-ore", 3)
            .material("item:mining:coal", 1)
            .output("item:smelting:iron-ingot", 2)
            .output("item:smelting:slag", 1),
        Craft::new("forge_nails", "Forge Nails")
            .requires("smithing", Some(1))
            .material("item:smelting:iron-ingot", 1)
            .output_text("item:smithing:nail", "8-20"),
        Craft::new("strip_bark", "Strip Bark")
            .material("item:forest:bark", 2)
            .output("item:foraging:plant-fiber", 3),
        Craft::new("twist_rope", "Twist Rope")
            .material("item:foraging:plant-fiber", 5)
            .output("item:weaving:rope", 1),
        Craft::new("shuck_oysters", "Shuck Oysters")
            .material("item:fishing:oyster", 1)
            .output("item:fishing:oyster-meat", 1)
            .output_text("item:fishing:pearl", "0-1"),
        Craft::new("grow_embergrain", "Grow Embergrain")
            .requires("farming", Some(2))
            .material("item:farming:embergrain-seed", 1)
            .material("item:farming:water", 2)
            .output("item:farming:embergrain", 4)
            .output_text("item:farming:embergrain-seed", "1-2"),
        Craft::new("thresh_embergrain", "Thresh Embergrain")
            .material("item:farming:embergrain", 1)
            .output("item:farming:embergrain-seed", 2),
        Craft::new("bake_ember_bread", "Bake Ember Bread")
            .requires("cooking", Some(3))
            .material("item:farming:embergrain", 3)
            .material("item:farming:water", 1)
            .output("item:cooking:ember-bread", 1),
        Craft::new("build_workbench", "Build Workbench")
            .material("item:carpentry:plank", 6)
            .material("item:smithing:nail", 12)
            .material("item:weaving:rope", 2)
            .material("item:mining:stone", 4)
            .output("item:building:workbench", 1),
    ];

    Catalog::new(items, crafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_referenced_item_is_cataloged() {
        let catalog = sample_catalog();
        for craft in catalog.crafts() {
            for material in &craft.materials {
                assert!(catalog.contains(material.item.as_str()), "{}", material.item);
            }
            for output in &craft.outputs {
                assert!(catalog.contains(output.item.as_str()), "{}", output.item);
            }
        }
    }

    #[test]
    fn test_planks_have_two_recipes() {
        let catalog = sample_catalog();
        assert_eq!(catalog.crafts_producing("item:carpentry:plank").len(), 2);
    }
}
