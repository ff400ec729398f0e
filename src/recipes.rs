//! Recipe selection: which of an item's producing crafts is active

use std::collections::HashMap;

use crate::error::ParseError;
use crate::models::{split_assignment, Craft, ItemId};

/// Parse a pin written as `item=index`, e.g. `item:smithing:nail=1`
pub fn parse_pin(s: &str) -> Result<(ItemId, usize), ParseError> {
    let (item, value) = split_assignment(s)?;
    let index = value.parse().map_err(|_| ParseError::InvalidRecipeIndex {
        item: item.to_string(),
        value: value.to_string(),
    })?;
    Ok((ItemId::new(item), index))
}

/// User-pinned recipe choice per item, as an index into the item's producers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePins {
    pins: HashMap<ItemId, usize>,
}

impl RecipePins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&mut self, item: ItemId, index: usize) {
        self.pins.insert(item, index);
    }

    pub fn get(&self, item: &str) -> Option<usize> {
        self.pins.get(item).copied()
    }

    /// Index of the active recipe among `len` alternatives.
    ///
    /// Pins past the end (the catalog changed since the pin was made) clamp to 0.
    pub fn active_index(&self, item: &str, len: usize) -> usize {
        match self.get(item) {
            Some(index) if index < len => index,
            Some(index) => {
                log::warn!(
                    "recipe pin {} for {} out of range ({} recipes), using 0",
                    index,
                    item,
                    len
                );
                0
            }
            None => 0,
        }
    }

    /// Active craft and its index, or `None` when there is nothing to choose from
    pub fn selected_craft<'a>(
        &self,
        item: &str,
        alternatives: &[&'a Craft],
    ) -> Option<(usize, &'a Craft)> {
        if alternatives.is_empty() {
            return None;
        }
        let index = self.active_index(item, alternatives.len());
        Some((index, alternatives[index]))
    }
}

impl FromIterator<(ItemId, usize)> for RecipePins {
    fn from_iter<T: IntoIterator<Item = (ItemId, usize)>>(iter: T) -> Self {
        Self {
            pins: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crafts() -> Vec<Craft> {
        vec![
            Craft::new("a", "First").output("item:x:y", 1),
            Craft::new("b", "Second").output("item:x:y", 2),
            Craft::new("c", "Third").output("item:x:y", 3),
        ]
    }

    #[test]
    fn test_defaults_to_first() {
        let crafts = crafts();
        let alternatives: Vec<&Craft> = crafts.iter().collect();
        let pins = RecipePins::new();
        let (index, craft) = pins.selected_craft("item:x:y", &alternatives).unwrap();
        assert_eq!(index, 0);
        assert_eq!(craft.id.as_str(), "a");
    }

    #[test]
    fn test_pinned_index_used() {
        let crafts = crafts();
        let alternatives: Vec<&Craft> = crafts.iter().collect();
        let mut pins = RecipePins::new();
        pins.pin(ItemId::new("item:x:y"), 2);
        let (index, craft) = pins.selected_craft("item:x:y", &alternatives).unwrap();
        assert_eq!(index, 2);
        assert_eq!(craft.id.as_str(), "c");
    }

    #[test]
    fn test_stale_pin_clamps_to_zero() {
        let crafts = crafts();
        let alternatives: Vec<&Craft> = crafts.iter().take(2).collect();
        let mut pins = RecipePins::new();
        pins.pin(ItemId::new("item:x:y"), 2);
        let (index, craft) = pins.selected_craft("item:x:y", &alternatives).unwrap();
        assert_eq!(index, 0);
        assert_eq!(craft.id.as_str(), "a");
    }

    #[test]
    fn test_pin_for_other_item_ignored() {
        let crafts = crafts();
        let alternatives: Vec<&Craft> = crafts.iter().collect();
        let pins: RecipePins = [(ItemId::new("item:x:z"), 1)].into_iter().collect();
        assert_eq!(pins.selected_craft("item:x:y", &alternatives).unwrap().0, 0);
    }

    #[test]
    fn test_no_alternatives() {
        let pins = RecipePins::new();
        assert!(pins.selected_craft("item:x:y", &[]).is_none());
    }

    #[test]
    fn test_parse_pin() {
        assert_eq!(
            parse_pin("item:smithing:nail=1"),
            Ok((ItemId::new("item:smithing:nail"), 1))
        );
        assert!(matches!(
            parse_pin("item:smithing:nail=first"),
            Err(ParseError::InvalidRecipeIndex { .. })
        ));
        assert!(matches!(parse_pin("nail"), Err(ParseError::MissingSeparator(_))));
    }
}
