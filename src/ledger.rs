//! Surplus ledger: units produced but not yet consumed during one resolution pass

use std::collections::BTreeMap;

use crate::models::{Craft, ItemId};
use crate::quantity::normalize_output_qty;

/// Per-item leftover stock. Counts are unsigned and consumption saturates, so an
/// entry can never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurplusLedger {
    stock: BTreeMap<ItemId, u64>,
}

impl SurplusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self, item: &str) -> u64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    pub fn credit(&mut self, item: &ItemId, qty: u64) {
        if qty == 0 {
            return;
        }
        let stock = self.stock.entry(item.clone()).or_default();
        *stock = stock.saturating_add(qty);
    }

    /// Credit everything `runs` executions of `craft` produce, byproducts included
    pub fn credit_run(&mut self, craft: &Craft, runs: u64) {
        for output in &craft.outputs {
            self.credit(&output.item, runs.saturating_mul(normalize_output_qty(output)));
        }
    }

    /// Take up to `qty` units from stock and return the unmet remainder
    pub fn consume(&mut self, item: &str, qty: u64) -> u64 {
        let Some(stock) = self.stock.get_mut(item) else {
            return qty;
        };
        let taken = (*stock).min(qty);
        *stock -= taken;
        if *stock == 0 {
            self.stock.remove(item);
        }
        qty - taken
    }

    /// Lower every entry to what `branch` still holds.
    ///
    /// `branch` is a copy of this ledger plus a run's own leftovers. Stock the branch drew
    /// down stays spent here; stock it only gained is dropped.
    pub fn reconcile(&mut self, branch: &SurplusLedger) {
        self.stock.retain(|item, qty| {
            *qty = (*qty).min(branch.available(item.as_str()));
            *qty > 0
        });
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u64)> {
        self.stock.iter().map(|(id, &qty)| (id, qty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_fully_covered() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:b"), 5);
        assert_eq!(ledger.consume("item:a:b", 3), 0);
        assert_eq!(ledger.available("item:a:b"), 2);
    }

    #[test]
    fn test_consume_partial_zeroes_entry() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:b"), 2);
        assert_eq!(ledger.consume("item:a:b", 5), 3);
        assert_eq!(ledger.available("item:a:b"), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_consume_missing_item() {
        let mut ledger = SurplusLedger::new();
        assert_eq!(ledger.consume("item:a:b", 4), 4);
    }

    #[test]
    fn test_credit_run_includes_byproducts() {
        let craft = Craft::new("smelt", "Smelt")
            .material("item:mining:ore", 2)
            .output("item:smithing:ingot", 1)
            .output_text("item:smithing:slag", "2-5");
        let mut ledger = SurplusLedger::new();
        ledger.credit_run(&craft, 3);
        assert_eq!(ledger.available("item:smithing:ingot"), 3);
        assert_eq!(ledger.available("item:smithing:slag"), 6);
        assert_eq!(ledger.available("item:mining:ore"), 0);
    }

    #[test]
    fn test_credit_saturates() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:b"), u64::MAX);
        ledger.credit(&ItemId::new("item:a:b"), 7);
        assert_eq!(ledger.available("item:a:b"), u64::MAX);
    }

    #[test]
    fn test_reconcile_keeps_draws_drops_gains() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:q"), 4);
        ledger.credit(&ItemId::new("item:a:r"), 2);

        let mut branch = ledger.clone();
        branch.credit(&ItemId::new("item:a:s"), 5);
        branch.credit(&ItemId::new("item:a:r"), 3);
        branch.consume("item:a:q", 3);
        branch.consume("item:a:r", 2);

        ledger.reconcile(&branch);
        assert_eq!(ledger.available("item:a:q"), 1);
        assert_eq!(ledger.available("item:a:r"), 2);
        assert_eq!(ledger.available("item:a:s"), 0);
    }

    #[test]
    fn test_reconcile_removes_spent_entries() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:q"), 2);
        let mut branch = ledger.clone();
        branch.consume("item:a:q", 2);

        ledger.reconcile(&branch);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_zero_credit_leaves_no_entry() {
        let mut ledger = SurplusLedger::new();
        ledger.credit(&ItemId::new("item:a:b"), 0);
        assert!(ledger.is_empty());
    }
}
