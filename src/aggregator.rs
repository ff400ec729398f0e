//! Queue resource aggregation with craft batching and shared surplus

use std::collections::{BTreeMap, HashMap};

use crate::catalog::Catalog;
use crate::classify::BaseResources;
use crate::ledger::SurplusLedger;
use crate::models::{Craft, CraftId, ItemId, QueueItem, ResourceTotals};
use crate::quantity::normalize_output_qty;
use crate::recipes::RecipePins;

/// Result of aggregating a whole queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Base resources to gather
    pub totals: ResourceTotals,
    /// Executions of every craft the plan performs
    pub craft_runs: BTreeMap<CraftId, u64>,
    /// Stock left over once every request is satisfied
    pub surplus: SurplusLedger,
}

/// Demanded outputs of one craft, satisfied by a shared run count
struct CraftGroup<'a> {
    craft: &'a Craft,
    demand: Vec<(ItemId, u64)>,
}

/// Works out what a queue needs in total, sharing leftovers between requests.
///
/// Requests produced by the same craft are batched into one run count. Craft groups are
/// settled in catalog order, so totals depend only on the queue contents and the pins.
pub struct QueueAggregator<'a> {
    catalog: &'a Catalog,
    pins: &'a RecipePins,
    bases: &'a BaseResources,
}

impl<'a> QueueAggregator<'a> {
    pub fn new(catalog: &'a Catalog, pins: &'a RecipePins, bases: &'a BaseResources) -> Self {
        Self {
            catalog,
            pins,
            bases,
        }
    }

    /// Base-resource totals for the queue
    pub fn aggregate(&self, queue: &[QueueItem]) -> ResourceTotals {
        self.aggregate_detailed(queue).totals
    }

    /// Totals together with craft run counts and leftover surplus
    pub fn aggregate_detailed(&self, queue: &[QueueItem]) -> Aggregation {
        let mut result = Aggregation::default();

        let mut groups: BTreeMap<usize, CraftGroup<'a>> = BTreeMap::new();
        for (item, qty) in merge_queue(queue) {
            if qty == 0 {
                continue;
            }
            if !self.catalog.contains(item.as_str()) {
                log::warn!("skipping unknown queue item {}", item);
                continue;
            }
            if self.bases.is_base(self.catalog, item.as_str()) {
                add_to(&mut result.totals, item, qty);
                continue;
            }

            let alternatives = self.catalog.crafts_producing(item.as_str());
            let Some((index, craft)) = self.pins.selected_craft(item.as_str(), &alternatives)
            else {
                add_to(&mut result.totals, item, qty);
                continue;
            };
            let position = self.catalog.producer_positions(item.as_str())[index];
            groups
                .entry(position)
                .or_insert_with(|| CraftGroup {
                    craft,
                    demand: Vec::new(),
                })
                .demand
                .push((item, qty));
        }

        for group in groups.into_values() {
            self.settle_group(group, &mut result);
        }

        result
    }

    fn settle_group(&self, group: CraftGroup<'a>, result: &mut Aggregation) {
        let craft = group.craft;

        let mut unmet = Vec::with_capacity(group.demand.len());
        let mut runs = 0;
        for (item, qty) in group.demand {
            let remaining = result.surplus.consume(item.as_str(), qty);
            if remaining == 0 {
                continue;
            }
            let output_qty = craft
                .output_for(item.as_str())
                .map(normalize_output_qty)
                .unwrap_or(0);
            if output_qty == 0 {
                log::debug!("{} yields no {}, gathering instead", craft.id, item);
                add_to(&mut result.totals, item, remaining);
                continue;
            }
            runs = runs.max(remaining.div_ceil(output_qty));
            unmet.push((item, remaining));
        }

        if runs == 0 {
            return;
        }

        log::debug!("{} x{} for {:?}", craft.id, runs, unmet);
        self.execute(craft, runs, result);
        for (item, remaining) in &unmet {
            result.surplus.consume(item.as_str(), *remaining);
        }

        for material in &craft.materials {
            let mut ancestors: Vec<ItemId> = unmet.iter().map(|(item, _)| item.clone()).collect();
            self.resolve(
                &material.item,
                runs.saturating_mul(material.qty),
                &mut ancestors,
                result,
            );
        }
    }

    /// Resolve a material need against the shared ledger, recursing into its craft
    fn resolve(
        &self,
        item: &ItemId,
        qty: u64,
        ancestors: &mut Vec<ItemId>,
        result: &mut Aggregation,
    ) {
        if qty == 0 {
            return;
        }

        if ancestors.contains(item) {
            log::debug!("circular dependency on {}, counting {} as gathered", item, qty);
            add_to(&mut result.totals, item.clone(), qty);
            return;
        }

        if !self.catalog.contains(item.as_str()) {
            log::warn!("skipping unknown material {}", item);
            return;
        }

        if self.bases.is_base(self.catalog, item.as_str()) {
            add_to(&mut result.totals, item.clone(), qty);
            return;
        }

        let remaining = result.surplus.consume(item.as_str(), qty);
        if remaining == 0 {
            return;
        }

        let alternatives = self.catalog.crafts_producing(item.as_str());
        let Some((_, craft)) = self.pins.selected_craft(item.as_str(), &alternatives) else {
            add_to(&mut result.totals, item.clone(), remaining);
            return;
        };

        let output_qty = craft
            .output_for(item.as_str())
            .map(normalize_output_qty)
            .unwrap_or(0);
        if output_qty == 0 {
            log::debug!("{} yields no {}, gathering instead", craft.id, item);
            add_to(&mut result.totals, item.clone(), remaining);
            return;
        }

        let runs = remaining.div_ceil(output_qty);
        self.execute(craft, runs, result);
        result.surplus.consume(item.as_str(), remaining);

        ancestors.push(item.clone());
        for material in &craft.materials {
            self.resolve(
                &material.item,
                runs.saturating_mul(material.qty),
                ancestors,
                result,
            );
        }
        ancestors.pop();
    }

    fn execute(&self, craft: &Craft, runs: u64, result: &mut Aggregation) {
        add_to(&mut result.craft_runs, craft.id.clone(), runs);
        result.surplus.credit_run(craft, runs);
    }
}

fn add_to<K: Ord>(counts: &mut BTreeMap<K, u64>, key: K, qty: u64) {
    let count = counts.entry(key).or_default();
    *count = count.saturating_add(qty);
}

/// Sum quantities per item, keeping first-appearance order
pub fn merge_queue(queue: &[QueueItem]) -> Vec<(ItemId, u64)> {
    let mut merged: Vec<(ItemId, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for entry in queue {
        match index.get(entry.item_id.as_str()) {
            Some(&i) => merged[i].1 = merged[i].1.saturating_add(entry.qty),
            None => {
                index.insert(entry.item_id.as_str(), merged.len());
                merged.push((entry.item_id.clone(), entry.qty));
            }
        }
    }
    merged
}
