//! One resolution call: totals for the whole queue plus a path per queued item

use std::collections::BTreeMap;

use crate::aggregator::{merge_queue, QueueAggregator};
use crate::catalog::Catalog;
use crate::classify::BaseResources;
use crate::ledger::SurplusLedger;
use crate::models::{CraftId, ItemId, QueueItem, ResolutionStep, ResourceTotals};
use crate::recipes::RecipePins;
use crate::tracer::PathTracer;

/// Path for one (merged) queue entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPath<'a> {
    pub item_id: ItemId,
    pub qty: u64,
    pub steps: Vec<ResolutionStep<'a>>,
}

/// Everything the UI needs after a queue or pin change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<'a> {
    pub totals: ResourceTotals,
    pub craft_runs: BTreeMap<CraftId, u64>,
    pub surplus: SurplusLedger,
    pub paths: Vec<ItemPath<'a>>,
}

/// Snapshot of catalog, pins and base allow-list for planning.
///
/// Holds no state between calls; every call starts from an empty ledger.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    pins: &'a RecipePins,
    bases: &'a BaseResources,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, pins: &'a RecipePins, bases: &'a BaseResources) -> Self {
        Self {
            catalog,
            pins,
            bases,
        }
    }

    pub fn tracer(&self) -> PathTracer<'a> {
        PathTracer::new(self.catalog, self.pins, self.bases)
    }

    pub fn aggregator(&self) -> QueueAggregator<'a> {
        QueueAggregator::new(self.catalog, self.pins, self.bases)
    }

    /// Path for a single request
    pub fn trace(&self, item: &str, qty: u64) -> Vec<ResolutionStep<'a>> {
        self.tracer().trace_request(item, qty)
    }

    /// Base-resource totals for a queue
    pub fn aggregate(&self, queue: &[QueueItem]) -> ResourceTotals {
        self.aggregator().aggregate(queue)
    }

    pub fn plan(&self, queue: &[QueueItem]) -> Plan<'a> {
        let aggregation = self.aggregator().aggregate_detailed(queue);
        let tracer = self.tracer();
        let paths = merge_queue(queue)
            .into_iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(item_id, qty)| {
                let steps = tracer.trace_request(item_id.as_str(), qty);
                ItemPath {
                    item_id,
                    qty,
                    steps,
                }
            })
            .collect();

        Plan {
            totals: aggregation.totals,
            craft_runs: aggregation.craft_runs,
            surplus: aggregation.surplus,
            paths,
        }
    }
}
