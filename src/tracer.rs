//! Path tracer: expands a single (item, quantity) request into resolution steps

use crate::catalog::Catalog;
use crate::classify::BaseResources;
use crate::ledger::SurplusLedger;
use crate::models::{ItemId, ResolutionStep, StepKind};
use crate::quantity::normalize_output_qty;
use crate::recipes::RecipePins;

/// Recursive "how do I get there" expansion for one request.
///
/// Steps come out depth-first, pre-order: a craft step is followed by the steps of its
/// materials, in material order.
pub struct PathTracer<'a> {
    catalog: &'a Catalog,
    pins: &'a RecipePins,
    bases: &'a BaseResources,
}

impl<'a> PathTracer<'a> {
    pub fn new(catalog: &'a Catalog, pins: &'a RecipePins, bases: &'a BaseResources) -> Self {
        Self {
            catalog,
            pins,
            bases,
        }
    }

    /// Trace a top-level request with a fresh ledger
    pub fn trace_request(&self, item: &str, qty: u64) -> Vec<ResolutionStep<'a>> {
        let mut surplus = SurplusLedger::new();
        let mut ancestors = Vec::new();
        self.trace(item, qty, 0, &mut surplus, &mut ancestors)
    }

    /// Trace `qty` units of `item` at `depth`.
    ///
    /// Stock taken from `surplus`, here or anywhere below, is removed from the caller's
    /// ledger. Leftovers of the craft run chosen here go to a copy that only this item's
    /// materials see.
    /// `ancestors` is the item chain above this call and is restored before returning.
    pub fn trace(
        &self,
        item: &str,
        qty: u64,
        depth: usize,
        surplus: &mut SurplusLedger,
        ancestors: &mut Vec<ItemId>,
    ) -> Vec<ResolutionStep<'a>> {
        let mut steps = Vec::new();
        self.trace_into(item, qty, depth, surplus, ancestors, &mut steps);
        steps
    }

    fn trace_into(
        &self,
        item: &str,
        qty: u64,
        depth: usize,
        surplus: &mut SurplusLedger,
        ancestors: &mut Vec<ItemId>,
        steps: &mut Vec<ResolutionStep<'a>>,
    ) {
        if qty == 0 {
            return;
        }

        if ancestors.iter().any(|a| a.as_str() == item) {
            log::debug!("circular dependency on {} at depth {}", item, depth);
            steps.push(self.step(item, qty, depth, StepKind::Circular));
            return;
        }

        let Some(entry) = self.catalog.item(item) else {
            log::warn!("skipping unknown item {}", item);
            return;
        };

        if self.bases.is_base(self.catalog, item) {
            steps.push(self.step(item, qty, depth, StepKind::Gather));
            return;
        }

        let remaining = surplus.consume(item, qty);
        if remaining == 0 {
            return;
        }

        let alternatives = self.catalog.crafts_producing(item);
        let Some((craft_index, craft)) = self.pins.selected_craft(item, &alternatives) else {
            steps.push(self.step(item, remaining, depth, StepKind::Gather));
            return;
        };

        let output_qty = craft.output_for(item).map(normalize_output_qty).unwrap_or(0);
        if output_qty == 0 {
            log::debug!("{} yields no {}, gathering instead", craft.id, item);
            steps.push(self.step(item, remaining, depth, StepKind::Gather));
            return;
        }

        let crafts_executed = remaining.div_ceil(output_qty);
        let total_produced = crafts_executed.saturating_mul(output_qty);

        let mut branch = surplus.clone();
        branch.credit_run(craft, crafts_executed);
        branch.consume(item, remaining);

        steps.push(self.step(
            item,
            remaining,
            depth,
            StepKind::Craft {
                craft,
                craft_index,
                alternatives,
                crafts_executed,
                total_produced,
            },
        ));

        ancestors.push(entry.id.clone());
        for material in &craft.materials {
            self.trace_into(
                material.item.as_str(),
                crafts_executed.saturating_mul(material.qty),
                depth + 1,
                &mut branch,
                ancestors,
                steps,
            );
        }
        ancestors.pop();
        surplus.reconcile(&branch);
    }

    fn step(&self, item: &str, qty: u64, depth: usize, kind: StepKind<'a>) -> ResolutionStep<'a> {
        ResolutionStep {
            depth,
            item_id: ItemId::new(item),
            name: self.catalog.name_of(item),
            qty,
            kind,
        }
    }
}
