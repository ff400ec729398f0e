//! Crafting planner
//!
//! Resolves what a queue of crafting requests needs: which base resources to gather,
//! which crafts to run and how often, sharing leftover production across requests
//! and stopping safely at cycles in the recipe graph.

pub mod aggregator;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod ledger;
pub mod models;
pub mod planner;
pub mod quantity;
pub mod recipes;
pub mod report;
pub mod sample;
pub mod tracer;

pub use aggregator::{Aggregation, QueueAggregator};
pub use catalog::Catalog;
pub use classify::BaseResources;
pub use error::ParseError;
pub use ledger::SurplusLedger;
pub use models::{
    Craft, CraftId, Item, ItemId, MaterialLine, OutputLine, OutputQty, QueueItem,
    RequirementRef, ResolutionStep, ResourceTotals, StepKind,
};
pub use planner::{ItemPath, Plan, Planner};
pub use quantity::normalize_output_qty;
pub use recipes::RecipePins;
pub use tracer::PathTracer;
