//! Plain-text rendering of resolution paths and plan summaries

use std::fmt;

use crate::catalog::Catalog;
use crate::models::{ResolutionStep, StepKind};
use crate::planner::Plan;

/// Format a resolution path as an indented tree, one step per line
pub fn format_path(steps: &[ResolutionStep<'_>]) -> String {
    let mut output = String::new();

    for step in steps {
        let prefix = "  ".repeat(step.depth);
        match &step.kind {
            StepKind::Gather => {
                output.push_str(&format!("{}-> {} x{} (gather)\n", prefix, step.name, step.qty));
            }
            StepKind::Circular => {
                output.push_str(&format!(
                    "{}!! {} x{} (circular, not expanded)\n",
                    prefix, step.name, step.qty
                ));
            }
            StepKind::Craft {
                craft,
                craft_index,
                alternatives,
                crafts_executed,
                total_produced,
            } => {
                let recipe = if alternatives.len() > 1 {
                    format!(" [recipe {}/{}]", craft_index + 1, alternatives.len())
                } else {
                    String::new()
                };
                let requirement = match &craft.requirement {
                    Some(req) => match req.level {
                        Some(level) => format!(" (needs {} {})", req.id, level),
                        None => format!(" (needs {})", req.id),
                    },
                    None => String::new(),
                };
                output.push_str(&format!(
                    "{}{} x{}: {}x {} -> {}{}{}\n",
                    prefix,
                    step.name,
                    step.qty,
                    crafts_executed,
                    craft.name,
                    total_produced,
                    recipe,
                    requirement
                ));
            }
        }
    }

    output
}

/// Summary of a plan with catalog names resolved
#[derive(Debug)]
pub struct PlanSummary {
    pub requests: Vec<(String, u64)>,
    pub crafts: Vec<(String, u64)>,
    pub gather: Vec<(String, u64)>,
    pub leftovers: Vec<(String, u64)>,
}

/// Generate a summary of a plan
pub fn summarize_plan(plan: &Plan<'_>, catalog: &Catalog) -> PlanSummary {
    let requests = plan
        .paths
        .iter()
        .map(|path| (catalog.name_of(path.item_id.as_str()), path.qty))
        .collect();

    let mut crafts: Vec<_> = plan
        .craft_runs
        .iter()
        .map(|(id, &runs)| {
            let name = catalog
                .craft(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string());
            (name, runs)
        })
        .collect();
    crafts.sort_by(|a, b| a.0.cmp(&b.0));

    let mut gather: Vec<_> = plan
        .totals
        .iter()
        .map(|(id, &qty)| (catalog.name_of(id.as_str()), qty))
        .collect();
    gather.sort_by(|a, b| a.0.cmp(&b.0));

    let mut leftovers: Vec<_> = plan
        .surplus
        .iter()
        .map(|(id, qty)| (catalog.name_of(id.as_str()), qty))
        .collect();
    leftovers.sort_by(|a, b| a.0.cmp(&b.0));

    PlanSummary {
        requests,
        crafts,
        gather,
        leftovers,
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Crafting Plan ===")?;
        for (name, qty) in &self.requests {
            writeln!(f, "Target: {} x{}", name, qty)?;
        }
        writeln!(f)?;

        writeln!(f, "Crafts to perform:")?;
        if self.crafts.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (name, runs) in &self.crafts {
            writeln!(f, "  {}x {}", runs, name)?;
        }
        writeln!(f)?;

        writeln!(f, "Resources to gather:")?;
        if self.gather.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (name, qty) in &self.gather {
            writeln!(f, "  {} x{}", name, qty)?;
        }

        if !self.leftovers.is_empty() {
            writeln!(f)?;
            writeln!(f, "Left over:")?;
            for (name, qty) in &self.leftovers {
                writeln!(f, "  {} x{}", name, qty)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BaseResources;
    use crate::models::{Craft, Item, QueueItem};
    use crate::planner::Planner;
    use crate::recipes::RecipePins;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("item:forest:wood", "Wood", 1, "common"),
                Item::new("item:carpentry:plank", "Plank", 1, "common"),
                Item::new("item:carpentry:table", "Table", 2, "common"),
            ],
            vec![
                Craft::new("make_plank", "Make Plank")
                    .material("item:forest:wood", 2)
                    .output("item:carpentry:plank", 3),
                Craft::new("make_table", "Make Table")
                    .requires("carpentry", Some(2))
                    .material("item:carpentry:plank", 4)
                    .output("item:carpentry:table", 1),
            ],
        )
    }

    #[test]
    fn test_format_path() {
        let catalog = catalog();
        let pins = RecipePins::new();
        let bases = BaseResources::default();
        let steps = Planner::new(&catalog, &pins, &bases).trace("item:carpentry:table", 1);

        assert_eq!(
            format_path(&steps),
            "Table x1: 1x Make Table -> 1 (needs carpentry 2)\n\
             \x20 Plank x4: 2x Make Plank -> 6\n\
             \x20   -> Wood x4 (gather)\n"
        );
    }

    #[test]
    fn test_summary_lists_leftovers() {
        let catalog = catalog();
        let pins = RecipePins::new();
        let bases = BaseResources::default();
        let plan = Planner::new(&catalog, &pins, &bases)
            .plan(&[QueueItem::new("item:carpentry:table", 1)]);
        let summary = summarize_plan(&plan, &catalog);

        assert_eq!(summary.requests, vec![("Table".to_string(), 1)]);
        assert_eq!(
            summary.crafts,
            vec![("Make Plank".to_string(), 2), ("Make Table".to_string(), 1)]
        );
        assert_eq!(summary.gather, vec![("Wood".to_string(), 4)]);
        assert_eq!(summary.leftovers, vec![("Plank".to_string(), 2)]);

        let text = summary.to_string();
        assert!(text.contains("Resources to gather:\n  Wood x4\n"));
        assert!(text.contains("Left over:\n  Plank x2\n"));
    }
}
