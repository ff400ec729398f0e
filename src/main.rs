//! Crafting Planner
//!
//! Command-line front end for the crafting-resolution engine.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use craft_planner::recipes::parse_pin;
use craft_planner::report::{format_path, summarize_plan};
use craft_planner::sample::sample_catalog;
use craft_planner::{normalize_output_qty, BaseResources, ItemId, Planner, QueueItem, RecipePins};

#[derive(Parser)]
#[command(name = "craft-planner")]
#[command(about = "Plan crafting queues: what to gather, what to craft, what is left over")]
struct Cli {
    /// Pin the recipe used for an item, as `item=index` (repeatable)
    #[arg(short, long = "pin", value_parser = parse_pin, global = true)]
    pins: Vec<(ItemId, usize)>,

    /// Treat an item as a base resource even if something crafts it (repeatable)
    #[arg(short, long = "base", global = true)]
    bases: Vec<String>,

    /// Do not start from the built-in base-resource list
    #[arg(long, global = true)]
    no_default_bases: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a whole queue into resources to gather and crafts to perform
    Plan {
        /// Queue entries as `item=quantity`
        #[arg(required = true)]
        queue: Vec<QueueItem>,

        /// Show the path for every queued item
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how to obtain a single item
    Trace {
        /// Item id (e.g. "item:carpentry:table")
        item: String,

        /// Quantity wanted
        #[arg(short, long, default_value = "1")]
        qty: u64,
    },

    /// List every item in the catalog
    Items,

    /// Show the recipes that produce an item, with their pin indices
    Recipes {
        /// Item id
        item: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let catalog = sample_catalog();
    let pins: RecipePins = cli.pins.into_iter().collect();
    let mut bases = if cli.no_default_bases {
        BaseResources::empty()
    } else {
        BaseResources::default()
    };
    for id in cli.bases {
        bases.insert(ItemId::new(id));
    }
    let planner = Planner::new(&catalog, &pins, &bases);

    match cli.command {
        Commands::Plan { queue, verbose } => {
            let plan = planner.plan(&queue);

            if verbose {
                for path in &plan.paths {
                    println!(
                        "Path for {} x{}:\n",
                        catalog.name_of(path.item_id.as_str()),
                        path.qty
                    );
                    println!("{}", format_path(&path.steps));
                }
            }

            println!("{}", summarize_plan(&plan, &catalog));
        }

        Commands::Trace { item, qty } => {
            if !catalog.contains(&item) {
                bail!("item '{}' not found", item);
            }
            let steps = planner.trace(&item, qty);
            if steps.is_empty() {
                println!("Nothing to do.");
            } else {
                print!("{}", format_path(&steps));
            }
            if steps.iter().any(|s| s.is_circular()) {
                println!("\nSome branches loop back on themselves; try another recipe with --pin.");
            }
        }

        Commands::Items => {
            println!("{:<32} {:<20} {:>4} {:<10} {}", "Id", "Name", "Tier", "Rank", "Kind");
            println!("{}", "-".repeat(76));
            for item in catalog.items() {
                let kind = if bases.is_base(&catalog, item.id.as_str()) {
                    "base"
                } else {
                    "crafted"
                };
                println!(
                    "{:<32} {:<20} {:>4} {:<10} {}",
                    item.id, item.name, item.tier, item.rank, kind
                );
            }
        }

        Commands::Recipes { item } => {
            let Some(entry) = catalog.item(&item) else {
                bail!("item '{}' not found", item);
            };
            let recipes = catalog.crafts_producing(&item);
            if recipes.is_empty() {
                println!("{} has no recipes; it is gathered.", entry.name);
                return Ok(());
            }

            let active = pins.active_index(&item, recipes.len());
            println!("Recipes for {}:", entry.name);
            for (i, craft) in recipes.iter().enumerate() {
                let marker = if i == active { "*" } else { " " };
                println!("{} [{}] {} ({})", marker, i, craft.name, craft.id);
                for material in &craft.materials {
                    println!(
                        "      needs {} x{}",
                        catalog.name_of(material.item.as_str()),
                        material.qty
                    );
                }
                for output in &craft.outputs {
                    println!(
                        "      makes {} x{}",
                        catalog.name_of(output.item.as_str()),
                        normalize_output_qty(output)
                    );
                }
            }
            if bases.is_allow_listed(&item) {
                println!("\n{} is on the base-resource list, so plans gather it.", entry.name);
            }
        }
    }

    Ok(())
}
