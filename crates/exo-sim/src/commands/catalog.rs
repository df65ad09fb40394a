use std::error::Error;
use std::time::Duration;

use clap::Args;
use exo_app::{simulated_fetch, Catalog};
use exo_classify::classify_batch;
use exo_core::Mission;

use super::print_json;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list stars observed by this mission.
    #[arg(long)]
    pub mission: Option<String>,
    /// Case-insensitive substring over name, id and mission.
    #[arg(long, default_value = "")]
    pub query: String,
    /// Simulated fetch latency in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub latency_ms: u64,
    /// Seed for the classifier streams.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::builtin()?;
    let mission = args.mission.as_deref().map(Mission::parse);
    let stars: Vec<_> = simulated_fetch(Duration::from_millis(args.latency_ms), || {
        catalog
            .search(&args.query, mission.as_ref())
            .into_iter()
            .cloned()
            .collect()
    });
    let rows = classify_batch(&stars, args.seed);

    if args.json {
        return print_json(&rows);
    }
    for (star, row) in stars.iter().zip(&rows) {
        println!(
            "{:<18} {:<14} {:<7} {:<13} {:<15} {:.3}",
            star.id,
            star.name,
            star.mission.label(),
            row.model.name(),
            row.classification.disposition.label(),
            row.classification.confidence,
        );
    }
    Ok(())
}
