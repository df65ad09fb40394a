use std::error::Error;
use std::io;

use clap::{Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    catalog::{self, CatalogArgs},
    classify::{self, ClassifyArgs},
    detect::{self, DetectArgs},
    explain::{self, ExplainArgs},
    validate::{self, ValidateArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "exo-sim", about = "Synthetic exoplanet transit pipeline CLI")]
struct Cli {
    /// Log filter (e.g. `debug`, `exo_curve=trace`); defaults to RUST_LOG, else `info`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog stars with their mission-model classification.
    Catalog(CatalogArgs),
    /// Run the full pipeline on one star and emit the analysis report.
    Analyze(AnalyzeArgs),
    /// Synthesize the detection series for one star.
    Detect(DetectArgs),
    /// Classify one star.
    Classify(ClassifyArgs),
    /// Build the explainability report for one star.
    Explain(ExplainArgs),
    /// Check a physical record for plausibility.
    Validate(ValidateArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    match cli.command {
        Command::Catalog(args) => catalog::run(&args),
        Command::Analyze(args) => analyze::run(&args),
        Command::Detect(args) => detect::run(&args),
        Command::Classify(args) => classify::run(&args),
        Command::Explain(args) => explain::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
