pub mod analyze;
pub mod catalog;
pub mod classify;
pub mod detect;
pub mod explain;
pub mod validate;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use exo_app::{AnalysisOpts, Catalog, PipelineConfig};
use exo_core::{from_json_slice, to_canonical_json_pretty, StarRecord};
use serde::Serialize;

/// Selects the star a command operates on.
#[derive(Args, Debug)]
pub struct StarArgs {
    /// Catalog identifier of a built-in star.
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    pub star: Option<String>,
    /// JSON file holding a single star record.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl StarArgs {
    pub fn load(&self) -> Result<StarRecord, Box<dyn Error>> {
        match (&self.star, &self.input) {
            (_, Some(path)) => Ok(from_json_slice(&fs::read(path)?)?),
            (Some(id), None) => Ok(Catalog::builtin()?.get(id)?.clone()),
            (None, None) => Err("either --star or --input is required".into()),
        }
    }
}

/// Seed and configuration file shared by the pipeline commands.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Master seed; overrides the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// YAML pipeline configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PipelineArgs {
    pub fn config(&self) -> Result<PipelineConfig, Box<dyn Error>> {
        match &self.config {
            Some(path) => Ok(PipelineConfig::load(path)?),
            None => Ok(PipelineConfig::default()),
        }
    }

    pub fn opts(&self) -> Result<AnalysisOpts, Box<dyn Error>> {
        Ok(self.config()?.analysis_opts(self.seed))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", to_canonical_json_pretty(value)?);
    Ok(())
}
