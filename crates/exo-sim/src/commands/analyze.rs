use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use exo_app::{analyze_star, AnalysisReport};
use exo_classify::MissionModel;
use exo_core::to_canonical_json_pretty;
use serde::Serialize;
use tracing::info;

use super::{print_json, PipelineArgs, StarArgs};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub star: StarArgs,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
    /// Override the mission model (kepler, tess, tess-kepler, improve-tess).
    #[arg(long)]
    pub model: Option<MissionModel>,
    /// Directory for the report and series CSVs; prints JSON when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let star = args.star.load()?;
    let mut opts = args.pipeline.opts()?;
    if args.model.is_some() {
        opts.model = args.model;
    }
    let report = analyze_star(&star, &opts)?;

    match &args.out {
        Some(dir) => write_outputs(dir, &report),
        None => print_json(&report),
    }
}

fn write_outputs(dir: &Path, report: &AnalysisReport) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("report.json"), to_canonical_json_pretty(report)?)?;
    write_series(&dir.join("light_curve.csv"), &report.detection.raw_light_curve)?;
    write_series(&dir.join("periodogram.csv"), &report.detection.periodogram)?;
    write_series(&dir.join("phase_folded.csv"), &report.detection.phase_folded)?;
    info!(dir = %dir.display(), hash = %report.analysis_hash, "wrote analysis outputs");
    println!("{}", report.analysis_hash);
    Ok(())
}

fn write_series<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
