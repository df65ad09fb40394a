use std::error::Error;

use clap::Args;
use exo_curve::{detection_bundle, peak_period};
use tracing::info;

use super::{print_json, PipelineArgs, StarArgs};

#[derive(Args, Debug)]
pub struct DetectArgs {
    #[command(flatten)]
    pub star: StarArgs,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

pub fn run(args: &DetectArgs) -> Result<(), Box<dyn Error>> {
    let star = args.star.load()?;
    let opts = args.pipeline.opts()?;
    let detection = detection_bundle(
        &star.physical,
        &opts.light_curve,
        &opts.periodogram,
        opts.seed,
    )?;
    if let Some(peak) = peak_period(&detection.periodogram) {
        info!(star = %star.id, period = peak.period, power = peak.power, "periodogram peak");
    }
    print_json(&detection)
}
