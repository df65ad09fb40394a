use std::error::Error;

use clap::Args;
use exo_classify::{classify_params, MissionModel};
use exo_core::rng::{RngHandle, CLASSIFIER_SUBSTREAM};

use super::{print_json, PipelineArgs, StarArgs};

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub star: StarArgs,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
    /// Model to use instead of the mission default.
    #[arg(long)]
    pub model: Option<MissionModel>,
}

pub fn run(args: &ClassifyArgs) -> Result<(), Box<dyn Error>> {
    let star = args.star.load()?;
    let opts = args.pipeline.opts()?;
    let model = args
        .model
        .unwrap_or_else(|| MissionModel::for_mission(&star.mission));
    let mut rng = RngHandle::substream(opts.seed, CLASSIFIER_SUBSTREAM);
    let result = classify_params(&star.physical, model, &opts.sequence, &mut rng);
    print_json(&result)
}
