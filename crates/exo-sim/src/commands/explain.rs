use std::error::Error;

use clap::Args;
use exo_explain::explain;

use super::{print_json, StarArgs};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub star: StarArgs,
}

pub fn run(args: &ExplainArgs) -> Result<(), Box<dyn Error>> {
    let star = args.star.load()?;
    print_json(&explain(&star.physical, None))
}
