use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use exo_app::Catalog;
use exo_classify::validate_physical;
use exo_core::{from_json_slice, PhysicalRecord};

use super::print_json;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog identifier of a built-in star.
    #[arg(long, required_unless_present = "record", conflicts_with = "record")]
    pub star: Option<String>,
    /// JSON file holding a (possibly partial) physical record.
    #[arg(long)]
    pub record: Option<PathBuf>,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let record: PhysicalRecord = match (&args.star, &args.record) {
        (_, Some(path)) => from_json_slice(&fs::read(path)?)?,
        (Some(id), None) => Catalog::builtin()?.get(id)?.physical.into(),
        (None, None) => return Err("either --star or --record is required".into()),
    };
    let report = validate_physical(&record);
    print_json(&report)?;
    if !report.valid {
        return Err(format!("{} validation issue(s)", report.errors.len()).into());
    }
    Ok(())
}
