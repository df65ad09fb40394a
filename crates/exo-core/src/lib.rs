#![deny(missing_docs)]
#![doc = "Core data model, error surface and deterministic randomness for the exo transit pipeline."]

pub mod classification;
pub mod errors;
mod hash;
pub mod physical;
pub mod provenance;
pub mod rng;
pub mod samples;
pub mod serde;

pub use classification::{
    ClassificationResult, Disposition, FeatureImportance, ModelUsed, Probabilities,
};
pub use errors::{ErrorInfo, ExoError};
pub use hash::stable_hash_string;
pub use physical::{Coordinates, Mission, PhysicalParameters, PhysicalRecord, StarRecord};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use samples::{LightCurvePoint, PeriodogramPoint, PhaseFoldedPoint, MAX_SERIES_POINTS};
pub use crate::serde::{from_json_slice, to_canonical_json_bytes, to_canonical_json_pretty};
