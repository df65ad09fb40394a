//! Classifier entry points.
//!
//! The `try_*` functions surface errors. Their counterparts never fail:
//! internal errors are logged at `warn` and replaced by
//! [`ClassificationResult::fallback`].

use exo_core::rng::CLASSIFIER_SUBSTREAM;
use exo_core::{
    derive_substream_seed, ClassificationResult, ExoError, Mission, PhysicalParameters,
    PhysicalRecord, RngHandle, StarRecord,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::mission::MissionModel;
use crate::sequence::SequenceSpec;

fn or_fallback(
    outcome: Result<ClassificationResult, ExoError>,
    model: MissionModel,
) -> ClassificationResult {
    match outcome {
        Ok(result) => result,
        Err(err) => {
            warn!(
                family = err.family(),
                code = %err.info().code,
                model = model.name(),
                "classification failed, using fallback"
            );
            ClassificationResult::fallback()
        }
    }
}

/// Classifies validated parameters with `model`.
pub fn try_classify_params<R: Rng + ?Sized>(
    params: &PhysicalParameters,
    model: MissionModel,
    sequence: &SequenceSpec,
    rng: &mut R,
) -> Result<ClassificationResult, ExoError> {
    let result = model.predict_with(params, sequence, rng)?;
    debug!(
        model = model.name(),
        disposition = %result.disposition,
        confidence = result.confidence,
        "classified"
    );
    Ok(result)
}

/// Validates `record` and classifies it with `model`.
pub fn try_classify_with_model<R: Rng + ?Sized>(
    record: &PhysicalRecord,
    model: MissionModel,
    rng: &mut R,
) -> Result<ClassificationResult, ExoError> {
    let params = PhysicalParameters::from_record(record)?;
    try_classify_params(&params, model, &SequenceSpec::default(), rng)
}

/// Hybrid classification that surfaces validation and scoring errors.
pub fn try_classify<R: Rng + ?Sized>(
    record: &PhysicalRecord,
    rng: &mut R,
) -> Result<ClassificationResult, ExoError> {
    try_classify_with_model(record, MissionModel::Kepler, rng)
}

/// Hybrid classification; never fails.
pub fn classify<R: Rng + ?Sized>(record: &PhysicalRecord, rng: &mut R) -> ClassificationResult {
    classify_with_model(record, MissionModel::Kepler, rng)
}

/// Classification with an explicit model; never fails.
pub fn classify_with_model<R: Rng + ?Sized>(
    record: &PhysicalRecord,
    model: MissionModel,
    rng: &mut R,
) -> ClassificationResult {
    or_fallback(try_classify_with_model(record, model, rng), model)
}

/// Classification with the model selected for `mission`; never fails.
pub fn classify_for_mission<R: Rng + ?Sized>(
    record: &PhysicalRecord,
    mission: &Mission,
    rng: &mut R,
) -> ClassificationResult {
    classify_with_model(record, MissionModel::for_mission(mission), rng)
}

/// Classification of already validated parameters; never fails.
pub fn classify_params<R: Rng + ?Sized>(
    params: &PhysicalParameters,
    model: MissionModel,
    sequence: &SequenceSpec,
    rng: &mut R,
) -> ClassificationResult {
    or_fallback(try_classify_params(params, model, sequence, rng), model)
}

/// One row of a batch classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedStar {
    /// Catalog identifier of the star.
    pub star_id: String,
    /// Model chosen for the star's mission.
    pub model: MissionModel,
    /// Classification outcome.
    pub classification: ClassificationResult,
}

/// Seed of the classifier stream for the `index`-th star of a batch.
pub fn batch_star_seed(master_seed: u64, index: usize) -> u64 {
    derive_substream_seed(
        derive_substream_seed(master_seed, CLASSIFIER_SUBSTREAM),
        index as u64,
    )
}

/// Classifies every star with its mission model.
///
/// Each star draws from its own substream so results do not depend on
/// batch order or size.
pub fn classify_batch(stars: &[StarRecord], master_seed: u64) -> Vec<ClassifiedStar> {
    stars
        .iter()
        .enumerate()
        .map(|(index, star)| {
            let model = MissionModel::for_mission(&star.mission);
            let mut rng = RngHandle::from_seed(batch_star_seed(master_seed, index));
            ClassifiedStar {
                star_id: star.id.clone(),
                model,
                classification: classify_params(
                    &star.physical,
                    model,
                    &SequenceSpec::default(),
                    &mut rng,
                ),
            }
        })
        .collect()
}
