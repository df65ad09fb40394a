use exo_core::{ClassificationResult, ExoError, ModelUsed, PhysicalParameters};
use rand::Rng;

use crate::sequence::{predict_sequence, synthesize_flux_series, SequenceSpec};
use crate::tabular::predict_tabular;

/// Share of the blended distribution contributed by the tabular scorer.
pub const TABULAR_WEIGHT: f64 = 0.6;

/// Blends the tabular and sequence scorers `0.6 / 0.4` class by class.
pub fn predict_hybrid<R: Rng + ?Sized>(
    params: &PhysicalParameters,
    spec: &SequenceSpec,
    rng: &mut R,
) -> Result<ClassificationResult, ExoError> {
    spec.validate()?;
    let tabular = predict_tabular(params);
    let series = synthesize_flux_series(params, spec, rng);
    let sequence = predict_sequence(&series)?;
    let blended = tabular.blend(&sequence, TABULAR_WEIGHT);
    Ok(ClassificationResult::from_probabilities(blended, ModelUsed::Hybrid))
}
