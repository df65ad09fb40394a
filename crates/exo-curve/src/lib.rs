//! Synthetic detection-stage generators: light curve, detrended curve,
//! periodogram and phase-folded curve.

pub mod detrend;
pub mod fold;
pub mod lightcurve;
pub mod periodogram;

use exo_core::rng::{RngHandle, LIGHT_CURVE_SUBSTREAM, PERIODOGRAM_SUBSTREAM};
use exo_core::{
    ExoError, LightCurvePoint, PeriodogramPoint, PhaseFoldedPoint, PhysicalParameters,
};
use serde::{Deserialize, Serialize};

pub use detrend::detrend;
pub use fold::{phase_fold, phase_of};
pub use lightcurve::{synthesize_light_curve, transit_depth, LightCurveConfig};
pub use periodogram::{peak_period, synthesize_periodogram, PeriodogramSpec};

/// Every series shown on the detection view, derived from one raw curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionData {
    /// Synthesized raw light curve.
    pub raw_light_curve: Vec<LightCurvePoint>,
    /// Raw curve with the slow trend removed.
    pub detrended: Vec<LightCurvePoint>,
    /// Synthetic period scan.
    pub periodogram: Vec<PeriodogramPoint>,
    /// Raw curve folded on the known period.
    pub phase_folded: Vec<PhaseFoldedPoint>,
}

/// Runs all detection generators, drawing noise from independent substreams
/// of `master_seed`.
pub fn detection_bundle(
    params: &PhysicalParameters,
    config: &LightCurveConfig,
    spec: &PeriodogramSpec,
    master_seed: u64,
) -> Result<DetectionData, ExoError> {
    let mut curve_rng = RngHandle::substream(master_seed, LIGHT_CURVE_SUBSTREAM);
    let mut scan_rng = RngHandle::substream(master_seed, PERIODOGRAM_SUBSTREAM);

    let raw_light_curve = synthesize_light_curve(params, config, &mut curve_rng)?;
    let detrended = detrend(&raw_light_curve, params.period());
    let periodogram =
        synthesize_periodogram(params.period(), &raw_light_curve, spec, &mut scan_rng)?;
    let phase_folded = phase_fold(&raw_light_curve, params.period());

    Ok(DetectionData {
        raw_light_curve,
        detrended,
        periodogram,
        phase_folded,
    })
}
