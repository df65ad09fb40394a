//! Synthetic periodogram.
//!
//! This is not a Box-Least-Squares search. Power is a triangular peak within
//! ten percent of the known period over a uniform random background, plus a
//! fixed sinusoidal ripple, giving the detection view a plausible shape.

use exo_core::errors::{ErrorInfo, ExoError};
use exo_core::{LightCurvePoint, PeriodogramPoint, MAX_SERIES_POINTS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SCAN_MIN_FACTOR: f64 = 0.5;
const SCAN_MAX_FACTOR: f64 = 2.0;
const PEAK_HALF_WIDTH: f64 = 0.1;
const BACKGROUND_CEILING: f64 = 0.3;
const RIPPLE_AMPLITUDE: f64 = 0.1;

fn default_num_points() -> usize {
    100
}

/// Options for the synthetic period scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodogramSpec {
    /// Number of trial periods between `0.5 P` and `2 P`.
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

impl Default for PeriodogramSpec {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
        }
    }
}

impl PeriodogramSpec {
    /// Rejects empty scans and scans above [`MAX_SERIES_POINTS`].
    pub fn validate(&self) -> Result<(), ExoError> {
        if self.num_points == 0 || self.num_points > MAX_SERIES_POINTS {
            return Err(ExoError::InvalidConfig(
                ErrorInfo::new(
                    "invalid-scan-points",
                    "periodogram scans take between one trial period and the sample limit",
                )
                .with_context("num_points", self.num_points.to_string())
                .with_context("limit", MAX_SERIES_POINTS.to_string()),
            ));
        }
        Ok(())
    }
}

/// Produces a power-vs-period series peaked at `period`.
///
/// `curve` only provides context for logging; power does not depend on it.
pub fn synthesize_periodogram<R: Rng + ?Sized>(
    period: f64,
    curve: &[LightCurvePoint],
    spec: &PeriodogramSpec,
    rng: &mut R,
) -> Result<Vec<PeriodogramPoint>, ExoError> {
    spec.validate()?;

    let min_period = period * SCAN_MIN_FACTOR;
    let max_period = period * SCAN_MAX_FACTOR;
    let mut points = Vec::with_capacity(spec.num_points);
    for idx in 0..spec.num_points {
        let test_period =
            min_period + (idx as f64 / spec.num_points as f64) * (max_period - min_period);
        let offset = (test_period / period - 1.0).abs();
        let mut power = if offset < PEAK_HALF_WIDTH {
            1.0 - offset * 10.0
        } else {
            rng.gen::<f64>() * BACKGROUND_CEILING
        };
        power += (test_period * 2.0).sin() * RIPPLE_AMPLITUDE;
        points.push(PeriodogramPoint {
            period: test_period,
            power: power.clamp(0.0, 1.0),
        });
    }

    debug!(
        trials = points.len(),
        source_points = curve.len(),
        period,
        "synthesized periodogram"
    );
    Ok(points)
}

/// Trial period with the highest power, if any.
pub fn peak_period(periodogram: &[PeriodogramPoint]) -> Option<PeriodogramPoint> {
    periodogram
        .iter()
        .copied()
        .fold(None, |best: Option<PeriodogramPoint>, point| match best {
            Some(current) if current.power >= point.power => Some(current),
            _ => Some(point),
        })
}
