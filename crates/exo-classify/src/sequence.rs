//! Flux-series scorer ("LSTM-like").
//!
//! The scorer looks only at summary statistics of a flux series: mean,
//! population standard deviation and fractional depth `(max - min) / max`.

use exo_core::errors::{ErrorInfo, ExoError};
use exo_core::{PhysicalParameters, Probabilities, MAX_SERIES_POINTS};
use rand::Rng;
use serde::{Deserialize, Serialize};

fn default_points() -> usize {
    200
}

fn default_noise() -> f64 {
    0.01
}

/// Shape of the flux series synthesized for the sequence scorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SequenceSpec {
    /// Number of samples spread over two orbital periods.
    #[serde(default = "default_points")]
    pub points: usize,
    /// Peak-to-peak amplitude of the uniform noise.
    #[serde(default = "default_noise")]
    pub noise_level: f64,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self {
            points: default_points(),
            noise_level: default_noise(),
        }
    }
}

impl SequenceSpec {
    /// Rejects series the scorer cannot synthesize.
    pub fn validate(&self) -> Result<(), ExoError> {
        if self.points == 0 || self.points > MAX_SERIES_POINTS {
            return Err(ExoError::InvalidConfig(
                ErrorInfo::new(
                    "invalid-sequence-points",
                    "sequence scorer takes between one flux sample and the sample limit",
                )
                .with_context("points", self.points.to_string())
                .with_context("limit", MAX_SERIES_POINTS.to_string()),
            ));
        }
        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(ExoError::InvalidConfig(
                ErrorInfo::new(
                    "invalid-sequence-noise",
                    "sequence noise level must be a non-negative fraction",
                )
                .with_context("value", self.noise_level.to_string()),
            ));
        }
        Ok(())
    }
}

/// Summary statistics of a flux series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxSummary {
    /// Mean flux.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// `(max - min) / max`.
    pub depth: f64,
}

/// Synthesizes the scorer's flux series: two orbital periods with a Gaussian
/// dip of depth `radius_ratio^2 * 0.01` at the start of each orbit.
pub fn synthesize_flux_series<R: Rng + ?Sized>(
    params: &PhysicalParameters,
    spec: &SequenceSpec,
    rng: &mut R,
) -> Vec<f64> {
    let period = params.period();
    let duration = params.transit_duration_hours();
    let depth = params.radius_ratio().powi(2) * 0.01;

    (0..spec.points)
        .map(|idx| {
            let t = idx as f64 / spec.points as f64 * period * 2.0;
            let phase = t.rem_euclid(period) / period;
            let mut flux = 1.0 + (rng.gen::<f64>() - 0.5) * spec.noise_level;
            if phase < duration / period {
                let offset = (phase * period - duration / 2.0) / (duration / 4.0);
                flux -= depth * (-offset.powi(2)).exp();
            }
            flux
        })
        .collect()
}

/// Computes mean, standard deviation and fractional depth of `series`.
pub fn summarize(series: &[f64]) -> Result<FluxSummary, ExoError> {
    if series.is_empty() {
        return Err(ExoError::InvalidConfig(ErrorInfo::new(
            "empty-flux-series",
            "sequence scoring requires at least one flux sample",
        )));
    }
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let std = (series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(FluxSummary {
        mean,
        std,
        depth: (max - min) / max,
    })
}

/// Scores a flux series summary.
pub fn score_sequence(summary: &FluxSummary) -> Probabilities {
    let mut confirmed = 0.2;
    let mut candidate = 0.3;
    let mut false_positive = 0.5;

    if summary.depth > 0.01 && summary.depth < 0.1 {
        confirmed += 0.4;
        candidate += 0.2;
    } else if summary.depth > 0.1 {
        false_positive += 0.4;
    } else {
        candidate += 0.3;
    }

    if summary.std < 0.01 {
        confirmed += 0.2;
    } else if summary.std > 0.05 {
        false_positive += 0.3;
    }

    Probabilities::from_scores(confirmed, candidate, false_positive)
}

/// Summarizes and scores `series`.
pub fn predict_sequence(series: &[f64]) -> Result<Probabilities, ExoError> {
    Ok(score_sequence(&summarize(series)?))
}
