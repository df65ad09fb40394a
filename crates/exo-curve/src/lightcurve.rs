use exo_core::errors::{ErrorInfo, ExoError};
use exo_core::{LightCurvePoint, PhysicalParameters, MAX_SERIES_POINTS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FLUX_FLOOR: f64 = 0.95;
const FLUX_CEILING: f64 = 1.05;
const TRANSIT_CENTER_PHASE: f64 = 0.5;
const VARIABILITY_AMPLITUDE: f64 = 0.0005;
const VARIABILITY_FREQUENCY: f64 = 0.1;

fn config_error(code: &str, message: impl Into<String>, value: f64) -> ExoError {
    ExoError::InvalidConfig(ErrorInfo::new(code, message).with_context("value", value.to_string()))
}

fn default_duration_days() -> f64 {
    30.0
}

fn default_sampling_rate() -> f64 {
    30.0
}

fn default_noise_level() -> f64 {
    0.001
}

/// Sampling configuration for light curve synthesis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LightCurveConfig {
    /// Observation window in days.
    #[serde(default = "default_duration_days")]
    pub duration_days: f64,
    /// Points per day.
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
    /// Peak-to-peak amplitude of the uniform noise, as a flux fraction.
    #[serde(default = "default_noise_level")]
    pub noise_level: f64,
}

impl Default for LightCurveConfig {
    fn default() -> Self {
        Self {
            duration_days: default_duration_days(),
            sampling_rate: default_sampling_rate(),
            noise_level: default_noise_level(),
        }
    }
}

impl LightCurveConfig {
    /// Rejects sampling parameters that cannot produce a time series.
    pub fn validate(&self) -> Result<(), ExoError> {
        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(config_error(
                "invalid-sampling-rate",
                "sampling rate must be a positive number of points per day",
                self.sampling_rate,
            ));
        }
        if !self.duration_days.is_finite() || self.duration_days <= 0.0 {
            return Err(config_error(
                "invalid-duration",
                "observation window must be a positive number of days",
                self.duration_days,
            ));
        }
        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(config_error(
                "invalid-noise-level",
                "noise level must be a non-negative fraction",
                self.noise_level,
            ));
        }
        let requested = self.duration_days * self.sampling_rate;
        if !requested.is_finite() || requested > MAX_SERIES_POINTS as f64 {
            return Err(ExoError::InvalidConfig(
                ErrorInfo::new("too-many-points", "light curve would exceed the sample limit")
                    .with_context("requested", requested.to_string())
                    .with_context("limit", MAX_SERIES_POINTS.to_string())
                    .with_hint("shorten duration_days or lower sampling_rate"),
            ));
        }
        Ok(())
    }

    /// Number of samples the configuration produces.
    pub fn total_points(&self) -> usize {
        (self.duration_days * self.sampling_rate).floor() as usize
    }
}

/// Fractional flux drop while the planet is in transit, `(Rp / Rs)^2`.
pub fn transit_depth(params: &PhysicalParameters) -> f64 {
    params.radius_ratio().powi(2)
}

fn in_transit(phase: f64, transit_duration_days: f64, period: f64) -> bool {
    let half_width = transit_duration_days / period / 2.0;
    (phase - TRANSIT_CENTER_PHASE).abs() < half_width
}

/// Synthesizes a flux time series with a box transit centred at phase 0.5.
///
/// Flux starts at 1.0, loses [`transit_depth`] during transit, receives
/// uniform noise of width `noise_level` drawn from `rng` plus a slow
/// sinusoidal stellar variability term, and is clamped to `[0.95, 1.05]`.
pub fn synthesize_light_curve<R: Rng + ?Sized>(
    params: &PhysicalParameters,
    config: &LightCurveConfig,
    rng: &mut R,
) -> Result<Vec<LightCurvePoint>, ExoError> {
    config.validate()?;

    let period = params.period();
    let depth = transit_depth(params);
    let transit_duration_days = params.transit_duration_hours() / 24.0;
    let total_points = config.total_points();

    let mut curve = Vec::with_capacity(total_points);
    for idx in 0..total_points {
        let t = idx as f64 / config.sampling_rate;
        let phase = t.rem_euclid(period) / period;

        let mut flux = 1.0;
        if in_transit(phase, transit_duration_days, period) {
            flux -= depth;
        }
        let noise = (rng.gen::<f64>() - 0.5) * config.noise_level;
        flux += noise;
        flux += (t * VARIABILITY_FREQUENCY).sin() * VARIABILITY_AMPLITUDE;

        curve.push(LightCurvePoint {
            t,
            flux: flux.clamp(FLUX_FLOOR, FLUX_CEILING),
        });
    }

    debug!(points = curve.len(), depth, period, "synthesized light curve");
    Ok(curve)
}
