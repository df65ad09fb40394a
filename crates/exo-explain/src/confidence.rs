use exo_core::PhysicalParameters;
use serde::{Deserialize, Serialize};

/// Per-factor confidence and their weighted combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    /// `min(0.9, period / 50)`.
    pub period: f64,
    /// 0.8 for a radius ratio in `(0.05, 0.3)`, else 0.6.
    pub radius: f64,
    /// 0.85 for a temperature in `(4000, 8000)`, else 0.7.
    pub temperature: f64,
    /// 0.8 for a duration ratio in `(0.02, 0.2)`, else 0.6.
    pub duration: f64,
    /// `0.3 period + 0.3 radius + 0.2 temperature + 0.2 duration`.
    pub overall: f64,
}

fn within(value: f64, low: f64, high: f64) -> bool {
    value > low && value < high
}

/// Computes the breakdown for `params`.
pub fn confidence_breakdown(params: &PhysicalParameters) -> ConfidenceBreakdown {
    let period = (params.period() / 50.0).min(0.9);
    let radius = if within(params.radius_ratio(), 0.05, 0.3) { 0.8 } else { 0.6 };
    let temperature = if within(params.stellar_teff_kelvin(), 4000.0, 8000.0) {
        0.85
    } else {
        0.7
    };
    let duration = if within(params.duration_ratio(), 0.02, 0.2) { 0.8 } else { 0.6 };

    ConfidenceBreakdown {
        period,
        radius,
        temperature,
        duration,
        overall: period * 0.3 + radius * 0.3 + temperature * 0.2 + duration * 0.2,
    }
}
