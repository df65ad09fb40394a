use exo_core::{LightCurvePoint, PhaseFoldedPoint};

/// Orbital phase of time `t` for `period`, always in `[0, 1)`.
pub fn phase_of(t: f64, period: f64) -> f64 {
    let phase = t.rem_euclid(period) / period;
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Maps every sample onto orbital phase, keeping input order.
pub fn phase_fold(curve: &[LightCurvePoint], period: f64) -> Vec<PhaseFoldedPoint> {
    curve
        .iter()
        .map(|point| PhaseFoldedPoint {
            phase: phase_of(point.t, period),
            flux: point.flux,
        })
        .collect()
}
