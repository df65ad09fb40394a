use exo_core::LightCurvePoint;

const TREND_AMPLITUDE: f64 = 0.002;
const TREND_PERIOD_MULTIPLE: f64 = 3.0;

/// Removes the slow sinusoidal trend (three orbital periods long) from a curve.
///
/// Output has the same length and ordering as `curve`.
pub fn detrend(curve: &[LightCurvePoint], period: f64) -> Vec<LightCurvePoint> {
    curve
        .iter()
        .map(|point| LightCurvePoint {
            t: point.t,
            flux: point.flux - (point.t / (period * TREND_PERIOD_MULTIPLE)).sin() * TREND_AMPLITUDE,
        })
        .collect()
}
