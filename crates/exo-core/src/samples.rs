//! Time series value types produced by the synthesis stages.

use serde::{Deserialize, Serialize};

/// Largest number of samples any synthesized series may hold.
pub const MAX_SERIES_POINTS: usize = 10_000_000;

/// One flux measurement at time `t` (days since the start of observation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightCurvePoint {
    /// Observation time in days.
    pub t: f64,
    /// Normalised flux.
    pub flux: f64,
}

/// One trial period and its synthetic detection power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodogramPoint {
    /// Trial period in days.
    pub period: f64,
    /// Detection power in `[0, 1]`.
    pub power: f64,
}

/// One flux measurement re-expressed in orbital phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseFoldedPoint {
    /// Orbital phase in `[0, 1)`.
    pub phase: f64,
    /// Normalised flux.
    pub flux: f64,
}
