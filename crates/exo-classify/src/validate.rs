use exo_core::PhysicalRecord;
use serde::{Deserialize, Serialize};

/// Outcome of the physical plausibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` when no message was produced.
    pub valid: bool,
    /// Human readable messages, in check order.
    pub errors: Vec<String>,
}

fn positive(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v > 0.0)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Checks a physical record for plausibility. Never fails.
///
/// Temperature and surface gravity are only range-checked when present and
/// non-zero.
pub fn validate_physical(record: &PhysicalRecord) -> ValidationReport {
    let mut errors = Vec::new();

    if !positive(record.period) {
        errors.push("Orbital period must be positive".to_string());
    }
    if !positive(record.prad) {
        errors.push("Planet radius must be positive".to_string());
    }
    if !positive(record.srad) {
        errors.push("Stellar radius must be positive".to_string());
    }
    if let Some(teff) = present(record.teff) {
        if !(2000.0..=10000.0).contains(&teff) {
            errors.push("Stellar temperature should be between 2000K and 10000K".to_string());
        }
    }
    if let Some(logg) = present(record.logg) {
        if !(3.0..=5.0).contains(&logg) {
            errors.push("Stellar surface gravity should be between 3.0 and 5.0".to_string());
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
