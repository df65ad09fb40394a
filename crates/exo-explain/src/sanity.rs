use exo_core::PhysicalParameters;
use serde::{Deserialize, Serialize};

/// Three-level outcome of a sanity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Within expected bounds.
    Pass,
    /// Unusual but possible.
    Warning,
    /// Physically implausible.
    Fail,
}

/// One rule-based plausibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanityCheck {
    /// Check name.
    pub name: String,
    /// Outcome.
    pub status: CheckStatus,
    /// The rule being applied.
    pub description: String,
    /// Formatted observed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

fn check(name: &str, status: CheckStatus, description: &str, value: String) -> SanityCheck {
    SanityCheck {
        name: name.to_string(),
        status,
        description: description.to_string(),
        value: Some(value),
    }
}

fn pass_or_warn(ok: bool) -> CheckStatus {
    if ok {
        CheckStatus::Pass
    } else {
        CheckStatus::Warning
    }
}

/// Runs the five plausibility checks in fixed order.
pub fn sanity_checks(params: &PhysicalParameters) -> Vec<SanityCheck> {
    let duration_ratio = params.duration_ratio();
    let radius_ratio = params.radius_ratio();
    let teff = params.stellar_teff_kelvin();
    let logg = params.stellar_logg();
    let period = params.period();

    let radius_status = if radius_ratio < 0.5 {
        CheckStatus::Pass
    } else if radius_ratio < 1.0 {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };

    vec![
        check(
            "Transit Duration vs Period",
            pass_or_warn(duration_ratio < 0.2),
            "Transit duration should be < 20% of orbital period",
            format!("{:.1}%", duration_ratio * 100.0),
        ),
        check(
            "Planet-to-Star Radius Ratio",
            radius_status,
            "Radius ratio should be < 0.5 for realistic planets",
            format!("{radius_ratio:.3}"),
        ),
        check(
            "Stellar Temperature",
            pass_or_warn(teff > 3000.0 && teff < 10000.0),
            "Temperature should be 3000-10000K for main sequence stars",
            format!("{teff:.0}K"),
        ),
        check(
            "Surface Gravity",
            pass_or_warn(logg > 3.5 && logg < 5.0),
            "log g should be 3.5-5.0 for main sequence stars",
            format!("{logg:.2}"),
        ),
        check(
            "Orbital Period",
            pass_or_warn(period > 0.5 && period < 1000.0),
            "Period should be 0.5-1000 days for detectable planets",
            format!("{period:.2} days"),
        ),
    ]
}
