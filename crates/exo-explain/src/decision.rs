use exo_core::PhysicalParameters;
use serde::{Deserialize, Serialize};

/// Side of the threshold the observed value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Strictly greater than the threshold.
    Above,
    /// Less than or equal to the threshold.
    Below,
}

/// Direction in which a node pushes the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Supports a planetary interpretation.
    Positive,
    /// Argues against it.
    Negative,
    /// Inconclusive.
    Neutral,
}

/// One step of the decision trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionNode {
    /// Feature compared.
    pub feature: String,
    /// Threshold it is compared against.
    pub threshold: f64,
    /// Observed value.
    pub actual_value: f64,
    /// Outcome of `actual_value > threshold`.
    pub decision: Decision,
    /// Impact of the outcome.
    pub impact: Impact,
    /// Explanation of the outcome.
    pub description: String,
}

struct Rule {
    feature: &'static str,
    threshold: f64,
    above: (Impact, &'static str),
    below: (Impact, &'static str),
}

const RULES: [Rule; 4] = [
    Rule {
        feature: "Orbital Period",
        threshold: 10.0,
        above: (Impact::Positive, "Long period suggests confirmed planet"),
        below: (Impact::Neutral, "Short period needs more validation"),
    },
    Rule {
        feature: "Radius Ratio",
        threshold: 0.1,
        above: (Impact::Positive, "Significant transit depth detected"),
        below: (Impact::Negative, "Very small transit depth"),
    },
    Rule {
        feature: "Stellar Temperature",
        threshold: 5000.0,
        above: (Impact::Positive, "Good stellar temperature for planet detection"),
        below: (Impact::Neutral, "Cooler star, harder to detect"),
    },
    Rule {
        feature: "Transit Duration Ratio",
        threshold: 0.05,
        above: (Impact::Positive, "Reasonable transit duration"),
        below: (Impact::Negative, "Very short transit duration"),
    },
];

impl Rule {
    fn apply(&self, actual_value: f64) -> DecisionNode {
        let (decision, (impact, description)) = if actual_value > self.threshold {
            (Decision::Above, self.above)
        } else {
            (Decision::Below, self.below)
        };
        DecisionNode {
            feature: self.feature.to_string(),
            threshold: self.threshold,
            actual_value,
            decision,
            impact,
            description: description.to_string(),
        }
    }
}

/// Four-node decision trace over period, radius ratio, temperature and
/// duration ratio.
pub fn decision_path(params: &PhysicalParameters) -> Vec<DecisionNode> {
    let observed = [
        params.period(),
        params.radius_ratio(),
        params.stellar_teff_kelvin(),
        params.duration_ratio(),
    ];
    RULES
        .iter()
        .zip(observed)
        .map(|(rule, value)| rule.apply(value))
        .collect()
}
