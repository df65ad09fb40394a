use exo_core::FeatureImportance;

/// Global importance of each input feature across the training set.
pub const FEATURE_IMPORTANCE: [(&str, f64); 9] = [
    ("Planet Radius", 0.18),
    ("Stellar Temperature", 0.16),
    ("Orbital Period", 0.15),
    ("Stellar Surface Gravity", 0.14),
    ("Stellar Radius", 0.13),
    ("Transit Duration", 0.12),
    ("Stellar Magnitude", 0.08),
    ("Radius Ratio", 0.02),
    ("Orbital Density", 0.02),
];

/// [`FEATURE_IMPORTANCE`] as owned records, most important first.
pub fn global_feature_importance() -> Vec<FeatureImportance> {
    FEATURE_IMPORTANCE
        .iter()
        .map(|(name, value)| FeatureImportance::new(*name, *value))
        .collect()
}
