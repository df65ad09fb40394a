use exo_core::{FeatureImportance, PhysicalParameters};

/// Per-star feature weights, most important first.
///
/// Ties keep their insertion order.
pub fn feature_importances(params: &PhysicalParameters) -> Vec<FeatureImportance> {
    let teff = params.stellar_teff_kelvin();

    let mut features = vec![
        FeatureImportance::new("Orbital Period", (params.period() / 100.0).min(0.4)),
        FeatureImportance::new("Radius Ratio", (params.radius_ratio() * 0.1).min(0.35)),
        FeatureImportance::new(
            "Stellar Temperature",
            if teff > 5000.0 && teff < 7000.0 { 0.25 } else { 0.15 },
        ),
        FeatureImportance::new(
            "Transit Duration",
            if params.duration_ratio() < 0.1 { 0.2 } else { 0.1 },
        ),
        FeatureImportance::new(
            "Surface Gravity",
            if params.stellar_logg() > 4.0 { 0.15 } else { 0.1 },
        ),
        FeatureImportance::new(
            "Apparent Magnitude",
            if params.apparent_magnitude() < 12.0 { 0.2 } else { 0.1 },
        ),
        FeatureImportance::new(
            "Orbital Density",
            if params.orbital_density() < 0.1 { 0.18 } else { 0.08 },
        ),
    ];

    features.sort_by(|a, b| b.value.total_cmp(&a.value));
    features
}
