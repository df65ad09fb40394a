use exo_core::PhysicalParameters;

/// Mean and standard deviation of one training feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    /// Training-set mean.
    pub mean: f64,
    /// Training-set standard deviation.
    pub std: f64,
}

impl FeatureStats {
    const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// z-score of `value`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }

    /// Physical value for z-score `z`.
    pub fn denormalize(&self, z: f64) -> f64 {
        z * self.std + self.mean
    }
}

/// Index of each tabular feature within a [`TabularFeatures`] vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Period = 0,
    Duration = 1,
    PlanetRadius = 2,
    Temperature = 3,
    SurfaceGravity = 4,
    StellarRadius = 5,
    Magnitude = 6,
    RadiusRatio = 7,
    OrbitalDensity = 8,
}

/// Per-feature statistics for the nine tabular features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationTable {
    stats: [FeatureStats; 9],
}

/// Statistics of the Kepler cumulative training table.
pub const KEPLER_TABLE: NormalizationTable = NormalizationTable {
    stats: [
        FeatureStats::new(45.2, 67.8),
        FeatureStats::new(3.2, 2.1),
        FeatureStats::new(2.1, 1.8),
        FeatureStats::new(5500.0, 1200.0),
        FeatureStats::new(4.4, 0.3),
        FeatureStats::new(1.0, 0.4),
        FeatureStats::new(12.5, 2.1),
        FeatureStats::new(1.8, 1.2),
        FeatureStats::new(0.05, 0.08),
    ],
};

/// Statistics of the TESS objects-of-interest training table.
pub const TESS_TABLE: NormalizationTable = NormalizationTable {
    stats: [
        FeatureStats::new(12.5, 25.3),
        FeatureStats::new(2.8, 1.9),
        FeatureStats::new(2.3, 2.1),
        FeatureStats::new(5600.0, 1100.0),
        FeatureStats::new(4.4, 0.3),
        FeatureStats::new(1.1, 0.5),
        FeatureStats::new(11.8, 2.3),
        FeatureStats::new(2.1, 1.4),
        FeatureStats::new(0.18, 0.25),
    ],
};

/// z-scored tabular feature vector tied to the table that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabularFeatures {
    table: NormalizationTable,
    z: [f64; 9],
}

impl NormalizationTable {
    /// Normalizes the nine tabular features of `params`.
    pub fn normalize(&self, params: &PhysicalParameters) -> TabularFeatures {
        let raw = [
            params.period(),
            params.transit_duration_hours(),
            params.planet_radius_earth(),
            params.stellar_teff_kelvin(),
            params.stellar_logg(),
            params.stellar_radius_solar(),
            params.apparent_magnitude(),
            params.radius_ratio(),
            params.orbital_density(),
        ];
        let mut z = [0.0; 9];
        for (slot, (value, stats)) in z.iter_mut().zip(raw.iter().zip(self.stats.iter())) {
            *slot = stats.normalize(*value);
        }
        TabularFeatures { table: *self, z }
    }

    /// Statistics for one feature.
    pub fn stats(&self, feature: Feature) -> FeatureStats {
        self.stats[feature as usize]
    }
}

impl TabularFeatures {
    /// z-score of `feature`.
    pub fn z(&self, feature: Feature) -> f64 {
        self.z[feature as usize]
    }

    /// Value of `feature` mapped back to physical units.
    pub fn physical(&self, feature: Feature) -> f64 {
        self.table.stats(feature).denormalize(self.z(feature))
    }
}

/// Flux proxy `10^(-0.4 mag)` used by the survey-level models.
pub fn magnitude_flux(magnitude: f64) -> f64 {
    10f64.powf(-0.4 * magnitude)
}
