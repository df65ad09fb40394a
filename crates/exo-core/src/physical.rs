//! Physical parameter model and star records.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ExoError};

fn missing(field: &str, label: &str) -> ExoError {
    ExoError::MissingPhysicalData(
        ErrorInfo::new(format!("missing-{field}"), format!("{label} is required"))
            .with_context("field", field),
    )
}

fn invalid(field: &str, message: String, value: f64) -> ExoError {
    ExoError::InvalidPhysicalData(
        ErrorInfo::new(format!("invalid-{field}"), message)
            .with_context("field", field)
            .with_context("value", value.to_string()),
    )
}

/// Partially populated physical record as supplied by callers or catalogs.
///
/// Field names follow the short catalog keys (`period`, `prad`, `srad`, ...).
/// `radius_ratio` and `orbital_density` are emitted for consumers but ignored
/// on input; they are always recomputed from the base fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalRecord {
    /// Orbital period in days.
    pub period: Option<f64>,
    /// Transit duration in hours.
    pub duration: Option<f64>,
    /// Planet radius in Earth radii.
    pub prad: Option<f64>,
    /// Stellar effective temperature in Kelvin.
    pub teff: Option<f64>,
    /// Stellar surface gravity (log g).
    pub logg: Option<f64>,
    /// Stellar radius in solar radii.
    pub srad: Option<f64>,
    /// Apparent magnitude of the host star.
    pub mag: Option<f64>,
    /// Derived planet-to-star radius ratio (output only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_ratio: Option<f64>,
    /// Derived orbital density proxy (output only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_density: Option<f64>,
}

/// Immutable orbital and stellar parameters for one star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PhysicalRecord", into = "PhysicalRecord")]
pub struct PhysicalParameters {
    period: f64,
    transit_duration_hours: f64,
    planet_radius_earth: f64,
    stellar_teff_kelvin: f64,
    stellar_logg: f64,
    stellar_radius_solar: f64,
    apparent_magnitude: f64,
}

fn required(value: Option<f64>, field: &str, label: &str) -> Result<f64, ExoError> {
    match value {
        None => Err(missing(field, label)),
        Some(v) if v == 0.0 => Err(missing(field, label)),
        Some(v) if !v.is_finite() || v < 0.0 => Err(invalid(
            field,
            format!("{label} must be a finite positive number"),
            v,
        )),
        Some(v) => Ok(v),
    }
}

fn optional_non_negative(value: Option<f64>, field: &str, label: &str) -> Result<f64, ExoError> {
    match optional_finite(value, field, label)? {
        v if v < 0.0 => Err(invalid(field, format!("{label} must not be negative"), v)),
        v => Ok(v),
    }
}

fn optional_finite(value: Option<f64>, field: &str, label: &str) -> Result<f64, ExoError> {
    match value {
        None => Ok(0.0),
        Some(v) if !v.is_finite() => Err(invalid(field, format!("{label} must be finite"), v)),
        Some(v) => Ok(v),
    }
}

impl PhysicalParameters {
    /// Builds parameters from fully specified values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        period: f64,
        transit_duration_hours: f64,
        planet_radius_earth: f64,
        stellar_teff_kelvin: f64,
        stellar_logg: f64,
        stellar_radius_solar: f64,
        apparent_magnitude: f64,
    ) -> Result<Self, ExoError> {
        Self::from_record(&PhysicalRecord {
            period: Some(period),
            duration: Some(transit_duration_hours),
            prad: Some(planet_radius_earth),
            teff: Some(stellar_teff_kelvin),
            logg: Some(stellar_logg),
            srad: Some(stellar_radius_solar),
            mag: Some(apparent_magnitude),
            radius_ratio: None,
            orbital_density: None,
        })
    }

    /// Builds parameters from a partial record.
    ///
    /// `period`, `prad` and `srad` are required; the remaining fields fall
    /// back to `0.0` when absent. Present optional values must be finite, and
    /// `duration` and `teff` must not be negative.
    pub fn from_record(record: &PhysicalRecord) -> Result<Self, ExoError> {
        let period = required(record.period, "period", "orbital period")?;
        let planet_radius_earth = required(record.prad, "prad", "planet radius")?;
        let stellar_radius_solar = required(record.srad, "srad", "stellar radius")?;
        Ok(Self {
            period,
            transit_duration_hours: optional_non_negative(
                record.duration,
                "duration",
                "transit duration",
            )?,
            planet_radius_earth,
            stellar_teff_kelvin: optional_non_negative(record.teff, "teff", "stellar temperature")?,
            stellar_logg: optional_finite(record.logg, "logg", "surface gravity")?,
            stellar_radius_solar,
            apparent_magnitude: optional_finite(record.mag, "mag", "apparent magnitude")?,
        })
    }

    /// Orbital period in days.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Transit duration in hours.
    pub fn transit_duration_hours(&self) -> f64 {
        self.transit_duration_hours
    }

    /// Planet radius in Earth radii.
    pub fn planet_radius_earth(&self) -> f64 {
        self.planet_radius_earth
    }

    /// Stellar effective temperature in Kelvin.
    pub fn stellar_teff_kelvin(&self) -> f64 {
        self.stellar_teff_kelvin
    }

    /// Stellar surface gravity.
    pub fn stellar_logg(&self) -> f64 {
        self.stellar_logg
    }

    /// Stellar radius in solar radii.
    pub fn stellar_radius_solar(&self) -> f64 {
        self.stellar_radius_solar
    }

    /// Apparent magnitude of the host star.
    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    /// Planet radius over stellar radius, recomputed on every call.
    pub fn radius_ratio(&self) -> f64 {
        self.planet_radius_earth / self.stellar_radius_solar
    }

    /// Planet radius over orbital period, recomputed on every call.
    pub fn orbital_density(&self) -> f64 {
        self.planet_radius_earth / self.period
    }

    /// Transit duration expressed as a fraction of the orbital period.
    pub fn duration_ratio(&self) -> f64 {
        self.transit_duration_hours / (self.period * 24.0)
    }
}

impl TryFrom<PhysicalRecord> for PhysicalParameters {
    type Error = ExoError;

    fn try_from(record: PhysicalRecord) -> Result<Self, Self::Error> {
        Self::from_record(&record)
    }
}

impl From<PhysicalParameters> for PhysicalRecord {
    fn from(params: PhysicalParameters) -> Self {
        Self {
            period: Some(params.period),
            duration: Some(params.transit_duration_hours),
            prad: Some(params.planet_radius_earth),
            teff: Some(params.stellar_teff_kelvin),
            logg: Some(params.stellar_logg),
            srad: Some(params.stellar_radius_solar),
            mag: Some(params.apparent_magnitude),
            radius_ratio: Some(params.radius_ratio()),
            orbital_density: Some(params.orbital_density()),
        }
    }
}

/// Survey that produced a star's observations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mission {
    /// Kepler prime mission.
    Kepler,
    /// Kepler's extended K2 mission.
    K2,
    /// Transiting Exoplanet Survey Satellite.
    Tess,
    /// Trans-Atlantic Exoplanet Survey.
    Tres,
    /// Any other survey label, preserved verbatim.
    Other(String),
}

impl Mission {
    /// Parses a free-form mission label, case-insensitively.
    pub fn parse(label: &str) -> Self {
        let lowered = label.trim().to_lowercase();
        match lowered.as_str() {
            "kepler" => Mission::Kepler,
            "k2" => Mission::K2,
            "tess" => Mission::Tess,
            _ if lowered.contains("tres") => Mission::Tres,
            _ => Mission::Other(label.trim().to_string()),
        }
    }

    /// Canonical display label.
    pub fn label(&self) -> &str {
        match self {
            Mission::Kepler => "Kepler",
            Mission::K2 => "K2",
            Mission::Tess => "TESS",
            Mission::Tres => "TrES",
            Mission::Other(label) => label,
        }
    }
}

impl Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Mission {
    fn from(value: String) -> Self {
        Mission::parse(&value)
    }
}

impl From<Mission> for String {
    fn from(value: Mission) -> Self {
        value.label().to_string()
    }
}

/// Equatorial sky position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Right ascension.
    pub ra: f64,
    /// Declination.
    pub dec: f64,
}

/// A catalog entry: identity, survey and physical parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    /// Catalog identifier (KIC / TIC number).
    pub id: String,
    /// Display name of the planet.
    pub name: String,
    /// Survey that observed the star.
    pub mission: Mission,
    /// Sky position.
    #[serde(default)]
    pub coordinates: Coordinates,
    /// Physical parameters.
    pub physical: PhysicalParameters,
    /// Discovery date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_date: Option<String>,
}
