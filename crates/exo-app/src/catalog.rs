//! Built-in demo catalog with search and simulated fetches.

use std::time::Duration;

use exo_core::errors::{ErrorInfo, ExoError};
use exo_core::{from_json_slice, Mission, StarRecord};
use tracing::debug;

use crate::latency::simulated_fetch;

const BUILTIN_CATALOG: &str = include_str!("../data/builtin_catalog.json");

/// In-memory star catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    stars: Vec<StarRecord>,
}

impl Catalog {
    /// Wraps `stars`, rejecting duplicate identifiers.
    pub fn new(stars: Vec<StarRecord>) -> Result<Self, ExoError> {
        for (idx, star) in stars.iter().enumerate() {
            if stars[..idx].iter().any(|other| other.id == star.id) {
                return Err(ExoError::InvalidConfig(
                    ErrorInfo::new("duplicate-star-id", "catalog identifiers must be unique")
                        .with_context("id", star.id.clone()),
                ));
            }
        }
        Ok(Self { stars })
    }

    /// Parses a JSON array of star records.
    pub fn from_json(data: &[u8]) -> Result<Self, ExoError> {
        Self::new(from_json_slice(data)?)
    }

    /// The sixteen-star demo catalog.
    pub fn builtin() -> Result<Self, ExoError> {
        Self::from_json(BUILTIN_CATALOG.as_bytes())
    }

    /// All stars in catalog order.
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Looks up a star by identifier.
    pub fn get(&self, id: &str) -> Result<&StarRecord, ExoError> {
        self.stars.iter().find(|star| star.id == id).ok_or_else(|| {
            ExoError::NotFound(
                ErrorInfo::new("unknown-star", format!("no star with id '{id}'"))
                    .with_context("id", id)
                    .with_hint("run `exo-sim catalog` to list identifiers"),
            )
        })
    }

    /// Stars observed by `mission`.
    pub fn by_mission(&self, mission: &Mission) -> Vec<&StarRecord> {
        self.stars
            .iter()
            .filter(|star| &star.mission == mission)
            .collect()
    }

    /// Case-insensitive substring search over name, id and mission label.
    ///
    /// A blank query matches every star of the selected mission.
    pub fn search(&self, query: &str, mission: Option<&Mission>) -> Vec<&StarRecord> {
        let needle = query.trim().to_lowercase();
        self.stars
            .iter()
            .filter(|star| mission.map_or(true, |m| &star.mission == m))
            .filter(|star| {
                needle.is_empty()
                    || star.name.to_lowercase().contains(&needle)
                    || star.id.to_lowercase().contains(&needle)
                    || star.mission.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Returns the stars of `mission` after the simulated API delay.
    pub fn fetch(&self, mission: &Mission, latency: Duration) -> Vec<StarRecord> {
        let stars = simulated_fetch(latency, || {
            self.by_mission(mission).into_iter().cloned().collect::<Vec<_>>()
        });
        debug!(mission = %mission, count = stars.len(), "fetched catalog slice");
        stars
    }
}
