//! Feed data model and the asteroid summary derived from it.
//!
//! Only the fields the impact model needs are deserialized; everything
//! else in the feed is ignored.

use std::collections::BTreeMap;

use impact_physics::constants::LUNAR_DISTANCE_KM;
use impact_physics::units::km_per_s_to_m_per_s;
use impact_physics::{ImpactSimulationInput, Terrain};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Request parameters for a feed window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
}

impl FeedRequest {
    /// Create a new feed request.
    #[must_use]
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// A feed response: objects grouped by close-approach date.
///
/// Dates are ISO strings, so map order is chronological.
#[derive(Debug, Clone, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub element_count: Option<u32>,
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObject>>,
}

impl Feed {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the body is not a feed document.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| Error::Json {
            context: "neo feed",
            message: e.to_string(),
        })
    }

    /// Pick the object to feature: the first potentially hazardous one in
    /// date order, otherwise the first object of the first non-empty day.
    #[must_use]
    pub fn featured(&self) -> Option<&NearEarthObject> {
        self.near_earth_objects
            .values()
            .flatten()
            .find(|neo| neo.is_potentially_hazardous_asteroid)
            .or_else(|| self.near_earth_objects.values().flatten().next())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

/// Velocities arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

/// Distances arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

/// Display-ready facts about one object and its next close approach.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidSummary {
    pub name: String,
    /// Designation, or the feed id when there is none.
    pub designation: String,
    /// Rounded minimum estimated diameter (m).
    pub diameter_min_m: f64,
    /// Rounded maximum estimated diameter (m).
    pub diameter_max_m: f64,
    /// Relative velocity (km/s).
    pub velocity_km_s: f64,
    pub approach_date: String,
    /// Miss distance (km).
    pub miss_distance_km: f64,
    pub is_hazardous: bool,
}

impl AsteroidSummary {
    /// Miss distance in lunar distances.
    #[must_use]
    pub fn miss_distance_lunar(&self) -> f64 {
        self.miss_distance_km / LUNAR_DISTANCE_KM
    }

    /// Mean of the estimated diameter range (m).
    #[must_use]
    pub fn mean_diameter_m(&self) -> f64 {
        (self.diameter_min_m + self.diameter_max_m) / 2.0
    }

    /// Simulation input for this object striking the given terrain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Physics`] if the size or velocity is not positive.
    pub fn to_simulation_input(&self, terrain: Terrain) -> Result<ImpactSimulationInput> {
        let input = ImpactSimulationInput::new(
            self.mean_diameter_m(),
            km_per_s_to_m_per_s(self.velocity_km_s),
        )
        .with_terrain(terrain);
        input.validate()?;
        Ok(input)
    }
}

impl TryFrom<&NearEarthObject> for AsteroidSummary {
    type Error = Error;

    fn try_from(neo: &NearEarthObject) -> Result<Self> {
        let approach = neo
            .close_approach_data
            .first()
            .ok_or_else(|| Error::InvalidData {
                context: "close approach data",
                detail: format!("object {} has no close approaches", neo.id),
            })?;

        let diameter = neo.estimated_diameter.meters;
        Ok(Self {
            name: neo.name.clone(),
            designation: neo.designation.clone().unwrap_or_else(|| neo.id.clone()),
            diameter_min_m: diameter.estimated_diameter_min.round(),
            diameter_max_m: diameter.estimated_diameter_max.round(),
            velocity_km_s: parse_decimal(
                "relative velocity",
                &approach.relative_velocity.kilometers_per_second,
            )?,
            approach_date: approach.close_approach_date.clone(),
            miss_distance_km: parse_decimal("miss distance", &approach.miss_distance.kilometers)?,
            is_hazardous: neo.is_potentially_hazardous_asteroid,
        })
    }
}

fn parse_decimal(context: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::InvalidData {
            context,
            detail: format!("expected a decimal number, got '{value}'"),
        })
}
