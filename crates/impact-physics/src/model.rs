//! Tunable environment of the impact model.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TARGET_DENSITY, GRAVITY};
use crate::crater::CraterScaling;
use crate::error::{PhysicsError, PhysicsResult, ensure_positive};
use crate::terrain::Terrain;

/// Crater multiplier for water impacts.
pub const OCEAN_CRATER_MULTIPLIER: f64 = 0.7;

/// Retained fraction below which atmospheric loss is called out.
pub const SIGNIFICANT_LOSS_THRESHOLD: f64 = 0.6;

/// Retained energy, in tons of TNT, above which global climate effects
/// are called out.
pub const GLOBAL_CLIMATE_THRESHOLD_TONS: f64 = 1e6;

/// Environment and thresholds used by [`ImpactModel::simulate`].
///
/// Every field has a default, so a partial document overrides only the
/// fields it names:
///
/// ```
/// let model: impact_physics::ImpactModel =
///     serde_json::from_str(r#"{ "gravity": 3.71 }"#).unwrap();
/// assert_eq!(model.target_density, 2500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactModel {
    /// Density of the target crust (kg/m^3).
    pub target_density: f64,
    /// Surface gravity (m/s^2).
    pub gravity: f64,
    /// Crater multiplier applied to ocean impacts.
    pub ocean_crater_multiplier: f64,
    /// Retained fraction below which a loss note is added.
    pub significant_loss_threshold: f64,
    /// Retained tons of TNT above which a climate note is added.
    pub global_climate_threshold_tons: f64,
}

impl Default for ImpactModel {
    fn default() -> Self {
        Self {
            target_density: DEFAULT_TARGET_DENSITY,
            gravity: GRAVITY,
            ocean_crater_multiplier: OCEAN_CRATER_MULTIPLIER,
            significant_loss_threshold: SIGNIFICANT_LOSS_THRESHOLD,
            global_climate_threshold_tons: GLOBAL_CLIMATE_THRESHOLD_TONS,
        }
    }
}

impl ImpactModel {
    /// Check that the configuration describes a usable environment.
    pub fn validate(&self) -> PhysicsResult<()> {
        ensure_positive("target_density", self.target_density)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_fraction("ocean_crater_multiplier", self.ocean_crater_multiplier)?;
        ensure_fraction("significant_loss_threshold", self.significant_loss_threshold)?;
        ensure_positive(
            "global_climate_threshold_tons",
            self.global_climate_threshold_tons,
        )?;
        Ok(())
    }

    /// Crater scaling for this environment.
    #[must_use]
    pub fn crater_scaling(&self) -> CraterScaling {
        CraterScaling {
            target_density: self.target_density,
            gravity: self.gravity,
        }
    }

    /// Crater multiplier for the given terrain.
    ///
    /// Mountains share the land value: their effect is advisory only.
    #[must_use]
    pub fn crater_multiplier(&self, terrain: Terrain) -> f64 {
        match terrain {
            Terrain::Ocean => self.ocean_crater_multiplier,
            Terrain::Land | Terrain::Mountain => 1.0,
        }
    }
}

fn ensure_fraction(parameter: &'static str, value: f64) -> PhysicsResult<f64> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(PhysicsError::invalid(parameter, value, "a fraction in (0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ImpactModel::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let model: ImpactModel =
            serde_json::from_str(r#"{ "target_density": 2700.0, "gravity": 1.62 }"#).unwrap();
        assert_eq!(model.target_density, 2700.0);
        assert_eq!(model.gravity, 1.62);
        assert_eq!(model.ocean_crater_multiplier, OCEAN_CRATER_MULTIPLIER);
        assert_eq!(model.global_climate_threshold_tons, 1e6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let model = ImpactModel {
            gravity: 0.0,
            ..ImpactModel::default()
        };
        assert!(matches!(
            model.validate(),
            Err(PhysicsError::InvalidParameter {
                parameter: "gravity",
                ..
            })
        ));

        let model = ImpactModel {
            ocean_crater_multiplier: 1.5,
            ..ImpactModel::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_crater_multiplier_by_terrain() {
        let model = ImpactModel::default();
        assert_eq!(model.crater_multiplier(Terrain::Ocean), 0.7);
        assert_eq!(model.crater_multiplier(Terrain::Land), 1.0);
        assert_eq!(model.crater_multiplier(Terrain::Mountain), 1.0);
    }
}
