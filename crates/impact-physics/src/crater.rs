//! Transient crater diameter from pi-group scaling.

use crate::constants::{DEFAULT_TARGET_DENSITY, GRAVITY};
use crate::error::{PhysicsResult, ensure_positive};

/// Tuned scaling constant.
const CRATER_SCALE: f64 = 1.8;

/// Exponent applied to the gravity-scaled size group.
const GRAVITY_GROUP_EXPONENT: f64 = -0.22;

/// Exponent applied to the impactor/target density ratio.
const DENSITY_RATIO_EXPONENT: f64 = 0.3;

/// Target properties used by crater scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterScaling {
    /// Density of the target crust (kg/m^3).
    pub target_density: f64,
    /// Surface gravity (m/s^2).
    pub gravity: f64,
}

impl Default for CraterScaling {
    fn default() -> Self {
        Self {
            target_density: DEFAULT_TARGET_DENSITY,
            gravity: GRAVITY,
        }
    }
}

impl CraterScaling {
    /// Estimate the crater diameter in meters for a land impact.
    ///
    /// `D = 1.8 · (g·d / v²)^-0.22 · d · (ρ / ρ_target)^0.3`
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidParameter`](crate::PhysicsError) if
    /// the diameter, velocity or density is not a finite positive value.
    pub fn crater_diameter(
        &self,
        diameter_m: f64,
        velocity_m_s: f64,
        density: f64,
    ) -> PhysicsResult<f64> {
        let diameter_m = ensure_positive("diameter_m", diameter_m)?;
        let velocity_m_s = ensure_positive("velocity", velocity_m_s)?;
        let density = ensure_positive("density", density)?;
        let target_density = ensure_positive("target_density", self.target_density)?;
        let gravity = ensure_positive("gravity", self.gravity)?;

        let term = gravity * diameter_m / velocity_m_s.powi(2);
        Ok(CRATER_SCALE
            * term.powf(GRAVITY_GROUP_EXPONENT)
            * diameter_m
            * (density / target_density).powf(DENSITY_RATIO_EXPONENT))
    }
}

/// Estimate the crater diameter in meters with explicit target properties.
///
/// Mountain targets use this unmodified value; only ocean impacts are
/// scaled down, by the caller.
pub fn crater_diameter_meters(
    diameter_m: f64,
    velocity_m_s: f64,
    density: f64,
    target_density: f64,
    gravity: f64,
) -> PhysicsResult<f64> {
    CraterScaling {
        target_density,
        gravity,
    }
    .crater_diameter(diameter_m, velocity_m_s, density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhysicsError;

    #[test]
    fn test_reference_crater() {
        let crater = crater_diameter_meters(200.0, 20_000.0, 3000.0, 2500.0, 9.81).unwrap();
        let term: f64 = 9.81 * 200.0 / 4.0e8;
        let expected = 1.8 * term.powf(-0.22) * 200.0 * 1.2_f64.powf(0.3);
        assert!((crater - expected).abs() < 1e-9);
        // Roughly 5.6 km.
        assert!((crater - 5599.0).abs() < 1.0);
    }

    #[test]
    fn test_default_scaling_matches_explicit() {
        let a = CraterScaling::default()
            .crater_diameter(120.0, 17_000.0, 3000.0)
            .unwrap();
        let b = crater_diameter_meters(120.0, 17_000.0, 3000.0, 2500.0, 9.81).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_velocity_rejected() {
        let result = crater_diameter_meters(100.0, 0.0, 3000.0, 2500.0, 9.81);
        assert!(matches!(
            result,
            Err(PhysicsError::InvalidParameter {
                parameter: "velocity",
                ..
            })
        ));
    }

    #[test]
    fn test_denser_impactor_digs_wider() {
        let scaling = CraterScaling::default();
        let rock = scaling.crater_diameter(100.0, 20_000.0, 3000.0).unwrap();
        let iron = scaling.crater_diameter(100.0, 20_000.0, 8000.0).unwrap();
        assert!(iron > rock);
    }

    #[test]
    fn test_bad_target_rejected() {
        let scaling = CraterScaling {
            target_density: 0.0,
            gravity: 9.81,
        };
        assert!(scaling.crater_diameter(100.0, 20_000.0, 3000.0).is_err());
    }
}
