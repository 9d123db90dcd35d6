//! Quick impact estimate for the calculator panel.
//!
//! Unlike [`simulate_impact`](crate::simulate_impact), this ignores the
//! atmosphere and the target terrain, and reports on the megaton danger
//! scale and the size-based tsunami scale.

use serde::{Deserialize, Serialize};

use crate::classify::{
    DangerLevel, TsunamiRisk, danger_level_by_megatons, energy_to_megatons_tnt, richter_magnitude,
    tsunami_potential_by_diameter,
};
use crate::constants::DEFAULT_IMPACTOR_DENSITY;
use crate::energy::{kinetic_energy_joules, mass_kg};
use crate::error::{PhysicsResult, ensure_entry_angle, ensure_positive, ensure_representable};
use crate::units::{degrees_to_radians, km_per_s_to_m_per_s};

/// Calculator readouts for one set of slider values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickEstimate {
    /// Impactor mass in metric tons.
    pub mass_tons: f64,
    /// Kinetic energy at impact (J).
    pub kinetic_energy_j: f64,
    /// Kinetic energy in megatons of TNT.
    pub megatons_tnt: f64,
    /// Crater diameter from the energy scaling law (m).
    pub crater_diameter_m: f64,
    /// Approximate Richter magnitude.
    pub richter_magnitude: f64,
    /// `sin(angle)`; shown as a percentage.
    pub angle_efficiency: f64,
    pub tsunami_risk: TsunamiRisk,
    pub danger_level: DangerLevel,
}

impl QuickEstimate {
    /// Estimate from the calculator sliders: diameter in meters, speed in
    /// km/s and entry angle in degrees. Density is fixed at 3000 kg/m^3.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidParameter`](crate::PhysicsError) for a
    /// non-positive size or speed, an angle outside (0, 90], or sizes and
    /// speeds whose energy is not representable.
    pub fn from_slider(diameter_m: f64, speed_km_s: f64, angle_deg: f64) -> PhysicsResult<Self> {
        let diameter_m = ensure_positive("diameter_m", diameter_m)?;
        let speed_km_s = ensure_positive("velocity", speed_km_s)?;
        let angle_deg = ensure_entry_angle(angle_deg)?;

        let velocity = km_per_s_to_m_per_s(speed_km_s);
        let mass = mass_kg(diameter_m, DEFAULT_IMPACTOR_DENSITY);
        let kinetic_energy_j = ensure_representable(
            "kinetic_energy_j",
            kinetic_energy_joules(diameter_m, velocity, DEFAULT_IMPACTOR_DENSITY),
        )?;
        let megatons_tnt = energy_to_megatons_tnt(kinetic_energy_j);

        Ok(Self {
            mass_tons: mass / 1000.0,
            kinetic_energy_j,
            megatons_tnt,
            crater_diameter_m: crater_from_megatons(megatons_tnt),
            richter_magnitude: richter_magnitude(kinetic_energy_j),
            angle_efficiency: degrees_to_radians(angle_deg).sin(),
            tsunami_risk: tsunami_potential_by_diameter(diameter_m),
            danger_level: danger_level_by_megatons(megatons_tnt),
        })
    }

    /// Angle efficiency as a whole percentage.
    #[must_use]
    pub fn angle_efficiency_percent(&self) -> f64 {
        (self.angle_efficiency * 100.0).round()
    }
}

/// Crater diameter in meters: `1.8 · Mt^0.29` kilometers.
#[must_use]
pub fn crater_from_megatons(megatons_tnt: f64) -> f64 {
    1.8 * megatons_tnt.powf(0.29) * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhysicsError;

    #[test]
    fn test_default_sliders() {
        // 200 m at 20 km/s, 45°.
        let estimate = QuickEstimate::from_slider(200.0, 20.0, 45.0).unwrap();

        assert!((estimate.mass_tons - 1.256_637e7).abs() / estimate.mass_tons < 1e-6);
        assert!((estimate.megatons_tnt - 600.69).abs() < 0.01);
        assert_eq!(estimate.danger_level, DangerLevel::Severe);
        assert_eq!(estimate.tsunami_risk, TsunamiRisk::High);
        assert_eq!(estimate.angle_efficiency_percent(), 71.0);
        // 0.67 · log10(2.513e18) − 5.87.
        assert!((estimate.richter_magnitude - 6.4583).abs() < 1e-3);
    }

    #[test]
    fn test_crater_from_megatons() {
        assert!((crater_from_megatons(1.0) - 1800.0).abs() < 1e-9);
        assert!(crater_from_megatons(100.0) > crater_from_megatons(10.0));
    }

    #[test]
    fn test_small_body_is_minimal() {
        let estimate = QuickEstimate::from_slider(10.0, 5.0, 90.0).unwrap();
        assert_eq!(estimate.danger_level, DangerLevel::Minimal);
        assert_eq!(estimate.tsunami_risk, TsunamiRisk::Low);
        assert_eq!(estimate.angle_efficiency_percent(), 100.0);
    }

    #[test]
    fn test_rejects_overflowing_sliders() {
        assert!(matches!(
            QuickEstimate::from_slider(1e120, 20.0, 45.0),
            Err(PhysicsError::InvalidParameter {
                parameter: "kinetic_energy_j",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_invalid_sliders() {
        assert!(matches!(
            QuickEstimate::from_slider(200.0, 0.0, 45.0),
            Err(PhysicsError::InvalidParameter {
                parameter: "velocity",
                ..
            })
        ));
        assert!(QuickEstimate::from_slider(-1.0, 20.0, 45.0).is_err());
        assert!(QuickEstimate::from_slider(200.0, 20.0, 120.0).is_err());
    }
}
