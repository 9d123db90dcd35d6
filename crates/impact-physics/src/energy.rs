//! Mass and kinetic energy of a spherical impactor.

use crate::units::sphere_volume;

/// Mass of a homogeneous sphere in kilograms.
#[must_use]
pub fn mass_kg(diameter_m: f64, density: f64) -> f64 {
    sphere_volume(diameter_m) * density
}

/// Kinetic energy `0.5 · m · v²` in joules.
///
/// Zero diameter or zero velocity yields zero energy.
#[must_use]
pub fn kinetic_energy_joules(diameter_m: f64, velocity_m_s: f64, density: f64) -> f64 {
    0.5 * mass_kg(diameter_m, density) * velocity_m_s.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_body() {
        // 200 m rocky body at 20 km/s.
        let mass = mass_kg(200.0, 3000.0);
        assert!((mass - 1.256_637e10).abs() / mass < 1e-6);

        let energy = kinetic_energy_joules(200.0, 20_000.0, 3000.0);
        assert!((energy - 2.513_274e18).abs() / energy < 1e-6);
    }

    #[test]
    fn test_degenerate_inputs_give_zero() {
        assert_eq!(kinetic_energy_joules(0.0, 20_000.0, 3000.0), 0.0);
        assert_eq!(kinetic_energy_joules(100.0, 0.0, 3000.0), 0.0);
    }

    #[test]
    fn test_energy_scales_with_velocity_squared() {
        let slow = kinetic_energy_joules(50.0, 10_000.0, 3000.0);
        let fast = kinetic_energy_joules(50.0, 20_000.0, 3000.0);
        assert!((fast / slow - 4.0).abs() < 1e-12);
    }
}
