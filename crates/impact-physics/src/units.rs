//! Unit conversion and geometry helpers.

use std::f64::consts::PI;

use crate::constants::M_PER_S_PER_KM_PER_S;

/// Convert degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a speed in km/s (slider units) to m/s.
#[must_use]
pub fn km_per_s_to_m_per_s(speed_km_s: f64) -> f64 {
    speed_km_s * M_PER_S_PER_KM_PER_S
}

/// Volume of a sphere with the given diameter, in m^3.
///
/// Negative diameters have no volume and yield zero; callers validate
/// `diameter_m > 0` before getting here.
#[must_use]
pub fn sphere_volume(diameter_m: f64) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}
