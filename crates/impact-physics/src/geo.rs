//! Geographic helpers for placing impacts on the globe.
//!
//! Uses a spherical Earth approximation throughout.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_KM;
use crate::error::{PhysicsError, PhysicsResult};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct from user input, rejecting out-of-range coordinates.
    pub fn checked(lat: f64, lon: f64) -> PhysicsResult<Self> {
        if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(PhysicsError::invalid("lat", lat, "latitude in [-90, 90]"));
        }
        if !(lon.is_finite() && (-180.0..=180.0).contains(&lon)) {
            return Err(PhysicsError::invalid("lon", lon, "longitude in [-180, 180]"));
        }
        Ok(Self { lat, lon })
    }
}

/// Great-circle distance between two points in kilometers (haversine).
#[must_use]
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Position on the unit globe for a latitude and longitude (degrees).
///
/// Y is up (north pole at `+Y`); longitude 0 faces `-X`, matching the
/// globe textures used by the viewer.
#[must_use]
pub fn lat_lon_to_unit_vector(lat_deg: f64, lon_deg: f64) -> DVec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    DVec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_and_antipodes() {
        let p = LatLon::new(23.0, 10.0);
        assert!(haversine_km(p, p).abs() < 1e-9);

        let north = LatLon::new(90.0, 0.0);
        let south = LatLon::new(-90.0, 0.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_km(north, south) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_quarter_equator() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(0.0, 90.0);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!((haversine_km(a, b) - expected).abs() < 1e-6);
        assert!((haversine_km(b, a) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_unit_vector_landmarks() {
        let pole = lat_lon_to_unit_vector(90.0, 0.0);
        assert!((pole - DVec3::Y).length() < 1e-12);

        let origin = lat_lon_to_unit_vector(0.0, 0.0);
        assert!((origin - DVec3::NEG_X).length() < 1e-12);

        let v = lat_lon_to_unit_vector(-3.0, -60.0);
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(LatLon::checked(91.0, 0.0).is_err());
        assert!(LatLon::checked(0.0, -181.0).is_err());
        assert!(LatLon::checked(f64::NAN, 0.0).is_err());
        assert_eq!(LatLon::checked(28.0, 84.0), Ok(LatLon::new(28.0, 84.0)));
    }
}
