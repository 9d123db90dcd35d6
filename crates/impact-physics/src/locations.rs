//! Preset impact locations offered by the location selector.

use crate::geo::LatLon;
use crate::terrain::Terrain;

/// A named impact site with its terrain classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetLocation {
    pub name: &'static str,
    pub position: LatLon,
    pub terrain: Terrain,
}

/// Built-in impact sites, in display order.
pub const PRESET_LOCATIONS: [PresetLocation; 6] = [
    preset("Pacific Ocean", 0.0, -140.0, Terrain::Ocean),
    preset("Atlantic Ocean", 30.0, -40.0, Terrain::Ocean),
    preset("Sahara Desert", 23.0, 10.0, Terrain::Land),
    preset("Amazon Rainforest", -3.0, -60.0, Terrain::Land),
    preset("Himalayas", 28.0, 84.0, Terrain::Mountain),
    preset("Great Plains, USA", 40.0, -100.0, Terrain::Land),
];

const fn preset(name: &'static str, lat: f64, lon: f64, terrain: Terrain) -> PresetLocation {
    PresetLocation {
        name,
        position: LatLon::new(lat, lon),
        terrain,
    }
}

/// The site selected before the user picks one.
#[must_use]
pub fn default_location() -> &'static PresetLocation {
    &PRESET_LOCATIONS[0]
}

/// Find a preset by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static PresetLocation> {
    let name = name.trim();
    PRESET_LOCATIONS
        .iter()
        .find(|location| location.name.eq_ignore_ascii_case(name))
}
