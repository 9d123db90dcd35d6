//! TNT-equivalent conversion and the risk classification scales.
//!
//! Two independent energy scales exist and they are not meant to agree:
//!
//! - [`seismic_severity_by_tons`] buckets the retained energy of a full
//!   simulation (breakpoints 1e3, 1e5, 1e7 tons).
//! - [`danger_level_by_megatons`] buckets the raw kinetic energy of the
//!   quick estimate (breakpoints 1, 100, 1000 megatons).
//!
//! Likewise there are two tsunami signals: the terrain-based boolean on
//! the simulation result and the size-based [`tsunami_potential_by_diameter`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{JOULES_PER_MEGATON_TNT, JOULES_PER_TON_TNT};

/// Convert joules to metric tons of TNT.
#[must_use]
pub fn energy_to_tons_tnt(joules: f64) -> f64 {
    joules / JOULES_PER_TON_TNT
}

/// Convert joules to megatons of TNT.
#[must_use]
pub fn energy_to_megatons_tnt(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON_TNT
}

/// Approximate Richter-scale magnitude of the ground shaking.
///
/// `M = 0.67 · log10(E) − 5.87`. Only meaningful for positive energies.
#[must_use]
pub fn richter_magnitude(joules: f64) -> f64 {
    0.67 * joules.log10() - 5.87
}

/// Seismic severity bucket of a simulated impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeismicSeverity {
    Low,
    Moderate,
    Severe,
    Extreme,
}

impl SeismicSeverity {
    /// Lowercase label used by the display layer.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for SeismicSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify retained energy, in tons of TNT, into a seismic severity.
///
/// Breakpoints are exclusive lower bounds checked from the top.
#[must_use]
pub fn seismic_severity_by_tons(tons_tnt: f64) -> SeismicSeverity {
    if tons_tnt > 1e7 {
        SeismicSeverity::Extreme
    } else if tons_tnt > 1e5 {
        SeismicSeverity::Severe
    } else if tons_tnt > 1e3 {
        SeismicSeverity::Moderate
    } else {
        SeismicSeverity::Low
    }
}

/// Danger level shown by the quick calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DangerLevel {
    Minimal,
    Moderate,
    Severe,
    Catastrophic,
}

impl DangerLevel {
    /// Uppercase badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "MINIMAL",
            Self::Moderate => "MODERATE",
            Self::Severe => "SEVERE",
            Self::Catastrophic => "CATASTROPHIC",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify kinetic energy, in megatons of TNT, into a danger level.
#[must_use]
pub fn danger_level_by_megatons(megatons_tnt: f64) -> DangerLevel {
    if megatons_tnt < 1.0 {
        DangerLevel::Minimal
    } else if megatons_tnt < 100.0 {
        DangerLevel::Moderate
    } else if megatons_tnt < 1000.0 {
        DangerLevel::Severe
    } else {
        DangerLevel::Catastrophic
    }
}

/// Size-based tsunami risk, independent of where the body lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TsunamiRisk {
    Low,
    Moderate,
    High,
}

impl TsunamiRisk {
    /// Uppercase badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for TsunamiRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify tsunami risk from the impactor diameter alone.
#[must_use]
pub fn tsunami_potential_by_diameter(diameter_m: f64) -> TsunamiRisk {
    if diameter_m > 100.0 {
        TsunamiRisk::High
    } else if diameter_m > 50.0 {
        TsunamiRisk::Moderate
    } else {
        TsunamiRisk::Low
    }
}
