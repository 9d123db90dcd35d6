//! Atmospheric attenuation heuristic.
//!
//! Estimates the fraction of pre-entry kinetic energy an impactor still
//! carries when it reaches the ground. Larger and faster bodies lose a
//! smaller share; shallow trajectories lose more. The result never drops
//! below [`MIN_RETAINED_FRACTION`] and never exceeds 1.
//!
//! The weights are fixed: changing them changes every downstream number.

use crate::units::degrees_to_radians;

/// Fraction retained by even the smallest, slowest, shallowest impactor.
pub const MIN_RETAINED_FRACTION: f64 = 0.3;

/// Share of the energy budget that depends on size, speed and angle.
const VARIABLE_FRACTION: f64 = 0.7;

/// Weight of the size term inside the variable share.
const SIZE_WEIGHT: f64 = 0.4;

/// Weight of the velocity term inside the variable share.
const VELOCITY_WEIGHT: f64 = 0.6;

/// Diameter at which the size term saturates (m).
pub const SIZE_SATURATION_M: f64 = 500.0;

/// Velocity at which the velocity term saturates (m/s).
pub const VELOCITY_SATURATION_M_S: f64 = 30_000.0;

/// Individual terms of the attenuation model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationTerms {
    /// `sin(angle)`; 1 for a vertical entry.
    pub angle_factor: f64,
    /// `min(1, d / 500 m)`.
    pub size_factor: f64,
    /// `min(1, v / 30 km/s)`.
    pub velocity_factor: f64,
}

impl AttenuationTerms {
    /// Compute the terms for an impactor.
    #[must_use]
    pub fn new(diameter_m: f64, velocity_m_s: f64, angle_deg: f64) -> Self {
        Self {
            angle_factor: degrees_to_radians(angle_deg).sin(),
            size_factor: (diameter_m / SIZE_SATURATION_M).min(1.0),
            velocity_factor: (velocity_m_s / VELOCITY_SATURATION_M_S).min(1.0),
        }
    }

    /// Combine the terms into the retained fraction, clamped to [0, 1].
    #[must_use]
    pub fn retained_fraction(&self) -> f64 {
        let penetration = SIZE_WEIGHT * self.size_factor + VELOCITY_WEIGHT * self.velocity_factor;
        let retained = MIN_RETAINED_FRACTION + VARIABLE_FRACTION * penetration * self.angle_factor;
        retained.clamp(0.0, 1.0)
    }
}

/// Fraction of kinetic energy retained after atmospheric passage.
#[must_use]
pub fn attenuation_factor(diameter_m: f64, velocity_m_s: f64, angle_deg: f64) -> f64 {
    let terms = AttenuationTerms::new(diameter_m, velocity_m_s, angle_deg);
    let factor = terms.retained_fraction();
    tracing::trace!(
        angle_factor = terms.angle_factor,
        size_factor = terms.size_factor,
        velocity_factor = terms.velocity_factor,
        factor,
        "attenuation"
    );
    factor
}
