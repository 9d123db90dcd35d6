//! Error types for impact estimation.

use std::fmt;

/// Errors that can occur while estimating an impact.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A parameter was non-finite or outside its physical domain.
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted domain.
        expected: &'static str,
    },
}

impl PhysicsError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            expected,
        }
    }
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                expected,
            } => {
                write!(f, "invalid {parameter}: got {value}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Result type for impact estimation.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> PhysicsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::invalid(parameter, value, "a finite value > 0"))
    }
}

/// Require a derived quantity to be finite and positive.
///
/// Inputs that pass [`ensure_positive`] can still over- or underflow once
/// cubed or squared; this rejects them instead of returning NaN or infinity.
pub(crate) fn ensure_representable(quantity: &'static str, value: f64) -> PhysicsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::invalid(
            quantity,
            value,
            "inputs whose result is finite and positive",
        ))
    }
}

/// Require an entry angle in (0, 90] degrees.
pub(crate) fn ensure_entry_angle(angle_deg: f64) -> PhysicsResult<f64> {
    if angle_deg.is_finite() && angle_deg > 0.0 && angle_deg <= 90.0 {
        Ok(angle_deg)
    } else {
        Err(PhysicsError::invalid(
            "angle_deg",
            angle_deg,
            "an angle in (0, 90] degrees",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_parameter_and_domain() {
        let err = PhysicsError::invalid("velocity", -3.0, "a finite value > 0");
        assert_eq!(
            err.to_string(),
            "invalid velocity: got -3, expected a finite value > 0"
        );
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("diameter_m", 10.0), Ok(10.0));
        assert!(ensure_positive("diameter_m", 0.0).is_err());
        assert!(ensure_positive("diameter_m", -1.0).is_err());
        assert!(ensure_positive("diameter_m", f64::NAN).is_err());
        assert!(ensure_positive("diameter_m", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_representable() {
        assert_eq!(ensure_representable("impact_energy_j", 2.5e18), Ok(2.5e18));
        assert!(ensure_representable("impact_energy_j", 0.0).is_err());
        assert!(ensure_representable("impact_energy_j", f64::NAN).is_err());
        assert!(matches!(
            ensure_representable("crater_diameter_m", f64::INFINITY),
            Err(PhysicsError::InvalidParameter {
                parameter: "crater_diameter_m",
                ..
            })
        ));
    }

    #[test]
    fn test_ensure_entry_angle_bounds() {
        assert!(ensure_entry_angle(0.0).is_err());
        assert_eq!(ensure_entry_angle(0.5), Ok(0.5));
        assert_eq!(ensure_entry_angle(90.0), Ok(90.0));
        assert!(ensure_entry_angle(90.0001).is_err());
        assert!(ensure_entry_angle(f64::NAN).is_err());
    }
}
