//! Full impact simulation: input, result and the combining step.
//!
//! A simulation is a pure function of its input. Each stage runs once,
//! in dependency order:
//!
//! 1. kinetic energy from size, speed and density
//! 2. atmospheric attenuation, giving the retained energy
//! 3. crater diameter for a default-density impactor, scaled down for
//!    ocean targets
//! 4. TNT equivalent of the retained energy and its seismic bucket
//! 5. advisory notes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::atmosphere::attenuation_factor;
use crate::classify::{SeismicSeverity, energy_to_tons_tnt, seismic_severity_by_tons};
use crate::constants::{DEFAULT_ENTRY_ANGLE_DEG, DEFAULT_IMPACTOR_DENSITY};
use crate::energy::kinetic_energy_joules;
use crate::error::{PhysicsResult, ensure_entry_angle, ensure_positive, ensure_representable};
use crate::model::ImpactModel;
use crate::terrain::Terrain;
use crate::units::km_per_s_to_m_per_s;

/// Asteroid parameters for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSimulationInput {
    /// Diameter in meters.
    pub diameter_m: f64,
    /// Impact velocity in m/s.
    pub velocity: f64,
    /// Bulk density in kg/m^3.
    #[serde(default = "default_density")]
    pub density: f64,
    /// Entry angle from horizontal, in degrees.
    #[serde(default = "default_angle")]
    pub angle_deg: f64,
    /// Terrain at the impact point.
    #[serde(default)]
    pub terrain: Terrain,
}

fn default_density() -> f64 {
    DEFAULT_IMPACTOR_DENSITY
}

fn default_angle() -> f64 {
    DEFAULT_ENTRY_ANGLE_DEG
}

impl ImpactSimulationInput {
    /// A rocky body entering at 45° over land.
    #[must_use]
    pub fn new(diameter_m: f64, velocity: f64) -> Self {
        Self {
            diameter_m,
            velocity,
            density: DEFAULT_IMPACTOR_DENSITY,
            angle_deg: DEFAULT_ENTRY_ANGLE_DEG,
            terrain: Terrain::default(),
        }
    }

    /// Build from the parameter sliders, which express speed in km/s.
    #[must_use]
    pub fn from_slider(diameter_m: f64, speed_km_s: f64, angle_deg: f64, terrain: Terrain) -> Self {
        Self::new(diameter_m, km_per_s_to_m_per_s(speed_km_s))
            .with_angle(angle_deg)
            .with_terrain(terrain)
    }

    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    #[must_use]
    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Reject non-positive size, speed or density and angles outside (0, 90].
    pub fn validate(&self) -> PhysicsResult<()> {
        ensure_positive("diameter_m", self.diameter_m)?;
        ensure_positive("velocity", self.velocity)?;
        ensure_positive("density", self.density)?;
        ensure_entry_angle(self.angle_deg)?;
        Ok(())
    }
}

/// Advisory annotation attached to a simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactNote {
    /// The impact is in water.
    TsunamiGeneration,
    /// The impact is in mountains. Text only; crater size is unchanged.
    MountainConfinement,
    /// The atmosphere absorbed a large share of the energy.
    AtmosphericLoss,
    /// Retained energy is large enough to disturb the climate.
    GlobalClimate,
}

impl ImpactNote {
    /// Display text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::TsunamiGeneration => "Potential large tsunami generation",
            Self::MountainConfinement => {
                "Mountain terrain reduces crater size and increases ejecta confinement"
            }
            Self::AtmosphericLoss => "Significant atmospheric energy loss",
            Self::GlobalClimate => "Global climatic effects possible",
        }
    }
}

impl fmt::Display for ImpactNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outputs of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSimulationResult {
    /// Kinetic energy before atmospheric entry (J).
    pub impact_energy_j: f64,
    /// TNT equivalent of the retained energy (metric tons).
    pub energy_tons_tnt: f64,
    /// Energy left after atmospheric attenuation (J).
    pub retained_energy_j: f64,
    /// Fraction of the kinetic energy retained, in [0.3, 1].
    pub attenuation_factor: f64,
    /// Crater diameter (m).
    pub crater_diameter_m: f64,
    /// Whether the impact can generate a tsunami (ocean targets only).
    pub tsunami_potential: bool,
    /// Seismic bucket of the retained energy.
    pub seismic_severity: SeismicSeverity,
    /// Notes in evaluation order.
    pub notes: Vec<ImpactNote>,
}

impl ImpactSimulationResult {
    /// Note texts in order.
    pub fn note_messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.notes.iter().map(|note| note.message())
    }
}

impl ImpactModel {
    /// Run a simulation in this environment.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidParameter`](crate::PhysicsError) for
    /// out-of-domain input, an unusable model, or input so extreme that the
    /// energy or crater size is not a finite positive number.
    pub fn simulate(&self, input: &ImpactSimulationInput) -> PhysicsResult<ImpactSimulationResult> {
        input.validate()?;
        self.validate()?;

        let impact_energy_j = ensure_representable(
            "impact_energy_j",
            kinetic_energy_joules(input.diameter_m, input.velocity, input.density),
        )?;
        let attenuation = attenuation_factor(input.diameter_m, input.velocity, input.angle_deg);
        let retained_energy_j =
            ensure_representable("retained_energy_j", impact_energy_j * attenuation)?;

        // The crater is sized for a rocky impactor whatever the input density.
        let crater_diameter_m = ensure_representable(
            "crater_diameter_m",
            self.crater_scaling().crater_diameter(
                input.diameter_m,
                input.velocity,
                DEFAULT_IMPACTOR_DENSITY,
            )? * self.crater_multiplier(input.terrain),
        )?;

        let energy_tons_tnt = energy_to_tons_tnt(retained_energy_j);
        let tsunami_potential = input.terrain.is_water();
        let seismic_severity = seismic_severity_by_tons(energy_tons_tnt);

        let mut notes = Vec::new();
        if tsunami_potential {
            notes.push(ImpactNote::TsunamiGeneration);
        }
        if input.terrain == Terrain::Mountain {
            notes.push(ImpactNote::MountainConfinement);
        }
        if attenuation < self.significant_loss_threshold {
            notes.push(ImpactNote::AtmosphericLoss);
        }
        if energy_tons_tnt > self.global_climate_threshold_tons {
            notes.push(ImpactNote::GlobalClimate);
        }

        tracing::debug!(
            diameter_m = input.diameter_m,
            velocity = input.velocity,
            angle_deg = input.angle_deg,
            terrain = %input.terrain,
            energy_tons_tnt,
            crater_diameter_m,
            severity = %seismic_severity,
            "simulated impact"
        );

        Ok(ImpactSimulationResult {
            impact_energy_j,
            energy_tons_tnt,
            retained_energy_j,
            attenuation_factor: attenuation,
            crater_diameter_m,
            tsunami_potential,
            seismic_severity,
            notes,
        })
    }
}

/// Simulate an impact with the default Earth environment.
///
/// # Errors
///
/// Returns [`PhysicsError::InvalidParameter`](crate::PhysicsError) when the
/// diameter, velocity or density is not positive, or the angle lies
/// outside (0, 90].
pub fn simulate_impact(input: &ImpactSimulationInput) -> PhysicsResult<ImpactSimulationResult> {
    ImpactModel::default().simulate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhysicsError;
    use proptest::prelude::*;

    fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs())
    }

    #[test]
    fn test_reference_land_impact() {
        let input = ImpactSimulationInput::new(200.0, 20_000.0);
        let result = simulate_impact(&input).unwrap();

        // Mass (4/3)π·100³·3000 ≈ 1.2566e10 kg, so E ≈ 2.513e18 J.
        assert!(relative_eq(result.impact_energy_j, 2.513_274e18, 1e-6));
        assert!(result.energy_tons_tnt.is_finite());
        assert!(relative_eq(result.energy_tons_tnt, 3.467_08e8, 1e-5));
        assert!(!result.tsunami_potential);
        assert_eq!(result.seismic_severity, SeismicSeverity::Extreme);
        assert_eq!(
            result.notes,
            vec![ImpactNote::AtmosphericLoss, ImpactNote::GlobalClimate]
        );
    }

    #[test]
    fn test_small_shallow_ocean_impact() {
        let input = ImpactSimulationInput::new(50.0, 5000.0)
            .with_angle(15.0)
            .with_terrain(Terrain::Ocean);
        let result = simulate_impact(&input).unwrap();

        assert!(result.tsunami_potential);
        assert!(result.attenuation_factor < 0.6);
        let messages: Vec<_> = result.note_messages().collect();
        assert_eq!(
            messages,
            vec![
                "Potential large tsunami generation",
                "Significant atmospheric energy loss"
            ]
        );
        assert_eq!(result.seismic_severity, SeismicSeverity::Severe);
        assert!((result.crater_diameter_m - 722.27).abs() < 0.01);
    }

    #[test]
    fn test_full_retention_for_large_fast_vertical() {
        let input = ImpactSimulationInput::new(1000.0, 50_000.0).with_angle(90.0);
        let result = simulate_impact(&input).unwrap();
        assert_eq!(result.attenuation_factor, 1.0);
        assert_eq!(result.retained_energy_j, result.impact_energy_j);
    }

    #[test]
    fn test_mountain_matches_land_crater_with_note() {
        let land = simulate_impact(&ImpactSimulationInput::new(300.0, 25_000.0)).unwrap();
        let mountain = simulate_impact(
            &ImpactSimulationInput::new(300.0, 25_000.0).with_terrain(Terrain::Mountain),
        )
        .unwrap();

        assert_eq!(land.crater_diameter_m, mountain.crater_diameter_m);
        assert!(!mountain.tsunami_potential);
        assert_eq!(mountain.notes.first(), Some(&ImpactNote::MountainConfinement));
    }

    #[test]
    fn test_from_slider_scales_speed() {
        let input = ImpactSimulationInput::from_slider(200.0, 20.0, 45.0, Terrain::Land);
        assert_eq!(input, ImpactSimulationInput::new(200.0, 20_000.0));
    }

    #[test]
    fn test_defaults_from_json() {
        let input: ImpactSimulationInput =
            serde_json::from_str(r#"{ "diameter_m": 120.0, "velocity": 18000.0 }"#).unwrap();
        assert_eq!(input, ImpactSimulationInput::new(120.0, 18_000.0));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let cases = [
            ImpactSimulationInput::new(0.0, 20_000.0),
            ImpactSimulationInput::new(-10.0, 20_000.0),
            ImpactSimulationInput::new(100.0, 0.0),
            ImpactSimulationInput::new(100.0, 20_000.0).with_density(0.0),
            ImpactSimulationInput::new(100.0, 20_000.0).with_angle(0.0),
            ImpactSimulationInput::new(100.0, 20_000.0).with_angle(95.0),
            ImpactSimulationInput::new(f64::NAN, 20_000.0),
        ];
        for input in cases {
            assert!(
                matches!(
                    simulate_impact(&input),
                    Err(PhysicsError::InvalidParameter { .. })
                ),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_extreme_magnitudes_rejected() {
        // Mass underflows to zero while v² overflows: 0 · ∞ is NaN.
        let tiny_and_fast = ImpactSimulationInput::new(1e-200, 1e200);
        // Volume overflows to infinity.
        let enormous = ImpactSimulationInput::new(1e120, 20_000.0);

        assert!(matches!(
            simulate_impact(&tiny_and_fast),
            Err(PhysicsError::InvalidParameter {
                parameter: "impact_energy_j",
                ..
            })
        ));
        assert!(matches!(
            simulate_impact(&enormous),
            Err(PhysicsError::InvalidParameter {
                parameter: "impact_energy_j",
                ..
            })
        ));
    }

    #[test]
    fn test_crater_ignores_impactor_density() {
        let rocky = simulate_impact(&ImpactSimulationInput::new(200.0, 20_000.0)).unwrap();
        let iron = simulate_impact(&ImpactSimulationInput::new(200.0, 20_000.0).with_density(8000.0))
            .unwrap();

        assert_eq!(iron.crater_diameter_m, rocky.crater_diameter_m);
        assert!(iron.impact_energy_j > rocky.impact_energy_j);
    }

    #[test]
    fn test_custom_model_thresholds() {
        let model = ImpactModel {
            global_climate_threshold_tons: 1e12,
            significant_loss_threshold: 0.1,
            ..ImpactModel::default()
        };
        let result = model
            .simulate(&ImpactSimulationInput::new(200.0, 20_000.0))
            .unwrap();
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_slider_minimum_is_finite() {
        let input = ImpactSimulationInput::from_slider(10.0, 5.0, 15.0, Terrain::Ocean);
        let result = simulate_impact(&input).unwrap();
        assert!(result.impact_energy_j.is_finite() && result.impact_energy_j > 0.0);
        assert!(result.crater_diameter_m.is_finite() && result.crater_diameter_m > 0.0);
        // About 1.5 kilotons retained.
        assert_eq!(result.seismic_severity, SeismicSeverity::Moderate);
    }

    fn valid_input() -> impl Strategy<Value = ImpactSimulationInput> {
        (
            1.0f64..5000.0,
            100.0f64..80_000.0,
            500.0f64..9000.0,
            0.1f64..=90.0,
        )
            .prop_map(|(diameter_m, velocity, density, angle_deg)| {
                ImpactSimulationInput::new(diameter_m, velocity)
                    .with_density(density)
                    .with_angle(angle_deg)
            })
    }

    proptest! {
        #[test]
        fn prop_energy_increases_with_diameter(input in valid_input(), scale in 1.01f64..3.0) {
            let small = simulate_impact(&input).unwrap();
            let large = simulate_impact(&ImpactSimulationInput {
                diameter_m: input.diameter_m * scale,
                ..input
            })
            .unwrap();
            prop_assert!(large.impact_energy_j > small.impact_energy_j);
        }

        #[test]
        fn prop_energy_increases_with_velocity(input in valid_input(), scale in 1.01f64..3.0) {
            let slow = simulate_impact(&input).unwrap();
            let fast = simulate_impact(&ImpactSimulationInput {
                velocity: input.velocity * scale,
                ..input
            })
            .unwrap();
            prop_assert!(fast.impact_energy_j > slow.impact_energy_j);
        }

        #[test]
        fn prop_attenuation_bounded(input in valid_input()) {
            let result = simulate_impact(&input).unwrap();
            prop_assert!(result.attenuation_factor >= 0.3);
            prop_assert!(result.attenuation_factor <= 1.0);
            prop_assert!(result.retained_energy_j <= result.impact_energy_j);
        }

        #[test]
        fn prop_ocean_crater_is_seventy_percent(input in valid_input()) {
            let land = simulate_impact(&input.with_terrain(Terrain::Land)).unwrap();
            let ocean = simulate_impact(&input.with_terrain(Terrain::Ocean)).unwrap();
            prop_assert!(relative_eq(ocean.crater_diameter_m, 0.7 * land.crater_diameter_m, 1e-12));
            prop_assert!(ocean.crater_diameter_m < land.crater_diameter_m);
        }

        #[test]
        fn prop_tsunami_follows_terrain(input in valid_input()) {
            prop_assert!(simulate_impact(&input.with_terrain(Terrain::Ocean)).unwrap().tsunami_potential);
            prop_assert!(!simulate_impact(&input.with_terrain(Terrain::Land)).unwrap().tsunami_potential);
            prop_assert!(!simulate_impact(&input.with_terrain(Terrain::Mountain)).unwrap().tsunami_potential);
        }

        #[test]
        fn prop_deterministic(input in valid_input()) {
            prop_assert_eq!(simulate_impact(&input).unwrap(), simulate_impact(&input).unwrap());
        }

        #[test]
        fn prop_outputs_finite(input in valid_input()) {
            let result = simulate_impact(&input).unwrap();
            prop_assert!(result.impact_energy_j.is_finite());
            prop_assert!(result.energy_tons_tnt.is_finite() && result.energy_tons_tnt >= 0.0);
            prop_assert!(result.crater_diameter_m.is_finite() && result.crater_diameter_m >= 0.0);
        }
    }
}
