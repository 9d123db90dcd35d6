//! Closed-form asteroid impact estimates.
//!
//! This crate turns asteroid parameters (diameter, velocity, density, entry
//! angle and target terrain) into kinetic energy, atmospheric energy loss,
//! crater diameter, TNT equivalent and risk classes. The models are
//! deliberately simple and tuned for illustrative plausibility, not for
//! scientific prediction.
//!
//! # Design principles
//!
//! - **Pure**: every operation is a deterministic function of its input
//! - **Synchronous**: no I/O, no threading primitives; safe to call on every
//!   slider tick or from many threads at once
//! - **Validated at the boundary**: out-of-domain input is an
//!   [`PhysicsError::InvalidParameter`], never a silent NaN
//!
//! # Example
//!
//! ```
//! use impact_physics::{ImpactSimulationInput, SeismicSeverity, Terrain, simulate_impact};
//!
//! let input = ImpactSimulationInput::from_slider(200.0, 20.0, 45.0, Terrain::Ocean);
//! let result = simulate_impact(&input)?;
//!
//! assert!(result.tsunami_potential);
//! assert_eq!(result.seismic_severity, SeismicSeverity::Extreme);
//! # Ok::<(), impact_physics::PhysicsError>(())
//! ```

pub mod atmosphere;
pub mod classify;
pub mod constants;
pub mod crater;
pub mod energy;
mod error;
pub mod format;
pub mod geo;
pub mod locations;
pub mod mitigation;
mod model;
pub mod quick;
mod simulation;
mod terrain;
pub mod timeline;
pub mod units;

pub use atmosphere::attenuation_factor;
pub use classify::{
    DangerLevel, SeismicSeverity, TsunamiRisk, danger_level_by_megatons, energy_to_megatons_tnt,
    energy_to_tons_tnt, richter_magnitude, seismic_severity_by_tons, tsunami_potential_by_diameter,
};
pub use crater::{CraterScaling, crater_diameter_meters};
pub use energy::kinetic_energy_joules;
pub use error::{PhysicsError, PhysicsResult};
pub use format::format_number;
pub use geo::{LatLon, haversine_km, lat_lon_to_unit_vector};
pub use locations::{PRESET_LOCATIONS, PresetLocation, find_preset};
pub use mitigation::{MitigationStrategy, find_strategy, viable_strategies};
pub use model::ImpactModel;
pub use quick::QuickEstimate;
pub use simulation::{ImpactNote, ImpactSimulationInput, ImpactSimulationResult, simulate_impact};
pub use terrain::Terrain;
pub use timeline::{Milestone, MilestoneStatus, Phase, Timeline};
pub use units::{degrees_to_radians, radians_to_degrees, sphere_volume};
