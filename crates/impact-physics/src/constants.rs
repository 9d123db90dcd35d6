//! Shared physical constants and model defaults.

/// Bulk density of a typical rocky asteroid (kg/m^3).
pub const DEFAULT_IMPACTOR_DENSITY: f64 = 3000.0;

/// Default entry angle from horizontal in degrees.
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Density of the target crust used by crater scaling (kg/m^3).
pub const DEFAULT_TARGET_DENSITY: f64 = 2500.0;

/// Gravitational acceleration at Earth's surface (m/s^2).
pub const GRAVITY: f64 = 9.81;

/// Energy released by one metric ton of TNT (J).
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Energy released by one megaton of TNT (J).
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth-Moon distance in kilometers (one lunar distance).
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Meters per second in one kilometer per second.
pub const M_PER_S_PER_KM_PER_S: f64 = 1000.0;
