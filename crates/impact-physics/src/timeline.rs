//! Detection-to-impact timeline.
//!
//! Turns the approach distance (in lunar distances) and speed into a
//! countdown with the milestones of a planetary-defense response.

use std::fmt;

use crate::constants::LUNAR_DISTANCE_KM;
use crate::error::{PhysicsResult, ensure_positive};

const SECONDS_PER_HOUR: f64 = 3600.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Stage of the response to an incoming object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Detection,
    TrackingConfirmation,
    GlobalAlert,
    LastDeflectionWindow,
    ImpactEvent,
}

impl Phase {
    /// All phases in chronological order.
    pub const ALL: [Phase; 5] = [
        Phase::Detection,
        Phase::TrackingConfirmation,
        Phase::GlobalAlert,
        Phase::LastDeflectionWindow,
        Phase::ImpactEvent,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Detection => "Detection",
            Self::TrackingConfirmation => "Tracking Confirmation",
            Self::GlobalAlert => "Global Alert",
            Self::LastDeflectionWindow => "Last Deflection Window",
            Self::ImpactEvent => "Impact Event",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Detection => "Asteroid first detected by NEO surveillance",
            Self::TrackingConfirmation => "Trajectory confirmed, impact probability calculated",
            Self::GlobalAlert => "International agencies notified, deflection window open",
            Self::LastDeflectionWindow => "Final opportunity for kinetic impactor mission",
            Self::ImpactEvent => "Projected impact time",
        }
    }

    /// Progress marker shown beside the phase.
    #[must_use]
    pub fn status(self) -> MilestoneStatus {
        match self {
            Self::Detection | Self::TrackingConfirmation => MilestoneStatus::Completed,
            Self::GlobalAlert => MilestoneStatus::Active,
            Self::LastDeflectionWindow => MilestoneStatus::Pending,
            Self::ImpactEvent => MilestoneStatus::Critical,
        }
    }

    /// Share of the total warning time still left when the phase begins.
    fn remaining_fraction(self) -> f64 {
        match self {
            Self::Detection => 1.0,
            Self::TrackingConfirmation => 0.9,
            Self::GlobalAlert => 0.7,
            Self::LastDeflectionWindow => 0.3,
            Self::ImpactEvent => 0.0,
        }
    }
}

/// Where a phase stands in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneStatus {
    Completed,
    Active,
    Pending,
    Critical,
}

impl MilestoneStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub phase: Phase,
    /// Whole days before impact.
    pub days_before: u64,
}

impl Milestone {
    /// Countdown label, e.g. `T-21 days` or `T-0`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.phase == Phase::ImpactEvent {
            "T-0".to_string()
        } else {
            format!("T-{} days", self.days_before)
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phase.title(), self.label())
    }
}

/// Countdown for an approaching object.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Exact warning time in days.
    pub days_to_impact: f64,
    pub milestones: Vec<Milestone>,
}

impl Timeline {
    /// Build the countdown for an object `distance_ld` lunar distances
    /// away, closing at `speed_km_s`.
    pub fn new(distance_ld: f64, speed_km_s: f64) -> PhysicsResult<Self> {
        let distance_ld = ensure_positive("distance_ld", distance_ld)?;
        let speed_km_s = ensure_positive("speed_km_s", speed_km_s)?;

        let distance_km = distance_ld * LUNAR_DISTANCE_KM;
        let hours = distance_km / (speed_km_s * SECONDS_PER_HOUR);
        let days_to_impact = hours / HOURS_PER_DAY;

        let milestones = Phase::ALL
            .iter()
            .map(|&phase| Milestone {
                phase,
                days_before: whole_days(days_to_impact * phase.remaining_fraction()),
            })
            .collect();

        Ok(Self {
            days_to_impact,
            milestones,
        })
    }

    /// Warning time rounded to whole days, as shown in the header.
    #[must_use]
    pub fn rounded_days(&self) -> u64 {
        whole_days(self.days_to_impact)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_days(days: f64) -> u64 {
    days.round().max(0.0) as u64
}
