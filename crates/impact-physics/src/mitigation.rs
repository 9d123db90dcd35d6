//! Catalog of asteroid deflection strategies.

/// A deflection technique with its expected performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MitigationStrategy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Estimated success rate in percent.
    pub effectiveness_percent: u8,
    /// Lead time needed, as a (min, max) range in years.
    pub lead_time_years: (u32, u32),
    /// Technology readiness.
    pub technology: &'static str,
}

impl MitigationStrategy {
    /// Lead time range formatted for display, e.g. `5-10 years`.
    #[must_use]
    pub fn lead_time_label(&self) -> String {
        let (min, max) = self.lead_time_years;
        format!("{min}-{max} years")
    }

    /// Whether `available_years` of warning covers the minimum lead time.
    #[must_use]
    pub fn fits_lead_time(&self, available_years: f64) -> bool {
        available_years >= f64::from(self.lead_time_years.0)
    }
}

/// Known strategies, in display order.
pub const STRATEGIES: [MitigationStrategy; 5] = [
    MitigationStrategy {
        id: "kinetic",
        name: "Kinetic Impactor",
        description: "Crash a spacecraft into the asteroid to change its velocity and trajectory.",
        effectiveness_percent: 85,
        lead_time_years: (5, 10),
        technology: "Current (DART mission tested 2022)",
    },
    MitigationStrategy {
        id: "gravity",
        name: "Gravity Tractor",
        description: "Use spacecraft's gravitational pull to slowly alter asteroid's path.",
        effectiveness_percent: 70,
        lead_time_years: (10, 20),
        technology: "Current (theoretical)",
    },
    MitigationStrategy {
        id: "nuclear",
        name: "Nuclear Deflection",
        description: "Detonate nuclear device near asteroid to vaporize surface material and create thrust.",
        effectiveness_percent: 95,
        lead_time_years: (3, 8),
        technology: "Advanced (under development)",
    },
    MitigationStrategy {
        id: "laser",
        name: "Laser Ablation",
        description: "Use powerful lasers to vaporize asteroid surface, creating propulsive effect.",
        effectiveness_percent: 75,
        lead_time_years: (8, 15),
        technology: "Future (conceptual)",
    },
    MitigationStrategy {
        id: "capture",
        name: "Mass Driver",
        description: "Install electromagnetic catapult on asteroid to eject material and change momentum.",
        effectiveness_percent: 80,
        lead_time_years: (15, 25),
        technology: "Future (conceptual)",
    },
];

/// Look up a strategy by id.
#[must_use]
pub fn find_strategy(id: &str) -> Option<&'static MitigationStrategy> {
    STRATEGIES.iter().find(|strategy| strategy.id == id)
}

/// Strategies that can still be deployed with the given warning time,
/// most effective first.
#[must_use]
pub fn viable_strategies(available_years: f64) -> Vec<&'static MitigationStrategy> {
    let mut viable: Vec<_> = STRATEGIES
        .iter()
        .filter(|strategy| strategy.fits_lead_time(available_years))
        .collect();
    viable.sort_by(|a, b| b.effectiveness_percent.cmp(&a.effectiveness_percent));
    viable
}
