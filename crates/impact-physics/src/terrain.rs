//! Terrain at the impact point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface classification supplied by the location picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Ocean,
    #[default]
    Land,
    Mountain,
}

impl Terrain {
    /// Parse a picker label, falling back to [`Terrain::Land`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "ocean" | "water" | "sea" => Self::Ocean,
            "mountain" | "mountains" => Self::Mountain,
            _ => Self::Land,
        }
    }

    /// Lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Land => "land",
            Self::Mountain => "mountain",
        }
    }

    /// Whether an impact here can raise a tsunami.
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(self, Self::Ocean)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
