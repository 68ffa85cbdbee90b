use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// travel modes offered for isochrone requests. each maps to one routing profile
/// of the isochrone service.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    #[serde(alias = "driving-car")]
    Driving,
    #[serde(alias = "cycling-regular")]
    Cycling,
    #[serde(alias = "foot-walking")]
    Walking,
}

impl TravelMode {
    /// the routing profile path segment used by the isochrone service
    pub fn profile(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving-car",
            TravelMode::Cycling => "cycling-regular",
            TravelMode::Walking => "foot-walking",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelMode::Driving => "driving",
            TravelMode::Cycling => "cycling",
            TravelMode::Walking => "walking",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "driving-car" => Ok(TravelMode::Driving),
            "cycling" | "cycling-regular" => Ok(TravelMode::Cycling),
            "walking" | "foot-walking" => Ok(TravelMode::Walking),
            other => Err(format!(
                "unknown travel mode '{other}', expected one of driving, cycling, walking"
            )),
        }
    }
}
