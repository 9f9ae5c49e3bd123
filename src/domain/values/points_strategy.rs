use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of the trip the traveler's points are spent on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsStrategy {
    Flight,
    Hotel,
    #[default]
    None,
}

impl fmt::Display for PointsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointsStrategy::Flight => write!(f, "flight"),
            PointsStrategy::Hotel => write!(f, "hotel"),
            PointsStrategy::None => write!(f, "none"),
        }
    }
}

impl FromStr for PointsStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" | "flights" => Ok(PointsStrategy::Flight),
            "hotel" | "hotels" => Ok(PointsStrategy::Hotel),
            "none" | "cash" => Ok(PointsStrategy::None),
            _ => Err(format!(
                "Invalid points strategy: '{s}'. Use 'flight', 'hotel' or 'none'"
            )),
        }
    }
}

/// How the hotel portion is paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelBookingMode {
    #[default]
    Cash,
    Points,
}
