use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Cabin {
    /// Multiplier applied to economy cash baselines.
    pub fn cash_multiplier(&self) -> f64 {
        match self {
            Cabin::Economy => 1.0,
            Cabin::PremiumEconomy => 1.6,
            Cabin::Business => 3.5,
            Cabin::First => 5.0,
        }
    }

    /// Multiplier applied to economy award chart prices.
    pub fn award_multiplier(&self) -> f64 {
        match self {
            Cabin::Economy => 1.0,
            Cabin::PremiumEconomy => 1.5,
            Cabin::Business => 2.5,
            Cabin::First => 3.5,
        }
    }

    /// Single-letter prefix used by award availability feeds (Y/W/J/F).
    pub fn award_code(&self) -> &'static str {
        match self {
            Cabin::Economy => "Y",
            Cabin::PremiumEconomy => "W",
            Cabin::Business => "J",
            Cabin::First => "F",
        }
    }

    /// Travel class name used by cash fare feeds.
    pub fn fare_class(&self) -> &'static str {
        match self {
            Cabin::Economy => "ECONOMY",
            Cabin::PremiumEconomy => "PREMIUM_ECONOMY",
            Cabin::Business => "BUSINESS",
            Cabin::First => "FIRST",
        }
    }
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cabin::Economy => write!(f, "economy"),
            Cabin::PremiumEconomy => write!(f, "premium_economy"),
            Cabin::Business => write!(f, "business"),
            Cabin::First => write!(f, "first"),
        }
    }
}

impl FromStr for Cabin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "economy" | "coach" => Ok(Cabin::Economy),
            "premium_economy" | "premium" => Ok(Cabin::PremiumEconomy),
            "business" => Ok(Cabin::Business),
            "first" => Ok(Cabin::First),
            _ => Err(format!("Unknown cabin: {s}")),
        }
    }
}
