use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a figure came from a live upstream feed or a deterministic estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataMode {
    Live,
    #[default]
    Estimated,
}

impl DataMode {
    pub fn is_live(&self) -> bool {
        matches!(self, DataMode::Live)
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataMode::Live => write!(f, "LIVE"),
            DataMode::Estimated => write!(f, "ESTIMATED"),
        }
    }
}

impl FromStr for DataMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIVE" => Ok(DataMode::Live),
            "ESTIMATED" | "FALLBACK" => Ok(DataMode::Estimated),
            _ => Err(format!("Unknown data mode: {s}")),
        }
    }
}

/// Where a quote was produced. Each live feed has its own id so valuation can
/// weigh how much it trusts the taxes figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteSource {
    /// seats.aero partner API (award availability)
    #[serde(rename = "seats_aero_live")]
    SeatsAero,
    /// Amadeus flight offers (cash fares)
    #[serde(rename = "amadeus_live")]
    Amadeus,
    /// Hotel rates endpoint
    #[serde(rename = "hotel_rates_live")]
    HotelRates,
    /// Deterministic catalog-backed estimator
    #[serde(rename = "estimator")]
    Estimator,
}

impl QuoteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::SeatsAero => "seats_aero_live",
            QuoteSource::Amadeus => "amadeus_live",
            QuoteSource::HotelRates => "hotel_rates_live",
            QuoteSource::Estimator => "estimator",
        }
    }

    pub fn mode(&self) -> DataMode {
        match self {
            QuoteSource::Estimator => DataMode::Estimated,
            _ => DataMode::Live,
        }
    }

    /// True for the live award availability feed.
    pub fn is_live_award_feed(&self) -> bool {
        matches!(self, QuoteSource::SeatsAero)
    }

    /// True for the live cash-fare feed.
    pub fn is_live_fare_feed(&self) -> bool {
        matches!(self, QuoteSource::Amadeus)
    }
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
