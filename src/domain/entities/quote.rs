//! Normalized provider outputs. One quote per (provider, candidate) per run,
//! never mutated after creation.

use crate::domain::values::cabin::Cabin;
use crate::domain::values::data_mode::{DataMode, QuoteSource};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Parameters of one pricing lookup. Also the provider cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteRequest {
    pub origin: String,
    pub destination: String,
    pub travelers: u32,
    pub cabin: Cabin,
    pub depart: NaiveDate,
    pub return_date: NaiveDate,
    pub nights: u32,
}

impl QuoteRequest {
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.origin, self.destination, self.travelers, self.cabin, self.depart, self.return_date, self.nights
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: QuoteSource,
    pub mode: DataMode,
    pub retrieved_at: DateTime<Utc>,
}

impl Provenance {
    pub fn live(source: QuoteSource, retrieved_at: DateTime<Utc>) -> Self {
        Self {
            source,
            mode: source.mode(),
            retrieved_at,
        }
    }

    pub fn estimated(retrieved_at: DateTime<Utc>) -> Self {
        Self {
            source: QuoteSource::Estimator,
            mode: DataMode::Estimated,
            retrieved_at,
        }
    }
}

/// Award seats for the whole party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardQuote {
    /// Total points for all travelers.
    pub points: u64,
    /// Total taxes and carrier surcharges (USD).
    pub taxes: f64,
    /// Loyalty program the seats are bookable through.
    pub program: String,
    /// Operating airline, named as in the transfer-partner table.
    pub airline: String,
    /// IATA codes of the carriers on the itinerary, when the feed reports them.
    #[serde(default)]
    pub carrier_codes: Vec<String>,
    pub provenance: Provenance,
}

/// Cash airfare for the whole party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub cash_total: f64,
    pub carrier_code: Option<String>,
    pub flight_number: Option<String>,
    pub provenance: Provenance,
}

impl FareQuote {
    /// Carrier plus flight number identifies one exact flight.
    pub fn exact_flight(&self) -> Option<(&str, &str)> {
        match (&self.carrier_code, &self.flight_number) {
            (Some(c), Some(n)) => Some((c.as_str(), n.as_str())),
            _ => None,
        }
    }
}

/// Hotel stay for the whole trip, cash and points prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelQuote {
    pub cash_total: f64,
    pub points_total: u64,
    /// Resort/tax fees still owed when paying with points (USD).
    pub fees_on_points: f64,
    pub provenance: Provenance,
}
