use crate::domain::entities::quote::Provenance;
use crate::domain::entities::transfer::TransferPath;
use crate::domain::values::cabin::Cabin;
use crate::domain::values::currency::Currency;
use crate::domain::values::data_mode::DataMode;
use crate::domain::values::points_strategy::{HotelBookingMode, PointsStrategy};
use crate::domain::values::valuation::Valuation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub flight_points: u64,
    pub flight_program: String,
    pub flight_cpp: f64,
    pub hotel_points: u64,
    pub hotel_program: String,
    pub hotel_cpp: f64,
    /// Award taxes and surcharges (USD).
    pub taxes_fees: f64,
    pub hotel_fees_on_points: f64,
    pub suggested_currency: Option<Currency>,
    pub suggested_program: Option<String>,
    /// Every strategy that clears the value threshold, when more than one does.
    #[serde(default)]
    pub points_strategy_alternates: Vec<PointsStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionComponents {
    pub stops_penalty: f64,
    pub duration_penalty: f64,
    pub total: f64,
}

/// Weighted terms that add up to `score_final`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub oop_term: f64,
    pub cpp_term: f64,
    pub friction_term: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardDetails {
    pub program: String,
    pub airline: String,
    pub points: u64,
    pub taxes_fees: f64,
    pub cabin: Cabin,
    pub duration_hours: f64,
    /// "AA 1234" when the award lines up with a specific cash-fare flight.
    pub exact_flight: Option<String>,
    pub retrieved_at: DateTime<Utc>,
}

/// Provenance of each priced component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLabels {
    pub flights: Provenance,
    pub hotels: Provenance,
    pub awards: Provenance,
}

/// The externally visible result unit. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOption {
    pub id: String,
    pub destination: String,
    pub city: String,
    pub country: String,
    pub origin: String,
    pub airline: String,
    pub stops: u32,
    pub travel_hours: f64,
    pub cash_price_pp: f64,
    pub oop_total: f64,
    pub cpp_flight: f64,
    pub cpp_hotel: f64,
    pub cpp_blended_capped: f64,
    pub cpp_threshold: f64,
    pub valuation: Valuation,
    pub transfer_paths: Vec<TransferPath>,
    pub points_strategy: PointsStrategy,
    pub hotel_booking_mode: HotelBookingMode,
    pub marriott_points_eligible: bool,
    pub points_breakdown: PointsBreakdown,
    pub friction: FrictionComponents,
    pub score_components: ScoreComponents,
    pub score_final: f64,
    pub rationale: Vec<String>,
    pub validation_steps: Vec<String>,
    pub award_details: AwardDetails,
    pub sources: SourceLabels,
    /// LIVE when any component is live.
    pub api_mode: DataMode,
    pub as_of: DateTime<Utc>,
}

impl RecommendationOption {
    pub fn award_mode(&self) -> DataMode {
        self.sources.awards.mode
    }

    pub fn cash_flights_mode(&self) -> DataMode {
        self.sources.flights.mode
    }

    pub fn cash_hotels_mode(&self) -> DataMode {
        self.sources.hotels.mode
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerTile {
    BestOop,
    BestCpp,
    BestBalanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheStatus {
    Hit,
    #[default]
    Miss,
}

/// One pipeline run's output; the unit stored in the result cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub query_id: String,
    pub generated_at: DateTime<Utc>,
    pub cache: CacheStatus,
    pub winner_tiles: BTreeMap<WinnerTile, String>,
    /// Sorted by `score_final`, best first.
    pub options: Vec<RecommendationOption>,
}

impl RecommendationBundle {
    pub fn option(&self, id: &str) -> Option<&RecommendationOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn winner(&self, tile: WinnerTile) -> Option<&RecommendationOption> {
        self.winner_tiles.get(&tile).and_then(|id| self.option(id))
    }

    /// Same bundle, different cache annotation.
    pub fn with_cache(mut self, cache: CacheStatus) -> Self {
        self.cache = cache;
        self
    }

    /// Same options and tiles, answered for another request.
    pub fn with_query_id(mut self, query_id: &str) -> Self {
        self.query_id = query_id.to_string();
        self
    }
}

/// What the downstream playbook generator needs about a chosen option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookContext {
    pub option_id: String,
    pub origin: String,
    pub destination: String,
    pub points_strategy: PointsStrategy,
    pub alternate_strategies: Vec<PointsStrategy>,
    pub suggested_currency: Option<Currency>,
    pub suggested_program: Option<String>,
    pub flight_points: u64,
    pub hotel_points: u64,
    pub taxes_fees: f64,
    pub hotel_fees_on_points: f64,
    pub transfer_paths: Vec<TransferPath>,
    pub award_mode: DataMode,
    pub as_of: DateTime<Utc>,
}

impl From<&RecommendationOption> for PlaybookContext {
    fn from(o: &RecommendationOption) -> Self {
        Self {
            option_id: o.id.clone(),
            origin: o.origin.clone(),
            destination: o.destination.clone(),
            points_strategy: o.points_strategy,
            alternate_strategies: o.points_breakdown.points_strategy_alternates.clone(),
            suggested_currency: o.points_breakdown.suggested_currency,
            suggested_program: o.points_breakdown.suggested_program.clone(),
            flight_points: o.points_breakdown.flight_points,
            hotel_points: o.points_breakdown.hotel_points,
            taxes_fees: o.points_breakdown.taxes_fees,
            hotel_fees_on_points: o.points_breakdown.hotel_fees_on_points,
            transfer_paths: o.transfer_paths.clone(),
            award_mode: o.award_mode(),
            as_of: o.as_of,
        }
    }
}
