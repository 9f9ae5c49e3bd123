//! Live pricing source ports.
//!
//! Each trait wraps one paid, rate-limited upstream. Implementations return
//! raw records; the pricing providers in `application::pricing` pick the best
//! record, tag provenance, and fall back to the estimators on any error,
//! timeout or empty result. Nothing returned here is ever surfaced to callers
//! as an error.

use crate::domain::entities::quote::QuoteRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Timed out after {0} ms")]
    Timeout(u128),

    #[error("No usable results")]
    Empty,
}

/// One award availability record, per traveler.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardFare {
    pub program: String,
    pub airline: Option<String>,
    pub carrier_codes: Vec<String>,
    pub points_per_traveler: u64,
    pub taxes_per_traveler: f64,
    /// When the upstream last saw this space.
    pub seen_at: Option<DateTime<Utc>>,
}

/// One cash fare offer, whole party.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFare {
    pub total_price: f64,
    pub carrier_code: Option<String>,
    pub flight_number: Option<String>,
}

/// One hotel rate for the whole stay.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelRate {
    pub cash_total: f64,
    pub points_total: Option<u64>,
    pub fees_on_points: f64,
}

#[async_trait]
pub trait AwardSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search_awards(&self, req: &QuoteRequest) -> Result<Vec<AwardFare>, ProviderError>;
}

#[async_trait]
pub trait AirfareSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search_cash_fares(&self, req: &QuoteRequest) -> Result<Vec<CashFare>, ProviderError>;
}

#[async_trait]
pub trait HotelSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search_hotels(&self, req: &QuoteRequest) -> Result<Vec<HotelRate>, ProviderError>;
}
