//! Shared test helpers: scripted live sources and an engine on a manual clock.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use pointstrip::config::{EngineConfig, LiveSources};
use pointstrip::domain::entities::quote::QuoteRequest;
use pointstrip::domain::entities::trip_query::TripQuery;
use pointstrip::domain::ports::pricing::{
    AirfareSource, AwardFare, AwardSource, CashFare, HotelRate, HotelSource, ProviderError,
};
use pointstrip::infrastructure::cache::ManualClock;
use pointstrip::PointsTrip;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What a scripted source does on every call.
#[derive(Clone)]
pub enum Behavior<T> {
    Records(Vec<T>),
    Fail,
    Empty,
    Stall,
}

pub struct Scripted<T> {
    behavior: Behavior<T>,
    calls: AtomicUsize,
}

impl<T: Clone> Scripted<T> {
    pub fn new(behavior: Behavior<T>) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<Vec<T>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Records(records) => Ok(records.clone()),
            Behavior::Fail => Err(ProviderError::Network("connection reset".into())),
            Behavior::Empty => Ok(Vec::new()),
            Behavior::Stall => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl AwardSource for Scripted<AwardFare> {
    fn name(&self) -> &str {
        "scripted_awards"
    }

    async fn search_awards(&self, _req: &QuoteRequest) -> Result<Vec<AwardFare>, ProviderError> {
        self.respond().await
    }
}

#[async_trait]
impl AirfareSource for Scripted<CashFare> {
    fn name(&self) -> &str {
        "scripted_fares"
    }

    async fn search_cash_fares(&self, _req: &QuoteRequest) -> Result<Vec<CashFare>, ProviderError> {
        self.respond().await
    }
}

#[async_trait]
impl HotelSource for Scripted<HotelRate> {
    fn name(&self) -> &str {
        "scripted_hotels"
    }

    async fn search_hotels(&self, _req: &QuoteRequest) -> Result<Vec<HotelRate>, ProviderError> {
        self.respond().await
    }
}

pub fn flying_blue_award(points: u64) -> AwardFare {
    AwardFare {
        program: "Flying Blue".into(),
        airline: None,
        carrier_codes: vec!["AF".into(), "KL".into()],
        points_per_traveler: points,
        taxes_per_traveler: 55.0,
        seen_at: None,
    }
}

pub fn af_fare(total: f64) -> CashFare {
    CashFare {
        total_price: total,
        carrier_code: Some("AF".into()),
        flight_number: Some("55".into()),
    }
}

pub fn config() -> EngineConfig {
    EngineConfig {
        provider_timeout: Duration::from_millis(100),
        ..EngineConfig::default()
    }
}

pub fn setup_with(sources: LiveSources) -> (PointsTrip, Arc<ManualClock>) {
    setup_at(":memory:", sources)
}

pub fn setup_at(db_path: &str, sources: LiveSources) -> (PointsTrip, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()));
    let pt = PointsTrip::with_sources(db_path, config(), sources, clock.clone()).unwrap();
    (pt, clock)
}

/// Estimators only.
pub fn setup() -> PointsTrip {
    setup_with(LiveSources::none()).0
}

pub fn warm_beach_query() -> TripQuery {
    serde_json::from_value(serde_json::json!({
        "origins": ["IAD"],
        "date_window_start": "2026-03-01",
        "date_window_end": "2026-03-10",
        "nights": 5,
        "travelers": 2,
        "vibe_tags": ["warm beach"],
        "constraints": {"max_travel_hours": 10.0, "max_stops": 1},
        "balances": {"MR": 100000},
    }))
    .unwrap()
}
