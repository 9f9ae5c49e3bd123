use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::attempt_live;
use super::estimator::estimate_hotel;
use crate::application::scoring::round2;
use crate::domain::entities::quote::{HotelQuote, Provenance, QuoteRequest};
use crate::domain::ports::cache::{Clock, TtlStore};
use crate::domain::ports::pricing::{HotelRate, HotelSource};
use crate::domain::values::data_mode::QuoteSource;

/// Hotel stay pricing, cash and points.
pub struct HotelProvider {
    source: Option<Arc<dyn HotelSource>>,
    cache: Arc<dyn TtlStore<HotelQuote>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl HotelProvider {
    pub fn new(
        source: Option<Arc<dyn HotelSource>>,
        cache: Arc<dyn TtlStore<HotelQuote>>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            clock,
            timeout,
        }
    }

    pub async fn quote(&self, req: &QuoteRequest) -> HotelQuote {
        let key = req.cache_key();
        if let Some(entry) = self.cache.get(&key) {
            debug!(%key, "hotel cache hit");
            return entry.value;
        }

        let now = self.clock.now();
        let live = match &self.source {
            Some(source) => attempt_live(source.name(), self.timeout, source.search_hotels(req))
                .await
                .and_then(|rates| cheapest(req, rates, now)),
            None => None,
        };

        let quote = live.unwrap_or_else(|| estimate_hotel(req, now));
        self.cache.set(key, quote.clone());
        quote
    }
}

/// Lowest cash rate wins. A rate with no points price borrows the estimated
/// points figure so the hotel redemption can still be valued.
fn cheapest(req: &QuoteRequest, rates: Vec<HotelRate>, now: DateTime<Utc>) -> Option<HotelQuote> {
    let mut best: Option<HotelRate> = None;
    for rate in rates {
        if !rate.cash_total.is_finite() || rate.cash_total <= 0.0 {
            continue;
        }
        if best.as_ref().map_or(true, |b| rate.cash_total < b.cash_total) {
            best = Some(rate);
        }
    }

    let rate = best?;
    let points_total = match rate.points_total {
        Some(points) if points > 0 => points,
        _ => estimate_hotel(req, now).points_total,
    };

    Some(HotelQuote {
        cash_total: round2(rate.cash_total),
        points_total,
        fees_on_points: round2(rate.fees_on_points.max(0.0)),
        provenance: Provenance::live(QuoteSource::HotelRates, now),
    })
}
