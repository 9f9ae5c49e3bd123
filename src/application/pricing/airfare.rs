use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::attempt_live;
use super::estimator::estimate_airfare;
use crate::application::scoring::round2;
use crate::domain::entities::quote::{FareQuote, Provenance, QuoteRequest};
use crate::domain::ports::cache::{Clock, TtlStore};
use crate::domain::ports::pricing::{AirfareSource, CashFare};
use crate::domain::values::data_mode::QuoteSource;

/// Cash airfare for the whole party.
pub struct AirfareProvider {
    source: Option<Arc<dyn AirfareSource>>,
    cache: Arc<dyn TtlStore<FareQuote>>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl AirfareProvider {
    pub fn new(
        source: Option<Arc<dyn AirfareSource>>,
        cache: Arc<dyn TtlStore<FareQuote>>,
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

    pub async fn quote(&self, req: &QuoteRequest) -> FareQuote {
        let key = req.cache_key();
        if let Some(entry) = self.cache.get(&key) {
            debug!(%key, "airfare cache hit");
            return entry.value;
        }

        let now = self.clock.now();
        let live = match &self.source {
            Some(source) => attempt_live(source.name(), self.timeout, source.search_cash_fares(req))
                .await
                .and_then(|fares| cheapest(fares, now)),
            None => None,
        };

        let quote = live.unwrap_or_else(|| estimate_airfare(req, now));
        self.cache.set(key, quote.clone());
        quote
    }
}

fn cheapest(fares: Vec<CashFare>, now: DateTime<Utc>) -> Option<FareQuote> {
    let mut best: Option<CashFare> = None;
    for fare in fares {
        if !fare.total_price.is_finite() || fare.total_price <= 0.0 {
            continue;
        }
        if best.as_ref().map_or(true, |b| fare.total_price < b.total_price) {
            best = Some(fare);
        }
    }

    best.map(|fare| FareQuote {
        cash_total: round2(fare.total_price),
        carrier_code: fare.carrier_code,
        flight_number: fare.flight_number,
        provenance: Provenance::live(QuoteSource::Amadeus, now),
    })
}
