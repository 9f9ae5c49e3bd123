use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::attempt_live;
use super::estimator::estimate_award;
use crate::application::scoring::round2;
use crate::application::transfer_graph::TransferGraph;
use crate::domain::entities::quote::{AwardQuote, Provenance, QuoteRequest};
use crate::domain::ports::cache::{Clock, TtlStore};
use crate::domain::ports::pricing::{AwardFare, AwardSource};
use crate::domain::values::data_mode::QuoteSource;

/// Per-traveler bounds for a live award record. Anything outside is
/// treated as a malformed feed row.
const MAX_POINTS_PER_TRAVELER: u64 = 5_000_000;
const MAX_TAXES_PER_TRAVELER: f64 = 50_000.0;

/// Award seat pricing. Live data comes from the award availability feed
/// when one is configured.
pub struct AwardProvider {
    source: Option<Arc<dyn AwardSource>>,
    cache: Arc<dyn TtlStore<AwardQuote>>,
    clock: Arc<dyn Clock>,
    graph: Arc<TransferGraph>,
    timeout: Duration,
}

impl AwardProvider {
    pub fn new(
        source: Option<Arc<dyn AwardSource>>,
        cache: Arc<dyn TtlStore<AwardQuote>>,
        clock: Arc<dyn Clock>,
        graph: Arc<TransferGraph>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            clock,
            graph,
            timeout,
        }
    }

    pub async fn quote(&self, req: &QuoteRequest) -> AwardQuote {
        let key = req.cache_key();
        if let Some(entry) = self.cache.get(&key) {
            debug!(%key, "award cache hit");
            return entry.value;
        }

        let now = self.clock.now();
        let live = match &self.source {
            Some(source) => attempt_live(source.name(), self.timeout, source.search_awards(req))
                .await
                .and_then(|records| self.cheapest(req, records, now)),
            None => None,
        };

        let quote = live.unwrap_or_else(|| estimate_award(req, &self.graph, now));
        self.cache.set(key, quote.clone());
        quote
    }

    /// Fewest points wins; first record on ties. Records without a points
    /// price, or with points or taxes outside a plausible range, are ignored.
    fn cheapest(&self, req: &QuoteRequest, records: Vec<AwardFare>, now: DateTime<Utc>) -> Option<AwardQuote> {
        let total = records.len();
        let best = records
            .into_iter()
            .filter(|r| (1..=MAX_POINTS_PER_TRAVELER).contains(&r.points_per_traveler))
            .filter(|r| (0.0..=MAX_TAXES_PER_TRAVELER).contains(&r.taxes_per_traveler))
            .min_by_key(|r| r.points_per_traveler);
        let Some(best) = best else {
            warn!(records = total, "no plausible award record, using estimate");
            return None;
        };

        let travelers = req.travelers.max(1);
        let airline = best
            .airline
            .clone()
            .or_else(|| self.graph.airline_for_program(&best.program).map(str::to_string))
            .unwrap_or_else(|| best.program.clone());

        Some(AwardQuote {
            points: best.points_per_traveler * u64::from(travelers),
            taxes: round2(best.taxes_per_traveler * travelers as f64),
            program: best.program,
            airline,
            carrier_codes: best.carrier_codes,
            provenance: Provenance::live(QuoteSource::SeatsAero, best.seen_at.unwrap_or(now)),
        })
    }
}
