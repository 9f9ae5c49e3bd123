//! Result cache: memoizes whole pipeline runs per search fingerprint.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::entities::recommendation::{CacheStatus, RecommendationBundle};
use crate::domain::entities::trip_query::TripQuery;
use crate::domain::error::DomainError;
use crate::domain::ports::cache::TtlStore;
use crate::domain::values::cabin::Cabin;
use crate::domain::values::currency::Wallet;

pub struct ResultCache {
    store: Arc<dyn TtlStore<RecommendationBundle>>,
}

impl ResultCache {
    pub fn new(store: Arc<dyn TtlStore<RecommendationBundle>>) -> Self {
        Self { store }
    }

    /// Stored bundle marked `HIT` while within TTL; otherwise runs `compute`
    /// and stores its result marked `MISS`. Errors are returned, not cached.
    pub async fn get_or_compute<F, Fut>(
        &self,
        fingerprint: &str,
        compute: F,
    ) -> Result<RecommendationBundle, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<RecommendationBundle, DomainError>>,
    {
        if let Some(entry) = self.store.get(fingerprint) {
            debug!(fingerprint, "result cache hit");
            return Ok(entry.value.with_cache(CacheStatus::Hit));
        }

        let bundle = compute().await?.with_cache(CacheStatus::Miss);
        self.store.set(fingerprint.to_string(), bundle.clone());
        Ok(bundle)
    }
}

/// Every query field that changes pricing, in canonical form.
#[derive(Serialize)]
struct FingerprintKey<'a> {
    origins: Vec<String>,
    date_window_start: NaiveDate,
    date_window_end: NaiveDate,
    nights: u32,
    travelers: u32,
    cabin: Cabin,
    max_travel_hours: f64,
    max_stops: u32,
    vibe_tags: Vec<String>,
    preferred_destinations: Vec<String>,
    balances: &'a Wallet,
}

/// SHA-256 hex over the canonical pricing fields. Order, case and
/// whitespace of list fields don't matter; the label and display hints are
/// left out.
pub fn fingerprint(query: &TripQuery) -> String {
    let mut origins = query.normalized_origins();
    origins.sort();

    let positive: Wallet = query
        .balances
        .iter()
        .filter(|(_, balance)| **balance > 0)
        .map(|(currency, balance)| (*currency, *balance))
        .collect();

    let key = FingerprintKey {
        origins,
        date_window_start: query.date_window_start,
        date_window_end: query.date_window_end,
        nights: query.nights,
        travelers: query.travelers,
        cabin: query.cabin,
        max_travel_hours: query.constraints.max_travel_hours,
        max_stops: query.constraints.max_stops,
        vibe_tags: canonical(&query.vibe_tags),
        preferred_destinations: canonical(&query.preferred_destinations),
        balances: &positive,
    };

    // A plain struct of strings and numbers always serializes.
    let payload = serde_json::to_vec(&key).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&payload);
    hex::encode(hasher.finalize())
}

fn canonical(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::currency::Currency;

    fn query() -> TripQuery {
        serde_json::from_value(serde_json::json!({
            "origins": ["IAD", "DCA"],
            "date_window_start": "2026-03-01",
            "date_window_end": "2026-03-10",
            "vibe_tags": ["warm beach", "Europe"],
            "balances": {"MR": 100000},
        }))
        .unwrap()
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let fp = fingerprint(&query());
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_ignores_cosmetic_fields_and_order() {
        let base = fingerprint(&query());

        let mut q = query();
        q.label = Some("Spring break".into());
        q.constraints.nonstop_preferred = true;
        q.origins = vec!["dca".into(), " iad".into()];
        q.vibe_tags = vec!["europe".into(), "Warm Beach ".into()];
        q.balances.insert(Currency::Chase, 0);
        assert_eq!(fingerprint(&q), base);
    }

    #[test]
    fn test_fingerprint_tracks_pricing_fields() {
        let base = fingerprint(&query());

        let mut q = query();
        q.travelers = 3;
        assert_ne!(fingerprint(&q), base);

        let mut q = query();
        q.constraints.max_stops = 0;
        assert_ne!(fingerprint(&q), base);

        let mut q = query();
        q.preferred_destinations = vec!["CUN".into()];
        assert_ne!(fingerprint(&q), base);

        let mut q = query();
        q.balances.insert(Currency::Mr, 50_000);
        assert_ne!(fingerprint(&q), base);
    }
}
