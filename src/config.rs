//! Engine configuration from `POINTSTRIP_*` and vendor environment variables.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::recommend::DEFAULT_MAX_IN_FLIGHT;
use crate::domain::ports::pricing::{AirfareSource, AwardSource, HotelSource};
use crate::infrastructure::upstream::{AmadeusClient, HotelRatesClient, SeatsAeroClient};

#[derive(Debug, Clone, PartialEq)]
pub struct SeatsAeroConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmadeusConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelRatesConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Per live call.
    pub provider_timeout: Duration,
    /// Concurrently priced (origin, destination) pairs.
    pub max_in_flight: usize,
    pub result_ttl: chrono::Duration,
    pub award_ttl: chrono::Duration,
    pub airfare_ttl: chrono::Duration,
    pub hotel_ttl: chrono::Duration,
    pub seats_aero: Option<SeatsAeroConfig>,
    pub amadeus: Option<AmadeusConfig>,
    pub hotel_rates: Option<HotelRatesConfig>,
}

impl Default for EngineConfig {
    /// Estimators only.
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(8),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            result_ttl: chrono::Duration::seconds(300),
            award_ttl: chrono::Duration::seconds(600),
            airfare_ttl: chrono::Duration::seconds(1800),
            hotel_ttl: chrono::Duration::seconds(1200),
            seats_aero: None,
            amadeus: None,
            hotel_rates: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// A live source is configured only when all of its credentials are
    /// present and non-blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let secs = |key: &str, default: u64| -> u64 {
            match get(key) {
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!(key, value = %raw, default, "not a whole number of seconds, using default");
                    default
                }),
                None => default,
            }
        };
        let ttl = |key: &str, default: chrono::Duration| {
            let requested = secs(key, default.num_seconds().max(0) as u64);
            i64::try_from(requested)
                .ok()
                .and_then(chrono::Duration::try_seconds)
                .unwrap_or_else(|| {
                    warn!(key, value = requested, "ttl out of range, using default");
                    default
                })
        };

        let max_in_flight = match get("POINTSTRIP_MAX_IN_FLIGHT") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).unwrap_or_else(|| {
                warn!(value = %raw, "invalid POINTSTRIP_MAX_IN_FLIGHT, using default");
                defaults.max_in_flight
            }),
            None => defaults.max_in_flight,
        };

        Self {
            provider_timeout: Duration::from_secs(secs(
                "POINTSTRIP_PROVIDER_TIMEOUT_SECS",
                defaults.provider_timeout.as_secs(),
            )),
            max_in_flight,
            result_ttl: ttl("POINTSTRIP_RESULT_TTL_SECS", defaults.result_ttl),
            award_ttl: ttl("POINTSTRIP_AWARD_TTL_SECS", defaults.award_ttl),
            airfare_ttl: ttl("POINTSTRIP_AIRFARE_TTL_SECS", defaults.airfare_ttl),
            hotel_ttl: ttl("POINTSTRIP_HOTEL_TTL_SECS", defaults.hotel_ttl),
            seats_aero: get("SEATS_AERO_API_KEY").map(|api_key| SeatsAeroConfig {
                api_key,
                base_url: get("SEATS_AERO_BASE_URL"),
            }),
            amadeus: match (get("AMADEUS_CLIENT_ID"), get("AMADEUS_CLIENT_SECRET")) {
                (Some(client_id), Some(client_secret)) => Some(AmadeusConfig {
                    client_id,
                    client_secret,
                    base_url: get("AMADEUS_BASE_URL"),
                }),
                _ => None,
            },
            hotel_rates: match (get("HOTEL_RATES_API_KEY"), get("HOTEL_RATES_BASE_URL")) {
                (Some(api_key), Some(base_url)) => Some(HotelRatesConfig { api_key, base_url }),
                _ => None,
            },
        }
    }
}

/// Live upstreams handed to the pricing providers. `None` means estimator.
#[derive(Clone, Default)]
pub struct LiveSources {
    pub award: Option<Arc<dyn AwardSource>>,
    pub airfare: Option<Arc<dyn AirfareSource>>,
    pub hotel: Option<Arc<dyn HotelSource>>,
}

impl LiveSources {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let timeout = config.provider_timeout;
        let sources = Self {
            award: config.seats_aero.as_ref().map(|c| {
                Arc::new(SeatsAeroClient::new(c.api_key.clone(), c.base_url.clone(), timeout))
                    as Arc<dyn AwardSource>
            }),
            airfare: config.amadeus.as_ref().map(|c| {
                Arc::new(AmadeusClient::new(
                    c.client_id.clone(),
                    c.client_secret.clone(),
                    c.base_url.clone(),
                    timeout,
                )) as Arc<dyn AirfareSource>
            }),
            hotel: config.hotel_rates.as_ref().map(|c| {
                Arc::new(HotelRatesClient::new(c.api_key.clone(), c.base_url.clone(), timeout))
                    as Arc<dyn HotelSource>
            }),
        };
        info!(
            award = sources.award.is_some(),
            airfare = sources.airfare.is_some(),
            hotel = sources.hotel.is_some(),
            "live sources configured"
        );
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EngineConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_no_vars_means_defaults() {
        assert_eq!(config(&[]), EngineConfig::default());
    }

    #[test]
    fn test_sources_need_every_credential() {
        let c = config(&[
            ("SEATS_AERO_API_KEY", "k"),
            ("AMADEUS_CLIENT_ID", "id"),
            ("HOTEL_RATES_API_KEY", "k"),
            ("HOTEL_RATES_BASE_URL", "  "),
        ]);
        assert!(c.seats_aero.is_some());
        assert!(c.amadeus.is_none());
        assert!(c.hotel_rates.is_none());

        let sources = LiveSources::from_config(&c);
        assert!(sources.award.is_some());
        assert!(sources.airfare.is_none());
    }

    #[test]
    fn test_numeric_overrides_and_bad_values() {
        let c = config(&[
            ("POINTSTRIP_PROVIDER_TIMEOUT_SECS", "3"),
            ("POINTSTRIP_RESULT_TTL_SECS", "60"),
            ("POINTSTRIP_AWARD_TTL_SECS", "soon"),
            ("POINTSTRIP_MAX_IN_FLIGHT", "0"),
        ]);
        assert_eq!(c.provider_timeout, Duration::from_secs(3));
        assert_eq!(c.result_ttl, chrono::Duration::seconds(60));
        assert_eq!(c.award_ttl, chrono::Duration::seconds(600));
        assert_eq!(c.max_in_flight, DEFAULT_MAX_IN_FLIGHT);
    }

    #[test]
    fn test_oversized_ttl_falls_back_to_default() {
        let c = config(&[
            ("POINTSTRIP_RESULT_TTL_SECS", "10000000000000000"),
            ("POINTSTRIP_HOTEL_TTL_SECS", "18446744073709551615"),
        ]);
        assert_eq!(c.result_ttl, EngineConfig::default().result_ttl);
        assert_eq!(c.hotel_ttl, EngineConfig::default().hotel_ttl);
    }
}
