use super::{check_status, http_client};
use crate::domain::entities::quote::QuoteRequest;
use crate::domain::ports::pricing::{AwardFare, AwardSource, ProviderError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://seats.aero/partnerapi";

/// seats.aero source ids → partner-table program names.
const PROGRAMS: &[(&str, &str)] = &[
    ("aeromexico", "Aeromexico Rewards"),
    ("aeroplan", "Air Canada Aeroplan"),
    ("alaska", "Alaska Mileage Plan"),
    ("american", "American AAdvantage"),
    ("connectmiles", "Copa ConnectMiles"),
    ("delta", "Delta SkyMiles"),
    ("emirates", "Emirates Skywards"),
    ("etihad", "Etihad Guest"),
    ("eurobonus", "SAS EuroBonus"),
    ("finnair", "Finnair Plus"),
    ("flyingblue", "Flying Blue"),
    ("jetblue", "JetBlue TrueBlue"),
    ("lifemiles", "Avianca LifeMiles"),
    ("qantas", "Qantas Frequent Flyer"),
    ("qatar", "Qatar Airways Avios"),
    ("singapore", "Singapore KrisFlyer"),
    ("turkish", "Turkish Miles&Smiles"),
    ("united", "United MileagePlus"),
    ("velocity", "Virgin Australia Velocity"),
    ("virginatlantic", "Virgin Atlantic Flying Club"),
];

fn program_name(source: &str) -> String {
    PROGRAMS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(source))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| source.to_string())
}

/// Award availability from the seats.aero partner API (cached search).
pub struct SeatsAeroClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SeatsAeroClient {
    pub fn new(api_key: String, base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            client: http_client(timeout),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Availability>,
}

/// Per-cabin fields are prefixed with the cabin letter (`YMileageCost`,
/// `JAirlines`, ...), so they are kept in a map and read by cabin.
#[derive(Debug, serde::Deserialize)]
struct Availability {
    #[serde(rename = "Source", default)]
    source: String,
    #[serde(rename = "UpdatedAt", default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    fields: HashMap<String, serde_json::Value>,
}

impl Availability {
    fn field(&self, cabin: &str, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(&format!("{cabin}{name}"))
    }

    /// Mileage costs arrive as strings or numbers depending on the route.
    fn mileage(&self, cabin: &str) -> Option<u64> {
        match self.field(cabin, "MileageCost")? {
            serde_json::Value::String(s) => s.trim().parse().ok(),
            serde_json::Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    fn into_fare(self, cabin: &str) -> Option<AwardFare> {
        let available = self
            .field(cabin, "Available")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !available {
            return None;
        }
        let points = self.mileage(cabin).filter(|p| *p > 0)?;
        // Taxes are reported in minor units.
        let taxes = self
            .field(cabin, "TotalTaxes")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
            / 100.0;
        let carrier_codes = self
            .field(cabin, "Airlines")
            .and_then(|v| v.as_str())
            .map(|s| {
                s.split(',')
                    .map(|c| c.trim().to_uppercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Some(AwardFare {
            program: program_name(&self.source),
            airline: None,
            carrier_codes,
            points_per_traveler: points,
            taxes_per_traveler: taxes,
            seen_at: self.updated_at,
        })
    }
}

fn parse_search(body: &str, cabin: &str) -> Result<Vec<AwardFare>, ProviderError> {
    let resp: SearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(resp
        .data
        .into_iter()
        .filter_map(|a| a.into_fare(cabin))
        .collect())
}

#[async_trait]
impl AwardSource for SeatsAeroClient {
    fn name(&self) -> &str {
        "seats_aero"
    }

    async fn search_awards(&self, req: &QuoteRequest) -> Result<Vec<AwardFare>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("SEATS_AERO_API_KEY is empty".into()));
        }

        let url = format!("{}/search", self.base_url);
        let start = req.depart.to_string();
        let resp = self
            .client
            .get(&url)
            .header("Partner-Authorization", &self.api_key)
            .header("Accept", "application/json")
            .query(&[
                ("origin_airport", req.origin.as_str()),
                ("destination_airport", req.destination.as_str()),
                ("start_date", start.as_str()),
                ("end_date", start.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let body = check_status("seats.aero", resp)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        parse_search(&body, req.cabin.award_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "data": [
            {
                "ID": "a1",
                "Source": "flyingblue",
                "UpdatedAt": "2026-02-10T14:05:00Z",
                "YAvailable": true,
                "YMileageCost": "25000",
                "YTotalTaxes": 11230,
                "YAirlines": "AF, KL",
                "JAvailable": false,
                "JMileageCost": "0"
            },
            {
                "ID": "a2",
                "Source": "aeroplan",
                "YAvailable": true,
                "YMileageCost": 35000,
                "YAirlines": "UA"
            },
            {
                "ID": "a3",
                "Source": "united",
                "YAvailable": false,
                "YMileageCost": "30000"
            }
        ]
    }"#;

    #[test]
    fn test_parse_economy_space() {
        let fares = parse_search(BODY, "Y").unwrap();
        assert_eq!(fares.len(), 2);

        assert_eq!(fares[0].program, "Flying Blue");
        assert_eq!(fares[0].points_per_traveler, 25_000);
        assert!((fares[0].taxes_per_traveler - 112.3).abs() < 1e-9);
        assert_eq!(fares[0].carrier_codes, vec!["AF", "KL"]);
        assert!(fares[0].seen_at.is_some());

        assert_eq!(fares[1].program, "Air Canada Aeroplan");
        assert_eq!(fares[1].points_per_traveler, 35_000);
        assert_eq!(fares[1].taxes_per_traveler, 0.0);
        assert!(fares[1].seen_at.is_none());
    }

    #[test]
    fn test_unavailable_cabin_is_skipped() {
        assert!(parse_search(BODY, "J").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        assert!(matches!(parse_search("<html>", "Y"), Err(ProviderError::Parse(_))));
    }

    #[test]
    fn test_unknown_source_keeps_id() {
        assert_eq!(program_name("smiles"), "smiles");
        assert_eq!(program_name("Delta"), "Delta SkyMiles");
    }
}
