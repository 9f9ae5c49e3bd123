use super::{check_status, http_client};
use crate::domain::entities::quote::QuoteRequest;
use crate::domain::ports::pricing::{AirfareSource, CashFare, ProviderError};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Refresh the token this long before Amadeus says it expires.
const TOKEN_SLACK: Duration = Duration::from_secs(60);
const MAX_OFFERS: &str = "10";

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Cash fares from the Amadeus Self-Service flight-offers search.
pub struct AmadeusClient {
    client_id: String,
    client_secret: String,
    base_url: String,
    client: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl AmadeusClient {
    pub fn new(client_id: String, client_secret: String, base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            client_id,
            client_secret,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            client: http_client(timeout),
            token: Mutex::new(None),
        }
    }

    async fn access_token(&self) -> Result<String, ProviderError> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let resp = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let token: TokenResponse = check_status("amadeus auth", resp)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_SLACK);
        *guard = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Debug, serde::Deserialize)]
struct OffersResponse {
    #[serde(default)]
    data: Vec<FlightOffer>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightOffer {
    price: OfferPrice,
    #[serde(default)]
    validating_airline_codes: Vec<String>,
    #[serde(default)]
    itineraries: Vec<Itinerary>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfferPrice {
    grand_total: String,
}

#[derive(Debug, serde::Deserialize)]
struct Itinerary {
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Segment {
    carrier_code: String,
    number: String,
}

impl FlightOffer {
    fn into_fare(self) -> Option<CashFare> {
        let total_price: f64 = self.price.grand_total.trim().parse().ok()?;
        let first = self.itineraries.first().and_then(|i| i.segments.first());
        let carrier_code = first
            .map(|s| s.carrier_code.clone())
            .or_else(|| self.validating_airline_codes.first().cloned());
        Some(CashFare {
            total_price,
            carrier_code,
            flight_number: first.map(|s| s.number.clone()),
        })
    }
}

fn parse_offers(body: &str) -> Result<Vec<CashFare>, ProviderError> {
    let resp: OffersResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(resp.data.into_iter().filter_map(FlightOffer::into_fare).collect())
}

#[async_trait]
impl AirfareSource for AmadeusClient {
    fn name(&self) -> &str {
        "amadeus"
    }

    async fn search_cash_fares(&self, req: &QuoteRequest) -> Result<Vec<CashFare>, ProviderError> {
        let token = self.access_token().await?;
        let url = format!("{}/v2/shopping/flight-offers", self.base_url);
        let depart = req.depart.to_string();
        let ret = req.return_date.to_string();
        let adults = req.travelers.max(1).to_string();

        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("originLocationCode", req.origin.as_str()),
                ("destinationLocationCode", req.destination.as_str()),
                ("departureDate", depart.as_str()),
                ("returnDate", ret.as_str()),
                ("adults", adults.as_str()),
                ("travelClass", req.cabin.fare_class()),
                ("currencyCode", "USD"),
                ("max", MAX_OFFERS),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let body = check_status("amadeus", resp)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        parse_offers(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offers() {
        let body = r#"{
            "data": [
                {
                    "price": {"currency": "USD", "grandTotal": "1398.40"},
                    "validatingAirlineCodes": ["AF"],
                    "itineraries": [{"segments": [{"carrierCode": "AF", "number": "55"}]}]
                },
                {
                    "price": {"currency": "USD", "grandTotal": "n/a"}
                },
                {
                    "price": {"currency": "USD", "grandTotal": "1512.00"},
                    "validatingAirlineCodes": ["UA"]
                }
            ]
        }"#;
        let fares = parse_offers(body).unwrap();
        assert_eq!(fares.len(), 2);
        assert!((fares[0].total_price - 1398.40).abs() < 1e-9);
        assert_eq!(fares[0].carrier_code.as_deref(), Some("AF"));
        assert_eq!(fares[0].flight_number.as_deref(), Some("55"));
        assert_eq!(fares[1].carrier_code.as_deref(), Some("UA"));
        assert!(fares[1].flight_number.is_none());
    }

    #[test]
    fn test_empty_data() {
        assert!(parse_offers(r#"{"data": []}"#).unwrap().is_empty());
        assert!(parse_offers(r#"{"errors": []}"#).unwrap().is_empty());
    }
}
