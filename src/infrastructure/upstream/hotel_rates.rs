use super::{check_status, http_client};
use crate::domain::entities::quote::QuoteRequest;
use crate::domain::ports::pricing::{HotelRate, HotelSource, ProviderError};
use async_trait::async_trait;
use std::time::Duration;

/// Hotel rates from a configurable JSON endpoint:
/// `GET {base}/v1/rates?destination=..&check_in=..&check_out=..&guests=..`.
pub struct HotelRatesClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl HotelRatesClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http_client(timeout),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: Vec<RateRecord>,
}

#[derive(Debug, serde::Deserialize)]
struct RateRecord {
    cash_total: f64,
    #[serde(default)]
    points_total: Option<u64>,
    #[serde(default)]
    fees_on_points: f64,
}

fn parse_rates(body: &str) -> Result<Vec<HotelRate>, ProviderError> {
    let resp: RatesResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(resp
        .rates
        .into_iter()
        .map(|r| HotelRate {
            cash_total: r.cash_total,
            points_total: r.points_total,
            fees_on_points: r.fees_on_points,
        })
        .collect())
}

#[async_trait]
impl HotelSource for HotelRatesClient {
    fn name(&self) -> &str {
        "hotel_rates"
    }

    async fn search_hotels(&self, req: &QuoteRequest) -> Result<Vec<HotelRate>, ProviderError> {
        let url = format!("{}/v1/rates", self.base_url);
        let check_in = req.depart.to_string();
        let check_out = req.return_date.to_string();
        let guests = req.travelers.max(1).to_string();

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("destination", req.destination.as_str()),
                ("check_in", check_in.as_str()),
                ("check_out", check_out.as_str()),
                ("guests", guests.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let body = check_status("hotel rates", resp)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        parse_rates(&body)
    }
}
