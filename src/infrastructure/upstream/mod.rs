//! reqwest clients for the live pricing sources.

pub mod amadeus;
pub mod hotel_rates;
pub mod seats_aero;

use crate::domain::ports::pricing::ProviderError;
use std::time::Duration;

pub use amadeus::AmadeusClient;
pub use hotel_rates::HotelRatesClient;
pub use seats_aero::SeatsAeroClient;

const USER_AGENT: &str = "pointstrip/0.1";

pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

/// Maps a non-success status to `Network`, keeping a short body excerpt.
pub(crate) async fn check_status(
    source: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(200).collect();
    Err(ProviderError::Network(format!("{source} returned {status}: {excerpt}")))
}
