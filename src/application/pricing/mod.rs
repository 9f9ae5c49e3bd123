//! Pricing providers: award, airfare and hotel.
//!
//! Each provider is a read-through cache in front of an optional live source
//! and a deterministic estimator. `quote` never fails: a missing source, an
//! upstream error, a timeout or an empty result all fall through to the
//! estimator. A failed live call is not retried within the same request.

pub mod airfare;
pub mod award;
pub mod estimator;
pub mod hotel;

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::domain::ports::pricing::ProviderError;

pub use airfare::AirfareProvider;
pub use award::AwardProvider;
pub use hotel::HotelProvider;

/// Runs one live call under `timeout`. Any failure, including an empty
/// result, is logged and mapped to `None`.
pub(crate) async fn attempt_live<T, F>(source: &str, timeout: Duration, call: F) -> Option<Vec<T>>
where
    F: Future<Output = Result<Vec<T>, ProviderError>>,
{
    let outcome = match tokio::time::timeout(timeout, call).await {
        Ok(Ok(records)) if records.is_empty() => Err(ProviderError::Empty),
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(timeout.as_millis())),
    };

    match outcome {
        Ok(records) => Some(records),
        Err(error) => {
            warn!(source, %error, "live source unavailable, using estimate");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_attempt_live_passes_records_through() {
        let out = attempt_live("test", Duration::from_millis(50), async { Ok(vec![1, 2]) }).await;
        assert_eq!(out, Some(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_attempt_live_empty_is_failure() {
        let out: Option<Vec<u8>> =
            attempt_live("test", Duration::from_millis(50), async { Ok(Vec::new()) }).await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_attempt_live_error_is_failure() {
        let out: Option<Vec<u8>> = attempt_live("test", Duration::from_millis(50), async {
            Err(ProviderError::Network("connection refused".into()))
        })
        .await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn test_attempt_live_times_out() {
        let out: Option<Vec<u8>> = attempt_live("test", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![1])
        })
        .await;
        assert!(out.is_none());
    }
}
