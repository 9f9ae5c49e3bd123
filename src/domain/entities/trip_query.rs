use crate::domain::catalog::airports::is_supported_origin;
use crate::domain::error::DomainError;
use crate::domain::values::cabin::Cabin;
use crate::domain::values::currency::Wallet;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default = "default_max_travel_hours")]
    pub max_travel_hours: f64,
    #[serde(default = "default_max_stops")]
    pub max_stops: u32,
    /// Display hint only; filtering is driven by `max_stops`.
    #[serde(default)]
    pub nonstop_preferred: bool,
}

fn default_max_travel_hours() -> f64 {
    10.0
}

fn default_max_stops() -> u32 {
    1
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_travel_hours: default_max_travel_hours(),
            max_stops: default_max_stops(),
            nonstop_preferred: false,
        }
    }
}

/// A traveler's submitted trip preferences. Immutable once submitted; one
/// query drives one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripQuery {
    pub origins: Vec<String>,
    pub date_window_start: NaiveDate,
    pub date_window_end: NaiveDate,
    #[serde(default = "default_nights", alias = "duration_nights")]
    pub nights: u32,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default, alias = "cabin_preference")]
    pub cabin: Cabin,
    #[serde(default)]
    pub vibe_tags: Vec<String>,
    #[serde(default)]
    pub preferred_destinations: Vec<String>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub balances: Wallet,
    /// Free-form name shown by the UI; never affects pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Longest stay a query may ask for.
pub const MAX_NIGHTS: u32 = 365;

fn default_nights() -> u32 {
    5
}

fn default_travelers() -> u32 {
    2
}

impl TripQuery {
    /// Shape checks first, then the origin allow-list. Runs before any
    /// provider call so a bad query does no partial work.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origins.iter().all(|o| o.trim().is_empty()) {
            return Err(DomainError::InvalidInput(
                "At least one origin airport is required".into(),
            ));
        }
        if self.travelers == 0 {
            return Err(DomainError::InvalidInput("travelers must be at least 1".into()));
        }
        if self.nights == 0 || self.nights > MAX_NIGHTS {
            return Err(DomainError::InvalidInput(format!(
                "nights must be between 1 and {MAX_NIGHTS}"
            )));
        }
        if self.date_window_end < self.date_window_start {
            return Err(DomainError::InvalidInput(format!(
                "date window ends ({}) before it starts ({})",
                self.date_window_end, self.date_window_start
            )));
        }
        if !self.constraints.max_travel_hours.is_finite() || self.constraints.max_travel_hours < 0.0 {
            return Err(DomainError::InvalidInput(
                "max_travel_hours must be a non-negative number".into(),
            ));
        }

        let unsupported: Vec<String> = self
            .normalized_origins()
            .into_iter()
            .filter(|o| !is_supported_origin(o))
            .collect();
        if !unsupported.is_empty() {
            return Err(DomainError::UnsupportedOrigin(unsupported.join(", ")));
        }
        Ok(())
    }

    /// Uppercased, trimmed, de-duplicated origins in submission order.
    pub fn normalized_origins(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for origin in &self.origins {
            let code = origin.trim().to_uppercase();
            if !code.is_empty() && !out.contains(&code) {
                out.push(code);
            }
        }
        out
    }

    pub fn depart_date(&self) -> NaiveDate {
        self.date_window_start
    }

    pub fn return_date(&self) -> NaiveDate {
        self.date_window_start + Duration::days(self.nights as i64)
    }
}

/// A stored trip search: the query plus the id callers use to regenerate
/// recommendations later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSearch {
    pub id: String,
    pub query: TripQuery,
    pub created_at: DateTime<Utc>,
}

impl TripSearch {
    pub fn new(query: TripQuery) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> TripQuery {
        serde_json::from_value(serde_json::json!({
            "origins": ["iad", " DCA ", "IAD"],
            "date_window_start": "2026-03-01",
            "date_window_end": "2026-03-10",
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let q = query();
        assert_eq!(q.nights, 5);
        assert_eq!(q.travelers, 2);
        assert_eq!(q.cabin, Cabin::Economy);
        assert_eq!(q.constraints.max_stops, 1);
        assert!((q.constraints.max_travel_hours - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalized_origins_dedup() {
        assert_eq!(query().normalized_origins(), vec!["IAD", "DCA"]);
    }

    #[test]
    fn test_return_date_adds_nights() {
        let q = query();
        assert_eq!(q.return_date(), NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());
    }

    #[test]
    fn test_validate_rejects_unsupported_origin() {
        let mut q = query();
        q.origins.push("LAX".into());
        match q.validate() {
            Err(DomainError::UnsupportedOrigin(codes)) => assert_eq!(codes, "LAX"),
            other => panic!("expected UnsupportedOrigin, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_shape() {
        let mut q = query();
        q.travelers = 0;
        assert!(matches!(q.validate(), Err(DomainError::InvalidInput(_))));

        let mut q = query();
        q.date_window_end = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(matches!(q.validate(), Err(DomainError::InvalidInput(_))));

        let mut q = query();
        q.origins = vec!["  ".into()];
        assert!(matches!(q.validate(), Err(DomainError::InvalidInput(_))));

        let mut q = query();
        q.nights = u32::MAX;
        assert!(matches!(q.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_accepts_supported() {
        assert!(query().validate().is_ok());
    }
}
