//! Route catalog: static reference data for every destination the engine
//! can recommend. Baselines are economy, per person, round trip from the
//! supported US origins; estimators scale them by cabin and traveler count.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Destination {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    /// Space-separated region/vibe tags, matched by substring.
    pub region: &'static str,
    pub travel_hours: f64,
    pub stops: u32,
    /// Economy cash fare per person (USD).
    pub cash_price_pp: f64,
    /// Economy award chart price per person (points).
    pub award_points_pp: u64,
    /// Award taxes and carrier surcharges per person (USD).
    pub award_taxes_pp: f64,
    /// Hotel cash rate per night, all-in (USD).
    pub hotel_nightly_cash: f64,
    /// Hotel points rate per night.
    pub hotel_nightly_points: u64,
    /// Operating carriers, named as in the transfer-partner table.
    pub carriers: &'static [&'static str],
}

impl Destination {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.region.contains(tag)
    }

    pub fn primary_carrier(&self) -> &'static str {
        self.carriers.first().copied().unwrap_or("United")
    }
}

pub const DESTINATIONS: &[Destination] = &[
    // North America / Caribbean
    Destination {
        code: "CUN",
        city: "Cancun",
        country: "Mexico",
        region: "north america warm beach",
        travel_hours: 4.3,
        stops: 0,
        cash_price_pp: 450.0,
        award_points_pp: 35_000,
        award_taxes_pp: 60.0,
        hotel_nightly_cash: 210.0,
        hotel_nightly_points: 40_000,
        carriers: &["American", "United", "Delta", "Aeromexico"],
    },
    Destination {
        code: "PUJ",
        city: "Punta Cana",
        country: "Dominican Republic",
        region: "north america warm beach",
        travel_hours: 4.8,
        stops: 0,
        cash_price_pp: 480.0,
        award_points_pp: 35_000,
        award_taxes_pp: 70.0,
        hotel_nightly_cash: 240.0,
        hotel_nightly_points: 45_000,
        carriers: &["United", "JetBlue", "American"],
    },
    Destination {
        code: "NAS",
        city: "Nassau",
        country: "Bahamas",
        region: "north america warm beach",
        travel_hours: 3.1,
        stops: 0,
        cash_price_pp: 390.0,
        award_points_pp: 30_000,
        award_taxes_pp: 55.0,
        hotel_nightly_cash: 280.0,
        hotel_nightly_points: 50_000,
        carriers: &["American", "JetBlue", "Delta"],
    },
    Destination {
        code: "SJD",
        city: "Los Cabos",
        country: "Mexico",
        region: "north america warm beach",
        travel_hours: 6.1,
        stops: 1,
        cash_price_pp: 520.0,
        award_points_pp: 35_000,
        award_taxes_pp: 65.0,
        hotel_nightly_cash: 300.0,
        hotel_nightly_points: 55_000,
        carriers: &["Alaska", "American", "United", "Aeromexico"],
    },
    Destination {
        code: "YVR",
        city: "Vancouver",
        country: "Canada",
        region: "north america",
        travel_hours: 6.0,
        stops: 0,
        cash_price_pp: 450.0,
        award_points_pp: 30_000,
        award_taxes_pp: 45.0,
        hotel_nightly_cash: 230.0,
        hotel_nightly_points: 42_000,
        carriers: &["Air Canada", "United"],
    },
    // South America
    Destination {
        code: "EZE",
        city: "Buenos Aires",
        country: "Argentina",
        region: "argentina south america",
        travel_hours: 10.0,
        stops: 1,
        cash_price_pp: 1150.0,
        award_points_pp: 60_000,
        award_taxes_pp: 110.0,
        hotel_nightly_cash: 150.0,
        hotel_nightly_points: 30_000,
        carriers: &["American", "United", "Delta"],
    },
    Destination {
        code: "LIM",
        city: "Lima",
        country: "Peru",
        region: "peru south america warm beach",
        travel_hours: 7.8,
        stops: 1,
        cash_price_pp: 780.0,
        award_points_pp: 40_000,
        award_taxes_pp: 95.0,
        hotel_nightly_cash: 140.0,
        hotel_nightly_points: 28_000,
        carriers: &["Avianca", "Copa", "American", "United"],
    },
    // Europe
    Destination {
        code: "CDG",
        city: "Paris",
        country: "France",
        region: "france europe",
        travel_hours: 7.8,
        stops: 0,
        cash_price_pp: 950.0,
        award_points_pp: 60_000,
        award_taxes_pp: 200.0,
        hotel_nightly_cash: 260.0,
        hotel_nightly_points: 50_000,
        carriers: &["Air France", "Delta", "United"],
    },
    Destination {
        code: "FCO",
        city: "Rome",
        country: "Italy",
        region: "italy europe",
        travel_hours: 8.7,
        stops: 0,
        cash_price_pp: 980.0,
        award_points_pp: 60_000,
        award_taxes_pp: 180.0,
        hotel_nightly_cash: 240.0,
        hotel_nightly_points: 48_000,
        carriers: &["Delta", "United", "American"],
    },
    Destination {
        code: "LHR",
        city: "London",
        country: "United Kingdom",
        region: "uk europe",
        travel_hours: 7.2,
        stops: 0,
        cash_price_pp: 1050.0,
        award_points_pp: 60_000,
        award_taxes_pp: 450.0,
        hotel_nightly_cash: 320.0,
        hotel_nightly_points: 60_000,
        carriers: &["British Airways", "Virgin Atlantic", "United"],
    },
    Destination {
        code: "KEF",
        city: "Reykjavik",
        country: "Iceland",
        region: "iceland europe",
        travel_hours: 5.9,
        stops: 0,
        cash_price_pp: 640.0,
        award_points_pp: 40_000,
        award_taxes_pp: 80.0,
        hotel_nightly_cash: 250.0,
        hotel_nightly_points: 45_000,
        carriers: &["Delta", "United"],
    },
    Destination {
        code: "ATH",
        city: "Athens",
        country: "Greece",
        region: "greece europe warm beach",
        travel_hours: 9.8,
        stops: 1,
        cash_price_pp: 1020.0,
        award_points_pp: 60_000,
        award_taxes_pp: 160.0,
        hotel_nightly_cash: 180.0,
        hotel_nightly_points: 35_000,
        carriers: &["United", "Lufthansa", "Turkish Airlines"],
    },
    // Asia
    Destination {
        code: "HND",
        city: "Tokyo",
        country: "Japan",
        region: "japan asia",
        travel_hours: 13.5,
        stops: 1,
        cash_price_pp: 1400.0,
        award_points_pp: 75_000,
        award_taxes_pp: 120.0,
        hotel_nightly_cash: 220.0,
        hotel_nightly_points: 45_000,
        carriers: &["United", "American", "Delta"],
    },
    Destination {
        code: "BKK",
        city: "Bangkok",
        country: "Thailand",
        region: "thailand asia warm beach",
        travel_hours: 18.0,
        stops: 1,
        cash_price_pp: 1350.0,
        award_points_pp: 80_000,
        award_taxes_pp: 110.0,
        hotel_nightly_cash: 120.0,
        hotel_nightly_points: 25_000,
        carriers: &["Qatar", "Emirates", "Turkish Airlines", "Etihad"],
    },
];

/// Baseline used when a destination is priced that the catalog doesn't know.
pub const UNKNOWN_ROUTE: Destination = Destination {
    code: "",
    city: "",
    country: "",
    region: "",
    travel_hours: 10.0,
    stops: 1,
    cash_price_pp: 800.0,
    award_points_pp: 50_000,
    award_taxes_pp: 120.0,
    hotel_nightly_cash: 200.0,
    hotel_nightly_points: 40_000,
    carriers: &["United"],
};

pub fn find_destination(code: &str) -> Option<&'static Destination> {
    DESTINATIONS
        .iter()
        .find(|d| d.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(find_destination("cun").map(|d| d.city), Some("Cancun"));
        assert!(find_destination("XXX").is_none());
    }

    #[test]
    fn test_catalog_is_well_formed() {
        for d in DESTINATIONS {
            assert_eq!(d.code.len(), 3, "{}", d.code);
            assert!(d.cash_price_pp > d.award_taxes_pp, "{}", d.code);
            assert!(!d.carriers.is_empty(), "{}", d.code);
        }
    }
}
