use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

/// Departure airports the engine prices from.
pub const SUPPORTED_ORIGINS: &[Airport] = &[
    Airport { code: "IAD", name: "Washington Dulles International", city: "Washington DC" },
    Airport { code: "DCA", name: "Ronald Reagan Washington National", city: "Washington DC" },
    Airport { code: "BWI", name: "Baltimore/Washington International", city: "Baltimore" },
    Airport { code: "DFW", name: "Dallas Fort Worth International", city: "Dallas" },
    Airport { code: "DAL", name: "Dallas Love Field", city: "Dallas" },
    Airport { code: "JFK", name: "John F. Kennedy International", city: "New York" },
    Airport { code: "LGA", name: "LaGuardia", city: "New York" },
    Airport { code: "EWR", name: "Newark Liberty International", city: "New York" },
    Airport { code: "IAH", name: "George Bush Intercontinental", city: "Houston" },
    Airport { code: "HOU", name: "William P. Hobby", city: "Houston" },
];

pub fn is_supported_origin(code: &str) -> bool {
    SUPPORTED_ORIGINS
        .iter()
        .any(|a| a.code.eq_ignore_ascii_case(code.trim()))
}
