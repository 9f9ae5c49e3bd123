use crate::domain::catalog::destinations::Destination;
use serde::Serialize;

/// A destination that survived the traveler's hard constraints, with its
/// static trip shape. Recomputed per query, never stored on its own.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub region: &'static str,
    pub stops: u32,
    pub travel_hours: f64,
    pub carriers: &'static [&'static str],
}

impl Candidate {
    pub fn is_tagged(&self, tag: &str) -> bool {
        self.region.contains(tag)
    }
}

impl From<&'static Destination> for Candidate {
    fn from(d: &'static Destination) -> Self {
        Self {
            code: d.code,
            city: d.city,
            country: d.country,
            region: d.region,
            stops: d.stops,
            travel_hours: d.travel_hours,
            carriers: d.carriers,
        }
    }
}
