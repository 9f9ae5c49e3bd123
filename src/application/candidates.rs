//! Candidate generator: filters the route catalog by the traveler's hard
//! constraints. Pure and deterministic: same query, same list, same order.

use crate::domain::catalog::destinations::{Destination, DESTINATIONS};
use crate::domain::entities::candidate::Candidate;
use crate::domain::entities::trip_query::TripQuery;

/// Caps downstream provider calls per run.
pub const MAX_CANDIDATES: usize = 10;

/// Vibe tags that switch tag matching to exclusive warm/beach mode.
const WARM_BEACH_TAGS: &[&str] = &["beach", "warm", "warm beach"];

pub fn generate(query: &TripQuery) -> Vec<Candidate> {
    generate_from(DESTINATIONS, query)
}

/// Filters, in order: trip shape, vibe tags, preferred destinations, cap.
/// An empty result is not an error here; the pipeline reports it.
pub fn generate_from(pool: &'static [Destination], query: &TripQuery) -> Vec<Candidate> {
    let max_hours = query.constraints.max_travel_hours;
    let max_stops = query.constraints.max_stops;
    let vibe_tags = normalize(&query.vibe_tags);
    let preferred = normalize(&query.preferred_destinations);

    let wants_warm_beach = vibe_tags
        .iter()
        .any(|v| WARM_BEACH_TAGS.contains(&v.as_str()));

    pool.iter()
        .filter(|d| d.travel_hours <= max_hours && d.stops <= max_stops)
        .filter(|d| {
            if wants_warm_beach {
                // Exclusive: an explicit beach request never drifts off-vibe.
                d.has_tag("beach") || d.has_tag("warm")
            } else if !vibe_tags.is_empty() {
                vibe_tags.iter().any(|v| d.has_tag(v))
            } else {
                true
            }
        })
        .filter(|d| {
            if preferred.is_empty() {
                return true;
            }
            let code = d.code.to_lowercase();
            let city = d.city.to_lowercase();
            preferred.iter().any(|p| *p == code || city.contains(p.as_str()))
        })
        .take(MAX_CANDIDATES)
        .map(Candidate::from)
        .collect()
}

fn normalize(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
