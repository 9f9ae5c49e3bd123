//! Scoring engine: friction, blended CPP, the ranking score, redemption
//! strategy choice and winner tiles. Pure functions, no I/O.

use std::collections::BTreeMap;

use crate::domain::entities::recommendation::{
    FrictionComponents, RecommendationOption, ScoreComponents, WinnerTile,
};
use crate::domain::values::points_strategy::PointsStrategy;

pub const OOP_WEIGHT: f64 = 0.5;
pub const CPP_WEIGHT: f64 = 0.35;
pub const FRICTION_WEIGHT: f64 = 0.15;

/// Blended CPP ceiling (cents).
pub const CPP_CAP: f64 = 5.0;
/// Bonus for value backed by live award data.
pub const LIVE_AWARD_BONUS: f64 = 0.15;
/// A redemption must beat this many cents per point to be recommended.
pub const CPP_THRESHOLD: f64 = 1.0;

const STOP_PENALTY: f64 = 2.0;
const EXCESS_HOUR_PENALTY: f64 = 0.5;
/// Hours of travel that cost nothing.
const COMFORT_HOURS: f64 = 7.0;

pub fn friction(stops: u32, travel_hours: f64) -> FrictionComponents {
    let stops_penalty = STOP_PENALTY * stops as f64;
    let duration_penalty = EXCESS_HOUR_PENALTY * (travel_hours - COMFORT_HOURS).max(0.0);
    FrictionComponents {
        stops_penalty,
        duration_penalty,
        total: stops_penalty + duration_penalty,
    }
}

pub fn cpp_blended(cpp_flight: f64, cpp_hotel: f64, award_live: bool) -> f64 {
    let base = ((cpp_flight + cpp_hotel) / 2.0).min(CPP_CAP);
    if award_live {
        (base + LIVE_AWARD_BONUS).min(CPP_CAP)
    } else {
        base
    }
}

/// `0.5·(−oop/5000) + 0.35·(clamp(cpp,0,5)/5) + 0.15·(−friction/10)`.
pub fn blended_score(oop_total: f64, cpp_blended: f64, friction: f64) -> (f64, ScoreComponents) {
    let components = ScoreComponents {
        oop_term: OOP_WEIGHT * (-oop_total / 5000.0),
        cpp_term: CPP_WEIGHT * (cpp_blended.clamp(0.0, CPP_CAP) / CPP_CAP),
        friction_term: FRICTION_WEIGHT * (-friction / 10.0),
    };
    let score = components.oop_term + components.cpp_term + components.friction_term;
    (score, components)
}

/// Inputs to the redemption decision for one option.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInputs {
    pub award_live: bool,
    pub cpp_flight: f64,
    pub cpp_hotel: f64,
    /// A transfer path covers the award's points.
    pub flight_reachable: bool,
    /// The hotel-points balance covers the stay.
    pub hotel_reachable: bool,
}

impl StrategyInputs {
    fn flight_clears(&self) -> bool {
        self.flight_reachable && self.cpp_flight > CPP_THRESHOLD
    }

    fn hotel_clears(&self) -> bool {
        self.hotel_reachable && self.cpp_hotel > CPP_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyChoice {
    pub strategy: PointsStrategy,
    /// All clearing strategies, flight first, when more than one clears.
    pub alternates: Vec<PointsStrategy>,
}

/// Precedence:
/// 1. live award data and the flight clears the threshold → flight
/// 2. the hotel clears → hotel
/// 3. the flight clears on estimated data → flight
/// 4. otherwise → none
pub fn choose_strategy(inputs: &StrategyInputs) -> StrategyChoice {
    let flight = inputs.flight_clears();
    let hotel = inputs.hotel_clears();

    let strategy = if inputs.award_live && flight {
        PointsStrategy::Flight
    } else if hotel {
        PointsStrategy::Hotel
    } else if flight {
        PointsStrategy::Flight
    } else {
        PointsStrategy::None
    };

    let alternates = if flight && hotel {
        vec![PointsStrategy::Flight, PointsStrategy::Hotel]
    } else {
        Vec::new()
    };

    StrategyChoice { strategy, alternates }
}

/// Cash components of a priced trip, whole party.
#[derive(Debug, Clone, Copy)]
pub struct CashOutlay {
    pub airfare_cash: f64,
    pub award_taxes: f64,
    pub hotel_cash: f64,
    pub hotel_fees_on_points: f64,
}

/// Cash still paid under the chosen strategy.
pub fn oop_total(strategy: PointsStrategy, cash: &CashOutlay) -> f64 {
    let total = match strategy {
        PointsStrategy::Flight => cash.award_taxes + cash.hotel_cash,
        PointsStrategy::Hotel => cash.airfare_cash + cash.hotel_fees_on_points,
        PointsStrategy::None => cash.airfare_cash + cash.hotel_cash,
    };
    round2(total)
}

/// The fields winner tiles are picked on.
#[derive(Debug, Clone, Copy)]
pub struct TileRow<'a> {
    pub id: &'a str,
    pub oop_total: f64,
    pub cpp_blended: f64,
    pub score: f64,
}

impl<'a> From<&'a RecommendationOption> for TileRow<'a> {
    fn from(o: &'a RecommendationOption) -> Self {
        Self {
            id: o.id.as_str(),
            oop_total: o.oop_total,
            cpp_blended: o.cpp_blended_capped,
            score: o.score_final,
        }
    }
}

/// best_oop = min out-of-pocket, best_cpp = max blended CPP, best_balanced =
/// max score. Ties go to the first row seen.
pub fn winner_tiles<'a, I>(rows: I) -> BTreeMap<WinnerTile, String>
where
    I: IntoIterator<Item = TileRow<'a>>,
{
    let mut best_oop: Option<TileRow> = None;
    let mut best_cpp: Option<TileRow> = None;
    let mut best_balanced: Option<TileRow> = None;

    for row in rows {
        if best_oop.map_or(true, |b| row.oop_total < b.oop_total) {
            best_oop = Some(row);
        }
        if best_cpp.map_or(true, |b| row.cpp_blended > b.cpp_blended) {
            best_cpp = Some(row);
        }
        if best_balanced.map_or(true, |b| row.score > b.score) {
            best_balanced = Some(row);
        }
    }

    let mut tiles = BTreeMap::new();
    for (tile, row) in [
        (WinnerTile::BestOop, best_oop),
        (WinnerTile::BestCpp, best_cpp),
        (WinnerTile::BestBalanced, best_balanced),
    ] {
        if let Some(row) = row {
            tiles.insert(tile, row.id.to_string());
        }
    }
    tiles
}

/// Best score first. Stable, so equal scores keep pricing order.
pub fn sort_by_score(options: &mut [RecommendationOption]) {
    options.sort_by(|a, b| {
        b.score_final
            .partial_cmp(&a.score_final)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
