//! Recommendation pipeline: candidates → pricing → valuation and transfer
//! paths → scoring → sorted bundle, memoized by the result cache.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::info;

use crate::application::candidates;
use crate::application::pricing::{AirfareProvider, AwardProvider, HotelProvider};
use crate::application::result_cache::{fingerprint, ResultCache};
use crate::application::scoring::{
    self, blended_score, choose_strategy, cpp_blended, oop_total, CashOutlay, StrategyInputs, TileRow,
    CPP_THRESHOLD,
};
use crate::application::transfer_graph::TransferGraph;
use crate::application::valuation::{build_valuation, compute_confidence, compute_cpp_range};
use crate::domain::catalog::partners::HOTEL_PROGRAM;
use crate::domain::entities::candidate::Candidate;
use crate::domain::entities::quote::{AwardQuote, FareQuote, HotelQuote, QuoteRequest};
use crate::domain::entities::recommendation::{
    AwardDetails, CacheStatus, PointsBreakdown, RecommendationBundle, RecommendationOption, SourceLabels,
};
use crate::domain::entities::trip_query::TripQuery;
use crate::domain::error::DomainError;
use crate::domain::ports::cache::Clock;
use crate::domain::ports::recommendation_repository::RecommendationRepository;
use crate::domain::values::currency::Currency;
use crate::domain::values::data_mode::DataMode;
use crate::domain::values::points_strategy::{HotelBookingMode, PointsStrategy};

/// Default bound on concurrently priced (origin, destination) pairs.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 6;

/// The three quotes for one (origin, candidate) pair.
struct PricedPair<'a> {
    origin: &'a str,
    candidate: &'a Candidate,
    award: AwardQuote,
    fare: FareQuote,
    hotel: HotelQuote,
}

pub struct RecommendUseCase {
    award: AwardProvider,
    airfare: AirfareProvider,
    hotel: HotelProvider,
    graph: Arc<TransferGraph>,
    cache: ResultCache,
    options_repo: Arc<dyn RecommendationRepository>,
    clock: Arc<dyn Clock>,
    max_in_flight: usize,
}

impl RecommendUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        award: AwardProvider,
        airfare: AirfareProvider,
        hotel: HotelProvider,
        graph: Arc<TransferGraph>,
        cache: ResultCache,
        options_repo: Arc<dyn RecommendationRepository>,
        clock: Arc<dyn Clock>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            award,
            airfare,
            hotel,
            graph,
            cache,
            options_repo,
            clock,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Validates, then serves from the result cache or runs the pipeline.
    ///
    /// Errors: `InvalidInput` / `UnsupportedOrigin` before any pricing,
    /// `NoCandidates` when the constraints rule out every destination.
    /// Upstream failures never surface here.
    pub async fn execute(&self, query_id: &str, query: &TripQuery) -> Result<RecommendationBundle, DomainError> {
        query.validate()?;
        let key = fingerprint(query);
        // A hit may have been computed for another query with the same fingerprint.
        let bundle = self
            .cache
            .get_or_compute(&key, || self.compute(query_id, query))
            .await?
            .with_query_id(query_id);

        info!(
            query_id = %bundle.query_id,
            options = bundle.options.len(),
            cache = ?bundle.cache,
            "recommendations ready"
        );
        Ok(bundle)
    }

    async fn compute(&self, query_id: &str, query: &TripQuery) -> Result<RecommendationBundle, DomainError> {
        let candidates = candidates::generate(query);
        if candidates.is_empty() {
            info!(query_id, "no destination satisfies the constraints");
            return Err(DomainError::NoCandidates);
        }

        let origins = query.normalized_origins();
        info!(
            query_id,
            origins = origins.len(),
            candidates = candidates.len(),
            "pricing candidates"
        );

        let pairs: Vec<(&str, &Candidate)> = candidates
            .iter()
            .flat_map(|c| origins.iter().map(move |o| (o.as_str(), c)))
            .collect();

        let priced: Vec<PricedPair> = stream::iter(pairs)
            .map(|(origin, candidate)| self.price(query, origin, candidate))
            .buffered(self.max_in_flight)
            .collect()
            .await;

        let now = self.clock.now();
        let mut options: Vec<RecommendationOption> = Vec::with_capacity(candidates.len());
        for pair in &priced {
            let option = self.build_option(query, pair, now);
            // Keep one option per destination: the best-scoring origin.
            match options.iter().position(|o| o.destination == option.destination) {
                Some(i) if option.score_final > options[i].score_final => options[i] = option,
                Some(_) => {}
                None => options.push(option),
            }
        }

        let winner_tiles = scoring::winner_tiles(options.iter().map(TileRow::from));
        scoring::sort_by_score(&mut options);

        let bundle = RecommendationBundle {
            query_id: query_id.to_string(),
            generated_at: now,
            cache: CacheStatus::Miss,
            winner_tiles,
            options,
        };
        self.options_repo.save_bundle(&bundle)?;
        Ok(bundle)
    }

    async fn price<'a>(&self, query: &TripQuery, origin: &'a str, candidate: &'a Candidate) -> PricedPair<'a> {
        let req = QuoteRequest {
            origin: origin.to_string(),
            destination: candidate.code.to_string(),
            travelers: query.travelers,
            cabin: query.cabin,
            depart: query.depart_date(),
            return_date: query.return_date(),
            nights: query.nights,
        };

        let (award, fare, hotel) = tokio::join!(
            self.award.quote(&req),
            self.airfare.quote(&req),
            self.hotel.quote(&req)
        );

        PricedPair {
            origin,
            candidate,
            award,
            fare,
            hotel,
        }
    }

    fn build_option(&self, query: &TripQuery, pair: &PricedPair, now: DateTime<Utc>) -> RecommendationOption {
        let PricedPair {
            origin,
            candidate,
            award,
            fare,
            hotel,
        } = pair;

        let award_live = award.provenance.mode.is_live();
        let flight_range = compute_cpp_range(fare.cash_total, award.points, award.taxes, award.provenance.source);
        let cpp_hotel = compute_cpp_range(
            hotel.cash_total,
            hotel.points_total,
            hotel.fees_on_points,
            hotel.provenance.source,
        )
        .mid;

        let exact_flight = exact_flight_match(award, fare);
        let age_seconds = award_live.then(|| (now - award.provenance.retrieved_at).num_seconds().max(0));
        let (confidence_score, confidence_tier) = compute_confidence(
            age_seconds,
            exact_flight.is_some(),
            flight_range.tax_confidence,
            award.provenance.source,
        );
        let valuation = build_valuation(flight_range, confidence_score, confidence_tier);

        let transfer_paths = self
            .graph
            .build_transfer_paths(&award.airline, &query.balances, award.points);
        let flight_reachable = transfer_paths.first().is_some_and(|p| p.covers(award.points));
        let marriott = query.balances.get(&Currency::Marriott).copied().unwrap_or(0);
        let hotel_reachable = hotel.points_total > 0 && marriott >= hotel.points_total;

        let choice = choose_strategy(&StrategyInputs {
            award_live,
            cpp_flight: flight_range.mid,
            cpp_hotel,
            flight_reachable,
            hotel_reachable,
        });

        let oop = oop_total(
            choice.strategy,
            &CashOutlay {
                airfare_cash: fare.cash_total,
                award_taxes: award.taxes,
                hotel_cash: hotel.cash_total,
                hotel_fees_on_points: hotel.fees_on_points,
            },
        );
        let cpp_blend = cpp_blended(flight_range.mid, cpp_hotel, award_live);
        let friction = scoring::friction(candidate.stops, candidate.travel_hours);
        let (score_final, score_components) = blended_score(oop, cpp_blend, friction.total);

        let (suggested_currency, suggested_program) = match choice.strategy {
            PointsStrategy::Flight => (
                transfer_paths.first().map(|p| p.currency),
                Some(award.program.clone()),
            ),
            PointsStrategy::Hotel => (Some(Currency::Marriott), Some(HOTEL_PROGRAM.to_string())),
            PointsStrategy::None => (None, None),
        };

        let any_live = [award.provenance.mode, fare.provenance.mode, hotel.provenance.mode]
            .iter()
            .any(DataMode::is_live);

        let travelers = query.travelers.max(1);
        let mut rationale = vec![
            format!(
                "${oop:.0} out of pocket for {travelers} traveler(s) and {} nights",
                query.nights
            ),
            format!(
                "Award {:.2}¢/pt ({}), hotel {:.2}¢/pt, blended {:.2}¢/pt",
                flight_range.mid, valuation.deal_rating, cpp_hotel, cpp_blend
            ),
            format!(
                "{} stop(s), {:.1}h travel",
                candidate.stops, candidate.travel_hours
            ),
        ];
        match choice.strategy {
            PointsStrategy::Flight => rationale.push(format!(
                "Use points on the flight via {} (beats {CPP_THRESHOLD:.1}¢/pt)",
                award.program
            )),
            PointsStrategy::Hotel => rationale.push(format!(
                "Use {HOTEL_PROGRAM} points on the hotel (beats {CPP_THRESHOLD:.1}¢/pt)"
            )),
            PointsStrategy::None => {
                rationale.push("Pay cash: no reachable redemption beats the value threshold".into())
            }
        }
        if !award_live {
            rationale.push("Award pricing is estimated; confirm space before transferring points".into());
        }

        let mut validation_steps = vec![format!(
            "Search {} award space {}-{} on {} in {}",
            award.program,
            origin,
            candidate.code,
            query.depart_date(),
            query.cabin
        )];
        if let Some(path) = transfer_paths.first().filter(|_| choice.strategy == PointsStrategy::Flight) {
            validation_steps.push(format!(
                "Transfer {} to {} only after space is confirmed (about {} min)",
                path.currency, path.program, path.transfer_time_minutes
            ));
        }
        if choice.strategy == PointsStrategy::Hotel {
            validation_steps.push(format!(
                "Check {HOTEL_PROGRAM} standard room availability for {} nights",
                query.nights
            ));
        }
        validation_steps.push(format!(
            "Compare the cash fare {}-{} for {} to {}",
            origin,
            candidate.code,
            query.depart_date(),
            query.return_date()
        ));

        RecommendationOption {
            id: uuid::Uuid::new_v4().to_string(),
            destination: candidate.code.to_string(),
            city: candidate.city.to_string(),
            country: candidate.country.to_string(),
            origin: origin.to_string(),
            airline: award.airline.clone(),
            stops: candidate.stops,
            travel_hours: candidate.travel_hours,
            cash_price_pp: scoring::round2(fare.cash_total / travelers as f64),
            oop_total: oop,
            cpp_flight: flight_range.mid,
            cpp_hotel,
            cpp_blended_capped: cpp_blend,
            cpp_threshold: CPP_THRESHOLD,
            valuation,
            transfer_paths,
            points_strategy: choice.strategy,
            hotel_booking_mode: if choice.strategy == PointsStrategy::Hotel {
                HotelBookingMode::Points
            } else {
                HotelBookingMode::Cash
            },
            marriott_points_eligible: hotel_reachable,
            points_breakdown: PointsBreakdown {
                flight_points: award.points,
                flight_program: award.program.clone(),
                flight_cpp: flight_range.mid,
                hotel_points: hotel.points_total,
                hotel_program: HOTEL_PROGRAM.to_string(),
                hotel_cpp: cpp_hotel,
                taxes_fees: award.taxes,
                hotel_fees_on_points: hotel.fees_on_points,
                suggested_currency,
                suggested_program,
                points_strategy_alternates: choice.alternates,
            },
            friction,
            score_components,
            score_final,
            rationale,
            validation_steps,
            award_details: AwardDetails {
                program: award.program.clone(),
                airline: award.airline.clone(),
                points: award.points,
                taxes_fees: award.taxes,
                cabin: query.cabin,
                duration_hours: candidate.travel_hours,
                exact_flight,
                retrieved_at: award.provenance.retrieved_at,
            },
            sources: SourceLabels {
                flights: fare.provenance.clone(),
                hotels: hotel.provenance.clone(),
                awards: award.provenance.clone(),
            },
            api_mode: if any_live { DataMode::Live } else { DataMode::Estimated },
            as_of: now,
        }
    }
}

/// "AA 1234" when live award space is on the carrier of a specific cash
/// fare flight.
fn exact_flight_match(award: &AwardQuote, fare: &FareQuote) -> Option<String> {
    if !award.provenance.mode.is_live() {
        return None;
    }
    let (carrier, number) = fare.exact_flight()?;
    award
        .carrier_codes
        .iter()
        .any(|c| c.eq_ignore_ascii_case(carrier))
        .then(|| format!("{carrier} {number}"))
}
