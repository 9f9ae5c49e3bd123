mod common;

use chrono::Duration;
use common::{af_fare, flying_blue_award, setup, setup_with, warm_beach_query, Behavior, Scripted};
use pointstrip::config::LiveSources;
use pointstrip::domain::ports::pricing::{AirfareSource, AwardFare, AwardSource, CashFare, HotelRate, HotelSource};
use pointstrip::domain::values::data_mode::{DataMode, QuoteSource};
use std::sync::Arc;

fn award_only(source: Arc<Scripted<AwardFare>>) -> LiveSources {
    LiveSources {
        award: Some(source as Arc<dyn AwardSource>),
        ..LiveSources::none()
    }
}

#[tokio::test]
async fn test_live_award_is_tagged_and_used() {
    let awards = Scripted::new(Behavior::Records(vec![flying_blue_award(40_000), flying_blue_award(25_000)]));
    let (pt, _clock) = setup_with(award_only(awards.clone()));

    let bundle = pt.recommend_query("q-live", &warm_beach_query()).await.unwrap();

    assert!(awards.calls() > 0);
    for o in &bundle.options {
        assert_eq!(o.award_mode(), DataMode::Live);
        assert_eq!(o.sources.awards.source, QuoteSource::SeatsAero);
        assert_eq!(o.api_mode, DataMode::Live);
        // Fewest points per traveler, times two travelers.
        assert_eq!(o.award_details.points, 50_000);
        assert_eq!(o.award_details.program, "Flying Blue");
        assert_eq!(o.airline, "Air France/KLM");
        assert_eq!(o.cash_flights_mode(), DataMode::Estimated);
    }
}

#[tokio::test]
async fn test_exact_flight_when_fare_carrier_matches_award() {
    let awards = Scripted::new(Behavior::Records(vec![flying_blue_award(30_000)]));
    let fares = Scripted::new(Behavior::Records(vec![af_fare(1_800.0), af_fare(1_200.0)]));
    let sources = LiveSources {
        award: Some(awards as Arc<dyn AwardSource>),
        airfare: Some(fares as Arc<dyn AirfareSource>),
        hotel: None,
    };
    let (pt, _clock) = setup_with(sources);

    let bundle = pt.recommend_query("q-exact", &warm_beach_query()).await.unwrap();
    for o in &bundle.options {
        assert_eq!(o.award_details.exact_flight.as_deref(), Some("AF 55"));
        assert_eq!(o.cash_price_pp, 600.0);
        // Fresh live award, exact flight, live feed.
        assert!(o.valuation.confidence_score >= 80, "{}", o.valuation.confidence_score);
    }
}

#[tokio::test]
async fn test_failing_sources_fall_back_to_estimates() {
    let sources = LiveSources {
        award: Some(Scripted::<AwardFare>::new(Behavior::Fail) as Arc<dyn AwardSource>),
        airfare: Some(Scripted::<CashFare>::new(Behavior::Empty) as Arc<dyn AirfareSource>),
        hotel: Some(Scripted::<HotelRate>::new(Behavior::Fail) as Arc<dyn HotelSource>),
    };
    let (pt, _clock) = setup_with(sources);

    let bundle = pt.recommend_query("q-fail", &warm_beach_query()).await.unwrap();
    assert!(!bundle.options.is_empty());
    for o in &bundle.options {
        assert_eq!(o.api_mode, DataMode::Estimated);
    }
}

#[tokio::test]
async fn test_stalled_source_times_out_to_estimate() {
    let awards = Scripted::<AwardFare>::new(Behavior::Stall);
    let (pt, _clock) = setup_with(award_only(awards.clone()));

    let started = std::time::Instant::now();
    let bundle = pt.recommend_query("q-stall", &warm_beach_query()).await.unwrap();

    assert!(started.elapsed() < std::time::Duration::from_secs(10));
    assert!(awards.calls() > 0);
    for o in &bundle.options {
        assert_eq!(o.award_mode(), DataMode::Estimated);
    }
}

#[tokio::test]
async fn test_live_hotel_without_points_keeps_estimated_points() {
    let hotels = Scripted::new(Behavior::Records(vec![
        HotelRate {
            cash_total: 2_000.0,
            points_total: None,
            fees_on_points: 0.0,
        },
        HotelRate {
            cash_total: 1_500.0,
            points_total: None,
            fees_on_points: 0.0,
        },
    ]));
    let sources = LiveSources {
        hotel: Some(hotels as Arc<dyn HotelSource>),
        ..LiveSources::none()
    };
    let (pt, _clock) = setup_with(sources);

    let bundle = pt.recommend_query("q-hotel", &warm_beach_query()).await.unwrap();
    for o in &bundle.options {
        assert_eq!(o.cash_hotels_mode(), DataMode::Live);
        assert!(o.points_breakdown.hotel_points > 0);
        assert_eq!(o.api_mode, DataMode::Live);
    }
}

#[tokio::test]
async fn test_provider_cache_spares_the_upstream() {
    let awards = Scripted::new(Behavior::Records(vec![flying_blue_award(30_000)]));
    let (pt, _clock) = setup_with(award_only(awards.clone()));

    let first = warm_beach_query();
    pt.recommend_query("q-1", &first).await.unwrap();
    let calls = awards.calls();

    // A different wallet misses the result cache but prices the same routes.
    let mut second = first.clone();
    second.balances.insert("CHASE".parse().unwrap(), 80_000);
    let bundle = pt.recommend_query("q-2", &second).await.unwrap();

    assert_eq!(awards.calls(), calls);
    assert!(bundle.options.iter().all(|o| o.award_mode() == DataMode::Live));
}

#[tokio::test]
async fn test_estimates_are_deterministic_across_engines() {
    let a = setup().recommend_query("q-a", &warm_beach_query()).await.unwrap();
    let b = setup().recommend_query("q-b", &warm_beach_query()).await.unwrap();

    assert_eq!(a.options.len(), b.options.len());
    for (x, y) in a.options.iter().zip(&b.options) {
        assert_eq!(x.destination, y.destination);
        assert_eq!(x.award_details.points, y.award_details.points);
        assert_eq!(x.oop_total, y.oop_total);
        assert_eq!(x.score_final, y.score_final);
    }
}

#[tokio::test]
async fn test_implausible_award_records_are_skipped() {
    let mut huge = flying_blue_award(0);
    huge.points_per_traveler = u64::MAX / 2 + 1;
    let awards = Scripted::new(Behavior::Records(vec![huge.clone()]));
    let (pt, _clock) = setup_with(award_only(awards.clone()));

    let bundle = pt.recommend_query("q-huge", &warm_beach_query()).await.unwrap();
    assert!(awards.calls() > 0);
    assert!(!bundle.options.is_empty());
    for o in &bundle.options {
        assert_eq!(o.award_mode(), DataMode::Estimated);
        assert!(o.award_details.points < 1_000_000);
    }

    // A sane record next to a broken one still wins.
    let awards = Scripted::new(Behavior::Records(vec![huge, flying_blue_award(30_000)]));
    let (pt, _clock) = setup_with(award_only(awards));
    let bundle = pt.recommend_query("q-mixed", &warm_beach_query()).await.unwrap();
    for o in &bundle.options {
        assert_eq!(o.award_mode(), DataMode::Live);
        assert_eq!(o.award_details.points, 60_000);
    }
}

#[tokio::test]
async fn test_airfare_cache_lasts_thirty_minutes() {
    let fares = Scripted::new(Behavior::Records(vec![af_fare(900.0)]));
    let sources = LiveSources {
        airfare: Some(fares.clone() as Arc<dyn AirfareSource>),
        ..LiveSources::none()
    };
    let (pt, clock) = setup_with(sources);
    let query = warm_beach_query();

    pt.recommend_query("q-1", &query).await.unwrap();
    let calls = fares.calls();
    assert!(calls > 0);

    clock.advance(Duration::minutes(25));
    let bundle = pt.recommend_query("q-2", &query).await.unwrap();
    assert_eq!(fares.calls(), calls);
    assert!(bundle.options.iter().all(|o| o.cash_flights_mode() == DataMode::Live));

    clock.advance(Duration::minutes(6));
    pt.recommend_query("q-3", &query).await.unwrap();
    assert_eq!(fares.calls(), calls * 2);
}

#[tokio::test]
async fn test_hotel_cache_lasts_twenty_minutes() {
    let hotels = Scripted::new(Behavior::Records(vec![HotelRate {
        cash_total: 1_100.0,
        points_total: Some(150_000),
        fees_on_points: 40.0,
    }]));
    let sources = LiveSources {
        hotel: Some(hotels.clone() as Arc<dyn HotelSource>),
        ..LiveSources::none()
    };
    let (pt, clock) = setup_with(sources);
    let query = warm_beach_query();

    pt.recommend_query("q-1", &query).await.unwrap();
    let calls = hotels.calls();
    assert!(calls > 0);

    clock.advance(Duration::minutes(15));
    let bundle = pt.recommend_query("q-2", &query).await.unwrap();
    assert_eq!(hotels.calls(), calls);
    assert!(bundle.options.iter().all(|o| o.points_breakdown.hotel_points == 150_000));

    clock.advance(Duration::minutes(6));
    pt.recommend_query("q-3", &query).await.unwrap();
    assert_eq!(hotels.calls(), calls * 2);
}
