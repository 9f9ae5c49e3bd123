//! Valuation engine: cents-per-point ranges, deal ratings and confidence.
//! Pure functions, no I/O.

use crate::domain::values::data_mode::QuoteSource;
use crate::domain::values::valuation::{
    ConfidenceTier, CppRange, DealRating, TaxConfidence, Valuation,
};

/// Data younger than this earns the freshness points.
const FRESH_WINDOW_SECS: i64 = 2 * 60 * 60;

pub fn infer_tax_confidence(source: QuoteSource, taxes: f64) -> TaxConfidence {
    if source.is_live_award_feed() && taxes > 0.0 {
        TaxConfidence::High
    } else if source.is_live_fare_feed() && taxes > 0.0 {
        TaxConfidence::Medium
    } else {
        TaxConfidence::Low
    }
}

/// `cpp = max(0, cash - taxes) / max(points, 1) * 100`, evaluated at the
/// quoted taxes (mid), taxes inflated by the spread (low) and deflated by it
/// (high). Rounded to hundredths of a cent.
pub fn compute_cpp_range(
    cash_price: f64,
    points_cost: u64,
    taxes: f64,
    source: QuoteSource,
) -> CppRange {
    let taxes = if taxes.is_finite() { taxes.max(0.0) } else { 0.0 };
    let tax_confidence = infer_tax_confidence(source, taxes);
    let spread = tax_confidence.spread();
    let points = points_cost.max(1) as f64;

    let cpp = |effective_taxes: f64| round2(((cash_price - effective_taxes) / points * 100.0).max(0.0));

    CppRange {
        mid: cpp(taxes),
        low: cpp(taxes * (1.0 + spread)),
        high: cpp(taxes * (1.0 - spread)),
        tax_confidence,
    }
}

pub fn rate_deal(cpp_mid: f64) -> DealRating {
    if cpp_mid >= 3.0 {
        DealRating::Excellent
    } else if cpp_mid >= 2.0 {
        DealRating::Good
    } else if cpp_mid >= 1.3 {
        DealRating::Fair
    } else {
        DealRating::Poor
    }
}

/// Additive score out of 100:
/// - +30 data seen less than 2 hours ago (`None` = age unknown, no points)
/// - +30 matches an exact flight (carrier + number)
/// - +20 / +10 HIGH / MEDIUM tax confidence
/// - +20 source is the live award feed
pub fn compute_confidence(
    age_seconds: Option<i64>,
    exact_match: bool,
    tax_confidence: TaxConfidence,
    source: QuoteSource,
) -> (u8, ConfidenceTier) {
    let mut score: i32 = 0;
    if matches!(age_seconds, Some(age) if age < FRESH_WINDOW_SECS) {
        score += 30;
    }
    if exact_match {
        score += 30;
    }
    score += match tax_confidence {
        TaxConfidence::High => 20,
        TaxConfidence::Medium => 10,
        TaxConfidence::Low => 0,
    };
    if source.is_live_award_feed() {
        score += 20;
    }

    let score = score.clamp(0, 100) as u8;
    (score, ConfidenceTier::from_score(score))
}

pub fn build_valuation(cpp_range: CppRange, confidence_score: u8, confidence_tier: ConfidenceTier) -> Valuation {
    Valuation {
        cpp_range,
        deal_rating: rate_deal(cpp_range.mid),
        confidence_score,
        confidence_tier,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_award_scenario() {
        let range = compute_cpp_range(450.0, 38_000, 120.0, QuoteSource::Estimator);
        assert!((range.mid - 0.87).abs() < 0.01, "mid was {}", range.mid);
        assert_eq!(range.tax_confidence, TaxConfidence::Low);
        assert_eq!(rate_deal(range.mid), DealRating::Poor);
    }

    #[test]
    fn test_range_is_ordered_and_non_negative() {
        let sources = [
            QuoteSource::SeatsAero,
            QuoteSource::Amadeus,
            QuoteSource::HotelRates,
            QuoteSource::Estimator,
        ];
        let cash = [0.0, 50.0, 450.0, 1_800.0, 12_000.0];
        let points = [0_u64, 1, 10_000, 38_000, 250_000];
        let taxes = [0.0, 5.6, 120.0, 449.0, 900.0, -40.0];
        for source in sources {
            for c in cash {
                for p in points {
                    for t in taxes {
                        let r = compute_cpp_range(c, p, t, source);
                        assert!(r.low <= r.mid && r.mid <= r.high, "{c} {p} {t} {source}: {r:?}");
                        assert!(r.low >= 0.0, "{c} {p} {t} {source}: {r:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_cpp_never_negative_when_taxes_exceed_cash() {
        let r = compute_cpp_range(100.0, 20_000, 300.0, QuoteSource::SeatsAero);
        assert_eq!(r.mid, 0.0);
        assert_eq!(r.low, 0.0);
        assert_eq!(r.high, 0.0);
    }

    #[test]
    fn test_tax_confidence_tiers() {
        assert_eq!(infer_tax_confidence(QuoteSource::SeatsAero, 56.0), TaxConfidence::High);
        assert_eq!(infer_tax_confidence(QuoteSource::SeatsAero, 0.0), TaxConfidence::Low);
        assert_eq!(infer_tax_confidence(QuoteSource::Amadeus, 56.0), TaxConfidence::Medium);
        assert_eq!(infer_tax_confidence(QuoteSource::Estimator, 56.0), TaxConfidence::Low);
    }

    #[test]
    fn test_spread_sets_band_width() {
        let r = compute_cpp_range(1_000.0, 50_000, 200.0, QuoteSource::SeatsAero);
        // HIGH: taxes 184..216
        assert!((r.mid - 1.6).abs() < 1e-9);
        assert!((r.low - 1.57).abs() < 1e-9);
        assert!((r.high - 1.63).abs() < 1e-9);
    }

    #[test]
    fn test_deal_thresholds() {
        assert_eq!(rate_deal(3.0), DealRating::Excellent);
        assert_eq!(rate_deal(2.99), DealRating::Good);
        assert_eq!(rate_deal(2.0), DealRating::Good);
        assert_eq!(rate_deal(1.3), DealRating::Fair);
        assert_eq!(rate_deal(1.29), DealRating::Poor);
    }

    #[test]
    fn test_confidence_full_marks() {
        let (score, tier) =
            compute_confidence(Some(60), true, TaxConfidence::High, QuoteSource::SeatsAero);
        assert_eq!(score, 100);
        assert_eq!(tier, ConfidenceTier::High);
    }

    #[test]
    fn test_confidence_boundaries() {
        // 30 + 30 + 20 = 80
        let (score, tier) = compute_confidence(Some(0), true, TaxConfidence::High, QuoteSource::Amadeus);
        assert_eq!((score, tier), (80, ConfidenceTier::High));

        // 30 + 20 = 50
        let (score, tier) = compute_confidence(Some(7_199), false, TaxConfidence::Low, QuoteSource::SeatsAero);
        assert_eq!((score, tier), (50, ConfidenceTier::Medium));

        // 30 + 10 = 40
        let (score, tier) = compute_confidence(Some(10), false, TaxConfidence::Medium, QuoteSource::Amadeus);
        assert_eq!((score, tier), (40, ConfidenceTier::Low));
    }

    #[test]
    fn test_stale_or_unknown_age_earns_nothing() {
        let (stale, _) = compute_confidence(Some(7_200), false, TaxConfidence::Low, QuoteSource::Estimator);
        let (unknown, _) = compute_confidence(None, false, TaxConfidence::Low, QuoteSource::Estimator);
        assert_eq!(stale, 0);
        assert_eq!(unknown, 0);
    }
}
