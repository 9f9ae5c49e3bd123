use serde::{Deserialize, Serialize};
use std::fmt;

/// How well the taxes/fees figure of an award quote is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxConfidence {
    High,
    Medium,
    Low,
}

impl TaxConfidence {
    /// Fractional spread applied to taxes to get pessimistic/optimistic bounds.
    pub fn spread(&self) -> f64 {
        match self {
            TaxConfidence::High => 0.08,
            TaxConfidence::Medium => 0.18,
            TaxConfidence::Low => 0.30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for DealRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealRating::Excellent => write!(f, "EXCELLENT"),
            DealRating::Good => write!(f, "GOOD"),
            DealRating::Fair => write!(f, "FAIR"),
            DealRating::Poor => write!(f, "POOR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Tier boundaries: 80+ HIGH, 50..=79 MEDIUM, below 50 LOW.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ConfidenceTier::High
        } else if score >= 50 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceTier::High => write!(f, "HIGH"),
            ConfidenceTier::Medium => write!(f, "MEDIUM"),
            ConfidenceTier::Low => write!(f, "LOW"),
        }
    }
}

/// Cents-per-point estimate for one award quote. `low <= mid <= high`, all >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CppRange {
    pub mid: f64,
    pub low: f64,
    pub high: f64,
    pub tax_confidence: TaxConfidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub cpp_range: CppRange,
    pub deal_rating: DealRating,
    /// 0–100
    pub confidence_score: u8,
    pub confidence_tier: ConfidenceTier,
}
