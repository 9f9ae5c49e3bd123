use crate::domain::values::currency::Currency;
use serde::{Deserialize, Serialize};

/// Static edge from a bank currency into an airline program. Built once from
/// the partner table; read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEdge {
    pub currency: Currency,
    pub program: String,
    pub airline: String,
    pub alliance: String,
    pub ratio: f64,
    pub promo_bonus_percent: f64,
    pub transfer_time_minutes: u32,
}

/// Wallet-specific view over one edge: how many program points the
/// traveler's balance turns into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferPath {
    pub currency: Currency,
    pub program: String,
    pub ratio: f64,
    pub promo_bonus_percent: f64,
    pub effective_points: u64,
    pub transfer_time_minutes: u32,
}

impl TransferPath {
    pub fn covers(&self, points_needed: u64) -> bool {
        self.effective_points >= points_needed
    }
}
