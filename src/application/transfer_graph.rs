//! Transfer graph: bank currency → airline program edges, built once from
//! the partner table and read-only afterward.

use std::collections::HashSet;

use crate::domain::catalog::partners::{transfer_minutes, PartnerProgram, PARTNER_PROGRAMS};
use crate::domain::entities::transfer::{TransferEdge, TransferPath};
use crate::domain::values::currency::{Currency, Wallet};

/// Every modeled transfer is 1:1.
const DEFAULT_RATIO: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct TransferGraph {
    edges: Vec<TransferEdge>,
}

impl TransferGraph {
    pub fn from_partner_table(programs: &[PartnerProgram]) -> Self {
        let mut edges = Vec::new();
        for program in programs {
            for currency in Currency::ALL {
                if !program.transferable_from.contains(&currency) {
                    continue;
                }
                edges.push(TransferEdge {
                    currency,
                    program: program.program.to_string(),
                    airline: program.airline.to_string(),
                    alliance: program.alliance.to_string(),
                    ratio: DEFAULT_RATIO,
                    promo_bonus_percent: 0.0,
                    transfer_time_minutes: transfer_minutes(currency, program.program),
                });
            }
        }
        Self { edges }
    }

    /// Graph over the built-in partner table.
    pub fn standard() -> Self {
        Self::from_partner_table(PARTNER_PROGRAMS)
    }

    /// Graph over explicit edges (promos, custom ratios).
    pub fn from_edges(edges: Vec<TransferEdge>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[TransferEdge] {
        &self.edges
    }

    pub fn edges_for_currency(&self, currency: Currency) -> Vec<&TransferEdge> {
        self.edges.iter().filter(|e| e.currency == currency).collect()
    }

    /// Edges whose program books `airline` (case-insensitive substring).
    pub fn edges_for_airline(&self, airline: &str) -> Vec<&TransferEdge> {
        let key = airline.trim().to_lowercase();
        if key.is_empty() {
            return Vec::new();
        }
        self.edges
            .iter()
            .filter(|e| e.airline.to_lowercase().contains(&key))
            .collect()
    }

    /// First program that books `airline`, used when a quote has to name one.
    pub fn program_for_airline(&self, airline: &str) -> Option<&str> {
        self.edges_for_airline(airline)
            .first()
            .map(|e| e.program.as_str())
    }

    /// Airline booked through `program`, exact program name.
    pub fn airline_for_program(&self, program: &str) -> Option<&str> {
        self.edges
            .iter()
            .find(|e| e.program.eq_ignore_ascii_case(program))
            .map(|e| e.airline.as_str())
    }

    /// Feasible transfer paths for `airline` given the wallet.
    ///
    /// Only currencies with a positive balance count; paths are unique per
    /// (currency, program). Ordering contract: paths whose
    /// `effective_points >= points_needed` come first, then fastest transfer.
    /// Ties keep edge order.
    pub fn build_transfer_paths(
        &self,
        airline: &str,
        wallet: &Wallet,
        points_needed: u64,
    ) -> Vec<TransferPath> {
        let mut seen: HashSet<(Currency, &str)> = HashSet::new();
        let mut paths = Vec::new();

        for edge in self.edges_for_airline(airline) {
            let balance = wallet.get(&edge.currency).copied().unwrap_or(0);
            if balance == 0 {
                continue;
            }
            if !seen.insert((edge.currency, edge.program.as_str())) {
                continue;
            }

            let effective =
                (balance as f64 * edge.ratio * (1.0 + edge.promo_bonus_percent / 100.0)).floor();
            paths.push(TransferPath {
                currency: edge.currency,
                program: edge.program.clone(),
                ratio: edge.ratio,
                promo_bonus_percent: edge.promo_bonus_percent,
                effective_points: effective.max(0.0) as u64,
                transfer_time_minutes: edge.transfer_time_minutes,
            });
        }

        paths.sort_by_key(|p| (!p.covers(points_needed), p.transfer_time_minutes));
        paths
    }
}

impl Default for TransferGraph {
    fn default() -> Self {
        Self::standard()
    }
}
