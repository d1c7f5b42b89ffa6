//! Per-depot fairness ledger.

use crate::models::Depot;

/// Tracks how much of each depot's original inventory has been committed in
/// this run, feeding the fairness penalty of the cost model.
///
/// The penalty for a depot is `committed / total original on-hand`, clamped
/// to [0, 1]. A depot with no original inventory has penalty 0. Rising
/// penalties steer later allocations toward less-drained depots so no single
/// depot is emptied for one area while others go unused.
#[derive(Debug, Clone)]
pub struct FairnessLedger {
    committed: Vec<i64>,
    original_total: Vec<i64>,
}

impl FairnessLedger {
    /// Creates a ledger with nothing committed.
    pub fn new(depots: &[Depot]) -> Self {
        Self {
            committed: vec![0; depots.len()],
            original_total: depots.iter().map(Depot::total_on_hand).collect(),
        }
    }

    /// Records a committed quantity against a depot.
    pub fn record(&mut self, depot_index: usize, quantity: i32) {
        self.committed[depot_index] += i64::from(quantity);
    }

    /// Fairness penalty for a depot, in [0, 1].
    pub fn penalty(&self, depot_index: usize) -> f64 {
        let total = self.original_total[depot_index];
        if total <= 0 {
            return 0.0;
        }
        (self.committed[depot_index] as f64 / total as f64).clamp(0.0, 1.0)
    }
}
