//! Candidate enumeration for one need.
//!
//! Scans every depot for the requested item and keeps those with allocatable
//! stock inside the distance cutoff, scored by the composite cost model. The
//! engine re-queries this after every allocation because availability and
//! fairness penalties shift with each decision.

use crate::cost::allocation_cost;
use crate::distance::DistanceGrid;
use crate::engine::{FairnessLedger, WorkingInventory};
use crate::models::{Constraints, Depot, Need, RiskLookup};

/// One feasible source for a need.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Index into the request's depot list.
    pub depot_index: usize,
    /// Quantity still allocatable from this depot for the needed item.
    pub available: i32,
    /// Great-circle distance to the needy community.
    pub distance_km: f64,
    /// Composite cost at the time of the query.
    pub cost: f64,
}

/// Enumerates feasible (depot, available, cost) candidates for one need.
///
/// A depot qualifies when its allocatable quantity for the item is positive
/// and its distance to the community is within `max_distance_km`. The result
/// is sorted by ascending cost, ties broken by descending available quantity,
/// then ascending depot id, so selection is deterministic.
///
/// An empty result is a valid outcome (for example under full reserve); the
/// engine records the remainder as unmet.
#[allow(clippy::too_many_arguments)]
pub fn candidates_for_need(
    need: &Need,
    community_index: usize,
    depots: &[Depot],
    grid: &DistanceGrid,
    inventory: &WorkingInventory,
    fairness: &FairnessLedger,
    risk: &RiskLookup,
    constraints: &Constraints,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (depot_index, depot) in depots.iter().enumerate() {
        let available = inventory.available(depot_index, need.item_code());
        if available <= 0 {
            continue;
        }
        let distance_km = grid.get(depot_index, community_index);
        if distance_km > constraints.max_distance_km() {
            continue;
        }
        let risk_score = risk.score(depot.id(), need.community_id());
        let cost = allocation_cost(
            distance_km,
            risk_score,
            fairness.penalty(depot_index),
            constraints,
        );
        candidates.push(Candidate {
            depot_index,
            available,
            distance_km,
            cost,
        });
    }

    candidates.sort_by(|a, b| {
        a.cost
            .total_cmp(&b.cost)
            .then_with(|| b.available.cmp(&a.available))
            .then_with(|| depots[a.depot_index].id().cmp(depots[b.depot_index].id()))
    });
    candidates
}
