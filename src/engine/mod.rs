//! Greedy allocation engine.
//!
//! Processes needs in a fixed global order and repeatedly takes the cheapest
//! feasible candidate until each need is met or nothing remains in range.
//! Greedy and single-pass with no backtracking: determinism and speed over
//! global optimality. Strictly sequential within a run — every allocation
//! changes the feasible set for later needs — while independent runs share no
//! mutable state.

mod fairness;
mod inventory;
mod validate;

pub use fairness::FairnessLedger;
pub use inventory::WorkingInventory;
pub use validate::validate;

use std::collections::BTreeMap;

use tracing::trace;

use crate::candidates::candidates_for_need;
use crate::distance::DistanceGrid;
use crate::models::{Need, PlanningRequest, Shipment, UnmetNeed};

/// One allocation run over a validated request.
///
/// Holds the per-run mutable state: the reserve-capped working inventory and
/// the fairness ledger. The request itself is never mutated.
///
/// # Examples
///
/// ```
/// use relief_alloc::engine::AllocationEngine;
/// use relief_alloc::models::{Community, Constraints, Depot, Location, Need, PlanningRequest};
///
/// let request = PlanningRequest::new(
///     vec![Depot::new("d1", "r1", Location::new(0.0, 0.0).unwrap()).with_stock("water", 100)],
///     vec![Community::new("c1", "r1", Location::new(0.05, 0.0).unwrap())],
///     vec![Need::new("c1", "water", 50, 1)],
///     Constraints::new(0.0, 50.0),
/// );
/// let (shipments, unmet) = AllocationEngine::new(&request).run();
/// assert_eq!(shipments.len(), 1);
/// assert!(unmet.is_empty());
/// ```
pub struct AllocationEngine<'a> {
    request: &'a PlanningRequest,
    grid: DistanceGrid,
    inventory: WorkingInventory,
    fairness: FairnessLedger,
    community_index: BTreeMap<&'a str, usize>,
}

impl<'a> AllocationEngine<'a> {
    /// Prepares a run: builds the distance grid, the working inventory, and
    /// the fairness ledger.
    ///
    /// Assumes the request has passed [`validate`].
    pub fn new(request: &'a PlanningRequest) -> Self {
        let grid = DistanceGrid::build(request.depots(), request.communities());
        let inventory = WorkingInventory::new(
            request.depots(),
            request.constraints().reserve_fraction(),
        );
        let fairness = FairnessLedger::new(request.depots());
        let community_index = request
            .communities()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), i))
            .collect();
        Self {
            request,
            grid,
            inventory,
            fairness,
            community_index,
        }
    }

    /// Runs the greedy loop, consuming the engine.
    ///
    /// Terminates because every allocation strictly reduces a bounded
    /// non-negative quantity (remaining need or allocatable stock).
    pub fn run(mut self) -> (Vec<Shipment>, Vec<UnmetNeed>) {
        let mut shipments = Vec::new();
        let mut unmet = Vec::new();

        for need in need_order(self.request.needs()) {
            let community_index = self.community_index[need.community_id()];
            let mut remaining = need.quantity();

            while remaining > 0 {
                let candidates = candidates_for_need(
                    need,
                    community_index,
                    self.request.depots(),
                    &self.grid,
                    &self.inventory,
                    &self.fairness,
                    self.request.risk(),
                    self.request.constraints(),
                );
                let Some(best) = candidates.first() else {
                    break;
                };

                let quantity = remaining.min(best.available);
                let depot = &self.request.depots()[best.depot_index];
                self.inventory
                    .commit(best.depot_index, need.item_code(), quantity);
                self.fairness.record(best.depot_index, quantity);
                remaining -= quantity;

                trace!(
                    depot = depot.id(),
                    community = need.community_id(),
                    item = need.item_code(),
                    quantity,
                    cost = best.cost,
                    "allocated"
                );
                shipments.push(Shipment {
                    depot_id: depot.id().to_owned(),
                    community_id: need.community_id().to_owned(),
                    item_code: need.item_code().to_owned(),
                    quantity,
                    distance_km: best.distance_km,
                    cost: best.cost,
                });
            }

            if remaining > 0 {
                trace!(
                    community = need.community_id(),
                    item = need.item_code(),
                    remaining,
                    "need left unmet"
                );
                unmet.push(UnmetNeed {
                    community_id: need.community_id().to_owned(),
                    item_code: need.item_code().to_owned(),
                    requested: need.quantity(),
                    remaining,
                });
            }
        }

        (shipments, unmet)
    }
}

/// Fixed global processing order: ascending priority rank, ties by
/// descending requested quantity, then (community id, item code).
fn need_order(needs: &[Need]) -> Vec<&Need> {
    let mut order: Vec<&Need> = needs.iter().collect();
    order.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| b.quantity().cmp(&a.quantity()))
            .then_with(|| a.community_id().cmp(b.community_id()))
            .then_with(|| a.item_code().cmp(b.item_code()))
    });
    order
}
