//! Planner entry point and plan aggregation.

use tracing::debug;

use crate::engine::{validate, AllocationEngine};
use crate::error::ValidationError;
use crate::models::{AllocationPlan, PlanSummary, PlanningRequest, Shipment, UnmetNeed};

/// Produces a shipment plan for one planning request.
///
/// The single operation this crate exposes: validates the request, runs the
/// greedy allocation engine over a private working copy of depot inventory,
/// and aggregates the result. Pure and idempotent — identical requests yield
/// identical plans, and no state survives the call.
///
/// # Errors
///
/// Returns [`ValidationError`] for malformed input, before any allocation
/// work. Needs that cannot be matched within distance or stock limits are
/// not errors; they appear in the summary's unmet list.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::{Community, Constraints, Depot, Location, Need, PlanningRequest};
/// use relief_alloc::planner::plan;
///
/// let request = PlanningRequest::new(
///     vec![Depot::new("d1", "r1", Location::new(0.0, 0.0).unwrap()).with_stock("water", 100)],
///     vec![Community::new("c1", "r1", Location::new(0.05, 0.0).unwrap())],
///     vec![Need::new("c1", "water", 50, 1)],
///     Constraints::new(0.0, 50.0),
/// );
/// let result = plan(&request).unwrap();
/// assert_eq!(result.summary.total_allocated, 50);
/// assert!(result.summary.unmet.is_empty());
/// ```
pub fn plan(request: &PlanningRequest) -> Result<AllocationPlan, ValidationError> {
    validate(request)?;
    debug!(
        depots = request.depots().len(),
        communities = request.communities().len(),
        needs = request.needs().len(),
        "allocation run started"
    );

    let (shipments, unmet) = AllocationEngine::new(request).run();
    let total_requested = request
        .needs()
        .iter()
        .map(|n| i64::from(n.quantity()))
        .sum();
    let summary = summarize(&shipments, unmet, total_requested);

    debug!(
        shipments = summary.shipment_count,
        allocated = summary.total_allocated,
        unmet = summary.unmet.len(),
        fulfillment_rate = summary.fulfillment_rate,
        "allocation run complete"
    );
    Ok(AllocationPlan { shipments, summary })
}

/// Rolls shipments and unmet needs up into a [`PlanSummary`].
///
/// The fulfillment rate is volume-weighted over total requested quantity and
/// defined as 1.0 when nothing was requested.
fn summarize(shipments: &[Shipment], unmet: Vec<UnmetNeed>, total_requested: i64) -> PlanSummary {
    let total_allocated: i64 = shipments.iter().map(|s| i64::from(s.quantity)).sum();
    let total_cost: f64 = shipments.iter().map(|s| s.cost).sum();
    let fulfillment_rate = if total_requested == 0 {
        1.0
    } else {
        total_allocated as f64 / total_requested as f64
    };
    PlanSummary {
        shipment_count: shipments.len(),
        total_allocated,
        total_cost,
        unmet,
        fulfillment_rate,
    }
}
