//! Plan output types.

use serde::{Deserialize, Serialize};

/// One allocation decision: a quantity of one item moving from a depot to a
/// community. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Source depot.
    pub depot_id: String,
    /// Destination community.
    pub community_id: String,
    /// Item being shipped.
    pub item_code: String,
    /// Allocated quantity.
    pub quantity: i32,
    /// Great-circle distance covered.
    pub distance_km: f64,
    /// Composite cost of the winning candidate at decision time.
    pub cost: f64,
}

/// A need left wholly or partly unsatisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmetNeed {
    /// Community whose need went unmet.
    pub community_id: String,
    /// Requested item.
    pub item_code: String,
    /// Originally requested quantity.
    pub requested: i32,
    /// Quantity still outstanding after the run.
    pub remaining: i32,
}

/// Aggregate totals for one planning run.
///
/// `fulfillment_rate` is volume-weighted: total allocated divided by total
/// requested across all needs, so large unmet needs dominate proportionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of shipments emitted.
    pub shipment_count: usize,
    /// Total quantity allocated across all shipments.
    pub total_allocated: i64,
    /// Sum of shipment costs.
    pub total_cost: f64,
    /// Needs with outstanding quantity, in engine processing order.
    pub unmet: Vec<UnmetNeed>,
    /// Total allocated / total requested, in [0, 1]; 1.0 when nothing was
    /// requested.
    pub fulfillment_rate: f64,
}

/// The complete result of one planning run.
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
/// assert_eq!(result.shipments.len(), 1);
/// assert_eq!(result.summary.fulfillment_rate, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// Emitted shipments, in allocation order.
    pub shipments: Vec<Shipment>,
    /// Aggregate totals.
    pub summary: PlanSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_serde_round_trip() {
        let s = Shipment {
            depot_id: "d1".into(),
            community_id: "c1".into(),
            item_code: "water".into(),
            quantity: 40,
            distance_km: 12.5,
            cost: 0.25,
        };
        let json = serde_json::to_string(&s).expect("serialize");
        let back: Shipment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, s);
    }

    #[test]
    fn test_unmet_need_fields() {
        let u = UnmetNeed {
            community_id: "c1".into(),
            item_code: "food".into(),
            requested: 60,
            remaining: 10,
        };
        assert_eq!(u.requested - u.remaining, 50);
    }
}
