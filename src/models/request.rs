//! Planning request aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Community, Constraints, Depot, Need, RiskLookup};

/// A complete planning problem: the snapshot one run operates on.
///
/// Assembled by the surrounding application immediately before invocation.
/// `region_stats` is carried for the caller's convenience (per-region figures
/// such as population or affected-household counts); the core cost function
/// does not read it.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::{Community, Constraints, Depot, Location, Need, PlanningRequest};
///
/// let request = PlanningRequest::new(
///     vec![Depot::new("d1", "r1", Location::new(0.0, 0.0).unwrap()).with_stock("water", 100)],
///     vec![Community::new("c1", "r1", Location::new(1.0, 1.0).unwrap())],
///     vec![Need::new("c1", "water", 50, 1)],
///     Constraints::new(0.0, 500.0),
/// );
/// assert_eq!(request.depots().len(), 1);
/// assert!(request.risk().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningRequest {
    depots: Vec<Depot>,
    communities: Vec<Community>,
    needs: Vec<Need>,
    constraints: Constraints,
    #[serde(default)]
    risk: RiskLookup,
    #[serde(default)]
    region_stats: BTreeMap<String, f64>,
}

impl PlanningRequest {
    /// Creates a request with no risk scores or region statistics.
    pub fn new(
        depots: Vec<Depot>,
        communities: Vec<Community>,
        needs: Vec<Need>,
        constraints: Constraints,
    ) -> Self {
        Self {
            depots,
            communities,
            needs,
            constraints,
            risk: RiskLookup::new(),
            region_stats: BTreeMap::new(),
        }
    }

    /// Attaches risk scores.
    pub fn with_risk(mut self, risk: RiskLookup) -> Self {
        self.risk = risk;
        self
    }

    /// Attaches per-region statistics.
    pub fn with_region_stats(mut self, region_stats: BTreeMap<String, f64>) -> Self {
        self.region_stats = region_stats;
        self
    }

    /// Supply depots.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Communities.
    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    /// Reported needs.
    pub fn needs(&self) -> &[Need] {
        &self.needs
    }

    /// Run constraints.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Risk lookup.
    pub fn risk(&self) -> &RiskLookup {
        &self.risk
    }

    /// Per-region statistics supplied by the caller.
    pub fn region_stats(&self) -> &BTreeMap<String, f64> {
        &self.region_stats
    }
}
