//! Planner constraint scalars.

use serde::{Deserialize, Serialize};

/// Constraints governing one planning run.
///
/// `reserve_fraction` is the share of each depot's stock withheld from
/// allocation. `max_distance_km` is a hard cutoff on depot-to-community
/// distance. The three weights combine linearly into the candidate cost.
///
/// All values are validated at the start of a run, not at construction.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::Constraints;
///
/// let c = Constraints::new(0.2, 150.0)
///     .with_risk_weight(0.5)
///     .with_fairness_weight(2.0);
/// assert_eq!(c.reserve_fraction(), 0.2);
/// assert_eq!(c.distance_weight(), 1.0);
/// assert_eq!(c.fairness_weight(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    reserve_fraction: f64,
    max_distance_km: f64,
    distance_weight: f64,
    risk_weight: f64,
    fairness_weight: f64,
}

impl Constraints {
    /// Creates constraints with all three cost weights defaulted to 1.0.
    pub fn new(reserve_fraction: f64, max_distance_km: f64) -> Self {
        Self {
            reserve_fraction,
            max_distance_km,
            distance_weight: 1.0,
            risk_weight: 1.0,
            fairness_weight: 1.0,
        }
    }

    /// Sets the distance weight.
    pub fn with_distance_weight(mut self, weight: f64) -> Self {
        self.distance_weight = weight;
        self
    }

    /// Sets the risk weight.
    pub fn with_risk_weight(mut self, weight: f64) -> Self {
        self.risk_weight = weight;
        self
    }

    /// Sets the fairness weight.
    pub fn with_fairness_weight(mut self, weight: f64) -> Self {
        self.fairness_weight = weight;
        self
    }

    /// Fraction of stock withheld per depot, in [0, 1].
    pub fn reserve_fraction(&self) -> f64 {
        self.reserve_fraction
    }

    /// Hard cutoff on shipment distance.
    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Weight of the normalized distance term.
    pub fn distance_weight(&self) -> f64 {
        self.distance_weight
    }

    /// Weight of the risk term.
    pub fn risk_weight(&self) -> f64 {
        self.risk_weight
    }

    /// Weight of the fairness penalty term.
    pub fn fairness_weight(&self) -> f64 {
        self.fairness_weight
    }
}
