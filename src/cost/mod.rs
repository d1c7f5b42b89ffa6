//! Composite shipment cost model.
//!
//! Turns a candidate's distance, incident risk, and the originating depot's
//! fairness penalty into a single scalar. Pure function of its inputs; safe
//! to evaluate concurrently for independent candidates.

use crate::models::Constraints;

/// Composite cost of shipping from a depot to a community.
///
/// `cost = distance_weight · (distance_km / max_distance_km)
///       + risk_weight · risk_score
///       + fairness_weight · fairness_penalty`
///
/// The distance term is normalized by the cutoff so a feasible candidate
/// contributes at most `distance_weight` on that axis. `fairness_penalty` is
/// the fraction of the depot's original inventory already committed this run,
/// clamped to [0, 1] by the caller.
///
/// # Examples
///
/// ```
/// use relief_alloc::cost::allocation_cost;
/// use relief_alloc::models::Constraints;
///
/// let constraints = Constraints::new(0.0, 100.0)
///     .with_distance_weight(1.0)
///     .with_risk_weight(2.0)
///     .with_fairness_weight(0.5);
/// let cost = allocation_cost(50.0, 0.25, 0.4, &constraints);
/// assert!((cost - (0.5 + 0.5 + 0.2)).abs() < 1e-10);
/// ```
pub fn allocation_cost(
    distance_km: f64,
    risk_score: f64,
    fairness_penalty: f64,
    constraints: &Constraints,
) -> f64 {
    constraints.distance_weight() * (distance_km / constraints.max_distance_km())
        + constraints.risk_weight() * risk_score
        + constraints.fairness_weight() * fairness_penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_term_normalized() {
        let c = Constraints::new(0.0, 200.0)
            .with_distance_weight(3.0)
            .with_risk_weight(0.0)
            .with_fairness_weight(0.0);
        assert!((allocation_cost(100.0, 0.9, 0.9, &c) - 1.5).abs() < 1e-10);
        assert!((allocation_cost(200.0, 0.0, 0.0, &c) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_risk_term() {
        let c = Constraints::new(0.0, 100.0)
            .with_distance_weight(0.0)
            .with_risk_weight(2.0)
            .with_fairness_weight(0.0);
        assert!((allocation_cost(50.0, 0.75, 0.0, &c) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_fairness_term() {
        let c = Constraints::new(0.0, 100.0)
            .with_distance_weight(0.0)
            .with_risk_weight(0.0)
            .with_fairness_weight(4.0);
        assert!((allocation_cost(50.0, 0.0, 0.5, &c) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_everything() {
        let c = Constraints::new(0.0, 100.0);
        assert!(allocation_cost(0.0, 0.0, 0.0, &c).abs() < 1e-10);
    }

    #[test]
    fn test_terms_combine_linearly() {
        let c = Constraints::new(0.0, 100.0)
            .with_distance_weight(1.0)
            .with_risk_weight(1.0)
            .with_fairness_weight(1.0);
        let combined = allocation_cost(30.0, 0.2, 0.1, &c);
        assert!((combined - (0.3 + 0.2 + 0.1)).abs() < 1e-10);
    }
}
