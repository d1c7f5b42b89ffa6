//! Whole-request validation.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::models::{Constraints, PlanningRequest};

/// Validates a planning request before any allocation work.
///
/// Checks run in a fixed order — constraints, depots, communities, risk
/// entries, needs — and the first failure is returned, so a given invalid
/// request always fails identically. A valid request may still produce unmet
/// needs; feasibility is not checked here.
pub fn validate(request: &PlanningRequest) -> Result<(), ValidationError> {
    validate_constraints(request.constraints())?;

    let mut depot_ids = BTreeSet::new();
    let mut stocked_items = BTreeSet::new();
    for depot in request.depots() {
        if !depot_ids.insert(depot.id()) {
            return Err(ValidationError::DuplicateDepot {
                id: depot.id().to_owned(),
            });
        }
        if !depot.location().is_valid() {
            return Err(ValidationError::InvalidLocation {
                id: depot.id().to_owned(),
            });
        }
        for (item, &quantity) in depot.stock() {
            if quantity < 0 {
                return Err(ValidationError::NegativeStock {
                    depot_id: depot.id().to_owned(),
                    item_code: item.clone(),
                    quantity,
                });
            }
            if quantity > 0 {
                stocked_items.insert(item.as_str());
            }
        }
    }

    let mut community_ids = BTreeSet::new();
    for community in request.communities() {
        if !community_ids.insert(community.id()) {
            return Err(ValidationError::DuplicateCommunity {
                id: community.id().to_owned(),
            });
        }
        if !community.location().is_valid() {
            return Err(ValidationError::InvalidLocation {
                id: community.id().to_owned(),
            });
        }
    }

    for (depot_id, community_id, score) in request.risk().entries() {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ValidationError::RiskScoreOutOfRange {
                depot_id: depot_id.to_owned(),
                community_id: community_id.to_owned(),
                score,
            });
        }
    }

    let mut need_keys = BTreeSet::new();
    for need in request.needs() {
        if !community_ids.contains(need.community_id()) {
            return Err(ValidationError::UnknownCommunity {
                community_id: need.community_id().to_owned(),
            });
        }
        if !stocked_items.contains(need.item_code()) {
            return Err(ValidationError::UnstockedItem {
                item_code: need.item_code().to_owned(),
            });
        }
        if need.quantity() <= 0 {
            return Err(ValidationError::NonPositiveNeed {
                community_id: need.community_id().to_owned(),
                item_code: need.item_code().to_owned(),
                quantity: need.quantity(),
            });
        }
        if need.priority() == 0 {
            return Err(ValidationError::InvalidPriority {
                community_id: need.community_id().to_owned(),
                item_code: need.item_code().to_owned(),
            });
        }
        if !need_keys.insert((need.community_id(), need.item_code())) {
            return Err(ValidationError::DuplicateNeed {
                community_id: need.community_id().to_owned(),
                item_code: need.item_code().to_owned(),
            });
        }
    }

    Ok(())
}

fn validate_constraints(constraints: &Constraints) -> Result<(), ValidationError> {
    let reserve = constraints.reserve_fraction();
    if !reserve.is_finite() || !(0.0..=1.0).contains(&reserve) {
        return Err(ValidationError::ReserveFractionOutOfRange { value: reserve });
    }
    let max_distance = constraints.max_distance_km();
    if !max_distance.is_finite() || max_distance <= 0.0 {
        return Err(ValidationError::InvalidMaxDistance {
            value: max_distance,
        });
    }
    for (field, value) in [
        ("distance_weight", constraints.distance_weight()),
        ("risk_weight", constraints.risk_weight()),
        ("fairness_weight", constraints.fairness_weight()),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::NegativeWeight { field, value });
        }
    }
    Ok(())
}
