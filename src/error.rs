//! Validation errors.

use thiserror::Error;

/// A malformed planning request, rejected before any allocation work.
///
/// Each variant names the offending field and values. Infeasibility (a need
/// that cannot be matched within distance or stock limits) is never an
/// error; it surfaces as an unmet need in the plan summary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `reserve_fraction` outside [0, 1] or non-finite.
    #[error("reserve_fraction must lie in [0, 1], got {value}")]
    ReserveFractionOutOfRange {
        /// Offending value.
        value: f64,
    },

    /// `max_distance_km` non-positive or non-finite.
    #[error("max_distance_km must be positive and finite, got {value}")]
    InvalidMaxDistance {
        /// Offending value.
        value: f64,
    },

    /// A cost weight is negative or non-finite.
    #[error("{field} must be non-negative and finite, got {value}")]
    NegativeWeight {
        /// Name of the weight field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Two depots share an id.
    #[error("duplicate depot id \"{id}\"")]
    DuplicateDepot {
        /// Repeated id.
        id: String,
    },

    /// Two communities share an id.
    #[error("duplicate community id \"{id}\"")]
    DuplicateCommunity {
        /// Repeated id.
        id: String,
    },

    /// A depot stock entry is negative.
    #[error("depot \"{depot_id}\" holds negative stock of \"{item_code}\": {quantity}")]
    NegativeStock {
        /// Depot holding the entry.
        depot_id: String,
        /// Item code of the entry.
        item_code: String,
        /// Offending quantity.
        quantity: i32,
    },

    /// A depot or community carries out-of-range coordinates.
    #[error("invalid coordinates on \"{id}\"")]
    InvalidLocation {
        /// Depot or community id.
        id: String,
    },

    /// A risk score falls outside [0, 1].
    #[error("risk score for (\"{depot_id}\", \"{community_id}\") must lie in [0, 1], got {score}")]
    RiskScoreOutOfRange {
        /// Depot side of the pair.
        depot_id: String,
        /// Community side of the pair.
        community_id: String,
        /// Offending score.
        score: f64,
    },

    /// A need references a community not present in the request.
    #[error("need references unknown community \"{community_id}\"")]
    UnknownCommunity {
        /// Missing community id.
        community_id: String,
    },

    /// A need requests an item no depot stocks.
    #[error("no depot stocks item \"{item_code}\"")]
    UnstockedItem {
        /// Unstocked item code.
        item_code: String,
    },

    /// A need's quantity is zero or negative.
    #[error("need for \"{item_code}\" at \"{community_id}\" has non-positive quantity {quantity}")]
    NonPositiveNeed {
        /// Community reporting the need.
        community_id: String,
        /// Requested item.
        item_code: String,
        /// Offending quantity.
        quantity: i32,
    },

    /// A need carries priority rank 0; ranks start at 1.
    #[error("need for \"{item_code}\" at \"{community_id}\" has priority 0; ranks start at 1")]
    InvalidPriority {
        /// Community reporting the need.
        community_id: String,
        /// Requested item.
        item_code: String,
    },

    /// Two needs target the same (community, item) pair.
    #[error("duplicate need for (\"{community_id}\", \"{item_code}\")")]
    DuplicateNeed {
        /// Community side of the pair.
        community_id: String,
        /// Item side of the pair.
        item_code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_fields() {
        let e = ValidationError::ReserveFractionOutOfRange { value: 1.5 };
        assert!(e.to_string().contains("reserve_fraction"));
        assert!(e.to_string().contains("1.5"));

        let e = ValidationError::NegativeWeight {
            field: "risk_weight",
            value: -0.5,
        };
        assert!(e.to_string().contains("risk_weight"));

        let e = ValidationError::DuplicateNeed {
            community_id: "c1".into(),
            item_code: "water".into(),
        };
        assert!(e.to_string().contains("c1"));
        assert!(e.to_string().contains("water"));
    }
}
