//! Domain model types for relief allocation planning.
//!
//! Provides the core abstractions: depots holding multi-commodity stock,
//! communities with prioritized needs, run constraints, the risk lookup,
//! and the shipment plan output types.

mod community;
mod constraints;
mod depot;
mod location;
mod need;
mod plan;
mod request;
mod risk;

pub use community::Community;
pub use constraints::Constraints;
pub use depot::Depot;
pub use location::Location;
pub use need::Need;
pub use plan::{AllocationPlan, PlanSummary, Shipment, UnmetNeed};
pub use request::PlanningRequest;
pub use risk::{RiskEntry, RiskLookup};
