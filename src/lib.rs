//! # relief-alloc
//!
//! Resource allocation planner for disaster relief: maps a snapshot of supply
//! depots, communities, and prioritized needs to a cost-minimizing shipment
//! plan honoring reserve-stock policy, a maximum service distance, and a
//! composite cost balancing distance, incident risk, and allocation fairness.
//!
//! The crate exposes one operation, [`planner::plan`]: a pure, deterministic
//! computation over an immutable request plus a private working copy of
//! inventory. It performs no I/O and retains no state between calls, so
//! independent runs may execute fully in parallel.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Depot, Community, Need, Constraints, plan outputs)
//! - [`distance`] — Great-circle distance and the per-run distance grid
//! - [`cost`] — Composite shipment cost model
//! - [`candidates`] — Feasible candidate enumeration for one need
//! - [`engine`] — Validation and the greedy allocation loop
//! - [`planner`] — The `plan` entry point and summary aggregation

pub mod candidates;
pub mod cost;
pub mod distance;
pub mod engine;
pub mod error;
pub mod models;
pub mod planner;

pub use error::ValidationError;
