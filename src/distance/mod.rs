//! Great-circle distance and the per-run distance grid.

mod geo;
mod grid;

pub use geo::great_circle_km;
pub use grid::DistanceGrid;
