//! Dense depot-to-community distance grid.

use crate::models::{Community, Depot};

use super::great_circle_km;

/// A dense depots × communities distance grid stored in row-major order.
///
/// Built once per planning run so the engine's repeated candidate queries
/// never recompute haversine distances.
///
/// # Examples
///
/// ```
/// use relief_alloc::distance::DistanceGrid;
/// use relief_alloc::models::{Community, Depot, Location};
///
/// let depots = vec![Depot::new("d1", "r1", Location::new(0.0, 0.0).unwrap())];
/// let communities = vec![Community::new("c1", "r1", Location::new(1.0, 0.0).unwrap())];
/// let grid = DistanceGrid::build(&depots, &communities);
/// assert!((grid.get(0, 0) - 111.19).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    data: Vec<f64>,
    num_communities: usize,
}

impl DistanceGrid {
    /// Computes the grid from depot and community coordinates.
    pub fn build(depots: &[Depot], communities: &[Community]) -> Self {
        let mut data = Vec::with_capacity(depots.len() * communities.len());
        for depot in depots {
            for community in communities {
                data.push(great_circle_km(depot.location(), community.location()));
            }
        }
        Self {
            data,
            num_communities: communities.len(),
        }
    }

    /// Distance from a depot (by index) to a community (by index).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, depot_index: usize, community_index: usize) -> f64 {
        debug_assert!(community_index < self.num_communities);
        self.data[depot_index * self.num_communities + community_index]
    }

    /// Number of depots in the grid.
    pub fn num_depots(&self) -> usize {
        if self.num_communities == 0 {
            0
        } else {
            self.data.len() / self.num_communities
        }
    }

    /// Number of communities in the grid.
    pub fn num_communities(&self) -> usize {
        self.num_communities
    }
}
