//! Supply depot type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Location;

/// A relief-supply storage location holding multi-commodity inventory.
///
/// Stock is keyed by item code. A depot's stock map is reference data for a
/// planning run; the engine works on its own reserve-capped copy and never
/// mutates the depot itself.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::{Depot, Location};
///
/// let depot = Depot::new("d1", "north", Location::new(10.0, 20.0).unwrap())
///     .with_stock("water", 500)
///     .with_stock("blankets", 120);
/// assert_eq!(depot.on_hand("water"), 500);
/// assert_eq!(depot.on_hand("food"), 0);
/// assert_eq!(depot.total_on_hand(), 620);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depot {
    id: String,
    region_id: String,
    location: Location,
    stock: BTreeMap<String, i32>,
}

impl Depot {
    /// Creates a depot with empty stock.
    pub fn new(id: impl Into<String>, region_id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            region_id: region_id.into(),
            location,
            stock: BTreeMap::new(),
        }
    }

    /// Sets the on-hand quantity for an item code.
    pub fn with_stock(mut self, item_code: impl Into<String>, quantity: i32) -> Self {
        self.stock.insert(item_code.into(), quantity);
        self
    }

    /// Depot ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Region this depot belongs to.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// Depot coordinates.
    pub fn location(&self) -> Location {
        self.location
    }

    /// On-hand stock by item code.
    pub fn stock(&self) -> &BTreeMap<String, i32> {
        &self.stock
    }

    /// On-hand quantity for one item code (zero if not stocked).
    pub fn on_hand(&self, item_code: &str) -> i32 {
        self.stock.get(item_code).copied().unwrap_or(0)
    }

    /// Total on-hand quantity across all item codes.
    pub fn total_on_hand(&self) -> i64 {
        self.stock.values().map(|&q| i64::from(q)).sum()
    }
}
