//! Working inventory for one allocation run.

use std::collections::BTreeMap;

use crate::models::Depot;

/// Reserve-capped allocatable stock, private to one run.
///
/// Each (depot, item) entry starts at `floor((1 − reserve_fraction) × on-hand)`
/// and is decremented as shipments are emitted, so the remaining value is
/// always exactly what may still be shipped. The conservation invariant
/// (total shipped ≤ the reserve cap) holds by construction.
#[derive(Debug, Clone)]
pub struct WorkingInventory {
    available: Vec<BTreeMap<String, i32>>,
}

impl WorkingInventory {
    /// Builds the working copy from depot stock and the reserve fraction.
    ///
    /// Assumes constraints and stock have already been validated.
    pub fn new(depots: &[Depot], reserve_fraction: f64) -> Self {
        let keep = 1.0 - reserve_fraction;
        let available = depots
            .iter()
            .map(|depot| {
                depot
                    .stock()
                    .iter()
                    .map(|(item, &on_hand)| {
                        let cap = (keep * f64::from(on_hand)).floor() as i32;
                        (item.clone(), cap)
                    })
                    .collect()
            })
            .collect();
        Self { available }
    }

    /// Quantity still allocatable from a depot for an item.
    pub fn available(&self, depot_index: usize, item_code: &str) -> i32 {
        self.available[depot_index]
            .get(item_code)
            .copied()
            .unwrap_or(0)
    }

    /// Commits a shipment, reducing the allocatable quantity.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `quantity` does not exceed the remaining
    /// allocatable quantity.
    pub fn commit(&mut self, depot_index: usize, item_code: &str, quantity: i32) {
        let entry = self.available[depot_index]
            .get_mut(item_code)
            .expect("commit against unstocked item");
        debug_assert!(quantity <= *entry, "over-committed item");
        *entry -= quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn depot(stock: &[(&str, i32)]) -> Depot {
        let mut d = Depot::new("d1", "r1", Location::new(0.0, 0.0).expect("valid"));
        for &(item, qty) in stock {
            d = d.with_stock(item, qty);
        }
        d
    }

    #[test]
    fn test_no_reserve() {
        let inv = WorkingInventory::new(&[depot(&[("water", 100)])], 0.0);
        assert_eq!(inv.available(0, "water"), 100);
        assert_eq!(inv.available(0, "food"), 0);
    }

    #[test]
    fn test_half_reserve() {
        let inv = WorkingInventory::new(&[depot(&[("water", 100)])], 0.5);
        assert_eq!(inv.available(0, "water"), 50);
    }

    #[test]
    fn test_full_reserve() {
        let inv = WorkingInventory::new(&[depot(&[("water", 100)])], 1.0);
        assert_eq!(inv.available(0, "water"), 0);
    }

    #[test]
    fn test_fractional_cap_floors() {
        let inv = WorkingInventory::new(&[depot(&[("water", 7)])], 0.5);
        // floor(0.5 * 7) = 3
        assert_eq!(inv.available(0, "water"), 3);
    }

    #[test]
    fn test_commit_reduces_available() {
        let mut inv = WorkingInventory::new(&[depot(&[("water", 100)])], 0.0);
        inv.commit(0, "water", 30);
        assert_eq!(inv.available(0, "water"), 70);
        inv.commit(0, "water", 70);
        assert_eq!(inv.available(0, "water"), 0);
    }
}
