//! Need type.

use serde::{Deserialize, Serialize};

/// A quantified request for one item by one community.
///
/// `priority` is a rank where 1 is the highest priority. A community holds
/// at most one need per item code.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::Need;
///
/// let need = Need::new("riverside", "water", 250, 1);
/// assert_eq!(need.quantity(), 250);
/// assert_eq!(need.priority(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Need {
    community_id: String,
    item_code: String,
    quantity: i32,
    priority: u32,
}

impl Need {
    /// Creates a need.
    pub fn new(
        community_id: impl Into<String>,
        item_code: impl Into<String>,
        quantity: i32,
        priority: u32,
    ) -> Self {
        Self {
            community_id: community_id.into(),
            item_code: item_code.into(),
            quantity,
            priority,
        }
    }

    /// Community reporting this need.
    pub fn community_id(&self) -> &str {
        &self.community_id
    }

    /// Requested item code.
    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    /// Requested quantity.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Priority rank (1 = highest).
    pub fn priority(&self) -> u32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need_new() {
        let n = Need::new("c1", "water", 50, 2);
        assert_eq!(n.community_id(), "c1");
        assert_eq!(n.item_code(), "water");
        assert_eq!(n.quantity(), 50);
        assert_eq!(n.priority(), 2);
    }
}
