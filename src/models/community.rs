//! Community type.

use serde::{Deserialize, Serialize};

use super::Location;

/// A community reporting needs; immutable reference data for a run.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::{Community, Location};
///
/// let c = Community::new("riverside", "north", Location::new(10.1, 20.2).unwrap());
/// assert_eq!(c.id(), "riverside");
/// assert_eq!(c.region_id(), "north");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    id: String,
    region_id: String,
    location: Location,
}

impl Community {
    /// Creates a community.
    pub fn new(id: impl Into<String>, region_id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            region_id: region_id.into(),
            location,
        }
    }

    /// Community ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Region this community belongs to.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// Community coordinates.
    pub fn location(&self) -> Location {
        self.location
    }
}
