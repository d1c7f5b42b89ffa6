//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::Location;
///
/// let loc = Location::new(35.6, 139.7).unwrap();
/// assert_eq!(loc.lat(), 35.6);
/// assert!(Location::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    /// Creates a location.
    ///
    /// Returns `None` if either coordinate is non-finite, `|lat| > 90`,
    /// or `|lon| > 180`.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both coordinates are finite and in range.
    ///
    /// Deserialized values bypass [`Location::new`], so run-level validation
    /// re-checks them with this.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= 90.0
            && self.lon.abs() <= 180.0
    }
}
