//! Great-circle distance.

use crate::models::Location;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two locations, in kilometers.
///
/// # Examples
///
/// ```
/// use relief_alloc::distance::great_circle_km;
/// use relief_alloc::models::Location;
///
/// let a = Location::new(0.0, 0.0).unwrap();
/// let b = Location::new(1.0, 0.0).unwrap();
/// // One degree of latitude is roughly 111 km.
/// assert!((great_circle_km(a, b) - 111.19).abs() < 0.1);
/// ```
pub fn great_circle_km(a: Location, b: Location) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon).expect("valid")
    }

    #[test]
    fn test_zero_distance() {
        let p = loc(12.3, 45.6);
        assert!(great_circle_km(p, p).abs() < 1e-10);
    }

    #[test]
    fn test_one_degree_latitude() {
        let d = great_circle_km(loc(0.0, 0.0), loc(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_symmetric() {
        let a = loc(35.68, 139.69);
        let b = loc(34.69, 135.50);
        assert!((great_circle_km(a, b) - great_circle_km(b, a)).abs() < 1e-10);
    }

    #[test]
    fn test_known_pair() {
        // Tokyo to Osaka, roughly 400 km.
        let d = great_circle_km(loc(35.68, 139.69), loc(34.69, 135.50));
        assert!(d > 390.0 && d < 410.0);
    }

    #[test]
    fn test_antipodal_bounded() {
        let d = great_circle_km(loc(0.0, 0.0), loc(0.0, 180.0));
        // Half the Earth's circumference.
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 1.0);
    }
}
