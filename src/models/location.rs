//! Geographic location type.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in WGS84-like degrees.
///
/// Distances between locations are great-circle distances in kilometers,
/// computed with the haversine formula. The same function paces any
/// presentation-side animation, so it is part of the public surface.
///
/// # Examples
///
/// ```
/// use skyroute::models::Location;
///
/// let base = Location::new(0.0, 0.0);
/// let stop = Location::new(0.0, 0.01);
/// let d = base.distance_to(&stop);
/// assert!(d > 1.0 && d < 1.2); // ~1.11 km per 0.01° of longitude at the equator
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another location in kilometers (haversine).
    pub fn distance_to(&self, other: &Location) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Location::new(48.86, 2.35);
        assert!(a.distance_to(&a).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new(48.86, 2.35);
        let b = Location::new(51.51, -0.13);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance_paris_london() {
        let paris = Location::new(48.8566, 2.3522);
        let london = Location::new(51.5074, -0.1278);
        let d = paris.distance_to(&london);
        // Great-circle distance is ~343-344 km
        assert!(d > 340.0 && d < 348.0);
    }

    #[test]
    fn test_one_degree_latitude() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(1.0, 0.0);
        // One degree of latitude is ~111.19 km for R = 6371
        assert!((a.distance_to(&b) - 111.19).abs() < 0.1);
    }
}
