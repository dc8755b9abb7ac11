//! Route type.

use serde::Serialize;

/// An ordered sequence of delivery stops assigned to a single drone.
///
/// A route starts and ends at the base (id 0), which is not stored in
/// `stops`; the return leg is implicit and included in `total_distance`.
///
/// # Examples
///
/// ```
/// use skyroute::models::Route;
///
/// let mut route = Route::new(0);
/// route.push_stop(1, 10);
/// route.push_stop(3, 25);
/// assert_eq!(route.stops(), &[1, 3]);
/// assert_eq!(route.total_delivered(), 35);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    drone_id: usize,
    stops: Vec<usize>,
    total_distance: f64,
    total_delivered: i32,
}

impl Route {
    /// Creates an empty route for the given drone.
    pub fn new(drone_id: usize) -> Self {
        Self {
            drone_id,
            stops: Vec::new(),
            total_distance: 0.0,
            total_delivered: 0,
        }
    }

    /// Appends a request to the end of this route, accumulating its demand.
    pub fn push_stop(&mut self, request_id: usize, demand: i32) {
        self.stops.push(request_id);
        self.total_delivered += demand;
    }

    /// The drone assigned to this route.
    pub fn drone_id(&self) -> usize {
        self.drone_id
    }

    /// Request ids in visit order (base excluded).
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of delivery stops (excluding the base).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if this route has no delivery stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Round-trip distance base → stops → base, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total demand delivered on this route.
    pub fn total_delivered(&self) -> i32 {
        self.total_delivered
    }

    /// Sets the round-trip distance (used by the evaluator).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(1);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.drone_id(), 1);
        assert_eq!(r.total_distance(), 0.0);
        assert_eq!(r.total_delivered(), 0);
    }

    #[test]
    fn test_route_push_stop() {
        let mut r = Route::new(0);
        r.push_stop(5, 20);
        r.push_stop(3, 15);
        assert_eq!(r.len(), 2);
        assert_eq!(r.stops(), &[5, 3]);
        assert_eq!(r.total_delivered(), 35);
    }

    #[test]
    fn test_route_set_distance() {
        let mut r = Route::new(0);
        r.set_total_distance(42.5);
        assert_eq!(r.total_distance(), 42.5);
    }
}
