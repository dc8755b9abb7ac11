//! Drone type with battery and payload constraints.

use serde::Serialize;

/// A delivery drone: an agent with a maximum round-trip travel budget
/// (battery range, km) and a maximum carried quantity (payload capacity).
///
/// A drone holds constraints only. Its computed route, distance, and
/// delivered totals belong to the per-run [`Route`](super::Route) and
/// [`DroneReport`](super::DroneReport), so the fleet can be reused across
/// runs without carrying stale state.
///
/// # Examples
///
/// ```
/// use skyroute::models::Drone;
///
/// let d = Drone::new(0, 50.0, 100);
/// assert_eq!(d.id(), 0);
/// assert_eq!(d.battery_range(), 50.0);
/// assert_eq!(d.payload_capacity(), 100);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Drone {
    id: usize,
    battery_range: f64,
    payload_capacity: i32,
}

impl Drone {
    /// Creates a drone. Validation of the constraint values happens at the
    /// insertion surface.
    pub fn new(id: usize, battery_range: f64, payload_capacity: i32) -> Self {
        Self {
            id,
            battery_range,
            payload_capacity,
        }
    }

    /// Drone id, assigned in fleet registration order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum total travel distance per trip, in kilometers.
    pub fn battery_range(&self) -> f64 {
        self.battery_range
    }

    /// Maximum total demand quantity carried per trip.
    pub fn payload_capacity(&self) -> i32 {
        self.payload_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_new() {
        let d = Drone::new(2, 120.5, 40);
        assert_eq!(d.id(), 2);
        assert_eq!(d.battery_range(), 120.5);
        assert_eq!(d.payload_capacity(), 40);
    }
}
