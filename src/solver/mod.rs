//! Fleet dispatcher: instance state and the optimization pipeline.

use std::time::Instant;

use log::debug;

use crate::constructive::{priority_nearest_neighbor, priority_scan_order};
use crate::distance::DistanceMatrix;
use crate::error::{DispatchError, DispatchResult};
use crate::evaluation::{fleet_summary, RouteEvaluator};
use crate::local_search::two_opt_improve;
use crate::models::{DeliveryRequest, Drone, Location, OptimizationResult, Priority};

/// Holds the base, delivery requests, and drone fleet, and runs the
/// optimization pipeline over them.
///
/// A dispatcher is a plain value: one optimization in flight per instance,
/// and independent instances are fully isolated (the distance matrix is
/// derived inside each run, never stored). `optimize()` is a deterministic
/// function of the current base, requests, and drones.
///
/// # Examples
///
/// ```
/// use skyroute::solver::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.set_base(0.0, 0.0);
/// dispatcher.add_request(1, 10, 0.0, 0.01).unwrap();
/// dispatcher.add_request(3, 20, 0.0, -0.01).unwrap();
/// dispatcher.add_drone(1000.0, 100).unwrap();
///
/// let result = dispatcher.optimize().unwrap();
/// assert_eq!(result.summary().total_served(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    base: Location,
    requests: Vec<DeliveryRequest>,
    drones: Vec<Drone>,
}

impl Dispatcher {
    /// Creates a dispatcher with the base at (0.0, 0.0).
    pub fn new() -> Self {
        Self {
            base: Location::new(0.0, 0.0),
            requests: Vec::new(),
            drones: Vec::new(),
        }
    }

    /// Replaces the base location.
    ///
    /// Previously added requests are preserved; distances to the new base
    /// take effect on the next `optimize()` call, which derives its matrix
    /// from current positions.
    pub fn set_base(&mut self, lat: f64, lng: f64) {
        self.base = Location::new(lat, lng);
    }

    /// Adds a delivery request and returns its id (sequential from 1).
    ///
    /// Rejects a tier outside {1, 2, 3} and a non-positive demand.
    pub fn add_request(&mut self, tier: u8, demand: i32, lat: f64, lng: f64) -> DispatchResult<usize> {
        let priority =
            Priority::from_tier(tier).ok_or(DispatchError::InvalidPriority { tier })?;
        if demand <= 0 {
            return Err(DispatchError::InvalidDemand { demand });
        }
        let id = self.requests.len() + 1;
        self.requests
            .push(DeliveryRequest::new(id, priority, demand, Location::new(lat, lng)));
        Ok(id)
    }

    /// Adds a drone and returns its id (fleet registration order).
    ///
    /// Rejects a non-positive or non-finite battery range and a
    /// non-positive payload capacity.
    pub fn add_drone(&mut self, battery_range: f64, payload_capacity: i32) -> DispatchResult<usize> {
        if !battery_range.is_finite() || battery_range <= 0.0 {
            return Err(DispatchError::InvalidBatteryRange { range: battery_range });
        }
        if payload_capacity <= 0 {
            return Err(DispatchError::InvalidPayloadCapacity {
                capacity: payload_capacity,
            });
        }
        let id = self.drones.len();
        self.drones.push(Drone::new(id, battery_range, payload_capacity));
        Ok(id)
    }

    /// The current base location.
    pub fn base(&self) -> Location {
        self.base
    }

    /// All requests in id order, with their served flags from the most
    /// recent run.
    pub fn requests(&self) -> &[DeliveryRequest] {
        &self.requests
    }

    /// The fleet in registration order.
    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// Drops all requests and drones. The base location is retained.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.drones.clear();
    }

    /// Runs the full pipeline: distance matrix, scan-order prioritization,
    /// then per drone (in registration order) greedy construction and
    /// bounded 2-opt improvement, finishing with fleet-wide aggregation.
    ///
    /// Fails with [`DispatchError::NoRequests`] when no request has been
    /// added. An empty fleet is not an error: every request stays unserved
    /// and the average battery usage is 0.
    pub fn optimize(&mut self) -> DispatchResult<OptimizationResult> {
        if self.requests.is_empty() {
            return Err(DispatchError::NoRequests);
        }

        let started = Instant::now();
        debug!(
            "optimizing {} requests across {} drones",
            self.requests.len(),
            self.drones.len()
        );

        // Each run stands alone: flags from a previous run don't constrain
        // this one.
        for request in &mut self.requests {
            request.set_served(false);
        }

        let mut locations = vec![self.base];
        locations.extend(self.requests.iter().map(|r| r.location()));
        let distances = DistanceMatrix::from_locations(&locations);

        let scan_order = priority_scan_order(&self.requests);

        let mut reports = Vec::with_capacity(self.drones.len());
        for drone in &self.drones {
            let candidates: Vec<usize> = scan_order
                .iter()
                .copied()
                .filter(|&id| {
                    let request = &self.requests[id - 1];
                    !request.served() && request.demand() <= drone.payload_capacity()
                })
                .collect();

            let stops = if candidates.is_empty() {
                Vec::new()
            } else {
                let constructed =
                    priority_nearest_neighbor(&candidates, &self.requests, &distances, drone);
                let (improved, _) = two_opt_improve(&constructed, &distances, drone.battery_range());
                improved
            };

            for &id in &stops {
                self.requests[id - 1].set_served(true);
            }

            let evaluator = RouteEvaluator::new(&self.requests, &distances, drone);
            let route = evaluator.build_route(&stops);
            debug!(
                "drone {}: {} stops, {:.2} km, {} delivered",
                drone.id(),
                route.len(),
                route.total_distance(),
                route.total_delivered()
            );
            reports.push(evaluator.build_report(&route));
        }

        let summary = fleet_summary(&self.requests, &reports, started.elapsed());
        debug!(
            "served {}/{} requests, {:.2} km total",
            summary.total_served(),
            summary.total_requests(),
            summary.total_distance()
        );

        Ok(OptimizationResult::new(reports, summary))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_assigns_sequential_ids() {
        let mut d = Dispatcher::new();
        assert_eq!(d.add_request(1, 10, 0.0, 0.01).expect("valid"), 1);
        assert_eq!(d.add_request(2, 20, 0.0, 0.02).expect("valid"), 2);
        assert_eq!(d.requests().len(), 2);
    }

    #[test]
    fn test_add_request_rejects_bad_tier() {
        let mut d = Dispatcher::new();
        assert_eq!(
            d.add_request(0, 10, 0.0, 0.0),
            Err(DispatchError::InvalidPriority { tier: 0 })
        );
        assert_eq!(
            d.add_request(4, 10, 0.0, 0.0),
            Err(DispatchError::InvalidPriority { tier: 4 })
        );
        assert!(d.requests().is_empty());
    }

    #[test]
    fn test_add_request_rejects_bad_demand() {
        let mut d = Dispatcher::new();
        assert_eq!(
            d.add_request(1, 0, 0.0, 0.0),
            Err(DispatchError::InvalidDemand { demand: 0 })
        );
        assert_eq!(
            d.add_request(1, -3, 0.0, 0.0),
            Err(DispatchError::InvalidDemand { demand: -3 })
        );
    }

    #[test]
    fn test_add_drone_rejects_bad_constraints() {
        let mut d = Dispatcher::new();
        assert_eq!(
            d.add_drone(0.0, 10),
            Err(DispatchError::InvalidBatteryRange { range: 0.0 })
        );
        assert!(d.add_drone(f64::NAN, 10).is_err());
        assert_eq!(
            d.add_drone(10.0, 0),
            Err(DispatchError::InvalidPayloadCapacity { capacity: 0 })
        );
        assert!(d.drones().is_empty());
    }

    #[test]
    fn test_optimize_without_requests_fails() {
        let mut d = Dispatcher::new();
        d.add_drone(100.0, 50).expect("valid");
        let err = d.optimize().expect_err("no requests");
        assert_eq!(err, DispatchError::NoRequests);
    }

    #[test]
    fn test_optimize_empty_fleet() {
        let mut d = Dispatcher::new();
        d.add_request(1, 10, 0.0, 0.01).expect("valid");
        let result = d.optimize().expect("runs without drones");
        assert!(result.routes().is_empty());
        assert_eq!(result.summary().total_served(), 0);
        assert_eq!(result.summary().average_battery_usage(), 0.0);
        assert!(!d.requests()[0].served());
    }

    #[test]
    fn test_optimize_single_drone_serves_all() {
        let mut d = Dispatcher::new();
        d.add_request(1, 10, 0.0, 0.01).expect("valid");
        d.add_request(2, 10, 0.0, 0.02).expect("valid");
        d.add_drone(1000.0, 100).expect("valid");
        let result = d.optimize().expect("feasible");
        assert_eq!(result.summary().total_served(), 2);
        assert!(d.requests().iter().all(|r| r.served()));
        let report = &result.routes()[0];
        assert_eq!(report.total_delivered(), 20);
        assert!(report.total_distance() > 0.0);
        assert!(report.battery_usage_percent() > 0.0);
    }

    #[test]
    fn test_first_drone_wins_contested_request() {
        let mut d = Dispatcher::new();
        d.add_request(1, 10, 0.0, 0.01).expect("valid");
        d.add_drone(1000.0, 100).expect("valid");
        d.add_drone(1000.0, 100).expect("valid");
        let result = d.optimize().expect("feasible");
        assert_eq!(result.routes()[0].stops().len(), 1);
        assert!(result.routes()[1].stops().is_empty());
    }

    #[test]
    fn test_too_heavy_request_stays_unserved() {
        let mut d = Dispatcher::new();
        d.add_request(1, 50, 0.0, 0.01).expect("valid");
        d.add_drone(1000.0, 40).expect("valid");
        let result = d.optimize().expect("runs normally");
        assert_eq!(result.summary().total_served(), 0);
        assert_eq!(result.summary().total_requests(), 1);
        assert!(!d.requests()[0].served());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let mut d = Dispatcher::new();
        d.add_request(1, 10, 0.0, 0.01).expect("valid");
        d.add_request(2, 20, 0.01, 0.01).expect("valid");
        d.add_request(3, 15, -0.01, 0.0).expect("valid");
        d.add_drone(1000.0, 100).expect("valid");

        let first = d.optimize().expect("feasible");
        let second = d.optimize().expect("feasible");
        let stops =
            |r: &OptimizationResult| -> Vec<Vec<usize>> {
                r.routes()
                    .iter()
                    .map(|rep| rep.stops().iter().map(|s| s.id()).collect())
                    .collect()
            };
        assert_eq!(stops(&first), stops(&second));
        assert!(
            (first.summary().total_distance() - second.summary().total_distance()).abs() < 1e-12
        );
    }

    #[test]
    fn test_clear_keeps_base() {
        let mut d = Dispatcher::new();
        d.set_base(10.0, 20.0);
        d.add_request(1, 10, 10.0, 20.01).expect("valid");
        d.add_drone(100.0, 50).expect("valid");
        d.clear();
        assert!(d.requests().is_empty());
        assert!(d.drones().is_empty());
        assert_eq!(d.base().lat(), 10.0);
        assert_eq!(d.base().lng(), 20.0);
    }

    #[test]
    fn test_set_base_preserves_requests() {
        let mut d = Dispatcher::new();
        d.add_request(1, 10, 0.0, 0.01).expect("valid");
        d.set_base(1.0, 1.0);
        assert_eq!(d.requests().len(), 1);
    }
}
