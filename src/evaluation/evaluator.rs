//! Route metrics and fleet summary aggregation.

use std::time::Duration;

use crate::distance::DistanceMatrix;
use crate::local_search::route_distance;
use crate::models::{DeliveryRequest, Drone, DroneReport, FleetSummary, Priority, Route, TierCount};

/// Computes per-route metrics for one drone: round-trip distance, delivered
/// demand, and battery usage.
///
/// # Examples
///
/// ```
/// use skyroute::distance::DistanceMatrix;
/// use skyroute::evaluation::RouteEvaluator;
/// use skyroute::models::{DeliveryRequest, Drone, Location, Priority};
///
/// let requests = vec![
///     DeliveryRequest::new(1, Priority::Critical, 10, Location::new(0.0, 0.01)),
/// ];
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 0.01),
/// ]);
/// let drone = Drone::new(0, 50.0, 100);
///
/// let evaluator = RouteEvaluator::new(&requests, &dm, &drone);
/// let route = evaluator.build_route(&[1]);
/// assert_eq!(route.total_delivered(), 10);
/// assert!(route.total_distance() > 0.0);
/// ```
pub struct RouteEvaluator<'a> {
    requests: &'a [DeliveryRequest],
    distances: &'a DistanceMatrix,
    drone: &'a Drone,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over requests in id order.
    pub fn new(
        requests: &'a [DeliveryRequest],
        distances: &'a DistanceMatrix,
        drone: &'a Drone,
    ) -> Self {
        Self {
            requests,
            distances,
            drone,
        }
    }

    /// Builds a [`Route`] from a stop sequence, computing the round-trip
    /// distance and the delivered total.
    pub fn build_route(&self, stops: &[usize]) -> Route {
        let mut route = Route::new(self.drone.id());
        for &id in stops {
            route.push_stop(id, self.requests[id - 1].demand());
        }
        route.set_total_distance(route_distance(stops, self.distances));
        route
    }

    /// Turns a route into the owned report handed to the presentation
    /// layer, with full request objects in visit order.
    pub fn build_report(&self, route: &Route) -> DroneReport {
        let stops = route
            .stops()
            .iter()
            .map(|&id| self.requests[id - 1].clone())
            .collect();
        let usage = route.total_distance() / self.drone.battery_range() * 100.0;
        DroneReport::new(
            self.drone.id(),
            stops,
            route.total_distance(),
            route.total_delivered(),
            usage,
        )
    }
}

/// Aggregates fleet-wide summary metrics over all per-drone reports.
///
/// Served/total counts are partitioned by priority tier from the requests'
/// served flags (the base is no request and is never counted). The average
/// battery usage of an empty fleet is defined as 0.0, not NaN.
pub fn fleet_summary(
    requests: &[DeliveryRequest],
    reports: &[DroneReport],
    duration: Duration,
) -> FleetSummary {
    let tier_counts = Priority::all().map(|tier| {
        let of_tier = requests.iter().filter(|r| r.priority() == tier);
        let (mut served, mut total) = (0, 0);
        for request in of_tier {
            total += 1;
            if request.served() {
                served += 1;
            }
        }
        TierCount { tier, served, total }
    });

    let total_distance = reports.iter().map(|r| r.total_distance()).sum();
    let average_battery_usage = if reports.is_empty() {
        0.0
    } else {
        reports.iter().map(|r| r.battery_usage_percent()).sum::<f64>() / reports.len() as f64
    };

    FleetSummary::new(tier_counts, total_distance, average_battery_usage, duration)
}
