//! Optimization result projections.

use std::time::Duration;

use serde::Serialize;

use super::{DeliveryRequest, Priority};

/// Per-drone outcome of an optimization run.
///
/// Carries the full request objects in visit order so the presentation
/// layer can draw paths and style markers without reaching back into the
/// optimizer's state.
#[derive(Debug, Clone, Serialize)]
pub struct DroneReport {
    drone_id: usize,
    stops: Vec<DeliveryRequest>,
    total_distance: f64,
    total_delivered: i32,
    battery_usage_percent: f64,
}

impl DroneReport {
    /// Creates a report for one drone.
    pub fn new(
        drone_id: usize,
        stops: Vec<DeliveryRequest>,
        total_distance: f64,
        total_delivered: i32,
        battery_usage_percent: f64,
    ) -> Self {
        Self {
            drone_id,
            stops,
            total_distance,
            total_delivered,
            battery_usage_percent,
        }
    }

    /// The drone this report describes.
    pub fn drone_id(&self) -> usize {
        self.drone_id
    }

    /// Requests in visit order (base excluded).
    pub fn stops(&self) -> &[DeliveryRequest] {
        &self.stops
    }

    /// Round-trip distance base → stops → base, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total demand delivered by this drone.
    pub fn total_delivered(&self) -> i32 {
        self.total_delivered
    }

    /// Fraction of the battery range used, as a percentage.
    pub fn battery_usage_percent(&self) -> f64 {
        self.battery_usage_percent
    }
}

/// Served/total request counts for one priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCount {
    /// The tier being counted.
    pub tier: Priority,
    /// Requests of this tier accepted into some route.
    pub served: usize,
    /// All requests of this tier (base excluded).
    pub total: usize,
}

/// Fleet-wide summary metrics for one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    tier_counts: [TierCount; 3],
    total_distance: f64,
    average_battery_usage: f64,
    duration: Duration,
}

impl FleetSummary {
    /// Creates a summary from aggregated metrics.
    pub fn new(
        tier_counts: [TierCount; 3],
        total_distance: f64,
        average_battery_usage: f64,
        duration: Duration,
    ) -> Self {
        Self {
            tier_counts,
            total_distance,
            average_battery_usage,
            duration,
        }
    }

    /// Served/total counts per priority tier, in urgency order.
    pub fn tier_counts(&self) -> &[TierCount; 3] {
        &self.tier_counts
    }

    /// Counts for a single tier.
    pub fn tier_count(&self, tier: Priority) -> TierCount {
        self.tier_counts[tier.tier() as usize - 1]
    }

    /// Requests served across all tiers.
    pub fn total_served(&self) -> usize {
        self.tier_counts.iter().map(|c| c.served).sum()
    }

    /// All requests across all tiers (base excluded).
    pub fn total_requests(&self) -> usize {
        self.tier_counts.iter().map(|c| c.total).sum()
    }

    /// Distance summed across all drone routes, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Mean battery usage percent across the fleet; 0.0 for an empty fleet.
    pub fn average_battery_usage(&self) -> f64 {
        self.average_battery_usage
    }

    /// Wall-clock duration of the optimization run.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Complete output of one optimization run: one report per drone in fleet
/// registration order, plus the fleet summary.
///
/// # Examples
///
/// ```
/// use skyroute::solver::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.add_request(1, 10, 0.0, 0.01).unwrap();
/// dispatcher.add_drone(1000.0, 100).unwrap();
///
/// let result = dispatcher.optimize().unwrap();
/// assert_eq!(result.routes().len(), 1);
/// assert_eq!(result.summary().total_served(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    routes: Vec<DroneReport>,
    summary: FleetSummary,
}

impl OptimizationResult {
    /// Creates a result from per-drone reports and the fleet summary.
    pub fn new(routes: Vec<DroneReport>, summary: FleetSummary) -> Self {
        Self { routes, summary }
    }

    /// Per-drone reports in fleet registration order.
    pub fn routes(&self) -> &[DroneReport] {
        &self.routes
    }

    /// Fleet-wide summary metrics.
    pub fn summary(&self) -> &FleetSummary {
        &self.summary
    }
}
