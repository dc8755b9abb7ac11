//! Domain model types for drone delivery routing.
//!
//! Provides the core abstractions: delivery requests with demands and
//! urgency tiers, drones with battery and payload constraints, routes as
//! ordered stop sequences, and the result projections consumed by the
//! presentation layer.

/// Reserved id of the base: the fixed origin/return point of every route.
pub const BASE_ID: usize = 0;

mod drone;
mod location;
mod request;
mod route;
mod solution;

pub use drone::Drone;
pub use location::Location;
pub use request::{DeliveryRequest, Priority};
pub use route::Route;
pub use solution::{DroneReport, FleetSummary, OptimizationResult, TierCount};
