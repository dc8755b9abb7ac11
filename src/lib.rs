//! # skyroute
//!
//! Drone delivery fleet routing: assigns geographically distributed
//! delivery requests to a fleet of battery- and payload-limited drones,
//! producing for each drone a feasible visiting order that returns to a
//! common base.
//!
//! The pipeline is a deterministic two-phase heuristic: haversine distance
//! computation, priority-weighted greedy route construction, and bounded
//! 2-opt improvement, orchestrated per drone in fleet registration order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, DeliveryRequest, Drone, Route, result projections)
//! - [`distance`] — Great-circle distance matrix
//! - [`constructive`] — Scan-order prioritization and priority-weighted nearest-neighbor construction
//! - [`local_search`] — Bounded 2-opt route improvement
//! - [`evaluation`] — Route metrics and fleet summary aggregation
//! - [`solver`] — The [`Dispatcher`](solver::Dispatcher) instance surface
//! - [`error`] — Typed rejections for the dispatch surface
//!
//! ## Example
//!
//! ```
//! use skyroute::solver::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.set_base(0.0, 0.0);
//! dispatcher.add_request(1, 10, 0.0, 0.01)?;   // critical, demand 10
//! dispatcher.add_request(3, 25, 0.0, -0.01)?;  // low, demand 25
//! dispatcher.add_drone(1000.0, 100)?;
//!
//! let result = dispatcher.optimize()?;
//! assert_eq!(result.summary().total_served(), 2);
//! # Ok::<(), skyroute::error::DispatchError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
