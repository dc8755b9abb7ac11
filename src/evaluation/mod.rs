//! Route metrics and fleet-wide summary aggregation.

mod evaluator;

pub use evaluator::{fleet_summary, RouteEvaluator};
