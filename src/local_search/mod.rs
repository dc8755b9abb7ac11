//! Local search operators for improving constructed routes.
//!
//! - [`two_opt_improve`] — Bounded intra-route 2-opt edge reversal under a
//!   battery-range ceiling
//! - [`route_distance`] — Round-trip distance of a stop sequence

mod two_opt;

pub use two_opt::{route_distance, two_opt_improve, MAX_PASSES};
