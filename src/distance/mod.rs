//! Great-circle distance matrix.
//!
//! Provides a dense, symmetric, id-keyed distance matrix over the base and
//! all delivery request locations.

mod matrix;

pub use matrix::DistanceMatrix;
