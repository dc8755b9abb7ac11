//! Error types for the dispatch surface.

use std::fmt;

/// A result type for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Rejections raised by the dispatch surface.
///
/// Invalid insertions are rejected immediately, never coerced or silently
/// dropped. A request that no drone can admit is *not* an error; it stays
/// unserved and is counted in the summary.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// `optimize()` was called with zero requests.
    NoRequests,
    /// Request insertion with a tier outside {1, 2, 3}.
    InvalidPriority {
        /// The rejected tier number.
        tier: u8,
    },
    /// Request insertion with a non-positive demand.
    InvalidDemand {
        /// The rejected demand.
        demand: i32,
    },
    /// Drone insertion with a non-positive or non-finite battery range.
    InvalidBatteryRange {
        /// The rejected range.
        range: f64,
    },
    /// Drone insertion with a non-positive payload capacity.
    InvalidPayloadCapacity {
        /// The rejected capacity.
        capacity: i32,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRequests => {
                write!(f, "cannot optimize without any delivery requests")
            }
            Self::InvalidPriority { tier } => {
                write!(f, "priority tier must be 1, 2, or 3, got {tier}")
            }
            Self::InvalidDemand { demand } => {
                write!(f, "demand must be positive, got {demand}")
            }
            Self::InvalidBatteryRange { range } => {
                write!(f, "battery range must be positive and finite, got {range}")
            }
            Self::InvalidPayloadCapacity { capacity } => {
                write!(f, "payload capacity must be positive, got {capacity}")
            }
        }
    }
}

impl std::error::Error for DispatchError {}
