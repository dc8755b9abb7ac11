//! Delivery request and priority tier types.

use serde::{Deserialize, Serialize};

use super::Location;

/// Urgency tier of a delivery request. Lower tier number = more urgent.
///
/// The numeric tier is used directly as the divisor weight during route
/// construction: a candidate's raw distance is divided by its tier before
/// candidates are compared.
///
/// # Examples
///
/// ```
/// use skyroute::models::Priority;
///
/// assert_eq!(Priority::from_tier(1), Some(Priority::Critical));
/// assert_eq!(Priority::from_tier(4), None);
/// assert_eq!(Priority::Low.tier(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Most urgent tier (1).
    Critical = 1,
    /// Middle tier (2).
    Moderate = 2,
    /// Least urgent tier (3).
    Low = 3,
}

impl Priority {
    /// Converts a raw tier number into a priority.
    ///
    /// Returns `None` for anything outside {1, 2, 3}.
    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(Self::Critical),
            2 => Some(Self::Moderate),
            3 => Some(Self::Low),
            _ => None,
        }
    }

    /// The numeric tier (1 = most urgent).
    pub fn tier(&self) -> u8 {
        *self as u8
    }

    /// The divisor applied to raw distance during candidate selection.
    pub fn weight(&self) -> f64 {
        *self as u8 as f64
    }

    /// All tiers in urgency order, for summary partitioning.
    pub fn all() -> [Priority; 3] {
        [Self::Critical, Self::Moderate, Self::Low]
    }

    /// Human-readable tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

/// A delivery request: a location demanding a quantity of supply, tagged
/// with an urgency tier.
///
/// Ids are sequential starting at 1; id 0 is reserved for the base. The
/// `served` flag is set by the optimizer when the request is accepted into
/// some drone's route for the current run.
///
/// # Examples
///
/// ```
/// use skyroute::models::{DeliveryRequest, Location, Priority};
///
/// let r = DeliveryRequest::new(1, Priority::Critical, 10, Location::new(0.0, 0.01));
/// assert_eq!(r.id(), 1);
/// assert_eq!(r.demand(), 10);
/// assert!(!r.served());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRequest {
    id: usize,
    priority: Priority,
    demand: i32,
    location: Location,
    served: bool,
}

impl DeliveryRequest {
    /// Creates an unserved request. Validation of demand and tier happens
    /// at the insertion surface, not here.
    pub fn new(id: usize, priority: Priority, demand: i32, location: Location) -> Self {
        Self {
            id,
            priority,
            demand,
            location,
            served: false,
        }
    }

    /// Stable request id (1..N; 0 is the base).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Urgency tier.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Quantity of supply demanded.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Delivery point.
    pub fn location(&self) -> Location {
        self.location
    }

    /// `true` once some drone's accepted route includes this request.
    pub fn served(&self) -> bool {
        self.served
    }

    pub(crate) fn set_served(&mut self, served: bool) {
        self.served = served;
    }
}
