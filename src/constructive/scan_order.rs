//! Candidate scan-order prioritization.

use crate::models::DeliveryRequest;

/// Orders request ids by urgency for candidate evaluation.
///
/// Stable sort by (priority tier ascending, demand descending): more urgent
/// tiers first, larger demands first within a tier, insertion order
/// preserved on full ties. The result fixes the order in which the route
/// builder scans candidates — including its tie-break — and is not the
/// final visit order.
///
/// Requests must be in id order (id = index + 1), as stored by the
/// dispatcher.
///
/// # Examples
///
/// ```
/// use skyroute::constructive::priority_scan_order;
/// use skyroute::models::{DeliveryRequest, Location, Priority};
///
/// let requests = vec![
///     DeliveryRequest::new(1, Priority::Low, 30, Location::new(0.0, 0.01)),
///     DeliveryRequest::new(2, Priority::Critical, 10, Location::new(0.0, 0.02)),
///     DeliveryRequest::new(3, Priority::Critical, 20, Location::new(0.0, 0.03)),
/// ];
/// assert_eq!(priority_scan_order(&requests), vec![3, 2, 1]);
/// ```
pub fn priority_scan_order(requests: &[DeliveryRequest]) -> Vec<usize> {
    let mut order: Vec<usize> = requests.iter().map(|r| r.id()).collect();
    order.sort_by(|&a, &b| {
        let ra = &requests[a - 1];
        let rb = &requests[b - 1];
        ra.priority()
            .cmp(&rb.priority())
            .then(rb.demand().cmp(&ra.demand()))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Priority};

    fn request(id: usize, priority: Priority, demand: i32) -> DeliveryRequest {
        DeliveryRequest::new(id, priority, demand, Location::new(0.0, id as f64 * 0.01))
    }

    #[test]
    fn test_orders_by_tier_first() {
        let requests = vec![
            request(1, Priority::Low, 50),
            request(2, Priority::Moderate, 10),
            request(3, Priority::Critical, 5),
        ];
        assert_eq!(priority_scan_order(&requests), vec![3, 2, 1]);
    }

    #[test]
    fn test_larger_demand_first_within_tier() {
        let requests = vec![
            request(1, Priority::Moderate, 10),
            request(2, Priority::Moderate, 40),
            request(3, Priority::Moderate, 20),
        ];
        assert_eq!(priority_scan_order(&requests), vec![2, 3, 1]);
    }

    #[test]
    fn test_full_ties_keep_insertion_order() {
        let requests = vec![
            request(1, Priority::Critical, 10),
            request(2, Priority::Critical, 10),
            request(3, Priority::Critical, 10),
        ];
        assert_eq!(priority_scan_order(&requests), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty() {
        assert!(priority_scan_order(&[]).is_empty());
    }
}
