//! Priority-weighted nearest-neighbor route construction.
//!
//! # Algorithm
//!
//! Starting from the base, each step evaluates every unvisited candidate:
//! a candidate is feasible if its demand fits the remaining payload and the
//! detour plus the return leg to base stays within the battery range. Among
//! feasible candidates the one with the smallest *effective* distance wins,
//! where
//!
//! ```text
//! effective = d(current, candidate) / tier(candidate)
//! ```
//!
//! with the numeric priority tier (1..3) used directly as the divisor.
//! Ties keep the earliest candidate in the scan order. The step moves to
//! the winner and repeats until no feasible candidate remains.
//!
//! # Complexity
//!
//! O(n²) where n = number of candidates.

use log::trace;

use crate::distance::DistanceMatrix;
use crate::models::{DeliveryRequest, Drone, BASE_ID};

/// Builds one drone's route over the given candidates.
///
/// `candidates` are the available request ids in priority scan order (see
/// [`priority_scan_order`](super::priority_scan_order)); `requests` holds
/// all requests in id order. Returns the ordered stop ids; the base at both
/// ends is implicit and the return leg is not included in the cumulative
/// distance tracked here.
///
/// # Examples
///
/// ```
/// use skyroute::constructive::priority_nearest_neighbor;
/// use skyroute::distance::DistanceMatrix;
/// use skyroute::models::{DeliveryRequest, Drone, Location, Priority};
///
/// let requests = vec![
///     DeliveryRequest::new(1, Priority::Critical, 10, Location::new(0.0, 0.01)),
///     DeliveryRequest::new(2, Priority::Critical, 10, Location::new(0.0, 0.02)),
/// ];
/// let mut locations = vec![Location::new(0.0, 0.0)];
/// locations.extend(requests.iter().map(|r| r.location()));
/// let dm = DistanceMatrix::from_locations(&locations);
/// let drone = Drone::new(0, 1000.0, 100);
///
/// let stops = priority_nearest_neighbor(&[1, 2], &requests, &dm, &drone);
/// assert_eq!(stops, vec![1, 2]);
/// ```
pub fn priority_nearest_neighbor(
    candidates: &[usize],
    requests: &[DeliveryRequest],
    distances: &DistanceMatrix,
    drone: &Drone,
) -> Vec<usize> {
    let mut visited = vec![false; candidates.len()];
    let mut stops = Vec::new();
    let mut current = BASE_ID;
    let mut traveled = 0.0;
    let mut load: i32 = 0;

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &id) in candidates.iter().enumerate() {
            if visited[pos] {
                continue;
            }
            let request = &requests[id - 1];
            if load + request.demand() > drone.payload_capacity() {
                continue;
            }
            let leg = distances.get(current, id);
            if traveled + leg + distances.get(id, BASE_ID) > drone.battery_range() {
                continue;
            }
            let effective = leg / request.priority().weight();
            // Strict comparison keeps the earliest scan position on ties.
            if best.is_none() || effective < best.expect("checked is_none").1 {
                best = Some((pos, effective));
            }
        }

        match best {
            Some((pos, effective)) => {
                let id = candidates[pos];
                visited[pos] = true;
                traveled += distances.get(current, id);
                load += requests[id - 1].demand();
                stops.push(id);
                trace!(
                    "drone {}: picked request {} (effective {:.4}, traveled {:.3} km, load {})",
                    drone.id(),
                    id,
                    effective,
                    traveled,
                    load
                );
                current = id;
            }
            None => break,
        }
    }

    stops
}
