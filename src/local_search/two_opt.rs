//! Bounded intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of reversal endpoints (i, j) in the stop sequence —
//! excluding the implicit base endpoints and the final stop — compute the
//! edge change from reversing the segment [i..=j]:
//!
//! ```text
//! delta = d(prev_i, s[j]) + d(s[i], next_j) - d(prev_i, s[i]) - d(s[j], next_j)
//! ```
//!
//! A negative delta only nominates the reversal: the candidate's full
//! round-trip distance is recomputed and the reversal is accepted when that
//! distance improves on the current route *and* stays within the battery
//! range. A full pass with no acceptance ends the search; otherwise a fixed
//! cap of [`MAX_PASSES`] passes bounds the cost, trading local optimality
//! for a constant number of O(n²) sweeps.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::BASE_ID;

/// Upper bound on full improvement passes per route.
pub const MAX_PASSES: usize = 5;

/// Applies bounded 2-opt improvement to a single route.
///
/// `stops` are ordered request ids with the base implicit at both ends.
/// Returns the improved stop sequence and its round-trip distance, which is
/// never worse than the input's.
///
/// # Examples
///
/// ```
/// use skyroute::distance::DistanceMatrix;
/// use skyroute::local_search::{route_distance, two_opt_improve};
/// use skyroute::models::Location;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 0.01),
///     Location::new(0.0, 0.02),
///     Location::new(0.0, 0.03),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
///
/// // Suboptimal order: 2, 1, 3
/// let (improved, dist) = two_opt_improve(&[2, 1, 3], &dm, 1000.0);
/// assert!(dist <= route_distance(&[2, 1, 3], &dm) + 1e-10);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn two_opt_improve(
    stops: &[usize],
    distances: &DistanceMatrix,
    battery_range: f64,
) -> (Vec<usize>, f64) {
    let n = stops.len();
    if n < 3 {
        // No reversal candidates: the final stop is never a reversal endpoint.
        return (stops.to_vec(), route_distance(stops, distances));
    }

    let mut current = stops.to_vec();
    let mut current_dist = route_distance(&current, distances);

    for _ in 0..MAX_PASSES {
        let mut improved = false;

        for i in 0..n - 2 {
            for j in (i + 1)..=(n - 2) {
                let prev_i = if i == 0 { BASE_ID } else { current[i - 1] };
                let next_j = current[j + 1];

                let old_cost = distances.get(prev_i, current[i]) + distances.get(current[j], next_j);
                let new_cost = distances.get(prev_i, current[j]) + distances.get(current[i], next_j);

                if new_cost - old_cost < -1e-10 {
                    let mut candidate = current.clone();
                    candidate[i..=j].reverse();
                    let candidate_dist = route_distance(&candidate, distances);
                    if candidate_dist < current_dist && candidate_dist <= battery_range {
                        current = candidate;
                        current_dist = candidate_dist;
                        improved = true;
                    }
                }
            }
        }

        if !improved {
            break;
        }
    }

    (current, current_dist)
}

/// Computes the round-trip distance `base → stops[0] → ... → stops[n-1] → base`.
pub fn route_distance(stops: &[usize], distances: &DistanceMatrix) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }
    let mut dist = distances.get(BASE_ID, stops[0]);
    for i in 0..stops.len() - 1 {
        dist += distances.get(stops[i], stops[i + 1]);
    }
    dist += distances.get(stops[stops.len() - 1], BASE_ID);
    dist
}
