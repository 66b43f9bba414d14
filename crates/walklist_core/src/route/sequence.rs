use crate::geo::location::{Locatable, Location};
use crate::geo::point::GeoPoint;

/// Greedy nearest-neighbor walk order starting from `start`.
///
/// The result is a permutation of the input: located stops are visited
/// nearest-first (ties go to the earliest stop in the current remaining
/// order), and unlocated stops are appended at the end in their original
/// relative order so the caller can still show them ("needs geocoding").
/// No backtracking and no optimality guarantee; O(n^2) in the located
/// count, which is fine at per-route scale (hundreds of stops). Callers
/// with much larger sets should pre-partition, e.g. by cut list.
#[walklist_derive::timer("sequence")]
pub fn sequence<T: Locatable>(stops: Vec<T>, start: GeoPoint) -> Vec<T> {
    let mut located: Vec<(GeoPoint, T)> = Vec::with_capacity(stops.len());
    let mut unlocated: Vec<T> = Vec::new();
    for stop in stops {
        match stop.location() {
            Location::Located(point) => located.push((point, stop)),
            Location::Unlocated => unlocated.push(stop),
        }
    }

    log::debug!(
        "sequence: stops={} located={} unlocated={}",
        located.len() + unlocated.len(),
        located.len(),
        unlocated.len()
    );

    let mut ordered = Vec::with_capacity(located.len() + unlocated.len());
    let mut current = start;
    while !located.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_dist = f64::INFINITY;
        for (idx, (point, _)) in located.iter().enumerate() {
            let d = current.dist(point);
            if d < nearest_dist {
                nearest_dist = d;
                nearest_idx = idx;
            }
        }

        let (point, stop) = located.remove(nearest_idx);
        current = point;
        ordered.push(stop);
    }

    ordered.extend(unlocated);
    ordered
}
