use walklist_derive::New;

use crate::geo::location::Locatable;
use crate::geo::point::GeoPoint;

const WALKING_SPEED_MPS: f64 = 5_000.0 / 3_600.0;
const DWELL_SECONDS_PER_STOP: f64 = 180.0;

/// Sum of the legs between consecutive located stops, in meters.
/// Unlocated stops sit at the end of a route and contribute no legs.
pub fn total_distance<T: Locatable>(route: &[T]) -> f64 {
    let points: Vec<GeoPoint> = route.iter().filter_map(|s| s.location().point()).collect();
    points.windows(2).map(|pair| pair[0].dist(&pair[1])).sum()
}

/// Walk-time estimate in whole minutes: a fixed 5 km/h pace over the
/// route distance plus 3 minutes of dwell per stop. A deliberately crude
/// linear model, not a calibrated prediction.
pub fn estimated_minutes(total_distance_m: f64, stop_count: usize) -> u64 {
    let walk_seconds = total_distance_m / WALKING_SPEED_MPS;
    let dwell_seconds = stop_count as f64 * DWELL_SECONDS_PER_STOP;
    ((walk_seconds + dwell_seconds) / 60.0).round() as u64
}

/// An ordered walk list, as produced by [`crate::sequence`].
#[derive(Clone, Debug, Default, New)]
pub struct Route<T> {
    pub stops: Vec<T>,
}

impl<T: Locatable> Route<T> {
    pub fn total_distance_m(&self) -> f64 {
        total_distance(&self.stops)
    }

    pub fn metrics(&self) -> RouteMetrics {
        let stops = self.stops.len();
        let legs: Vec<f64> = {
            let points: Vec<GeoPoint> = self
                .stops
                .iter()
                .filter_map(|s| s.location().point())
                .collect();
            points.windows(2).map(|pair| pair[0].dist(&pair[1])).collect()
        };
        let located = self.stops.iter().filter(|s| s.location().is_located()).count();

        let total_m: f64 = legs.iter().sum();
        let longest_m = legs.iter().copied().fold(0.0_f64, f64::max);
        let average_m = if legs.is_empty() {
            0.0
        } else {
            total_m / legs.len() as f64
        };
        let minutes = estimated_minutes(total_m, stops);

        log::info!(
            "metrics: stops={stops} located={located} total_m={total_m:.0} longest_m={longest_m:.0} avg_m={average_m:.0} est_min={minutes}",
        );

        RouteMetrics {
            stops,
            located,
            total_m,
            longest_m,
            average_m,
            estimated_minutes: minutes,
        }
    }
}

#[derive(Clone, Debug, Default, New)]
pub struct RouteMetrics {
    pub stops: usize,
    pub located: usize,
    pub total_m: f64,
    pub longest_m: f64,
    pub average_m: f64,
    pub estimated_minutes: u64,
}
