const METERS_PER_KM: f64 = 1_000.0;
const MINUTES_PER_HOUR: u64 = 60;

/// Display form of a distance: whole meters under a kilometer, otherwise
/// kilometers to one decimal.
pub fn format_distance(meters: f64) -> String {
    if meters < METERS_PER_KM {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / METERS_PER_KM)
    }
}

/// Display form of a duration in whole minutes: `45 min` or `2h 5m`.
pub fn format_duration(minutes: u64) -> String {
    if minutes < MINUTES_PER_HOUR {
        format!("{minutes} min")
    } else {
        format!(
            "{}h {}m",
            minutes / MINUTES_PER_HOUR,
            minutes % MINUTES_PER_HOUR
        )
    }
}
