use wayfinder_core::{geopoint::GeoPoint, travel_result::RouteSummary};

/// Straight-line estimate at a constant speed. No network involved; useful
/// as an offline fallback and in development.
pub fn straight_line_route(
    origin: GeoPoint,
    destination: GeoPoint,
    speed_kmh: f64,
) -> RouteSummary {
    let distance_meters = origin.haversine_distance(&destination);
    let speed_ms = speed_kmh / 3.6;
    let duration_seconds = distance_meters / speed_ms;

    RouteSummary {
        duration_seconds: duration_seconds.round() as u64,
        distance_meters: distance_meters.round() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_follows_speed() {
        let origin = GeoPoint::new(50.0, 4.0);
        let destination = GeoPoint::new(50.0, 4.1);

        let slow = straight_line_route(origin, destination, 5.0);
        let fast = straight_line_route(origin, destination, 50.0);

        assert_eq!(slow.distance_meters, fast.distance_meters);
        // Ten times the speed, a tenth of the time (up to rounding)
        let ratio = slow.duration_seconds as f64 / fast.duration_seconds as f64;
        assert!((ratio - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_zero_distance_for_same_point() {
        let point = GeoPoint::new(43.0731, -89.4012);
        let route = straight_line_route(point, point, 30.0);

        assert_eq!(route.distance_meters, 0);
        assert_eq!(route.duration_seconds, 0);
    }
}
