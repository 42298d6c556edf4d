use serde::{Deserialize, Serialize};

const EARTH_RADIUS: f64 = 6_371_000.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let lat2 = other.lat.to_radians();
        let lng2 = other.lng.to_radians();

        let dlat = lat2 - lat1;
        let dlng = lng2 - lng1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(point: geo_types::Point) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance_zero_for_same_point() {
        let point = GeoPoint::new(43.0731, -89.4012);

        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn test_haversine_distance_is_symmetric() {
        let a = GeoPoint::new(43.0731, -89.4012);
        let b = GeoPoint::new(43.0766, -89.4125);

        let d1 = a.haversine_distance(&b);
        let d2 = b.haversine_distance(&a);

        assert!((d1 - d2).abs() < 1e-9);
        // Roughly a kilometer across downtown Madison
        assert!(d1 > 900.0 && d1 < 1100.0);
    }

    #[test]
    fn test_geo_types_conversion_keeps_axes() {
        let point = GeoPoint::new(50.85, 4.35);
        let converted: geo_types::Point = point.into();

        assert_eq!(converted.x(), 4.35);
        assert_eq!(converted.y(), 50.85);

        let back: GeoPoint = converted.into();
        assert_eq!(back, point);
    }
}
