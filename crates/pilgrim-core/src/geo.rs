//! Great-circle distance math.

use crate::models::GeoPoint;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance between two points in meters using the Haversine formula.
///
/// Always non-negative; zero when both points coincide.
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance between two points rounded to whole meters.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> i64 {
    haversine_m(a, b).round() as i64
}

/// Total length of a polyline in whole meters.
pub fn path_length_m(path: &[GeoPoint]) -> i64 {
    path.windows(2)
        .map(|pair| haversine_m(pair[0], pair[1]))
        .sum::<f64>()
        .round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_one_degree_latitude() {
        // ~111km between these points (1 degree latitude)
        let d = haversine_m(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111_194.0).abs() < 100.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(23.1828, 75.7682);
        assert_eq!(distance_m(p, p), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(23.1765, 75.7885);
        let b = GeoPoint::new(23.1890, 75.7664);
        assert_eq!(distance_m(a, b), distance_m(b, a));
        assert!(distance_m(a, b) > 0);
    }

    #[test]
    fn path_length_sums_legs() {
        let a = GeoPoint::new(23.18, 75.76);
        let b = GeoPoint::new(23.19, 75.76);
        let c = GeoPoint::new(23.19, 75.77);
        let total = path_length_m(&[a, b, c]);
        let legs = distance_m(a, b) + distance_m(b, c);
        assert!((total - legs).abs() <= 1);
    }
}
