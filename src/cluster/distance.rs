use std::f64::consts::PI;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in meters
pub const EARTH_R: f64 = 6_371_000.0;

use super::point::Coordinate;

/// Calculates great-circle distance between two coordinates (haversine)
///
/// Symmetric, and zero for identical coordinates. No ellipsoidal
/// correction; the error is negligible at city scale. NaN input yields NaN.
///
/// # Returns
///
/// Distance in meters
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude * DEGREE_RAD;
    let lat2 = b.latitude * DEGREE_RAD;
    let d_lat = (b.latitude - a.latitude) * DEGREE_RAD;
    let d_lon = (b.longitude - a.longitude) * DEGREE_RAD;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_R * h.sqrt().min(1.0).asin()
}
