use crate::domain::Coordinate;

/// Arc-minutes in one degree; one arc-minute is one nautical mile.
const MINUTES_PER_DEGREE: f64 = 60.0;
/// Statute miles per nautical mile.
const MILES_PER_MINUTE: f64 = 1.1515;

/// Distance in statute miles between two points on a spherical earth.
///
/// Uses the spherical law of cosines:
/// - d = sin(lat1) * sin(lat2) + cos(lat1) * cos(lat2) * cos(lon1 - lon2)
/// - miles = degrees(acos(d)) * 60 * 1.1515
///
/// The cosine term is clamped before `acos`, so identical or nearly
/// identical points never produce NaN.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let theta = (a.longitude - b.longitude).to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos();
    let angle = cos_angle.clamp(-1.0, 1.0).acos();

    angle.to_degrees() * MINUTES_PER_DEGREE * MILES_PER_MINUTE
}
