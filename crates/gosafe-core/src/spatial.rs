//! Spatial math for hazard proximity and detour placement.
//!
//! Distances here are Euclidean in degree-space, not great-circle. That is
//! a deliberate city-scale approximation carried over from the proximity
//! threshold calibration: the safety constants in [`crate::rules`] are
//! expressed in the same degree-space, so swapping in haversine would
//! silently change what "near a hazard" means.

use crate::models::Coordinate;

/// Euclidean distance between two points in degree-space.
///
/// # Returns
/// `sqrt((lat1 - lat2)^2 + (lon1 - lon2)^2)` in decimal degrees
pub fn degree_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = a.latitude - b.latitude;
    let dlon = a.longitude - b.longitude;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Arithmetic midpoint of two coordinates.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate {
        latitude: (a.latitude + b.latitude) / 2.0,
        longitude: (a.longitude + b.longitude) / 2.0,
    }
}
