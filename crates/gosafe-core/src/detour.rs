//! Detour waypoint generation.
//!
//! When every direct candidate passes near a hazard, the engine nudges the
//! routing provider toward materially different streets by forcing one
//! extra waypoint per request. The waypoints sit around the midpoint of the
//! start/end line, offset along each compass axis; the provider still picks
//! the actual streets.

use crate::models::Coordinate;
use crate::spatial::midpoint;

/// Build the four detour waypoints for a start/end pair.
///
/// Deterministic: the same start/end (and offset) always yields the same
/// waypoints, in the same order (north, south, east, west of the midpoint).
pub fn detour_waypoints(start: Coordinate, end: Coordinate, offset_deg: f64) -> Vec<Coordinate> {
    let mid = midpoint(start, end);
    vec![
        Coordinate::new(mid.latitude + offset_deg, mid.longitude),
        Coordinate::new(mid.latitude - offset_deg, mid.longitude),
        Coordinate::new(mid.latitude, mid.longitude + offset_deg),
        Coordinate::new(mid.latitude, mid.longitude - offset_deg),
    ]
}
