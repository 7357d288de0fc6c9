//! Core data models for the routing engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
///
/// Coordinates are not range-validated; out-of-range input is caller error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Category of a user-submitted hazard report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardCategory {
    /// Generic danger
    Danger,
    /// Unlit street
    Darkness,
    /// Desolate area
    Desolate,
    /// Stray animals
    Stray,
    /// Suspicious individual
    Suspicious,
    /// Weather alert
    Weather,
}

/// A point hazard submitted by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardReport {
    /// Creation-timestamp-derived id, unique within one process
    pub id: i64,
    pub location: Coordinate,
    pub category: HazardCategory,
    #[serde(default)]
    pub note: String,
    pub owned_by_current_user: bool,
    pub created_at: DateTime<Utc>,
}

/// How a route candidate entered the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Returned for the plain start/end request (or one of its alternatives)
    Direct,
    /// Returned for a request forced through a detour waypoint
    Detour,
}

/// One concrete path returned by the routing provider.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub polyline: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
    pub source: RouteSource,
}

/// A candidate together with its hazard score.
///
/// Derived per routing request; never cached across candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: RouteCandidate,
    /// Number of distinct hazards the polyline passes near
    pub hazard_hit_count: usize,
}

/// Safety classification of the chosen route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteVerdict {
    Safe,
    /// Best available candidate still passes near at least one hazard
    Danger,
}

/// The final choice for one routing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSelection {
    pub candidate: RouteCandidate,
    pub hazard_hit_count: usize,
    pub verdict: RouteVerdict,
    /// Sanity-checked travel duration; may differ from the candidate's
    /// raw provider duration (see the walking-speed correction rule)
    pub duration_s: f64,
    /// Strictly increasing per engine; lets callers discard stale
    /// responses that resolve after a newer request
    pub request_seq: u64,
}
