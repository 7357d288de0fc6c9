//! Safety rules and thresholds for route selection.

use serde::{Deserialize, Serialize};

/// Configuration for safety-aware routing.
///
/// The degree-space constants pair with [`crate::spatial::degree_distance`];
/// they are tunables, not laws — the defaults reproduce the calibration the
/// engine was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyRules {
    /// A route vertex closer than this (degree-space) to a hazard counts
    /// the hazard against the route. ~130m at mid latitudes.
    pub safe_distance_threshold_deg: f64,
    /// How far from the start/end midpoint detour waypoints are placed
    /// (degree-space). ~150m at mid latitudes.
    pub detour_offset_deg: f64,
    /// Implied speeds above this are treated as vehicular timing leaking
    /// into a foot profile (m/s)
    pub max_walking_speed_mps: f64,
    /// Speed used to recompute an implausible duration (m/s, ~4.5 km/h)
    pub fallback_walking_speed_mps: f64,
    /// Deadline for each routing-provider call (seconds)
    pub provider_timeout_secs: u64,
    /// How long a freshly created report stays undoable (seconds)
    pub undo_window_secs: u64,
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self {
            safe_distance_threshold_deg: 0.0012,
            detour_offset_deg: 0.0015,
            max_walking_speed_mps: 1.5,
            fallback_walking_speed_mps: 1.25,
            provider_timeout_secs: 10,
            undo_window_secs: 3,
        }
    }
}
