//! Candidate ranking and final route selection.

use crate::models::{
    HazardReport, RouteCandidate, RouteSelection, RouteVerdict, ScoredCandidate,
};
use crate::rules::SafetyRules;
use crate::scoring::ProximityScorer;

/// Score and rank a candidate pool.
///
/// The order is total: hazard count ascending, then distance ascending
/// (`total_cmp`, so NaN distances cannot leave a candidate unranked).
/// Hazard avoidance strictly dominates distance.
pub fn rank_candidates(
    candidates: Vec<RouteCandidate>,
    hazards: &[HazardReport],
    rules: &SafetyRules,
) -> Vec<ScoredCandidate> {
    let scorer = ProximityScorer::from_rules(rules);
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| scorer.score(candidate, hazards))
        .collect();

    scored.sort_by(|a, b| {
        a.hazard_hit_count
            .cmp(&b.hazard_hit_count)
            .then(a.candidate.distance_m.total_cmp(&b.candidate.distance_m))
    });

    scored
}

/// Pick the best candidate and derive the final selection.
///
/// Returns `None` only for an empty pool; a winner that still passes near
/// hazards is a valid selection with a `Danger` verdict, not a failure.
pub fn select_route(
    candidates: Vec<RouteCandidate>,
    hazards: &[HazardReport],
    rules: &SafetyRules,
    request_seq: u64,
) -> Option<RouteSelection> {
    let mut ranked = rank_candidates(candidates, hazards, rules);
    if ranked.is_empty() {
        return None;
    }
    let winner = ranked.remove(0);

    let verdict = if winner.hazard_hit_count > 0 {
        RouteVerdict::Danger
    } else {
        RouteVerdict::Safe
    };

    let duration_s = plausible_duration(
        winner.candidate.distance_m,
        winner.candidate.duration_s,
        rules,
    );

    Some(RouteSelection {
        hazard_hit_count: winner.hazard_hit_count,
        candidate: winner.candidate,
        verdict,
        duration_s,
        request_seq,
    })
}

/// Correct provider durations that imply an implausible walking speed.
///
/// Providers occasionally return vehicular timing for foot profiles. A
/// non-positive duration implies an infinite speed and is corrected by the
/// same rule. Applied to the winning candidate only.
fn plausible_duration(distance_m: f64, duration_s: f64, rules: &SafetyRules) -> f64 {
    if distance_m / duration_s > rules.max_walking_speed_mps {
        distance_m / rules.fallback_walking_speed_mps
    } else {
        duration_s
    }
}
