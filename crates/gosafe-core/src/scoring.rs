//! Hazard proximity scoring for route candidates.

use crate::models::{Coordinate, HazardReport, RouteCandidate, ScoredCandidate};
use crate::rules::SafetyRules;
use crate::spatial::degree_distance;

/// Scores route polylines against the hazard set.
///
/// The score is the number of distinct hazards the route passes near, not
/// the number of encroachment points: once any vertex of the polyline falls
/// within the threshold of a hazard, that hazard is counted once and the
/// scan moves on to the next hazard.
#[derive(Debug, Clone, Copy)]
pub struct ProximityScorer {
    /// Encroachment radius in degree-space
    pub safe_distance_threshold_deg: f64,
}

impl Default for ProximityScorer {
    fn default() -> Self {
        Self::from_rules(&SafetyRules::default())
    }
}

impl ProximityScorer {
    pub fn new(safe_distance_threshold_deg: f64) -> Self {
        Self {
            safe_distance_threshold_deg,
        }
    }

    pub fn from_rules(rules: &SafetyRules) -> Self {
        Self::new(rules.safe_distance_threshold_deg)
    }

    /// Count distinct hazards within the safety radius of the polyline.
    ///
    /// Pure function: recomputing on the same inputs yields the same value.
    pub fn hazard_hits(&self, polyline: &[Coordinate], hazards: &[HazardReport]) -> usize {
        let mut hits = 0;
        for hazard in hazards {
            for point in polyline {
                if degree_distance(*point, hazard.location) < self.safe_distance_threshold_deg {
                    hits += 1;
                    break;
                }
            }
        }
        hits
    }

    /// Score one candidate. Computed independently per candidate — scores
    /// are never shared between candidates, which may share no geometry.
    pub fn score(&self, candidate: RouteCandidate, hazards: &[HazardReport]) -> ScoredCandidate {
        let hazard_hit_count = self.hazard_hits(&candidate.polyline, hazards);
        ScoredCandidate {
            candidate,
            hazard_hit_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HazardCategory, RouteSource};
    use chrono::Utc;

    fn report(id: i64, latitude: f64, longitude: f64) -> HazardReport {
        HazardReport {
            id,
            location: Coordinate::new(latitude, longitude),
            category: HazardCategory::Danger,
            note: String::new(),
            owned_by_current_user: false,
            created_at: Utc::now(),
        }
    }

    fn straight_polyline() -> Vec<Coordinate> {
        (0..=10)
            .map(|i| Coordinate::new(44.10 + i as f64 * 0.001, 12.20))
            .collect()
    }

    #[test]
    fn empty_hazard_set_scores_zero() {
        let scorer = ProximityScorer::default();
        assert_eq!(scorer.hazard_hits(&straight_polyline(), &[]), 0);
    }

    #[test]
    fn hazard_on_path_counts_once_even_near_many_vertices() {
        // Vertices are 0.001 deg apart, threshold is 0.0012: a hazard on
        // the line is within the radius of several consecutive vertices but
        // must still be counted once.
        let scorer = ProximityScorer::default();
        let hazards = vec![report(1, 44.105, 12.20)];
        assert_eq!(scorer.hazard_hits(&straight_polyline(), &hazards), 1);
    }

    #[test]
    fn distinct_hazards_count_separately() {
        let scorer = ProximityScorer::default();
        let hazards = vec![report(1, 44.101, 12.20), report(2, 44.109, 12.20)];
        assert_eq!(scorer.hazard_hits(&straight_polyline(), &hazards), 2);
    }

    #[test]
    fn hazard_outside_threshold_is_ignored() {
        let scorer = ProximityScorer::default();
        // 0.002 deg east of the path, beyond the 0.0012 threshold
        let hazards = vec![report(1, 44.105, 12.202)];
        assert_eq!(scorer.hazard_hits(&straight_polyline(), &hazards), 0);
    }

    #[test]
    fn hazard_exactly_at_threshold_is_ignored() {
        // Strict less-than comparison: a hazard at exactly the threshold
        // distance does not count.
        let scorer = ProximityScorer::new(0.0012);
        let polyline = vec![Coordinate::new(44.10, 12.20)];
        let hazards = vec![report(1, 44.10, 12.20 + 0.0012)];
        assert_eq!(scorer.hazard_hits(&polyline, &hazards), 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = ProximityScorer::default();
        let polyline = straight_polyline();
        let hazards = vec![report(1, 44.105, 12.20), report(2, 44.20, 12.30)];
        let first = scorer.hazard_hits(&polyline, &hazards);
        let second = scorer.hazard_hits(&polyline, &hazards);
        assert_eq!(first, second);
    }

    #[test]
    fn candidates_are_scored_independently() {
        let scorer = ProximityScorer::default();
        let hazards = vec![report(1, 44.105, 12.20)];
        let near = RouteCandidate {
            polyline: straight_polyline(),
            distance_m: 1000.0,
            duration_s: 800.0,
            source: RouteSource::Direct,
        };
        let far = RouteCandidate {
            polyline: vec![Coordinate::new(44.10, 12.40), Coordinate::new(44.11, 12.40)],
            distance_m: 1500.0,
            duration_s: 1200.0,
            source: RouteSource::Detour,
        };
        assert_eq!(scorer.score(near, &hazards).hazard_hit_count, 1);
        assert_eq!(scorer.score(far, &hazards).hazard_hit_count, 0);
    }
}
