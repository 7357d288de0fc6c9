//! Candidate route pool population.
//!
//! Two phases: the direct request (with provider-side alternatives), then —
//! only when no direct candidate is hazard-free — a concurrent fan-out of
//! one request per detour waypoint. Individual call failures are absorbed
//! here and logged; the pool simply ends up with fewer candidates.

use futures::future::join_all;
use gosafe_core::detour::detour_waypoints;
use gosafe_core::models::{Coordinate, HazardReport, RouteCandidate, RouteSource};
use gosafe_core::provider::{ProviderError, ProviderRoute, RoutingProvider};
use gosafe_core::rules::SafetyRules;
use gosafe_core::scoring::ProximityScorer;
use std::time::Duration;
use tokio::time::timeout;

pub(crate) struct FetchOutcome {
    pub candidates: Vec<RouteCandidate>,
    pub calls_issued: usize,
    /// Calls that failed before reaching the provider at all
    pub connect_failures: usize,
}

impl FetchOutcome {
    fn record_failure(&mut self, err: &ProviderError) {
        if matches!(err, ProviderError::Request(_)) {
            self.connect_failures += 1;
        }
    }
}

/// Populate the candidate pool for one routing request.
///
/// Phase 1 fully resolves before the phase-2 decision, which needs the
/// minimum hazard score of the direct pool. Phase-2 requests are issued
/// concurrently and joined; they have no ordering among themselves. Every
/// call carries its own deadline, so one hung call costs its candidate,
/// not the request.
pub(crate) async fn fetch_candidates<P: RoutingProvider>(
    provider: &P,
    rules: &SafetyRules,
    start: Coordinate,
    end: Coordinate,
    hazards: &[HazardReport],
) -> FetchOutcome {
    let deadline = Duration::from_secs(rules.provider_timeout_secs);
    let mut outcome = FetchOutcome {
        candidates: Vec::new(),
        calls_issued: 0,
        connect_failures: 0,
    };

    outcome.calls_issued += 1;
    match call_provider(provider, start, end, &[], true, deadline).await {
        Ok(routes) => outcome
            .candidates
            .extend(routes.into_iter().map(|r| candidate(r, RouteSource::Direct))),
        Err(err) => {
            outcome.record_failure(&err);
            tracing::warn!(error = %err, "direct route fetch failed");
        }
    }

    // An empty direct pool gets the detour phase too: its minimum score is
    // unknowable, and detours are the only remaining chance of a route.
    let scorer = ProximityScorer::from_rules(rules);
    let min_hits = outcome
        .candidates
        .iter()
        .map(|c| scorer.hazard_hits(&c.polyline, hazards))
        .min();
    if min_hits == Some(0) {
        return outcome;
    }

    let waypoints = detour_waypoints(start, end, rules.detour_offset_deg);
    tracing::debug!(
        direct_candidates = outcome.candidates.len(),
        waypoints = waypoints.len(),
        "no safe direct candidate; fetching detours"
    );

    let fetches = waypoints.into_iter().map(|wp| async move {
        call_provider(provider, start, end, &[wp], false, deadline).await
    });

    for result in join_all(fetches).await {
        outcome.calls_issued += 1;
        match result {
            // Only the primary route of a detour response enters the pool
            Ok(routes) => {
                if let Some(first) = routes.into_iter().next() {
                    outcome.candidates.push(candidate(first, RouteSource::Detour));
                }
            }
            Err(err) => {
                outcome.record_failure(&err);
                tracing::warn!(error = %err, "detour route fetch failed");
            }
        }
    }

    outcome
}

fn candidate(route: ProviderRoute, source: RouteSource) -> RouteCandidate {
    RouteCandidate {
        polyline: route.polyline,
        distance_m: route.distance_m,
        duration_s: route.duration_s,
        source,
    }
}

async fn call_provider<P: RoutingProvider>(
    provider: &P,
    start: Coordinate,
    end: Coordinate,
    waypoints: &[Coordinate],
    want_alternatives: bool,
    deadline: Duration,
) -> Result<Vec<ProviderRoute>, ProviderError> {
    match timeout(
        deadline,
        provider.fetch_routes(start, end, waypoints, want_alternatives),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout),
    }
}
