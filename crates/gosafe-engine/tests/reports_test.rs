//! Report lifecycle flows through the engine API.

use gosafe_core::models::{Coordinate, HazardCategory, RouteVerdict};
use gosafe_core::provider::{ProviderError, ProviderRoute, RoutingProvider};
use gosafe_core::rules::SafetyRules;
use gosafe_engine::RouteEngine;

const START: Coordinate = Coordinate {
    latitude: 44.10,
    longitude: 12.20,
};
const END: Coordinate = Coordinate {
    latitude: 44.15,
    longitude: 12.25,
};

/// Provider that always answers with one fixed route through the midpoint.
struct FixedRouteProvider;

impl RoutingProvider for FixedRouteProvider {
    async fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        _waypoints: &[Coordinate],
        _want_alternatives: bool,
    ) -> Result<Vec<ProviderRoute>, ProviderError> {
        let mid = Coordinate::new(
            (start.latitude + end.latitude) / 2.0,
            (start.longitude + end.longitude) / 2.0,
        );
        Ok(vec![ProviderRoute {
            polyline: vec![start, mid, end],
            distance_m: 800.0,
            duration_s: 640.0,
        }])
    }
}

#[tokio::test]
async fn create_then_delete_clears_pending_undo() {
    let engine = RouteEngine::new(FixedRouteProvider);
    let report = engine.create_report(
        Coordinate::new(44.125, 12.225),
        HazardCategory::Danger,
        "",
    );

    assert!(engine.delete_report(report.id));
    assert!(engine.reports().is_empty());
    // The explicit delete consumed the undo slot.
    assert!(!engine.undo_last_report());
}

#[tokio::test]
async fn undo_within_window_reverts_the_creation() {
    let engine = RouteEngine::new(FixedRouteProvider);
    engine.create_report(Coordinate::new(44.125, 12.225), HazardCategory::Darkness, "");

    assert!(engine.undo_last_report());
    assert!(engine.reports().is_empty());
    assert!(!engine.undo_last_report());
}

#[tokio::test]
async fn expired_window_makes_undo_a_noop() {
    let rules = SafetyRules {
        undo_window_secs: 0,
        ..SafetyRules::default()
    };
    let engine = RouteEngine::with_rules(FixedRouteProvider, rules);
    engine.create_report(Coordinate::new(44.125, 12.225), HazardCategory::Weather, "");

    assert!(!engine.undo_last_report());
    assert_eq!(engine.reports().len(), 1);
}

#[tokio::test]
async fn routing_tracks_report_mutations() {
    let engine = RouteEngine::new(FixedRouteProvider);

    let clear = engine.request_route(START, END).await.unwrap();
    assert_eq!(clear.verdict, RouteVerdict::Safe);

    // A hazard on the only available path flips the verdict...
    let report = engine.create_report(
        Coordinate::new(44.125, 12.225),
        HazardCategory::Suspicious,
        "",
    );
    let flagged = engine.request_route(START, END).await.unwrap();
    assert_eq!(flagged.verdict, RouteVerdict::Danger);
    assert_eq!(flagged.hazard_hit_count, 1);

    // ...and deleting it flips it back.
    assert!(engine.delete_report(report.id));
    let cleared = engine.request_route(START, END).await.unwrap();
    assert_eq!(cleared.verdict, RouteVerdict::Safe);
}
