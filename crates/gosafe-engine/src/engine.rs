//! The public engine API.

use crate::config::Config;
use crate::error::RouteError;
use crate::fetcher;
use gosafe_core::models::{Coordinate, HazardCategory, HazardReport, RouteSelection};
use gosafe_core::provider::RoutingProvider;
use gosafe_core::reports::ReportStore;
use gosafe_core::rules::SafetyRules;
use gosafe_core::selection::select_route;
use gosafe_osrm::OsrmClient;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hazard-aware route selection engine.
///
/// Owns the hazard report collection and a routing provider; each routing
/// request scores a consistent snapshot of the reports, so store mutations
/// that land mid-request are picked up by the next request, never observed
/// partially by the current one.
pub struct RouteEngine<P: RoutingProvider> {
    provider: P,
    rules: SafetyRules,
    reports: ReportStore,
    request_seq: AtomicU64,
}

impl<P: RoutingProvider> RouteEngine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_rules(provider, SafetyRules::default())
    }

    pub fn with_rules(provider: P, rules: SafetyRules) -> Self {
        let reports = ReportStore::new(rules.undo_window_secs);
        Self {
            provider,
            rules,
            reports,
            request_seq: AtomicU64::new(0),
        }
    }

    /// Find the best walking route from `start` to `end`.
    ///
    /// A route that still passes near hazards is returned with a `Danger`
    /// verdict — that is a reportable outcome for the caller to display,
    /// not a failure. The selection's `request_seq` is strictly
    /// increasing: callers superseding an in-flight request must drop any
    /// selection carrying a lower sequence than the newest one they hold.
    pub async fn request_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteSelection, RouteError> {
        let request_seq = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let hazards = self.reports.snapshot();

        let outcome =
            fetcher::fetch_candidates(&self.provider, &self.rules, start, end, &hazards).await;
        let calls_issued = outcome.calls_issued;
        let connect_failures = outcome.connect_failures;

        let Some(selection) = select_route(outcome.candidates, &hazards, &self.rules, request_seq)
        else {
            return Err(if connect_failures == calls_issued {
                RouteError::ProviderUnavailable
            } else {
                RouteError::NoRouteFound
            });
        };

        tracing::info!(
            verdict = ?selection.verdict,
            hazard_hits = selection.hazard_hit_count,
            source = ?selection.candidate.source,
            distance_m = selection.candidate.distance_m,
            request_seq,
            "route selected"
        );
        Ok(selection)
    }

    /// Submit a hazard report at `location`.
    pub fn create_report(
        &self,
        location: Coordinate,
        category: HazardCategory,
        note: impl Into<String>,
    ) -> HazardReport {
        self.reports.create(location, category, note)
    }

    /// Revert the most recent report creation while its undo window is
    /// open. Returns `false` (no-op) otherwise.
    pub fn undo_last_report(&self) -> bool {
        self.reports.undo_last()
    }

    /// Remove a report by id. Returns `false` for an unknown id.
    pub fn delete_report(&self, id: i64) -> bool {
        self.reports.delete(id)
    }

    pub fn reports(&self) -> &ReportStore {
        &self.reports
    }

    pub fn rules(&self) -> &SafetyRules {
        &self.rules
    }
}

impl RouteEngine<OsrmClient> {
    /// Wire the engine to the OSRM service named by the environment.
    pub fn from_config(config: &Config) -> Self {
        Self::new(OsrmClient::new(
            config.osrm_url.as_str(),
            config.osrm_profile.as_str(),
        ))
    }
}
