pub mod detour;
pub mod models;
pub mod provider;
pub mod reports;
pub mod rules;
pub mod scoring;
pub mod selection;
pub mod spatial;

pub use detour::detour_waypoints;
pub use models::{
    Coordinate, HazardCategory, HazardReport, RouteCandidate, RouteSelection, RouteSource,
    RouteVerdict, ScoredCandidate,
};
pub use provider::{ProviderError, ProviderRoute, RoutingProvider};
pub use reports::ReportStore;
pub use rules::SafetyRules;
pub use scoring::ProximityScorer;
pub use selection::{rank_candidates, select_route};
pub use spatial::degree_distance;
