//! Routing provider contract.
//!
//! The engine never depends on a specific provider's wire format; anything
//! that can turn a start/end pair (plus optional interior waypoints) into
//! polylines with distance and duration can back it.

use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// One route as returned by a provider, before safety scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRoute {
    pub polyline: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// Failure of a single provider call.
///
/// These are recovered locally by the fetcher — an affected candidate is
/// dropped from the pool — and are never surfaced to callers individually.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Connection-level transport failure; the provider was never reached
    #[error("provider request failed: {0}")]
    Request(String),
    /// The provider answered with a non-success HTTP status
    #[error("provider returned status {0}")]
    Status(u16),
    /// The body could not be decoded, or carried an unknown result code
    #[error("provider response malformed: {0}")]
    Malformed(String),
    /// The provider answered that no route exists between the points
    #[error("provider found no route")]
    NoRoute,
    /// The call exceeded its deadline
    #[error("provider request timed out")]
    Timeout,
}

/// A source of walking routes.
///
/// `waypoints` are interior points the route must pass through, in order;
/// `want_alternatives` asks the provider for alternative routes where
/// supported. Implementations must be cheap to call concurrently.
pub trait RoutingProvider: Send + Sync {
    fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
        want_alternatives: bool,
    ) -> impl Future<Output = Result<Vec<ProviderRoute>, ProviderError>> + Send;
}
