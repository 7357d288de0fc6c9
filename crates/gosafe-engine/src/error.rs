//! Errors surfaced by the engine API.

use thiserror::Error;

/// Terminal failure of a routing request.
///
/// Individual provider call failures never appear here; they are absorbed
/// by the fetcher and only the total absence of candidates escalates.
/// An unsafe-but-routable result is not an error — it comes back as a
/// selection with a danger verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The candidate pool was empty after both fetch phases
    #[error("no walkable route found between the requested points")]
    NoRouteFound,
    /// Every issued call failed at the connection level; the provider was
    /// never reached at all
    #[error("routing provider unavailable")]
    ProviderUnavailable,
}
