//! Hazard-aware pedestrian route selection engine.
//!
//! Callers feed in start/end coordinates; the engine fetches walking routes
//! from a [`gosafe_core::provider::RoutingProvider`], scores them against
//! the user-reported hazard set, fans out detour requests when every direct
//! candidate is unsafe, and returns the best compromise between safety and
//! directness together with a safe/danger verdict.

pub mod config;
pub mod engine;
pub mod error;
mod fetcher;

pub use config::Config;
pub use engine::RouteEngine;
pub use error::RouteError;
