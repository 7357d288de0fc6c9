//! OSRM route API HTTP client.

use gosafe_core::models::Coordinate;
use gosafe_core::provider::{ProviderError, ProviderRoute, RoutingProvider};
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Write as _;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";
const DEFAULT_PROFILE: &str = "foot";

/// HTTP client for an OSRM-compatible route service.
pub struct OsrmClient {
    client: Client,
    base_url: String,
    profile: String,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON positions: `[longitude, latitude]`
    coordinates: Vec<[f64; 2]>,
}

impl Default for OsrmClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_PROFILE)
    }
}

impl OsrmClient {
    /// Create a client against an OSRM base URL and routing profile
    /// (e.g. `foot`).
    pub fn new(base_url: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            profile: profile.into(),
        }
    }

    /// Build the `/route/v1` request URL. OSRM takes positions as
    /// `lon,lat` pairs separated by `;`, interior waypoints between start
    /// and end.
    fn route_url(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
        want_alternatives: bool,
    ) -> String {
        let mut url = format!(
            "{}/route/v1/{}/{},{}",
            self.base_url, self.profile, start.longitude, start.latitude
        );
        for wp in waypoints {
            let _ = write!(url, ";{},{}", wp.longitude, wp.latitude);
        }
        let _ = write!(url, ";{},{}", end.longitude, end.latitude);
        url.push_str("?overview=full&geometries=geojson");
        if want_alternatives {
            url.push_str("&alternatives=true");
        }
        url
    }
}

impl RoutingProvider for OsrmClient {
    async fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
        want_alternatives: bool,
    ) -> Result<Vec<ProviderRoute>, ProviderError> {
        let url = self.route_url(start, end, waypoints, want_alternatives);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ProviderError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let payload: OsrmResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Malformed(err.to_string()))?;

        match payload.code.as_str() {
            "Ok" => {}
            "NoRoute" => return Err(ProviderError::NoRoute),
            other => return Err(ProviderError::Malformed(format!("code {}", other))),
        }

        tracing::debug!(routes = payload.routes.len(), %url, "OSRM response");

        Ok(payload
            .routes
            .into_iter()
            .map(|route| ProviderRoute {
                polyline: route
                    .geometry
                    .coordinates
                    .iter()
                    .map(|c| Coordinate::new(c[1], c[0]))
                    .collect(),
                distance_m: route.distance,
                duration_s: route.duration,
            })
            .collect())
    }
}
