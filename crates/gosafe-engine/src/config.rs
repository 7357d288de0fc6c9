//! Engine configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub osrm_url: String,
    pub osrm_profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            osrm_url: env::var("GOSAFE_OSRM_URL")
                .unwrap_or_else(|_| "https://router.project-osrm.org".to_string()),
            osrm_profile: env::var("GOSAFE_OSRM_PROFILE").unwrap_or_else(|_| "foot".to_string()),
        }
    }
}
