//! Application configuration.
//!
//! The base URL (and an optional bearer token) are read from the
//! environment once at startup and passed explicitly into `ApiClient`,
//! so the client itself carries no hidden global state.

use anyhow::{Context, Result};

/// Environment variable holding the API base URL, e.g. `https://api.example.edu`
const ENV_BASE_URL: &str = "SCHEDULE_API_BASE_URL";

/// Environment variable holding an optional bearer token
const ENV_ACCESS_TOKEN: &str = "SCHEDULE_API_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub access_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .with_context(|| format!("{} must be set", ENV_BASE_URL))?;
        let access_token = std::env::var(ENV_ACCESS_TOKEN)
            .ok()
            .filter(|token| !token.is_empty());

        Ok(Self {
            base_url,
            access_token,
        })
    }
}
