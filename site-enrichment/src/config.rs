use std::env;

use reqwest::Client;

use crate::error::ConfigError;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_OPEN_METEO_URL: &str = "https://api.open-meteo.com";

/// Endpoints and credentials for the external lookups.
///
/// Read from the environment by [`EnrichmentConfig::from_env`]; binaries load
/// a `.env` file first so local development needs no exported variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentConfig {
    pub nominatim_url: String,
    pub openweather_url: String,
    pub open_meteo_url: String,
    pub openweather_api_key: Option<String>,
    pub user_agent: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            openweather_url: DEFAULT_OPENWEATHER_URL.to_string(),
            open_meteo_url: DEFAULT_OPEN_METEO_URL.to_string(),
            openweather_api_key: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl EnrichmentConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            nominatim_url: non_empty("NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            openweather_url: non_empty("OPENWEATHER_URL").unwrap_or(defaults.openweather_url),
            open_meteo_url: non_empty("OPEN_METEO_URL").unwrap_or(defaults.open_meteo_url),
            openweather_api_key: non_empty("OPENWEATHER_API_KEY"),
            user_agent: non_empty("ENRICHMENT_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// One shared client for every service. No timeout is configured, so a
    /// stalled lookup stalls only the placement waiting on it.
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        Ok(Client::builder().user_agent(&self.user_agent).build()?)
    }
}
