use std::sync::OnceLock;

use leptos::prelude::ServerFnError;
use site_enrichment::{services::OpenMeteo, ConfigError, EnrichmentClient, EnrichmentConfig};

static SERVICES: OnceLock<SiteServices> = OnceLock::new();

pub struct SiteServices {
    pub enrichment: EnrichmentClient,
    pub regional: OpenMeteo,
}

pub fn init_services() -> Result<(), ConfigError> {
    let config = EnrichmentConfig::from_env();
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set, site weather will read N/A");
    }

    let enrichment = EnrichmentClient::from_config(&config)?;
    let regional = OpenMeteo::new(config.http_client()?, &config.open_meteo_url);

    if SERVICES
        .set(SiteServices {
            enrichment,
            regional,
        })
        .is_err()
    {
        tracing::warn!("enrichment services were already initialized");
    }
    Ok(())
}

pub fn get_services() -> Result<&'static SiteServices, ServerFnError> {
    SERVICES
        .get()
        .ok_or_else(|| ServerFnError::new("enrichment services not initialized"))
}
