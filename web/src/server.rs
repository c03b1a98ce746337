use leptos::prelude::*;
use leptos::server;
use shared_types::SiteProfile;

#[cfg(feature = "ssr")]
use shared_types::LatLong;

#[cfg(feature = "ssr")]
use crate::enrichment::get_services;

/// Looks up place and weather for a clicked point. Lookup failures are
/// already folded into sentinels, so this only errors on bad input or an
/// uninitialised server.
#[server]
pub async fn enrich_site(lat: f64, long: f64) -> Result<SiteProfile, ServerFnError> {
    let at = LatLong::new(lat, long).map_err(|e| ServerFnError::new(e.to_string()))?;
    let services = get_services()?;
    Ok(services.enrichment.enrich(at).await)
}

#[server]
pub async fn regional_weather() -> Result<Option<shared_types::RegionalWeather>, ServerFnError> {
    use crate::field::placement::INITIAL_CENTER;

    let (lat, long) = INITIAL_CENTER;
    let at = LatLong::new(lat, long).map_err(|e| ServerFnError::new(e.to_string()))?;
    let services = get_services()?;

    match services.regional.current_conditions(at).await {
        Ok(conditions) => Ok(Some(conditions)),
        Err(error) => {
            tracing::warn!(%at, %error, "regional weather lookup failed");
            Ok(None)
        }
    }
}
