use reqwest::Client;
use serde::Deserialize;
use shared_types::LatLong;
use tracing::debug;

use super::{endpoint, ensure_success, PlaceLookup};
use crate::error::LookupError;

const SERVICE: &str = "nominatim";

/// OpenStreetMap reverse geocoder.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl Nominatim {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl PlaceLookup for Nominatim {
    async fn reverse_geocode(&self, at: LatLong) -> Result<String, LookupError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "reverse"))
            .query(&[("format", "json")])
            .query(&[("lat", at.lat()), ("lon", at.long())])
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;

        // Points with no address (open sea, say) come back 200 with an
        // `error` field and no `display_name`.
        let body: ReverseResponse = response.json().await?;
        let place = body
            .display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(LookupError::MissingField("display_name"))?;

        debug!(%at, %place, "reverse geocoded");
        Ok(place)
    }
}
