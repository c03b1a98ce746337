use reqwest::Client;
use serde::Deserialize;
use shared_types::{LatLong, WeatherReading};
use tracing::debug;

use super::{endpoint, ensure_success, WeatherLookup};
use crate::error::LookupError;

const SERVICE: &str = "openweathermap";

/// OpenWeatherMap current-weather endpoint, queried in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct CurrentResponse {
    main: Option<MainBlock>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    humidity: Option<f64>,
}

impl OpenWeather {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }
}

impl WeatherLookup for OpenWeather {
    async fn current_weather(&self, at: LatLong) -> Result<WeatherReading, LookupError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LookupError::MissingApiKey(SERVICE))?;

        let response = self
            .client
            .get(endpoint(&self.base_url, "data/2.5/weather"))
            .query(&[("lat", at.lat()), ("lon", at.long())])
            .query(&[("appid", api_key), ("units", "metric")])
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;

        let body: CurrentResponse = response.json().await?;
        let main = body.main.ok_or(LookupError::MissingField("main"))?;
        let temp = main.temp.ok_or(LookupError::MissingField("main.temp"))?;
        let humidity = main
            .humidity
            .ok_or(LookupError::MissingField("main.humidity"))?;

        debug!(%at, temp, humidity, "current weather");
        Ok(WeatherReading::metric(temp, humidity))
    }
}
