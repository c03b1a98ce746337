use reqwest::Client;
use serde::Deserialize;
use shared_types::{LatLong, RegionalWeather};

use super::{endpoint, ensure_success};
use crate::error::LookupError;

const SERVICE: &str = "open-meteo";

/// Keyless forecast API used for the dashboard's regional conditions.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    hourly: Option<Hourly>,
}

#[derive(Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

#[derive(Deserialize)]
struct Hourly {
    #[serde(default)]
    relativehumidity_2m: Vec<f64>,
}

impl OpenMeteo {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Current temperature plus the first hourly humidity sample.
    pub async fn current_conditions(&self, at: LatLong) -> Result<RegionalWeather, LookupError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "v1/forecast"))
            .query(&[("latitude", at.lat()), ("longitude", at.long())])
            .query(&[
                ("current_weather", "true"),
                ("hourly", "temperature_2m,relativehumidity_2m"),
            ])
            .send()
            .await?;
        let response = ensure_success(SERVICE, response).await?;

        let body: ForecastResponse = response.json().await?;
        let temperature_c = body
            .current_weather
            .map(|current| current.temperature)
            .ok_or(LookupError::MissingField("current_weather"))?;
        let humidity_pct = body
            .hourly
            .and_then(|hourly| hourly.relativehumidity_2m.first().copied())
            .ok_or(LookupError::MissingField("hourly.relativehumidity_2m"))?;

        Ok(RegionalWeather {
            temperature_c,
            humidity_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn point() -> LatLong {
        LatLong::new(37.7749, -122.4194).unwrap()
    }

    #[tokio::test]
    async fn reads_current_temperature_and_first_humidity() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/forecast")
                    .query_param("current_weather", "true")
                    .query_param_exists("latitude");
                then.status(200).json_body(json!({
                    "current_weather": { "temperature": 17.3, "windspeed": 9.1 },
                    "hourly": { "relativehumidity_2m": [71, 69, 66] }
                }));
            })
            .await;

        let service = OpenMeteo::new(Client::new(), server.base_url());
        let conditions = service.current_conditions(point()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(conditions.temperature_c, 17.3);
        assert_eq!(conditions.humidity_pct, 71.0);
        assert_eq!(conditions.reading().humidity, "71%");
    }

    #[tokio::test]
    async fn empty_hourly_series_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200).json_body(json!({
                    "current_weather": { "temperature": 17.3 },
                    "hourly": { "relativehumidity_2m": [] }
                }));
            })
            .await;

        let service = OpenMeteo::new(Client::new(), server.base_url());
        let err = service.current_conditions(point()).await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::MissingField("hourly.relativehumidity_2m")
        ));
    }
}
