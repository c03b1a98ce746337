// External lookup services used during enrichment.
// Each service makes exactly one request per call and reports failures as
// `LookupError`; turning failures into sentinels is the client's job.

use std::future::Future;

use reqwest::Response;
use shared_types::{LatLong, WeatherReading};

use crate::error::LookupError;

pub mod nominatim;
pub mod open_meteo;
pub mod openweather;

pub use nominatim::Nominatim;
pub use open_meteo::OpenMeteo;
pub use openweather::OpenWeather;

/// Coordinate to human-readable place description.
pub trait PlaceLookup {
    fn reverse_geocode(
        &self,
        at: LatLong,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Coordinate to current temperature and humidity, metric units.
pub trait WeatherLookup {
    fn current_weather(
        &self,
        at: LatLong,
    ) -> impl Future<Output = Result<WeatherReading, LookupError>> + Send;
}

async fn ensure_success(service: &'static str, response: Response) -> Result<Response, LookupError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(LookupError::Status {
        service,
        status,
        body,
    })
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
