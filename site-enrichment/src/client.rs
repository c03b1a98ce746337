use futures::future::join;
use rand::Rng;
use shared_types::{LatLong, SiteProfile, WeatherReading, UNKNOWN_LOCATION};
use tracing::warn;

use crate::{
    config::EnrichmentConfig,
    error::ConfigError,
    services::{Nominatim, OpenWeather, PlaceLookup, WeatherLookup},
};

/// Composite site lookup. [`EnrichmentClient::enrich`] always resolves to a
/// complete profile: each failed lookup is logged and replaced by its sentinel.
#[derive(Debug, Clone)]
pub struct EnrichmentClient<P = Nominatim, W = OpenWeather> {
    places: P,
    weather: W,
}

impl EnrichmentClient {
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, ConfigError> {
        let client = config.http_client()?;
        Ok(Self::new(
            Nominatim::new(client.clone(), &config.nominatim_url),
            OpenWeather::new(
                client,
                &config.openweather_url,
                config.openweather_api_key.clone(),
            ),
        ))
    }
}

impl<P: PlaceLookup, W: WeatherLookup> EnrichmentClient<P, W> {
    pub fn new(places: P, weather: W) -> Self {
        Self { places, weather }
    }

    pub async fn enrich(&self, at: LatLong) -> SiteProfile {
        let (place, weather) = self.lookup(at).await;
        SiteProfile::assemble(place, weather, &mut rand::thread_rng())
    }

    /// Same as [`EnrichmentClient::enrich`] with the soil values drawn from `rng`.
    pub async fn enrich_with<R: Rng + ?Sized>(&self, at: LatLong, rng: &mut R) -> SiteProfile {
        let (place, weather) = self.lookup(at).await;
        SiteProfile::assemble(place, weather, rng)
    }

    // Both requests are in flight together; neither failure short-circuits the other.
    async fn lookup(&self, at: LatLong) -> (String, WeatherReading) {
        let (place, weather) = join(
            self.places.reverse_geocode(at),
            self.weather.current_weather(at),
        )
        .await;

        let place = place.unwrap_or_else(|error| {
            warn!(%at, %error, "reverse geocoding failed");
            UNKNOWN_LOCATION.to_string()
        });
        let weather = weather.unwrap_or_else(|error| {
            warn!(%at, %error, "weather lookup failed");
            WeatherReading::unavailable()
        });

        (place, weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use httpmock::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;
    use shared_types::SoilType;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    struct SlowPlace {
        delay: Duration,
        result: Option<&'static str>,
    }

    impl PlaceLookup for SlowPlace {
        async fn reverse_geocode(&self, _at: LatLong) -> Result<String, LookupError> {
            sleep(self.delay).await;
            self.result
                .map(str::to_string)
                .ok_or(LookupError::MissingField("display_name"))
        }
    }

    struct SlowWeather {
        delay: Duration,
        result: Option<(f64, f64)>,
    }

    impl WeatherLookup for SlowWeather {
        async fn current_weather(&self, _at: LatLong) -> Result<WeatherReading, LookupError> {
            sleep(self.delay).await;
            self.result
                .map(|(temp, humidity)| WeatherReading::metric(temp, humidity))
                .ok_or(LookupError::MissingApiKey("test"))
        }
    }

    fn point() -> LatLong {
        LatLong::new(10.0, 10.0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn lookups_run_concurrently() {
        let client = EnrichmentClient::new(
            SlowPlace {
                delay: Duration::from_millis(300),
                result: Some("Kano, Nigeria"),
            },
            SlowWeather {
                delay: Duration::from_millis(300),
                result: Some((31.26, 40.0)),
            },
        );

        let started = Instant::now();
        let profile = client.enrich(point()).await;

        assert!(started.elapsed() < Duration::from_millis(600));
        assert_eq!(profile.place, "Kano, Nigeria");
        assert_eq!(profile.temperature, "31.3°C");
        assert_eq!(profile.humidity, "40%");
    }

    #[tokio::test(start_paused = true)]
    async fn one_failure_does_not_spoil_the_other() {
        let client = EnrichmentClient::new(
            SlowPlace {
                delay: Duration::ZERO,
                result: None,
            },
            SlowWeather {
                delay: Duration::from_millis(50),
                result: Some((18.0, 55.0)),
            },
        );

        let profile = client.enrich(point()).await;
        assert_eq!(profile.place, UNKNOWN_LOCATION);
        assert_eq!(profile.temperature, "18.0°C");
        assert_eq!(profile.humidity, "55%");
    }

    #[tokio::test]
    async fn both_failures_yield_the_sentinel_profile() {
        let client = EnrichmentClient::new(
            SlowPlace {
                delay: Duration::ZERO,
                result: None,
            },
            SlowWeather {
                delay: Duration::ZERO,
                result: None,
            },
        );

        let mut rng = StdRng::seed_from_u64(42);
        let profile = client.enrich_with(point(), &mut rng).await;

        assert_eq!(profile.place, "Unknown Location");
        assert_eq!(profile.temperature, "N/A");
        assert_eq!(profile.humidity, "N/A");
        assert!(profile.moisture.ends_with('%'));
        assert!(SoilType::ALL.contains(&profile.soil_type));
    }

    #[tokio::test]
    async fn seeded_rng_makes_soil_values_repeatable() {
        let client = EnrichmentClient::new(
            SlowPlace {
                delay: Duration::ZERO,
                result: Some("Davis"),
            },
            SlowWeather {
                delay: Duration::ZERO,
                result: None,
            },
        );

        let first = client
            .enrich_with(point(), &mut StdRng::seed_from_u64(9))
            .await;
        let second = client
            .enrich_with(point(), &mut StdRng::seed_from_u64(9))
            .await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn real_services_degrade_when_the_upstreams_fail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.any_request();
                then.status(503).body("unavailable");
            })
            .await;

        let config = EnrichmentConfig {
            nominatim_url: server.base_url(),
            openweather_url: server.base_url(),
            openweather_api_key: Some("KEY".into()),
            ..EnrichmentConfig::default()
        };
        let client = EnrichmentClient::from_config(&config).unwrap();
        let profile = client.enrich(point()).await;

        assert_eq!(profile.place, UNKNOWN_LOCATION);
        assert_eq!(profile.temperature, "N/A");
        assert_eq!(profile.humidity, "N/A");
    }

    #[tokio::test]
    async fn real_services_fill_in_the_profile() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/reverse");
                then.status(200)
                    .json_body(json!({ "display_name": "Woodland, Yolo County, California" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/data/2.5/weather");
                then.status(200)
                    .json_body(json!({ "main": { "temp": 29.94, "humidity": 33 } }));
            })
            .await;

        let config = EnrichmentConfig {
            nominatim_url: server.base_url(),
            openweather_url: server.base_url(),
            openweather_api_key: Some("KEY".into()),
            ..EnrichmentConfig::default()
        };
        let client = EnrichmentClient::from_config(&config).unwrap();
        let profile = client.enrich(point()).await;

        assert_eq!(profile.place, "Woodland, Yolo County, California");
        assert_eq!(profile.temperature, "29.9°C");
        assert_eq!(profile.humidity, "33%");
        assert_eq!(profile.zone_name(), "Woodland");
    }
}
