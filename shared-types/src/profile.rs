use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Place label used when reverse geocoding fails.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
/// Reading used when the weather lookup fails.
pub const UNAVAILABLE: &str = "N/A";
/// Zone name used when the place label carries nothing usable.
pub const FALLBACK_ZONE_NAME: &str = "New Field Zone";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clay,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Loamy,
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Silty,
    ];

    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Silty => "Silty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic soil moisture, uniform over [10, 90], shown as a whole percentage.
pub fn sample_moisture<R: Rng + ?Sized>(rng: &mut R) -> String {
    let moisture: f64 = rng.gen_range(10.0..=90.0);
    format!("{moisture:.0}%")
}

/// Display-ready temperature and humidity for a site.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub temperature: String,
    pub humidity: String,
}

impl WeatherReading {
    /// Temperature to one decimal and humidity to a whole percent. Ties round
    /// away from zero, so 24.25 reads "24.3°C".
    pub fn metric(temperature_c: f64, humidity_pct: f64) -> Self {
        let temperature_c = (temperature_c * 10.0).round() / 10.0;
        Self {
            temperature: format!("{temperature_c:.1}°C"),
            humidity: format!("{}%", humidity_pct.round() as i64),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            temperature: UNAVAILABLE.to_string(),
            humidity: UNAVAILABLE.to_string(),
        }
    }
}

/// Current conditions at the dashboard's reference site.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RegionalWeather {
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

impl RegionalWeather {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading::metric(self.temperature_c, self.humidity_pct)
    }
}

/// Everything known about an annotated point. Built once, never edited.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub place: String,
    pub temperature: String,
    pub humidity: String,
    pub moisture: String,
    pub soil_type: SoilType,
}

impl SiteProfile {
    /// Combines the looked-up parts with freshly sampled soil values.
    pub fn assemble<R: Rng + ?Sized>(place: String, weather: WeatherReading, rng: &mut R) -> Self {
        Self {
            place,
            temperature: weather.temperature,
            humidity: weather.humidity,
            moisture: sample_moisture(rng),
            soil_type: SoilType::sample(rng),
        }
    }

    /// Profile for a point where neither lookup produced anything.
    pub fn unavailable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::assemble(UNKNOWN_LOCATION.to_string(), WeatherReading::unavailable(), rng)
    }

    /// The text before the first comma of the place label, or
    /// [`FALLBACK_ZONE_NAME`] when the label is empty or the lookup sentinel.
    pub fn zone_name(&self) -> String {
        let place = self.place.trim();
        if place == UNKNOWN_LOCATION {
            return FALLBACK_ZONE_NAME.to_string();
        }
        match place.split(',').next().map(str::trim) {
            Some(head) if !head.is_empty() => head.to_string(),
            _ => FALLBACK_ZONE_NAME.to_string(),
        }
    }
}
