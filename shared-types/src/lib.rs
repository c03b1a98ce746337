mod annotation;
mod geo;
mod profile;
mod zone;

pub use annotation::{Annotation, AnnotationId};
pub use geo::{CoordinateError, LatLong};
pub use profile::{
    sample_moisture, RegionalWeather, SiteProfile, SoilType, WeatherReading,
    FALLBACK_ZONE_NAME, UNAVAILABLE, UNKNOWN_LOCATION,
};
pub use zone::{ScoreError, ZoneId, ZoneRecord, ZoneStatus, MAX_SCORE};
