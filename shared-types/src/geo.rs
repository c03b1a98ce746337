use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is not a finite value in [-180, 180]")]
    Longitude(f64),
}

/// A validated WGS84 point. Both parts are finite and inside their ranges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(try_from = "RawLatLong")]
pub struct LatLong {
    lat: f64,
    long: f64,
}

#[derive(Deserialize)]
struct RawLatLong {
    lat: f64,
    long: f64,
}

impl TryFrom<RawLatLong> for LatLong {
    type Error = CoordinateError;

    fn try_from(raw: RawLatLong) -> Result<Self, Self::Error> {
        LatLong::new(raw.lat, raw.long)
    }
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !long.is_finite() || !(-180.0..=180.0).contains(&long) {
            return Err(CoordinateError::Longitude(long));
        }
        Ok(Self { lat, long })
    }

    /// Parses free-text input such as the recentre form fields.
    /// Anything that is not a finite, in-range number yields `None`.
    pub fn parse(lat: &str, long: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let long = long.trim().parse::<f64>().ok()?;
        Self::new(lat, long).ok()
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn long(&self) -> f64 {
        self.long
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(37.7749, -122.4194)]
    fn accepts_points_inside_the_ranges(#[case] lat: f64, #[case] long: f64) {
        let point = LatLong::new(lat, long).unwrap();
        assert_eq!(point.lat(), lat);
        assert_eq!(point.long(), long);
    }

    #[rstest]
    #[case(90.5, 0.0, CoordinateError::Latitude(90.5))]
    #[case(0.0, -180.5, CoordinateError::Longitude(-180.5))]
    #[case(f64::INFINITY, 0.0, CoordinateError::Latitude(f64::INFINITY))]
    fn rejects_points_outside_the_ranges(
        #[case] lat: f64,
        #[case] long: f64,
        #[case] expected: CoordinateError,
    ) {
        assert_eq!(LatLong::new(lat, long), Err(expected));
    }

    #[test]
    fn rejects_nan() {
        assert!(LatLong::new(f64::NAN, 0.0).is_err());
        assert!(LatLong::new(0.0, f64::NAN).is_err());
    }

    #[rstest]
    #[case("37.7749", "-122.4194", Some((37.7749, -122.4194)))]
    #[case(" 10 ", "10", Some((10.0, 10.0)))]
    #[case("abc", "-122", None)]
    #[case("", "", None)]
    #[case("12", "", None)]
    #[case("NaN", "0", None)]
    #[case("inf", "0", None)]
    #[case("91", "0", None)]
    fn parses_free_text(
        #[case] lat: &str,
        #[case] long: &str,
        #[case] expected: Option<(f64, f64)>,
    ) {
        let parsed = LatLong::parse(lat, long).map(|p| (p.lat(), p.long()));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn deserialization_validates_ranges() {
        let ok: LatLong = serde_json::from_str(r#"{"lat": 10.0, "long": 20.0}"#).unwrap();
        assert_eq!(ok, LatLong::new(10.0, 20.0).unwrap());

        let bad = serde_json::from_str::<LatLong>(r#"{"lat": 100.0, "long": 20.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn displays_four_decimals() {
        let point = LatLong::new(37.774_912, -122.419_41).unwrap();
        assert_eq!(point.to_string(), "37.7749, -122.4194");
    }
}
