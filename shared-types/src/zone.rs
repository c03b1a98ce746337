use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("health score {0} is above 100")]
pub struct ScoreError(pub u8);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneStatus {
    Healthy,
    Moderate,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl ZoneStatus {
    /// `> 85` is healthy, `(70, 85]` moderate, everything else high risk.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s > 85 => ZoneStatus::Healthy,
            s if s > 70 => ZoneStatus::Moderate,
            _ => ZoneStatus::HighRisk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Healthy => "Healthy",
            ZoneStatus::Moderate => "Moderate",
            ZoneStatus::HighRisk => "High Risk",
        }
    }

    /// Wording for the zone detail panel.
    pub fn headline(&self) -> &'static str {
        match self {
            ZoneStatus::Healthy => "Optimal",
            other => other.label(),
        }
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dashboard zone. The status is never stored; it always follows the score,
/// which stays within `0..=MAX_SCORE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "RawZoneRecord")]
pub struct ZoneRecord {
    pub id: ZoneId,
    pub name: String,
    score: u8,
    pub temperature: String,
    pub humidity: String,
    pub moisture: String,
}

#[derive(Deserialize)]
struct RawZoneRecord {
    id: ZoneId,
    name: String,
    score: u8,
    temperature: String,
    humidity: String,
    moisture: String,
}

impl TryFrom<RawZoneRecord> for ZoneRecord {
    type Error = ScoreError;

    fn try_from(raw: RawZoneRecord) -> Result<Self, Self::Error> {
        if raw.score > MAX_SCORE {
            return Err(ScoreError(raw.score));
        }
        Ok(ZoneRecord::new(
            raw.id,
            raw.name,
            raw.score,
            raw.temperature,
            raw.humidity,
            raw.moisture,
        ))
    }
}

impl ZoneRecord {
    /// Scores above [`MAX_SCORE`] are capped.
    pub fn new(
        id: ZoneId,
        name: impl Into<String>,
        score: u8,
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        moisture: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            score: score.min(MAX_SCORE),
            temperature: temperature.into(),
            humidity: humidity.into(),
            moisture: moisture.into(),
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn status(&self) -> ZoneStatus {
        ZoneStatus::from_score(self.score)
    }
}
