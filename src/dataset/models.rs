//! Measurement record data models.
//!
//! A `MeasurementRecord` is one row of the raw data table: a single reading
//! taken at one location during one collection session.

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    Indoor,
    Outdoor,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Indoor => "INDOOR",
            Environment::Outdoor => "OUTDOOR",
        }
    }

    /// Case-insensitive parse of `INDOOR` / `OUTDOOR`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INDOOR" => Ok(Environment::Indoor),
            "OUTDOOR" => Ok(Environment::Outdoor),
            other => bail!("unknown indoor/outdoor value {other:?}"),
        }
    }
}

/// Photo attached to a reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    pub session_id: String,
    pub session_name: String,
    pub session_notes: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub indoor_outdoor: Environment,
    /// µg/m³
    pub pm25: u32,
    /// ppm, always rounded to hundredths
    pub co: f64,
    /// °F
    pub temp: i32,
    /// %, 0..=100
    pub humidity: u8,
    pub photos: Vec<Photo>,
}

impl MeasurementRecord {
    pub fn taken_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// `"lat, lng"` as shown in the location column and matched by search.
    pub fn coordinates_label(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    pub fn co_label(&self) -> String {
        format!("{:.2}", self.co)
    }
}

/// Unique session as listed in the session filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serializes clock times as `HH:MM`, which is how the table shows them.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}
