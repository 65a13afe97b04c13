use serde::{Deserialize, Serialize};

use crate::dataset::MeasurementRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Pm25,
    Co,
    Temp,
    Humidity,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Pm25 => "PM 2.5",
            Metric::Co => "CO",
            Metric::Temp => "Temperature",
            Metric::Humidity => "Humidity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pm25 => "µg/m³",
            Metric::Co => "ppm",
            Metric::Temp => "°F",
            Metric::Humidity => "%",
        }
    }

    pub fn value_of(&self, record: &MeasurementRecord) -> f64 {
        match self {
            Metric::Pm25 => f64::from(record.pm25),
            Metric::Co => record.co,
            Metric::Temp => f64::from(record.temp),
            Metric::Humidity => f64::from(record.humidity),
        }
    }
}
