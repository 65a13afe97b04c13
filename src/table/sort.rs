use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dataset::MeasurementRecord;

/// Sortable table column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Date,
    Time,
    SessionId,
    SessionName,
    SessionNotes,
    Location,
    Latitude,
    Longitude,
    IndoorOutdoor,
    Pm25,
    Co,
    Temp,
    Humidity,
}

enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    Owned(String),
}

impl SortKey {
    fn value<'a>(&self, record: &'a MeasurementRecord) -> SortValue<'a> {
        match self {
            SortKey::Date => SortValue::Owned(record.date.format("%Y-%m-%d").to_string()),
            SortKey::Time => SortValue::Owned(record.time.format("%H:%M").to_string()),
            SortKey::SessionId => SortValue::Text(&record.session_id),
            SortKey::SessionName => SortValue::Text(&record.session_name),
            SortKey::SessionNotes => SortValue::Text(&record.session_notes),
            SortKey::Location => SortValue::Text(&record.location),
            SortKey::IndoorOutdoor => SortValue::Text(record.indoor_outdoor.as_str()),
            SortKey::Latitude => SortValue::Number(record.latitude),
            SortKey::Longitude => SortValue::Number(record.longitude),
            SortKey::Pm25 => SortValue::Number(f64::from(record.pm25)),
            SortKey::Co => SortValue::Number(record.co),
            SortKey::Temp => SortValue::Number(f64::from(record.temp)),
            SortKey::Humidity => SortValue::Number(f64::from(record.humidity)),
        }
    }

    /// Ascending comparison of two records on this column.
    pub fn compare(&self, a: &MeasurementRecord, b: &MeasurementRecord) -> Ordering {
        match (self.value(a), self.value(b)) {
            (SortValue::Number(x), SortValue::Number(y)) => {
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (x, y) => x.as_text().cmp(y.as_text()),
        }
    }
}

impl SortValue<'_> {
    fn as_text(&self) -> &str {
        match self {
            SortValue::Text(text) => text,
            SortValue::Owned(text) => text,
            SortValue::Number(_) => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Column header click: the active ascending column flips to descending,
    /// anything else becomes the new ascending column.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = key;
    }

    pub fn apply(&self, records: &mut [&MeasurementRecord]) {
        records.sort_by(|a, b| {
            let ordering = self.key.compare(a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}
