use serde::Serialize;

use crate::analysis::{
    aqi,
    stats::{first_max_by, first_min_by},
    Metric,
};
use crate::dataset::{unique_locations, MeasurementRecord};

// SVG viewBox is 0 0 400 800 with Manhattan running top to bottom.
const ORIGIN_X: f64 = 100.0;
const ORIGIN_Y: f64 = 750.0;
const REF_LNG: f64 = -74.02;
const REF_LAT: f64 = 40.70;
const LNG_SCALE: f64 = 2000.0;
const LAT_SCALE: f64 = 4000.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SvgPoint {
    pub x: f64,
    pub y: f64,
}

/// Flat projection onto the dashboard's map SVG.
pub fn project(latitude: f64, longitude: f64) -> SvgPoint {
    SvgPoint {
        x: ORIGIN_X + (longitude - REF_LNG) * LNG_SCALE,
        y: ORIGIN_Y - (latitude - REF_LAT) * LAT_SCALE,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub position: SvgPoint,
    /// Mean of the metric over the station's readings.
    pub value: f64,
    pub reading_count: usize,
    /// AQI band color and label; PM2.5 only.
    pub color: Option<&'static str>,
    pub status: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatMap {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub stations: Vec<Station>,
    /// Mean of station values, rounded.
    pub city_average: Option<i64>,
    pub city_status: Option<&'static str>,
    pub best: Option<Station>,
    pub worst: Option<Station>,
}

/// One station per location, optionally restricted to a single session.
pub fn build_heat_map(
    records: &[MeasurementRecord],
    metric: Metric,
    session_id: Option<&str>,
) -> HeatMap {
    let selected: Vec<&MeasurementRecord> = records
        .iter()
        .filter(|record| session_id.map_or(true, |id| record.session_id == id))
        .collect();

    let names = unique_locations(records);
    let stations: Vec<Station> = names
        .iter()
        .filter_map(|name| {
            let readings: Vec<&&MeasurementRecord> =
                selected.iter().filter(|r| r.location == *name).collect();
            let first = readings.first()?;
            let value = readings.iter().map(|r| metric.value_of(r)).sum::<f64>()
                / readings.len() as f64;
            let band = (metric == Metric::Pm25).then(|| aqi::classify(value));

            Some(Station {
                location: name.clone(),
                latitude: first.latitude,
                longitude: first.longitude,
                position: project(first.latitude, first.longitude),
                value,
                reading_count: readings.len(),
                color: band.map(|b| b.color),
                status: band.map(|b| b.label),
            })
        })
        .collect();

    let city_average = (!stations.is_empty()).then(|| {
        let mean = stations.iter().map(|s| s.value).sum::<f64>() / stations.len() as f64;
        mean.round() as i64
    });
    let city_status = city_average
        .filter(|_| metric == Metric::Pm25)
        .map(|avg| aqi::classify(avg as f64).label);

    let best = first_min_by(&stations, |s| s.value).cloned();
    let worst = first_max_by(&stations, |s| s.value).cloned();

    HeatMap {
        metric,
        label: metric.label(),
        unit: metric.unit(),
        stations,
        city_average,
        city_status,
        best,
        worst,
    }
}

const ZOOM_MIN: f64 = 0.6;
const ZOOM_MAX: f64 = 2.0;
const ZOOM_STEP: f64 = 0.2;

/// Map zoom factor, kept on one decimal so repeated steps don't drift.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub fn level(&self) -> f64 {
        self.0
    }

    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.step(ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.step(-ZOOM_STEP)
    }

    pub fn reset(&mut self) {
        self.0 = 1.0;
    }

    fn step(&mut self, delta: f64) -> f64 {
        let next = ((self.0 + delta) * 10.0).round() / 10.0;
        self.0 = next.clamp(ZOOM_MIN, ZOOM_MAX);
        self.0
    }
}
