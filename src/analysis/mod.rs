pub mod aqi;
pub mod comparison;
pub mod heatmap;
pub mod metric;
pub mod stats;
pub mod trend;

#[cfg(feature = "desktop")]
pub mod commands;

pub use comparison::{compare_locations, Comparison, GroupStats};
pub use heatmap::{build_heat_map, HeatMap, Zoom};
pub use metric::Metric;
pub use stats::{summarize, Summary};
pub use trend::{trend_report, TrendPoint, TrendReport};

use serde::Serialize;

use crate::dataset::MeasurementRecord;

/// Analysis view payload for one metric.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub summary: Option<Summary>,
    /// Only meaningful for PM2.5; empty otherwise.
    pub aqi_distribution: Vec<aqi::AqiBucket>,
}

pub fn metric_report<'a, I>(records: I, metric: Metric) -> MetricReport
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    let values: Vec<f64> = records.into_iter().map(|r| metric.value_of(r)).collect();
    let aqi_distribution = if metric == Metric::Pm25 {
        aqi::distribution(&values)
    } else {
        Vec::new()
    };

    MetricReport {
        metric,
        label: metric.label(),
        unit: metric.unit(),
        summary: summarize(&values),
        aqi_distribution,
    }
}
