use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analysis::Metric;
use crate::dataset::MeasurementRecord;

pub const WEEK_DAYS: u32 = 7;
pub const MONTH_DAYS: u32 = 31;

/// Mean of one calendar day. `value` is `None` when nothing was recorded.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub reading_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub week: Vec<TrendPoint>,
    pub month: Vec<TrendPoint>,
}

/// One point per day for the `days` days ending at `end`, oldest first.
pub fn daily_series<'a, I>(records: I, metric: Metric, end: NaiveDate, days: u32) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    let mut totals: HashMap<NaiveDate, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.date).or_default();
        entry.0 += metric.value_of(record);
        entry.1 += 1;
    }

    (0..days)
        .rev()
        .map(|days_back| {
            let date = end - Duration::days(i64::from(days_back));
            let (sum, count) = totals.get(&date).copied().unwrap_or_default();
            TrendPoint {
                date,
                value: (count > 0).then(|| sum / count as f64),
                reading_count: count,
            }
        })
        .collect()
}

pub fn trend_report(records: &[&MeasurementRecord], metric: Metric, end: NaiveDate) -> TrendReport {
    TrendReport {
        metric,
        label: metric.label(),
        unit: metric.unit(),
        week: daily_series(records.iter().copied(), metric, end, WEEK_DAYS),
        month: daily_series(records.iter().copied(), metric, end, MONTH_DAYS),
    }
}
