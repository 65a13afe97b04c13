use serde::Serialize;

use crate::analysis::{
    stats::{first_max_by, first_min_by},
    Metric,
};
use crate::dataset::MeasurementRecord;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub name: String,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub reading_count: usize,
}

/// Side-by-side averages of a metric per location.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub metric: Metric,
    pub label: &'static str,
    pub unit: &'static str,
    pub groups: Vec<GroupStats>,
    pub highest: Option<GroupStats>,
    pub lowest: Option<GroupStats>,
    /// Highest average minus lowest average.
    pub range: Option<f64>,
}

/// Groups in first-seen location order.
pub fn compare_locations<'a, I>(records: I, metric: Metric) -> Comparison
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        let value = metric.value_of(record);
        match groups.iter_mut().find(|(name, _)| *name == record.location) {
            Some((_, values)) => values.push(value),
            None => groups.push((record.location.clone(), vec![value])),
        }
    }

    let groups: Vec<GroupStats> = groups
        .into_iter()
        .map(|(name, values)| GroupStats {
            average: values.iter().sum::<f64>() / values.len() as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            reading_count: values.len(),
            name,
        })
        .collect();

    let highest = first_max_by(&groups, |g| g.average).cloned();
    let lowest = first_min_by(&groups, |g| g.average).cloned();
    let range = highest
        .as_ref()
        .zip(lowest.as_ref())
        .map(|(high, low)| high.average - low.average);

    Comparison {
        metric,
        label: metric.label(),
        unit: metric.unit(),
        groups,
        highest,
        lowest,
        range,
    }
}
