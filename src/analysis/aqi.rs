//! PM2.5 air quality index bands (EPA breakpoints, dashboard colors).

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AqiRange {
    /// Inclusive upper bound in µg/m³.
    pub max: f64,
    pub label: &'static str,
    pub color: &'static str,
}

pub static AQI_RANGES: [AqiRange; 5] = [
    AqiRange { max: 12.0, label: "Good", color: "#A7E8B1" },
    AqiRange { max: 35.0, label: "Moderate", color: "#FFF3B0" },
    AqiRange { max: 55.0, label: "Unhealthy (Sensitive)", color: "#FFD6A5" },
    AqiRange { max: 150.0, label: "Unhealthy", color: "#FFB8B8" },
    AqiRange { max: f64::INFINITY, label: "Very Unhealthy", color: "#DDA0DD" },
];

/// First band whose upper bound is at least `value`.
pub fn classify(value: f64) -> &'static AqiRange {
    AQI_RANGES
        .iter()
        .find(|range| value <= range.max)
        .unwrap_or(&AQI_RANGES[AQI_RANGES.len() - 1])
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AqiBucket {
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    /// 0..=100, zero when there are no values.
    pub percentage: f64,
}

/// How many values fall in each band, in band order.
pub fn distribution(values: &[f64]) -> Vec<AqiBucket> {
    let total = values.len();

    AQI_RANGES
        .iter()
        .map(|range| {
            let count = values
                .iter()
                .filter(|value| std::ptr::eq(classify(**value), range))
                .count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            };
            AqiBucket {
                label: range.label,
                color: range.color,
                count,
                percentage,
            }
        })
        .collect()
}
