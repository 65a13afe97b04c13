use serde::Serialize;

/// Descriptive statistics shown on the analysis cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Upper median: the value at index `n / 2` once sorted.
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// `None` for an empty sample.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let variance = sorted
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count as f64;
    let min = sorted[0];
    let max = sorted[count - 1];

    Some(Summary {
        count,
        mean,
        median: sorted[count / 2],
        min,
        max,
        range: max - min,
        std_dev: variance.sqrt(),
    })
}

/// Item with the smallest key. Ties keep the earliest item.
pub fn first_min_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    items.iter().fold(None, |best, item| match best {
        Some(current) if key(item) >= key(current) => Some(current),
        _ => Some(item),
    })
}

/// Item with the largest key. Ties keep the earliest item.
pub fn first_max_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    items.iter().fold(None, |best, item| match best {
        Some(current) if key(item) <= key(current) => Some(current),
        _ => Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_keep_the_first_of_a_tie() {
        let values = [("a", 4.0), ("b", 9.0), ("c", 1.0), ("d", 9.0), ("e", 1.0)];

        assert_eq!(first_max_by(&values, |v| v.1).unwrap().0, "b");
        assert_eq!(first_min_by(&values, |v| v.1).unwrap().0, "c");
        assert_eq!(first_max_by(&[] as &[(&str, f64)], |v| v.1), None);
    }

    #[test]
    fn empty_sample_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn odd_sample() {
        let summary = summarize(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.range, 4.0);
        assert!((summary.std_dev - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn even_sample_takes_upper_median() {
        let summary = summarize(&[10.0, 2.0, 4.0, 8.0]).unwrap();
        assert_eq!(summary.median, 8.0);
        assert_eq!(summary.mean, 6.0);
        assert!((summary.std_dev - 10.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn constant_sample_has_zero_spread() {
        let summary = summarize(&[7.0; 5]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.range, 0.0);
    }
}
