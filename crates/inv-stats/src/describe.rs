//! Per-column summary statistics.
//!
//! Matches the conventional "describe" contract for numeric columns:
//! count, mean, sample standard deviation, min, quartiles, max. Quartiles
//! use linear interpolation between order statistics.

use inv_table::Frame;
use serde::Serialize;

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of non-null values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (ddof = 1). `None` with fewer than two
    /// values, where it is undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Minimum.
    pub min: f64,
    /// First quartile.
    pub q25: f64,
    /// Median.
    pub q50: f64,
    /// Third quartile.
    pub q75: f64,
    /// Maximum.
    pub max: f64,
}

/// Summarize every numeric column of the frame.
///
/// Non-numeric columns are excluded; a frame with no numeric columns
/// produces an empty vec.
pub fn describe(frame: &Frame) -> Vec<ColumnSummary> {
    frame
        .numeric_columns()
        .into_iter()
        .filter_map(|col| {
            let mut values = col.present();
            if values.is_empty() {
                return None;
            }
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            let std = sample_std(&values, mean);

            Some(ColumnSummary {
                name: col.name,
                count,
                mean,
                std,
                min: values[0],
                q25: quantile(&values, 0.25),
                q50: quantile(&values, 0.50),
                q75: quantile(&values, 0.75),
                max: values[count - 1],
            })
        })
        .collect()
}

fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((ss / (n - 1) as f64).sqrt())
}

/// Quantile of sorted values with linear interpolation.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use inv_table::Frame;

    use super::*;

    fn frame(counts: &[&str]) -> Frame {
        let rows = counts.iter().map(|c| vec!["x".to_string(), c.to_string()]).collect();
        Frame::new(vec!["Item".into(), "Count".into()], rows).unwrap()
    }

    #[test]
    fn matches_hand_computed_quartiles() {
        // describe() of [1, 2, 3, 4]: q25 = 1.75, q50 = 2.5, q75 = 3.25.
        let summaries = describe(&frame(&["1", "2", "3", "4"]));
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.name, "Count");
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 2.5);
        assert_relative_eq!(s.std.unwrap(), 1.2909944487358056, epsilon = 1e-12);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.q25, 1.75);
        assert_relative_eq!(s.q50, 2.5);
        assert_relative_eq!(s.q75, 3.25);
        assert_relative_eq!(s.max, 4.0);
    }

    #[test]
    fn odd_length_median_is_exact() {
        let summaries = describe(&frame(&["10", "20", "30"]));
        assert_relative_eq!(summaries[0].q50, 20.0);
    }

    #[test]
    fn nulls_are_skipped() {
        let summaries = describe(&frame(&["5", "", "15"]));
        let s = &summaries[0];
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.mean, 10.0);
    }

    #[test]
    fn single_value_has_no_std() {
        let summaries = describe(&frame(&["42"]));
        let s = &summaries[0];
        assert_eq!(s.count, 1);
        assert!(s.std.is_none());
        assert_relative_eq!(s.q25, 42.0);
        assert_relative_eq!(s.q75, 42.0);
    }

    #[test]
    fn string_only_frame_has_no_summaries() {
        let f = Frame::new(
            vec!["Item".into()],
            vec![vec!["Widget".into()], vec!["Bolt".into()]],
        )
        .unwrap();
        assert!(describe(&f).is_empty());
    }
}
