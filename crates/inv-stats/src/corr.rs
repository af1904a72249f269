//! Pearson correlation matrix over the numeric columns of a frame.

use inv_table::Frame;
use serde::Serialize;

/// Pairwise Pearson correlation across numeric columns.
///
/// Symmetric; the diagonal is exactly 1.0 for any column with nonzero
/// variance. Entries that are undefined (zero variance, fewer than two
/// complete pairs) are 0.0 so the matrix serializes to JSON without NaN.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, one per matrix axis.
    pub columns: Vec<String>,
    /// Row-major correlation values, `columns.len()` squared.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Matrix dimension.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the matrix is empty (no numeric columns).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the correlation matrix of the frame's numeric columns.
///
/// Fewer than two numeric columns produce a degenerate (1×1 or empty)
/// matrix rather than an error. Each pair is computed over the rows where
/// both cells are non-null.
pub fn correlation_matrix(frame: &Frame) -> CorrelationMatrix {
    let numeric = frame.numeric_columns();
    let n = numeric.len();
    let columns: Vec<String> = numeric.iter().map(|c| c.name.clone()).collect();

    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        if variance(&numeric[i].present()) > 0.0 {
            values[i][i] = 1.0;
        }
        for j in (i + 1)..n {
            let r = pairwise_pearson(&numeric[i].values, &numeric[j].values);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (values.len() - 1) as f64
}

fn pairwise_pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let denom = (sxx * syy).sqrt();
    if !denom.is_finite() || denom == 0.0 {
        return 0.0;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use inv_table::Frame;

    use super::*;

    fn frame(rows: &[(&str, &str, &str)]) -> Frame {
        Frame::new(
            vec!["Item".into(), "Count".into(), "Value".into()],
            rows.iter()
                .map(|(a, b, c)| vec![a.to_string(), b.to_string(), c.to_string()])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn perfectly_linear_columns_correlate_to_one() {
        let f = frame(&[("a", "1", "10"), ("b", "2", "20"), ("c", "3", "30")]);
        let m = correlation_matrix(&f);
        assert_eq!(m.columns, vec!["Count", "Value"]);
        assert_relative_eq!(m.values[0][1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn anticorrelated_columns_hit_minus_one() {
        let f = frame(&[("a", "1", "30"), ("b", "2", "20"), ("c", "3", "10")]);
        let m = correlation_matrix(&f);
        assert_relative_eq!(m.values[0][1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let f = frame(&[("a", "1", "14"), ("b", "5", "2"), ("c", "3", "9"), ("d", "8", "4")]);
        let m = correlation_matrix(&f);
        for i in 0..m.len() {
            assert_relative_eq!(m.values[i][i], 1.0);
            for j in 0..m.len() {
                assert_relative_eq!(m.values[i][j], m.values[j][i]);
            }
        }
    }

    #[test]
    fn single_numeric_column_gives_one_by_one() {
        let f = Frame::new(
            vec!["Item".into(), "Count".into()],
            vec![
                vec!["a".into(), "1".into()],
                vec!["b".into(), "2".into()],
            ],
        )
        .unwrap();
        let m = correlation_matrix(&f);
        assert_eq!(m.len(), 1);
        assert_relative_eq!(m.values[0][0], 1.0);
    }

    #[test]
    fn no_numeric_columns_gives_empty_matrix() {
        let f = Frame::new(vec!["Item".into()], vec![vec!["a".into()]]).unwrap();
        let m = correlation_matrix(&f);
        assert!(m.is_empty());
        assert!(m.values.is_empty());
    }

    #[test]
    fn zero_variance_column_has_zero_entries() {
        let f = frame(&[("a", "5", "10"), ("b", "5", "20"), ("c", "5", "30")]);
        let m = correlation_matrix(&f);
        // Count never varies: its diagonal and cross terms are undefined → 0.
        assert_relative_eq!(m.values[0][0], 0.0);
        assert_relative_eq!(m.values[0][1], 0.0);
        assert_relative_eq!(m.values[1][1], 1.0);
    }

    #[test]
    fn pairs_with_nulls_are_dropped() {
        let f = frame(&[("a", "1", "10"), ("b", "", "99"), ("c", "2", "20"), ("d", "3", "30")]);
        let m = correlation_matrix(&f);
        // The null-Count row is excluded from the pair; the rest is linear.
        assert_relative_eq!(m.values[0][1], 1.0, epsilon = 1e-12);
    }
}
