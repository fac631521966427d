//! Column statistics for the analysis table: min-max normalization,
//! population z-scores, and the [-1, 1] composite rescale. Missing
//! entries are excluded from every statistic and stay missing in the
//! output; they are never coerced to zero.

/// Min-max scale to [0, 1] over the present values. A constant column
/// maps every present value to 0.0 instead of dividing by zero.
pub fn min_max_normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let (min, max) = match present_min_max(values) {
        Some(bounds) => bounds,
        None => return vec![None; values.len()],
    };
    let range = max - min;

    values
        .iter()
        .map(|value| {
            value.map(|x| if range == 0.0 { 0.0 } else { (x - min) / range })
        })
        .collect()
}

/// Population z-scores (ddof = 0) over the present values. A constant
/// column scores every present value as 0.0.
pub fn z_scores(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return vec![None; values.len()];
    }

    let n = present.len() as f64;
    let mean = present.iter().sum::<f64>() / n;
    let variance = present.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    values
        .iter()
        .map(|value| {
            value.map(|x| if stddev == 0.0 { 0.0 } else { (x - mean) / stddev })
        })
        .collect()
}

/// Per-row sum across columns with strict missing-data propagation: a
/// row missing any component has a missing sum. Partial sums would
/// silently understate cells with incomplete data.
pub fn strict_row_sum(columns: &[Vec<Option<f64>>]) -> Vec<Option<f64>> {
    let rows = columns.first().map_or(0, Vec::len);
    debug_assert!(columns.iter().all(|c| c.len() == rows));

    (0..rows)
        .map(|row| columns.iter().map(|column| column[row]).sum::<Option<f64>>())
        .collect()
}

/// Rescale linearly to [-1, 1] using the column's global min and max:
/// `2 * (x - min) / (max - min) - 1`. A constant column rescales every
/// present value to 0.0 rather than propagating NaN.
pub fn rescale_symmetric(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let (min, max) = match present_min_max(values) {
        Some(bounds) => bounds,
        None => return vec![None; values.len()],
    };
    let range = max - min;

    values
        .iter()
        .map(|value| {
            value.map(|x| {
                if range == 0.0 {
                    0.0
                } else {
                    2.0 * (x - min) / range - 1.0
                }
            })
        })
        .collect()
}

fn present_min_max(values: &[Option<f64>]) -> Option<(f64, f64)> {
    values
        .iter()
        .flatten()
        .fold(None, |acc: Option<(f64, f64)>, &x| match acc {
            Some((min, max)) => Some((min.min(x), max.max(x))),
            None => Some((x, x)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|v| (v - b).abs() < 1e-9)
    }

    #[test]
    fn test_min_max_endpoints() {
        let normalized = min_max_normalize(&[Some(2.0), Some(4.0), Some(6.0)]);
        assert!(approx(normalized[0], 0.0));
        assert!(approx(normalized[1], 0.5));
        assert!(approx(normalized[2], 1.0));
    }

    #[test]
    fn test_min_max_ignores_missing() {
        let normalized = min_max_normalize(&[Some(1.0), None, Some(3.0)]);
        assert!(approx(normalized[0], 0.0));
        assert_eq!(normalized[1], None);
        assert!(approx(normalized[2], 1.0));
    }

    #[test]
    fn test_min_max_bounds_hold() {
        let values = [Some(-3.0), Some(7.5), None, Some(0.1), Some(2.2)];
        for v in min_max_normalize(&values).iter().flatten() {
            assert!((0.0..=1.0).contains(v));
        }
    }

    #[test]
    fn test_min_max_constant_column() {
        let normalized = min_max_normalize(&[Some(5.0), Some(5.0)]);
        assert!(approx(normalized[0], 0.0));
        assert!(approx(normalized[1], 0.0));
    }

    #[test]
    fn test_z_scores_population_statistics() {
        // mean 2, population stddev sqrt(2/3)
        let z = z_scores(&[Some(1.0), Some(2.0), Some(3.0)]);
        let expected = 1.0 / (2.0f64 / 3.0).sqrt();
        assert!(approx(z[0], -expected));
        assert!(approx(z[1], 0.0));
        assert!(approx(z[2], expected));
    }

    #[test]
    fn test_z_scores_skip_missing() {
        let z = z_scores(&[Some(1.0), None, Some(3.0)]);
        assert!(approx(z[0], -1.0));
        assert_eq!(z[1], None);
        assert!(approx(z[2], 1.0));
    }

    #[test]
    fn test_strict_sum_propagates_missing() {
        let columns = vec![
            vec![Some(1.0), Some(1.0)],
            vec![Some(2.0), None],
            vec![Some(3.0), Some(3.0)],
        ];
        let sums = strict_row_sum(&columns);
        assert!(approx(sums[0], 6.0));
        assert_eq!(sums[1], None);
    }

    #[test]
    fn test_rescale_symmetric_range_and_midpoint() {
        let rescaled = rescale_symmetric(&[Some(0.0), Some(5.0), Some(10.0)]);
        assert!(approx(rescaled[0], -1.0));
        assert!(approx(rescaled[1], 0.0)); // midpoint maps to exactly 0
        assert!(approx(rescaled[2], 1.0));

        for v in rescaled.iter().flatten() {
            assert!((-1.0..=1.0).contains(v));
        }
    }

    #[test]
    fn test_rescale_constant_column_emits_zero() {
        let rescaled = rescale_symmetric(&[Some(4.2), Some(4.2)]);
        assert!(approx(rescaled[0], 0.0));
        assert!(approx(rescaled[1], 0.0));
    }

    #[test]
    fn test_all_missing_column() {
        let empty = [None, None];
        assert_eq!(min_max_normalize(&empty), vec![None, None]);
        assert_eq!(z_scores(&empty), vec![None, None]);
        assert_eq!(rescale_symmetric(&empty), vec![None, None]);
    }
}
