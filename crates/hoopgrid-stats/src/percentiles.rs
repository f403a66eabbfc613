/// Precomputed (percentile, value) pairs for a sample.
///
/// ```
/// use hoopgrid_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[50.0, 90.0, 99.0]);
/// assert_eq!(percentiles.get(50.0), Some(6.0));
/// assert_eq!(percentiles.get(99.0), Some(10.0));
/// assert_eq!(percentiles.get(25.0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Percentiles {
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Value at a precomputed percentile, or `None` if it was not requested.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| (*p - percentile).abs() < f64::EPSILON)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Nearest-rank percentile: the value at index `floor(n * p / 100)`, clamped
/// to the last element. `NaN` for an empty sample.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let idx = ((sorted_values.len() as f64 * percentile) / 100.0) as usize;
    sorted_values[idx.min(sorted_values.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_rank() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((compute_percentile(&values, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((compute_percentile(&values, 50.0) - 3.0).abs() < f64::EPSILON);
        assert!((compute_percentile(&values, 100.0) - 5.0).abs() < f64::EPSILON);
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let percentiles = Percentiles::new(&[9.0, 1.0, 5.0], &[0.0, 50.0]);
        assert_eq!(percentiles.iter().collect::<Vec<_>>(), [(0.0, 1.0), (50.0, 5.0)]);
    }
}
