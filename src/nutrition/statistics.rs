//! Descriptive statistics over calorie densities

/// Summary of a set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// Average of the two middle values when `count` is even
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (N - 1); `None` for fewer than two values
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Compute statistics, or `None` for an empty input
    ///
    /// `sum` and `mean` accumulate in input order, so equal inputs in equal
    /// order always give identical results.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let sum: f64 = values.iter().sum();
        let mean = sum / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let std_dev = (count >= 2).then(|| {
            let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squared / (n - 1.0)).sqrt()
        });

        Some(Self {
            count,
            sum,
            mean,
            median,
            min: sorted[0],
            max: sorted[count - 1],
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_empty() {
        assert_eq!(DescriptiveStats::from_values(&[]), None);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::from_values(&[89.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, 89.0);
        assert_eq!(stats.mean, 89.0);
        assert_eq!(stats.median, 89.0);
        assert_eq!(stats.min, 89.0);
        assert_eq!(stats.max, 89.0);
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn test_two_values() {
        let stats = DescriptiveStats::from_values(&[52.0, 89.0]).unwrap();
        assert_eq!(stats.sum, 141.0);
        assert_eq!(stats.mean, 70.5);
        assert_eq!(stats.median, 70.5);
        assert!(approx(stats.std_dev.unwrap(), 26.163));
    }

    #[test]
    fn test_odd_count_median_unsorted_input() {
        let stats = DescriptiveStats::from_values(&[130.0, 52.0, 89.0]).unwrap();
        assert_eq!(stats.median, 89.0);
        assert_eq!(stats.min, 52.0);
        assert_eq!(stats.max, 130.0);
        // mean 90.333, squared deviations sum 3044.667, / 2 -> 1522.333
        assert!(approx(stats.std_dev.unwrap(), 39.017));
    }

    #[test]
    fn test_identical_values_have_zero_spread() {
        let stats = DescriptiveStats::from_values(&[40.0, 40.0, 40.0, 40.0]).unwrap();
        assert_eq!(stats.median, 40.0);
        assert_eq!(stats.std_dev, Some(0.0));
    }
}
