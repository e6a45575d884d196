//! Accuracy measurement for channel-wise comparisons
//!
//! Conversions are compared component by component as absolute
//! differences. Hue components are compared on the circle.

/// Statistics from a comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute difference across all components
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile absolute difference
    pub p95: f64,
    /// Number of components compared
    pub count: usize,
}

impl ErrorStats {
    /// Compute statistics from a list of absolute differences
    pub fn from_diffs(mut diffs: Vec<f64>) -> Self {
        if diffs.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        diffs.sort_by(|a, b| a.total_cmp(b));
        let count = diffs.len();
        let mean = diffs.iter().sum::<f64>() / count as f64;
        let max = diffs[count - 1];
        let p95 = diffs[((count as f64 * 0.95) as usize).min(count - 1)];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check that every difference is below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max < tolerance
    }
}

/// Absolute difference between two hues in degrees, on the circle
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Compare two equally long lists of component arrays
pub fn compare_channels<const N: usize>(reference: &[[f64; N]], result: &[[f64; N]]) -> ErrorStats {
    assert_eq!(reference.len(), result.len(), "sample counts differ");

    let diffs = reference
        .iter()
        .zip(result.iter())
        .flat_map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()))
        .collect();

    ErrorStats::from_diffs(diffs)
}
