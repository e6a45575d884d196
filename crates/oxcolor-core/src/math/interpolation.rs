//! Interpolation helpers
//!
//! - Linear interpolation (scalar and 4-component)
//! - Piecewise-linear lookup over evenly spaced breakpoints, and its inverse

/// Linear interpolation between two values
///
/// Returns a + t * (b - a) for t in [0, 1]
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Linear interpolation for 4-component vectors (RGBA)
#[inline]
pub fn lerp4(a: [f64; 4], b: [f64; 4], t: f64) -> [f64; 4] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

/// Evaluate a piecewise-linear function sampled every `step` units from 0
///
/// `table[i]` is the value at `i * step`. Inputs are expected in
/// `[0, step * (table.len() - 1)]`; anything outside is clamped to the
/// first or last segment.
pub fn piecewise_linear(table: &[f64], step: f64, x: f64) -> f64 {
    debug_assert!(table.len() >= 2);

    let last_segment = table.len() - 2;
    let position = x / step;
    let index = (position.floor().max(0.0) as usize).min(last_segment);
    let t = position - index as f64;

    lerp(table[index], table[index + 1], t)
}

/// Invert [`piecewise_linear`] for a strictly increasing table
///
/// Returns the `x` at which the function takes the value `y`, clamped to
/// the first or last segment like the forward lookup.
pub fn piecewise_linear_inverse(table: &[f64], step: f64, y: f64) -> f64 {
    debug_assert!(table.len() >= 2);

    let last_segment = table.len() - 2;
    let index = table[1..=last_segment]
        .iter()
        .take_while(|&&breakpoint| breakpoint <= y)
        .count();
    let (lo, hi) = (table[index], table[index + 1]);

    (index as f64 + (y - lo) / (hi - lo)) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 1.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < EPSILON);
        assert!((lerp(0.0, 1.0, 1.0) - 1.0).abs() < EPSILON);
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < EPSILON);
    }

    #[test]
    fn test_lerp4() {
        let mid = lerp4([1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0], 0.25);
        let expected = [0.75, 0.25, 0.0, 0.75];
        for (got, want) in mid.iter().zip(expected.iter()) {
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_piecewise_linear() {
        let table = [0.0, 10.0, 40.0];

        assert!((piecewise_linear(&table, 15.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((piecewise_linear(&table, 15.0, 7.5) - 5.0).abs() < EPSILON);
        assert!((piecewise_linear(&table, 15.0, 15.0) - 10.0).abs() < EPSILON);
        assert!((piecewise_linear(&table, 15.0, 22.5) - 25.0).abs() < EPSILON);
        // The final breakpoint is reachable without indexing past the end
        assert!((piecewise_linear(&table, 15.0, 30.0) - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_piecewise_linear_inverse() {
        let table = [0.0, 10.0, 40.0];

        assert!((piecewise_linear_inverse(&table, 15.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((piecewise_linear_inverse(&table, 15.0, 5.0) - 7.5).abs() < EPSILON);
        assert!((piecewise_linear_inverse(&table, 15.0, 10.0) - 15.0).abs() < EPSILON);
        assert!((piecewise_linear_inverse(&table, 15.0, 25.0) - 22.5).abs() < EPSILON);
        assert!((piecewise_linear_inverse(&table, 15.0, 40.0) - 30.0).abs() < EPSILON);

        for i in 0..=60 {
            let x = i as f64 * 0.5;
            let y = piecewise_linear(&table, 15.0, x);
            assert!((piecewise_linear_inverse(&table, 15.0, y) - x).abs() < EPSILON, "{}", x);
        }
    }
}
