//! Sample generation
//!
//! Reproducible sets of RGB triples for sweeps and parity checks.

use oxcolor_core::{Color, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample set types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// Regular grid with `n` levels per channel (n³ samples)
    Grid(usize),
    /// Uniform random samples from a seed: (seed, count)
    Random(u64, usize),
    /// Fully saturated hues at mid lightness, `n` samples
    HueRamp(usize),
    /// Neutral greys from black to white, `n` samples
    Greys(usize),
    /// Primaries, secondaries and a few edge-of-gamut mixes
    GamutBoundary,
}

/// Generate the samples of a pattern
pub fn generate_samples(pattern: SamplePattern) -> Vec<Rgb> {
    match pattern {
        SamplePattern::Grid(levels) => {
            let step = 1.0 / (levels.max(2) - 1) as f64;
            let mut out = Vec::with_capacity(levels.pow(3));
            for r in 0..levels {
                for g in 0..levels {
                    for b in 0..levels {
                        out.push(Rgb::new(r as f64 * step, g as f64 * step, b as f64 * step));
                    }
                }
            }
            out
        }
        SamplePattern::Random(seed, count) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        SamplePattern::HueRamp(count) => (0..count)
            .map(|i| Color::from_hsl(i as f64 * 360.0 / count as f64, 1.0, 0.5).rgb())
            .collect(),
        SamplePattern::Greys(count) => {
            let step = 1.0 / (count.max(2) - 1) as f64;
            (0..count)
                .map(|i| {
                    let v = i as f64 * step;
                    Rgb::new(v, v, v)
                })
                .collect()
        }
        SamplePattern::GamutBoundary => vec![
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
            Rgb::new(1.0, 1.0, 0.0),
            Rgb::new(1.0, 0.0, 1.0),
            Rgb::new(0.0, 1.0, 1.0),
            Rgb::new(1.0, 0.5, 0.0),
            Rgb::new(0.5, 0.0, 1.0),
        ],
    }
}

/// Seeded random colors with random alpha
pub fn random_colors(seed: u64, count: usize) -> Vec<Color> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Color::from_rgba(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// True when a sample has a well-defined hue
pub fn is_chromatic(rgb: &Rgb) -> bool {
    rgb.max_component() - rgb.min_component() > 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_and_range() {
        let samples = generate_samples(SamplePattern::Grid(5));
        assert_eq!(samples.len(), 125);
        assert!(samples.iter().all(|rgb| rgb.is_in_gamut()));
        assert_eq!(samples[0], Rgb::BLACK);
        assert!(samples[124].approx_eq(&Rgb::WHITE, 1e-12));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_samples(SamplePattern::Random(42, 10));
        let b = generate_samples(SamplePattern::Random(42, 10));
        assert_eq!(a, b);
        assert!(a.iter().all(|rgb| rgb.is_in_gamut()));
    }

    #[test]
    fn test_greys_are_achromatic() {
        let greys = generate_samples(SamplePattern::Greys(11));
        assert_eq!(greys.len(), 11);
        assert!(greys.iter().all(|rgb| !is_chromatic(rgb)));
    }
}
