//! Gradients and compositing
//!
//! All operations work on straight (non-premultiplied) RGB and alpha. The
//! results are not clamped.

use crate::color::Rgb;
use crate::math::lerp4;
use crate::value::Color;

impl Color {
    /// `steps` colors evenly spaced between this one and `target`
    ///
    /// Neither endpoint is included. Interpolation is linear in RGB and
    /// alpha.
    ///
    /// ```
    /// use oxcolor_core::Color;
    ///
    /// let steps = Color::from_rgb(1.0, 0.0, 0.0).gradient(&Color::from_rgb(0.0, 1.0, 0.0), 3);
    /// assert_eq!(steps.len(), 3);
    /// assert_eq!(steps[1], Color::from_rgb(0.5, 0.5, 0.0));
    /// ```
    pub fn gradient(&self, target: &Color, steps: usize) -> Vec<Color> {
        let from = self.rgba();
        let to = target.rgba();
        let denominator = (steps + 1) as f64;

        (1..=steps)
            .map(|n| {
                let [r, g, b, a] = lerp4(from, to, n as f64 / denominator);
                Color::new(Rgb::new(r, g, b), a, self.white_ref())
            })
            .collect()
    }

    /// Composite this color over `other`
    ///
    /// The combined alpha is `a1 + a2 - a1 * a2`. The source weight is the
    /// ratio of the two alphas, capped at 1; a transparent `other` leaves
    /// the source color untouched, and two transparent inputs yield
    /// `other`'s color.
    pub fn alpha_blend(&self, other: &Color) -> Color {
        let a1 = self.alpha();
        let a2 = other.alpha();
        let fa = a1 + a2 - a1 * a2;

        let sa = if fa == 0.0 {
            0.0
        } else if a2 == 0.0 {
            1.0
        } else {
            (a1 / a2).min(1.0)
        };
        let da = 1.0 - sa;

        let rgb = self.rgb() * sa + other.rgb() * da;
        Color::new(rgb, fa, self.white_ref())
    }

    /// Linear mix: `percent` of this color and `1 - percent` of `other`
    pub fn blend(&self, other: &Color, percent: f64) -> Color {
        let [r, g, b, a] = lerp4(other.rgba(), self.rgba(), percent);
        Color::new(Rgb::new(r, g, b), a, self.white_ref())
    }
}
