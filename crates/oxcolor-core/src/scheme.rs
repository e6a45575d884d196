//! Harmony schemes and HSL adjustments
//!
//! Every derived color keeps the alpha and white reference of the color it
//! was derived from. Hue offsets are measured on either the RGB wheel or
//! the artist's RYB wheel, selected by [`HueMode`].

use crate::color::{Hsl, rgb_to_ryb_hue, rgb_to_websafe, ryb_to_rgb_hue};
use crate::math::normalize_degrees;
use crate::value::Color;

/// Default split for [`Color::triadic_scheme`], giving a regular triad
pub const DEFAULT_TRIAD_ANGLE: f64 = 120.0;

/// Default offset for [`Color::tetradic_scheme`]
pub const DEFAULT_TETRAD_ANGLE: f64 = 30.0;

/// Default offset for [`Color::analogous_scheme`]
pub const DEFAULT_ANALOGOUS_ANGLE: f64 = 30.0;

/// Which color wheel hue rotations are measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HueMode {
    /// Rotate the HSL hue directly
    Rgb,
    /// Rotate on the red-yellow-blue painter's wheel
    #[default]
    Ryb,
}

impl HueMode {
    /// Rotate an RGB-wheel hue by `degrees` measured on this wheel
    pub fn rotate(self, hue: f64, degrees: f64) -> f64 {
        match self {
            Self::Rgb => normalize_degrees(hue + degrees),
            Self::Ryb => ryb_to_rgb_hue(rgb_to_ryb_hue(hue) + degrees),
        }
    }
}

/// `x - min`, or `x + plus` when that would land within `thres` of zero
fn wrap(x: f64, min: f64, thres: f64, plus: f64) -> f64 {
    if x - min < thres { x + plus } else { x - min }
}

impl Color {
    fn with_rotated_hue(&self, hsl: Hsl, degrees: f64, mode: HueMode) -> Self {
        self.with_hsl(Hsl::new(mode.rotate(hsl.h, degrees), hsl.s, hsl.l))
    }

    /// Reduce HSL lightness by `level`, stopping at black
    pub fn darker(&self, level: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, hsl.s, (hsl.l - level).clamp(0.0, 1.0)))
    }

    /// Increase HSL lightness by `level`, stopping at white
    pub fn lighter(&self, level: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, hsl.s, (hsl.l + level).clamp(0.0, 1.0)))
    }

    /// Increase HSL saturation by `level`, capped at 1
    pub fn saturate(&self, level: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, (hsl.s + level).clamp(0.0, 1.0), hsl.l))
    }

    /// Reduce HSL saturation by `level`, floored at 0
    pub fn desaturate(&self, level: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, (hsl.s - level).clamp(0.0, 1.0), hsl.l))
    }

    /// The color opposite on the wheel
    pub fn complementary(&self, mode: HueMode) -> Self {
        self.with_rotated_hue(self.hsl(), 180.0, mode)
    }

    /// Two colors forming a triad, or a split complementary for angles
    /// above 120
    ///
    /// `angle` is the spread between the two results; values below 120
    /// are raised to 120.
    pub fn triadic_scheme(&self, angle: f64, mode: HueMode) -> (Self, Self) {
        let hsl = self.hsl();
        let half = angle.max(120.0) / 2.0;
        (
            self.with_rotated_hue(hsl, 180.0 - half, mode),
            self.with_rotated_hue(hsl, 180.0 + half, mode),
        )
    }

    /// Three colors forming a tetrad with this one
    ///
    /// With `angle == 0` the result is a square; larger angles pull the
    /// first and third hue toward this color.
    pub fn tetradic_scheme(&self, angle: f64, mode: HueMode) -> (Self, Self, Self) {
        let hsl = self.hsl();
        (
            self.with_rotated_hue(hsl, 90.0 - angle, mode),
            self.with_rotated_hue(hsl, 180.0, mode),
            self.with_rotated_hue(hsl, 270.0 - angle, mode),
        )
    }

    /// The two neighbors `angle` degrees either side of this color
    pub fn analogous_scheme(&self, angle: f64, mode: HueMode) -> (Self, Self) {
        let hsl = self.hsl();
        (
            self.with_rotated_hue(hsl, -angle, mode),
            self.with_rotated_hue(hsl, angle, mode),
        )
    }

    /// Four variations of this hue at different saturation and lightness
    pub fn monochrome_scheme(&self) -> [Self; 4] {
        let Hsl { h, s, l } = self.hsl();

        let s1 = wrap(s, 0.3, 0.1, 0.3);
        let l1 = wrap(l, 0.5, 0.2, 0.3);
        let l2 = wrap(l, 0.2, 0.2, 0.6);
        let l3 = (l + (1.0 - l) * 0.2).max(0.2);
        let l4 = wrap(l, 0.5, 0.2, 0.3);

        [
            self.with_hsl(Hsl::new(h, s1, l1)),
            self.with_hsl(Hsl::new(h, s, l2)),
            self.with_hsl(Hsl::new(h, s1, l3)),
            self.with_hsl(Hsl::new(h, s, l4)),
        ]
    }

    /// The two web-safe colors bracketing this one: nearest first
    pub fn websafe_dither(&self) -> (Self, Self) {
        (
            self.with_rgb(rgb_to_websafe(self.rgb(), false)),
            self.with_rgb(rgb_to_websafe(self.rgb(), true)),
        )
    }
}
