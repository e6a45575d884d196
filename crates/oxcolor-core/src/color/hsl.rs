//! HSL (hue, saturation, lightness)
//!
//! Hue is in degrees [0, 360); saturation and lightness are in [0, 1].
//! Achromatic colors have no defined hue; conversions fix it at 0.

use crate::color::Rgb;
use crate::math::normalize_degrees;

/// HSL color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Lightness (0 to 1)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Create HSL from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            l: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

/// Hue in degrees from the channel holding the maximum
///
/// Shared by HSL and HSV: both place the hue in a sextant offset by 0, 2 or
/// 4 depending on which channel dominates. `d` must be non-zero.
pub(crate) fn hue_from_rgb(rgb: Rgb, max: f64, d: f64) -> f64 {
    let dr = (max - rgb.r) / d;
    let dg = (max - rgb.g) / d;
    let db = (max - rgb.b) / d;

    let h = if rgb.r == max {
        db - dg
    } else if rgb.g == max {
        2.0 + dr - db
    } else {
        4.0 + dg - dr
    };

    normalize_degrees(h * 60.0)
}

/// Convert RGB to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let min = rgb.min_component();
    let max = rgb.max_component();

    let l = (max + min) / 2.0;
    if min == max {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l < 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };

    Hsl::new(hue_from_rgb(rgb, max, d), s, l)
}

/// Convert HSL to RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    let n2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let n1 = 2.0 * l - n2;

    let h = h / 60.0;
    Rgb::new(
        hue_channel(n1, n2, h + 2.0),
        hue_channel(n1, n2, h),
        hue_channel(n1, n2, h - 2.0),
    )
}

/// One channel of the piecewise hue function, `h` in sextants
fn hue_channel(n1: f64, n2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(6.0);
    if h < 1.0 {
        n1 + (n2 - n1) * h
    } else if h < 3.0 {
        n2
    } else if h < 4.0 {
        n1 + (n2 - n1) * (4.0 - h)
    } else {
        n1
    }
}

impl From<[f64; 3]> for Hsl {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Hsl> for [f64; 3] {
    fn from(hsl: Hsl) -> Self {
        hsl.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_orange() {
        let hsl = rgb_to_hsl(Rgb::new(1.0, 0.5, 0.0));
        assert!(hsl.approx_eq(&Hsl::new(30.0, 1.0, 0.5), EPSILON), "{:?}", hsl);

        let rgb = hsl_to_rgb(Hsl::new(30.0, 1.0, 0.5));
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.5, 0.0), EPSILON), "{:?}", rgb);
    }

    #[test]
    fn test_achromatic_fixed_point() {
        for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(rgb_to_hsl(Rgb::new(v, v, v)), Hsl::new(0.0, 0.0, v));
        }
    }

    #[test]
    fn test_primaries() {
        assert!(rgb_to_hsl(Rgb::RED).approx_eq(&Hsl::new(0.0, 1.0, 0.5), EPSILON));
        assert!(rgb_to_hsl(Rgb::GREEN).approx_eq(&Hsl::new(120.0, 1.0, 0.5), EPSILON));
        assert!(rgb_to_hsl(Rgb::BLUE).approx_eq(&Hsl::new(240.0, 1.0, 0.5), EPSILON));
        // Magenta lands in the negative sextant and must wrap
        let magenta = rgb_to_hsl(Rgb::new(1.0, 0.0, 1.0));
        assert!(magenta.approx_eq(&Hsl::new(300.0, 1.0, 0.5), EPSILON), "{:?}", magenta);
    }

    #[test]
    fn test_hue_outside_range_wraps() {
        let a = hsl_to_rgb(Hsl::new(390.0, 1.0, 0.5));
        let b = hsl_to_rgb(Hsl::new(30.0, 1.0, 0.5));
        assert!(a.approx_eq(&b, EPSILON));

        let a = hsl_to_rgb(Hsl::new(-60.0, 1.0, 0.5));
        let b = hsl_to_rgb(Hsl::new(300.0, 1.0, 0.5));
        assert!(a.approx_eq(&b, EPSILON));
    }

    #[test]
    fn test_roundtrip_grid() {
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let rgb = Rgb::new(r as f64 / 10.0, g as f64 / 10.0, b as f64 / 10.0);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    assert!(back.approx_eq(&rgb, 1e-6), "{:?} -> {:?}", rgb, back);
                }
            }
        }
    }
}
