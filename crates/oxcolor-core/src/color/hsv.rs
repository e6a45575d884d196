//! HSV (hue, saturation, value)

use crate::color::Rgb;
use crate::color::hsl::hue_from_rgb;

/// HSV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Value (0 to 1)
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Create HSV from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            v: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    /// Check if approximately equal to another HSV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

/// Convert RGB to HSV
///
/// Achromatic colors map to `(0, 0, v)`.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let v = rgb.max_component();
    let d = v - rgb.min_component();
    if d == 0.0 {
        return Hsv::new(0.0, 0.0, v);
    }

    Hsv::new(hue_from_rgb(rgb, v, d), d / v, v)
}

/// Convert HSV to RGB
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let h = (h / 60.0).rem_euclid(6.0);
    let i = h.floor();
    let mut f = h - i;
    // Even sextants ramp down instead of up
    if (i as u32) % 2 == 0 {
        f = 1.0 - f;
    }

    let m = v * (1.0 - s);
    let n = v * (1.0 - s * f);

    match i as u32 {
        0 => Rgb::new(v, n, m),
        1 => Rgb::new(n, v, m),
        2 => Rgb::new(m, v, n),
        3 => Rgb::new(m, n, v),
        4 => Rgb::new(n, m, v),
        _ => Rgb::new(v, m, n),
    }
}

impl From<[f64; 3]> for Hsv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Hsv> for [f64; 3] {
    fn from(hsv: Hsv) -> Self {
        hsv.to_array()
    }
}
