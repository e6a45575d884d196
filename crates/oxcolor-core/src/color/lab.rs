//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Coordinates are always relative to a white reference. RGB conversions
//! go through [`Xyz`] and therefore assume sRGB primaries.

use crate::color::{Rgb, WhitePoint, Xyz, rgb_to_xyz, xyz_to_rgb};

/// Cube-root breakpoint of the forward function, (6/29)^3 rounded
const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment, (29/6)^2 / 3 rounded
const LAB_KAPPA_SLOPE: f64 = 7.787;
/// Offset of the linear segment
const LAB_OFFSET: f64 = 16.0 / 116.0;
/// Breakpoint of the inverse function, cube root of `LAB_EPSILON`
const LAB_INV_BREAK: f64 = 0.206893;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Convert XYZ to Lab relative to `white`
pub fn xyz_to_lab(xyz: Xyz, white: &WhitePoint) -> Lab {
    let fx = lab_f(xyz.x / white.xyz.x);
    let fy = lab_f(xyz.y / white.xyz.y);
    let fz = lab_f(xyz.z / white.xyz.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert Lab relative to `white` back to XYZ
pub fn lab_to_xyz(lab: Lab, white: &WhitePoint) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz::new(
        lab_f_inv(fx) * white.xyz.x,
        lab_f_inv(fy) * white.xyz.y,
        lab_f_inv(fz) * white.xyz.z,
    )
}

/// Convert sRGB to Lab relative to `white`
pub fn rgb_to_lab(rgb: Rgb, white: &WhitePoint) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb), white)
}

/// Convert Lab relative to `white` to sRGB
pub fn lab_to_rgb(lab: Lab, white: &WhitePoint) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab, white))
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_INV_BREAK {
        t * t * t
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
