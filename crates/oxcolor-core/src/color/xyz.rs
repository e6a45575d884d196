//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hub between RGB and L*a*b*. RGB input is
//! treated as sRGB: gamma-decoded per channel, then mapped through the
//! IEC 61966-2-1 D65 matrix.

use crate::color::Rgb;
use crate::math::matrix::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::math::{srgb_gamma_decode, srgb_gamma_encode};

/// CIE 1931 XYZ color coordinates
///
/// Y is relative luminance, normalized so that sRGB white has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

/// Convert sRGB to XYZ (D65)
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = rgb.map(srgb_gamma_decode);
    Xyz::from_array(SRGB_TO_XYZ * linear.to_array())
}

/// Convert XYZ (D65) to sRGB
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    Rgb::from_array(XYZ_TO_SRGB * xyz.to_array()).map(srgb_gamma_encode)
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
