//! YUV (PAL luma + chroma)

use crate::color::Rgb;
use crate::math::matrix::{RGB_TO_YUV, YUV_TO_RGB};

/// YUV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yuv {
    /// Luma (0 to 1)
    pub y: f64,
    /// Blue-difference chroma (-0.436 to 0.436)
    pub u: f64,
    /// Red-difference chroma (-0.615 to 0.615)
    pub v: f64,
}

impl Yuv {
    /// Create a new YUV color
    #[inline]
    pub const fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v }
    }

    /// Create YUV from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            y: arr[0],
            u: arr[1],
            v: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.y, self.u, self.v]
    }

    /// Check if approximately equal to another YUV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

/// Convert RGB to YUV
#[inline]
pub fn rgb_to_yuv(rgb: Rgb) -> Yuv {
    Yuv::from_array(RGB_TO_YUV * rgb.to_array())
}

/// Convert YUV to RGB
#[inline]
pub fn yuv_to_rgb(yuv: Yuv) -> Rgb {
    Rgb::from_array(YUV_TO_RGB * yuv.to_array())
}

impl From<[f64; 3]> for Yuv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Yuv> for [f64; 3] {
    fn from(yuv: Yuv) -> Self {
        yuv.to_array()
    }
}
