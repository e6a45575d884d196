//! YIQ (NTSC luma + chroma)

use crate::color::Rgb;
use crate::math::matrix::{RGB_TO_YIQ, YIQ_TO_RGB};

/// YIQ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yiq {
    /// Luma (0 to 1)
    pub y: f64,
    /// In-phase chroma (about -0.5959 to 0.5959)
    pub i: f64,
    /// Quadrature chroma (about -0.5227 to 0.5227)
    pub q: f64,
}

impl Yiq {
    /// Create a new YIQ color
    #[inline]
    pub const fn new(y: f64, i: f64, q: f64) -> Self {
        Self { y, i, q }
    }

    /// Create YIQ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            y: arr[0],
            i: arr[1],
            q: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.y, self.i, self.q]
    }

    /// Check if approximately equal to another YIQ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.i - other.i).abs() < epsilon
            && (self.q - other.q).abs() < epsilon
    }
}

/// Convert RGB to YIQ
#[inline]
pub fn rgb_to_yiq(rgb: Rgb) -> Yiq {
    Yiq::from_array(RGB_TO_YIQ * rgb.to_array())
}

/// Convert YIQ to RGB
#[inline]
pub fn yiq_to_rgb(yiq: Yiq) -> Rgb {
    Rgb::from_array(YIQ_TO_RGB * yiq.to_array())
}

impl From<[f64; 3]> for Yiq {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Yiq> for [f64; 3] {
    fn from(yiq: Yiq) -> Self {
        yiq.to_array()
    }
}
