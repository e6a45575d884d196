//! Mathematical building blocks for color conversions
//!
//! - 3x3 matrix operations for the linear RGB↔XYZ/YIQ/YUV transforms
//! - sRGB transfer function
//! - Interpolation for gradients and hue-wheel remapping

pub mod gamma;
pub mod interpolation;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use interpolation::{lerp, lerp4, piecewise_linear, piecewise_linear_inverse};
pub use matrix::Matrix3x3;

/// Reduce an angle in degrees into [0, 360)
///
/// Unlike `%`, negative inputs wrap to the positive side.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}
