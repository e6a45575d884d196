//! sRGB transfer function
//!
//! Channels outside [0, 1] are not clamped: negative values stay on the
//! linear segment and values above 1 follow the power curve, so
//! out-of-gamut colors survive an XYZ round trip.

/// Encoded value below which the decode curve is linear
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value below which the encode curve is linear
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
