//! Color space types and conversions
//!
//! Every coordinate type converts to and from [`Rgb`], which is the hub:
//! - HSL, HSV (cylindrical RGB)
//! - YIQ, YUV (broadcast luma + chroma)
//! - CIE XYZ and CIELAB (device independent, relative to a white point)
//! - CMY, CMYK (subtractive)
//! - HTML hex text, named colors and packed integers
//!
//! The RYB hue wheel used by the harmony schemes lives in [`hue`].

pub mod cmy;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod hue;
pub mod lab;
pub mod named;
pub mod rgb;
pub mod space;
pub mod white_point;
pub mod xyz;
pub mod yiq;
pub mod yuv;

pub use cmy::{Cmy, Cmyk, cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, rgb_to_cmy};
pub use hex::{hex_to_rgb, packed_to_rgb, rgb_to_hex, rgb_to_packed};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use hue::{rgb_to_ryb_hue, ryb_to_rgb_hue};
pub use lab::{Lab, lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
pub use rgb::{Rgb, rgb_to_greyscale, rgb_to_websafe};
pub use space::ColorSpace;
pub use white_point::{D50, D55, D65, D75, DEFAULT_WHITE, Illuminant, Observer, WhitePoint};
pub use xyz::{Xyz, rgb_to_xyz, xyz_to_rgb};
pub use yiq::{Yiq, rgb_to_yiq, yiq_to_rgb};
pub use yuv::{Yuv, rgb_to_yuv, yuv_to_rgb};
