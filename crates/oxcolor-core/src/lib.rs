//! # oxcolor - Immutable Color Values
//!
//! One [`Color`] type, viewable in every common color model and usable as
//! the base for derived colors.
//!
//! ## Features
//!
//! - **Conversions**: RGB, HSL, HSV, YIQ, YUV, CIE XYZ, CIE L*a*b*, CMY,
//!   CMYK, HTML hex (with CSS color names) and packed `0xBBGGRR` integers
//! - **White points**: CIE illuminants A through F12 for the 2° and 10°
//!   observers, used as the L*a*b* reference
//! - **Derived colors**: complementary, triadic, tetradic, analogous and
//!   monochrome schemes on the RGB or RYB wheel; lighten, darken, saturate;
//!   gradients, alpha compositing, linear blends, web-safe dithering
//! - **Batch helpers**: slice conversions, optionally parallel
//!
//! Components are never clamped implicitly. [`Color::is_legal`] and
//! [`Color::nearest_legal`] check and fix the gamut.
//!
//! ## Quick Start
//!
//! ```
//! use oxcolor_core::{Color, HueMode};
//!
//! let orange: Color = "#ff8000".parse()?;
//! let hsl = orange.hsl();
//! assert!((hsl.h - 30.0).abs() < 0.5);
//!
//! let complement = orange.complementary(HueMode::Rgb);
//! assert_eq!(complement.to_hex()?, "#007fff");
//!
//! let lighter = orange.lighter(0.2);
//! assert!(lighter.hsl().l > hsl.l);
//! # Ok::<(), oxcolor_core::Error>(())
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for colors, coordinates and white
//!   points
//! - `parallel`: rayon-backed [`batch::par_convert`]

pub mod batch;
pub mod blend;
pub mod color;
pub mod error;
pub mod math;
pub mod scheme;
pub mod value;

pub use color::{
    Cmy, Cmyk, ColorSpace, Hsl, Hsv, Illuminant, Lab, Observer, Rgb, WhitePoint, Xyz, Yiq, Yuv,
};
pub use error::{Error, Result};
pub use scheme::HueMode;
pub use value::{Color, LabMode};

/// Version of oxcolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
