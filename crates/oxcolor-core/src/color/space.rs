//! Color space identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A coordinate system a [`Color`](crate::Color) can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hsv,
    Yiq,
    Yuv,
    Xyz,
    Lab,
    Cmy,
    Cmyk,
}

impl ColorSpace {
    /// Every supported space
    pub const ALL: [ColorSpace; 9] = [
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Yiq,
        Self::Yuv,
        Self::Xyz,
        Self::Lab,
        Self::Cmy,
        Self::Cmyk,
    ];

    /// Lowercase mode string, e.g. "cmyk"
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Yiq => "yiq",
            Self::Yuv => "yuv",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Cmy => "cmy",
            Self::Cmyk => "cmyk",
        }
    }

    /// Number of coordinates, not counting alpha
    pub const fn component_count(&self) -> usize {
        match self {
            Self::Cmyk => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mode = s.trim();
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(mode))
            .ok_or_else(|| {
                tracing::debug!(mode = s, "unknown color space");
                Error::UnknownColorSpace(s.to_string())
            })
    }
}
