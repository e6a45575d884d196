//! Subtractive CMY and CMYK
//!
//! Naive device-independent forms: CMY is the complement of RGB, CMYK pulls
//! the common grey component out into K. No ink model is involved.

use crate::color::Rgb;

/// CMY color coordinates (0 to 1)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmy {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
}

impl Cmy {
    /// Create a new CMY color
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64) -> Self {
        Self { c, m, y }
    }

    /// Create CMY from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            c: arr[0],
            m: arr[1],
            y: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.c, self.m, self.y]
    }

    /// Check if approximately equal to another CMY color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.c - other.c).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
    }
}

/// CMYK color coordinates (0 to 1)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

impl Cmyk {
    /// Create a new CMYK color
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Create CMYK from an array
    #[inline]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self {
            c: arr[0],
            m: arr[1],
            y: arr[2],
            k: arr[3],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.c - other.c).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }
}

/// Convert RGB to CMY
#[inline]
pub fn rgb_to_cmy(rgb: Rgb) -> Cmy {
    Cmy::new(1.0 - rgb.r, 1.0 - rgb.g, 1.0 - rgb.b)
}

/// Convert CMY to RGB
#[inline]
pub fn cmy_to_rgb(cmy: Cmy) -> Rgb {
    Rgb::new(1.0 - cmy.c, 1.0 - cmy.m, 1.0 - cmy.y)
}

/// Convert CMY to CMYK
///
/// Full black (`k == 1`) has no chromatic component and maps to
/// `(0, 0, 0, 1)`.
pub fn cmy_to_cmyk(cmy: Cmy) -> Cmyk {
    let k = cmy.c.min(cmy.m).min(cmy.y);
    if k == 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }

    let mk = 1.0 - k;
    Cmyk::new((cmy.c - k) / mk, (cmy.m - k) / mk, (cmy.y - k) / mk, k)
}

/// Convert CMYK to CMY
pub fn cmyk_to_cmy(cmyk: Cmyk) -> Cmy {
    let Cmyk { c, m, y, k } = cmyk;
    let mk = 1.0 - k;
    Cmy::new(c * mk + k, m * mk + k, y * mk + k)
}

impl From<[f64; 3]> for Cmy {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Cmy> for [f64; 3] {
    fn from(cmy: Cmy) -> Self {
        cmy.to_array()
    }
}

impl From<[f64; 4]> for Cmyk {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Cmyk> for [f64; 4] {
    fn from(cmyk: Cmyk) -> Self {
        cmyk.to_array()
    }
}
