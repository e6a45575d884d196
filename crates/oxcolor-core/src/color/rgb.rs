//! RGB Color Primitives
//!
//! `Rgb` is the canonical representation every other space converts
//! through. Components are nominally in [0, 1] but are never clamped
//! implicitly.

use std::ops::{Add, Mul, Sub};

/// RGB color in floating-point (nominally 0.0-1.0)
///
/// `#[repr(C)]` so that slices can be viewed as flat `f64` buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Smallest component
    #[inline]
    pub fn min_component(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Largest component
    #[inline]
    pub fn max_component(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Apply a function to each component
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

/// Greyscale equivalent: the unweighted mean replicated to all channels
pub fn rgb_to_greyscale(rgb: Rgb) -> Rgb {
    let v = (rgb.r + rgb.g + rgb.b) / 3.0;
    Rgb::new(v, v, v)
}

/// Snap each channel to the 6-level web-safe palette
///
/// With `alt == false` the nearest level is chosen and exact ties go to the
/// upper level; with `alt == true` the other neighbor is chosen and ties go
/// to the lower level. Together the two results bracket the input, which is
/// what dithering needs.
pub fn rgb_to_websafe(rgb: Rgb, alt: bool) -> Rgb {
    rgb.map(|c| websafe_component(c, alt))
}

fn websafe_component(c: f64, alt: bool) -> f64 {
    // Work in percent so that 0.2 steps become multiples of 20. Scaling
    // leaves residue like 0.6 * 100 = 60.00000000000001, hence the slack.
    const SLACK: f64 = 1e-9;

    let sc = c * 100.0;
    let d = sc.rem_euclid(20.0);
    if d < SLACK || 20.0 - d < SLACK {
        return c;
    }

    let lower = sc - d;
    let upper = lower + 20.0;
    let upper_is_nearer = (sc - lower) >= (upper - sc);

    if upper_is_nearer != alt {
        upper / 100.0
    } else {
        lower / 100.0
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
