//! CIE Standard Illuminant White Points
//!
//! White points define the color of "white" for a given illuminant and are
//! needed to interpret or produce L*a*b* coordinates. They are specified
//! as CIE XYZ tristimulus values with Y = 1.0, for both the CIE 1931 2°
//! and the CIE 1964 10° standard observer.

use std::fmt;
use std::str::FromStr;

use crate::color::Xyz;
use crate::error::{Error, Result};

/// A white point reference
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitePoint {
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

/// CIE standard observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observer {
    /// CIE 1931 2° observer
    #[default]
    Deg2,
    /// CIE 1964 10° supplementary observer
    Deg10,
}

/// CIE standard illuminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// Incandescent / tungsten
    A,
    /// Direct sunlight at noon (obsolete)
    B,
    /// Average daylight (obsolete)
    C,
    /// Horizon light, ICC profile connection space
    D50,
    /// Mid-morning / mid-afternoon daylight
    D55,
    /// Noon daylight, sRGB reference
    D65,
    /// North sky daylight
    D75,
    /// Equal energy
    E,
    /// Daylight fluorescent
    F1,
    /// Cool white fluorescent
    F2,
    /// White fluorescent
    F3,
    /// Warm white fluorescent
    F4,
    /// Daylight fluorescent
    F5,
    /// Lite white fluorescent
    F6,
    /// D65 simulator, daylight simulator
    F7,
    /// D50 simulator, Sylvania F40 Design 50
    F8,
    /// Cool white deluxe fluorescent
    F9,
    /// Philips TL85, Ultralume 50
    F10,
    /// Philips TL84, Ultralume 40
    F11,
    /// Philips TL83, Ultralume 30
    F12,
}

impl Illuminant {
    /// Every illuminant in table order
    pub const ALL: [Illuminant; 20] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
    ];

    /// Canonical name, e.g. "D65"
    pub const fn name(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl WhitePoint {
    /// Create a white point from XYZ tristimulus values
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Look up a standard illuminant for an observer
    pub const fn standard(observer: Observer, illuminant: Illuminant) -> Self {
        let (x, z) = match observer {
            Observer::Deg2 => match illuminant {
                Illuminant::A => (1.09850, 0.35585),
                Illuminant::B => (0.99072, 0.85223),
                Illuminant::C => (0.98074, 1.18232),
                Illuminant::D50 => (0.96422, 0.82521),
                Illuminant::D55 => (0.95682, 0.92149),
                Illuminant::D65 => (0.95047, 1.08883),
                Illuminant::D75 => (0.94972, 1.22638),
                Illuminant::E => (1.00000, 1.00000),
                Illuminant::F1 => (0.92834, 1.03665),
                Illuminant::F2 => (0.99187, 0.67395),
                Illuminant::F3 => (1.03754, 0.49861),
                Illuminant::F4 => (1.09147, 0.38813),
                Illuminant::F5 => (0.90872, 0.98723),
                Illuminant::F6 => (0.97309, 0.60191),
                Illuminant::F7 => (0.95044, 1.08755),
                Illuminant::F8 => (0.96413, 0.82333),
                Illuminant::F9 => (1.00365, 0.67868),
                Illuminant::F10 => (0.96174, 0.81712),
                Illuminant::F11 => (1.00966, 0.64370),
                Illuminant::F12 => (1.08046, 0.39228),
            },
            Observer::Deg10 => match illuminant {
                Illuminant::A => (1.11144, 0.35200),
                Illuminant::B => (0.99178, 0.84349),
                Illuminant::C => (0.97285, 1.16145),
                Illuminant::D50 => (0.96720, 0.81427),
                Illuminant::D55 => (0.95799, 0.90926),
                Illuminant::D65 => (0.94811, 1.07304),
                Illuminant::D75 => (0.94416, 1.20641),
                Illuminant::E => (1.00000, 1.00000),
                Illuminant::F1 => (0.94791, 1.03191),
                Illuminant::F2 => (1.03280, 0.69026),
                Illuminant::F3 => (1.08968, 0.51965),
                Illuminant::F4 => (1.14961, 0.40963),
                Illuminant::F5 => (0.93369, 0.98636),
                Illuminant::F6 => (1.02148, 0.62074),
                Illuminant::F7 => (0.95792, 1.07687),
                Illuminant::F8 => (0.97115, 0.81135),
                Illuminant::F9 => (1.02116, 0.67826),
                Illuminant::F10 => (0.99001, 0.83134),
                Illuminant::F11 => (1.03866, 0.65627),
                Illuminant::F12 => (1.11428, 0.40353),
            },
        };
        Self::new(x, 1.0, z)
    }

    /// Find the standard illuminant with exactly these tristimulus values
    pub fn identify(&self) -> Option<(Observer, Illuminant)> {
        [Observer::Deg2, Observer::Deg10]
            .into_iter()
            .flat_map(|observer| Illuminant::ALL.map(|illuminant| (observer, illuminant)))
            .find(|&(observer, illuminant)| Self::standard(observer, illuminant) == *self)
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        DEFAULT_WHITE
    }
}

/// CIE Standard Illuminant D50, 2° observer
pub const D50: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::D50);

/// CIE Standard Illuminant D55, 2° observer
pub const D55: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::D55);

/// CIE Standard Illuminant D65, 2° observer
///
/// Standard white point for sRGB.
pub const D65: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::D65);

/// CIE Standard Illuminant D75, 2° observer
pub const D75: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::D75);

/// CIE Standard Illuminant A, 2° observer
pub const A: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::A);

/// CIE Standard Illuminant E, 2° observer
pub const E: WhitePoint = WhitePoint::standard(Observer::Deg2, Illuminant::E);

/// White reference used when none is given
pub const DEFAULT_WHITE: WhitePoint = D65;

/// Get a standard white point by name
///
/// Accepts an illuminant name, case-insensitive, optionally followed by
/// `/2` or `/10` to pick the observer (2° when omitted): `"d65"`,
/// `"D50/10"`, `"F11/2"`.
pub fn from_name(name: &str) -> Option<WhitePoint> {
    let name = name.trim();
    let (illuminant, observer) = match name.split_once('/') {
        Some((illuminant, "2")) => (illuminant, Observer::Deg2),
        Some((illuminant, "10")) => (illuminant, Observer::Deg10),
        Some(_) => return None,
        None => (name, Observer::Deg2),
    };

    Illuminant::ALL
        .into_iter()
        .find(|candidate| candidate.name().eq_ignore_ascii_case(illuminant))
        .map(|illuminant| WhitePoint::standard(observer, illuminant))
}

impl FromStr for WhitePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_name(s).ok_or_else(|| {
            tracing::debug!(name = s, "unknown white point");
            Error::UnknownWhitePoint(s.to_string())
        })
    }
}
