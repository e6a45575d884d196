//! The `Color` value type
//!
//! A [`Color`] stores sRGB channels, an alpha channel and the white
//! reference used for L*a*b* views. Every other representation is computed
//! on access. Values are never clamped implicitly; use
//! [`Color::is_legal`] and [`Color::nearest_legal`] to check and fix the
//! gamut.

use std::fmt;
use std::str::FromStr;

use crate::color::{
    Cmy, Cmyk, ColorSpace, DEFAULT_WHITE, Hsl, Hsv, Lab, Rgb, WhitePoint, Xyz, Yiq, Yuv,
    cmy_to_cmyk, cmy_to_rgb, cmyk_to_cmy, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, lab_to_rgb,
    packed_to_rgb, rgb_to_cmy, rgb_to_greyscale, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_lab,
    rgb_to_packed, rgb_to_websafe, rgb_to_xyz, rgb_to_yiq, rgb_to_yuv, xyz_to_rgb, yiq_to_rgb,
    yuv_to_rgb,
};
use crate::error::{Error, Result};

/// How [`Color::with_white_ref`] treats the existing color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabMode {
    /// Keep the RGB channels; only Lab views change
    #[default]
    KeepRgb,
    /// Keep the Lab coordinates and re-derive RGB against the new reference
    KeepLab,
}

/// An immutable color with alpha and a white reference
///
/// Equality compares RGB and alpha exactly and ignores the white reference.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    rgb: Rgb,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    alpha: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    white_ref: WhitePoint,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);

    /// Opaque white
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);

    /// Create a color from its canonical parts
    #[inline]
    pub const fn new(rgb: Rgb, alpha: f64, white_ref: WhitePoint) -> Self {
        Self {
            rgb,
            alpha,
            white_ref,
        }
    }

    /// Opaque color from RGB channels
    #[inline]
    pub const fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Color from RGB channels and alpha
    #[inline]
    pub const fn from_rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::new(Rgb::new(r, g, b), alpha, DEFAULT_WHITE)
    }

    /// Hue in degrees, saturation and lightness in [0, 1]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        hsl_to_rgb(Hsl::new(h, s, l)).into()
    }

    /// Hue in degrees, saturation and value in [0, 1]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        hsv_to_rgb(Hsv::new(h, s, v)).into()
    }

    /// NTSC YIQ
    pub fn from_yiq(y: f64, i: f64, q: f64) -> Self {
        yiq_to_rgb(Yiq::new(y, i, q)).into()
    }

    /// PAL YUV
    pub fn from_yuv(y: f64, u: f64, v: f64) -> Self {
        yuv_to_rgb(Yuv::new(y, u, v)).into()
    }

    /// CIE XYZ under D65, Y = 1 for white
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        xyz_to_rgb(Xyz::new(x, y, z)).into()
    }

    /// CIE L*a*b* relative to the default white reference
    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        Self::from_lab_with(l, a, b, DEFAULT_WHITE)
    }

    /// CIE L*a*b* relative to `white`, which becomes the color's reference
    pub fn from_lab_with(l: f64, a: f64, b: f64, white: WhitePoint) -> Self {
        let rgb = lab_to_rgb(Lab::new(l, a, b), &white);
        Self::new(rgb, 1.0, white)
    }

    /// Subtractive CMY, each component in [0, 1]
    pub fn from_cmy(c: f64, m: f64, y: f64) -> Self {
        cmy_to_rgb(Cmy::new(c, m, y)).into()
    }

    /// CMYK with `k` as the black key
    ///
    /// ```
    /// use oxcolor_core::Color;
    ///
    /// let orange = Color::from_cmyk(0.0, 0.5, 1.0, 0.0);
    /// assert_eq!(orange.to_hex()?, "#ff8000");
    /// assert_eq!(Color::from_cmyk(0.2, 0.4, 0.6, 1.0), Color::BLACK);
    /// # Ok::<(), oxcolor_core::Error>(())
    /// ```
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        cmy_to_rgb(cmyk_to_cmy(Cmyk::new(c, m, y, k))).into()
    }

    /// Parse `#rrggbb`, `#rgb` or a color name
    pub fn from_hex(html: &str) -> Result<Self> {
        hex_to_rgb(html).map(Self::from)
    }

    /// Unpack a `0x00BBGGRR` integer
    pub fn from_packed(packed: u32) -> Self {
        packed_to_rgb(packed).into()
    }

    /// Build a color from coordinates in any space
    ///
    /// `components` holds the space's coordinates, optionally followed by
    /// alpha.
    ///
    /// ```
    /// use oxcolor_core::{Color, ColorSpace};
    ///
    /// let c = Color::from_space(ColorSpace::Hsl, &[30.0, 1.0, 0.5, 0.8])?;
    /// assert_eq!(c.alpha(), 0.8);
    /// # Ok::<(), oxcolor_core::Error>(())
    /// ```
    pub fn from_space(space: ColorSpace, components: &[f64]) -> Result<Self> {
        let expected = space.component_count();
        let alpha = match components.len() {
            n if n == expected => 1.0,
            n if n == expected + 1 => components[expected],
            actual => {
                return Err(Error::ComponentCount {
                    space: space.name(),
                    expected,
                    actual,
                });
            }
        };

        let c = components;
        let color = match space {
            ColorSpace::Rgb => Self::from_rgb(c[0], c[1], c[2]),
            ColorSpace::Hsl => Self::from_hsl(c[0], c[1], c[2]),
            ColorSpace::Hsv => Self::from_hsv(c[0], c[1], c[2]),
            ColorSpace::Yiq => Self::from_yiq(c[0], c[1], c[2]),
            ColorSpace::Yuv => Self::from_yuv(c[0], c[1], c[2]),
            ColorSpace::Xyz => Self::from_xyz(c[0], c[1], c[2]),
            ColorSpace::Lab => Self::from_lab(c[0], c[1], c[2]),
            ColorSpace::Cmy => Self::from_cmy(c[0], c[1], c[2]),
            ColorSpace::Cmyk => Self::from_cmyk(c[0], c[1], c[2], c[3]),
        };
        Ok(color.with_alpha(alpha))
    }

    /// Coordinates of this color in `space`, without alpha
    pub fn to_space(&self, space: ColorSpace) -> Vec<f64> {
        match space {
            ColorSpace::Rgb => self.rgb.to_array().to_vec(),
            ColorSpace::Hsl => self.hsl().to_array().to_vec(),
            ColorSpace::Hsv => self.hsv().to_array().to_vec(),
            ColorSpace::Yiq => self.yiq().to_array().to_vec(),
            ColorSpace::Yuv => self.yuv().to_array().to_vec(),
            ColorSpace::Xyz => self.xyz().to_array().to_vec(),
            ColorSpace::Lab => self.lab().to_array().to_vec(),
            ColorSpace::Cmy => self.cmy().to_array().to_vec(),
            ColorSpace::Cmyk => self.cmyk().to_array().to_vec(),
        }
    }

    /// RGB channels, possibly outside [0, 1]
    #[inline]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// RGB channels followed by alpha
    #[inline]
    pub const fn rgba(&self) -> [f64; 4] {
        [self.rgb.r, self.rgb.g, self.rgb.b, self.alpha]
    }

    /// Opacity, 1 for opaque
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// White reference used by [`Color::lab`]
    #[inline]
    pub const fn white_ref(&self) -> WhitePoint {
        self.white_ref
    }

    /// HSL with hue in degrees
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }

    /// HSV with hue in degrees
    pub fn hsv(&self) -> Hsv {
        rgb_to_hsv(self.rgb)
    }

    /// NTSC YIQ coordinates
    pub fn yiq(&self) -> Yiq {
        rgb_to_yiq(self.rgb)
    }

    /// PAL YUV coordinates
    pub fn yuv(&self) -> Yuv {
        rgb_to_yuv(self.rgb)
    }

    /// CIE XYZ under D65
    pub fn xyz(&self) -> Xyz {
        rgb_to_xyz(self.rgb)
    }

    /// L*a*b* relative to this color's white reference
    pub fn lab(&self) -> Lab {
        rgb_to_lab(self.rgb, &self.white_ref)
    }

    /// CMY, the complement of RGB
    pub fn cmy(&self) -> Cmy {
        rgb_to_cmy(self.rgb)
    }

    /// CMYK with the common grey pulled into `k`
    pub fn cmyk(&self) -> Cmyk {
        cmy_to_cmyk(rgb_to_cmy(self.rgb))
    }

    /// Lowercase `#rrggbb`; fails when a channel is below zero
    pub fn to_hex(&self) -> Result<String> {
        rgb_to_hex(self.rgb)
    }

    /// `0x00BBGGRR`; fails when a channel is below zero
    pub fn to_packed(&self) -> Result<u32> {
        rgb_to_packed(self.rgb)
    }

    /// Nearest web-safe RGB
    pub fn websafe(&self) -> Rgb {
        rgb_to_websafe(self.rgb, false)
    }

    /// Greyscale RGB with the same channel mean
    pub fn greyscale(&self) -> Rgb {
        rgb_to_greyscale(self.rgb)
    }

    /// True when every RGB channel and alpha lies in [0, 1]
    pub fn is_legal(&self) -> bool {
        self.rgb.is_in_gamut() && (0.0..=1.0).contains(&self.alpha)
    }

    /// Clamp RGB and alpha independently into [0, 1]
    pub fn nearest_legal(&self) -> Self {
        Self::new(self.rgb.clamp(), self.alpha.clamp(0.0, 1.0), self.white_ref)
    }

    /// Copy with different RGB, keeping alpha and the white reference
    #[inline]
    pub(crate) fn with_rgb(&self, rgb: Rgb) -> Self {
        Self::new(rgb, self.alpha, self.white_ref)
    }

    /// Copy with HSL coordinates, keeping alpha and the white reference
    pub(crate) fn with_hsl(&self, hsl: Hsl) -> Self {
        self.with_rgb(hsl_to_rgb(hsl))
    }

    /// Copy with a different alpha
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::new(self.rgb, alpha, self.white_ref)
    }

    /// Copy with a different white reference
    ///
    /// ```
    /// use oxcolor_core::{Color, LabMode, color::white_point::D50};
    ///
    /// let c = Color::from_rgb(1.0, 0.5, 0.0);
    /// let moved = c.with_white_ref(D50, LabMode::KeepLab);
    /// assert!(moved.lab().approx_eq(&c.lab(), 1e-6));
    /// ```
    pub fn with_white_ref(&self, white: WhitePoint, mode: LabMode) -> Self {
        match mode {
            LabMode::KeepRgb => Self::new(self.rgb, self.alpha, white),
            LabMode::KeepLab => Self::new(lab_to_rgb(self.lab(), &white), self.alpha, white),
        }
    }

    /// Copy with the HSL hue replaced
    pub fn with_hue(&self, hue: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hue, hsl.s, hsl.l))
    }

    /// Copy with the HSL saturation replaced
    pub fn with_saturation(&self, saturation: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, saturation, hsl.l))
    }

    /// Copy with the HSL lightness replaced
    pub fn with_lightness(&self, lightness: f64) -> Self {
        let hsl = self.hsl();
        self.with_hsl(Hsl::new(hsl.h, hsl.s, lightness))
    }

    /// Check if RGB and alpha are approximately equal to another color's
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rgb.approx_eq(&other.rgb, epsilon) && (self.alpha - other.alpha).abs() < epsilon
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.alpha == other.alpha
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb, 1.0, DEFAULT_WHITE)
    }
}

impl From<[f64; 4]> for Color {
    fn from(rgba: [f64; 4]) -> Self {
        Self::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<Color> for [f64; 4] {
    fn from(color: Color) -> Self {
        color.rgba()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}%, {:.2}%, {:.2}%), a={:.2}%",
            self.rgb.r * 100.0,
            self.rgb.g * 100.0,
            self.rgb.b * 100.0,
            self.alpha * 100.0
        )
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::{D50, D65};

    const EPSILON: f64 = 1e-6;

    fn orange() -> Color {
        Color::from_rgb(1.0, 0.5, 0.0)
    }

    #[test]
    fn test_views() {
        let c = orange();
        assert!(c.hsl().approx_eq(&Hsl::new(30.0, 1.0, 0.5), EPSILON));
        assert!(c.hsv().approx_eq(&Hsv::new(30.0, 1.0, 1.0), EPSILON));
        assert!(c.yiq().approx_eq(&Yiq::new(0.5922, 0.45885, -0.05005), 1e-4), "{:?}", c.yiq());
        assert!(c.yuv().approx_eq(&Yuv::new(0.5925, -0.29156, 0.357505), 1e-4), "{:?}", c.yuv());
        assert!(c.xyz().approx_eq(&Xyz::new(0.488992, 0.365745, 0.044846), 1e-4));
        assert!(c.lab().approx_eq(&Lab::new(66.9566, 43.0719, 73.9594), 1e-3));
        assert!(c.cmy().approx_eq(&Cmy::new(0.0, 0.5, 1.0), EPSILON));
        assert!(c.cmyk().approx_eq(&Cmyk::new(0.0, 0.5, 1.0, 0.0), EPSILON));
        assert_eq!(c.to_hex().unwrap(), "#ff8000");
        assert_eq!(c.to_packed().unwrap(), 0x0080ff);
        assert!(c.websafe().approx_eq(&Rgb::new(1.0, 0.6, 0.0), EPSILON));
        assert!(c.greyscale().approx_eq(&Rgb::new(0.5, 0.5, 0.5), EPSILON));
    }

    #[test]
    fn test_constructors_agree() {
        let c = orange();
        let hsl = c.hsl();
        let hsv = c.hsv();
        let yiq = c.yiq();
        let yuv = c.yuv();
        let xyz = c.xyz();
        let lab = c.lab();
        let cmy = c.cmy();
        let cmyk = c.cmyk();

        let built = [
            Color::from_hsl(hsl.h, hsl.s, hsl.l),
            Color::from_hsv(hsv.h, hsv.s, hsv.v),
            Color::from_yiq(yiq.y, yiq.i, yiq.q),
            Color::from_yuv(yuv.y, yuv.u, yuv.v),
            Color::from_xyz(xyz.x, xyz.y, xyz.z),
            Color::from_lab(lab.l, lab.a, lab.b),
            Color::from_cmy(cmy.c, cmy.m, cmy.y),
            Color::from_cmyk(cmyk.c, cmyk.m, cmyk.y, cmyk.k),
            Color::from_hex("#ff8000").unwrap(),
            Color::from_packed(0x0080ff),
        ];
        for (i, other) in built.iter().enumerate() {
            // Byte-quantized forms only match to 1/255
            let tolerance = if i >= 8 { 1.0 / 255.0 } else { EPSILON };
            assert!(other.approx_eq(&c, tolerance), "{}: {:?}", i, other);
        }
    }

    #[test]
    fn test_from_space() {
        let c = Color::from_space(ColorSpace::Rgb, &[1.0, 0.5, 0.0]).unwrap();
        assert_eq!(c, orange());

        let c = Color::from_space(ColorSpace::Cmyk, &[0.0, 0.5, 1.0, 0.0, 0.25]).unwrap();
        assert!(c.approx_eq(&orange().with_alpha(0.25), EPSILON));

        assert_eq!(
            Color::from_space(ColorSpace::Cmyk, &[0.0, 0.5, 1.0]),
            Err(Error::ComponentCount {
                space: "cmyk",
                expected: 4,
                actual: 3
            })
        );
        assert!(Color::from_space(ColorSpace::Hsl, &[]).is_err());
    }

    #[test]
    fn test_to_space_roundtrip() {
        let c = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        for space in ColorSpace::ALL {
            let mut components = c.to_space(space);
            assert_eq!(components.len(), space.component_count());
            components.push(c.alpha());
            let back = Color::from_space(space, &components).unwrap();
            assert!(back.approx_eq(&c, EPSILON), "{}: {:?}", space, back);
        }
    }

    #[test]
    fn test_legality() {
        assert!(orange().is_legal());
        assert!(!Color::from_rgb(1.1, 0.5, 0.0).is_legal());
        assert!(!Color::from_rgba(1.0, 0.5, 0.0, -0.1).is_legal());

        let fixed = Color::from_rgba(1.1, -0.5, 0.5, 2.0).nearest_legal();
        assert_eq!(fixed, Color::from_rgba(1.0, 0.0, 0.5, 1.0));
        assert_eq!(fixed.nearest_legal(), fixed);
    }

    #[test]
    fn test_not_clamped_at_construction() {
        let c = Color::from_rgba(1.5, -0.25, 0.5, 3.0);
        assert_eq!(c.rgba(), [1.5, -0.25, 0.5, 3.0]);
        assert!(c.to_hex().is_err());
    }

    #[test]
    fn test_hsl_builders() {
        let c = orange().with_alpha(0.5);

        let hued = c.with_hue(210.0);
        assert!(hued.hsl().approx_eq(&Hsl::new(210.0, 1.0, 0.5), EPSILON));
        assert_eq!(hued.alpha(), 0.5);

        let grey = c.with_saturation(0.0);
        assert!(grey.rgb().approx_eq(&Rgb::new(0.5, 0.5, 0.5), EPSILON));

        let light = c.with_lightness(0.75);
        assert!(light.hsl().approx_eq(&Hsl::new(30.0, 1.0, 0.75), EPSILON));
    }

    #[test]
    fn test_with_white_ref() {
        let c = orange();
        assert_eq!(c.white_ref(), D65);

        let kept_rgb = c.with_white_ref(D50, LabMode::KeepRgb);
        assert_eq!(kept_rgb.rgb(), c.rgb());
        assert_eq!(kept_rgb.white_ref(), D50);
        assert!(!kept_rgb.lab().approx_eq(&c.lab(), 1e-3));

        let kept_lab = c.with_white_ref(D50, LabMode::KeepLab);
        assert_eq!(kept_lab.white_ref(), D50);
        assert!(kept_lab.lab().approx_eq(&c.lab(), EPSILON), "{:?}", kept_lab.lab());
        assert!(!kept_lab.rgb().approx_eq(&c.rgb(), 1e-3));
    }

    #[test]
    fn test_from_lab_with_sets_reference() {
        let c = Color::from_lab_with(50.0, 10.0, -10.0, D50);
        assert_eq!(c.white_ref(), D50);
        assert!(c.lab().approx_eq(&Lab::new(50.0, 10.0, -10.0), EPSILON));
    }

    #[test]
    fn test_equality_ignores_white_ref() {
        let a = orange();
        let b = orange().with_white_ref(D50, LabMode::KeepRgb);
        assert_eq!(a, b);
        assert_ne!(a, a.with_alpha(0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(orange().to_string(), "(100.00%, 50.00%, 0.00%), a=100.00%");
        assert_eq!(
            Color::from_rgba(0.25, 0.125, 1.0, 0.5).to_string(),
            "(25.00%, 12.50%, 100.00%), a=50.00%"
        );
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#f60".parse().unwrap();
        assert!(c.approx_eq(&Color::from_rgb(1.0, 0.4, 0.0), 1e-12));

        let c: Color = "lemonchiffon".parse().unwrap();
        assert!(c.rgb().approx_eq(&Rgb::new(1.0, 0.980392, 0.803922), EPSILON));

        assert!("#xyz".parse::<Color>().is_err());
    }
}
