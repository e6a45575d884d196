//! Reference implementation wrappers
//!
//! Conversions computed with the `palette` crate, returned as plain arrays
//! so they can be compared against oxcolor's typed coordinates.

use oxcolor_core::Rgb;
use palette::white_point::D65;
use palette::{FromColor, Srgb};

type PaletteHsl = palette::Hsl<palette::encoding::Srgb, f64>;
type PaletteHsv = palette::Hsv<palette::encoding::Srgb, f64>;
type PaletteXyz = palette::Xyz<D65, f64>;
type PaletteLab = palette::Lab<D65, f64>;

fn srgb(rgb: Rgb) -> Srgb<f64> {
    Srgb::new(rgb.r, rgb.g, rgb.b)
}

/// HSL as `[hue degrees 0..360, saturation, lightness]`
pub fn hsl_palette(rgb: Rgb) -> [f64; 3] {
    let hsl = PaletteHsl::from_color(srgb(rgb));
    [hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness]
}

/// HSV as `[hue degrees 0..360, saturation, value]`
pub fn hsv_palette(rgb: Rgb) -> [f64; 3] {
    let hsv = PaletteHsv::from_color(srgb(rgb));
    [hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value]
}

/// CIE XYZ under D65
pub fn xyz_palette(rgb: Rgb) -> [f64; 3] {
    let xyz = PaletteXyz::from_color(srgb(rgb));
    [xyz.x, xyz.y, xyz.z]
}

/// CIE L*a*b* relative to D65
pub fn lab_palette(rgb: Rgb) -> [f64; 3] {
    let lab = PaletteLab::from_color(srgb(rgb));
    [lab.l, lab.a, lab.b]
}

/// Parse a CSS color name with palette's table
pub fn named_palette(name: &str) -> Option<[u8; 3]> {
    palette::named::from_str(name).map(|c| [c.red, c.green, c.blue])
}
