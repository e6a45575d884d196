//! HTML Notation and Packed Integers
//!
//! Text form is `#rrggbb`, with `#rgb` shorthand and CSS color names
//! accepted on input. The packed form stores red in the low byte:
//! `0x00BBGGRR`.

use crate::color::{Rgb, named};
use crate::error::{Error, Result};

/// Parse `#rrggbb`, `#rgb` (with or without the `#`) or a color name
///
/// Surrounding whitespace is ignored. Hex digits and names are
/// case-insensitive.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some(rgb) = parse_digits(digits) {
        return Ok(rgb);
    }

    if !trimmed.starts_with('#') {
        let name = trimmed.to_ascii_lowercase();
        if let Some(hex) = named::lookup(&name) {
            tracing::trace!(name = %name, hex, "resolved named color");
            if let Some(rgb) = parse_digits(&hex[1..]) {
                return Ok(rgb);
            }
        }
    }

    tracing::debug!(input, "rejected HTML color");
    Err(Error::HexParse {
        input: input.to_string(),
    })
}

fn parse_digits(digits: &str) -> Option<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            // Each shorthand digit repeats: "f" means "ff"
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Rgb::from_u8(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Quantize a channel to a byte: round half away from zero, cap at 255
///
/// Channels that round below zero have no byte representation.
fn quantize(value: f64) -> Result<u8> {
    let scaled = (value * 255.0).round();
    if scaled.is_nan() || scaled < 0.0 {
        return Err(Error::OutOfRange { value });
    }
    Ok(scaled.min(255.0) as u8)
}

pub(crate) fn quantize_rgb(rgb: Rgb) -> Result<[u8; 3]> {
    Ok([quantize(rgb.r)?, quantize(rgb.g)?, quantize(rgb.b)?])
}

/// Format as lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> Result<String> {
    let [r, g, b] = quantize_rgb(rgb)?;
    Ok(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Pack into `0x00BBGGRR`
pub fn rgb_to_packed(rgb: Rgb) -> Result<u32> {
    let [r, g, b] = quantize_rgb(rgb)?;
    Ok(u32::from_le_bytes([r, g, b, 0]))
}

/// Unpack `0x00BBGGRR`; the top byte is ignored
pub fn packed_to_rgb(packed: u32) -> Rgb {
    let [r, g, b, _] = packed.to_le_bytes();
    Rgb::from_u8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_parse_long_and_short() {
        let rgb = hex_to_rgb("#ff8000").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 128.0 / 255.0, 0.0), EPSILON));

        let rgb = hex_to_rgb("#f60").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.4, 0.0), EPSILON), "{:?}", rgb);

        let rgb = hex_to_rgb("F60").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.4, 0.0), EPSILON), "{:?}", rgb);

        let rgb = hex_to_rgb("  #FF8000\n").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 128.0 / 255.0, 0.0), EPSILON));
    }

    #[test]
    fn test_parse_named() {
        let rgb = hex_to_rgb("lemonchiffon").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.980392, 0.803922), EPSILON), "{:?}", rgb);

        let rgb = hex_to_rgb(" LemonChiffon ").unwrap();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.980392, 0.803922), EPSILON), "{:?}", rgb);
    }

    #[test]
    fn test_parse_rejects() {
        for input in ["", "#", "#12345", "#1234567", "#ggg", "nosuchcolor", "#white", "12 45 6"] {
            assert_eq!(
                hex_to_rgb(input),
                Err(Error::HexParse {
                    input: input.to_string()
                }),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(rgb_to_hex(Rgb::new(1.0, 0.5, 0.0)).unwrap(), "#ff8000");
        assert_eq!(rgb_to_hex(Rgb::BLACK).unwrap(), "#000000");
        assert_eq!(rgb_to_hex(Rgb::WHITE).unwrap(), "#ffffff");
        // Above-range channels saturate
        assert_eq!(rgb_to_hex(Rgb::new(1.5, 0.0, 0.0)).unwrap(), "#ff0000");
    }

    #[test]
    fn test_format_below_range() {
        assert_eq!(
            rgb_to_hex(Rgb::new(-0.5, 0.0, 0.0)),
            Err(Error::OutOfRange { value: -0.5 })
        );
        assert!(rgb_to_packed(Rgb::new(0.0, f64::NAN, 0.0)).is_err());
        // Rounds to zero, so still representable
        assert_eq!(rgb_to_hex(Rgb::new(-0.001, 0.0, 0.0)).unwrap(), "#000000");
    }

    #[test]
    fn test_packed() {
        assert_eq!(rgb_to_packed(Rgb::new(1.0, 0.5, 0.0)).unwrap(), 0x0080ff);
        assert_eq!(rgb_to_packed(Rgb::BLUE).unwrap(), 0xff0000);

        let rgb = packed_to_rgb(0x0080ff);
        assert!(rgb.approx_eq(&Rgb::new(1.0, 128.0 / 255.0, 0.0), EPSILON));
        assert_eq!(packed_to_rgb(0xff0080ff), packed_to_rgb(0x0080ff));
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for hex in ["#000000", "#123abc", "#fffacd", "#ff8000"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()).unwrap(), hex);
        }
    }
}
