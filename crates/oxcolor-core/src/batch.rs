//! Batch conversions over slices
//!
//! Helpers for converting many colors at once: flat `f64` and 8-bit
//! buffers in and out, a multiversioned per-element loop, and with the
//! `parallel` feature a rayon-backed map.

use multiversion::multiversion;

use crate::color::Rgb;
use crate::color::hex::quantize_rgb;
use crate::error::{Error, Result};
use crate::value::Color;

/// Apply `convert` to every color in `src`, writing into `dst`
///
/// `dst` must be exactly as long as `src`.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn convert_rgb_batch<F>(src: &[Rgb], dst: &mut [Rgb], convert: F) -> Result<()>
where
    F: Fn(Rgb) -> Rgb,
{
    if src.len() != dst.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    for (input, output) in src.iter().zip(dst.iter_mut()) {
        *output = convert(*input);
    }
    Ok(())
}

/// View a flat `[r, g, b, r, g, b, ...]` buffer as RGB triples
pub fn rgb_from_flat(flat: &[f64]) -> Result<&[Rgb]> {
    bytemuck::try_cast_slice(flat).map_err(|_| Error::BufferSize {
        expected: flat.len() - flat.len() % 3,
        actual: flat.len(),
    })
}

/// View RGB triples as a flat `f64` buffer
pub fn rgb_to_flat(rgb: &[Rgb]) -> &[f64] {
    bytemuck::cast_slice(rgb)
}

/// Decode packed 8-bit RGB into opaque colors
pub fn rgb8_to_colors(bytes: &[u8]) -> Result<Vec<Color>> {
    let pixels: &[[u8; 3]] = bytemuck::try_cast_slice(bytes).map_err(|_| Error::BufferSize {
        expected: bytes.len() - bytes.len() % 3,
        actual: bytes.len(),
    })?;

    Ok(pixels.iter().map(|&px| Color::from(Rgb::from(px))).collect())
}

/// Encode colors as packed 8-bit RGB
///
/// Bytes are quantized the same way as [`Color::to_hex`]. A channel that
/// rounds below zero fails with `OutOfRange`; call
/// [`Color::nearest_legal`] first to clamp.
pub fn colors_to_rgb8(colors: &[Color]) -> Result<Vec<u8>> {
    let pixels = colors
        .iter()
        .map(|color| quantize_rgb(color.rgb()))
        .collect::<Result<Vec<[u8; 3]>>>()?;

    Ok(bytemuck::cast_slice(&pixels).to_vec())
}

/// Map every color through `f` on the rayon thread pool
#[cfg(feature = "parallel")]
pub fn par_convert<T, F>(colors: &[Color], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Color) -> T + Sync + Send,
{
    use rayon::prelude::*;

    colors.par_iter().map(f).collect()
}
