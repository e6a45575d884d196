//! RYB Hue Wheel
//!
//! The artist's red-yellow-blue wheel spaces hues differently from the RGB
//! wheel: yellow sits opposite violet rather than blue. The RGB → RYB
//! direction is sampled every 15° and interpolated linearly; the reverse
//! direction inverts the same table, so a round trip returns the input.

use crate::math::{normalize_degrees, piecewise_linear, piecewise_linear_inverse};

const STEP: f64 = 15.0;

/// RYB hue at RGB hue `i * 15°`, strictly increasing
const RYB_WHEEL: [f64; 25] = [
    0.0, 26.0, 52.0, 83.0, 120.0, 130.0, 141.0, 151.0, 162.0, 177.0, 190.0, 204.0, 218.0, 232.0,
    246.0, 261.0, 275.0, 288.0, 303.0, 317.0, 330.0, 338.0, 345.0, 352.0, 360.0,
];

/// Map an RGB hue (degrees) to the RYB wheel
pub fn rgb_to_ryb_hue(hue: f64) -> f64 {
    normalize_degrees(piecewise_linear(&RYB_WHEEL, STEP, normalize_degrees(hue)))
}

/// Map an RYB hue (degrees) back to the RGB wheel
pub fn ryb_to_rgb_hue(hue: f64) -> f64 {
    normalize_degrees(piecewise_linear_inverse(&RYB_WHEEL, STEP, normalize_degrees(hue)))
}
