//! 3x3 Matrix operations for color space transforms
//!
//! These matrices carry the linear parts of the RGB↔XYZ, RGB↔YIQ and RGB↔YUV
//! conversions. Every forward matrix is paired with its exact inverse so
//! that round trips are lossless to within f64 rounding.

use std::ops::Mul;

/// Row-major 3x3 matrix acting on coordinate triples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// The identity transform
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Create a matrix from rows
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Row `i` dotted with `v`
    #[inline]
    fn row_dot(&self, i: usize, v: [f64; 3]) -> f64 {
        let row = self.m[i];
        row[0] * v[0] + row[1] * v[1] + row[2] * v[2]
    }

    #[inline]
    fn column(&self, j: usize) -> [f64; 3] {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    /// Inverse by cofactor expansion, `None` when singular
    pub fn inverse(&self) -> Option<Self> {
        let [a, b, c] = self.m;
        // Cross products of the rows are the columns of the adjugate
        let cross = |u: [f64; 3], v: [f64; 3]| {
            [
                u[1] * v[2] - u[2] * v[1],
                u[2] * v[0] - u[0] * v[2],
                u[0] * v[1] - u[1] * v[0],
            ]
        };
        let (bc, ca, ab) = (cross(b, c), cross(c, a), cross(a, b));

        let det = a[0] * bc[0] + a[1] * bc[1] + a[2] * bc[2];
        if det.abs() < 1e-14 {
            return None;
        }

        Some(Self::new(std::array::from_fn(|i| {
            [bc[i] / det, ca[i] / det, ab[i] / det]
        })))
    }

    /// Element-wise comparison
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(x, y)| (x - y).abs() <= epsilon)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.row_dot(i, rhs.column(j)))
        }))
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, v: [f64; 3]) -> [f64; 3] {
        [self.row_dot(0, v), self.row_dot(1, v), self.row_dot(2, v)]
    }
}

// ============================================================================
// Conversion matrices
// ============================================================================

/// Linear sRGB to XYZ matrix (D65 white point)
///
/// From IEC 61966-2-1:1999
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to linear sRGB matrix (D65 white point)
///
/// Exact inverse of [`SRGB_TO_XYZ`]
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404548360214083, -1.5371388501025751, -0.4985315468684809],
    [-0.9692663898756537, 1.8760109288424913, 0.041556082346673524],
    [0.05564341960421366, -0.20402585426769815, 1.0572251624579287],
]);

/// RGB to YIQ matrix (NTSC)
pub const RGB_TO_YIQ: Matrix3x3 = Matrix3x3::new([
    [0.2989, 0.5866, 0.1114],
    [0.5959, -0.2741, -0.3218],
    [0.2113, -0.5227, 0.3113],
]);

/// YIQ to RGB matrix (NTSC)
///
/// Exact inverse of [`RGB_TO_YIQ`]. The commonly published
/// (0.9562, 0.6210, ...) table is this matrix rounded to four digits,
/// which loses about 1e-4 per round trip.
pub const YIQ_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [1.0031724440328318, 0.9529417272245192, 0.6260945633009728],
    [1.0030451146816795, -0.27503120065017034, -0.6432517383384642],
    [1.003280899518074, -1.1086263910773688, 1.7072872956793743],
]);

/// RGB to YUV matrix (PAL)
pub const RGB_TO_YUV: Matrix3x3 = Matrix3x3::new([
    [0.29900, 0.58700, 0.11400],
    [-0.14713, -0.28886, 0.43600],
    [0.61500, -0.51499, -0.10001],
]);

/// YUV to RGB matrix (PAL)
///
/// Exact inverse of [`RGB_TO_YUV`]; agrees with the published
/// (1.13983, 0.39465, 0.58060, 2.03211) coefficients to five digits.
pub const YUV_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [1.0000000001179838, -1.179838438240572e-05, 1.1398345757210222],
    [1.0000039464605326, -0.39464605326210683, -0.5805942338343951],
    [0.9999796788806157, 2.0321119384367283, -1.511298066375047e-05],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_identity() {
        assert_eq!(Matrix3x3::IDENTITY * [1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_inverse() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        assert!(a_inv.approx_eq(
            &Matrix3x3::new([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]),
            1e-9
        ));
        assert!((a * a_inv).approx_eq(&Matrix3x3::IDENTITY, 1e-9));
    }

    #[test]
    fn test_singular_matrix() {
        // row 3 = row 1 + row 2
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_conversion_pairs_are_inverse() {
        let pairs = [
            ("xyz", SRGB_TO_XYZ, XYZ_TO_SRGB),
            ("yiq", RGB_TO_YIQ, YIQ_TO_RGB),
            ("yuv", RGB_TO_YUV, YUV_TO_RGB),
        ];
        for (name, forward, backward) in pairs {
            assert!(
                (forward * backward).approx_eq(&Matrix3x3::IDENTITY, 1e-12),
                "{} matrices are not inverse",
                name
            );
            assert!(
                forward.inverse().unwrap().approx_eq(&backward, 1e-9),
                "{} inverse drifted from computed inverse",
                name
            );
        }
    }

    #[test]
    fn test_srgb_white_is_d65() {
        let [x, y, z] = SRGB_TO_XYZ * [1.0, 1.0, 1.0];
        assert!((x - 0.95047).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
        assert!((z - 1.08883).abs() < 1e-6);
    }
}
