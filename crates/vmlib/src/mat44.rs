//! 4x4 matrix
//!
//! `Mat44` stores its 16 elements in row-major order: element `(i, j)` lives
//! at linear offset `i * 4 + j`. Element access goes through `m[(row, col)]`,
//! which panics outside `[0, 4)`; `get`/`get_mut` are the checked versions.
//!
//! ```text
//!   | 0,0  0,1  0,2  0,3 |
//!   | 1,0  1,1  1,2  1,3 |
//!   | 2,0  2,1  2,2  2,3 |
//!   | 3,0  3,1  3,2  3,3 |
//! ```
//!
//! Vectors are treated as columns, so `a * b * v` applies `b` first. Graphics
//! APIs that expect column-major data need `to_column_major()`.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::{MathError, Result};
use crate::vec::Vec4;

/// 4x4 transformation matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat44 {
    pub v: [f32; 16],
}

/// The 4x4 identity matrix
pub const IDENTITY44: Mat44 = Mat44::IDENTITY;

impl Default for Mat44 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat44 {
    pub const IDENTITY: Mat44 = Mat44::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    pub const ZERO: Mat44 = Mat44::new([0.0; 16]);

    /// Create from 16 elements in row-major order
    pub const fn new(v: [f32; 16]) -> Self {
        Self { v }
    }

    /// Create from four rows
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3], //
        ])
    }

    /// Checked element access
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        if row < 4 && col < 4 {
            Ok(self.v[row * 4 + col])
        } else {
            Err(MathError::IndexOutOfBounds { row, col })
        }
    }

    /// Checked mutable element access
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f32> {
        if row < 4 && col < 4 {
            Ok(&mut self.v[row * 4 + col])
        } else {
            Err(MathError::IndexOutOfBounds { row, col })
        }
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self[(i, 0)], self[(i, 1)], self[(i, 2)], self[(i, 3)])
    }

    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self[(0, j)], self[(1, j)], self[(2, j)], self[(3, j)])
    }

    /// Row-major element array
    pub fn as_array(&self) -> &[f32; 16] {
        &self.v
    }

    pub fn transpose(&self) -> Mat44 {
        let mut t = Mat44::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// Elements in column-major order, e.g. for OpenGL/wgpu uniforms
    pub fn to_column_major(&self) -> [f32; 16] {
        self.transpose().v
    }

    /// Element-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Mat44, eps: f32) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

/// Matrix-matrix product `a * b`
///
/// The result is accumulated into a fresh buffer, so neither operand is
/// observed half-updated.
pub fn mat44_mul(a: &Mat44, b: &Mat44) -> Mat44 {
    let mut result = Mat44::ZERO;
    for i in 0..4 {
        for j in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    result
}

/// Matrix-vector product `m * v`, with `v` as a column vector
pub fn mat44_mul_vec(m: &Mat44, v: Vec4) -> Vec4 {
    Vec4::new(
        m.row(0).dot(v),
        m.row(1).dot(v),
        m.row(2).dot(v),
        m.row(3).dot(v),
    )
}

impl Index<(usize, usize)> for Mat44 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 4 && col < 4,
            "Mat44 index ({row}, {col}) out of bounds"
        );
        &self.v[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat44 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 4 && col < 4,
            "Mat44 index ({row}, {col}) out of bounds"
        );
        &mut self.v[row * 4 + col]
    }
}

impl Mul<Mat44> for Mat44 {
    type Output = Mat44;

    fn mul(self, rhs: Mat44) -> Mat44 {
        mat44_mul(&self, &rhs)
    }
}

impl Mul<&Mat44> for &Mat44 {
    type Output = Mat44;

    fn mul(self, rhs: &Mat44) -> Mat44 {
        mat44_mul(self, rhs)
    }
}

impl MulAssign<Mat44> for Mat44 {
    fn mul_assign(&mut self, rhs: Mat44) {
        *self = mat44_mul(self, &rhs);
    }
}

impl Mul<Vec4> for Mat44 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        mat44_mul_vec(&self, rhs)
    }
}

impl Mul<Vec4> for &Mat44 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        mat44_mul_vec(self, rhs)
    }
}

impl From<[[f32; 4]; 4]> for Mat44 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl TryFrom<&[f32]> for Mat44 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self> {
        let v: [f32; 16] = slice.try_into().map_err(|_| MathError::LengthMismatch {
            expected: 16,
            actual: slice.len(),
        })?;
        Ok(Self::new(v))
    }
}

impl fmt::Display for Mat44 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..4 {
            let r = self.row(i);
            writeln!(f, "[{} {} {} {}]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}
