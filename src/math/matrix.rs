//! Row-major 2x2, 3x3 and 4x4 matrices
//!
//! `A * B` applies `B` first. `inverse()` returns the all-zero matrix when
//! the determinant is within epsilon of zero; callers that care about
//! degeneracy check `determinant()` themselves.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::scalar::{EPSILON, approx_eq};
use super::vector::{Vector2, Vector3, Vector4};

macro_rules! impl_matrix_common {
    ($ty:ident, $n:expr) => {
        impl $ty {
            pub const IDENTITY: $ty = $ty::identity_const();
            pub const ZERO: $ty = $ty { m: [0.0; $n * $n] };

            const fn identity_const() -> $ty {
                let mut m = [0.0; $n * $n];
                let mut i = 0;
                while i < $n {
                    m[i * $n + i] = 1.0;
                    i += 1;
                }
                $ty { m }
            }

            /// Build from a row-major array
            pub const fn from_rows(m: [f32; $n * $n]) -> $ty {
                $ty { m }
            }

            #[inline]
            pub fn get(&self, row: usize, col: usize) -> f32 {
                self.m[row * $n + col]
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: f32) {
                self.m[row * $n + col] = value;
            }

            pub fn transpose(&self) -> $ty {
                let mut out = $ty::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.m[col * $n + row] = self.m[row * $n + col];
                    }
                }
                out
            }

            /// Element-wise comparison within `epsilon`
            pub fn approx_eq_eps(&self, other: &$ty, epsilon: f32) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| approx_eq(*a, *b, epsilon))
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                $ty::IDENTITY
            }
        }

        impl Mul for $ty {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                let mut out = $ty::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.m[row * $n + col] = (0..$n)
                            .map(|k| self.m[row * $n + k] * rhs.m[k * $n + col])
                            .sum();
                    }
                }
                out
            }
        }

        impl MulAssign for $ty {
            fn mul_assign(&mut self, rhs: $ty) {
                *self = *self * rhs;
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &$ty) -> bool {
                self.approx_eq_eps(other, EPSILON)
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;
            fn index(&self, index: usize) -> &f32 {
                &self.m[index]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.m[index]
            }
        }
    };
}

/// 2x2 matrix for 2D linear transforms
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix2x2 {
    pub m: [f32; 4],
}

impl_matrix_common!(Matrix2x2, 2);

impl Matrix2x2 {
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { m: [m00, m01, m10, m11] }
    }

    /// Counter-clockwise rotation by `angle` radians
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    pub fn determinant(&self) -> f32 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if approx_eq(det, 0.0, EPSILON) {
            return Self::ZERO;
        }
        let inv = 1.0 / det;
        Self::new(self.m[3] * inv, -self.m[1] * inv, -self.m[2] * inv, self.m[0] * inv)
    }

    /// Linear transform followed by a translation
    pub fn transform_point(&self, v: Vector2, translation: Vector2) -> Vector2 {
        *self * v + translation
    }
}

impl Mul<Vector2> for Matrix2x2 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m[0] * v.x + self.m[1] * v.y,
            self.m[2] * v.x + self.m[3] * v.y,
        )
    }
}

/// 3x3 matrix for 3D linear transforms
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix3x3 {
    pub m: [f32; 9],
}

impl_matrix_common!(Matrix3x3, 3);

impl Matrix3x3 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self { m: [m00, m01, m02, m10, m11, m12, m20, m21, m22] }
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, sz)
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Adjugate over determinant
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if approx_eq(det, 0.0, EPSILON) {
            return Self::ZERO;
        }
        let m = &self.m;
        let inv = 1.0 / det;
        Self::new(
            (m[4] * m[8] - m[5] * m[7]) * inv,
            (m[2] * m[7] - m[1] * m[8]) * inv,
            (m[1] * m[5] - m[2] * m[4]) * inv,
            (m[5] * m[6] - m[3] * m[8]) * inv,
            (m[0] * m[8] - m[2] * m[6]) * inv,
            (m[2] * m[3] - m[0] * m[5]) * inv,
            (m[3] * m[7] - m[4] * m[6]) * inv,
            (m[1] * m[6] - m[0] * m[7]) * inv,
            (m[0] * m[4] - m[1] * m[3]) * inv,
        )
    }
}

impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }
}

/// 4x4 matrix for affine 3D transforms in homogeneous coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [f32; 16],
}

impl_matrix_common!(Matrix4x4, 4);

impl Matrix4x4 {
    #[rustfmt::skip]
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_rows([
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn rotation_x(angle: f32) -> Self {
        Self::from_linear(&Matrix3x3::rotation_x(angle))
    }

    pub fn rotation_y(angle: f32) -> Self {
        Self::from_linear(&Matrix3x3::rotation_y(angle))
    }

    pub fn rotation_z(angle: f32) -> Self {
        Self::from_linear(&Matrix3x3::rotation_z(angle))
    }

    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_linear(&Matrix3x3::scale(sx, sy, sz))
    }

    /// Embed a 3x3 linear part with no translation
    #[rustfmt::skip]
    pub fn from_linear(l: &Matrix3x3) -> Self {
        let l = &l.m;
        Self::from_rows([
            l[0], l[1], l[2], 0.0,
            l[3], l[4], l[5], 0.0,
            l[6], l[7], l[8], 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Determinant of the 3x3 minor made of the given rows and columns
    fn minor(&self, rows: [usize; 3], cols: [usize; 3]) -> f32 {
        let e = |r: usize, c: usize| self.m[rows[r] * 4 + cols[c]];
        e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1))
            - e(0, 1) * (e(1, 0) * e(2, 2) - e(1, 2) * e(2, 0))
            + e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0))
    }

    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let rows = others(row);
        let cols = others(col);
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(rows, cols)
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.m[col] * self.cofactor(0, col)).sum()
    }

    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if approx_eq(det, 0.0, EPSILON) {
            return Self::ZERO;
        }
        let inv = 1.0 / det;
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                // adjugate is the transposed cofactor matrix
                out.m[col * 4 + row] = self.cofactor(row, col) * inv;
            }
        }
        out
    }

    /// Transform a point (w = 1), dividing through by w when it is not ~0
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let r = *self * Vector4::from_point(p);
        if approx_eq(r.w, 0.0, EPSILON) || approx_eq(r.w, 1.0, EPSILON) {
            r.xyz()
        } else {
            r.xyz() / r.w
        }
    }

    /// Transform a direction (w = 0); translation has no effect
    pub fn transform_direction(&self, d: Vector3) -> Vector3 {
        (*self * Vector4::from_direction(d)).xyz()
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;
    fn mul(self, v: Vector4) -> Vector4 {
        let row = |r: usize| {
            self.m[r * 4] * v.x
                + self.m[r * 4 + 1] * v.y
                + self.m[r * 4 + 2] * v.z
                + self.m[r * 4 + 3] * v.w
        };
        Vector4::new(row(0), row(1), row(2), row(3))
    }
}

/// The three indices in 0..4 other than `skip`
fn others(skip: usize) -> [usize; 3] {
    let mut out = [0; 3];
    let mut n = 0;
    for i in 0..4 {
        if i != skip {
            out[n] = i;
            n += 1;
        }
    }
    out
}

/// glam is column-major, so the flat array is transposed on the way across
impl From<Matrix4x4> for glam::Mat4 {
    fn from(mat: Matrix4x4) -> Self {
        glam::Mat4::from_cols_array(&mat.transpose().m)
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    fn from(mat: glam::Mat4) -> Self {
        Matrix4x4::from_rows(mat.to_cols_array()).transpose()
    }
}
