//! Unit quaternions for 3D rotation

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::scalar::{EPSILON, approx_eq};
use super::vector::Vector3;

/// Rotation quaternion stored as (w, x, y, z)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };
    pub const ZERO: Quaternion = Quaternion { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields the identity.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let axis = axis.normalized();
        if axis == Vector3::ZERO {
            return Self::IDENTITY;
        }
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s).normalized()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length. No-op when already unit length or zero.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 && !approx_eq(len, 1.0, EPSILON) {
            *self /= len;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugate over squared length; zero quaternion for zero input
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return Self::ZERO;
        }
        self.conjugate() / len_sq
    }

    #[inline]
    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Rotate `v` by conjugation: `q * (0, v) * q⁻¹`
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let pure = Quaternion::new(0.0, v.x, v.y, v.z);
        let r = *self * pure * self.inverse();
        Vector3::new(r.x, r.y, r.z)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, o: Quaternion) -> Quaternion {
        Quaternion::new(self.w + o.w, self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, o: Quaternion) -> Quaternion {
        Quaternion::new(self.w - o.w, self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Quaternion;
    fn mul(self, s: f32) -> Quaternion {
        Quaternion::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f32> for Quaternion {
    type Output = Quaternion;
    fn div(self, s: f32) -> Quaternion {
        if s == 0.0 {
            return Quaternion::ZERO;
        }
        Quaternion::new(self.w / s, self.x / s, self.y / s, self.z / s)
    }
}

/// Hamilton product (not commutative)
impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, o: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y - self.x * o.z + self.y * o.w + self.z * o.x,
            self.w * o.z + self.x * o.y - self.y * o.x + self.z * o.w,
        )
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, o: Quaternion) {
        *self = *self + o;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, o: Quaternion) {
        *self = *self - o;
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, o: Quaternion) {
        *self = *self * o;
    }
}

/// Division by zero yields the zero quaternion, same as `/`
impl DivAssign<f32> for Quaternion {
    fn div_assign(&mut self, s: f32) {
        *self = *self / s;
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, o: &Quaternion) -> bool {
        approx_eq(self.w, o.w, EPSILON)
            && approx_eq(self.x, o.x, EPSILON)
            && approx_eq(self.y, o.y, EPSILON)
            && approx_eq(self.z, o.z, EPSILON)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let r = q.rotate(Vector3::new(1.0, 0.0, 0.0));
        assert!(r.approx_eq_eps(Vector3::new(0.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn test_hamilton_product_not_commutative() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, k * -1.0);
    }

    #[test]
    fn test_inverse_of_zero_is_zero() {
        assert_eq!(Quaternion::ZERO.inverse(), Quaternion::ZERO);
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.7);
        assert_eq!(q * q.inverse(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_divide_by_zero_matches_vectors() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q / 0.0, Quaternion::ZERO);
        q /= 0.0;
        assert_eq!(q, Quaternion::ZERO);

        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v /= 0.0;
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_normalize_noop_cases() {
        let mut zero = Quaternion::ZERO;
        zero.normalize();
        assert_eq!(zero, Quaternion::ZERO);

        let mut unit = Quaternion::IDENTITY;
        unit.normalize();
        assert_eq!(unit, Quaternion::IDENTITY);

        let scaled = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalized();
        assert_eq!(scaled, Quaternion::IDENTITY);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        assert_eq!(Quaternion::from_axis_angle(Vector3::ZERO, 1.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_glam_matches() {
        let axis = Vector3::new(0.0, 1.0, 0.0);
        let ours = Quaternion::from_axis_angle(axis, PI / 3.0);
        let theirs = glam::Quat::from_axis_angle(glam::Vec3::Y, PI / 3.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        let a = ours.rotate(v);
        let b: Vector3 = (theirs * glam::Vec3::from(v)).into();
        assert!(a.approx_eq_eps(b, 1e-4));
    }

    proptest! {
        #[test]
        fn rotation_preserves_length(
            phi in 0.0f32..PI,
            lambda in 0.0f32..TAU,
            theta in -TAU..TAU,
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
        ) {
            let axis = Vector3::new(phi.sin() * lambda.cos(), phi.sin() * lambda.sin(), phi.cos());
            let q = Quaternion::from_axis_angle(axis, theta);
            let v = Vector3::new(x, y, z);
            let r = q.rotate(v);
            let tolerance = 1e-4 * v.length().max(1.0);
            prop_assert!((r.length() - v.length()).abs() < tolerance);
            // The component along the axis is untouched by the rotation
            prop_assert!((r.dot(axis) - v.dot(axis)).abs() < tolerance);
        }
    }
}
