//! Kinematic state of an actor

use serde::{Deserialize, Serialize};

use super::component::{Component, ComponentKind};
use crate::math::{Matrix4x4, Vector2};

/// Position, rotation and scale in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector2,
    /// Degrees
    pub rotation: f32,
    pub scale: Vector2,
    /// Pivot for rotation and scale, in local units
    pub origin: Vector2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            rotation: 0.0,
            scale: Vector2::ONE,
            origin: Vector2::ZERO,
        }
    }
}

impl Transform {
    pub fn at(position: Vector2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale: Vector2) {
        self.scale = scale;
    }

    pub fn set_origin(&mut self, origin: Vector2) {
        self.origin = origin;
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }

    /// Model matrix: move the origin to zero, scale, rotate, then translate
    pub fn to_matrix(&self) -> Matrix4x4 {
        Matrix4x4::translation(self.position.x, self.position.y, 0.0)
            * Matrix4x4::rotation_z(self.rotation.to_radians())
            * Matrix4x4::scale(self.scale.x, self.scale.y, 1.0)
            * Matrix4x4::translation(-self.origin.x, -self.origin.y, 0.0)
    }
}

impl Component for Transform {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.to_matrix(), Matrix4x4::IDENTITY);
        assert_eq!(t.scale, Vector2::ONE);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut t = Transform::at(Vector2::new(1.0, 2.0));
        t.translate(Vector2::new(3.0, -1.0));
        t.translate(Vector2::new(1.0, 1.0));
        assert_eq!(t.position, Vector2::new(5.0, 2.0));
    }

    #[test]
    fn test_matrix_pivots_about_origin() {
        let mut t = Transform::at(Vector2::new(100.0, 50.0));
        t.set_origin(Vector2::new(10.0, 0.0));
        t.set_rotation(90.0);

        // The origin itself lands on the position
        let pivot = t.to_matrix().transform_point(Vector3::new(10.0, 0.0, 0.0));
        assert!(pivot.approx_eq_eps(Vector3::new(100.0, 50.0, 0.0), 1e-4));

        let p = t.to_matrix().transform_point(Vector3::new(20.0, 0.0, 0.0));
        assert!(p.approx_eq_eps(Vector3::new(100.0, 60.0, 0.0), 1e-4));
    }
}
