//! Per-instance GPU records for shape batches

use bytemuck::{Pod, Zeroable};

use crate::ecs::ShapeKind;
use crate::math::Matrix4x4;

/// Linear RGBA
pub type Color = [f32; 4];

/// One shape instance, laid out for a storage/vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ShapeInstance {
    /// Column-major model matrix (GPU convention)
    pub model: [f32; 16],
    pub color: [f32; 4],
    pub shape: u32,
    pub _pad: [u32; 3],
}

impl ShapeInstance {
    pub fn new(model: &Matrix4x4, color: Color, shape: ShapeKind) -> Self {
        Self {
            model: model.transpose().m,
            color,
            shape: shape.code(),
            _pad: [0; 3],
        }
    }
}

/// Colors for race actors
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: Color = [0.2, 0.8, 0.4, 1.0];
    pub const RACER: Color = [1.0, 0.4, 0.2, 1.0];
}
