//! Draw-target seam
//!
//! The simulation never talks to a GPU. Visual components describe what
//! to draw as a [`DrawCommand`] and hand it to whatever implements
//! [`DrawTarget`]; the windowing layer owns the actual pipeline.

pub mod instance;

use std::cell::RefCell;
use std::sync::Arc;

pub use instance::{Color, ShapeInstance, colors};

use crate::ecs::{ShapeKind, Transform};
use crate::math::{Matrix4x4, Vector2};
use crate::resources::TextureResource;

/// One shape to draw this frame, already positioned by its actor
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub shape: ShapeKind,
    pub fill: Color,
    pub texture: Option<Arc<TextureResource>>,
    pub position: Vector2,
    /// Degrees, clockwise in screen space
    pub rotation: f32,
    pub scale: Vector2,
    /// Pivot for rotation and scale, in local units
    pub origin: Vector2,
}

impl DrawCommand {
    /// Same model matrix the owning actor's Transform produces
    pub fn model_matrix(&self) -> Matrix4x4 {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            origin: self.origin,
        }
        .to_matrix()
    }

    /// Flatten into a GPU-uploadable instance record
    pub fn instance(&self) -> ShapeInstance {
        ShapeInstance::new(&self.model_matrix(), self.fill, self.shape)
    }
}

/// Anything that can receive draw calls (a window, an offscreen batch, a test spy).
///
/// Takes `&self` so visual components can render through a shared,
/// read-only handle; implementors use interior mutability if they batch.
pub trait DrawTarget {
    fn draw(&self, command: &DrawCommand);
}

/// Draw target that just records commands in submission order
#[derive(Debug, Default)]
pub struct DrawList {
    commands: RefCell<Vec<DrawCommand>>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Take all recorded commands, leaving the list empty
    pub fn drain(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    /// Instance records for every recorded command, for a single buffer upload
    pub fn instances(&self) -> Vec<ShapeInstance> {
        self.commands.borrow().iter().map(DrawCommand::instance).collect()
    }
}

impl DrawTarget for DrawList {
    fn draw(&self, command: &DrawCommand) {
        self.commands.borrow_mut().push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn command_at(x: f32, y: f32) -> DrawCommand {
        DrawCommand {
            shape: ShapeKind::Circle,
            fill: colors::RACER,
            texture: None,
            position: Vector2::new(x, y),
            rotation: 90.0,
            scale: Vector2::new(2.0, 2.0),
            origin: Vector2::ZERO,
        }
    }

    #[test]
    fn test_model_matrix_order() {
        let cmd = command_at(10.0, 0.0);
        let p = cmd.model_matrix().transform_point(Vector3::new(1.0, 0.0, 0.0));
        // scaled to (2,0), rotated to (0,2), translated to (10,2)
        assert!(p.approx_eq_eps(Vector3::new(10.0, 2.0, 0.0), 1e-5));
    }

    #[test]
    fn test_model_matrix_pivots_about_origin() {
        let mut cmd = command_at(10.0, 0.0);
        cmd.origin = Vector2::new(1.0, 0.0);
        let p = cmd.model_matrix().transform_point(Vector3::new(1.0, 0.0, 0.0));
        assert!(p.approx_eq_eps(Vector3::new(10.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let list = DrawList::new();
        list.draw(&command_at(1.0, 0.0));
        list.draw(&command_at(2.0, 0.0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.instances().len(), 2);

        let drained = list.drain();
        assert_eq!(drained[1].position, Vector2::new(2.0, 0.0));
        assert!(list.is_empty());
    }
}
