//! Visual component
//!
//! A shape never owns geometry state of its own: the owning actor copies
//! its Transform into the shape every frame before rendering.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::component::{Component, ComponentKind};
use crate::math::Vector2;
use crate::renderer::{Color, DrawCommand, DrawTarget, colors};
use crate::resources::TextureResource;

/// Drawable primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Placeholder with nothing to draw
    #[default]
    Empty,
    Circle,
    Rectangle,
    Triangle,
    Polygon,
}

impl ShapeKind {
    /// Discriminant the GPU shader switches on
    pub fn code(&self) -> u32 {
        match self {
            ShapeKind::Empty => 0,
            ShapeKind::Circle => 1,
            ShapeKind::Rectangle => 2,
            ShapeKind::Triangle => 3,
            ShapeKind::Polygon => 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub fill: Color,
    pub texture: Option<Arc<TextureResource>>,
    position: Vector2,
    rotation: f32,
    scale: Vector2,
    origin: Vector2,
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(ShapeKind::Empty)
    }
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            fill: colors::WHITE,
            texture: None,
            position: Vector2::ZERO,
            rotation: 0.0,
            scale: Vector2::ONE,
            origin: Vector2::ZERO,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn set_texture(&mut self, texture: Arc<TextureResource>) {
        self.texture = Some(texture);
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

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> Vector2 {
        self.scale
    }

    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Snapshot for the draw target
    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand {
            shape: self.kind,
            fill: self.fill,
            texture: self.texture.clone(),
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            origin: self.origin,
        }
    }
}

impl Component for Shape {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Shape
    }

    fn render(&self, target: &dyn DrawTarget) {
        if self.kind == ShapeKind::Empty {
            return;
        }
        target.draw(&self.draw_command());
    }

    fn is_visual(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    #[test]
    fn test_empty_shape_draws_nothing() {
        let list = DrawList::new();
        Shape::default().render(&list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_render_uses_synced_state() {
        let mut shape = Shape::new(ShapeKind::Triangle).with_fill(colors::RACER);
        shape.set_position(Vector2::new(4.0, 5.0));
        shape.set_rotation(45.0);

        let list = DrawList::new();
        shape.render(&list);
        let cmds = list.drain();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].shape, ShapeKind::Triangle);
        assert_eq!(cmds[0].position, Vector2::new(4.0, 5.0));
        assert_eq!(cmds[0].rotation, 45.0);
        assert_eq!(cmds[0].fill, colors::RACER);
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ShapeKind::Empty,
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Polygon,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
