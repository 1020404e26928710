//! Component capability model
//!
//! The component set is closed: every component an actor can own is a
//! variant of [`AnyComponent`]. Typed lookup goes through
//! [`ComponentVariant`], which maps a concrete type to its variant at
//! compile time instead of downcasting at runtime.

use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::texture::Texture;
use super::transform::Transform;
use crate::renderer::DrawTarget;

/// Fixed component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComponentKind {
    #[default]
    None,
    Transform,
    Shape,
    Texture,
}

/// Lifecycle shared by every component.
///
/// `begin_play` runs once on activation, `update` and `render` every frame,
/// `destroy` once at teardown. Only visual components draw anything.
pub trait Component {
    fn kind(&self) -> ComponentKind;

    fn begin_play(&mut self) {}

    fn update(&mut self, _dt: f32) {}

    fn render(&self, _target: &dyn DrawTarget) {}

    fn destroy(&mut self) {}

    /// True if `render` produces draw calls
    fn is_visual(&self) -> bool {
        false
    }
}

/// A component owned by an actor
#[derive(Debug, Clone)]
pub enum AnyComponent {
    Transform(Transform),
    Shape(Shape),
    Texture(Texture),
}

impl Component for AnyComponent {
    fn kind(&self) -> ComponentKind {
        match self {
            AnyComponent::Transform(c) => c.kind(),
            AnyComponent::Shape(c) => c.kind(),
            AnyComponent::Texture(c) => c.kind(),
        }
    }

    fn begin_play(&mut self) {
        match self {
            AnyComponent::Transform(c) => c.begin_play(),
            AnyComponent::Shape(c) => c.begin_play(),
            AnyComponent::Texture(c) => c.begin_play(),
        }
    }

    fn update(&mut self, dt: f32) {
        match self {
            AnyComponent::Transform(c) => c.update(dt),
            AnyComponent::Shape(c) => c.update(dt),
            AnyComponent::Texture(c) => c.update(dt),
        }
    }

    fn render(&self, target: &dyn DrawTarget) {
        match self {
            AnyComponent::Transform(c) => c.render(target),
            AnyComponent::Shape(c) => c.render(target),
            AnyComponent::Texture(c) => c.render(target),
        }
    }

    fn destroy(&mut self) {
        match self {
            AnyComponent::Transform(c) => c.destroy(),
            AnyComponent::Shape(c) => c.destroy(),
            AnyComponent::Texture(c) => c.destroy(),
        }
    }

    fn is_visual(&self) -> bool {
        match self {
            AnyComponent::Transform(c) => c.is_visual(),
            AnyComponent::Shape(c) => c.is_visual(),
            AnyComponent::Texture(c) => c.is_visual(),
        }
    }
}

/// Static mapping from a concrete component type to its [`AnyComponent`] variant
pub trait ComponentVariant: Component + Into<AnyComponent> + Sized {
    const KIND: ComponentKind;

    fn from_any(component: &AnyComponent) -> Option<&Self>;

    fn from_any_mut(component: &mut AnyComponent) -> Option<&mut Self>;
}

macro_rules! component_variant {
    ($ty:ident) => {
        impl From<$ty> for AnyComponent {
            fn from(c: $ty) -> Self {
                AnyComponent::$ty(c)
            }
        }

        impl ComponentVariant for $ty {
            const KIND: ComponentKind = ComponentKind::$ty;

            fn from_any(component: &AnyComponent) -> Option<&Self> {
                match component {
                    AnyComponent::$ty(c) => Some(c),
                    _ => None,
                }
            }

            fn from_any_mut(component: &mut AnyComponent) -> Option<&mut Self> {
                match component {
                    AnyComponent::$ty(c) => Some(c),
                    _ => None,
                }
            }
        }
    };
}

component_variant!(Transform);
component_variant!(Shape);
component_variant!(Texture);
