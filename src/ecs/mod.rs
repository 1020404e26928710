//! Entity/component layer
//!
//! Actors own a small closed set of components. Specializations (racers,
//! the player) live in `sim` and wrap an [`Actor`].

pub mod actor;
pub mod component;
pub mod shape;
pub mod texture;
pub mod transform;

pub use actor::{Actor, Entity};
pub use component::{AnyComponent, Component, ComponentKind, ComponentVariant};
pub use shape::{Shape, ShapeKind};
pub use texture::Texture;
pub use transform::Transform;
