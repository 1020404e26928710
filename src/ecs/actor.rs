//! Actor aggregate: a named owner of components

use std::sync::Arc;

use super::component::{AnyComponent, Component, ComponentKind, ComponentVariant};
use super::shape::{Shape, ShapeKind};
use super::texture::Texture;
use super::transform::Transform;
use crate::error::SimError;
use crate::renderer::DrawTarget;
use crate::resources::TextureResource;

/// Frame lifecycle shared by actors and their specializations.
///
/// `update` only fails when a required component is missing, which the
/// driver treats as fatal.
pub trait Entity {
    fn name(&self) -> &str;

    fn begin_play(&mut self);

    fn update(&mut self, dt: f32) -> Result<(), SimError>;

    fn render(&self, target: &dyn DrawTarget);

    fn destroy(&mut self);
}

#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    components: Vec<AnyComponent>,
}

impl Actor {
    /// Actor with an empty Shape and an identity Transform
    pub fn new(name: impl Into<String>) -> Self {
        let mut actor = Self::bare(name);
        actor.add_component(Shape::default());
        actor.add_component(Transform::default());
        actor
    }

    /// Actor with no components at all
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Append a component. Duplicates are kept; lookups return the first.
    pub fn add_component<C: Into<AnyComponent>>(&mut self, component: C) {
        self.components.push(component.into());
    }

    pub fn get_component<T: ComponentVariant>(&self) -> Option<&T> {
        self.components.iter().find_map(T::from_any)
    }

    pub fn get_component_mut<T: ComponentVariant>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(T::from_any_mut)
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// Detach the first component of `kind`
    pub fn remove_component(&mut self, kind: ComponentKind) -> Option<AnyComponent> {
        let idx = self.components.iter().position(|c| c.kind() == kind)?;
        Some(self.components.remove(idx))
    }

    pub fn components(&self) -> &[AnyComponent] {
        &self.components
    }

    /// Set the shape's kind, keeping its synced state and texture
    pub fn set_shape(&mut self, kind: ShapeKind) {
        match self.get_component_mut::<Shape>() {
            Some(shape) => shape.kind = kind,
            None => self.add_component(Shape::new(kind)),
        }
    }

    /// Attach a texture to the actor and its shape, replacing any previous one
    pub fn set_texture(&mut self, texture: Arc<TextureResource>) {
        if let Some(shape) = self.get_component_mut::<Shape>() {
            shape.set_texture(texture.clone());
        }
        match self.get_component_mut::<Texture>() {
            Some(slot) => *slot = Texture::new(texture),
            None => self.add_component(Texture::new(texture)),
        }
    }

    pub fn transform(&self) -> Result<&Transform, SimError> {
        self.get_component::<Transform>()
            .ok_or_else(|| SimError::missing(&self.name, ComponentKind::Transform))
    }

    pub fn transform_mut(&mut self) -> Result<&mut Transform, SimError> {
        let name = &self.name;
        self.components
            .iter_mut()
            .find_map(Transform::from_any_mut)
            .ok_or_else(|| SimError::missing(name, ComponentKind::Transform))
    }

    /// Copy the Transform into the Shape. No-op when either is absent.
    pub fn sync_shape(&mut self) {
        let Some(transform) = self.get_component::<Transform>().copied() else {
            return;
        };
        if let Some(shape) = self.get_component_mut::<Shape>() {
            shape.set_position(transform.position);
            shape.set_rotation(transform.rotation);
            shape.set_scale(transform.scale);
            shape.set_origin(transform.origin);
        }
    }
}

impl Entity for Actor {
    fn name(&self) -> &str {
        &self.name
    }

    fn begin_play(&mut self) {
        for component in &mut self.components {
            component.begin_play();
        }
        self.sync_shape();
    }

    fn update(&mut self, dt: f32) -> Result<(), SimError> {
        for component in &mut self.components {
            component.update(dt);
        }
        self.sync_shape();
        Ok(())
    }

    fn render(&self, target: &dyn DrawTarget) {
        for component in self.components.iter().filter(|c| c.is_visual()) {
            component.render(target);
        }
    }

    fn destroy(&mut self) {
        for component in &mut self.components {
            component.destroy();
        }
    }
}
