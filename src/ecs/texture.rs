//! Texture component

use std::sync::Arc;

use super::component::{Component, ComponentKind};
use crate::resources::TextureResource;

/// Shared reference to a loaded texture. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Texture {
    resource: Arc<TextureResource>,
}

impl Texture {
    pub fn new(resource: Arc<TextureResource>) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> &Arc<TextureResource> {
        &self.resource
    }

    pub fn key(&self) -> &str {
        &self.resource.key
    }
}

impl Component for Texture {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::TextureCache;

    #[test]
    fn test_components_share_the_resource() {
        let mut cache = TextureCache::new();
        let handle = cache.load("car", "png");
        let a = Texture::new(handle.clone());
        let b = Texture::new(handle);
        assert!(Arc::ptr_eq(a.resource(), b.resource()));
        assert_eq!(a.key(), "car");
    }
}
