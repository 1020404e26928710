//! Texture handle cache
//!
//! Textures are loaded once and shared read-only between actors. The cache
//! is an explicit value passed to whoever builds actors; there is no global.
//! Decoding pixels is the platform's job; the cache only tracks handles.

use std::collections::HashMap;
use std::sync::Arc;

use crate::consts::DEFAULT_TEXTURE_KEY;

/// An immutable, shareable texture resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureResource {
    /// Lookup key (usually the file stem)
    pub key: String,
    /// File extension the platform loader should use
    pub extension: String,
}

impl TextureResource {
    pub fn new(key: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            extension: extension.into(),
        }
    }

    /// Path relative to the asset root
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.key, self.extension)
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_TEXTURE_KEY
    }
}

/// Key -> shared texture map with a fallback for unknown keys
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<String, Arc<TextureResource>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture. Loading a key twice keeps the first resource.
    pub fn load(&mut self, key: &str, extension: &str) -> Arc<TextureResource> {
        self.textures
            .entry(key.to_string())
            .or_insert_with(|| {
                log::debug!("Loaded texture {}.{}", key, extension);
                Arc::new(TextureResource::new(key, extension))
            })
            .clone()
    }

    /// Look up a texture, substituting the default one when the key is unknown
    pub fn get(&mut self, key: &str) -> Arc<TextureResource> {
        if let Some(texture) = self.textures.get(key) {
            return texture.clone();
        }

        log::warn!("Texture not found: {}. Using default texture.", key);
        self.load(DEFAULT_TEXTURE_KEY, "png")
    }

    /// Look up without fallback or logging
    pub fn find(&self, key: &str) -> Option<Arc<TextureResource>> {
        self.textures.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_idempotent() {
        let mut cache = TextureCache::new();
        let a = cache.load("car", "png");
        let b = cache.load("car", "jpg");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.extension, "png");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let mut cache = TextureCache::new();
        let tex = cache.get("missing");
        assert!(tex.is_default());
        assert_eq!(tex.file_name(), "default.png");

        // The default is created once and reused
        let again = cache.get("also_missing");
        assert!(Arc::ptr_eq(&tex, &again));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_handles() {
        let mut cache = TextureCache::new();
        cache.load("track", "png");
        let a = cache.get("track");
        let b = cache.get("track");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(cache.find("nope").is_none());
    }
}
