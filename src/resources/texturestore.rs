//! Texture store resource.
//!
//! Name→texture half of the content registry. Holds textures loaded from
//! disk (`"dirt"`, `"player"`, ...) as well as generated ones such as the
//! FPS label backgrounds keyed `"rect,<w>,<h>"` (see [`rect_key`]).

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    /// Get a texture by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Get a texture that must exist.
    pub fn require(&self, key: impl AsRef<str>) -> Result<&Texture2D, String> {
        let key = key.as_ref();
        self.map
            .get(key)
            .ok_or_else(|| format!("Texture '{}' not found in TextureStore", key))
    }

    /// Insert a texture with a specific key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.map.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Key of the generated solid rectangle texture of the given pixel size.
pub fn rect_key(width: i32, height: i32) -> String {
    format!("rect,{},{}", width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_key_format() {
        assert_eq!(rect_key(61, 20), "rect,61,20");
        assert_eq!(rect_key(0, 0), "rect,0,0");
    }

    #[test]
    fn test_require_names_missing_key() {
        let store = TextureStore::new();
        let err = store.require("rect,10,10").err().unwrap();
        assert!(err.contains("rect,10,10"));
        assert!(store.is_empty());
    }
}
