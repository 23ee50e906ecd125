//! Content manifest.
//!
//! Fixed list of assets the game loads at startup and the keys they are
//! registered under. Loading itself lives in
//! [`crate::systems::content`]; this module only knows names and paths.
//!
//! ```text
//! <root>/textures/<name>.png   -> TextureStore[name]
//! <root>/fonts/<name>.ttf      -> FontStore[name]
//! ```

use std::path::{Path, PathBuf};

/// Background layers, far to near.
pub const BACKDROP_LAYERS: [&str; 6] = [
    "collines1",
    "collines2",
    "collines3",
    "collines4",
    "collines5",
    "collines6",
];
pub const PLAYER_TEXTURE: &str = "player";
pub const DIRT_TEXTURE: &str = "dirt";

/// Generated texture keys.
pub const DEBUG_GRID_TEXTURE: &str = "debug_grid";
pub const DEBUG_BACKGROUND_TEXTURE: &str = "debug_background";
pub const DEBUG_BACKGROUND_SIZE: (i32, i32) = (200, 130);

pub const TEXT_FONT: &str = "arial";
pub const MONO_FONT: &str = "consolas";
pub const FPS_FONT_SIZE: f32 = 20.0;
pub const UI_FONT_SIZE: f32 = 16.0;
pub const FONT_SPACING: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentManifest {
    pub textures: Vec<String>,
    pub fonts: Vec<String>,
}

impl Default for ContentManifest {
    fn default() -> Self {
        let mut textures: Vec<String> = BACKDROP_LAYERS.iter().map(|s| s.to_string()).collect();
        textures.push(PLAYER_TEXTURE.to_string());
        textures.push(DIRT_TEXTURE.to_string());
        Self {
            textures,
            fonts: vec![TEXT_FONT.to_string(), MONO_FONT.to_string()],
        }
    }
}

impl ContentManifest {
    pub fn texture_path(root: &Path, name: &str) -> PathBuf {
        root.join("textures").join(format!("{}.png", name))
    }

    pub fn font_path(root: &Path, name: &str) -> PathBuf {
        root.join("fonts").join(format!("{}.ttf", name))
    }
}

/// Number of grid cells the debug grid texture spans, one extra each way so
/// it still covers the screen when shifted by up to one bloc.
pub fn debug_grid_cells(screen_w: i32, screen_h: i32, bloc_size: i32) -> (i32, i32) {
    let size = bloc_size.max(1);
    (screen_w / size + 1, screen_h / size + 1)
}
