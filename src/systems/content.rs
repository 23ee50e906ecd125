//! Content loading and procedural textures.
//!
//! Everything here needs a live raylib context and runs once during setup:
//! - [`load_content`] reads the manifest's textures and fonts from disk
//! - [`generate_grid_texture`] / [`generate_filled_rectangle`] build the
//!   debug overlays in memory
//! - [`generate_fps_rects`] pre-renders a background for every size the FPS
//!   label can measure at, keyed by [`rect_key`]
//!
//! Any failure is returned as an error; the caller treats it as fatal.
use std::ffi::CString;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use raylib::ffi;
use raylib::prelude::*;
use rustc_hash::FxHashSet;

use crate::resources::content::ContentManifest;
use crate::resources::fontstore::FontStore;
use crate::resources::framecounter::{MAX_DISPLAYED_FPS, fps_label};
use crate::resources::texturestore::{TextureStore, rect_key};

/// Load every texture and font named in the manifest.
pub fn load_content(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    root: &Path,
    manifest: &ContentManifest,
) -> Result<(TextureStore, FontStore), String> {
    let content_timer = Instant::now();

    let mut textures = TextureStore::new();
    for name in &manifest.textures {
        let path = ContentManifest::texture_path(root, name);
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path {:?} is not valid UTF-8", path))?;
        let texture = rl
            .load_texture(th, path_str)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {}", name, path_str, e))?;
        debug!("Loaded texture '{}' ({}x{})", name, texture.width, texture.height);
        textures.insert(name.clone(), texture);
    }

    let mut fonts = FontStore::new();
    for name in &manifest.fonts {
        let path = ContentManifest::font_path(root, name);
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Font path {:?} is not valid UTF-8", path))?;
        let font = rl
            .load_font(th, path_str)
            .map_err(|e| format!("Failed to load font '{}' from {}: {}", name, path_str, e))?;
        debug!("Loaded font '{}'", name);
        fonts.add(name.clone(), font);
    }

    info!(
        "Loading textures and fonts : {} ms",
        content_timer.elapsed().as_millis()
    );
    Ok((textures, fonts))
}

/// Solid rectangle texture.
pub fn generate_filled_rectangle(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    width: i32,
    height: i32,
    color: Color,
) -> Result<Texture2D, String> {
    let image = Image::gen_image_color(width.max(1), height.max(1), color);
    rl.load_texture_from_image(th, &image)
        .map_err(|e| format!("Failed to create {}x{} rectangle texture: {}", width, height, e))
}

/// Transparent texture with a one-pixel line on the top and left edge of
/// every cell, `cells_w`×`cells_h` cells of `cell_size` pixels.
pub fn generate_grid_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    cells_w: i32,
    cells_h: i32,
    cell_size: i32,
    color: Color,
) -> Result<Texture2D, String> {
    let width = (cells_w * cell_size).max(1);
    let height = (cells_h * cell_size).max(1);
    let mut image = Image::gen_image_color(width, height, Color::BLANK);
    for col in 0..cells_w {
        image.draw_rectangle(col * cell_size, 0, 1, height, color);
    }
    for row in 0..cells_h {
        image.draw_rectangle(0, row * cell_size, width, 1, color);
    }
    rl.load_texture_from_image(th, &image)
        .map_err(|e| format!("Failed to create grid texture: {}", e))
}

/// Size of `text` drawn with `font`.
pub fn measure_text(font: &Font, text: &str, font_size: f32, spacing: f32) -> Vector2 {
    let Ok(c_text) = CString::new(text) else {
        return Vector2::zero();
    };
    let measured = unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), font_size, spacing) };
    Vector2::new(measured.x, measured.y)
}

/// Every distinct integer size an FPS label can measure at.
pub fn fps_rect_sizes(measure: impl Fn(&str) -> Vector2) -> Vec<(i32, i32)> {
    let mut sizes = FxHashSet::default();
    for fps in 0..=MAX_DISPLAYED_FPS {
        let size = measure(&fps_label(fps));
        sizes.insert((size.x as i32, size.y as i32));
    }
    let mut sizes: Vec<_> = sizes.into_iter().collect();
    sizes.sort_unstable();
    sizes
}

/// Insert a white `"rect,<w>,<h>"` texture for every FPS label size.
pub fn generate_fps_rects(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
    font: &Font,
    font_size: f32,
    spacing: f32,
) -> Result<usize, String> {
    let sizes = fps_rect_sizes(|text| measure_text(font, text, font_size, spacing));
    for &(w, h) in &sizes {
        let key = rect_key(w, h);
        if textures.contains(&key) {
            continue;
        }
        let texture = generate_filled_rectangle(rl, th, w, h, Color::WHITE)?;
        textures.insert(key, texture);
    }
    debug!("Generated {} FPS background textures", sizes.len());
    Ok(sizes.len())
}
