use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::content::{
    BACKDROP_LAYERS, DEBUG_BACKGROUND_TEXTURE, DEBUG_GRID_TEXTURE, FONT_SPACING, FPS_FONT_SIZE,
    MONO_FONT, TEXT_FONT, UI_FONT_SIZE,
};
use crate::resources::debugmode::DebugMode;
use crate::resources::editor::EditorState;
use crate::resources::fontstore::FontStore;
use crate::resources::framecounter::FrameCounter;
use crate::resources::gamestate::GameState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{TextureStore, rect_key};
use crate::resources::tilegrid::TileGrid;
use crate::resources::worldtime::WorldTime;
use crate::systems::content::measure_text;

/// Draw one frame: world, then editor, then the FPS overlay.
///
/// A texture or font missing from the content registry aborts the frame with
/// an error; the main loop treats that as fatal.
pub fn draw_frame(world: &mut World, d: &mut RaylibDrawHandle) -> Result<(), String> {
    d.clear_background(Color::BLACK);
    draw_world(world, d)?;
    draw_editor(world, d)?;
    draw_fps(world, d)
}

/// Backdrop, blocs and player through the camera, then the debug overlays.
pub fn draw_world(world: &mut World, d: &mut RaylibDrawHandle) -> Result<(), String> {
    let players: Vec<(Sprite, MapPosition)> = {
        let mut q = world.query_filtered::<(&Sprite, &MapPosition), With<Player>>();
        q.iter(world).map(|(s, p)| (s.clone(), *p)).collect()
    };

    let camera = *world.resource::<Camera2DRes>();
    let screen = *world.resource::<ScreenSize>();
    let textures = world.resource::<TextureStore>();
    let grid = world.resource::<TileGrid>();

    draw_backdrop(textures, &camera, screen, d)?;

    {
        let mut d2 = d.begin_mode2D(camera.0);

        // Cull against the camera's world rect.
        let view_min = camera.screen_to_world(Vector2::zero());
        let range = grid.visible_cells(view_min, screen.w as f32, screen.h as f32);
        let size = grid.bloc_size() as f32;
        for (col, row, bloc) in grid.blocs_in(range) {
            let tex = textures.require(bloc.kind.tex_key())?;
            let origin = grid.cell_origin(col, row);
            let dest = Rectangle {
                x: origin.x,
                y: origin.y,
                width: size,
                height: size,
            };
            d2.draw_texture_pro(tex, full_source(tex), dest, Vector2::zero(), 0.0, Color::WHITE);
        }

        for (sprite, position) in players.iter() {
            let tex = textures.require(&sprite.tex_key)?;
            let top_left = sprite.top_left(position.pos);
            let dest = Rectangle {
                x: top_left.x,
                y: top_left.y,
                width: sprite.width,
                height: sprite.height,
            };
            d2.draw_texture_pro(tex, full_source(tex), dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }

    if world.contains_resource::<DebugMode>() {
        draw_debug(world, d)?;
    }
    Ok(())
}

fn full_source(tex: &Texture2D) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: tex.width as f32,
        height: tex.height as f32,
    }
}

/// Hills, far layer first. Layer `i` of `n` scrolls at `(i + 1) / (n + 1)` of
/// the camera speed and is tiled across the screen width, resting on the
/// bottom edge.
fn draw_backdrop(
    textures: &TextureStore,
    camera: &Camera2DRes,
    screen: ScreenSize,
    d: &mut impl RaylibDraw,
) -> Result<(), String> {
    let offset = camera.offset();
    for (i, key) in BACKDROP_LAYERS.iter().enumerate() {
        let tex = textures.require(key)?;
        let factor = parallax_factor(i, BACKDROP_LAYERS.len());
        let y = (screen.h - tex.height) as f32 + offset.y * factor;
        for x in tile_positions(offset.x * factor, tex.width as f32, screen.w as f32) {
            d.draw_texture_v(tex, Vector2 { x, y }, Color::WHITE);
        }
    }
    Ok(())
}

/// Grid overlay aligned to the bloc lattice plus the diagnostics panel.
fn draw_debug(world: &World, d: &mut impl RaylibDraw) -> Result<(), String> {
    let camera = world.resource::<Camera2DRes>();
    let screen = *world.resource::<ScreenSize>();
    let textures = world.resource::<TextureStore>();
    let grid = world.resource::<TileGrid>();
    let fonts = world.non_send_resource::<FontStore>();

    let grid_tex = textures.require(DEBUG_GRID_TEXTURE)?;
    let offset = camera.offset();
    // The texture spans whole blocs, so tiling by its size stays on the lattice.
    for y in tile_positions(offset.y, grid_tex.height as f32, screen.h as f32) {
        for x in tile_positions(offset.x, grid_tex.width as f32, screen.w as f32) {
            d.draw_texture_v(grid_tex, Vector2 { x, y }, Color::WHITE);
        }
    }

    let background = textures.require(DEBUG_BACKGROUND_TEXTURE)?;
    d.draw_texture(background, 0, 0, Color::new(255, 255, 255, 200));

    let font = fonts.require(TEXT_FONT)?;
    let editor = world.resource::<EditorState>();
    let time = world.resource::<WorldTime>();
    let paused = world.resource::<GameState>().is_paused();
    let hovered = match editor.hovered {
        Some((col, row)) => format!("{},{}", col, row),
        None => "-".to_string(),
    };
    let lines = [
        format!("Camera: ({:.1}, {:.1})", offset.x, offset.y),
        format!("Cell: {}", hovered),
        format!("Time: {:.1} s", time.elapsed),
        format!("Paused: {}", if paused { "yes" } else { "no" }),
        format!("Blocs: {}", grid.filled_count()),
        format!("Edits: {}", editor.edits),
    ];
    for (i, line) in lines.iter().enumerate() {
        let pos = Vector2 {
            x: 6.0,
            y: 4.0 + i as f32 * (UI_FONT_SIZE + 4.0),
        };
        d.draw_text_ex(font, line, pos, UI_FONT_SIZE, FONT_SPACING, Color::BLACK);
    }
    Ok(())
}

/// Hovered cell outline and the editor status line.
pub fn draw_editor(world: &World, d: &mut impl RaylibDraw) -> Result<(), String> {
    let editor = world.resource::<EditorState>();
    let camera = world.resource::<Camera2DRes>();
    let grid = world.resource::<TileGrid>();
    let screen = *world.resource::<ScreenSize>();
    let fonts = world.non_send_resource::<FontStore>();

    if let Some((col, row)) = editor.hovered {
        let top_left = camera.world_to_screen(grid.cell_origin(col, row));
        let size = grid.bloc_size() as i32;
        d.draw_rectangle_lines(
            top_left.x as i32,
            top_left.y as i32,
            size,
            size,
            Color::YELLOW,
        );
    }

    let font = fonts.require(TEXT_FONT)?;
    let pos = Vector2 {
        x: 6.0,
        y: screen.h as f32 - UI_FONT_SIZE - 6.0,
    };
    d.draw_text_ex(
        font,
        &editor.status_line(),
        pos,
        UI_FONT_SIZE,
        FONT_SPACING,
        Color::WHITE,
    );
    Ok(())
}

/// `FPS:<n>` in the top-right corner over a white rectangle of exactly the
/// label's size, looked up as `"rect,<w>,<h>"`.
pub fn draw_fps(world: &World, d: &mut impl RaylibDraw) -> Result<(), String> {
    let fonts = world.non_send_resource::<FontStore>();
    let textures = world.resource::<TextureStore>();
    let screen = *world.resource::<ScreenSize>();
    let label = world.resource::<FrameCounter>().label();

    let font = fonts.require(MONO_FONT)?;
    let size = measure_text(font, &label, FPS_FONT_SIZE, FONT_SPACING);
    let position = Vector2 {
        x: screen.w as f32 - size.x,
        y: 0.0,
    };
    let background = textures.require(rect_key(size.x as i32, size.y as i32))?;
    d.draw_texture_v(background, position, Color::WHITE);
    d.draw_text_ex(font, &label, position, FPS_FONT_SIZE, FONT_SPACING, Color::BLACK);
    Ok(())
}

/// Scroll speed of backdrop layer `index` out of `count`, far to near.
pub fn parallax_factor(index: usize, count: usize) -> f32 {
    (index + 1) as f32 / (count + 1) as f32
}

/// Screen x (or y) of the first tile of a pattern `period` pixels wide that
/// is shifted by `offset`, in `(-period, 0]` so tiling from it covers the
/// screen from its left (or top) edge.
pub fn tile_start(offset: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let shift = offset.rem_euclid(period);
    if shift == 0.0 { 0.0 } else { shift - period }
}

/// Positions of the copies of a `period`-wide pattern shifted by `offset`
/// needed to cover `0..extent`. Empty when `period` is not positive.
pub fn tile_positions(offset: f32, period: f32, extent: f32) -> impl Iterator<Item = f32> {
    let start = tile_start(offset, period);
    let count = if period > 0.0 {
        ((extent - start) / period).ceil().max(0.0) as usize
    } else {
        0
    };
    (0..count).map(move |i| start + i as f32 * period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_factors_increase_toward_viewer() {
        let factors: Vec<f32> = (0..6).map(|i| parallax_factor(i, 6)).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert!((factors[0] - 1.0 / 7.0).abs() < 1e-6);
        assert!((factors[5] - 6.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_tile_start_in_range() {
        assert_eq!(tile_start(0.0, 32.0), 0.0);
        assert_eq!(tile_start(10.0, 32.0), -22.0);
        assert_eq!(tile_start(-10.0, 32.0), -10.0);
        assert_eq!(tile_start(64.0, 32.0), 0.0);
        assert_eq!(tile_start(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_tile_positions_cover_extent() {
        let xs: Vec<f32> = tile_positions(10.0, 100.0, 250.0).collect();
        assert_eq!(xs, vec![-90.0, 10.0, 110.0, 210.0]);

        let xs: Vec<f32> = tile_positions(0.0, 100.0, 200.0).collect();
        assert_eq!(xs, vec![0.0, 100.0]);
    }

    #[test]
    fn test_tile_positions_zero_width_is_empty() {
        assert_eq!(tile_positions(0.0, 0.0, 1200.0).count(), 0);
        assert_eq!(tile_positions(15.0, -4.0, 1200.0).count(), 0);
    }
}
