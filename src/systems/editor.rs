//! Level editor update.
//!
//! Maps the mouse into the world through the camera and edits the bloc under
//! it: left button paints the current brush into air, right button erases.
//! Buttons are level-triggered so dragging paints a stroke. Any wheel movement
//! cycles the brush.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::editor::EditorState;
use crate::resources::input::InputState;
use crate::resources::tilegrid::{Bloc, TileGrid};

pub fn editor_update(
    input: Res<InputState>,
    camera: Res<Camera2DRes>,
    mut grid: ResMut<TileGrid>,
    mut editor: ResMut<EditorState>,
) {
    let world_pos = camera.screen_to_world(input.mouse.position);
    let hovered = grid.cell_at(world_pos);
    if editor.hovered != hovered {
        editor.hovered = hovered;
    }

    if input.mouse.wheel != 0.0 {
        let next = editor.brush.next();
        if next != editor.brush {
            debug!("Editor brush: {}", next.name());
            editor.brush = next;
        }
    }

    let Some((col, row)) = hovered else {
        return;
    };

    if input.mouse.left {
        if grid.get(col, row).is_none() {
            let brush = editor.brush;
            grid.set(col, row, Some(Bloc::new(brush)));
            editor.edits += 1;
            debug!("Painted {} at ({}, {})", brush.name(), col, row);
        }
    } else if input.mouse.right && grid.get(col, row).is_some() {
        grid.set(col, row, None);
        editor.edits += 1;
        debug!("Erased bloc at ({}, {})", col, row);
    }
}
