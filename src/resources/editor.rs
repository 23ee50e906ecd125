//! Level editor state.
//!
//! Holds what the editor needs between update steps: the cell under the
//! mouse, the brush painted with the left button, and a running count of
//! edits so the debug panel can show activity.
use bevy_ecs::prelude::Resource;

use crate::resources::tilegrid::BlocKind;

#[derive(Resource, Debug, Clone, Default)]
pub struct EditorState {
    /// Grid cell under the mouse cursor, `None` when outside the world.
    pub hovered: Option<(u32, u32)>,
    pub brush: BlocKind,
    /// Number of cells painted or erased since startup.
    pub edits: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line status shown at the bottom of the screen.
    pub fn status_line(&self) -> String {
        match self.hovered {
            Some((col, row)) => format!("Editor: {} ({},{})", self.brush.name(), col, row),
            None => format!("Editor: {} (-,-)", self.brush.name()),
        }
    }
}
