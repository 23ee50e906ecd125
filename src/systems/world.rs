//! World update.
//!
//! There is no physics: the player simply stands on top of the highest bloc of
//! the column under its pivot. When the editor digs or builds beneath it, the
//! player follows the new surface on the next step. Columns with no ground
//! leave the player where it is.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::tilegrid::TileGrid;

pub fn world_update(grid: Res<TileGrid>, mut query: Query<&mut MapPosition, With<Player>>) {
    for mut position in query.iter_mut() {
        let Some(feet_y) = surface_y(&grid, position.pos.x) else {
            continue;
        };
        if position.pos.y != feet_y {
            position.pos.y = feet_y;
        }
    }
}

/// World y of the ground surface under world x.
pub fn surface_y(grid: &TileGrid, x: f32) -> Option<f32> {
    let (col, _) = grid.cell_at(Vector2 { x, y: 0.0 })?;
    let row = grid.surface_row(col)?;
    Some(grid.cell_origin(col, row).y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tilegrid::{Bloc, BlocKind};

    #[test]
    fn test_surface_y() {
        let mut grid = TileGrid::empty(3, 10, 32);
        grid.set(1, 7, Some(Bloc::new(BlocKind::Dirt)));
        assert_eq!(surface_y(&grid, 40.0), Some(224.0));
        assert_eq!(surface_y(&grid, 10.0), None);
        assert_eq!(surface_y(&grid, -5.0), None);
    }
}
