//! World tile grid.
//!
//! The world is a fixed-size grid of cells, each either empty air or a
//! [`Bloc`]. Cell `(col, row)` covers the world-space square starting at
//! `(col * bloc_size, row * bloc_size)`; row 0 is the top of the world.
//!
//! Terrain is generated once at startup from a seeded [`fastrand::Rng`], the
//! editor mutates it afterwards.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Side length of a bloc in pixels.
pub const BLOC_SIZE: u32 = 32;

/// Material of a bloc. Each kind maps to a texture key in the content registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlocKind {
    #[default]
    Dirt,
}

impl BlocKind {
    /// Every kind, in brush cycling order.
    pub const ALL: [BlocKind; 1] = [BlocKind::Dirt];

    pub fn tex_key(&self) -> &'static str {
        match self {
            BlocKind::Dirt => "dirt",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlocKind::Dirt => "Dirt",
        }
    }

    /// The kind after this one, wrapping around.
    pub fn next(&self) -> BlocKind {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// One solid cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bloc {
    pub kind: BlocKind,
}

impl Bloc {
    pub fn new(kind: BlocKind) -> Self {
        Bloc { kind }
    }
}

/// Inclusive-exclusive cell ranges intersecting the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub cols: (u32, u32),
    pub rows: (u32, u32),
}

impl CellRange {
    pub fn is_empty(&self) -> bool {
        self.cols.0 >= self.cols.1 || self.rows.0 >= self.rows.1
    }
}

#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    bloc_size: u32,
    cells: Vec<Option<Bloc>>,
}

impl TileGrid {
    /// An all-air grid.
    pub fn empty(columns: u32, rows: u32, bloc_size: u32) -> Self {
        TileGrid {
            columns,
            rows,
            bloc_size: bloc_size.max(1),
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    /// Rolling dirt hills.
    ///
    /// The surface starts near 60% of the height and walks by at most one
    /// bloc per column. At least two rows of air stay on top and the bottom
    /// row is always solid.
    pub fn generate(columns: u32, rows: u32, bloc_size: u32, rng: &mut fastrand::Rng) -> Self {
        let mut grid = Self::empty(columns, rows, bloc_size);
        if rows == 0 {
            return grid;
        }
        let highest = 2.min(rows - 1) as i64;
        let lowest = (rows - 1) as i64;
        let mut surface = ((rows as f32 * 0.6) as i64).clamp(highest, lowest);

        for col in 0..columns {
            surface = (surface + rng.i64(-1..=1)).clamp(highest, lowest);
            for row in surface as u32..rows {
                grid.set(col, row, Some(Bloc::new(BlocKind::Dirt)));
            }
        }
        grid
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn bloc_size(&self) -> u32 {
        self.bloc_size
    }

    /// World size in pixels.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            (self.columns * self.bloc_size) as f32,
            (self.rows * self.bloc_size) as f32,
        )
    }

    pub fn in_bounds(&self, col: u32, row: u32) -> bool {
        col < self.columns && row < self.rows
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        self.in_bounds(col, row)
            .then(|| row as usize * self.columns as usize + col as usize)
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&Bloc> {
        self.index(col, row).and_then(|i| self.cells[i].as_ref())
    }

    /// Replace a cell. Returns `true` if the cell content changed.
    pub fn set(&mut self, col: u32, row: u32, bloc: Option<Bloc>) -> bool {
        let Some(i) = self.index(col, row) else {
            return false;
        };
        if self.cells[i] == bloc {
            return false;
        }
        self.cells[i] = bloc;
        true
    }

    /// Cell containing a world-space point, if inside the grid.
    pub fn cell_at(&self, pos: Vector2) -> Option<(u32, u32)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let size = self.bloc_size as f32;
        let col = (pos.x / size).floor() as u32;
        let row = (pos.y / size).floor() as u32;
        self.in_bounds(col, row).then_some((col, row))
    }

    /// World-space top-left corner of a cell.
    pub fn cell_origin(&self, col: u32, row: u32) -> Vector2 {
        Vector2 {
            x: (col * self.bloc_size) as f32,
            y: (row * self.bloc_size) as f32,
        }
    }

    /// Topmost solid row of a column.
    pub fn surface_row(&self, col: u32) -> Option<u32> {
        (0..self.rows).find(|&row| self.get(col, row).is_some())
    }

    /// Cells overlapping a `screen_w`×`screen_h` view whose top-left corner
    /// sits at world point `view_min`.
    pub fn visible_cells(&self, view_min: Vector2, screen_w: f32, screen_h: f32) -> CellRange {
        let size = self.bloc_size as f32;
        let clamp_col = |v: f32| (v.max(0.0) as u32).min(self.columns);
        let clamp_row = |v: f32| (v.max(0.0) as u32).min(self.rows);
        CellRange {
            cols: (
                clamp_col((view_min.x / size).floor()),
                clamp_col(((view_min.x + screen_w) / size).ceil()),
            ),
            rows: (
                clamp_row((view_min.y / size).floor()),
                clamp_row(((view_min.y + screen_h) / size).ceil()),
            ),
        }
    }

    /// Iterate solid cells inside a range.
    pub fn blocs_in(&self, range: CellRange) -> impl Iterator<Item = (u32, u32, &Bloc)> + '_ {
        (range.rows.0..range.rows.1).flat_map(move |row| {
            (range.cols.0..range.cols.1)
                .filter_map(move |col| self.get(col, row).map(|bloc| (col, row, bloc)))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirt() -> Option<Bloc> {
        Some(Bloc::new(BlocKind::Dirt))
    }

    #[test]
    fn test_empty_grid_has_no_blocs() {
        let grid = TileGrid::empty(10, 5, BLOC_SIZE);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.surface_row(3), None);
        assert_eq!(grid.pixel_size(), (320.0, 160.0));
    }

    #[test]
    fn test_set_reports_changes() {
        let mut grid = TileGrid::empty(4, 4, BLOC_SIZE);
        assert!(grid.set(1, 2, dirt()));
        assert!(!grid.set(1, 2, dirt()));
        assert!(grid.set(1, 2, None));
        assert!(!grid.set(1, 2, None));
        assert!(!grid.set(9, 0, dirt()));
    }

    #[test]
    fn test_cell_at_bounds() {
        let grid = TileGrid::empty(4, 3, 32);
        assert_eq!(grid.cell_at(Vector2 { x: 0.0, y: 0.0 }), Some((0, 0)));
        assert_eq!(grid.cell_at(Vector2 { x: 33.0, y: 95.9 }), Some((1, 2)));
        assert_eq!(grid.cell_at(Vector2 { x: 128.0, y: 10.0 }), None);
        assert_eq!(grid.cell_at(Vector2 { x: -1.0, y: 10.0 }), None);
    }

    #[test]
    fn test_surface_row_is_topmost_solid() {
        let mut grid = TileGrid::empty(2, 6, BLOC_SIZE);
        grid.set(0, 4, dirt());
        grid.set(0, 2, dirt());
        assert_eq!(grid.surface_row(0), Some(2));
        assert_eq!(grid.surface_row(1), None);
    }

    #[test]
    fn test_generate_respects_margins() {
        let mut rng = fastrand::Rng::with_seed(7);
        let grid = TileGrid::generate(150, 25, BLOC_SIZE, &mut rng);
        for col in 0..grid.columns() {
            let surface = grid.surface_row(col).expect("every column has ground");
            assert!(surface >= 2);
            for row in surface..grid.rows() {
                assert!(grid.get(col, row).is_some());
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = TileGrid::generate(40, 20, BLOC_SIZE, &mut fastrand::Rng::with_seed(99));
        let b = TileGrid::generate(40, 20, BLOC_SIZE, &mut fastrand::Rng::with_seed(99));
        for col in 0..40 {
            assert_eq!(a.surface_row(col), b.surface_row(col));
        }
    }

    #[test]
    fn test_generate_surface_walks_one_step() {
        let grid = TileGrid::generate(60, 25, BLOC_SIZE, &mut fastrand::Rng::with_seed(3));
        for col in 1..grid.columns() {
            let a = grid.surface_row(col - 1).unwrap() as i64;
            let b = grid.surface_row(col).unwrap() as i64;
            assert!((a - b).abs() <= 1);
        }
    }

    #[test]
    fn test_visible_cells_clamped_to_grid() {
        let grid = TileGrid::empty(150, 25, 32);
        let range = grid.visible_cells(Vector2 { x: -50.0, y: 0.0 }, 1200.0, 800.0);
        assert_eq!(range.cols, (0, 36));
        assert_eq!(range.rows, (0, 25));

        let off = grid.visible_cells(Vector2 { x: 10_000.0, y: 0.0 }, 1200.0, 800.0);
        assert!(off.is_empty());
    }

    #[test]
    fn test_blocs_in_yields_only_solid_cells() {
        let mut grid = TileGrid::empty(5, 5, 32);
        grid.set(1, 1, dirt());
        grid.set(4, 4, dirt());
        let range = CellRange {
            cols: (0, 3),
            rows: (0, 3),
        };
        let found: Vec<_> = grid.blocs_in(range).map(|(c, r, _)| (c, r)).collect();
        assert_eq!(found, vec![(1, 1)]);
    }

    #[test]
    fn test_bloc_kind_cycle_wraps() {
        assert_eq!(BlocKind::Dirt.next(), BlocKind::Dirt);
        assert_eq!(BlocKind::Dirt.tex_key(), "dirt");
    }
}
