// crates/lifewave-core/src/grid/mod.rs
//
// Toroidal cell grid: double-buffered storage, the neighbour rule and the reseeding walk.
//
// Coordinates are (x, y) with x in 0..GRID_WIDTH (columns) and y in 0..GRID_HEIGHT (rows).
// Every accessor reduces coordinates modulo the grid size first, so the grid has no edges.

pub mod rule;
pub mod seed;
pub mod store;

pub const GRID_WIDTH: usize = 16;
pub const GRID_HEIGHT: usize = 16;
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Wrap a signed column index onto the torus.
#[inline]
pub fn wrap_x(x: isize) -> usize {
    x.rem_euclid(GRID_WIDTH as isize) as usize
}

/// Wrap a signed row index onto the torus.
#[inline]
pub fn wrap_y(y: isize) -> usize {
    y.rem_euclid(GRID_HEIGHT as isize) as usize
}
