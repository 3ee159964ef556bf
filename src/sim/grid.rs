//! Tile grid
//!
//! Board tiles are addressed by a linear index on a 10x10 lattice. Both the
//! hole and obstacle lookups go through `tile_position`, so hit tests can
//! never disagree about where a tile is.

use glam::Vec2;

use crate::consts::*;

/// Linear tile index. Valid draws are in [0, 98); any value maps somewhere.
pub type TileIndex = i32;

/// World (x, z) position of a tile
///
/// `x = -2 + ((i % 10) - 1) * 0.4`, `z = -2 + (i / 10) * 0.4` with truncating
/// integer division, so column 0 lies one step left of the board edge.
#[inline]
pub fn tile_position(index: TileIndex) -> Vec2 {
    let column = index % GRID_SIZE;
    let row = index / GRID_SIZE;
    Vec2::new(
        BOARD_MIN + (column - 1) as f32 * TILE_SPACING,
        BOARD_MIN + row as f32 * TILE_SPACING,
    )
}

/// True when `pos` lies strictly inside the hit box of `tile`
#[inline]
pub fn overlaps_tile(pos: Vec2, tile: TileIndex) -> bool {
    let center = tile_position(tile);
    pos.x > center.x - HIT_TOLERANCE
        && pos.x < center.x + HIT_TOLERANCE
        && pos.y > center.y - HIT_TOLERANCE
        && pos.y < center.y + HIT_TOLERANCE
}
