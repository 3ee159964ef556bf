//! Scene assembly: board columns, player, and water backdrop

use glam::{Mat4, Vec3};

use super::canvas::{Canvas, Glyph};
use crate::consts::*;
use crate::sim::GameState;

/// Board columns are 0.4 wide and 4 tall, centered on their tile height
const COLUMN_HALF_WIDTH: f32 = 0.15;
const COLUMN_HALF_HEIGHT: f32 = 2.0;
/// Backdrop plane sits behind the board
const WATER_Z: f32 = -4.0;
const WATER_HALF_WIDTH: f32 = 10.0;
const WATER_DEPTH: f32 = 6.0;
const WATER_STEP: f32 = 0.5;

/// Board-space position of cube `i` (0..100) as drawn
///
/// Cubes are laid out row by row without the tile lattice's column shift, so
/// cube `i` carries tile index `i + 1` but is not always drawn on that tile's
/// hit box.
pub fn cube_position(i: usize) -> (f32, f32) {
    let col = (i % GRID_SIZE as usize) as f32;
    let row = (i / GRID_SIZE as usize) as f32;
    (BOARD_MIN + col * TILE_SPACING, BOARD_MIN + row * TILE_SPACING)
}

/// Project the whole scene into `canvas`
pub fn draw_scene(canvas: &mut Canvas, state: &GameState) {
    let vp = state.camera.view_projection();

    draw_water(canvas, &vp, state.water.offset);

    let cubes = (GRID_SIZE * GRID_SIZE) as usize;
    for i in 0..cubes {
        let tile = i as i32 + 1;
        if state.holes.contains(tile) {
            continue;
        }
        let (x, z) = cube_position(i);
        let (y, glyph) = if state.obstacles.contains(tile) {
            (state.obstacles.bob.offset, Glyph::Obstacle)
        } else {
            (0.0, Glyph::Tile)
        };
        draw_column_top(canvas, &vp, Vec3::new(x, y + COLUMN_HALF_HEIGHT, z), glyph);
    }

    canvas.plot(&vp, state.player.pos, Glyph::Player);
}

fn draw_column_top(canvas: &mut Canvas, vp: &Mat4, top: Vec3, glyph: Glyph) {
    for dx in [-COLUMN_HALF_WIDTH, 0.0, COLUMN_HALF_WIDTH] {
        for dz in [-COLUMN_HALF_WIDTH, 0.0, COLUMN_HALF_WIDTH] {
            canvas.plot(vp, top + Vec3::new(dx, 0.0, dz), glyph);
        }
    }
}

fn draw_water(canvas: &mut Canvas, vp: &Mat4, level: f32) {
    let columns = (2.0 * WATER_HALF_WIDTH / WATER_STEP) as i32;
    let rows = (WATER_DEPTH / WATER_STEP) as i32;
    for c in 0..=columns {
        for r in 0..=rows {
            let x = -WATER_HALF_WIDTH + c as f32 * WATER_STEP;
            let y = level - r as f32 * WATER_STEP;
            canvas.plot(vp, Vec3::new(x, y, WATER_Z), Glyph::Water);
        }
    }
}
