//! Random tile selector
//!
//! Re-rolls the hole and obstacle sets every `speedflag` seconds. Each draw is
//! post-processed: multiples of 10 become 98, and a draw made while the last
//! hole sits under the player becomes 84.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{TileIndex, tile_position};
use super::state::{HoleSet, ObstacleSet};
use crate::consts::*;
use crate::same_spot;

/// Seeded hazard generator plus its refresh timer
#[derive(Debug, Clone)]
pub struct HazardSelector {
    rng: Pcg32,
    /// Position of the most recently drawn hole value (before post-processing)
    last_hole: Vec2,
    /// Seconds since the last refresh
    pub since_refresh: f32,
    /// Completed refreshes
    pub refreshes: u64,
}

impl HazardSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_hole: Vec2::ZERO,
            since_refresh: 0.0,
            refreshes: 0,
        }
    }

    /// Accumulate frame time; re-roll both sets once `interval` has elapsed.
    /// Returns true if a refresh happened.
    pub fn tick(
        &mut self,
        dt: f32,
        interval: f32,
        player: Vec2,
        holes: &mut HoleSet,
        obstacles: &mut ObstacleSet,
    ) -> bool {
        self.since_refresh += dt;
        if self.since_refresh < interval {
            return false;
        }
        self.refresh(player, holes, obstacles);
        // Leftover time is dropped, not carried into the next interval
        self.since_refresh = 0.0;
        true
    }

    /// Replace both hazard sets with fresh draws
    pub fn refresh(&mut self, player: Vec2, holes: &mut HoleSet, obstacles: &mut ObstacleSet) {
        for slot in holes.0.iter_mut() {
            let raw = self.draw();
            self.last_hole = tile_position(raw);
            *slot = sanitize_draw(raw, self.last_hole, player);
        }
        for slot in obstacles.tiles.iter_mut() {
            let raw = self.draw();
            *slot = sanitize_draw(raw, self.last_hole, player);
        }
        obstacles.carried = false;
        self.refreshes += 1;
        log::debug!(
            "Hazards re-rolled (#{}): holes={:?} obstacles={:?}",
            self.refreshes,
            holes.0,
            obstacles.tiles
        );
    }

    fn draw(&mut self) -> TileIndex {
        self.rng.random_range(0..TILE_DRAW_RANGE)
    }
}

/// Post-process one raw draw
///
/// Multiples of 10 always become 98. Otherwise, if the last hole position
/// coincides with the player, the slot becomes 84.
pub fn sanitize_draw(raw: TileIndex, last_hole: Vec2, player: Vec2) -> TileIndex {
    if raw % 10 == 0 {
        EDGE_REPLACEMENT_TILE
    } else if same_spot(last_hole, player) {
        UNDER_PLAYER_TILE
    } else {
        raw
    }
}

/// Move hazards off the spawn tile (runs every frame before the checks)
///
/// Only one slot index is rewritten per pass: a hole on tile 1 wins over an
/// obstacle in the same slot.
pub fn remap_spawn_tile(holes: &mut HoleSet, obstacles: &mut ObstacleSet) {
    for c in 0..HOLE_COUNT {
        if holes.0[c] == SPAWN_TILE {
            holes.0[c] = SPAWN_HOLE_REPLACEMENT;
        } else if c < OBSTACLE_COUNT && obstacles.tiles[c] == SPAWN_TILE {
            obstacles.tiles[c] = SPAWN_OBSTACLE_REPLACEMENT;
        }
    }
}
