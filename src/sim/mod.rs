//! Game rules
//!
//! Everything here is deterministic for a given seed and frame-time sequence:
//! - Seeded RNG only
//! - No rendering, audio, or terminal dependencies

pub mod bob;
pub mod collision;
pub mod grid;
pub mod selector;
pub mod state;
pub mod tick;

pub use bob::Bob;
pub use collision::{CheckReport, GameEvent, check, final_score, in_goal, out_of_bounds};
pub use grid::{TileIndex, overlaps_tile, tile_position};
pub use selector::{HazardSelector, remap_spawn_tile, sanitize_draw};
pub use state::{
    Direction, EndReason, GamePhase, GameState, HoleSet, LEVEL_RULES, LevelRules, ObstacleSet,
    Outcome, PlayerState, level_rules,
};
pub use tick::{TickInput, tick};
