//! Hole Hop - cross a 10x10 board while holes and obstacles re-roll
//!
//! Core modules:
//! - `sim`: Game rules (tile grid, hazard selection, movement, collisions, levels)
//! - `camera`: Camera modes and orthographic view bounds
//! - `renderer`: Terminal renderer projecting the board through the camera
//! - `platform`: Input mapping and frame clock
//! - `audio`: Sound cue playback
//! - `settings`: JSON configuration

pub mod audio;
pub mod camera;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use camera::{Camera, CameraMode};
pub use error::{AssetError, SettingsError, StartupError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Board lattice
    pub const GRID_SIZE: i32 = 10;
    pub const TILE_SPACING: f32 = 0.4;
    pub const BOARD_MIN: f32 = -2.0;
    pub const BOARD_MAX: f32 = 1.6;
    /// Both coordinates above this reach the goal corner
    pub const GOAL_THRESHOLD: f32 = 1.4;
    /// Half-width of the hit box around a hazard tile
    pub const HIT_TOLERANCE: f32 = 0.2;
    /// Slack for float drift when comparing accumulated positions
    pub const POSITION_EPSILON: f32 = 1e-3;

    /// Hazard sets
    pub const HOLE_COUNT: usize = 15;
    pub const OBSTACLE_COUNT: usize = 10;
    /// Draws are uniform in [0, TILE_DRAW_RANGE)
    pub const TILE_DRAW_RANGE: i32 = 98;
    /// Replaces draws that land on a multiple of 10
    pub const EDGE_REPLACEMENT_TILE: i32 = 98;
    /// Replaces draws whose last hole sits under the player
    pub const UNDER_PLAYER_TILE: i32 = 84;
    /// Spawn tile and its per-frame replacements
    pub const SPAWN_TILE: i32 = 1;
    pub const SPAWN_HOLE_REPLACEMENT: i32 = 23;
    pub const SPAWN_OBSTACLE_REPLACEMENT: i32 = 55;

    /// Player defaults
    pub const START_LIVES: u32 = 4;
    pub const FINAL_LEVEL: u8 = 5;
    pub const SENTINEL_X: f32 = -2.0;
    pub const SENTINEL_Z: f32 = -2.0;
    pub const BASE_HEIGHT: f32 = 2.2;
    pub const WALK_STEP: f32 = 0.4;
    pub const JUMP_STEP: f32 = 0.8;

    /// Jump arc: height = BASE_HEIGHT + v*t - g*t*t
    pub const JUMP_LAUNCH_SPEED: f32 = 5.0;
    pub const JUMP_GRAVITY: f32 = 5.0;
    /// Arc time units per second (0.1 per frame at 60 fps)
    pub const DEFAULT_JUMP_RATE: f32 = 6.0;

    /// Obstacles only hit a player at or below this height
    pub const OBSTACLE_CEILING: f32 = 3.0;
    /// Added to the bob offset to get the obstacle's top
    pub const OBSTACLE_TOP: f32 = 3.0;

    /// Bob oscillators (units per second)
    pub const BOB_LOW: f32 = -3.0;
    pub const BOB_HIGH: f32 = 1.0;
    /// 0.005 per obstacle block drawn per frame: 10 blocks at 60 fps
    pub const OBSTACLE_BOB_RATE: f32 = 3.0;
    pub const WATER_BOB_RATE: f32 = 0.6;
    pub const WATER_START: f32 = -2.0;
}

/// Approximate equality for accumulated board positions
#[inline]
pub fn same_spot(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() <= consts::POSITION_EPSILON
}
