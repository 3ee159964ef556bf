//! Game state and core simulation types
//!
//! Everything the frame tick reads or writes lives in `GameState`; nothing is
//! process-global.

use glam::{Vec2, Vec3};

use super::bob::Bob;
use super::grid::TileIndex;
use super::selector::HazardSelector;
use crate::camera::Camera;
use crate::consts::*;

/// Movement requested by input, applied on the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Forward,
    Back,
    Jump,
}

/// The player's position, movement latch, and run bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// x, height, z
    pub pos: Vec3,
    /// Latched direction, consumed once per frame
    pub pending: Direction,
    pub jumping: bool,
    /// Elapsed arc time of the current jump
    pub jump_time: f32,
    pub life: u32,
    /// Penalty counter (each hit adds one)
    pub score: u32,
    /// 1..=5
    pub level: u8,
    /// How many times a latched direction is applied per frame
    pub step_count: i32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            pos: Vec3::new(SENTINEL_X, BASE_HEIGHT, SENTINEL_Z),
            pending: Direction::None,
            jumping: false,
            jump_time: 0.0,
            life: START_LIVES,
            score: 0,
            level: 1,
            step_count: 1,
        }
    }
}

impl PlayerState {
    /// Position on the board plane (x, z)
    pub fn ground_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.z)
    }

    pub fn height(&self) -> f32 {
        self.pos.y
    }

    /// Distance covered by one step (doubled mid-jump)
    pub fn step_length(&self) -> f32 {
        if self.jumping { JUMP_STEP } else { WALK_STEP }
    }

    /// Apply one step in `dir`; `Jump` starts a jump when grounded
    pub fn apply_direction(&mut self, dir: Direction) {
        let step = self.step_length();
        match dir {
            Direction::None => {}
            Direction::Left => self.pos.x -= step,
            Direction::Right => self.pos.x += step,
            Direction::Forward => self.pos.z -= step,
            Direction::Back => self.pos.z += step,
            Direction::Jump => {
                if !self.jumping && self.pos.y <= BASE_HEIGHT + POSITION_EPSILON {
                    self.jumping = true;
                    self.jump_time = 0.0;
                }
            }
        }
    }

    /// Apply the latched direction `step_count` times, then clear it
    pub fn apply_pending(&mut self) {
        let dir = self.pending;
        if dir != Direction::None {
            for _ in 0..self.step_count.max(0) {
                self.apply_direction(dir);
            }
        }
        self.pending = Direction::None;
    }

    /// Advance the jump arc by `dt` seconds at `rate` arc units per second
    ///
    /// Height follows `base + v*t - g*t*t`; the jump ends when that falls back
    /// to the base height.
    pub fn advance_jump(&mut self, dt: f32, rate: f32) {
        if !self.jumping {
            return;
        }
        self.jump_time += dt * rate;
        let t = self.jump_time;
        let height = BASE_HEIGHT + JUMP_LAUNCH_SPEED * t - JUMP_GRAVITY * t * t;
        if height > BASE_HEIGHT {
            self.pos.y = height;
        } else {
            self.land();
        }
    }

    fn land(&mut self) {
        self.jumping = false;
        self.jump_time = 0.0;
        self.pos.y = BASE_HEIGHT;
    }

    /// Send the player back to the spawn corner and drop pending input.
    /// Height and any jump in progress are untouched.
    pub fn reset_to_sentinel(&mut self) {
        self.pos.x = SENTINEL_X;
        self.pos.z = SENTINEL_Z;
        self.pending = Direction::None;
    }

    /// Reset, cost a life, count the hit
    pub fn penalize(&mut self) {
        self.reset_to_sentinel();
        self.score += 1;
        self.life = self.life.saturating_sub(1);
    }
}

/// Tiles missing from the board this cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoleSet(pub [TileIndex; HOLE_COUNT]);

impl HoleSet {
    pub fn contains(&self, tile: TileIndex) -> bool {
        self.0.contains(&tile)
    }
}

/// Raised, bobbing tiles this cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSet {
    pub tiles: [TileIndex; OBSTACLE_COUNT],
    /// Shared vertical offset of every obstacle block
    pub bob: Bob,
    /// Set by an obstacle hit; blocks further obstacle hits until the next re-roll
    pub carried: bool,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self {
            tiles: [0; OBSTACLE_COUNT],
            bob: Bob::new(0.0, OBSTACLE_BOB_RATE),
            carried: false,
        }
    }
}

impl ObstacleSet {
    pub fn contains(&self, tile: TileIndex) -> bool {
        self.tiles.contains(&tile)
    }
}

/// Per-level rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRules {
    /// Hazard re-roll interval (seconds)
    pub speedflag: f32,
    /// Clearing this level ends the run instead of advancing. Also picks
    /// the clear cue: `RunCompleted` plays the final fanfare, `LevelCleared`
    /// the level-up sound.
    pub terminal: bool,
}

/// Rules for levels 1 through 5
pub const LEVEL_RULES: [LevelRules; FINAL_LEVEL as usize] = [
    LevelRules { speedflag: 4.0, terminal: false },
    LevelRules { speedflag: 3.0, terminal: false },
    LevelRules { speedflag: 2.0, terminal: false },
    LevelRules { speedflag: 1.0, terminal: false },
    LevelRules { speedflag: 1.0, terminal: true },
];

/// Look up the rules for a level (clamped to 1..=5)
pub fn level_rules(level: u8) -> LevelRules {
    let idx = level.clamp(1, FINAL_LEVEL) as usize - 1;
    LEVEL_RULES[idx]
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    OutOfLives,
    Completed,
}

/// Final result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reason: EndReason,
    pub level: u8,
    pub score: u32,
    pub final_score: u32,
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Over(Outcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: PlayerState,
    pub holes: HoleSet,
    pub obstacles: ObstacleSet,
    /// Backdrop water level (visual only)
    pub water: Bob,
    pub selector: HazardSelector,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Jump arc units per second
    pub jump_rate: f32,
    /// Frames simulated
    pub frames: u64,
}

impl GameState {
    /// Create a new game state with the given seed and an initial hazard roll
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            player: PlayerState::default(),
            holes: HoleSet::default(),
            obstacles: ObstacleSet::default(),
            water: Bob::new(WATER_START, WATER_BOB_RATE),
            selector: HazardSelector::new(seed),
            camera: Camera::default(),
            phase: GamePhase::Playing,
            jump_rate: DEFAULT_JUMP_RATE,
            frames: 0,
        };

        let player = state.player.ground_pos();
        state
            .selector
            .refresh(player, &mut state.holes, &mut state.obstacles);

        state
    }

    /// Rules for the current level
    pub fn rules(&self) -> LevelRules {
        level_rules(self.player.level)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }
}
