//! Collision and level checks
//!
//! One pass per frame, four checks in a fixed order. Every check runs even if
//! an earlier one already penalised the player, so a single frame can cost
//! more than one life.

use super::grid::{TileIndex, overlaps_tile};
use super::state::{Direction, EndReason, GameState, Outcome, PlayerState, level_rules};
use crate::consts::*;

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Input latched a direction (move or jump)
    DirectionLatched(Direction),
    /// Player left the board
    OutOfBounds,
    /// Player stepped onto a hole
    HoleHit { tile: TileIndex },
    /// Player ran into an obstacle block
    ObstacleHit { tile: TileIndex },
    /// Goal corner reached below the final level
    LevelCleared { from: u8, to: u8 },
    /// Goal corner reached on the final level
    RunCompleted,
    /// Lives ran out
    OutOfLives,
}

/// Result of one checker pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub events: Vec<GameEvent>,
    /// Set when the final level was cleared this frame
    pub completed: bool,
}

/// True when the player's board position is outside [-2, 1.6] on either axis
pub fn out_of_bounds(player: &PlayerState) -> bool {
    let p = player.ground_pos();
    let lo = BOARD_MIN - POSITION_EPSILON;
    let hi = BOARD_MAX + POSITION_EPSILON;
    p.x < lo || p.y < lo || p.x > hi || p.y > hi
}

/// True when the player stands in the goal corner
pub fn in_goal(player: &PlayerState) -> bool {
    let p = player.ground_pos();
    p.x > GOAL_THRESHOLD && p.y > GOAL_THRESHOLD
}

/// Run the four per-frame checks for the current level
pub fn check(state: &mut GameState) -> CheckReport {
    let mut report = CheckReport::default();
    let rules = level_rules(state.player.level);

    // 1. Bounds
    if out_of_bounds(&state.player) {
        state.player.penalize();
        log::debug!("Out of bounds, lives left: {}", state.player.life);
        report.events.push(GameEvent::OutOfBounds);
    }

    // 2. Holes
    for &tile in state.holes.0.iter() {
        if overlaps_tile(state.player.ground_pos(), tile) {
            state.player.penalize();
            log::debug!("Fell into hole {tile}, lives left: {}", state.player.life);
            report.events.push(GameEvent::HoleHit { tile });
        }
    }

    // 3. Obstacles
    let obstacle_top = state.obstacles.bob.offset + OBSTACLE_TOP;
    for &tile in state.obstacles.tiles.iter() {
        let height = state.player.height();
        if overlaps_tile(state.player.ground_pos(), tile)
            && height <= OBSTACLE_CEILING
            && height > obstacle_top
            && !state.obstacles.carried
        {
            state.player.penalize();
            state.obstacles.carried = true;
            log::debug!("Hit obstacle {tile}, lives left: {}", state.player.life);
            report.events.push(GameEvent::ObstacleHit { tile });
        }
    }

    // 4. Goal corner
    if in_goal(&state.player) {
        let from = state.player.level;
        if rules.terminal {
            report.completed = true;
            report.events.push(GameEvent::RunCompleted);
        } else {
            state.player.level += 1;
            log::info!("Level {} cleared, now on level {}", from, state.player.level);
            report.events.push(GameEvent::LevelCleared {
                from,
                to: state.player.level,
            });
        }
        state.player.reset_to_sentinel();
    }

    report
}

/// Score shown when a run ends
///
/// `100 * (level - 1) - 5 * penalties` below the final level and
/// `100 * level - 5 * penalties` on it, floored at zero.
pub fn final_score(level: u8, score: u32) -> u32 {
    let earned = if level >= FINAL_LEVEL {
        100 * level as i64
    } else {
        100 * (level as i64 - 1)
    };
    (earned - 5 * score as i64).max(0) as u32
}

/// Build the outcome for a finished run
pub fn outcome(player: &PlayerState, reason: EndReason) -> Outcome {
    Outcome {
        reason,
        level: player.level,
        score: player.score,
        final_score: final_score(player.level, player.score),
    }
}
