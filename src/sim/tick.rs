//! Per-frame simulation tick
//!
//! Frame order: input latch, spawn-tile remap, bobs, movement, jump arc,
//! checks, end-of-run detection, hazard timer, camera.

use super::collision::{GameEvent, check, outcome};
use super::selector::remap_spawn_tile;
use super::state::{Direction, EndReason, GamePhase, GameState};
use crate::camera::CameraCommand;
use crate::consts::*;

/// Input collected since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Last direction pressed (the latch keeps only one)
    pub direction: Option<Direction>,
    /// Net change to the per-frame step count
    pub step_delta: i32,
    /// Camera changes in the order they arrived
    pub camera: Vec<CameraCommand>,
}

/// Advance the game by `dt` seconds of wall-clock time
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    for &cmd in &input.camera {
        state.camera.apply(cmd);
    }
    if state.is_over() {
        return events;
    }
    state.frames += 1;

    state.player.step_count += input.step_delta;
    if let Some(dir) = input.direction.filter(|d| *d != Direction::None) {
        state.player.pending = dir;
        events.push(GameEvent::DirectionLatched(dir));
    }

    remap_spawn_tile(&mut state.holes, &mut state.obstacles);

    state.water.advance(dt);
    state.obstacles.bob.advance(dt);

    state.player.apply_pending();
    state.player.advance_jump(dt, state.jump_rate);

    let report = check(state);
    events.extend(report.events);

    if report.completed {
        finish(state, EndReason::Completed);
    } else if state.player.life == 0 {
        events.push(GameEvent::OutOfLives);
        finish(state, EndReason::OutOfLives);
    } else {
        let interval = state.rules().speedflag;
        let player = state.player.ground_pos();
        state
            .selector
            .tick(dt, interval, player, &mut state.holes, &mut state.obstacles);
    }

    state.camera.update(state.player.pos, dt);

    events
}

fn finish(state: &mut GameState, reason: EndReason) {
    let result = outcome(&state.player, reason);
    log::info!(
        "Run over ({:?}) on level {} after {} hits, score {}",
        reason,
        result.level,
        result.score,
        result.final_score
    );
    state.phase = GamePhase::Over(result);
}
