//! Per-tick physics step
//!
//! Advances the simulation by one frame: paddle tracking, particle aging,
//! block collisions, wall/paddle resolution, ball movement. Pure
//! state-in/state-out; the host scheduler decides when ticks happen.

use super::collision;
use super::particles;
use super::state::{GamePhase, GameState};

/// Input sampled by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer x relative to the canvas, if the pointer moved
    pub pointer_x: Option<f32>,
}

/// How a round ended, if it ended this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// All blocks cleared; state is reset and back in Idle
    Win,
    /// Ball passed the paddle; state is reset and a new round is already
    /// Running
    Loss,
}

/// Advance the game by one tick.
///
/// No-op unless the game is Running. Returns the round outcome when this
/// tick ended the round.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<RoundEvent> {
    if state.phase != GamePhase::Running {
        return None;
    }

    if let Some(pointer_x) = input.pointer_x {
        state.paddle.track_pointer(pointer_x, state.width);
    }

    particles::advance(&mut state.particles);

    // Block pass, in table order. Every overlapping alive block triggers:
    // each one flips the vertical velocity, no cross-block deduplication.
    let mut destroyed_any = false;
    for block in state.blocks.iter_mut() {
        if block.alive && collision::ball_inside_block(state.ball.pos, block) {
            state.ball.vel.y = -state.ball.vel.y;
            block.alive = false;
            state.score += 1;
            destroyed_any = true;
            particles::spawn_burst(
                &mut state.particles,
                &mut state.rng,
                block.center(),
                block.color,
            );
        }
    }

    if destroyed_any && state.alive_blocks() == 0 {
        log::info!("round won with score {}", state.score);
        state.reset_round();
        state.phase = GamePhase::Idle;
        return Some(RoundEvent::Win);
    }

    let pos = state.ball.pos;
    let vel = state.ball.vel;

    // Wall reflection (right/left)
    if collision::hits_side_wall(pos, vel, state.width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Top reflection, else paddle band resolution
    if collision::hits_top_wall(pos, vel) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if collision::reaches_paddle_band(pos, vel, state.height) {
        if collision::within_paddle_span(pos.x, state.paddle.x) {
            state.ball.vel.x = collision::paddle_deflection(pos.x, state.paddle.x);
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            // Missed the ball: reset and immediately start a new round
            log::info!("ball missed the paddle at score {}; restarting", state.score);
            state.reset_round();
            return Some(RoundEvent::Loss);
        }
    }

    state.ball.pos += state.ball.vel;
    state.record_trail();

    None
}
