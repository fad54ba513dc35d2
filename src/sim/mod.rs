//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{ball_inside_block, paddle_deflection};
pub use layout::{build_blocks, LINES};
pub use state::{
    Ball, Block, BlockColor, GamePhase, GameState, Paddle, Particle, TransitionError,
    MAX_PARTICLES, TRAIL_LENGTH,
};
pub use tick::{tick, RoundEvent, TickInput};
