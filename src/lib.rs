//! Glyph Breakout - a canvas Breakout variant
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, physics, collisions, game state)
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `settings`: User preferences, persisted to LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Ball defaults (velocities are pixels per tick)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED_X: f32 = 6.0;
    pub const BALL_START_SPEED_Y: f32 = 8.0;
    /// Vertical gap between the ball spawn point and the canvas top
    pub const BALL_SPAWN_MARGIN: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// The paddle floats this far above the canvas bottom, leaving room
    /// for the page chrome below the play field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 450.0;
    /// Hit offset across the paddle maps linearly onto
    /// [-PADDLE_DEFLECT_RANGE, +PADDLE_DEFLECT_RANGE] horizontal velocity
    pub const PADDLE_DEFLECT_RANGE: f32 = 2.5;

    /// Canvas dimensions assumed before the host reports real ones
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 1000.0;
}
