//! Game state and core simulation types
//!
//! Everything the simulation mutates per tick lives in [`GameState`], owned by
//! the controller and passed to the physics and render steps. No module-level
//! globals.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::layout;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Booted but never started; static scene with the start prompt
    Idle,
    /// Active gameplay, ticking every frame
    Running,
    /// Frozen mid-round; resumes without a reset
    Paused,
}

/// A lifecycle transition was requested from the wrong phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// `start` while already Running or Paused
    AlreadyStarted,
    /// `pause` while not Running
    NotRunning,
    /// `resume` while not Paused
    NotPaused,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::AlreadyStarted => write!(f, "game already started"),
            TransitionError::NotRunning => write!(f, "game is not running"),
            TransitionError::NotPaused => write!(f, "game is not paused"),
        }
    }
}

impl std::error::Error for TransitionError {}

/// The 4-way block palette, cycled per character within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    Red,
    Green,
    Cyan,
    Yellow,
}

impl BlockColor {
    /// Palette entry for a character index within its line
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => BlockColor::Red,
            1 => BlockColor::Green,
            2 => BlockColor::Cyan,
            _ => BlockColor::Yellow,
        }
    }

    /// CSS color string for canvas fill styles
    pub fn css(&self) -> &'static str {
        match self {
            BlockColor::Red => "#FF0000",
            BlockColor::Green => "#00FF00",
            BlockColor::Cyan => "#00FFFF",
            BlockColor::Yellow => "#FFFF00",
        }
    }
}

/// A destructible block; geometry never changes after creation, only `alive`
#[derive(Debug, Clone)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: BlockColor,
    pub alive: bool,
}

impl Block {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The ball; radius is the fixed [`BALL_RADIUS`]
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn position and velocity for a fresh round: middle-top, moving down
    pub fn spawn(canvas_width: f32) -> Self {
        Self {
            pos: Vec2::new(canvas_width / 2.0, BALL_RADIUS + BALL_SPAWN_MARGIN),
            vel: Vec2::new(BALL_START_SPEED_X, BALL_START_SPEED_Y),
        }
    }
}

/// The player's paddle; only x moves, driven by the pointer
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
}

impl Paddle {
    /// Centered on the canvas
    pub fn centered(canvas_width: f32) -> Self {
        Self {
            x: canvas_width / 2.0 - PADDLE_WIDTH / 2.0,
        }
    }

    /// Center the paddle under the pointer, ignoring positions that would
    /// push it past either canvas edge
    pub fn track_pointer(&mut self, pointer_x: f32, canvas_width: f32) {
        if pointer_x > PADDLE_WIDTH / 2.0 && pointer_x < canvas_width - PADDLE_WIDTH / 2.0 {
            self.x = pointer_x - PADDLE_WIDTH / 2.0;
        }
    }

    /// Top edge of the paddle band
    pub fn top(canvas_height: f32) -> f32 {
        canvas_height - PADDLE_HEIGHT - PADDLE_BOTTOM_OFFSET
    }
}

/// A visual particle spawned on block destruction
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: BlockColor,
    /// Remaining lifetime in ticks; strictly decreasing
    pub life: f32,
    /// Derived from life each advance
    pub alpha: f32,
}

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 10;

/// Particle collection cap; oldest are evicted when a burst would exceed it
pub const MAX_PARTICLES: usize = 100;

/// Complete game state for one play surface
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    /// Blocks destroyed since the last reset
    pub score: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: Vec<Block>,
    pub particles: Vec<Particle>,
    /// Recent ball positions, oldest first, bounded by [`TRAIL_LENGTH`]
    pub trail: Vec<Vec2>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh Idle state for the given surface size
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            phase: GamePhase::Idle,
            score: 0,
            ball: Ball::spawn(width),
            paddle: Paddle::centered(width),
            blocks: layout::build_blocks(width),
            particles: Vec::new(),
            trail: Vec::with_capacity(TRAIL_LENGTH),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Idle -> Running: rebuild blocks, reset everything, begin a round
    pub fn start(&mut self) -> Result<(), TransitionError> {
        if self.phase != GamePhase::Idle {
            return Err(TransitionError::AlreadyStarted);
        }
        self.reset_round();
        self.phase = GamePhase::Running;
        Ok(())
    }

    /// Running -> Paused: freeze the simulation
    pub fn pause(&mut self) -> Result<(), TransitionError> {
        if self.phase != GamePhase::Running {
            return Err(TransitionError::NotRunning);
        }
        self.phase = GamePhase::Paused;
        Ok(())
    }

    /// Paused -> Running: continue without resetting
    pub fn resume(&mut self) -> Result<(), TransitionError> {
        if self.phase != GamePhase::Paused {
            return Err(TransitionError::NotPaused);
        }
        self.phase = GamePhase::Running;
        Ok(())
    }

    /// Rebuild the block set and reset score, ball, paddle, trail, particles.
    /// Does not change phase; callers decide whether the round restarts.
    pub fn reset_round(&mut self) {
        self.blocks = layout::build_blocks(self.width);
        self.score = 0;
        self.ball = Ball::spawn(self.width);
        self.paddle = Paddle::centered(self.width);
        self.trail.clear();
        self.particles.clear();
    }

    /// Record current ball position to the trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.push(self.ball.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }

    /// Number of blocks still standing
    pub fn alive_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    /// Rescale positions for a new surface size.
    ///
    /// Ratios are computed against the pre-resize dimensions before the
    /// stored dimensions are overwritten.
    pub fn resize(&mut self, new_width: f32, new_height: f32) {
        let x_ratio = self.ball.pos.x / self.width;
        let y_ratio = self.ball.pos.y / self.height;
        let paddle_ratio = self.paddle.x / self.width;

        self.width = new_width;
        self.height = new_height;

        self.ball.pos.x = x_ratio * new_width;
        self.ball.pos.y = y_ratio * new_height;
        self.paddle.x = paddle_ratio * new_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_state() -> GameState {
        GameState::new(800.0, 600.0, 42)
    }

    #[test]
    fn test_start_resets_score_and_runs() {
        let mut state = idle_state();
        state.score = 7; // leftover from a hypothetical prior round
        state.start().unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(!state.blocks.is_empty());
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut state = idle_state();
        assert_eq!(state.pause(), Err(TransitionError::NotRunning));
        assert_eq!(state.resume(), Err(TransitionError::NotPaused));

        state.start().unwrap();
        assert_eq!(state.start(), Err(TransitionError::AlreadyStarted));
        assert_eq!(state.resume(), Err(TransitionError::NotPaused));

        state.pause().unwrap();
        assert_eq!(state.pause(), Err(TransitionError::NotRunning));
        assert_eq!(state.start(), Err(TransitionError::AlreadyStarted));

        state.resume().unwrap();
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_resume_preserves_state() {
        let mut state = idle_state();
        state.start().unwrap();
        state.score = 3;
        let ball_pos = state.ball.pos;

        state.pause().unwrap();
        state.resume().unwrap();
        assert_eq!(state.score, 3);
        assert_eq!(state.ball.pos, ball_pos);
    }

    #[test]
    fn test_trail_bounded_fifo() {
        let mut state = idle_state();
        for i in 0..(TRAIL_LENGTH + 5) {
            state.ball.pos = Vec2::new(i as f32, 0.0);
            state.record_trail();
        }
        assert_eq!(state.trail.len(), TRAIL_LENGTH);
        // Oldest entries evicted first
        assert_eq!(state.trail[0].x, 5.0);
        assert_eq!(state.trail.last().unwrap().x, (TRAIL_LENGTH + 4) as f32);
    }

    #[test]
    fn test_paddle_tracks_pointer_centered() {
        let mut paddle = Paddle::centered(800.0);
        paddle.track_pointer(400.0, 800.0);
        assert_eq!(paddle.x, 340.0);
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let mut paddle = Paddle::centered(800.0);
        let before = paddle.x;
        paddle.track_pointer(10.0, 800.0); // would cross the left edge
        assert_eq!(paddle.x, before);
        paddle.track_pointer(795.0, 800.0); // would cross the right edge
        assert_eq!(paddle.x, before);

        paddle.track_pointer(61.0, 800.0);
        assert!(paddle.x >= 0.0);
        paddle.track_pointer(739.0, 800.0);
        assert!(paddle.x + crate::consts::PADDLE_WIDTH <= 800.0);
    }

    #[test]
    fn test_resize_rescales_proportionally() {
        let mut state = idle_state();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.paddle.x = 200.0;

        state.resize(1600.0, 900.0);
        assert_eq!(state.width, 1600.0);
        assert_eq!(state.ball.pos.x, 800.0);
        assert_eq!(state.ball.pos.y, 450.0);
        assert_eq!(state.paddle.x, 400.0);
    }

    #[test]
    fn test_reset_round_restores_entities() {
        let mut state = idle_state();
        state.start().unwrap();
        state.score = 9;
        state.blocks.iter_mut().for_each(|b| b.alive = false);
        state.ball.pos = Vec2::new(1.0, 1.0);
        state.record_trail();

        state.reset_round();
        assert_eq!(state.score, 0);
        assert!(state.trail.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.blocks.iter().all(|b| b.alive));
        assert_eq!(state.ball.pos, Ball::spawn(800.0).pos);
    }
}
