//! Brick Breaker - arcade brick-breaking simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle/ball physics, block grid, scoring)
//! - `screen`: Screen state machine driving the simulation and persistence
//! - `persistence`: Save-slot codec with dimension/version validation
//! - `highscores`: Top-10 high score list and its text file format
//! - `config`: Session configuration (file paths, viewport)
//!
//! Rendering, input polling and windowing live outside this crate: a
//! presentation layer forwards pressed keys once per frame through
//! [`screen::GameSession::frame`] and reads the session back to draw.

pub mod config;
pub mod highscores;
pub mod persistence;
pub mod screen;
pub mod sim;

pub use config::SessionConfig;
pub use highscores::{HighScoreError, HighScores};
pub use persistence::{SaveError, SaveRecord};
pub use screen::{FrameInput, GameSession, Screen, SessionEvent};

/// Game configuration constants
pub mod consts {
    /// Block grid dimensions (fixed, not configurable)
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 10;

    /// Block height in pixels (width is derived from the viewport)
    pub const BLOCK_HEIGHT: f64 = 30.0;
    /// Vertical offset of the grid from the top of the viewport
    pub const GRID_TOP_OFFSET: f64 = 50.0;

    /// Paddle sprite dimensions
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    /// Paddle rest height above the bottom of the viewport
    pub const PADDLE_BOTTOM_OFFSET: f64 = 50.0;
    /// Horizontal paddle displacement per tick while a direction is held
    pub const PADDLE_STEP: f64 = 5.0;

    /// Ball sprite edge length
    pub const BALL_SIZE: f64 = 16.0;
    /// Initial ball velocity (per-tick displacement, not a rate)
    pub const BALL_START_VEL: (f64, f64) = (2.0, 2.0);

    /// Points awarded per destroyed block
    pub const BLOCK_SCORE: u64 = 100;
    /// Every exact multiple of this score scales the ball velocity once
    pub const SCORE_THRESHOLD: u64 = 1000;
    /// Velocity multiplier applied on each score-threshold crossing
    pub const SPEED_SCALE: f64 = 1.1;

    /// Default viewport dimensions
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
}
