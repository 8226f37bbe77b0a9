//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per rendered frame, no dt scaling
//! - Stable block iteration order (row-major)
//! - No rendering or platform dependencies

pub mod geom;
pub mod grid;
pub mod state;
pub mod tick;

pub use geom::{Rect, Viewport};
pub use grid::{Block, BlockGrid};
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickEvent, TickInput, tick};
