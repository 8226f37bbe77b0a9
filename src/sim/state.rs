//! Game state and core simulation types
//!
//! Everything the save slot must capture lives here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geom::Viewport;
use super::grid::BlockGrid;
use crate::consts::*;
use crate::persistence::{SAVE_VERSION, SaveError, SaveRecord};

/// The player's paddle. Input only ever moves it horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: DVec2,
}

/// The ball. Velocity is a per-tick displacement, not a rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Complete simulation state for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub paddle: Paddle,
    pub ball: Ball,
    pub grid: BlockGrid,
    pub score: u64,
}

impl GameState {
    /// Fresh run: paddle bottom-center, ball screen-center moving
    /// down-right, full grid, score zero.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paddle: Paddle {
                pos: DVec2::new(
                    viewport.width / 2.0,
                    viewport.height - PADDLE_BOTTOM_OFFSET,
                ),
            },
            ball: Ball {
                pos: DVec2::new(viewport.width / 2.0, viewport.height / 2.0),
                vel: DVec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            },
            grid: BlockGrid::build(viewport),
            score: 0,
        }
    }

    /// Reinitialize in place for the same viewport. The grid is rebuilt,
    /// not repaired.
    pub fn reset(&mut self) {
        *self = Self::new(self.viewport);
    }

    /// Capture the run as a persistable record.
    pub fn snapshot(&self) -> SaveRecord {
        SaveRecord {
            version: SAVE_VERSION,
            paddle_x: self.paddle.pos.x,
            paddle_y: self.paddle.pos.y,
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            ball_vel_x: self.ball.vel.x,
            ball_vel_y: self.ball.vel.y,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            blocks_hit: self.grid.hit_mask(),
            score: self.score,
        }
    }

    /// Restore a run from a record. Block bounds are rebuilt from the
    /// current viewport; only the hit mask, positions and score come from
    /// the record. Fails without touching `self` if the record does not
    /// match this build's grid shape.
    pub fn restore(&mut self, record: &SaveRecord) -> Result<(), SaveError> {
        record.validate()?;

        let mut grid = BlockGrid::build(self.viewport);
        grid.apply_mask(&record.blocks_hit)?;

        self.paddle.pos = DVec2::new(record.paddle_x, record.paddle_y);
        self.ball.pos = DVec2::new(record.ball_x, record.ball_y);
        self.ball.vel = DVec2::new(record.ball_vel_x, record.ball_vel_y);
        self.grid = grid;
        self.score = record.score;
        Ok(())
    }
}
