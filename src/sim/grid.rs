//! Breakable block grid
//!
//! Fixed ROWS x COLS arrangement of axis-aligned cells. Bounds are computed
//! once at build time and never move; `hit` is the only mutable field. The
//! grid is rebuilt from scratch on every new game, never patched in place.

use serde::{Deserialize, Serialize};

use super::geom::{Rect, Viewport};
use crate::consts::{BLOCK_COLS, BLOCK_HEIGHT, BLOCK_ROWS, GRID_TOP_OFFSET};
use crate::persistence::SaveError;

/// A single breakable cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub bounds: Rect,
    pub hit: bool,
}

/// Row-major grid of blocks. Row-major order is load-bearing: it is the
/// tie-break when the ball could land in more than one cell in a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    rows: usize,
    cols: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Lay out the grid for a viewport. Block width uses integer division
    /// of the pixel width (layout parity: 800 / 10 = 80, 805 / 10 = 80),
    /// height is fixed, and the whole grid sits `GRID_TOP_OFFSET` below
    /// the top edge. All cells start unhit.
    pub fn build(viewport: Viewport) -> Self {
        let block_width = (viewport.width as u64 / BLOCK_COLS as u64) as f64;

        let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLS);
        for row in 0..BLOCK_ROWS {
            for col in 0..BLOCK_COLS {
                blocks.push(Block {
                    bounds: Rect::new(
                        col as f64 * block_width,
                        row as f64 * BLOCK_HEIGHT + GRID_TOP_OFFSET,
                        block_width,
                        BLOCK_HEIGHT,
                    ),
                    hit: false,
                });
            }
        }

        Self {
            rows: BLOCK_ROWS,
            cols: BLOCK_COLS,
            blocks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn block(&self, row: usize, col: usize) -> &Block {
        &self.blocks[row * self.cols + col]
    }

    /// Row-major iteration over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Number of cells still standing.
    pub fn remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.hit).count()
    }

    /// Mark the first unhit cell (row-major order) containing the point.
    /// At most one cell is marked per call; returns its `(row, col)`.
    pub fn strike(&mut self, px: f64, py: f64) -> Option<(usize, usize)> {
        let cols = self.cols;
        self.blocks
            .iter_mut()
            .enumerate()
            .find(|(_, b)| !b.hit && b.bounds.contains(px, py))
            .map(|(idx, b)| {
                b.hit = true;
                (idx / cols, idx % cols)
            })
    }

    /// Row-major snapshot of the hit flags, for the save record.
    pub fn hit_mask(&self) -> Vec<Vec<bool>> {
        self.blocks
            .chunks(self.cols)
            .map(|row| row.iter().map(|b| b.hit).collect())
            .collect()
    }

    /// Overlay a persisted hit mask onto this grid. A mask whose shape is
    /// not exactly ROWS x COLS is a corrupt save, never a resize.
    pub fn apply_mask(&mut self, mask: &[Vec<bool>]) -> Result<(), SaveError> {
        if mask.len() != self.rows || mask.iter().any(|row| row.len() != self.cols) {
            return Err(SaveError::GridDimensions {
                expected_rows: self.rows,
                expected_cols: self.cols,
                found_rows: mask.len(),
                found_cols: mask.first().map_or(0, Vec::len),
            });
        }
        for (row, mask_row) in mask.iter().enumerate() {
            for (col, &hit) in mask_row.iter().enumerate() {
                self.blocks[row * self.cols + col].hit = hit;
            }
        }
        Ok(())
    }
}
