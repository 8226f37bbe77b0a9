//! Save-slot persistence
//!
//! One save slot, stored as a versioned JSON envelope. The record carries
//! its own grid dimensions so a save written by a build with a different
//! grid is detected as corrupt instead of silently resized. serde_json
//! prints `f64` with the shortest representation that parses back to the
//! same bits, so positions and velocities round-trip exactly.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BLOCK_COLS, BLOCK_ROWS};

/// Save envelope version. Bumped on any breaking change to [`SaveRecord`].
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file not found: {0}")]
    NotFound(PathBuf),
    #[error("corrupt save: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("corrupt save: unsupported version {found} (expected {SAVE_VERSION})")]
    Version { found: u32 },
    #[error(
        "corrupt save: block grid is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}"
    )]
    GridDimensions {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
    #[error("save i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to resume a run: paddle, ball, hit mask, score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub paddle_x: f64,
    pub paddle_y: f64,
    pub ball_x: f64,
    pub ball_y: f64,
    pub ball_vel_x: f64,
    pub ball_vel_y: f64,
    pub rows: usize,
    pub cols: usize,
    pub blocks_hit: Vec<Vec<bool>>,
    pub score: u64,
}

impl SaveRecord {
    /// Check the envelope version and that the hit mask is exactly the
    /// grid shape this build was compiled with.
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::Version {
                found: self.version,
            });
        }
        let shape_ok = self.rows == BLOCK_ROWS
            && self.cols == BLOCK_COLS
            && self.blocks_hit.len() == self.rows
            && self.blocks_hit.iter().all(|row| row.len() == self.cols);
        if !shape_ok {
            return Err(SaveError::GridDimensions {
                expected_rows: BLOCK_ROWS,
                expected_cols: BLOCK_COLS,
                found_rows: self.blocks_hit.len(),
                found_cols: self.blocks_hit.first().map_or(0, Vec::len),
            });
        }
        Ok(())
    }
}

/// Write the record to `path`, overwriting unconditionally.
pub fn save_record(record: &SaveRecord, path: &Path) -> Result<(), SaveError> {
    let json = serde_json::to_string(record)?;
    fs::write(path, json)?;
    log::info!("game saved to {} (score {})", path.display(), record.score);
    Ok(())
}

/// Read and validate a record from `path`.
pub fn load_record(path: &Path) -> Result<SaveRecord, SaveError> {
    let json = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            SaveError::NotFound(path.to_path_buf())
        } else {
            SaveError::Io(e)
        }
    })?;
    let record: SaveRecord = serde_json::from_str(&json)?;
    record.validate()?;
    Ok(record)
}
