//! Scoring module - classic line-clear scoring, leveling and gravity speed
//!
//! - 1/2/3/4 lines award 100/300/400/800 points, multiplied by `level + 1`.
//! - Level is `total_lines / lines_per_level` and never decreases.
//! - Gravity speed is a fixed 20-entry table of seconds per row.

use crate::types::{LEVEL_SPEED_SECS, LINE_SCORES, NUM_LEVELS};

use serde::Serialize;

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level.saturating_add(1))
}

/// Level after reaching `total_lines`, never lower than `current`
///
/// A zero goal leaves the level unchanged.
pub fn level_for(total_lines: u32, lines_per_level: u32, current: u32) -> u32 {
    if lines_per_level == 0 {
        return current;
    }
    current.max(total_lines / lines_per_level)
}

/// Seconds per gravity row at `level` (levels past the table use its last entry)
pub fn fall_interval_secs(level: u32) -> f32 {
    LEVEL_SPEED_SECS[(level as usize).min(NUM_LEVELS - 1)]
}

/// Cumulative line-clear statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LineStats {
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub tetrises: u32,
    /// Total lines cleared (adjusted by go-to-level)
    pub lines: u32,
}

impl LineStats {
    /// Record one clear of `cleared` lines
    pub fn record(&mut self, cleared: usize) {
        match cleared {
            0 => return,
            1 => self.singles += 1,
            2 => self.doubles += 1,
            3 => self.triples += 1,
            _ => self.tetrises += 1,
        }
        self.lines = self.lines.saturating_add(cleared as u32);
    }
}
