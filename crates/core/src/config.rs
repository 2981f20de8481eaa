//! Game configuration
//!
//! Defaults describe the classic 10x20 playfield. `from_env` overlays
//! `BLOCKFALL_*` environment variables; values that fail to parse keep the default.

use std::env;

use crate::types::{DEFAULT_COLS, DEFAULT_LINES_PER_LEVEL, DEFAULT_PREVIEW_COUNT, DEFAULT_ROWS};

/// Construction-time settings for a [`GameState`](crate::GameState)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
    /// Display name, used in log lines and snapshots
    pub name: String,
    pub lines_per_level: u32,
    /// Lookahead pieces shown after `next`
    pub preview_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 0,
            name: "Player".to_string(),
            lines_per_level: DEFAULT_LINES_PER_LEVEL,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

impl GameConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (same keys as `from_env`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rows = lookup("BLOCKFALL_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rows);

        let cols = lookup("BLOCKFALL_COLS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.cols);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let name = lookup("BLOCKFALL_NAME")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or(defaults.name);

        let lines_per_level = lookup("BLOCKFALL_LEVEL_GOAL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.lines_per_level);

        let preview_count = lookup("BLOCKFALL_PREVIEW")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.preview_count);

        Self {
            rows,
            cols,
            seed,
            name,
            lines_per_level,
            preview_count,
        }
    }
}
