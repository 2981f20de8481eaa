//! Error types for the simulation core.
//!
//! Transition functions are total and never return these; errors only come from
//! construction and from producers feeding a full intent queue.

use thiserror::Error;

use crate::types::{Intent, MIN_BOARD_DIMENSION};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid board dimensions {rows}x{cols} (each side needs at least {MIN_BOARD_DIMENSION} cells)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("failed to allocate a board of {cells} cells")]
    BoardAllocation { cells: usize },

    #[error("intent queue is full, dropped {}", .0.as_str())]
    QueueFull(Intent),

    #[error("lines per level must be greater than zero")]
    InvalidLevelGoal,
}
