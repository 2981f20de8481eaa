//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and index arithmetic,
//! which keeps them usable from the simulation core, the move search and the
//! input providers alike.
//!
//! # Board Dimensions
//!
//! Boards are sized at construction time. The defaults are the classic playfield:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: `(floor(cols / 2) - 1, 0)`
//!
//! # Game Timing Constants
//!
//! Timing values are in seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_COOLDOWN_SECS` | 0.08 | Minimum time between accepted horizontal moves |
//! | `SOFT_DROP_COOLDOWN_SECS` | 0.03 | Minimum time between accepted soft drops |
//! | `LEVEL_SPEED_SECS` | table | Seconds per gravity row, by level |
//!
//! # Gravity Intervals by Level
//!
//! Values are the NES "seconds to reach the bottom" figures divided by 20, so the
//! scaling stays the same regardless of the configured row count:
//!
//! | Level | Interval (s) |
//! |-------|--------------|
//! | 0 | 0.7199 |
//! | 5 | 0.35995 |
//! | 9 | 0.1 |
//! | 19+ | 0.02 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, PieceKind, RotateDirection, Rotation};
//!
//! // Sequencer values map onto piece kinds modulo 7
//! assert_eq!(PieceKind::from_index(10), PieceKind::O);
//!
//! // Rotating left advances the rotation index
//! let rotation = Rotation::new(3).step(RotateDirection::Left);
//! assert_eq!(rotation.index(), 0);
//!
//! // Intents print in camelCase
//! assert_eq!(Intent::HardDrop.as_str(), "hardDrop");
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: usize = 20;

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: usize = 10;

/// Smallest row/column count a board accepts (a tetromino spans up to 4 cells)
pub const MIN_BOARD_DIMENSION: usize = 4;

/// Number of cells in a tetromino
pub const CELLS_PER_PIECE: usize = 4;

/// Number of distinct tetromino kinds
pub const NUM_TETROMINOS: usize = 7;

/// Number of rotation states per tetromino
pub const NUM_ORIENTATIONS: u8 = 4;

/// Minimum time between accepted horizontal moves (seconds)
pub const MOVE_COOLDOWN_SECS: f32 = 0.08;

/// Minimum time between accepted soft drops (seconds)
pub const SOFT_DROP_COOLDOWN_SECS: f32 = 0.03;

/// Consecutive failed gravity steps before a resting piece locks
pub const LOCK_GRACE_LIMIT: u8 = 2;

/// Default number of cleared lines per level
pub const DEFAULT_LINES_PER_LEVEL: u32 = 10;

/// Default number of lookahead pieces shown after `next`
pub const DEFAULT_PREVIEW_COUNT: usize = 3;

/// Upper bound for the lookahead preview
pub const MAX_PREVIEW_COUNT: usize = 8;

/// Capacity of the per-game intent queue
pub const INTENT_QUEUE_CAPACITY: usize = 100;

/// Number of entries in the gravity speed table
pub const NUM_LEVELS: usize = 20;

/// Seconds per gravity row for each level; levels past the end use the last entry.
pub const LEVEL_SPEED_SECS: [f32; NUM_LEVELS] = [
    14.398 / 20.0,
    12.798 / 20.0,
    11.598 / 20.0,
    9.999 / 20.0,
    8.799 / 20.0,
    7.199 / 20.0,
    5.999 / 20.0,
    4.399 / 20.0,
    2.800 / 20.0,
    2.000 / 20.0,
    1.600 / 20.0,
    1.600 / 20.0,
    1.600 / 20.0,
    1.200 / 20.0,
    1.200 / 20.0,
    1.200 / 20.0,
    0.800 / 20.0,
    0.800 / 20.0,
    0.800 / 20.0,
    0.400 / 20.0,
];

/// Line clear scoring table
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 400 points
/// - 4 lines: 800 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 400, 800];

/// The seven tetromino piece kinds
///
/// The declaration order is significant: it is the order the sequencer maps
/// `value % 7` onto, and the order of the shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in sequencer order
    pub const ALL: [PieceKind; NUM_TETROMINOS] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Map a raw sequencer value onto a kind (`value % 7`)
    pub fn from_index(value: u32) -> Self {
        Self::ALL[(value % NUM_TETROMINOS as u32) as usize]
    }

    /// Position of this kind in sequencer order
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Occupant of a filled board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Block {
    /// Locked cell of a player piece
    Piece(PieceKind),
    /// Cell raised from below by garbage injection
    Garbage,
}

impl Block {
    /// Tag used for numeric board exports
    ///
    /// `0` is reserved for empty cells, pieces are `1..=7` in sequencer order
    /// and garbage is `8`.
    pub fn tag(self) -> u8 {
        match self {
            Block::Piece(kind) => kind.index() as u8 + 1,
            Block::Garbage => GARBAGE_TAG,
        }
    }
}

/// Numeric tag of a garbage cell
pub const GARBAGE_TAG: u8 = 8;

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Block)`: Filled with a locked piece or garbage
pub type Cell = Option<Block>;

/// Numeric tag for a cell (`0` when empty)
pub fn cell_tag(cell: Cell) -> u8 {
    cell.map_or(0, Block::tag)
}

/// Rotation index in `[0, 4)`
///
/// Indexes the second dimension of the shape table. The index carries no
/// compass meaning; the table alone decides what each state looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rotation(u8);

impl Rotation {
    /// Spawn orientation
    pub const SPAWN: Rotation = Rotation(0);

    /// Create a rotation, wrapping the index into `[0, 4)`
    pub fn new(index: u8) -> Self {
        Self(index % NUM_ORIENTATIONS)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Next rotation index in the given direction
    ///
    /// ```
    /// use blockfall_types::{RotateDirection, Rotation};
    ///
    /// assert_eq!(Rotation::new(0).step(RotateDirection::Left), Rotation::new(1));
    /// assert_eq!(Rotation::new(0).step(RotateDirection::Right), Rotation::new(3));
    /// ```
    pub fn step(self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Left => Self((self.0 + 1) % NUM_ORIENTATIONS),
            RotateDirection::Right => Self((self.0 + NUM_ORIENTATIONS - 1) % NUM_ORIENTATIONS),
        }
    }

    /// All four rotation indices in ascending order
    pub fn all() -> [Rotation; NUM_ORIENTATIONS as usize] {
        [Rotation(0), Rotation(1), Rotation(2), Rotation(3)]
    }
}

/// Direction of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    /// Advances the rotation index
    Left,
    /// Retreats the rotation index
    Right,
}

/// Discrete game intents
///
/// Every producer (keyboard, CPU, the gravity timer) speaks this vocabulary and
/// feeds the same per-game queue. Gravity is an intent too: it is triggered by
/// time rather than by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// One gravity step, synthesized by the level timer
    Gravity,
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// One extra gravity step, rate limited
    SoftDrop,
    /// Rotate, advancing the rotation index
    RotateLeft,
    /// Rotate, retreating the rotation index
    RotateRight,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Swap with the hold slot (once per piece)
    Hold,
    /// Restart from the original seed
    Reset,
}

impl Intent {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Gravity => "gravity",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::RotateLeft => "rotateLeft",
            Intent::RotateRight => "rotateRight",
            Intent::HardDrop => "hardDrop",
            Intent::Hold => "hold",
            Intent::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i as u32), *kind);
        }
        assert_eq!(PieceKind::from_index(7), PieceKind::I);
        assert_eq!(PieceKind::from_index(u32::MAX), PieceKind::ALL[(u32::MAX % 7) as usize]);
    }

    #[test]
    fn test_block_tags() {
        assert_eq!(Block::Piece(PieceKind::I).tag(), 1);
        assert_eq!(Block::Piece(PieceKind::Z).tag(), 7);
        assert_eq!(Block::Garbage.tag(), GARBAGE_TAG);
        assert_eq!(cell_tag(None), 0);
        assert_eq!(cell_tag(Some(Block::Piece(PieceKind::O))), 4);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Rotation::new(4), Rotation::new(0));
        assert_eq!(Rotation::new(7).index(), 3);

        let mut r = Rotation::SPAWN;
        for _ in 0..4 {
            r = r.step(RotateDirection::Right);
        }
        assert_eq!(r, Rotation::SPAWN);
    }

    #[test]
    fn test_intent_names_are_distinct() {
        let mut names = Vec::new();
        for intent in [
            Intent::Gravity,
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::RotateLeft,
            Intent::RotateRight,
            Intent::HardDrop,
            Intent::Hold,
            Intent::Reset,
        ] {
            names.push(intent.as_str());
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_level_speed_table_is_non_increasing() {
        for pair in LEVEL_SPEED_SECS.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(LEVEL_SPEED_SECS.len(), NUM_LEVELS);
    }
}
