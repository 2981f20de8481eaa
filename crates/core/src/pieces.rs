//! Pieces module - tetromino shape table
//!
//! Every `(kind, rotation)` pair maps to exactly four cell offsets from the piece
//! origin, with y growing downward. This table is the only source of collision and
//! locking geometry. Rotation is pure rotation-in-place: there are no kick offsets.

use crate::types::{PieceKind, Rotation, CELLS_PER_PIECE, NUM_ORIENTATIONS, NUM_TETROMINOS};

/// Offset of a single cell relative to piece origin
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from piece origin
pub type PieceShape = [CellOffset; CELLS_PER_PIECE];

/// Shape table, indexed by `[kind.index()][rotation.index()]`
const SHAPES: [[PieceShape; NUM_ORIENTATIONS as usize]; NUM_TETROMINOS] = [
    // I
    [
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(3, 0), (3, 1), (3, 2), (3, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
    ],
    // J
    [
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 0), (2, 1)],
    ],
    // L
    [
        [(0, 2), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (1, 2), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
    ],
    // O
    [
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (1, 2)],
    ],
    // S
    [
        [(0, 1), (0, 2), (1, 0), (1, 1)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 1), (1, 2), (2, 0), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(0, 1), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 1)],
        [(0, 1), (1, 0), (1, 1), (2, 1)],
    ],
    // Z
    [
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 2), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 1), (1, 0), (1, 1), (2, 0)],
    ],
];

/// Get the shape (cell offsets) for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index() as usize]
}

/// Spawn column for a board `cols` wide: `floor(cols / 2) - 1`
#[inline]
pub fn spawn_x(cols: usize) -> i32 {
    (cols / 2) as i32 - 1
}
