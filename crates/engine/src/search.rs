//! Move search - exhaustive single-piece placement search
//!
//! For each rotation index of the current piece, the search snaps a probe to the
//! leftmost reachable column, then sweeps right one column at a time. Every column
//! is hard-dropped, stamped into a scratch copy of the board and scored. The first
//! strictly-better candidate wins, so ties resolve to the lowest rotation index and
//! then the leftmost column.
//!
//! The live board is never touched; the search is a pure function of the board, the
//! piece and the evaluator.

use crate::core::{Board, GameState, MoveOutcome, Tetromino};
use crate::eval::Evaluator;
use crate::types::{Block, Rotation};

/// A scored landing position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCandidate {
    /// Landing origin column
    pub x: i32,
    /// Landing origin row
    pub y: i32,
    pub rotation: Rotation,
    pub score: f32,
}

/// Stamp `piece` into `scratch` (no bounds or overlap checks beyond `Board::set`)
fn stamp(scratch: &mut Board, piece: &Tetromino, block: Option<Block>) {
    for (x, y) in piece.cells() {
        scratch.set(x, y, block);
    }
}

/// Best placement for `piece` on `board`, or `None` if no rotation fits at the
/// piece's origin
///
/// `piece` supplies the kind and the (x, y) origin the sweep starts from; its
/// rotation is ignored since all four are searched.
pub fn best_placement<E>(board: &Board, piece: &Tetromino, evaluator: &E) -> Option<MoveCandidate>
where
    E: Evaluator + ?Sized,
{
    let mut scratch = board.clone();
    let mut best: Option<MoveCandidate> = None;
    let mut best_score = f32::NEG_INFINITY;

    for rotation in Rotation::all() {
        let mut probe = Tetromino { rotation, ..*piece };
        if !probe.fits(board) {
            continue;
        }

        while probe.try_shift(board, -1, 0) == MoveOutcome::Moved {}

        loop {
            let landing = probe.dropped(board);

            stamp(&mut scratch, &landing, Some(Block::Piece(landing.kind)));
            let score = evaluator.evaluate(&scratch, &landing);
            // Landing cells were empty on the live board, so this restores it
            stamp(&mut scratch, &landing, None);

            if score > best_score {
                best_score = score;
                best = Some(MoveCandidate {
                    x: landing.x,
                    y: landing.y,
                    rotation,
                    score,
                });
            }

            if probe.try_shift(board, 1, 0) != MoveOutcome::Moved {
                break;
            }
        }
    }

    best
}

/// Best placement for the game's current piece
pub fn decide_next_move<E>(state: &GameState, evaluator: &E) -> Option<MoveCandidate>
where
    E: Evaluator + ?Sized,
{
    best_placement(state.board(), &state.current(), evaluator)
}
