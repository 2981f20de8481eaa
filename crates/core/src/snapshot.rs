//! Read-only game export for presentation layers
//!
//! A snapshot owns plain data only, so renderers and the CLI can hold on to it (or
//! serialize it) without borrowing the live game.

use serde::Serialize;

use crate::game_state::{GameState, Tetromino};
use crate::scoring::LineStats;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation.index(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell tags: 0 empty, 1..=7 pieces, 8 garbage
    pub board: Vec<Vec<u8>>,
    pub current: PieceSnapshot,
    /// Landing position of `current`
    pub ghost: PieceSnapshot,
    pub next: PieceKind,
    pub hold: Option<PieceSnapshot>,
    pub preview: Vec<PieceKind>,
    pub points: u32,
    pub level: u32,
    pub lines_per_level: u32,
    pub stats: LineStats,
    pub lock_grace: u8,
    pub piece_id: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            name: state.name().to_string(),
            rows: state.rows(),
            cols: state.cols(),
            board: state.board().to_tag_rows(),
            current: state.current().into(),
            ghost: state.drop_preview().into(),
            next: state.next(),
            hold: state.hold_piece().map(PieceSnapshot::from),
            preview: state.preview().to_vec(),
            points: state.points(),
            level: state.level(),
            lines_per_level: state.lines_per_level(),
            stats: *state.stats(),
            lock_grace: state.lock_grace(),
            piece_id: state.piece_id(),
            game_over: state.game_over(),
        }
    }

    /// Total lines cleared
    pub fn lines(&self) -> u32 {
        self.stats.lines
    }
}
