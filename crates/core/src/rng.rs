//! RNG module - bag-less piece sequencing
//!
//! A linear congruential generator drives every random decision in a game: piece
//! draws and garbage hole columns. Piece types are drawn uniformly with
//! replacement (`value % 7`), so the same piece may repeat any number of times.
//!
//! `peek` replays the recurrence on a local copy of the state, which lets the
//! presentation layer show an N-piece lookahead without disturbing the draw order.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_PREVIEW_COUNT};

/// LCG multiplier (Numerical Recipes)
const LCG_MULTIPLIER: u32 = 1664525;

/// LCG increment (Numerical Recipes)
const LCG_INCREMENT: u32 = 1013904223;

/// Advance an LCG state by one step (mod 2^32)
#[inline]
fn next_state(state: u32) -> u32 {
    state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}

/// Simple LCG (Linear Congruential Generator) RNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// Every seed is valid, including 0: the increment keeps the stream moving.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate the next value and advance the state
    pub fn step(&mut self) -> u32 {
        self.state = next_state(self.state);
        self.state
    }

    /// Value the generator would return after `n` more steps, without advancing
    ///
    /// `peek(0)` is the current state.
    pub fn peek(&self, n: u32) -> u32 {
        let mut state = self.state;
        for _ in 0..n {
            state = next_state(state);
        }
        state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.step() % max
    }

    /// Draw the next piece kind
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::from_index(self.step())
    }

    /// Piece kind `n` draws ahead, without advancing
    pub fn peek_piece(&self, n: u32) -> PieceKind {
        PieceKind::from_index(self.peek(n))
    }

    /// The next `count` piece kinds (clamped to `MAX_PREVIEW_COUNT`)
    ///
    /// This is stack-only and does not allocate.
    pub fn preview(&self, count: usize) -> ArrayVec<PieceKind, MAX_PREVIEW_COUNT> {
        (1..=count.min(MAX_PREVIEW_COUNT) as u32)
            .map(|n| self.peek_piece(n))
            .collect()
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}
