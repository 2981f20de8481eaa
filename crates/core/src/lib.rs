//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the falling-block simulation. It has
//! no dependencies on rendering, audio or terminal I/O, making it:
//!
//! - **Deterministic**: the seed alone reproduces a session (aside from live input)
//! - **Testable**: every transition is a plain method on [`GameState`]
//! - **Portable**: runs headless, in a terminal, or under a bot
//!
//! # Module Structure
//!
//! - [`board`]: runtime-sized grid with collision queries and line clearing
//! - [`game_state`]: falling piece, hold, scoring, timers and the intent-driven tick
//! - [`pieces`]: tetromino shape table and spawn column
//! - [`rng`]: LCG sequencer with non-mutating lookahead
//! - [`queue`]: bounded intent FIFO
//! - [`scoring`]: line-clear points, leveling and gravity speed
//! - [`snapshot`]: serializable read-only export
//!
//! # Game Rules
//!
//! - **Bag-less sequencer**: every draw is uniform over the seven kinds, repeats allowed
//! - **Rotation in place**: no kicks; a blocked rotation sweeps the remaining orientations
//! - **Lock grace**: two consecutive blocked gravity steps lock a resting piece
//! - **Hold**: once per piece; the held piece keeps its rotation
//! - **Scoring**: 100/300/400/800 per 1-4 lines, times `level + 1`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::Intent;
//!
//! let mut game = GameState::new(20, 10, 12345, "Player").unwrap();
//!
//! game.register_intent(Intent::RotateLeft).unwrap();
//! game.register_intent(Intent::HardDrop).unwrap();
//! game.update(1.0 / 60.0);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.points(), 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod provider;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::CoreError;
pub use game_state::{GameState, MoveOutcome, Tetromino};
pub use pieces::{get_shape, spawn_x, PieceShape};
pub use provider::InputProvider;
pub use queue::IntentQueue;
pub use rng::SimpleRng;
pub use scoring::{fall_interval_secs, level_for, line_score, LineStats};
pub use snapshot::{GameSnapshot, PieceSnapshot};
