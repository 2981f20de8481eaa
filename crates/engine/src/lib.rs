//! Move search engine
//!
//! - [`search`]: exhaustive placement search over rotations and columns
//! - [`eval`]: pluggable evaluation functions (greedy, weighted)
//! - [`cpu`]: input provider that plays a game through the intent queue

pub mod cpu;
pub mod eval;
pub mod search;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use cpu::CpuProvider;
pub use eval::{BoardFeatures, Evaluator, EvaluatorKind, Greedy, Weighted, Weights};
pub use search::{best_placement, decide_next_move, MoveCandidate};
