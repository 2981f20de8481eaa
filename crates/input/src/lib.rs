//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto game keys and turns key state into intents for
//! a [`GameState`](blockfall_core::GameState). No global state: each provider owns
//! its own held-key and edge tables, so two local players never share input.

pub mod keyboard;
pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use keyboard::{EdgeTable, InputTable, KeyboardProvider};
pub use map::{map_key, GameKey};
