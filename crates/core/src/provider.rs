//! Input providers
//!
//! Anything that turns outside state (a keyboard, a bot) into intents implements
//! [`InputProvider`]. Providers own whatever state they need; the game only ever
//! sees intents arriving through its queue.

use crate::game_state::GameState;

pub trait InputProvider {
    /// Inspect the game and enqueue zero or more intents
    fn pump(&mut self, game: &mut GameState);
}
