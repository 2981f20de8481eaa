//! Keyboard input provider.
//!
//! Key state lives in two explicit tables owned by the provider: which keys are
//! held, and which one-shot keys have already fired for the current press. Each
//! pump turns that state into intents. Movement and soft drop repeat while held
//! (the game's cooldowns pace them); rotation, hold, reset and hard drop fire once
//! per press.
//!
//! Terminals that never report key releases can set a release timeout: a key is
//! treated as released once no press or repeat has been seen for that long.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::{GameState, InputProvider};
use crate::map::{map_key, GameKey};
use crate::types::Intent;

/// Raw held-key table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTable {
    held: [bool; GameKey::COUNT],
}

impl InputTable {
    pub fn set(&mut self, key: GameKey, pressed: bool) {
        self.held[key.index()] = pressed;
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held[key.index()]
    }

    pub fn clear(&mut self) {
        self.held = [false; GameKey::COUNT];
    }
}

/// One-shot tracker: a held key reports a press once until it is released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTable {
    fired: [bool; GameKey::COUNT],
}

impl EdgeTable {
    /// True on the first check after `raw` goes high; re-arms when `raw` is low
    pub fn is_edge_pressed(&mut self, key: GameKey, raw: bool) -> bool {
        let fired = &mut self.fired[key.index()];
        if raw && !*fired {
            *fired = true;
            true
        } else {
            if !raw {
                *fired = false;
            }
            false
        }
    }
}

const HELD_KEYS: [(GameKey, Intent); 3] = [
    (GameKey::Left, Intent::MoveLeft),
    (GameKey::Right, Intent::MoveRight),
    (GameKey::Down, Intent::SoftDrop),
];

const EDGE_KEYS: [(GameKey, Intent); 5] = [
    (GameKey::RotateLeft, Intent::RotateLeft),
    (GameKey::RotateRight, Intent::RotateRight),
    (GameKey::Hold, Intent::Hold),
    (GameKey::Reset, Intent::Reset),
    (GameKey::HardDrop, Intent::HardDrop),
];

/// Keyboard-driven input provider
#[derive(Debug, Clone, Default)]
pub struct KeyboardProvider {
    table: InputTable,
    edges: EdgeTable,
    /// Seconds since each key was last pressed or repeated
    idle_secs: [f32; GameKey::COUNT],
    release_timeout_secs: Option<f32>,
}

impl KeyboardProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat keys as released after `secs` without a press or repeat event
    pub fn with_release_timeout(mut self, secs: f32) -> Self {
        self.release_timeout_secs = Some(secs);
        self
    }

    pub fn table(&self) -> &InputTable {
        &self.table
    }

    /// Record a press or release of a game key
    pub fn handle_key(&mut self, key: GameKey, pressed: bool) {
        self.table.set(key, pressed);
        if pressed {
            self.idle_secs[key.index()] = 0.0;
        }
    }

    /// Record a terminal key event. Returns false if the key is not mapped.
    pub fn handle_event(&mut self, event: KeyEvent) -> bool {
        let Some(key) = map_key(event.code) else {
            return false;
        };
        let pressed = matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat);
        self.handle_key(key, pressed);
        true
    }

    /// Advance the release timeout clock
    pub fn advance(&mut self, dt: f32) {
        let Some(timeout) = self.release_timeout_secs else {
            return;
        };
        for key in GameKey::ALL {
            if !self.table.is_held(key) {
                continue;
            }
            let idle = &mut self.idle_secs[key.index()];
            *idle += dt;
            if *idle > timeout {
                self.table.set(key, false);
            }
        }
    }

    /// Drop all key state (focus loss, game switch)
    pub fn release_all(&mut self) {
        self.table.clear();
        self.edges = EdgeTable::default();
    }

    /// Intents for the current key state, in dispatch order
    pub fn intents(&mut self) -> ArrayVec<Intent, { GameKey::COUNT }> {
        let mut out = ArrayVec::new();

        for (key, intent) in HELD_KEYS {
            if self.table.is_held(key) {
                out.push(intent);
            }
        }

        // one-shots
        for (key, intent) in EDGE_KEYS {
            if self.edges.is_edge_pressed(key, self.table.is_held(key)) {
                out.push(intent);
            }
        }

        out
    }
}

impl InputProvider for KeyboardProvider {
    fn pump(&mut self, game: &mut GameState) {
        for intent in self.intents() {
            // Overflow is logged by the game; nothing to retry here
            if game.register_intent(intent).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_edge_table() {
        let mut edges = EdgeTable::default();
        assert!(edges.is_edge_pressed(GameKey::Hold, true));
        assert!(!edges.is_edge_pressed(GameKey::Hold, true));
        assert!(!edges.is_edge_pressed(GameKey::Hold, false));
        assert!(edges.is_edge_pressed(GameKey::Hold, true));
    }

    #[test]
    fn test_held_keys_repeat() {
        let mut kb = KeyboardProvider::new();
        kb.handle_key(GameKey::Left, true);
        kb.handle_key(GameKey::Down, true);

        assert_eq!(kb.intents().as_slice(), &[Intent::MoveLeft, Intent::SoftDrop]);
        assert_eq!(kb.intents().as_slice(), &[Intent::MoveLeft, Intent::SoftDrop]);

        kb.handle_key(GameKey::Left, false);
        assert_eq!(kb.intents().as_slice(), &[Intent::SoftDrop]);
    }

    #[test]
    fn test_one_shot_keys_fire_once_per_press() {
        let mut kb = KeyboardProvider::new();
        kb.handle_key(GameKey::RotateRight, true);
        kb.handle_key(GameKey::HardDrop, true);

        assert_eq!(
            kb.intents().as_slice(),
            &[Intent::RotateRight, Intent::HardDrop]
        );
        assert!(kb.intents().is_empty());

        kb.handle_key(GameKey::RotateRight, false);
        assert!(kb.intents().is_empty());
        kb.handle_key(GameKey::RotateRight, true);
        assert_eq!(kb.intents().as_slice(), &[Intent::RotateRight]);
    }

    #[test]
    fn test_handle_event_kinds() {
        let mut kb = KeyboardProvider::new();
        assert!(kb.handle_event(event(KeyCode::Char('c'), KeyEventKind::Press)));
        assert!(kb.table().is_held(GameKey::Hold));

        assert!(kb.handle_event(event(KeyCode::Char('c'), KeyEventKind::Release)));
        assert!(!kb.table().is_held(GameKey::Hold));

        assert!(!kb.handle_event(event(KeyCode::Char('p'), KeyEventKind::Press)));
    }

    #[test]
    fn test_release_timeout() {
        let mut kb = KeyboardProvider::new().with_release_timeout(0.15);
        kb.handle_key(GameKey::Right, true);

        kb.advance(0.1);
        assert!(kb.table().is_held(GameKey::Right));

        // A repeat event refreshes the key
        kb.handle_key(GameKey::Right, true);
        kb.advance(0.1);
        assert!(kb.table().is_held(GameKey::Right));

        kb.advance(0.1);
        assert!(!kb.table().is_held(GameKey::Right));
    }

    #[test]
    fn test_no_timeout_keeps_keys_held() {
        let mut kb = KeyboardProvider::new();
        kb.handle_key(GameKey::Down, true);
        kb.advance(10.0);
        assert!(kb.table().is_held(GameKey::Down));
    }

    #[test]
    fn test_pump_feeds_game_queue() {
        let mut game = GameState::new(20, 10, 9, "Player").unwrap();
        let mut kb = KeyboardProvider::new();
        kb.handle_key(GameKey::RotateLeft, true);
        kb.handle_key(GameKey::Right, true);

        kb.pump(&mut game);
        assert_eq!(game.pending_intents(), 2);

        let rotation = game.current().rotation;
        game.process_intents(0.0);
        assert_ne!(game.current().rotation, rotation);

        kb.release_all();
        kb.pump(&mut game);
        assert_eq!(game.pending_intents(), 0);
    }
}
