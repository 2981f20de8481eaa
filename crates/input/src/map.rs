//! Key mapping from terminal events to game keys.

use crossterm::event::KeyCode;

/// Logical game keys tracked by the keyboard provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    Down,
    RotateLeft,
    RotateRight,
    Reset,
    HardDrop,
    Hold,
}

impl GameKey {
    pub const COUNT: usize = 8;

    pub const ALL: [GameKey; GameKey::COUNT] = [
        GameKey::Left,
        GameKey::Right,
        GameKey::Down,
        GameKey::RotateLeft,
        GameKey::RotateRight,
        GameKey::Reset,
        GameKey::HardDrop,
        GameKey::Hold,
    ];

    /// Slot in the input/edge tables
    pub fn index(self) -> usize {
        match self {
            GameKey::Left => 0,
            GameKey::Right => 1,
            GameKey::Down => 2,
            GameKey::RotateLeft => 3,
            GameKey::RotateRight => 4,
            GameKey::Reset => 5,
            GameKey::HardDrop => 6,
            GameKey::Hold => 7,
        }
    }
}

/// Map a terminal key code to a game key.
pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameKey::Down),

        // Rotation
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameKey::RotateLeft),
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameKey::RotateRight),

        // Actions
        KeyCode::Char(' ') => Some(GameKey::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameKey::Hold),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameKey::Reset),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(GameKey::Left));
        assert_eq!(map_key(KeyCode::Char('A')), Some(GameKey::Left));
        assert_eq!(map_key(KeyCode::Right), Some(GameKey::Right));
        assert_eq!(map_key(KeyCode::Char('d')), Some(GameKey::Right));
        assert_eq!(map_key(KeyCode::Down), Some(GameKey::Down));
        assert_eq!(map_key(KeyCode::Char('S')), Some(GameKey::Down));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyCode::Char('z')), Some(GameKey::RotateLeft));
        assert_eq!(map_key(KeyCode::Up), Some(GameKey::RotateRight));
        assert_eq!(map_key(KeyCode::Char('W')), Some(GameKey::RotateRight));
        assert_eq!(map_key(KeyCode::Char('x')), Some(GameKey::RotateRight));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameKey::HardDrop));
        assert_eq!(map_key(KeyCode::Char('c')), Some(GameKey::Hold));
        assert_eq!(map_key(KeyCode::Char('R')), Some(GameKey::Reset));
        assert_eq!(map_key(KeyCode::Char('p')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_key_indices_are_unique() {
        for (i, key) in GameKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }
}
