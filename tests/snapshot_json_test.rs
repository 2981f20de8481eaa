//! Snapshot JSON tests - observable state serialized through serde_json

use blockfall::core::GameState;
use blockfall::types::PieceKind;
use serde_json::Value;

#[test]
fn test_snapshot_json_shape() {
    let state = GameState::new(20, 10, 12345, "Player").unwrap();
    let json = serde_json::to_value(state.snapshot()).unwrap();

    assert_eq!(json["name"], "Player");
    assert_eq!(json["rows"], 20);
    assert_eq!(json["cols"], 10);
    assert_eq!(json["points"], 0);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["hold"], Value::Null);

    let board = json["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 10));
    assert_eq!(json["preview"].as_array().unwrap().len(), 3);
}

#[test]
fn test_snapshot_json_piece_fields() {
    let state = GameState::new(20, 10, 12345, "Player").unwrap();
    let json = serde_json::to_value(state.snapshot()).unwrap();

    let current = state.current();
    assert_eq!(json["current"]["x"], current.x);
    assert_eq!(json["current"]["y"], current.y);
    assert_eq!(json["current"]["rotation"], 0);
    assert_eq!(json["current"]["kind"], current.kind.as_str());
    assert_eq!(json["next"], state.next().as_str());
    assert_eq!(json["ghost"]["x"], current.x);
}

#[test]
fn test_piece_kind_names_are_lowercase() {
    for kind in PieceKind::ALL {
        let text = serde_json::to_string(&kind).unwrap();
        assert_eq!(text, format!("\"{}\"", kind.as_str()));
        assert_eq!(text, text.to_lowercase());
    }
}

#[test]
fn test_board_tags_after_lock() {
    let mut state = GameState::new(20, 10, 12345, "Player").unwrap();
    let kind = state.current().kind;
    state.hard_drop();
    let json = serde_json::to_value(state.snapshot()).unwrap();

    let tag = kind.index() as u64 + 1;
    let count = json["board"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|cell| cell.as_u64() == Some(tag))
        .count();
    assert_eq!(count, 4);
}
