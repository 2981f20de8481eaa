//! AI tests - move search on prepared boards and bot-driven play

use blockfall::core::{Board, GameConfig, GameState, InputProvider, Tetromino};
use blockfall::engine::{best_placement, decide_next_move, CpuProvider, EvaluatorKind, Greedy, Weighted};
use blockfall::sim::{SimConfig, Simulation};
use blockfall::types::{Block, PieceKind, Rotation};

fn board_with_well(gap: i32, depth: i32) -> Board {
    let mut board = Board::new(20, 10).unwrap();
    for y in 20 - depth..20 {
        for x in 0..10 {
            if x != gap {
                board.set(x, y, Some(Block::Garbage));
            }
        }
    }
    board
}

#[test]
fn test_both_evaluators_take_the_tetris() {
    let board = board_with_well(7, 4);
    let piece = Tetromino::new(PieceKind::I, 10);

    for best in [
        best_placement(&board, &piece, &Weighted::default()).unwrap(),
        best_placement(&board, &piece, &Greedy).unwrap(),
    ] {
        let landing = Tetromino {
            kind: PieceKind::I,
            rotation: best.rotation,
            x: best.x,
            y: best.y,
        };
        // Vertical, filling the well column down to the floor
        assert!(landing.cells().iter().all(|&(x, _)| x == 7), "{:?}", best);
        assert!(landing.cells().iter().any(|&(_, y)| y == 19));
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = board_with_well(2, 3);
    let before = board.clone();
    for kind in PieceKind::ALL {
        best_placement(&board, &Tetromino::new(kind, 10), &Weighted::default());
    }
    assert_eq!(board, before);
}

#[test]
fn test_search_is_deterministic() {
    let state = GameState::new(20, 10, 2024, "Bot").unwrap();
    let first = decide_next_move(&state, &EvaluatorKind::Weighted);
    let second = decide_next_move(&state, &EvaluatorKind::Weighted);
    assert_eq!(first, second);
}

#[test]
fn test_weighted_avoids_creating_holes() {
    // A single step on the left: placing O flat on the right half is hole-free
    let mut board = Board::new(20, 10).unwrap();
    board.set(0, 19, Some(Block::Garbage));
    let piece = Tetromino::new(PieceKind::O, 10);

    let best = best_placement(&board, &piece, &Weighted::default()).unwrap();
    let landing = Tetromino {
        kind: PieceKind::O,
        rotation: Rotation::SPAWN,
        x: best.x,
        y: best.y,
    };
    let mut scratch = board.clone();
    for (x, y) in landing.cells() {
        scratch.set(x, y, Some(Block::Piece(PieceKind::O)));
    }
    assert_eq!((0..10).map(|x| scratch.column_holes(x)).sum::<usize>(), 0);
}

#[test]
fn test_cpu_places_pieces_on_its_own() {
    let mut state = GameState::new(20, 10, 99, "Bot").unwrap();
    let mut cpu = CpuProvider::new(EvaluatorKind::Weighted);
    let start_id = state.piece_id();

    for _ in 0..3000 {
        cpu.pump(&mut state);
        state.update(1.0 / 60.0);
    }

    assert!(!state.game_over());
    assert!(state.piece_id() > start_id + 10);
}

#[test]
fn test_weighted_bot_clears_lines() {
    let config = GameConfig {
        seed: 7,
        ..GameConfig::default()
    };
    let mut sim = Simulation::new(
        &config,
        SimConfig {
            ticks: 20_000,
            ..SimConfig::default()
        },
    )
    .unwrap();
    sim.run();

    let game = sim.games().next().unwrap();
    assert!(game.stats().lines > 0);
    assert!(game.points() > 0);
}

#[test]
fn test_simulation_is_reproducible() {
    let config = GameConfig {
        seed: 31337,
        ..GameConfig::default()
    };
    let sim_config = SimConfig {
        ticks: 4_000,
        versus: true,
        garbage_lines: 2,
        ..SimConfig::default()
    };

    let mut a = Simulation::new(&config, sim_config.clone()).unwrap();
    let mut b = Simulation::new(&config, sim_config).unwrap();
    a.run();
    b.run();

    assert_eq!(a.snapshots(), b.snapshots());
    assert_eq!(a.snapshots().len(), 2);
}
