use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, SimpleRng};
use blockfall::engine::{best_placement, Greedy, Weighted};
use blockfall::types::{Block, Intent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(20, 10, 12345, "Bench").unwrap();

    c.bench_function("game_update_16ms", |b| {
        b.iter(|| {
            state.update(black_box(0.016));
            if state.game_over() {
                state.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10).unwrap();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(Block::Piece(PieceKind::I)));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_intents(c: &mut Criterion) {
    let mut state = GameState::new(20, 10, 12345, "Bench").unwrap();

    c.bench_function("intent_hard_drop", |b| {
        b.iter(|| {
            let _ = state.register_intent(Intent::HardDrop);
            state.process_intents(0.016);
            if state.game_over() {
                state.reset();
            }
        })
    });
}

fn bench_garbage(c: &mut Criterion) {
    let mut rng = SimpleRng::new(7);

    c.bench_function("push_garbage_row", |b| {
        let mut state = GameState::new(20, 10, 12345, "Bench").unwrap();
        b.iter(|| {
            state.add_garbage(black_box(1), &mut rng);
            state.board_mut().clear_row(19);
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut board = Board::new(20, 10).unwrap();
    for y in 14..20 {
        for x in 0..10 {
            if (x + y) % 4 != 0 {
                board.set(x, y, Some(Block::Garbage));
            }
        }
    }
    let state = GameState::new(20, 10, 12345, "Bench").unwrap();
    let piece = state.current();

    c.bench_function("best_placement_weighted", |b| {
        b.iter(|| best_placement(black_box(&board), &piece, &Weighted::default()))
    });
    c.bench_function("best_placement_greedy", |b| {
        b.iter(|| best_placement(black_box(&board), &piece, &Greedy))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_intents,
    bench_garbage,
    bench_search
);
criterion_main!(benches);
