use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use minimax_engine::core::{Player, SearchConfig, Traversal};
use minimax_engine::games::nim::Nim;
use minimax_engine::games::tictactoe::{Square, TicTacToe};
use minimax_engine::search::{decide, minimax, MinimaxSearch};
use minimax_engine::GameState;
use std::hint::black_box;
use std::time::Duration;

fn opened_board() -> TicTacToe {
    TicTacToe::new()
        .apply(&Square::new(1, 1))
        .and_then(|state| state.apply(&Square::new(0, 0)))
        .expect("opening moves are legal")
}

fn bench_tictactoe(c: &mut Criterion) {
    let empty = TicTacToe::new();
    let opened = opened_board();

    c.bench_function("minimax empty board", |b| {
        b.iter(|| minimax(black_box(&empty), Player::Max, 0))
    });

    c.bench_function("decide after two moves", |b| {
        b.iter(|| decide(black_box(&opened), Player::Max))
    });
}

fn bench_traversals(c: &mut Criterion) {
    let opened = opened_board();
    let mut group = c.benchmark_group("traversal");

    for traversal in [Traversal::Recursive, Traversal::WorkStack] {
        let mut search = MinimaxSearch::new(SearchConfig::new().with_traversal(traversal));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{traversal:?}")),
            &opened,
            |b, state| b.iter(|| search.evaluate(black_box(state), Player::Max, 2)),
        );
    }
    group.finish();
}

fn bench_nim(c: &mut Criterion) {
    let mut group = c.benchmark_group("nim");
    for pile in [8u32, 12, 16] {
        let state = Nim::new(pile, 3).expect("pile fits");
        group.bench_with_input(BenchmarkId::from_parameter(pile), &state, |b, state| {
            b.iter(|| minimax(black_box(state), Player::Max, 0))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(2));
    targets = bench_tictactoe, bench_traversals, bench_nim
}
criterion_main!(benches);
