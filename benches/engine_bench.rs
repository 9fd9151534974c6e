//! Engine Benchmarks
//!
//! Move generation, evaluation and search timings using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guild_engine::search::best_move;
use guild_engine::{checkers, chess, go, morris, xiangqi, Color, Position};

fn bench_chess_legal_moves_starting(c: &mut Criterion) {
    let board = chess::ChessBoard::initial();

    c.bench_function("chess_legal_moves_starting", |b| {
        b.iter(|| black_box(chess::all_legal_moves(&board).len()))
    });
}

fn bench_chess_evaluate_starting(c: &mut Criterion) {
    let board = chess::ChessBoard::initial();

    c.bench_function("chess_evaluate_starting", |b| {
        b.iter(|| black_box(chess::eval::evaluate(&board, Color::White)))
    });
}

fn bench_chess_search_depth_3(c: &mut Criterion) {
    let board = chess::ChessBoard::initial();

    c.bench_function("chess_search_depth_3", |b| {
        b.iter(|| black_box(best_move(&board, 3).map(|outcome| outcome.nodes)))
    });
}

fn bench_xiangqi_legal_moves_starting(c: &mut Criterion) {
    let board = xiangqi::XiangqiBoard::initial();

    c.bench_function("xiangqi_legal_moves_starting", |b| {
        b.iter(|| black_box(xiangqi::all_legal_moves(&board).len()))
    });
}

fn bench_checkers_search_depth_6(c: &mut Criterion) {
    let board = checkers::CheckersBoard::initial();

    c.bench_function("checkers_search_depth_6", |b| {
        b.iter(|| black_box(best_move(&board, 6).map(|outcome| outcome.score)))
    });
}

fn bench_go_placements_19(c: &mut Criterion) {
    let mut state = go::GoState::new(19).unwrap();
    for (i, row) in (3..16).step_by(2).enumerate() {
        let pos = Position::new(row, (i * 3 % 19) as u8);
        state = go::apply_move(&state, go::GoMove::Place(pos)).unwrap();
    }

    c.bench_function("go_legal_placements_19", |b| {
        b.iter(|| black_box(go::legal_placements(&state).len()))
    });
}

fn bench_morris_all_moves(c: &mut Criterion) {
    let state = morris::MorrisState::new();

    c.bench_function("morris_all_moves_opening", |b| {
        b.iter(|| black_box(morris::all_moves(&state).len()))
    });
}

criterion_group!(
    benches,
    bench_chess_legal_moves_starting,
    bench_chess_evaluate_starting,
    bench_chess_search_depth_3,
    bench_xiangqi_legal_moves_starting,
    bench_checkers_search_depth_6,
    bench_go_placements_19,
    bench_morris_all_moves,
);
criterion_main!(benches);
