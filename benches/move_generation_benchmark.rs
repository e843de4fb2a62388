use tree_chess::board::color::Color;
use tree_chess::board::Board;
use tree_chess::move_generation::{generate_pseudo_legal_moves, legal_moves};

use criterion::{criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 4 8";

fn criterion_benchmark(c: &mut Criterion) {
    let start = Board::starting_position();
    let middlegame = Board::from_fen(MIDDLEGAME).unwrap();

    c.bench_function("pseudo legal moves middlegame", |b| {
        b.iter(|| generate_pseudo_legal_moves(&middlegame, Color::White))
    });
    c.bench_function("legal moves middlegame", |b| {
        b.iter(|| legal_moves(&middlegame, Color::White))
    });
    c.bench_function("count positions depth 3", |b| b.iter(|| count_positions(&start, 3)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn count_positions(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    legal_moves(board, board.turn())
        .into_iter()
        .map(|chess_move| {
            let mut child = board.clone();
            chess_move.apply(&mut child).unwrap();
            count_positions(&child, depth - 1)
        })
        .sum()
}
