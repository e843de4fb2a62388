use tree_chess::board::Board;
use tree_chess::evaluate::HeuristicEvaluator;
use tree_chess::searcher::{CacheKeyPolicy, SearchConfig, Searcher};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("back rank mate in 1", |b| b.iter(find_back_rank_mate));
    c.bench_function("opening search depth 2", |b| {
        b.iter(|| search_opening(CacheKeyPolicy::FullPosition))
    });
    c.bench_function("opening search depth 2 placement key", |b| {
        b.iter(|| search_opening(CacheKeyPolicy::Placement))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn searcher(depth: u8, cache_key: CacheKeyPolicy) -> Searcher {
    Searcher::new(SearchConfig { depth, cache_key }, HeuristicEvaluator::default())
}

fn find_back_rank_mate() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let best_move = searcher(1, CacheKeyPolicy::default())
        .best_move(&board)
        .unwrap();
    assert_eq!("a1a8", best_move.to_uci());
}

fn search_opening(cache_key: CacheKeyPolicy) {
    let board = Board::starting_position();
    searcher(2, cache_key).best_move(&board).unwrap();
}
