//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tree_chess::board::Board;
use tree_chess::game::engine::{Engine, EngineConfig};
use tree_chess::searcher::{CacheKeyPolicy, SearchConfig};

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "fen")]
    pub starting_position: Board,
    #[structopt(long = "placement-key")]
    pub placement_key: bool,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let cache_key = if self.placement_key {
            CacheKeyPolicy::Placement
        } else {
            CacheKeyPolicy::FullPosition
        };
        let config = EngineConfig {
            search: SearchConfig {
                depth: self.depth,
                cache_key,
            },
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);

        if let Some(ending) = engine.game_ending() {
            eprintln!("The game is over: {:?}", ending);
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => {
                println!("{}", best_move.to_uci());
                let stats = engine.search_stats();
                eprintln!(
                    "{} ({} nodes, {} cached positions, {} cache hits)",
                    best_move, stats.nodes, stats.cache_size, stats.cache_hits
                );
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
