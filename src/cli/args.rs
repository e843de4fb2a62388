//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{calculate_best_move::CalculateBestMoveArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "tree_chess",
    about = "A chess engine that searches a game tree with alpha-beta minimax"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play from the given `--fen` (default: starting position). Each turn prints the position and the engine's suggested move at `--depth` (default: 3), then reads a move such as `e2e4` from stdin. With `--computer white|black|random` the engine plays that side."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the best move for the side to move in the position given with `--fen` (required), searched to `--depth` (default: 3). `--placement-key` shares cached subtrees between positions that differ only in their move counters."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            CalculateBestMove(cmd),
        }
    }
}
