//! Play command - the interactive read-move / print-board loop.

use std::io;

use structopt::StructOpt;
use tree_chess::board::color::Color;
use tree_chess::board::fen::STARTING_POSITION_FEN;
use tree_chess::board::Board;
use tree_chess::game::engine::{Engine, EngineConfig};
use tree_chess::game::r#loop::{GameLoop, GameOutcome};
use tree_chess::searcher::SearchConfig;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    /// Side played by the engine: `white`, `black` or `random`.
    #[structopt(short = "c", long = "computer")]
    pub computer: Option<Color>,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    /// Skip the suggested move printed before each human turn.
    #[structopt(long = "no-suggestions")]
    pub no_suggestions: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let engine = Engine::with_config(EngineConfig {
            search: SearchConfig {
                depth: self.depth,
                ..Default::default()
            },
            starting_position: self.starting_position,
        });

        let stdin = io::stdin();
        let mut game = GameLoop::new(engine, stdin.lock(), io::stdout())
            .suggest_moves(!self.no_suggestions);
        if let Some(color) = self.computer {
            game = game.with_computer(color);
        }

        match game.run() {
            Ok(GameOutcome::Quit) => println!("bye"),
            Ok(_) => (),
            Err(error) => eprintln!("error: {}", error),
        }
    }
}
