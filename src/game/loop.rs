use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::color::Color;
use crate::evaluate::GameEnding;
use crate::game::engine::Engine;
use crate::input_handler::{read_player_input, InputError, PlayerInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    Quit,
}

/// The read-move / print-board loop. Reads player input from `input` and
/// writes the game transcript to `output`.
pub struct GameLoop<R: BufRead, W: Write> {
    engine: Engine,
    input: R,
    output: W,
    computer_color: Option<Color>,
    suggest_moves: bool,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(engine: Engine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            computer_color: None,
            suggest_moves: true,
        }
    }

    /// Lets the engine play `color` instead of reading its moves.
    pub fn with_computer(mut self, color: Color) -> Self {
        self.computer_color = Some(color);
        self
    }

    pub fn suggest_moves(mut self, suggest: bool) -> Self {
        self.suggest_moves = suggest;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) -> io::Result<GameOutcome> {
        loop {
            let turn = self.engine.board().turn();

            match self.engine.game_ending() {
                Some(GameEnding::Checkmate) => {
                    let winner = turn.opposite();
                    writeln!(self.output, "checkmate! {} wins", winner)?;
                    return Ok(GameOutcome::Checkmate { winner });
                }
                Some(GameEnding::Stalemate) => {
                    writeln!(self.output, "stalemate, {} has no moves", turn)?;
                    return Ok(GameOutcome::Stalemate);
                }
                None => (),
            }

            writeln!(self.output, "{}", self.engine.board().to_fen())?;
            write!(self.output, "{}", self.engine.board())?;
            if self.engine.is_check() {
                writeln!(self.output, "{} is in check", turn)?;
            }

            if self.computer_color == Some(turn) {
                if !self.play_engine_move()? {
                    return Ok(GameOutcome::Quit);
                }
                continue;
            }

            writeln!(self.output, "it is {}'s turn", turn)?;
            if self.suggest_moves {
                match self.engine.get_best_move() {
                    Ok(best_move) => writeln!(
                        self.output,
                        "best move: {} ({})",
                        best_move.to_uci(),
                        best_move
                    )?,
                    Err(error) => warn!("no suggestion: {}", error),
                }
            }
            writeln!(self.output, "input a move")?;

            match read_player_input(&mut self.input) {
                Ok(PlayerInput::Move { text }) => match self.engine.make_move(&text) {
                    Ok(chess_move) => writeln!(self.output, "played {}", chess_move)?,
                    Err(error) => writeln!(self.output, "error: {}", error)?,
                },
                Ok(PlayerInput::UseEngine) => {
                    if !self.play_engine_move()? {
                        return Ok(GameOutcome::Quit);
                    }
                }
                Ok(PlayerInput::ListMoves) => {
                    writeln!(self.output, "{}", self.engine.legal_move_texts().join(" "))?
                }
                Ok(PlayerInput::ShowFen) => {
                    writeln!(self.output, "{}", self.engine.board().to_fen())?
                }
                Ok(PlayerInput::Quit) | Err(InputError::UserExit) => {
                    return Ok(GameOutcome::Quit)
                }
                Err(error) => writeln!(self.output, "error: {}", error)?,
            }
        }
    }

    /// Returns false when the engine could not move.
    fn play_engine_move(&mut self) -> io::Result<bool> {
        match self.engine.make_best_move() {
            Ok(chess_move) => {
                writeln!(
                    self.output,
                    "computer played {} ({})",
                    chess_move.to_uci(),
                    chess_move
                )?;
                Ok(true)
            }
            Err(error) => {
                writeln!(self.output, "error: {}", error)?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_game(engine: Engine, input: &str) -> (GameOutcome, String, Engine) {
        let mut game = GameLoop::new(engine, Cursor::new(input.to_string()), Vec::new())
            .suggest_moves(false);
        let outcome = game.run().unwrap();
        let GameLoop { engine, output, .. } = game;
        (outcome, String::from_utf8(output).unwrap(), engine)
    }

    #[test]
    fn test_fools_mate_announces_black() {
        let (outcome, transcript, engine) =
            run_game(Engine::new(), "f2f3\ne7e5\ng2g4\nd8h4\n");

        assert_eq!(
            GameOutcome::Checkmate {
                winner: Color::Black
            },
            outcome
        );
        assert!(transcript.ends_with("checkmate! black wins\n"));
        assert_eq!(4, engine.move_history().len());
    }

    #[test]
    fn test_bad_input_is_reported_and_ignored() {
        let (outcome, transcript, engine) = run_game(Engine::new(), "hello\ne2e5\nquit\n");

        assert_eq!(GameOutcome::Quit, outcome);
        assert!(transcript.contains("error: invalid input: \"hello\""));
        assert!(transcript.contains("error: Illegal move"));
        assert!(engine.move_history().is_empty());
    }

    #[test]
    fn test_end_of_input_quits() {
        let (outcome, transcript, _) = run_game(Engine::new(), "");

        assert_eq!(GameOutcome::Quit, outcome);
        assert!(transcript.starts_with(crate::board::fen::STARTING_POSITION_FEN));
        assert!(transcript.contains("input a move"));
    }

    #[test]
    fn test_list_moves() {
        let (_, transcript, _) = run_game(Engine::new(), "moves\n");
        assert!(transcript.contains("e2e4"));
        assert!(transcript.contains("g1f3"));
    }

    #[test]
    fn test_computer_replies_to_player() {
        let mut engine = Engine::new();
        engine.set_search_depth(1);
        let mut game = GameLoop::new(engine, Cursor::new("e2e4\n"), Vec::new())
            .with_computer(Color::Black)
            .suggest_moves(false);

        assert_eq!(GameOutcome::Quit, game.run().unwrap());
        assert_eq!(2, game.engine().move_history().len());
        assert_eq!(Color::White, game.engine().board().turn());
    }

    #[test]
    fn test_stalemate_ends_the_game() {
        let engine = Engine::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let (outcome, _, _) = run_game(engine, "");
        assert_eq!(GameOutcome::Stalemate, outcome);
    }
}
