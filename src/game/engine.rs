use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::fen::FenParseError;
use crate::board::Board;
use crate::chess_move::{ChessMove, MoveParseError};
use crate::evaluate::{self, GameEnding, HeuristicEvaluator};
use crate::move_generation;
use crate::searcher::{SearchConfig, SearchError, SearchStats, Searcher};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid move text: {error}")]
    MoveParse { error: MoveParseError },
    #[error("It is {turn}'s turn, a {color} piece cannot move")]
    NotYourTurn { turn: Color, color: Color },
    #[error("Illegal move: {chess_move}")]
    IllegalMove { chess_move: ChessMove },
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

impl From<MoveParseError> for EngineError {
    fn from(error: MoveParseError) -> Self {
        EngineError::MoveParse { error }
    }
}

/// Owns a game in progress: validates and plays moves, reports the game
/// state and asks the searcher for moves.
pub struct Engine {
    board: Board,
    move_history: Vec<ChessMove>,
    searcher: Searcher<HeuristicEvaluator>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            move_history: Vec::new(),
            searcher: Searcher::new(config.search, HeuristicEvaluator::default()),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        Ok(Self::with_config(EngineConfig {
            starting_position: Board::from_fen(fen)?,
            ..Default::default()
        }))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.move_history.last().copied()
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.searcher.set_depth(depth);
    }

    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        move_generation::legal_moves(&self.board, self.board.turn())
    }

    /// Legal moves of the side to move in the notation `make_move` accepts.
    pub fn legal_move_texts(&self) -> Vec<String> {
        self.legal_moves().iter().map(ChessMove::to_uci).collect()
    }

    pub fn is_check(&self) -> bool {
        move_generation::is_king_in_check(&self.board, self.board.turn())
    }

    pub fn is_checkmate(&self) -> bool {
        move_generation::is_checkmate(&self.board)
    }

    pub fn game_ending(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board)
    }

    /// Parses and plays a move such as `e2e4`. Rejected moves leave the
    /// board as it was.
    pub fn make_move(&mut self, text: &str) -> Result<ChessMove, EngineError> {
        let chess_move = ChessMove::parse(text, &self.board)?;
        self.apply_chess_move(chess_move)?;
        Ok(chess_move)
    }

    pub fn apply_chess_move(&mut self, chess_move: ChessMove) -> Result<(), EngineError> {
        let turn = self.board.turn();
        if chess_move.color() != turn {
            return Err(EngineError::NotYourTurn {
                turn,
                color: chess_move.color(),
            });
        }

        if !self.legal_moves().contains(&chess_move) {
            return Err(EngineError::IllegalMove { chess_move });
        }

        let mut next = self.board.clone();
        chess_move
            .apply(&mut next)
            .map_err(|error| EngineError::BoardError { error })?;
        self.board = next;

        debug!("{} played {}", turn, chess_move.to_uci());
        self.move_history.push(chess_move);
        Ok(())
    }

    pub fn get_best_move(&mut self) -> Result<ChessMove, EngineError> {
        self.searcher
            .best_move(&self.board)
            .map_err(|error| EngineError::SearchError { error })
    }

    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self.get_best_move()?;
        self.apply_chess_move(best_move)?;
        info!("engine played {}", best_move);
        Ok(best_move)
    }
}
