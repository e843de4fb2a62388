use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::square::{Square, D4, D5, E4, E5};
use crate::board::Board;
use crate::move_generation::attacks::attack_count_among;
use crate::move_generation::{has_legal_moves, is_king_in_check, legal_moves};

mod pawn_structure;
mod weights;

pub use weights::EvaluationWeights;

/// Scores are from white's point of view: positive favors white.
pub type Score = f32;

/// Magnitude of a checkmate score. No material balance comes close to it.
pub const MATE_SCORE: Score = 1000.0;

const CENTER_SQUARES: [Square; 4] = [D4, D5, E4, E5];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

/// Returns the game ending state if the side to move has no legal move,
/// otherwise returns None.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    let current_turn = board.turn();

    if has_legal_moves(board, current_turn) {
        return None;
    }

    if is_king_in_check(board, current_turn) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}

/// Scores a position for the search.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> Score,
{
    fn evaluate(&self, board: &Board) -> Score {
        self(board)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeuristicEvaluator {
    weights: EvaluationWeights,
}

impl HeuristicEvaluator {
    pub fn new(weights: EvaluationWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }

    /// Material plus the structural bonuses and penalties of one side.
    pub fn material(&self, board: &Board, color: Color) -> Score {
        let weights = &self.weights;
        let mut material = 0.0;
        let mut bishops = 0;

        for piece in board.pieces_of(color) {
            material += weights.material_value(piece.kind);

            match piece.kind {
                PieceKind::Pawn => {
                    let chain = pawn_structure::pawn_chain_length(board, piece.square, color);
                    if chain > 1 {
                        material += chain as Score * weights.pawn_chain;
                    }
                }
                PieceKind::Bishop => bishops += 1,
                PieceKind::Rook => {
                    let file = piece.square.file();
                    if pawn_structure::is_file_open(board, file) {
                        material += weights.rook_open_file;
                    } else if pawn_structure::is_file_semi_open(board, file, color) {
                        material += weights.rook_semi_open_file;
                    }
                }
                _ => (),
            }
        }

        if bishops >= 2 {
            material += weights.bishop_pair;
        }

        material -=
            pawn_structure::files_with_doubled_pawns(board, color) as Score * weights.doubled_pawns;

        material
    }

    /// Average number of ways `color` covers each of d4, d5, e4 and e5.
    pub fn center_control(&self, board: &Board, color: Color) -> Score {
        let moves = legal_moves(board, color);

        let attacks: usize = CENTER_SQUARES
            .iter()
            .map(|&square| attack_count_among(&moves, board, square, color))
            .sum();

        attacks as Score / CENTER_SQUARES.len() as Score
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board) -> Score {
        match game_ending(board) {
            Some(GameEnding::Checkmate) => {
                return match board.turn() {
                    Color::White => -MATE_SCORE,
                    Color::Black => MATE_SCORE,
                };
            }
            Some(GameEnding::Stalemate) => return 0.0,
            None => (),
        }

        let material = self.material(board, Color::White) - self.material(board, Color::Black);
        let center_control =
            self.center_control(board, Color::White) - self.center_control(board, Color::Black);

        material + center_control * self.weights.center_control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::chess_position;
    use crate::move_generation::attack_count;

    #[test]
    fn test_checkmate_evaluation() {
        let board = parse_fen("R1k5/6R1/8/8/8/3K4/8/8 b - - 11 6").unwrap();
        assert_eq!(Some(GameEnding::Checkmate), game_ending(&board));
        assert_eq!(MATE_SCORE, HeuristicEvaluator::default().evaluate(&board));
    }

    #[test]
    fn test_white_mated_scores_negative() {
        let mut board = chess_position! {
            .......k
            ........
            ........
            ........
            ........
            ........
            PPP.....
            .K.....r
        };
        board.set_turn(Color::White);

        assert_eq!(Some(GameEnding::Checkmate), game_ending(&board));
        assert_eq!(-MATE_SCORE, HeuristicEvaluator::default().evaluate(&board));
    }

    #[test]
    fn test_game_ending_stalemate() {
        let mut board = chess_position! {
            .......k
            .....Q..
            ......K.
            ........
            ........
            ........
            ........
            ........
        };
        board.set_turn(Color::Black);

        assert_eq!(Some(GameEnding::Stalemate), game_ending(&board));
        assert_eq!(0.0, HeuristicEvaluator::default().evaluate(&board));
    }

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(None, game_ending(&board));
        assert_eq!(0.0, HeuristicEvaluator::default().evaluate(&board));
    }

    #[test]
    fn test_starting_material() {
        let board = Board::starting_position();
        let evaluator = HeuristicEvaluator::default();

        // 8 + 6 + 6 + 10 + 9 plus the bishop pair
        assert_eq!(40.0, evaluator.material(&board, Color::White));
        assert_eq!(40.0, evaluator.material(&board, Color::Black));
    }

    #[test]
    fn test_rook_file_bonuses() {
        let evaluator = HeuristicEvaluator::default();
        let open = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        let semi_open = chess_position! {
            ....k...
            p.......
            ........
            ........
            ........
            ........
            ........
            R...K...
        };

        assert_eq!(5.5, evaluator.material(&open, Color::White));
        assert_eq!(5.2, evaluator.material(&semi_open, Color::White));
    }

    #[test]
    fn test_doubled_pawns_are_a_penalty() {
        let evaluator = HeuristicEvaluator::default();
        let doubled = chess_position! {
            ....k...
            ........
            ........
            ........
            ....P...
            ....P...
            ........
            ....K...
        };
        let material = evaluator.material(&doubled, Color::White);
        assert!(material < 2.0);
        assert!(material > 1.8);
    }

    #[test]
    fn test_center_control_matches_attack_count() {
        let board =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
        let evaluator = HeuristicEvaluator::default();

        let expected: usize = CENTER_SQUARES
            .iter()
            .map(|&square| attack_count(&board, square, Color::White))
            .sum();
        assert_eq!(
            expected as Score / 4.0,
            evaluator.center_control(&board, Color::White)
        );
    }

    #[test]
    fn test_closure_evaluator() {
        let count_pieces = |board: &Board| board.piece_count() as Score;
        assert_eq!(32.0, count_pieces.evaluate(&Board::starting_position()));
    }
}
