use thiserror::Error;

use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::square::{Square, SquareParseError};
use crate::board::Board;

use super::{ChessMove, MoveKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Move text too short: {input:?}, expected e.g. \"e2e4\"")]
    TooShort { input: String },
    #[error("Invalid square in move: {error}")]
    Square { error: SquareParseError },
    #[error("No piece at origin square {square}")]
    NoPieceAtOrigin { square: Square },
    #[error("Promotion piece missing, expected one of n, b, r, q")]
    MissingPromotionPiece,
    #[error("Invalid promotion piece: {character:?}")]
    InvalidPromotionPiece { character: char },
}

impl From<SquareParseError> for MoveParseError {
    fn from(error: SquareParseError) -> Self {
        MoveParseError::Square { error }
    }
}

impl ChessMove {
    /// Parses coordinate move text such as `e2e4` or `e7e8q` against `board`.
    ///
    /// The board supplies the moving piece and decides the move kind: a king
    /// stepping two files from its home square castles, a pawn stepping
    /// diagonally onto the en passant target captures en passant, and a pawn
    /// reaching its last rank promotes to the piece named by the fifth
    /// character. Legality is not checked here.
    pub fn parse(text: &str, board: &Board) -> Result<Self, MoveParseError> {
        let text = text.trim();
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 {
            return Err(MoveParseError::TooShort {
                input: text.to_string(),
            });
        }

        let from: Square = chars[0..2].iter().collect::<String>().parse()?;
        let to: Square = chars[2..4].iter().collect::<String>().parse()?;

        let piece = board
            .piece_at(from)
            .ok_or(MoveParseError::NoPieceAtOrigin { square: from })?;

        let kind = match piece.kind {
            PieceKind::King => castle_kind(piece.color, from, to),
            PieceKind::Pawn if to.rank() == piece.color.promotion_rank() => {
                let character = chars
                    .get(4)
                    .copied()
                    .ok_or(MoveParseError::MissingPromotionPiece)?;
                let promotion = PieceKind::from_letter(character)
                    .filter(PieceKind::is_promotable)
                    .ok_or(MoveParseError::InvalidPromotionPiece { character })?;
                MoveKind::Promotion(promotion)
            }
            PieceKind::Pawn
                if from.file() != to.file()
                    && board.en_passant_target() == Some(to)
                    && !board.is_occupied(to) =>
            {
                MoveKind::EnPassant
            }
            _ => MoveKind::Normal,
        };

        Ok(ChessMove::new(piece.kind, piece.color, from, to, kind))
    }
}

fn castle_kind(color: Color, from: Square, to: Square) -> MoveKind {
    let back_rank = color.back_rank();
    if from.rank() != back_rank || to.rank() != back_rank || from.file() != 5 {
        return MoveKind::Normal;
    }

    match to.file() {
        7 => MoveKind::ShortCastle,
        3 => MoveKind::LongCastle,
        _ => MoveKind::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::board::square::*;

    #[test]
    fn test_parse_pawn_push() {
        let board = Board::starting_position();
        let chess_move = ChessMove::parse("e2e4", &board).unwrap();

        assert_eq!(E2, chess_move.from_square());
        assert_eq!(E4, chess_move.to_square());
        assert_eq!(PieceKind::Pawn, chess_move.piece());
        assert_eq!(Color::White, chess_move.color());
        assert_eq!(MoveKind::Normal, chess_move.kind());
    }

    #[test]
    fn test_parse_queen_move() {
        let board = parse_fen("5kn1/p4p2/8/2qp4/5P2/1PBK2P1/P3r3/8 b - - 1 26").unwrap();
        let chess_move = ChessMove::parse("c5e3", &board).unwrap();

        assert_eq!(PieceKind::Queen, chess_move.piece());
        assert_eq!(Color::Black, chess_move.color());
        assert_eq!(C5, chess_move.from_square());
        assert_eq!(E3, chess_move.to_square());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let board = Board::starting_position();
        let chess_move = ChessMove::parse("  g1f3\n", &board).unwrap();
        assert_eq!(PieceKind::Knight, chess_move.piece());
    }

    #[test]
    fn test_parse_castles() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(
            MoveKind::ShortCastle,
            ChessMove::parse("e1g1", &board).unwrap().kind()
        );
        assert_eq!(
            MoveKind::LongCastle,
            ChessMove::parse("e8c8", &board).unwrap().kind()
        );
        assert_eq!(
            MoveKind::Normal,
            ChessMove::parse("e1f1", &board).unwrap().kind()
        );
    }

    #[test]
    fn test_parse_promotion() {
        let board = parse_fen("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        let chess_move = ChessMove::parse("e7e8n", &board).unwrap();
        assert_eq!(MoveKind::Promotion(PieceKind::Knight), chess_move.kind());

        assert_eq!(
            Err(MoveParseError::MissingPromotionPiece),
            ChessMove::parse("e7e8", &board)
        );
        assert_eq!(
            Err(MoveParseError::InvalidPromotionPiece { character: 'k' }),
            ChessMove::parse("e7e8k", &board)
        );
    }

    #[test]
    fn test_parse_en_passant() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let chess_move = ChessMove::parse("e5d6", &board).unwrap();
        assert_eq!(MoveKind::EnPassant, chess_move.kind());
    }

    #[test]
    fn test_parse_errors() {
        let board = Board::starting_position();

        assert_eq!(
            Err(MoveParseError::TooShort {
                input: "e2".to_string()
            }),
            ChessMove::parse("e2", &board)
        );
        assert_eq!(
            Err(MoveParseError::NoPieceAtOrigin { square: E4 }),
            ChessMove::parse("e4e5", &board)
        );
        assert!(matches!(
            ChessMove::parse("z2e4", &board),
            Err(MoveParseError::Square { .. })
        ));
        assert!(matches!(
            ChessMove::parse("e2e9", &board),
            Err(MoveParseError::Square { .. })
        ));
    }
}
