use thiserror::Error;

use super::piece::PieceKind;
use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupied { square: Square },
    #[error("Cannot apply chess move, the `from` square {square} is empty")]
    FromSquareIsEmpty { square: Square },
    #[error("Cannot castle, there is no rook on {square}")]
    CastleRookMissing { square: Square },
    #[error("Promotion move was not applied to a pawn")]
    PromotionNonPawn,
    #[error("A pawn cannot promote into a {kind}")]
    InvalidPromotionPiece { kind: PieceKind },
}
