use crate::board::castle_rights::{CastleRights, CastleSide};
use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::{Square, A1, A8, D1, D8, F1, F8, H1, H8};
use crate::board::Board;

use super::{ChessMove, MoveKind};

impl ChessMove {
    /// Plays the move on `board` in place, returning the captured piece.
    ///
    /// The move is not checked for legality and the side to move is not
    /// consulted; the turn is simply flipped. Pieces are addressed through
    /// stable ids, so removing a captured piece never disturbs the piece
    /// being moved. On error the board may be partially updated, so callers
    /// apply to a board they are prepared to discard.
    pub fn apply(&self, board: &mut Board) -> Result<Option<Piece>, BoardError> {
        let mover_id = board
            .piece_id_at(self.from)
            .ok_or(BoardError::FromSquareIsEmpty { square: self.from })?;
        let mover = *board
            .piece_by_id(mover_id)
            .ok_or(BoardError::FromSquareIsEmpty { square: self.from })?;

        if let MoveKind::Promotion(kind) = self.kind {
            if mover.kind != PieceKind::Pawn {
                return Err(BoardError::PromotionNonPawn);
            }
            if !kind.is_promotable() {
                return Err(BoardError::InvalidPromotionPiece { kind });
            }
        }

        // the pawn taken en passant sits beside the mover, not on the target square
        let capture_square = match self.kind {
            MoveKind::EnPassant => Square::new(self.to.file(), self.from.rank()),
            _ => Some(self.to),
        };
        let captured = capture_square
            .and_then(|square| board.piece_id_at(square))
            .filter(|&id| id != mover_id)
            .and_then(|id| board.remove_by_id(id));

        if let Some(piece) = board.piece_by_id_mut(mover_id) {
            piece.square = self.to;
            if let MoveKind::Promotion(kind) = self.kind {
                piece.kind = kind;
            }
        }

        match self.kind {
            MoveKind::ShortCastle => {
                relocate_castling_rook(board, mover.color, CastleSide::Kingside)?
            }
            MoveKind::LongCastle => {
                relocate_castling_rook(board, mover.color, CastleSide::Queenside)?
            }
            _ => (),
        }

        board.lose_castle_rights(lost_castle_rights(&mover, self.from, captured.as_ref()));

        let en_passant_target = if mover.kind == PieceKind::Pawn
            && (self.to.rank() - self.from.rank()).abs() == 2
        {
            Square::new(self.from.file(), (self.from.rank() + self.to.rank()) / 2)
        } else {
            None
        };
        board.set_en_passant_target(en_passant_target);

        if captured.is_some() || mover.kind == PieceKind::Pawn {
            board.reset_halfmove_clock();
        } else {
            board.increment_halfmove_clock();
        }

        if mover.color == Color::Black {
            board.increment_fullmove_number();
        }

        board.toggle_turn();

        Ok(captured)
    }
}

fn rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => (H1, F1),
        (Color::White, CastleSide::Queenside) => (A1, D1),
        (Color::Black, CastleSide::Kingside) => (H8, F8),
        (Color::Black, CastleSide::Queenside) => (A8, D8),
    }
}

fn relocate_castling_rook(
    board: &mut Board,
    color: Color,
    side: CastleSide,
) -> Result<(), BoardError> {
    let (rook_from, rook_to) = rook_squares(color, side);

    let rook_id = board
        .piece_id_at(rook_from)
        .filter(|&id| {
            board
                .piece_by_id(id)
                .map_or(false, |p| p.kind == PieceKind::Rook && p.color == color)
        })
        .ok_or(BoardError::CastleRookMissing { square: rook_from })?;

    if let Some(rook) = board.piece_by_id_mut(rook_id) {
        rook.square = rook_to;
    }

    Ok(())
}

fn lost_castle_rights(mover: &Piece, from: Square, captured: Option<&Piece>) -> CastleRights {
    let mut lost = CastleRights::none();

    if mover.kind == PieceKind::King {
        lost |= CastleRights::for_color(mover.color);
    }
    if mover.kind == PieceKind::Rook {
        lost |= corner_rights(mover.color, from);
    }
    if let Some(piece) = captured.filter(|p| p.kind == PieceKind::Rook) {
        lost |= corner_rights(piece.color, piece.square);
    }

    lost
}

/// The castling right tied to a rook standing on one of `color`'s home corners.
fn corner_rights(color: Color, square: Square) -> CastleRights {
    if square.rank() != color.back_rank() {
        return CastleRights::none();
    }
    match square.file() {
        1 => CastleRights::for_side(color, CastleSide::Queenside),
        8 => CastleRights::for_side(color, CastleSide::Kingside),
        _ => CastleRights::none(),
    }
}
