pub mod castle_rights;
pub mod color;
pub mod error;
pub mod fen;
pub mod piece;
pub mod piece_set;
pub mod square;

mod display;


use castle_rights::CastleRights;
use color::Color;
use error::BoardError;
use piece::{Piece, PieceKind};
use piece_set::{PieceId, PieceSet};
use square::Square;

/// Represents the full state of a chess game: the pieces on the board, whose
/// turn it is, castling rights, the en passant target and the move clocks.
///
/// A `Board` is a plain value. Cloning it deep-copies the piece storage, so
/// callers probe hypothetical positions on a clone and never on a board they
/// do not own.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: PieceSet,
    turn: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: PieceSet::new(),
            turn: Color::White,
            castle_rights: CastleRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();

        for color in [Color::White, Color::Black].iter() {
            let back_rank = color.back_rank();
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in (1..=8).zip(BACK_RANK.iter()) {
                if let Some(square) = Square::new(file, back_rank) {
                    board.pieces.insert(Piece::new(square, *color, *kind));
                }
            }
            for file in 1..=8 {
                if let Some(square) = Square::new(file, pawn_rank) {
                    board
                        .pieces
                        .insert(Piece::new(square, *color, PieceKind::Pawn));
                }
            }
        }

        board.castle_rights = CastleRights::all();
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.square == square)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.of_color(color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    pub fn put(
        &mut self,
        square: Square,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }

        Ok(self.pieces.insert(Piece::new(square, color, kind)))
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let id = self.pieces.find(square)?;
        self.pieces.remove(id)
    }

    // Stable-id access used by move application.

    pub(crate) fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.pieces.find(square)
    }

    pub(crate) fn piece_by_id(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub(crate) fn piece_by_id_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id)
    }

    pub(crate) fn remove_by_id(&mut self, id: PieceId) -> Option<Piece> {
        self.pieces.remove(id)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn set_castle_rights(&mut self, rights: CastleRights) -> CastleRights {
        self.castle_rights = rights;
        rights
    }

    pub fn lose_castle_rights(&mut self, lost_rights: CastleRights) -> CastleRights {
        self.castle_rights = self.castle_rights.without(lost_rights);
        self.castle_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) -> Option<Square> {
        self.en_passant_target = target;
        target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) -> u32 {
        self.halfmove_clock = clock;
        clock
    }

    pub fn reset_halfmove_clock(&mut self) -> u32 {
        self.set_halfmove_clock(0)
    }

    pub fn increment_halfmove_clock(&mut self) -> u32 {
        self.halfmove_clock += 1;
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_fullmove_number(&mut self, number: u32) -> u32 {
        self.fullmove_number = number;
        number
    }

    pub fn increment_fullmove_number(&mut self) -> u32 {
        self.fullmove_number += 1;
        self.fullmove_number
    }
}
