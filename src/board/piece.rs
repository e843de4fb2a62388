use std::fmt;

use super::color::Color;
use super::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Pieces a pawn may promote into, strongest first.
pub const PROMOTABLE_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Maps a piece letter of either case to its kind.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_fen(&self, color: Color) -> char {
        match color {
            Color::White => self.letter().to_ascii_uppercase(),
            Color::Black => self.letter(),
        }
    }

    /// Uppercase letters are white pieces, lowercase are black.
    pub fn from_fen(c: char) -> Option<(PieceKind, Color)> {
        let kind = Self::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }

    pub fn is_promotable(&self) -> bool {
        PROMOTABLE_KINDS.contains(self)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(square: Square, color: Color, kind: PieceKind) -> Self {
        Self {
            square,
            color,
            kind,
        }
    }

    pub fn to_fen(&self) -> char {
        self.kind.to_fen(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} in {}", self.color, self.kind, self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::E2;

    #[test]
    fn test_fen_letters() {
        assert_eq!('N', PieceKind::Knight.to_fen(Color::White));
        assert_eq!('q', PieceKind::Queen.to_fen(Color::Black));
        assert_eq!(Some((PieceKind::King, Color::White)), PieceKind::from_fen('K'));
        assert_eq!(Some((PieceKind::Pawn, Color::Black)), PieceKind::from_fen('p'));
        assert_eq!(None, PieceKind::from_fen('x'));
    }

    #[test]
    fn test_display() {
        let piece = Piece::new(E2, Color::White, PieceKind::Pawn);
        assert_eq!("white pawn in e2", piece.to_string());
    }
}
