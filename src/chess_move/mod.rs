mod apply;
pub mod parse;

pub use parse::MoveParseError;

use core::fmt;

use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Normal,
    EnPassant,
    ShortCastle,
    LongCastle,
    Promotion(PieceKind),
}

/// A move as a plain value. It carries a denormalized copy of the moving
/// piece's kind and color and holds no reference into any board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    piece: PieceKind,
    color: Color,
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl ChessMove {
    pub fn new(piece: PieceKind, color: Color, from: Square, to: Square, kind: MoveKind) -> Self {
        Self {
            piece,
            color,
            from,
            to,
            kind,
        }
    }

    pub fn normal(piece: PieceKind, color: Color, from: Square, to: Square) -> Self {
        Self::new(piece, color, from, to, MoveKind::Normal)
    }

    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn from_square(&self) -> Square {
        self.from
    }

    pub fn to_square(&self) -> Square {
        self.to
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn promotes_to(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::ShortCastle | MoveKind::LongCastle)
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> String {
        match self.promotes_to() {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{} from {} to {}", self.piece, self.from, self.to),
            MoveKind::EnPassant => write!(
                f,
                "{} from {} to {} en passant",
                self.piece, self.from, self.to
            ),
            MoveKind::ShortCastle => write!(f, "castles king side"),
            MoveKind::LongCastle => write!(f, "castles queen side"),
            MoveKind::Promotion(kind) => write!(
                f,
                "{} from {} to {} promoting to {}",
                self.piece, self.from, self.to, kind
            ),
        }
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.color, self.to_uci(), self)
    }
}
