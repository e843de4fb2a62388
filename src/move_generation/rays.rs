use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::board::Board;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Direction {
    East,
    North,
    NorthEast,
    NorthWest,
    South,
    SouthEast,
    SouthWest,
    West,
}

pub const ROOK_DIRS: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::South,
    Direction::West,
];

pub const BISHOP_DIRS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

pub const ALL_DIRS: [Direction; 8] = [
    Direction::East,
    Direction::North,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::South,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Direction {
    /// (file, rank) step of one square in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::South => (0, -1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn step(self, square: Square) -> Option<Square> {
        let (file_delta, rank_delta) = self.delta();
        square.offset(file_delta, rank_delta)
    }
}

/// Squares a slider of `color` on `from` can reach in `direction`.
///
/// The ray stops short of pieces of the same color and of any king. An enemy
/// piece other than the king ends the ray and is included as a capture.
pub fn cast_ray(board: &Board, from: Square, color: Color, direction: Direction) -> Vec<Square> {
    let mut squares = Vec::new();
    let mut current = from;

    while let Some(next) = direction.step(current) {
        match board.piece_at(next) {
            None => squares.push(next),
            Some(piece) if piece.color == color || piece.kind == PieceKind::King => break,
            Some(_) => {
                squares.push(next);
                break;
            }
        }
        current = next;
    }

    squares
}

/// The nearest piece in `direction` from `from`, if any.
pub fn first_blocker(board: &Board, from: Square, direction: Direction) -> Option<&Piece> {
    let mut current = from;

    while let Some(next) = direction.step(current) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::chess_position;

    #[test]
    fn test_cast_ray_stops_at_own_piece_and_captures_enemy() {
        let board = chess_position! {
            ........
            ........
            ...p....
            ........
            ...R.N..
            ........
            ........
            ........
        };

        assert_eq!(
            vec![D5, D6],
            cast_ray(&board, D4, Color::White, Direction::North)
        );
        assert_eq!(vec![E4], cast_ray(&board, D4, Color::White, Direction::East));
        assert_eq!(
            vec![C4, B4, A4],
            cast_ray(&board, D4, Color::White, Direction::West)
        );
    }

    #[test]
    fn test_cast_ray_never_includes_a_king() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ...B....
            ........
            .k......
            ........
        };

        assert_eq!(
            vec![C3],
            cast_ray(&board, D4, Color::White, Direction::SouthWest)
        );
    }

    #[test]
    fn test_first_blocker() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ...B....
            ........
            .k......
            ........
        };

        let blocker = first_blocker(&board, D4, Direction::SouthWest);
        assert_eq!(Some(B2), blocker.map(|piece| piece.square));
        assert!(first_blocker(&board, D4, Direction::North).is_none());
    }
}
