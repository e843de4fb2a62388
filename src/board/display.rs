use super::square::Square;
use super::Board;
use std::fmt;

impl Board {
    /// Renders the board as ASCII art, rank 8 at the top.
    pub fn draw(&self) -> String {
        let mut output = String::new();

        for rank in (1..=8).rev() {
            output.push('|');
            for file in 1..=8 {
                let piece = Square::new(file, rank).and_then(|square| self.piece_at(square));
                output.push(piece.map_or(' ', |piece| piece.to_fen()));
                output.push('|');
            }
            output.push_str("\n|-+-+-+-+-+-+-+-|\n");
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.draw())
    }
}

/// Builds a board from an 8x8 grid of FEN letters, with `.` for empty squares.
/// The grid is read from white's perspective: the first row is rank 8.
/// Side to move is white and no castling rights are set.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::board::piece::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                let rank = 8 - (i / 8) as i8;
                let file = (i % 8) as i8 + 1;
                let square = $crate::board::square::Square::new(file, rank)
                    .expect("grid index is always on the board");
                board.put(square, kind, color).unwrap();
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::color::Color;
    use crate::board::piece::PieceKind;
    use crate::board::square::*;
    use crate::board::Board;

    #[test]
    fn test_draw_starting_position() {
        let drawing = Board::starting_position().draw();
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(16, lines.len());
        assert_eq!("|r|n|b|q|k|b|n|r|", lines[0]);
        assert_eq!("|-+-+-+-+-+-+-+-|", lines[1]);
        assert_eq!("| | | | | | | | |", lines[6]);
        assert_eq!("|R|N|B|Q|K|B|N|R|", lines[14]);
    }

    #[test]
    fn test_chess_position_macro() {
        let board = chess_position! {
            R.k.....
            ......R.
            ........
            ........
            ........
            ...K....
            ........
            ........
        };

        assert_eq!(4, board.piece_count());
        assert_eq!(
            Some((PieceKind::King, Color::Black)),
            board.piece_at(C8).map(|p| (p.kind, p.color))
        );
        assert_eq!(
            Some((PieceKind::Rook, Color::White)),
            board.piece_at(G7).map(|p| (p.kind, p.color))
        );
        assert_eq!(Some(D3), board.king_square(Color::White));
    }
}
