use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::square::Square;
use crate::board::Board;

fn pawns_on_file(board: &Board, file: i8, color: Option<Color>) -> usize {
    board
        .pieces()
        .filter(|piece| piece.kind == PieceKind::Pawn && piece.square.file() == file)
        .filter(|piece| color.map_or(true, |color| piece.color == color))
        .count()
}

/// No pawn of either color stands on `file`.
pub fn is_file_open(board: &Board, file: i8) -> bool {
    pawns_on_file(board, file, None) == 0
}

/// `color` has no pawn on `file` but its opponent does.
pub fn is_file_semi_open(board: &Board, file: i8, color: Color) -> bool {
    pawns_on_file(board, file, Some(color)) == 0 && pawns_on_file(board, file, None) > 0
}

pub fn files_with_doubled_pawns(board: &Board, color: Color) -> usize {
    (1..=8)
        .filter(|&file| pawns_on_file(board, file, Some(color)) > 1)
        .count()
}

/// Length of the longest run of `color`'s pawns stepping diagonally forward
/// from the pawn on `square`, not counting that pawn.
pub fn pawn_chain_length(board: &Board, square: Square, color: Color) -> usize {
    let forward = color.pawn_direction();

    [-1, 1]
        .iter()
        .filter_map(|&df| square.offset(df, forward))
        .filter(|&next| {
            board
                .piece_at(next)
                .map_or(false, |piece| piece.kind == PieceKind::Pawn && piece.color == color)
        })
        .map(|next| 1 + pawn_chain_length(board, next, color))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::chess_position;

    #[test]
    fn test_pawn_chain_length() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ...P....
            ..P.p...
            .P......
            ........
        };

        assert_eq!(2, pawn_chain_length(&board, B2, Color::White));
        assert_eq!(1, pawn_chain_length(&board, C3, Color::White));
        assert_eq!(0, pawn_chain_length(&board, D4, Color::White));
    }

    #[test]
    fn test_open_and_semi_open_files() {
        let board = chess_position! {
            ........
            ...p....
            ........
            ........
            ........
            ........
            P.......
            ........
        };

        assert!(is_file_open(&board, 5));
        assert!(!is_file_open(&board, 4));
        assert!(is_file_semi_open(&board, 4, Color::White));
        assert!(!is_file_semi_open(&board, 4, Color::Black));
        assert!(!is_file_semi_open(&board, 5, Color::White));
    }

    #[test]
    fn test_files_with_doubled_pawns() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            P...p...
            P...p...
            P...p..P
            .......P
        };

        assert_eq!(2, files_with_doubled_pawns(&board, Color::White));
        assert_eq!(1, files_with_doubled_pawns(&board, Color::Black));
    }
}
