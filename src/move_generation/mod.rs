pub mod attacks;
pub mod piece_moves;
pub mod rays;


use log::trace;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;

pub use attacks::{attack_count, is_king_in_check, is_square_attacked};

/// Every move `color` could make following piece movement rules, including
/// ones that leave its own king attacked.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::new();

    for piece in board.pieces_of(color) {
        piece_moves::generate_piece_moves(&mut moves, board, piece);
    }

    moves
}

/// Plays `chess_move` on a clone of `board` and accepts it only if the
/// mover's king is not attacked afterwards. The side to move is ignored.
pub fn is_legal(board: &Board, chess_move: &ChessMove) -> bool {
    let mut probe = board.clone();
    match chess_move.apply(&mut probe) {
        Ok(_) => !is_king_in_check(&probe, chess_move.color()),
        Err(error) => {
            trace!("{:?} cannot be applied: {}", chess_move, error);
            false
        }
    }
}

pub fn legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|chess_move| is_legal(board, chess_move))
        .collect()
}

pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    generate_pseudo_legal_moves(board, color)
        .iter()
        .any(|chess_move| is_legal(board, chess_move))
}

/// The side to move is in check and has no legal move.
pub fn is_checkmate(board: &Board) -> bool {
    let color = board.turn();
    is_king_in_check(board, color) && !has_legal_moves(board, color)
}

/// The side to move is not in check and has no legal move.
pub fn is_stalemate(board: &Board) -> bool {
    let color = board.turn();
    !is_king_in_check(board, color) && !has_legal_moves(board, color)
}
