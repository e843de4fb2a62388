use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::ChessMove;

use super::rays::{first_blocker, Direction, ALL_DIRS, BISHOP_DIRS, KNIGHT_OFFSETS, ROOK_DIRS};

/// Whether any piece of the side opposing `defending` attacks `square`,
/// regardless of whose turn it is.
pub fn is_square_attacked(board: &Board, square: Square, defending: Color) -> bool {
    let attacker = defending.opposite();

    let slides_into = |directions: &[Direction], kinds: [PieceKind; 2]| {
        directions.iter().any(|&direction| {
            first_blocker(board, square, direction)
                .map_or(false, |piece| piece.color == attacker && kinds.contains(&piece.kind))
        })
    };

    if slides_into(&BISHOP_DIRS[..], [PieceKind::Bishop, PieceKind::Queen])
        || slides_into(&ROOK_DIRS[..], [PieceKind::Rook, PieceKind::Queen])
    {
        return true;
    }

    let holds_attacker = |target: Option<Square>, kind: PieceKind| {
        target
            .and_then(|target| board.piece_at(target))
            .map_or(false, |piece| piece.color == attacker && piece.kind == kind)
    };

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds_attacker(square.offset(df, dr), PieceKind::Knight))
    {
        return true;
    }

    // attacking pawns sit one step "ahead" of the square from the defender's view
    let pawn_rank_delta = defending.pawn_direction();
    if [-1, 1]
        .iter()
        .any(|&df| holds_attacker(square.offset(df, pawn_rank_delta), PieceKind::Pawn))
    {
        return true;
    }

    ALL_DIRS
        .iter()
        .any(|&direction| holds_attacker(direction.step(square), PieceKind::King))
}

/// Reports `false` when `color` has no king on the board.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .map_or(false, |square| is_square_attacked(board, square, color))
}

/// Counts how many ways `color` covers `square`: each legal non-pawn move
/// landing on it, plus each pawn whose capture diagonal reaches it.
pub fn attack_count(board: &Board, square: Square, color: Color) -> usize {
    attack_count_among(&super::legal_moves(board, color), board, square, color)
}

/// `attack_count` against an already generated legal move list of `color`.
pub fn attack_count_among(
    legal_moves: &[ChessMove],
    board: &Board,
    square: Square,
    color: Color,
) -> usize {
    let piece_attacks = legal_moves
        .iter()
        .filter(|chess_move| {
            chess_move.piece() != PieceKind::Pawn && chess_move.to_square() == square
        })
        .count();

    let pawn_rank_delta = -color.pawn_direction();
    let pawn_attacks = [-1, 1]
        .iter()
        .filter_map(|&df| square.offset(df, pawn_rank_delta))
        .filter_map(|origin| board.piece_at(origin))
        .filter(|piece| piece.color == color && piece.kind == PieceKind::Pawn)
        .count();

    piece_attacks + pawn_attacks
}
