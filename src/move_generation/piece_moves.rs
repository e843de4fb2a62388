use crate::board::castle_rights::{CastleRights, CastleSide};
use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind, PROMOTABLE_KINDS};
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::{ChessMove, MoveKind};

use super::attacks::{is_king_in_check, is_square_attacked};
use super::rays::{cast_ray, Direction, ALL_DIRS, BISHOP_DIRS, KNIGHT_OFFSETS, ROOK_DIRS};

pub fn generate_piece_moves(moves: &mut Vec<ChessMove>, board: &Board, piece: &Piece) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(moves, board, piece),
        PieceKind::Knight => generate_knight_moves(moves, board, piece),
        PieceKind::Bishop => generate_sliding_moves(moves, board, piece, &BISHOP_DIRS),
        PieceKind::Rook => generate_sliding_moves(moves, board, piece, &ROOK_DIRS),
        PieceKind::Queen => generate_sliding_moves(moves, board, piece, &ALL_DIRS),
        PieceKind::King => {
            generate_king_moves(moves, board, piece);
            generate_castle_moves(moves, board, piece);
        }
    }
}

fn generate_sliding_moves(
    moves: &mut Vec<ChessMove>,
    board: &Board,
    piece: &Piece,
    directions: &[Direction],
) {
    for &direction in directions {
        for target in cast_ray(board, piece.square, piece.color, direction) {
            moves.push(ChessMove::normal(piece.kind, piece.color, piece.square, target));
        }
    }
}

fn is_free_for(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .map_or(true, |occupant| occupant.color != color)
}

fn generate_knight_moves(moves: &mut Vec<ChessMove>, board: &Board, piece: &Piece) {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(df, dr)| piece.square.offset(df, dr))
        .filter(|&target| is_free_for(board, target, piece.color))
        .for_each(|target| {
            moves.push(ChessMove::normal(piece.kind, piece.color, piece.square, target))
        });
}

/// Adjacent squares that hold no friendly piece and are not attacked. Leaving
/// a slider's line while still standing in it is caught by the legality filter.
fn generate_king_moves(moves: &mut Vec<ChessMove>, board: &Board, piece: &Piece) {
    ALL_DIRS
        .iter()
        .filter_map(|direction| direction.step(piece.square))
        .filter(|&target| is_free_for(board, target, piece.color))
        .filter(|&target| !is_square_attacked(board, target, piece.color))
        .for_each(|target| {
            moves.push(ChessMove::normal(piece.kind, piece.color, piece.square, target))
        });
}

struct CastleLane {
    side: CastleSide,
    kind: MoveKind,
    rook_file: i8,
    king_target_file: i8,
    // squares the king passes through, destination included
    king_path: &'static [i8],
    // squares between king and rook
    empty_files: &'static [i8],
}

const CASTLE_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::Kingside,
        kind: MoveKind::ShortCastle,
        rook_file: 8,
        king_target_file: 7,
        king_path: &[6, 7],
        empty_files: &[6, 7],
    },
    CastleLane {
        side: CastleSide::Queenside,
        kind: MoveKind::LongCastle,
        rook_file: 1,
        king_target_file: 3,
        king_path: &[4, 3],
        empty_files: &[2, 3, 4],
    },
];

const KING_HOME_FILE: i8 = 5;

fn generate_castle_moves(moves: &mut Vec<ChessMove>, board: &Board, king: &Piece) {
    let color = king.color;
    let rank = color.back_rank();

    if king.square.rank() != rank || king.square.file() != KING_HOME_FILE {
        return;
    }
    if board.castle_rights().is_empty() || is_king_in_check(board, color) {
        return;
    }

    for lane in CASTLE_LANES.iter() {
        if !board
            .castle_rights()
            .contains(CastleRights::for_side(color, lane.side))
        {
            continue;
        }

        let rook_in_place = Square::new(lane.rook_file, rank)
            .and_then(|square| board.piece_at(square))
            .map_or(false, |rook| rook.kind == PieceKind::Rook && rook.color == color);
        if !rook_in_place {
            continue;
        }

        let lane_is_empty = lane
            .empty_files
            .iter()
            .filter_map(|&file| Square::new(file, rank))
            .all(|square| !board.is_occupied(square));
        if !lane_is_empty {
            continue;
        }

        let path_is_safe = lane
            .king_path
            .iter()
            .filter_map(|&file| Square::new(file, rank))
            .all(|square| !is_square_attacked(board, square, color));
        if !path_is_safe {
            continue;
        }

        if let Some(target) = Square::new(lane.king_target_file, rank) {
            moves.push(ChessMove::new(
                PieceKind::King,
                color,
                king.square,
                target,
                lane.kind,
            ));
        }
    }
}

fn generate_pawn_moves(moves: &mut Vec<ChessMove>, board: &Board, pawn: &Piece) {
    let color = pawn.color;
    let forward = color.pawn_direction();

    if let Some(one_step) = pawn.square.offset(0, forward) {
        if !board.is_occupied(one_step) {
            push_pawn_move(moves, pawn, one_step);

            if pawn.square.rank() == color.pawn_start_rank() {
                if let Some(two_step) = pawn.square.offset(0, 2 * forward) {
                    if !board.is_occupied(two_step) {
                        push_pawn_move(moves, pawn, two_step);
                    }
                }
            }
        }
    }

    for &df in [-1, 1].iter() {
        let target = match pawn.square.offset(df, forward) {
            Some(target) => target,
            None => continue,
        };

        match board.piece_at(target) {
            Some(occupant) if occupant.color != color => push_pawn_move(moves, pawn, target),
            Some(_) => (),
            None if board.en_passant_target() == Some(target) => {
                let passed_pawn = Square::new(target.file(), pawn.square.rank())
                    .and_then(|square| board.piece_at(square));
                let capturable = passed_pawn.map_or(false, |passed| {
                    passed.kind == PieceKind::Pawn && passed.color != color
                });
                if capturable {
                    moves.push(ChessMove::new(
                        PieceKind::Pawn,
                        color,
                        pawn.square,
                        target,
                        MoveKind::EnPassant,
                    ));
                }
            }
            None => (),
        }
    }
}

/// Expands a pawn move onto the last rank into one move per promotion piece.
fn push_pawn_move(moves: &mut Vec<ChessMove>, pawn: &Piece, target: Square) {
    if target.rank() != pawn.color.promotion_rank() {
        moves.push(ChessMove::normal(PieceKind::Pawn, pawn.color, pawn.square, target));
        return;
    }

    for &promotion in PROMOTABLE_KINDS.iter() {
        moves.push(ChessMove::new(
            PieceKind::Pawn,
            pawn.color,
            pawn.square,
            target,
            MoveKind::Promotion(promotion),
        ));
    }
}
