use std::str::FromStr;

use thiserror::Error;

use super::castle_rights::CastleRights;
use super::color::Color;
use super::error::BoardError;
use super::piece::PieceKind;
use super::square::Square;
use super::Board;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    #[error("Wrong number of fields: 6 expected, {field_count:?} given")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
    #[error("Invalid castling rights: {invalid_castling:?}")]
    InvalidCastlingRights { invalid_castling: char },
    #[error("Invalid en passant square: {value:?}")]
    InvalidEnPassant { value: String },
    #[error("Invalid halfmove clock: {invalid_clock:?}")]
    InvalidHalfmoveClock { invalid_clock: String },
    #[error("Invalid fullmove number: {invalid_number:?}")]
    InvalidFullmoveNumber { invalid_number: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a FEN (Forsyth–Edwards Notation) string into a Board.
/// FEN string contains 6 fields: piece placement, active color, castling rights,
/// en passant target square, halfmove clock, and fullmove number.
pub fn parse_fen(fen: &str) -> FenResult<Board> {
    let fields = split_fen_fields(fen)?;
    let mut board = Board::new();

    parse_piece_placement(&mut board, fields.position)?;
    parse_active_color(&mut board, fields.active_color)?;
    parse_castle_rights(&mut board, fields.castle_rights)?;
    parse_en_passant(&mut board, fields.en_passant)?;
    parse_halfmove_clock(&mut board, fields.halfmove_clock)?;
    parse_fullmove_number(&mut board, fields.fullmove_number)?;

    Ok(board)
}

/// Represents the six fields in a FEN string
struct FenFields<'a> {
    position: &'a str,
    active_color: &'a str,
    castle_rights: &'a str,
    en_passant: &'a str,
    halfmove_clock: &'a str,
    fullmove_number: &'a str,
}

fn split_fen_fields(fen: &str) -> FenResult<FenFields> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(FenParseError::WrongNumberOfFields {
            field_count: parts.len(),
        });
    }

    Ok(FenFields {
        position: parts[0],
        active_color: parts[1],
        castle_rights: parts[2],
        en_passant: parts[3],
        halfmove_clock: parts[4],
        fullmove_number: parts[5],
    })
}

fn parse_piece_placement(board: &mut Board, position: &str) -> FenResult<()> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (rank_idx, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, 8 - rank_idx as i8)?;
    }

    Ok(())
}

fn parse_rank(board: &mut Board, rank: &str, rank_number: i8) -> FenResult<()> {
    let mut file = 1i8;

    for c in rank.chars() {
        let advance = match c {
            '1'..='8' => (c as u8 - b'0') as i8,
            _ => 1,
        };
        let square = match Square::new(file, rank_number) {
            Some(square) if file + advance <= 9 => square,
            _ => {
                return Err(FenParseError::InvalidRankLength {
                    invalid_rank: rank.to_string(),
                })
            }
        };

        if !c.is_ascii_digit() {
            let (kind, color) = PieceKind::from_fen(c).ok_or(
                FenParseError::InvalidPieceCharacter {
                    invalid_character: c,
                },
            )?;
            board
                .put(square, kind, color)
                .map_err(|board_error| FenParseError::ErrorPlacingPiece { board_error })?;
        } else if advance != (c as u8 - b'0') as i8 {
            return Err(FenParseError::InvalidPieceCharacter {
                invalid_character: c,
            });
        }

        file += advance;
    }

    if file != 9 {
        return Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        });
    }

    Ok(())
}

fn parse_active_color(board: &mut Board, active_color: &str) -> FenResult<()> {
    match active_color {
        "w" => {
            board.set_turn(Color::White);
            Ok(())
        }
        "b" => {
            board.set_turn(Color::Black);
            Ok(())
        }
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

fn parse_castle_rights(board: &mut Board, castle_rights: &str) -> FenResult<()> {
    let mut rights = CastleRights::none();
    if castle_rights == "-" {
        board.set_castle_rights(rights);
        return Ok(());
    }

    for c in castle_rights.chars() {
        rights |= match c {
            'K' => CastleRights::white_kingside(),
            'Q' => CastleRights::white_queenside(),
            'k' => CastleRights::black_kingside(),
            'q' => CastleRights::black_queenside(),
            _ => {
                return Err(FenParseError::InvalidCastlingRights {
                    invalid_castling: c,
                })
            }
        };
    }
    board.set_castle_rights(rights);
    Ok(())
}

fn parse_en_passant(board: &mut Board, en_passant: &str) -> FenResult<()> {
    if en_passant == "-" {
        board.set_en_passant_target(None);
        return Ok(());
    }

    let square = match Square::from_algebraic(en_passant) {
        Ok(square) if en_passant.len() == 2 => square,
        _ => {
            return Err(FenParseError::InvalidEnPassant {
                value: en_passant.to_string(),
            })
        }
    };
    board.set_en_passant_target(Some(square));
    Ok(())
}

fn parse_halfmove_clock(board: &mut Board, halfmove_clock: &str) -> FenResult<()> {
    let halfmove =
        halfmove_clock
            .parse::<u32>()
            .map_err(|_| FenParseError::InvalidHalfmoveClock {
                invalid_clock: halfmove_clock.to_string(),
            })?;
    board.set_halfmove_clock(halfmove);
    Ok(())
}

fn parse_fullmove_number(board: &mut Board, fullmove_number: &str) -> FenResult<()> {
    let fullmove =
        fullmove_number
            .parse::<u32>()
            .map_err(|_| FenParseError::InvalidFullmoveNumber {
                invalid_number: fullmove_number.to_string(),
            })?;
    board.set_fullmove_number(fullmove);
    Ok(())
}

impl Board {
    pub fn from_fen(fen: &str) -> FenResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.to_placement_key(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }

    /// The first four FEN fields: placement, side to move, castling rights and
    /// en passant target. Positions that differ only in their move clocks share
    /// this key.
    pub fn to_placement_key(&self) -> String {
        let mut fen_rows = vec![];
        for rank in (1..=8).rev() {
            let mut row = String::new();
            let mut empty_square_count = 0;
            for file in 1..=8 {
                let piece = Square::new(file, rank).and_then(|square| self.piece_at(square));
                match piece {
                    Some(piece) => {
                        if empty_square_count > 0 {
                            row.push_str(&empty_square_count.to_string());
                        }
                        empty_square_count = 0;
                        row.push(piece.to_fen());
                    }
                    None => empty_square_count += 1,
                }
            }
            if empty_square_count > 0 {
                row.push_str(&empty_square_count.to_string());
            }
            fen_rows.push(row);
        }

        let fen_turn = match self.turn() {
            Color::Black => 'b',
            Color::White => 'w',
        };

        let fen_en_passant = match self.en_passant_target() {
            Some(square) => square.to_algebraic(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {}",
            fen_rows.join("/"),
            fen_turn,
            self.castle_rights().to_fen(),
            fen_en_passant
        )
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}
