use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A square on the board, addressed by file (a..h as 1..8) and rank (1..8).
/// A `Square` value is always on the board; stepping off the edge yields `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("a square should have at least two characters, got {input:?}")]
    TooShort { input: String },
    #[error("file coordinate is invalid: {file:?}")]
    InvalidFile { file: char },
    #[error("rank coordinate is invalid: {rank:?}")]
    InvalidRank { rank: char },
}

pub fn in_bounds(file: i8, rank: i8) -> bool {
    (1..=8).contains(&file) && (1..=8).contains(&rank)
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if in_bounds(file, rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    const fn at(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn file(self) -> i8 {
        self.file
    }

    pub fn rank(self) -> i8 {
        self.rank
    }

    /// The square reached by stepping `(file_delta, rank_delta)`, if still on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::new(self.file + file_delta, self.rank + rank_delta)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Square::at(file, rank)))
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, SquareParseError> {
        let mut chars = algebraic.chars();
        let (file_char, rank_char) = match (chars.next(), chars.next()) {
            (Some(file), Some(rank)) => (file, rank),
            _ => {
                return Err(SquareParseError::TooShort {
                    input: algebraic.to_string(),
                })
            }
        };

        let file = match file_char.to_ascii_lowercase() {
            f @ 'a'..='h' => (f as u8 - b'a') as i8 + 1,
            _ => return Err(SquareParseError::InvalidFile { file: file_char }),
        };
        let rank = match rank_char {
            r @ '1'..='8' => (r as u8 - b'1') as i8 + 1,
            _ => return Err(SquareParseError::InvalidRank { rank: rank_char }),
        };

        Ok(Self::at(file, rank))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + (self.file - 1) as u8) as char;
        let rank = (b'1' + (self.rank - 1) as u8) as char;
        format!("{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

pub const A1: Square = Square::at(1, 1);
pub const B1: Square = Square::at(2, 1);
pub const C1: Square = Square::at(3, 1);
pub const D1: Square = Square::at(4, 1);
pub const E1: Square = Square::at(5, 1);
pub const F1: Square = Square::at(6, 1);
pub const G1: Square = Square::at(7, 1);
pub const H1: Square = Square::at(8, 1);
pub const A2: Square = Square::at(1, 2);
pub const B2: Square = Square::at(2, 2);
pub const C2: Square = Square::at(3, 2);
pub const D2: Square = Square::at(4, 2);
pub const E2: Square = Square::at(5, 2);
pub const F2: Square = Square::at(6, 2);
pub const G2: Square = Square::at(7, 2);
pub const H2: Square = Square::at(8, 2);
pub const A3: Square = Square::at(1, 3);
pub const B3: Square = Square::at(2, 3);
pub const C3: Square = Square::at(3, 3);
pub const D3: Square = Square::at(4, 3);
pub const E3: Square = Square::at(5, 3);
pub const F3: Square = Square::at(6, 3);
pub const G3: Square = Square::at(7, 3);
pub const H3: Square = Square::at(8, 3);
pub const A4: Square = Square::at(1, 4);
pub const B4: Square = Square::at(2, 4);
pub const C4: Square = Square::at(3, 4);
pub const D4: Square = Square::at(4, 4);
pub const E4: Square = Square::at(5, 4);
pub const F4: Square = Square::at(6, 4);
pub const G4: Square = Square::at(7, 4);
pub const H4: Square = Square::at(8, 4);
pub const A5: Square = Square::at(1, 5);
pub const B5: Square = Square::at(2, 5);
pub const C5: Square = Square::at(3, 5);
pub const D5: Square = Square::at(4, 5);
pub const E5: Square = Square::at(5, 5);
pub const F5: Square = Square::at(6, 5);
pub const G5: Square = Square::at(7, 5);
pub const H5: Square = Square::at(8, 5);
pub const A6: Square = Square::at(1, 6);
pub const B6: Square = Square::at(2, 6);
pub const C6: Square = Square::at(3, 6);
pub const D6: Square = Square::at(4, 6);
pub const E6: Square = Square::at(5, 6);
pub const F6: Square = Square::at(6, 6);
pub const G6: Square = Square::at(7, 6);
pub const H6: Square = Square::at(8, 6);
pub const A7: Square = Square::at(1, 7);
pub const B7: Square = Square::at(2, 7);
pub const C7: Square = Square::at(3, 7);
pub const D7: Square = Square::at(4, 7);
pub const E7: Square = Square::at(5, 7);
pub const F7: Square = Square::at(6, 7);
pub const G7: Square = Square::at(7, 7);
pub const H7: Square = Square::at(8, 7);
pub const A8: Square = Square::at(1, 8);
pub const B8: Square = Square::at(2, 8);
pub const C8: Square = Square::at(3, 8);
pub const D8: Square = Square::at(4, 8);
pub const E8: Square = Square::at(5, 8);
pub const F8: Square = Square::at(6, 8);
pub const G8: Square = Square::at(7, 8);
pub const H8: Square = Square::at(8, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_algebraic() {
        assert_eq!("b2", B2.to_algebraic());
        assert_eq!("g3", G3.to_algebraic());
        assert_eq!("a8", A8.to_algebraic());
        assert_eq!("h1", H1.to_algebraic());
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(A2, Square::from_algebraic("a2").unwrap());
        assert_eq!(H3, Square::from_algebraic("h3").unwrap());
        assert_eq!(E5, Square::from_algebraic("E5").unwrap());
    }

    #[test]
    fn test_from_algebraic_rejects_malformed_input() {
        assert_eq!(
            Err(SquareParseError::InvalidFile { file: 'i' }),
            Square::from_algebraic("i3")
        );
        assert_eq!(
            Err(SquareParseError::InvalidRank { rank: '9' }),
            Square::from_algebraic("a9")
        );
        assert!(matches!(
            Square::from_algebraic("a"),
            Err(SquareParseError::TooShort { .. })
        ));
    }

    #[test]
    fn test_algebraic_round_trip_for_every_square() {
        for square in Square::all() {
            assert_eq!(square, square.to_algebraic().parse().unwrap());
        }
        assert_eq!(64, Square::all().count());
    }

    #[test]
    fn test_off_board_offsets_are_absent() {
        assert_eq!(None, A1.offset(-1, 0));
        assert_eq!(None, H8.offset(0, 1));
        assert_eq!(None, Square::new(0, 4));
        assert_eq!(None, Square::new(9, 4));
        assert_eq!(Some(B3), A1.offset(1, 2));
        assert!(in_bounds(8, 8));
        assert!(!in_bounds(8, 9));
    }
}
