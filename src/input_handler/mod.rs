//! Player input parsing for the interactive loop.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])([a-h][1-8])([qrbnQRBN]?)$").expect("MOVE_RE regex should be valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("input closed")]
    UserExit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Coordinate move text such as `e2e4` or `a7a8q`.
    Move { text: String },
    /// Let the engine pick and play a move.
    UseEngine,
    ListMoves,
    ShowFen,
    Quit,
}

impl FromStr for PlayerInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "go" | "best" => return Ok(PlayerInput::UseEngine),
            "moves" => return Ok(PlayerInput::ListMoves),
            "fen" => return Ok(PlayerInput::ShowFen),
            "q" | "quit" | "exit" => return Ok(PlayerInput::Quit),
            _ => (),
        }

        match MOVE_RE.captures(trimmed) {
            Some(caps) => Ok(PlayerInput::Move {
                text: format!("{}{}{}", &caps[1], &caps[2], caps[3].to_lowercase()),
            }),
            None => Err(InputError::InvalidInput {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// Reads one line from `reader`. End of input is reported as `UserExit`.
pub fn read_player_input<R: BufRead>(reader: &mut R) -> Result<PlayerInput, InputError> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(InputError::UserExit),
        Ok(_) => line.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinate_moves() {
        assert_eq!(
            Ok(PlayerInput::Move {
                text: "e2e4".to_string()
            }),
            " e2e4\n".parse()
        );
        assert_eq!(
            Ok(PlayerInput::Move {
                text: "a7a8q".to_string()
            }),
            "a7a8Q".parse()
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Ok(PlayerInput::Quit), "quit".parse());
        assert_eq!(Ok(PlayerInput::Quit), "Q".parse());
        assert_eq!(Ok(PlayerInput::UseEngine), "go".parse());
        assert_eq!(Ok(PlayerInput::ListMoves), "moves".parse());
        assert_eq!(Ok(PlayerInput::ShowFen), "fen".parse());
    }

    #[test]
    fn test_reject_garbage() {
        for input in ["e2", "e9e4", "i2i4", "e2e4k", "hello"] {
            assert_eq!(
                Err(InputError::InvalidInput {
                    input: input.to_string()
                }),
                input.parse::<PlayerInput>(),
                "{} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_read_player_input_until_eof() {
        let mut reader = Cursor::new("e2e4\nquit\n");
        assert_eq!(
            Ok(PlayerInput::Move {
                text: "e2e4".to_string()
            }),
            read_player_input(&mut reader)
        );
        assert_eq!(Ok(PlayerInput::Quit), read_player_input(&mut reader));
        assert_eq!(Err(InputError::UserExit), read_player_input(&mut reader));
    }
}
