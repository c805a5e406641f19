//! Commands typed at the interactive prompt.

use othello_core::{Move, ParseLocationError};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a disc or pass.
    Play(Move),
    Undo,
    /// List the legal moves.
    Moves,
    Reset,
    Quit,
}

impl FromStr for Command {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undo" | "u" => Ok(Command::Undo),
            "moves" | "m" => Ok(Command::Moves),
            "reset" => Ok(Command::Reset),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Play),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords() {
        assert_eq!("undo".parse(), Ok(Command::Undo));
        assert_eq!(" Moves\n".parse(), Ok(Command::Moves));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn parses_moves() {
        assert_eq!("pass".parse(), Ok(Command::Play(Move::Pass)));
        assert_eq!(
            "d3".parse(),
            Ok(Command::Play(Move::Piece("D3".parse().unwrap())))
        );
        assert_eq!("hello".parse::<Command>(), Err(ParseLocationError));
    }
}
