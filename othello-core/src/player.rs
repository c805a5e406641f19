//! The two sides of an Othello game.

use derive_more::{Display, Error};
use std::ops::{Neg, Not};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Player {
    #[display(fmt = "BLACK")]
    Black,
    #[display(fmt = "WHITE")]
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// The signed unit for this side: `+1` for Black, `-1` for White.
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Gets the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.opponent()
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid player")]
pub struct ParsePlayerError;

/// Parse a player from its name ("black", "WHITE") or signed unit ("1", "-1").
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "1" => Ok(Player::Black),
            "white" | "w" | "-1" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}
