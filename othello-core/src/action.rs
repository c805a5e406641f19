//! Moves and actions: what a player does on their turn.

use crate::location::{Location, ParseLocationError};
use crate::player::Player;
use std::fmt;

/// A move in an Othello game: pass or place a piece at a location.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    Piece(Location),
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Piece(loc)
    }
}

impl Move {
    #[inline]
    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }

    /// The placed location, if this is not a pass.
    #[inline]
    pub fn location(self) -> Option<Location> {
        match self {
            Move::Piece(loc) => Some(loc),
            Move::Pass => None,
        }
    }
}

/// Convert this [`Move`] into string notation ("A4" / "PASS").
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(loc) => write!(f, "{}", loc),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

/// Build a [`Move`] from string notation ("A4"; "pass").
impl std::str::FromStr for Move {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        s.parse().map(Move::Piece)
    }
}

/// A move made by a specific player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Action {
    pub player: Player,
    pub mv: Move,
}

impl Action {
    pub fn new(player: Player, mv: Move) -> Self {
        Self { player, mv }
    }

    /// A placement at `(x, y)`. Fails if the cell is off the board.
    pub fn place(player: Player, x: usize, y: usize) -> Result<Self, crate::OthelloError> {
        Ok(Self::new(player, Move::Piece(Location::from_coords(x, y)?)))
    }

    pub fn pass(player: Player) -> Self {
        Self::new(player, Move::Pass)
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        self.mv.is_pass()
    }

    /// Column of the placed disc, or `None` for a pass.
    pub fn x(self) -> Option<usize> {
        self.mv.location().map(|loc| loc.to_coords().0)
    }

    /// Row of the placed disc, or `None` for a pass.
    pub fn y(self) -> Option<usize> {
        self.mv.location().map(|loc| loc.to_coords().1)
    }

    /// Canonical two-character symbol ("C4"), or `None` for a pass.
    pub fn symbol(self) -> Option<String> {
        self.mv.location().map(|loc| loc.to_string())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player, self.mv)
    }
}
