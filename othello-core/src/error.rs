//! Errors reported to callers of the game environment.
//!
//! Every error here is a usage error: the environment is left exactly as it
//! was before the failing call.

use crate::action::Action;
use derive_more::{Display, Error};

/// Why an action was refused by [`crate::Env::apply`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[display(fmt = "the game is over")]
    GameOver,
    #[display(fmt = "it is not this player's turn")]
    WrongPlayer,
    #[display(fmt = "the cell is occupied")]
    Occupied,
    #[display(fmt = "the placement captures nothing")]
    NoCaptures,
    #[display(fmt = "a placement is available")]
    PassWithMovesAvailable,
    #[display(fmt = "passes are automatic")]
    PassNotAllowed,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum OthelloError {
    #[display(fmt = "coordinate ({}, {}) is outside the 8x8 board", x, y)]
    InvalidCoordinate { x: usize, y: usize },
    #[display(fmt = "invalid move {}: {}", action, reason)]
    InvalidMove { action: Action, reason: Rejection },
    #[display(fmt = "no move to undo")]
    EmptyHistory,
}
