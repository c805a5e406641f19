//! `othello-core` is a bitboard Othello environment for engines, bindings and UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the pure, stateless operations on 64-bit occupancy masks:
//!    legal-move generation, capture resolution, terminal checks and disc counting.
//!  - [`Env`] sequences those operations into a playable game with turn order,
//!    an undo history and checked move application.
//!
//! By convention, the MSB of every mask is the upper-left cell (`A1`) and bits
//! proceed in row-major order, so cell `(x, y)` is bit `63 - (8 * y + x)`.

pub mod bitboard;
pub mod test_utils;

mod action;
mod config;
mod env;
mod error;
mod location;
mod player;
mod utils;

pub use action::*;
pub use config::*;
pub use env::*;
pub use error::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// A dense board: `grid[y][x]`, one entry per cell.
pub type Grid = [[i8; EDGE_LENGTH]; EDGE_LENGTH];
