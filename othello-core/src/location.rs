//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::error::OthelloError;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

const FILES: &str = "ABCDEFGH";
const RANKS: &str = "12345678";

/// A location on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration is in ascending row-major order: `A1, B1, ..., H1, A2, ..., H8`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` does not have exactly one location set.
    #[inline]
    pub(crate) fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from column (`x`, file `A..H`) and row (`y`, rank `1..8`) coordinates.
    pub fn from_coords(x: usize, y: usize) -> Result<Self, OthelloError> {
        if x >= EDGE_LENGTH || y >= EDGE_LENGTH {
            return Err(OthelloError::InvalidCoordinate { x, y });
        }
        Ok(Self::from_index(y * EDGE_LENGTH + x))
    }

    /// Convert from a row-major cell index: 0 for A1, 63 for H8.
    /// `index` must be below 64.
    #[inline]
    fn from_index(index: usize) -> Self {
        Self(Bitboard::from(1u64 << (63 - index)))
    }

    /// Convert into a row-major cell index: 0 for A1, 63 for H8.
    #[inline]
    pub fn to_index(self) -> usize {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as usize
    }

    /// Get the `(x, y)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index % EDGE_LENGTH, index / EDGE_LENGTH)
    }

    /// The one-hot bitboard for this location.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        self.0
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_coords();
        let file = FILES.chars().nth(x).ok_or(fmt::Error)?;
        let rank = RANKS.chars().nth(y).ok_or(fmt::Error)?;
        f.write_char(file)?;
        f.write_char(rank)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
/// The file letter may be lower case.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let x = FILES.find(file).ok_or(ParseLocationError)?;
        let y = RANKS
            .find(chars.next().ok_or(ParseLocationError)?)
            .ok_or(ParseLocationError)?;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(x, y).map_err(|_| ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        !(loc.0 & self.0).is_empty()
    }

    /// Returns whether the list has no locations left.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move = Bitboard::from(1u64 << (63 - bitboard.leading_zeros()));
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
