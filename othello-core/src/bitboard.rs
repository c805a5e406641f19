//! Low-level bitboard operations.
//!
//! Every function here is pure: it maps a pair of occupancy masks to a new
//! mask or pair of masks, with no state and no validation beyond what is
//! documented. Most take an "own" and an "opponent" mask, meaning the side
//! currently computing a move and the other side.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order.

use crate::location::{Location, ParseLocationError};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub(crate) u64);

/// Starting bitboard for Black: E4 and D5.
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// A bitboard with no cells set.
pub const EMPTY: Bitboard = Bitboard(0);

/// A bitboard with every cell set.
pub const FULL: Bitboard = Bitboard(u64::MAX);

// Watch masks for legal-move generation: the opponent discs a run may pass
// through along each axis. Edge files and ranks are excluded so a run can
// never wrap onto the next row.
const HORIZONTAL_WATCH: u64 = 0x7e7e_7e7e_7e7e_7e7e;
const VERTICAL_WATCH: u64 = 0x00ff_ffff_ffff_ff00;
const DIAGONAL_WATCH: u64 = 0x007e_7e7e_7e7e_7e00;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl From<Location> for Bitboard {
    fn from(loc: Location) -> Self {
        loc.to_bitboard()
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every cell set in `self` is also set in `other`.
    #[inline]
    pub fn is_subset(self, other: Bitboard) -> bool {
        self.0 & !other.0 == 0
    }

    /// Expand the bits into a dense grid of 0/1 values, indexed `grid[y][x]`.
    pub fn unpack(self) -> [[u8; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut grid = [[0u8; EDGE_LENGTH]; EDGE_LENGTH];
        for (index, bit) in self.into_iter().enumerate() {
            grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = bit as u8;
        }
        grid
    }
}

/// One of the eight directions a run of discs can extend in.
/// North is towards rank 1, east is towards file H.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The opposite direction.
    #[cfg(test)]
    fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Move every cell one step in this direction, with no edge handling.
    /// Cells on the east or west edge may wrap onto the neighbouring row.
    #[inline]
    pub fn translate(self, bitboard: Bitboard) -> Bitboard {
        let bits = bitboard.0;
        Bitboard(match self {
            Direction::North => bits << 8,
            Direction::NorthEast => bits << 7,
            Direction::East => bits >> 1,
            Direction::SouthEast => bits >> 9,
            Direction::South => bits >> 8,
            Direction::SouthWest => bits >> 7,
            Direction::West => bits << 1,
            Direction::NorthWest => bits << 9,
        })
    }

    /// Cells a one-step translation may land on without having wrapped.
    #[inline]
    pub fn edge_mask(self) -> Bitboard {
        Bitboard(match self {
            Direction::North => 0xffff_ffff_ffff_ff00,
            Direction::NorthEast => 0x7f7f_7f7f_7f7f_7f00,
            Direction::East => 0x7f7f_7f7f_7f7f_7f7f,
            Direction::SouthEast => 0x007f_7f7f_7f7f_7f7f,
            Direction::South => 0x00ff_ffff_ffff_ffff,
            Direction::SouthWest => 0x00fe_fefe_fefe_fefe,
            Direction::West => 0xfefe_fefe_fefe_fefe,
            Direction::NorthWest => 0xfefe_fefe_fefe_fe00,
        })
    }

    /// The opponent cells a capturing run along this direction's axis may cross.
    #[inline]
    pub fn watch_mask(self) -> Bitboard {
        Bitboard(match self {
            Direction::East | Direction::West => HORIZONTAL_WATCH,
            Direction::North | Direction::South => VERTICAL_WATCH,
            _ => DIAGONAL_WATCH,
        })
    }

    /// Move every cell one step in this direction, dropping cells that leave the board.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        self.translate(bitboard) & self.edge_mask()
    }
}

/// Build the one-hot bitboard for a symbol such as `"C4"`.
pub fn from_symbol(symbol: &str) -> Result<Bitboard, ParseLocationError> {
    symbol.parse::<Location>().map(Bitboard::from)
}

/// Compute a mask of the legal moves for the `own` player, given masks of
/// `own`'s pieces and the opponent's pieces. The masks must be disjoint.
///
/// For each direction, `own` is smeared across contiguous opponent discs
/// (never crossing an edge, thanks to the watch mask), then shifted once more
/// onto the empty cell that closes the run.
pub fn legal_moves(own: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(own | opponent);

    Direction::ALL.iter().fold(EMPTY, |legal, &dir| {
        let watch = opponent & dir.watch_mask();

        // A run is at most 6 discs long: 8 cells minus the two endpoints.
        let mut run = watch & dir.translate(own);
        for _ in 1..EDGE_LENGTH - 2 {
            run |= watch & dir.translate(run);
        }

        legal | (empties & dir.translate(run))
    })
}

/// Compute the opponent discs reversed by placing a disc at `put`.
/// `put` must be one-hot; the result is a subset of `opponent`.
pub fn captures(put: Bitboard, own: Bitboard, opponent: Bitboard) -> Bitboard {
    Direction::ALL.iter().fold(EMPTY, |reversal, &dir| {
        let mut run = EMPTY;
        let mut cursor = dir.shift(put);
        while !(cursor & opponent).is_empty() {
            run |= cursor;
            cursor = dir.shift(cursor);
        }

        // Only a run closed off by one of our own discs is captured.
        if (cursor & own).is_empty() {
            reversal
        } else {
            reversal | run
        }
    })
}

/// Compute updated `(own, opponent)` bitboards after `own` places a disc at `put`.
/// `put` must be one-hot and empty. No legality check is made: a placement
/// that captures nothing simply adds the disc.
#[inline]
pub fn resolve_captures(put: Bitboard, own: Bitboard, opponent: Bitboard) -> (Bitboard, Bitboard) {
    let reversal = captures(put, own, opponent);
    (own ^ (put | reversal), opponent ^ reversal)
}

/// Return true if every cell of `put` is a legal move for `own`.
#[inline]
pub fn can_place(put: Bitboard, own: Bitboard, opponent: Bitboard) -> bool {
    put.is_subset(legal_moves(own, opponent))
}

/// Return true if `own` has no legal move but the opponent does.
#[inline]
pub fn must_pass(own: Bitboard, opponent: Bitboard) -> bool {
    legal_moves(own, opponent).is_empty() && !legal_moves(opponent, own).is_empty()
}

/// Return true if neither side has a legal move.
#[inline]
pub fn is_game_over(own: Bitboard, opponent: Bitboard) -> bool {
    legal_moves(own, opponent).is_empty() && legal_moves(opponent, own).is_empty()
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
