//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may produce inconsistent
//! state if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order.

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
pub struct Bitboard(u64);

/// Starting bitboard for Dark: (3, 4) and (4, 3).
pub const DARK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for Light: (3, 3) and (4, 4).
pub const LIGHT_START: Bitboard = Bitboard(0x0000001008000000);

// Masks clearing the leftmost and rightmost columns.
const NOT_LEFT_COLUMN: u64 = 0x7f7f7f7f7f7f7f7f;
const NOT_RIGHT_COLUMN: u64 = 0xfefefefefefefefe;
const FULL_MASK: u64 = 0xffffffffffffffff;

/// One of the eight compass directions, as a (row, column) step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

/// All eight directions a line of discs can run in. Rows grow downwards.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { d_row: -1, d_col: -1 },
    Direction { d_row: -1, d_col: 0 },
    Direction { d_row: -1, d_col: 1 },
    Direction { d_row: 0, d_col: -1 },
    Direction { d_row: 0, d_col: 1 },
    Direction { d_row: 1, d_col: -1 },
    Direction { d_row: 1, d_col: 0 },
    Direction { d_row: 1, d_col: 1 },
];

impl Direction {
    /// Move every bit one step in this direction.
    /// Bits that would leave the board (including wrapping around a row) are dropped.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        let offset = i32::from(self.d_row) * EDGE_LENGTH as i32 + i32::from(self.d_col);
        let shifted = if offset >= 0 {
            bitboard.0 >> offset
        } else {
            bitboard.0 << -offset
        };

        Bitboard(shifted & self.landing_mask())
    }

    /// Columns a bit may legally land in after one step.
    const fn landing_mask(self) -> u64 {
        match self.d_col {
            1 => NOT_LEFT_COLUMN,
            -1 => NOT_RIGHT_COLUMN,
            _ => FULL_MASK,
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let bits: Vec<bool> = self.into_iter().collect();
        utils::format_grid(f, |row, col| match bits[row * EDGE_LENGTH + col] {
            false => '.',
            true => '#',
        })
    }
}

impl Bitboard {
    /// A bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

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

    /// Return true if this bitboard shares any location with `other`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(self & other).is_empty()
    }
}

/// Score a board as: # my pieces - # opponent pieces.
/// Meaningless if both players have a piece at the same location.
#[inline]
pub fn score_absolute_difference(active: Bitboard, opponent: Bitboard) -> i8 {
    (active.0.count_ones() as i8) - (opponent.0.count_ones() as i8)
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
///
/// A move is legal when, along at least one direction, it is adjacent to a
/// contiguous run of opponent pieces that ends in one of the active player's pieces.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = Bitboard::EMPTY;

    for &direction in DIRECTIONS.iter() {
        // Smear our pieces through adjacent opponent pieces. A run is at most 6 long.
        let mut run = direction.shift(active) & opponent;
        for _ in 0..EDGE_LENGTH - 3 {
            run |= direction.shift(run) & opponent;
        }

        // Any empty square just past a run is bracketed from our side.
        moves |= direction.shift(run) & empties;
    }

    moves
}

/// Compute the opponent pieces captured by playing `move_mask`.
/// `move_mask` must be a one-hot bitboard on an empty location.
/// Each direction is scanned independently from the move location.
#[inline]
pub fn get_flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = Bitboard::EMPTY;

    for &direction in DIRECTIONS.iter() {
        let mut run = Bitboard::EMPTY;
        let mut cursor = direction.shift(move_mask);

        while cursor.intersects(opponent) {
            run |= cursor;
            cursor = direction.shift(cursor);
        }

        // The run only counts if it is closed off by one of our own pieces.
        if cursor.intersects(active) {
            flips |= run;
        }
    }

    flips
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating a legal move location. Inconsistent results if an invalid Othello board
/// or `move_mask` is provided.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flip_mask = get_flip_mask(active, opponent, move_mask);

    let new_active = active | flip_mask | move_mask;
    let new_opponent = opponent ^ flip_mask;

    (new_active, new_opponent)
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
        let bit = self.bitboard.intersects(bitmask);
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
