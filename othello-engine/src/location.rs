//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A (row, column) coordinate, zero-indexed from the upper-left.
///
/// Coordinates are signed and unchecked so that callers can describe
/// positions off the board; operations that need an in-grid location
/// check [`Location::is_in_grid`]. Ordering is row-major.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: i8,
    col: i8,
}

/// A set of in-grid locations, iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> i8 {
        self.row
    }

    pub const fn col(self) -> i8 {
        self.col
    }

    /// Whether this location lies within the 8x8 grid.
    #[inline]
    pub fn is_in_grid(self) -> bool {
        let range = 0..EDGE_LENGTH as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// Convert from a row-major square index in `0..64`.
    #[inline]
    pub(crate) fn from_index(index: u8) -> Self {
        let edge = EDGE_LENGTH as u8;
        Self::new((index / edge) as i8, (index % edge) as i8)
    }

    /// Convert into a row-major square index, if on the board.
    #[inline]
    pub fn to_index(self) -> Option<u8> {
        if self.is_in_grid() {
            Some((self.row as u8) * EDGE_LENGTH as u8 + self.col as u8)
        } else {
            None
        }
    }

    /// The one-hot [`Bitboard`] for this location, if on the board.
    #[inline]
    pub fn to_bitboard(self) -> Option<Bitboard> {
        self.to_index()
            .map(|index| Bitboard::from(1u64 << (NUM_SPACES as u8 - 1 - index)))
    }
}

impl From<(i8, i8)> for Location {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

/// Convert this [`Location`] into string notation ("D3"), or "(row, col)" off the board.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_in_grid() {
            return write!(f, "({}, {})", self.row, self.col);
        }

        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation: column letter, then row ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)?;

        if row == 0 || row > EDGE_LENGTH as u32 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row as i8 - 1, col as i8))
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list. Off-board locations never are.
    pub fn contains(self, loc: Location) -> bool {
        loc.to_bitboard()
            .map_or(false, |loc_bitboard| loc_bitboard.intersects(self.0))
    }

    /// Returns whether the list holds no locations.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        // The MSB is the upper-left, so leading zeros give the row-major index.
        let bitboard: u64 = self.0.into();
        let index = bitboard.leading_zeros();
        self.0 ^= Bitboard::from(1u64 << (NUM_SPACES as u32 - 1 - index));

        Some(Location::from_index(index as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

/// Collect in-grid locations into a list; off-board locations are dropped.
impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut bitboard = Bitboard::EMPTY;
        for loc in iter {
            if let Some(loc_bitboard) = loc.to_bitboard() {
                bitboard |= loc_bitboard;
            }
        }
        Self(bitboard)
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_index_roundtrip() {
        assert_eq!(Location::from_index(0), Location::new(0, 0));
        assert_eq!(Location::from_index(63), Location::new(7, 7));
        assert_eq!(Location::from_index(19).to_index(), Some(19));
        assert_eq!(Location::new(8, 0).to_index(), None);
    }

    #[test]
    fn location_to_bitboard() {
        assert_eq!(
            Location::new(0, 0).to_bitboard(),
            Some(Bitboard::from(1u64 << 63))
        );
        assert_eq!(Location::new(7, 7).to_bitboard(), Some(Bitboard::from(1u64)));
        assert_eq!(Location::new(-1, 3).to_bitboard(), None);
        assert_eq!(Location::new(3, 8).to_bitboard(), None);
    }

    #[test]
    fn location_in_grid() {
        assert!(Location::new(0, 7).is_in_grid());
        assert!(!Location::new(0, -1).is_in_grid());
        assert!(!Location::new(8, 8).is_in_grid());
    }

    #[test]
    fn location_orders_row_major() {
        assert!(Location::new(0, 7) < Location::new(1, 0));
        assert!(Location::new(2, 3) < Location::new(2, 4));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::new(0, 0)));
        assert_eq!(Location::from_str("h8"), Ok(Location::new(7, 7)));
        assert_eq!(Location::from_str("D3"), Ok(Location::new(2, 3)));
        assert_eq!(Location::from_str(" e6\n"), Ok(Location::new(5, 4)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(7, 7).to_string(), "H8");
        assert_eq!(Location::new(0, 0).to_string(), "A1");
        assert_eq!(Location::new(2, 3).to_string(), "D3");
        assert_eq!(Location::new(-1, 9).to_string(), "(-1, 9)");
    }

    #[test]
    fn list_iterates_in_order() {
        let list: LocationList = vec![
            Location::new(5, 4),
            Location::new(2, 3),
            Location::new(4, 5),
            Location::new(3, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 4);
        assert_eq!(
            list.collect::<Vec<_>>(),
            vec![
                Location::new(2, 3),
                Location::new(3, 2),
                Location::new(4, 5),
                Location::new(5, 4),
            ]
        );
    }

    #[test]
    fn list_contains() {
        let list: LocationList = vec![Location::new(0, 0), Location::new(9, 9)]
            .into_iter()
            .collect();

        assert_eq!(list.len(), 1);
        assert!(list.contains(Location::new(0, 0)));
        assert!(!list.contains(Location::new(0, 1)));
        assert!(!list.contains(Location::new(9, 9)));
    }

    #[test]
    fn list_to_str() {
        let list: LocationList = vec![Location::new(2, 3), Location::new(7, 0)]
            .into_iter()
            .collect();
        assert_eq!(list.to_string(), "[D3, A8]");
        assert_eq!(LocationList::default().to_string(), "[]");
    }
}
