//! A colour-indexed snapshot of the discs on an Othello board.
//!
//! A [`Board`] does not track whose turn it is; every operation takes the
//! [`Player`] it is asked about. Turn order lives in [`Game`](crate::Game).

use crate::bitboard::{self, Bitboard, DARK_START, LIGHT_START};
use crate::{utils, GameError, Location, LocationList, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

impl From<Cell> for Option<Player> {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }
}

/// The discs of both colours. The two bitboards never overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    dark: Bitboard,
    light: Bitboard,
}

impl Default for Board {
    /// Gets the starting layout.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout: light on (3, 3) and (4, 4), dark on (3, 4) and (4, 3).
    pub const fn new() -> Self {
        Self {
            dark: DARK_START,
            light: LIGHT_START,
        }
    }

    /// Build a board from rows of cells.
    /// Fails unless there are exactly 8 rows of exactly 8 cells each.
    pub fn from_grid<R: AsRef<[Cell]>>(grid: &[R]) -> Result<Self, GameError> {
        if grid.len() != EDGE_LENGTH {
            return Err(GameError::Shape { rows: grid.len() });
        }

        if let Some((row, cols)) = grid
            .iter()
            .map(|cells| cells.as_ref().len())
            .enumerate()
            .find(|&(_, cols)| cols != EDGE_LENGTH)
        {
            return Err(GameError::RowShape { row, cols });
        }

        let mut dark = Bitboard::EMPTY;
        let mut light = Bitboard::EMPTY;
        let cells = grid.iter().flat_map(|cells| cells.as_ref().iter());

        for (index, cell) in cells.enumerate() {
            let mask = Bitboard::from(1u64 << (NUM_SPACES - 1 - index));
            match cell {
                Cell::Dark => dark |= mask,
                Cell::Light => light |= mask,
                Cell::Empty => {}
            }
        }

        Ok(Self { dark, light })
    }

    /// The contents of the square at `location`.
    pub fn cell_at(&self, location: Location) -> Result<Cell, GameError> {
        let mask = location
            .to_bitboard()
            .ok_or(GameError::OutOfRange { location })?;

        Ok(if mask.intersects(self.dark) {
            Cell::Dark
        } else if mask.intersects(self.light) {
            Cell::Light
        } else {
            Cell::Empty
        })
    }

    /// The bitboard of one colour's discs.
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Dark => self.dark,
            Player::Light => self.light,
        }
    }

    /// Bitboards as seen by `player`: (own discs, opponent discs).
    #[inline]
    fn split(&self, player: Player) -> (Bitboard, Bitboard) {
        (self.discs(player), self.discs(!player))
    }

    /// The empty squares where `player` could legally place a disc.
    #[inline]
    pub fn moves_for(&self, player: Player) -> LocationList {
        let (active, opponent) = self.split(player);
        bitboard::get_move_mask(active, opponent).into()
    }

    /// Whether `player` has at least one legal move.
    #[inline]
    pub fn has_moves(&self, player: Player) -> bool {
        !self.moves_for(player).is_empty()
    }

    /// Place a disc for `player` and flip every captured run.
    /// `location` must be one of [`Board::moves_for`]`(player)`; this is not checked.
    pub fn apply_move(self, player: Player, location: Location) -> Self {
        let move_mask = match location.to_bitboard() {
            Some(mask) => mask,
            None => return self,
        };

        let (active, opponent) = self.split(player);
        let (active, opponent) = bitboard::apply_move(active, opponent, move_mask);

        match player {
            Player::Dark => Self {
                dark: active,
                light: opponent,
            },
            Player::Light => Self {
                dark: opponent,
                light: active,
            },
        }
    }

    /// The number of discs `player` has on the board.
    #[inline]
    pub fn disc_count(&self, player: Player) -> u8 {
        self.discs(player).count_occupied()
    }

    /// The number of empty squares.
    #[inline]
    pub fn empty_count(&self) -> u8 {
        (self.dark | self.light).count_empty()
    }

    /// Dark discs minus light discs.
    #[inline]
    pub fn score(&self) -> i8 {
        bitboard::score_absolute_difference(self.dark, self.light)
    }

    /// Swap the colour of every disc.
    pub fn swap_players(self) -> Self {
        Self {
            dark: self.light,
            light: self.dark,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |row, col| {
            match self.cell_at(Location::new(row as i8, col as i8)) {
                Ok(Cell::Dark) => '#',
                Ok(Cell::Light) => 'O',
                _ => '.',
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// Parse a 64-square row-major board string.
/// Dark is `X` or `*`, light is `O`, empty is `-` or `.`; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' | '*' => Ok(Cell::Dark),
                'O' => Ok(Cell::Light),
                '-' | '.' => Ok(Cell::Empty),
                _ => Err(ParseBoardError),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError);
        }

        let rows: Vec<&[Cell]> = cells.chunks(EDGE_LENGTH).collect();
        Self::from_grid(&rows).map_err(|_| ParseBoardError)
    }
}
