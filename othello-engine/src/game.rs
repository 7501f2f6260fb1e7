//! Implements game-level Othello logic.
//!
//! [`Game`] is the safe interface to a whole game: it owns the board and whose
//! turn it is, and applies the passing and end-of-game rules. For raw per-colour
//! move generation, use [`Board`] directly.

use crate::board::{Board, Cell};
use crate::{GameError, Location, LocationList};
use derive_more::{Display, Error};
use log::{debug, trace};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Dark,
    Light,
}

impl Default for Player {
    /// Gets the starting player (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a player name: "dark"/"black"/"x" or "light"/"white"/"o", any case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "black" | "x" => Ok(Player::Dark),
            "light" | "white" | "o" => Ok(Player::Light),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The complete state of an Othello game: the discs, and whose turn it is.
///
/// Whose turn it is never becomes "nobody": when neither side can move the
/// game is over, which [`Game::is_finished`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    active: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the starting layout, dark to move.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::Dark,
        }
    }

    /// A game from a supplied 8x8 grid, with `player` to move.
    ///
    /// Fails with a shape error unless the grid is 8 rows of 8 cells, and with
    /// [`GameError::InvalidPlayer`] if `player` is [`Cell::Empty`].
    pub fn from_grid<R: AsRef<[Cell]>>(grid: &[R], player: Cell) -> Result<Self, GameError> {
        let board = Board::from_grid(grid)?;
        let active = Option::<Player>::from(player).ok_or(GameError::InvalidPlayer)?;
        Ok(Self::from_board(board, active))
    }

    /// A game from an existing board, with `player` to move.
    pub const fn from_board(board: Board, player: Player) -> Self {
        Self {
            board,
            active: player,
        }
    }

    /// The discs on the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn is recorded, without applying the passing rule.
    /// See [`Game::current_player`] for whose turn it actually is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The contents of the square at `location`.
    /// Fails with [`GameError::OutOfRange`] off the board.
    pub fn cell_at(&self, location: Location) -> Result<Cell, GameError> {
        self.board.cell_at(location)
    }

    /// Who will move next once any forced pass is taken: the recorded player if
    /// they can move, otherwise their opponent if they can, otherwise nobody.
    /// Does not change any state.
    pub fn next_player(&self) -> Option<Player> {
        if self.board.has_moves(self.active) {
            Some(self.active)
        } else if self.board.has_moves(!self.active) {
            Some(!self.active)
        } else {
            None
        }
    }

    /// Whose turn it is, taking a forced pass if needed.
    ///
    /// This is not a pure query. If the recorded player has no legal move but
    /// the opponent does, the turn passes to the opponent and stays there.
    /// Returns `None` when neither player can move; the recorded player is then
    /// left untouched.
    pub fn current_player(&mut self) -> Option<Player> {
        let next = self.next_player();

        if let Some(player) = next {
            if player != self.active {
                debug!("{} has no legal move and passes to {}", self.active, player);
                self.active = player;
            }
        }

        next
    }

    /// Whether neither player has a legal move, regardless of whose turn it is.
    pub fn is_finished(&self) -> bool {
        !self.board.has_moves(Player::Dark) && !self.board.has_moves(Player::Light)
    }

    /// The moves available to the recorded player; empty once the game is finished.
    pub fn legal_moves(&self) -> LocationList {
        if self.is_finished() {
            return LocationList::default();
        }
        self.board.moves_for(self.active)
    }

    /// The moves `player` would have if it were their turn.
    pub fn legal_moves_for(&self, player: Player) -> LocationList {
        self.board.moves_for(player)
    }

    /// The player with more discs once the game is finished.
    /// `None` while the game is running, or for a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }

        match self.board.score() {
            score if score > 0 => Some(Player::Dark),
            score if score < 0 => Some(Player::Light),
            _ => None,
        }
    }

    /// Play a disc for the recorded player at `location`.
    ///
    /// Returns `false` and changes nothing if `location` is off the board or not
    /// a legal move. Otherwise places the disc, flips every captured run, hands
    /// the turn to the opponent and applies the passing rule: if the opponent
    /// cannot move but the mover can, the mover goes again.
    pub fn play(&mut self, location: Location) -> bool {
        if !location.is_in_grid() {
            trace!("rejected off-board move {}", location);
            return false;
        }

        if !self.legal_moves().contains(location) {
            trace!("rejected illegal move {} for {}", location, self.active);
            return false;
        }

        let mover = self.active;
        self.board = self.board.apply_move(mover, location);
        self.active = !mover;
        debug!("{} played {}", mover, location);

        if self.current_player().is_none() {
            debug!(
                "game over: {} dark, {} light",
                self.disc_count(Player::Dark),
                self.disc_count(Player::Light)
            );
        }

        true
    }

    /// The number of discs `player` has on the board.
    pub fn disc_count(&self, player: Player) -> u8 {
        self.board.disc_count(player)
    }

    /// The number of empty squares.
    pub fn empty_count(&self) -> u8 {
        self.board.empty_count()
    }

    /// Dark discs minus light discs.
    pub fn score(&self) -> i8 {
        self.board.score()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;

        match self.next_player() {
            Some(player) => write!(f, "{} to move", player),
            None => match self.winner() {
                Some(winner) => write!(f, "Game over: {} wins", winner),
                None => write!(f, "Game over: draw"),
            },
        }
    }
}
