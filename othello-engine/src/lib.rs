//! `othello-engine` is a complete Othello rules engine for front ends and tests.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Othello boards.
//!    These are fast, but may result in inconsistent state if their contracts are not manually checked.
//!  - [`Board`] is a snapshot of the discs of both colours, with checked cell access
//!    and per-colour move generation. It knows nothing about whose turn it is.
//!  - [`Game`] is the high-level, safe interface to all of the Othello game logic:
//!    turn order, automatic passing, the end of the game and the winner.

pub mod bitboard;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
