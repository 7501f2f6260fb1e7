use crate::Location;
use derive_more::{Display, Error};

/// Errors raised when building a game or inspecting a square.
///
/// Illegal moves are not errors: [`Game::play`](crate::Game::play) reports them as `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The supplied grid does not have exactly 8 rows.
    #[display(fmt = "board must have 8 rows, found {}", rows)]
    Shape { rows: usize },

    /// A row of the supplied grid does not have exactly 8 columns.
    #[display(fmt = "board row {} must have 8 columns, found {}", row, cols)]
    RowShape { row: usize, cols: usize },

    /// The starting player was neither dark nor light.
    #[display(fmt = "starting player must be dark or light")]
    InvalidPlayer,

    #[display(fmt = "location {} is outside the board", location)]
    OutOfRange { location: Location },
}

impl GameError {
    /// Whether this error describes a badly shaped grid.
    pub fn is_shape(&self) -> bool {
        matches!(self, GameError::Shape { .. } | GameError::RowShape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            GameError::Shape { rows: 7 }.to_string(),
            "board must have 8 rows, found 7"
        );
        assert_eq!(
            GameError::RowShape { row: 2, cols: 9 }.to_string(),
            "board row 2 must have 8 columns, found 9"
        );
        assert_eq!(
            GameError::OutOfRange {
                location: Location::new(8, 0)
            }
            .to_string(),
            "location (8, 0) is outside the board"
        );
    }

    #[test]
    fn shape_errors_are_grouped() {
        assert!(GameError::Shape { rows: 9 }.is_shape());
        assert!(GameError::RowShape { row: 0, cols: 0 }.is_shape());
        assert!(!GameError::InvalidPlayer.is_shape());
    }
}
