//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Draw an 8x8 grid labelled in algebraic notation, asking `symbol_at`
/// for the character at each zero-indexed (row, column).
pub fn format_grid<F>(f: &mut Formatter, symbol_at: F) -> fmt::Result
where
    F: Fn(usize, usize) -> char,
{
    f.write_str("   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {}", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, " {}", symbol_at(row, col))?;
        }
    }

    Ok(())
}
