//! "Perft" performance test: count the number of leaves at a given depth.
//! Passes count as a ply, and a second pass in a row ends the game.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

/// Count the leaves `depth` plies below the starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Dark, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.moves_for(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|mv| leaves_below(board.apply_move(player, mv), !player, depth - 1, false))
        .sum()
}
