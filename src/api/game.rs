//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;

/// Create a new game with the standard starting position
pub fn new_game() -> Board {
    let mut board = Board::new();
    board.initialize_game();
    board
}

/// Reset an existing game to the starting position
///
/// Equivalent to `initialize_game`: repopulates the grid, hands the move
/// back to White and clears the capture log.
pub fn reset_game(board: &mut Board) {
    board.initialize_game();
}
