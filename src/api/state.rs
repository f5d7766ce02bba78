//! Game state queries
//!
//! Read-only helpers over a board: whose turn it is, which moves a selected
//! square offers, and the running material balance.

use crate::board::Board;
use crate::move_gen::{is_on_board, possible_moves};
use crate::types::{Move, PieceColor, Square};

/// The side to move
pub fn current_turn(board: &Board) -> PieceColor {
    board.turn()
}

/// Moves offered by the piece on the given square
///
/// Returns an empty list when the square is off-board or empty, or when the
/// occupant belongs to the side not to move: only the current player's
/// pieces offer destinations.
pub fn legal_moves_for_square(board: &Board, square: Square) -> Vec<Move> {
    if !is_on_board(square) {
        return Vec::new();
    }

    match board.get_piece(square) {
        Some(piece) if piece.color == board.turn() => possible_moves(piece, board),
        _ => Vec::new(),
    }
}

/// Material advantage in pawn units (positive favors White)
pub fn material_advantage(board: &Board) -> i32 {
    board.captured().material_advantage()
}
