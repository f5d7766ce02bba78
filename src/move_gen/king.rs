//! King move generation
//!
//! Kings move one square in any direction (horizontally, vertically or
//! diagonally).
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares
//! - Moving into check is not excluded here (check detection lives outside
//!   this crate)
//! - Castling is not generated; it depends on has_moved state and attack
//!   information this engine does not track

use crate::board::Board;
use crate::move_gen::is_on_board;
use crate::types::{Move, Piece, Square};

/// The eight unit offsets surrounding the king
const KING_OFFSETS: [Square; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king moves from the piece's square
///
/// Kings step a single square, so each offset is checked once for
/// on-board-ness and friendly occupancy with no blocking semantics.
pub fn generate_king_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let (row, col) = piece.position;

    for &(row_offset, col_offset) in &KING_OFFSETS {
        let target = (row + row_offset, col + col_offset);

        if !is_on_board(target) {
            continue;
        }

        // Valid if destination is empty or holds an opponent piece
        match board.get_piece(target) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => moves.push(Move::new(piece.position, target)),
        }
    }
}
