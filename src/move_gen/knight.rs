//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Board;
use crate::move_gen::is_on_board;
use crate::types::{Move, Piece, Square};

/// The eight L-shaped jump offsets
const KNIGHT_OFFSETS: [Square; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight moves from the piece's square
///
/// Knights jump over intervening pieces, so each offset is checked once for
/// on-board-ness and friendly occupancy with no blocking semantics.
pub fn generate_knight_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let (row, col) = piece.position;

    for &(row_offset, col_offset) in &KNIGHT_OFFSETS {
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
