//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks, making them
//! the most powerful piece on the board.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (horizontally/vertically)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::{bishop, rook};
use crate::board::Board;
use crate::types::{Move, Piece};

/// Generate queen moves from the piece's square
///
/// Queens move like both bishop and rook, so this generates moves for both
/// patterns and combines them.
pub fn generate_queen_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(piece, board, moves);
    rook::generate_rook_moves(piece, board, moves);
}
