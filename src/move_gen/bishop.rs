//! Bishop move generation
//!
//! Bishops are sliding pieces that move diagonally until blocked by another
//! piece or the board edge.
//!
//! ## Bishop Movement Rules
//!
//! - Bishops move diagonally, any number of squares
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::sliding::{self, Direction};
use crate::board::Board;
use crate::types::{Move, Piece};

/// The four diagonal unit vectors
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generate bishop moves from the piece's square
///
/// Delegates to the common sliding scan over the diagonal directions.
pub fn generate_bishop_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(piece, board, &BISHOP_DIRECTIONS, moves);
}
