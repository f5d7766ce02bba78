//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector, walk outward one square at a time from the
//! piece's position:
//! 1. Off the board: stop scanning this direction
//! 2. Empty square: record it and keep walking
//! 3. Opponent piece: record the capture, then stop (no jumping past it)
//! 4. Own piece: stop without recording (friendly pieces block)
//!
//! The row and column steps are taken from their own components of the
//! direction vector, so the same walk serves straight and diagonal
//! directions alike.

use crate::board::Board;
use crate::move_gen::is_on_board;
use crate::types::{Move, Piece};

/// A `(row, col)` direction unit vector
pub type Direction = (i8, i8);

/// Generate moves for a sliding piece along the given directions
///
/// Handles the common logic for bishops, rooks and queens. Each direction
/// is scanned independently; recorded moves are stable per direction, in
/// the order directions appear in `directions`.
///
/// # Arguments
///
/// * `piece` - The sliding piece to generate moves for
/// * `board` - The current board state
/// * `directions` - Unit vectors to scan, e.g. the four cardinals for rooks
/// * `moves` - Output vector to append valid moves to
pub fn generate_sliding_moves(
    piece: &Piece,
    board: &Board,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    let (row, col) = piece.position;

    for &(row_dir, col_dir) in directions {
        let mut current = (row + row_dir, col + col_dir);

        while is_on_board(current) {
            match board.get_piece(current) {
                None => {
                    // Empty square: valid move, continue in this direction
                    moves.push(Move::new(piece.position, current));
                }
                Some(target) => {
                    // Opponent piece: valid capture; own piece: blocked.
                    // Either way the scan stops here.
                    if target.color != piece.color {
                        moves.push(Move::new(piece.position, current));
                    }
                    break;
                }
            }

            current = (current.0 + row_dir, current.1 + col_dir);
        }
    }
}
