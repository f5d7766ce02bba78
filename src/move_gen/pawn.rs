//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion flagging on back-rank arrival
//! - En passant (future enhancement; the `Move` flag exists but is never set)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent (White toward row 0,
//!   Black toward row 7), only onto an empty square
//! - **Double push**: two squares on the pawn's first move, requiring both
//!   the intermediate and destination squares to be empty
//! - **Captures**: one square diagonally forward, only onto an opponent
//!   piece
//! - **Promotion**: any arrival on the opponent's back rank sets the move's
//!   promotion flag (piece selection is handled outside this crate)

use crate::board::Board;
use crate::move_gen::is_on_board;
use crate::types::{Move, Piece, PieceColor, Square};

/// Generate pawn moves from the piece's square
///
/// The direction of travel depends on color: White advances toward
/// decreasing row indices, Black toward increasing. A double push is never
/// promotion-flagged (it cannot reach the back rank from the start rank).
pub fn generate_pawn_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let (row, col) = piece.position;
    let direction: i8 = match piece.color {
        PieceColor::White => -1,
        PieceColor::Black => 1,
    };

    // Forward push, and the double push behind it
    let forward = (row + direction, col);
    if is_on_board(forward) && board.get_piece(forward).is_none() {
        moves.push(Move {
            start: piece.position,
            end: forward,
            promotion: is_promotion_square(piece.color, forward),
            en_passant: false,
        });

        if !piece.has_moved {
            let double_forward = (row + direction * 2, col);
            if is_on_board(double_forward) && board.get_piece(double_forward).is_none() {
                moves.push(Move::new(piece.position, double_forward));
            }
        }
    }

    // Diagonal captures, left and right
    for col_offset in [-1, 1] {
        let target = (row + direction, col + col_offset);
        if !is_on_board(target) {
            continue;
        }

        if let Some(occupant) = board.get_piece(target) {
            if occupant.color != piece.color {
                moves.push(Move {
                    start: piece.position,
                    end: target,
                    promotion: is_promotion_square(piece.color, target),
                    en_passant: false,
                });
            }
        }
    }
}

/// Whether arriving on this square promotes the pawn
///
/// The opponent's back rank: row 0 for White, row 7 for Black.
fn is_promotion_square(color: PieceColor, square: Square) -> bool {
    match color {
        PieceColor::White => square.0 == 0,
        PieceColor::Black => square.0 == 7,
    }
}
