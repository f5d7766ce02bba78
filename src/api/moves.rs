//! Move execution and validation
//!
//! Functions for executing moves and checking move legality. Unlike
//! `Board::make_move`, which reports rejection as a bare `false`, `do_move`
//! classifies the failure so callers can tell the user what went wrong.

use tracing::{debug, warn};

use crate::board::Board;
use crate::error::{ChessLogicError, ChessLogicResult};
use crate::move_gen::{is_on_board, possible_moves};
use crate::types::Move;

/// Execute a move on the board
///
/// Validates the square coordinates first (so malformed input surfaces as
/// `InvalidSquare` instead of a panic), then classifies the reason when the
/// board rejects the move.
///
/// # Errors
///
/// - `InvalidSquare` - a coordinate is outside the board
/// - `NoPieceAtSquare` - the start square is empty
/// - `WrongPieceColor` - the piece does not belong to the side to move
/// - `InvalidMove` - the move is not in the piece's generated move set
pub fn do_move(board: &mut Board, mv: Move) -> ChessLogicResult<()> {
    for square in [mv.start, mv.end] {
        if !is_on_board(square) {
            warn!("[MOVE] Rejected off-board square {:?}", square);
            return Err(ChessLogicError::InvalidSquare { square });
        }
    }

    let Some(piece) = board.get_piece(mv.start) else {
        debug!("[MOVE] No piece at {:?}", mv.start);
        return Err(ChessLogicError::NoPieceAtSquare { square: mv.start });
    };

    if piece.color != board.turn() {
        debug!(
            "[MOVE] {:?} piece at {:?} moved on {:?}'s turn",
            piece.color,
            mv.start,
            board.turn()
        );
        return Err(ChessLogicError::WrongPieceColor {
            square: mv.start,
            turn: board.turn(),
        });
    }

    if board.make_move(mv) {
        debug!("[MOVE] Applied {}", mv);
        Ok(())
    } else {
        debug!("[MOVE] Not in the move set: {}", mv);
        Err(ChessLogicError::InvalidMove {
            from: mv.start,
            to: mv.end,
        })
    }
}

/// Check if a move is legal without applying it
///
/// Validates that the squares are on the board, the source square holds a
/// piece of the side to move, and the move is a member of that piece's
/// generated move set (structural equality of start, end and flags).
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    if !is_on_board(mv.start) || !is_on_board(mv.end) {
        return false;
    }

    let Some(piece) = board.get_piece(mv.start) else {
        return false;
    };

    if piece.color != board.turn() {
        return false;
    }

    possible_moves(piece, board).contains(&mv)
}
