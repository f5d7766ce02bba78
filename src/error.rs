//! Error types for the chess logic crate
//!
//! `Board::make_move` itself keeps its boolean contract (an illegal move is
//! a normal outcome, not an error). These types are for the `api` layer,
//! which reports *why* a move was rejected.

use thiserror::Error;

use crate::types::{PieceColor, Square};

/// Errors that can occur when driving the board through the api layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessLogicError {
    /// Square coordinates outside the 8x8 board
    #[error("Invalid square {square:?} (coordinates must be 0-7)")]
    InvalidSquare { square: Square },

    /// No piece at the source square
    #[error("No piece at source square {square:?}")]
    NoPieceAtSquare { square: Square },

    /// Piece at the source square does not belong to the side to move
    #[error("Piece at {square:?} does not belong to {turn:?}")]
    WrongPieceColor { square: Square, turn: PieceColor },

    /// Move is not in the piece's generated move set
    #[error("Invalid move: from {from:?} to {to:?}")]
    InvalidMove { from: Square, to: Square },
}

/// Result type alias for chess logic operations
pub type ChessLogicResult<T> = Result<T, ChessLogicError>;
