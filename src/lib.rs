//! Chess board state and move validation engine
//!
//! Validates and applies chess moves against an 8x8 board. The core is the
//! move-legality engine: per-kind move generation from a board snapshot
//! (`move_gen`), combined with a board-mutation protocol (`Board::make_move`)
//! that applies a move only if it is legal and keeps the turn owner and
//! capture log consistent.
//!
//! Check/checkmate detection, castling, en passant execution and promotion
//! piece selection live outside this crate.
//!
//! # Example
//!
//! ```
//! use chess_logic::api::{do_move, new_game};
//! use chess_logic::Move;
//!
//! let mut board = new_game();
//! // 1. e4
//! do_move(&mut board, Move::new((6, 4), (4, 4))).unwrap();
//! println!("{board}");
//! ```

pub mod api;
pub mod board;
pub mod captures;
pub mod error;
pub mod move_gen;
pub mod types;

pub use board::Board;
pub use captures::CaptureLog;
pub use error::{ChessLogicError, ChessLogicResult};
pub use move_gen::{is_on_board, possible_moves, possible_moves_for_color};
pub use types::{Col, Move, Piece, PieceColor, PieceKind, Row, Square};
