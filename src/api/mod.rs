//! Public API for the chess logic engine
//!
//! Provides high-level functions for game management and move execution,
//! with proper error reporting on top of the board's boolean contract.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move)
//! - `state` - Game state queries (current_turn, legal_moves_for_square,
//!   material_advantage)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, is_legal_move};
pub use state::{current_turn, legal_moves_for_square, material_advantage};
