//! Board state and the move application protocol
//!
//! The `Board` owns the 8x8 grid of optional piece occupants, the side to
//! move and the capture log. All mutation goes through three primitives
//! (`place_piece`, `remove_piece` and the composed `make_move`); the grid is
//! the single source of truth and every placement rewrites the occupant's
//! cached position.
//!
//! # Move Protocol
//!
//! `make_move` is the sole externally safe mutation entry point. It rejects
//! a move (returning `false` with no state change) when the start square is
//! empty, the occupant is not the side to move, or the move is absent from
//! the occupant's generated move set. Once those checks pass, capture,
//! relocation and the turn switch are unconditional.
//!
//! # Rendering
//!
//! `Display` prints 8 rows of 8 space-separated two-character tokens: `..`
//! for an empty square, lowercase color initial plus uppercase kind initial
//! otherwise (`wP`, `bR`).

use std::fmt;

use crate::captures::CaptureLog;
use crate::move_gen::{is_on_board, possible_moves};
use crate::types::{Move, Piece, PieceColor, PieceKind, Square};

/// The full state of one game: grid, side to move and capture log
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    turn: PieceColor,
    captured: CaptureLog,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with White to move
    pub fn new() -> Self {
        Board {
            grid: [[None; 8]; 8],
            turn: PieceColor::White,
            captured: CaptureLog::default(),
        }
    }

    /// The side to move
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Convenience turn query matching the classic flag name
    pub fn white_to_move(&self) -> bool {
        self.turn == PieceColor::White
    }

    /// The capture log, oldest capture first
    pub fn captured(&self) -> &CaptureLog {
        &self.captured
    }

    /// Iterate over every piece currently on the grid
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().filter_map(|cell| cell.as_ref())
    }

    /// Get the piece at the given square
    ///
    /// Pure lookup with no side effects. An out-of-range square is a caller
    /// contract violation and panics; use `move_gen::is_on_board` first when
    /// the coordinates are not already known to be valid.
    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        let (row, col) = cell_index(square);
        self.grid[row][col].as_ref()
    }

    /// Place a piece at the given square, overwriting whatever was there
    ///
    /// Synchronizes the piece's cached position with the cell it lands in.
    /// Does not check prior occupancy: callers that care about the previous
    /// occupant must `remove_piece` first.
    pub fn place_piece(&mut self, mut piece: Piece, square: Square) {
        let (row, col) = cell_index(square);
        piece.position = square;
        self.grid[row][col] = Some(piece);
    }

    /// Remove and return the piece at the given square
    ///
    /// Used both for moving a piece and for capturing one. The returned
    /// piece is unmodified.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = cell_index(square);
        self.grid[row][col].take()
    }

    /// Execute a move on the board
    ///
    /// Returns `true` if the move was applied, `false` if it was rejected.
    /// A rejected move leaves the grid, the turn and the capture log
    /// untouched. The checks, in order:
    ///
    /// 1. The start square holds a piece.
    /// 2. The piece belongs to the side to move.
    /// 3. The move is a member of the piece's generated move set
    ///    (structural equality over start, end and flags).
    ///
    /// On success the destination occupant (if any) is appended to the
    /// capture log, the mover is relocated with `has_moved` set, and the
    /// turn switches to the other side.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let Some(piece) = self.get_piece(mv.start).copied() else {
            return false;
        };

        if piece.color != self.turn {
            return false;
        }

        if !possible_moves(&piece, self).contains(&mv) {
            return false;
        }

        // Legality established; capture, relocation and the turn switch are
        // unconditional from here on.
        if let Some(target) = self.remove_piece(mv.end) {
            self.captured.add_capture(target);
        }

        // The start square was verified occupied above.
        if let Some(mut moved) = self.remove_piece(mv.start) {
            moved.has_moved = true;
            self.place_piece(moved, mv.end);
        }

        self.turn = self.turn.opposite();

        true
    }

    /// Set up the standard 32-piece starting position
    ///
    /// Black occupies rows 0 (back rank) and 1 (pawns), White rows 6 (pawns)
    /// and 7 (back rank). Also resets the side to move to White and clears
    /// the capture log, so this doubles as a full game reset.
    pub fn initialize_game(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        self.grid = [[None; 8]; 8];
        self.turn = PieceColor::White;
        self.captured.clear();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            self.place_piece(Piece::new(PieceColor::Black, kind, (0, col)), (0, col));
            self.place_piece(Piece::new(PieceColor::White, kind, (7, col)), (7, col));
        }
        for col in 0..8 {
            self.place_piece(
                Piece::new(PieceColor::Black, PieceKind::Pawn, (1, col)),
                (1, col),
            );
            self.place_piece(
                Piece::new(PieceColor::White, PieceKind::Pawn, (6, col)),
                (6, col),
            );
        }
    }

    /// Two-line capture summary, grouped by the captured piece's color
    pub fn capture_summary(&self) -> String {
        self.captured.summary()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.grid.iter().enumerate() {
            let tokens: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(piece) => format!("{}{}", piece.color.initial(), piece.kind.initial()),
                    None => "..".to_string(),
                })
                .collect();
            write!(f, "{}", tokens.join(" "))?;
            if row_idx < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Convert a square to grid indices, failing fast on out-of-range input
fn cell_index(square: Square) -> (usize, usize) {
    assert!(
        is_on_board(square),
        "square ({}, {}) is off the board",
        square.0,
        square.1
    );
    (square.0 as usize, square.1 as usize)
}
