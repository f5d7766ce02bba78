//! Captured pieces tracking
//!
//! Keeps the pieces removed from play by capture and renders the capture
//! summary shown to players. The log is append-only and ordered oldest
//! first; once a piece enters it, it never returns to the grid.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)

use crate::types::{Piece, PieceColor};

/// Append-only record of captured pieces
///
/// A single ordered log rather than one list per side: capture order across
/// the whole game is part of the record. Per-side views are derived from the
/// captured piece's color (a captured black piece was taken by White).
#[derive(Debug, Clone, Default)]
pub struct CaptureLog {
    pieces: Vec<Piece>,
}

impl CaptureLog {
    /// Record a capture. The log takes ownership of the piece.
    pub fn add_capture(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// All captured pieces, oldest first
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces captured by the given side, oldest first
    pub fn captured_by(&self, color: PieceColor) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |piece| piece.color == color.opposite())
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Clear all captured pieces (for a new game)
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Two-line text summary of all captures, grouped by the captured
    /// piece's original color, in capture order:
    ///
    /// ```text
    /// Black pieces captured by white: N P
    /// White pieces captured by black: Q
    /// ```
    pub fn summary(&self) -> String {
        let initials = |color: PieceColor| {
            self.captured_by(color)
                .map(|piece| piece.kind.initial().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        format!(
            "Black pieces captured by white: {}\nWhite pieces captured by black: {}",
            initials(PieceColor::White),
            initials(PieceColor::Black)
        )
    }

    /// Material advantage in pawn units
    ///
    /// Positive means White is ahead, negative means Black is ahead.
    /// Example: if White captured a rook and a pawn while Black captured a
    /// knight, White's advantage is (5+1) - 3 = +3 pawns.
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self
            .captured_by(PieceColor::White)
            .map(|piece| piece_value(piece))
            .sum();
        let black_score: i32 = self
            .captured_by(PieceColor::Black)
            .map(|piece| piece_value(piece))
            .sum();
        white_score - black_score
    }
}

/// Get the value of a piece in pawn units
///
/// King has value 0 as it cannot be captured (the game ends in checkmate).
fn piece_value(piece: &Piece) -> i32 {
    use crate::types::PieceKind;
    match piece.kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
