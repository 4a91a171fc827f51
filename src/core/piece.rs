//! Piece values.
//!
//! A `Piece` is an immutable (color, type) pair. Movement rules live in
//! `rules::movegen`, matched exhaustively over `PieceType`.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The six kinds of chess piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Kinds a pawn may promote to, in the order promotion moves are generated.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// True for pieces that move along rays (queen, rook, bishop).
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::Rook | PieceType::Bishop)
    }

    /// True if a pawn may promote to this kind.
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }

    /// Lowercase letter used in move notation (`k q b n r p`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }
}

/// A piece of a given color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning side.
    pub color: Color,
    /// Movement kind.
    pub kind: PieceType,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// Letter for diagrams: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
