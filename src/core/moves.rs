//! Move representation.
//!
//! A `Move` is a start square, an end square and an optional promotion kind.
//! Promotion is part of a move's identity: `e7e8q` and `e7e8n` are different
//! moves, and neither equals a plain `e7e8`.
//!
//! `MoveSet` collects moves with set semantics. Iteration order is the order
//! moves were inserted, which for generated moves is the fixed direction-table
//! order of each piece type, so results are reproducible across runs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::piece::{Piece, PieceType};
use super::position::Position;

/// A single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece leaves.
    pub start: Position,

    /// Square the piece lands on.
    pub end: Position,

    /// Replacement kind when a pawn reaches its last row.
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Create a move without promotion.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a promoting move.
    #[must_use]
    pub const fn with_promotion(start: Position, end: Position, kind: PieceType) -> Self {
        Self {
            start,
            end,
            promotion: Some(kind),
        }
    }

    /// True if the move carries a promotion kind.
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// A set of moves.
///
/// Backed by a `SmallVec` sized for the largest single-piece move count (a
/// centralized queen), so per-piece generation never allocates. Inserting a
/// move that is already present is a no-op. Equality ignores order.
///
/// ```
/// use chess_rules::core::{Move, MoveSet, Position};
///
/// let mv = Move::new(Position::new(2, 5).unwrap(), Position::new(4, 5).unwrap());
/// let mut set = MoveSet::new();
/// set.insert(mv);
/// set.insert(mv);
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(&mv));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Move>", into = "Vec<Move>")]
pub struct MoveSet {
    moves: SmallVec<[Move; 28]>,
}

impl MoveSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a move. Returns false if it was already present.
    pub fn insert(&mut self, mv: Move) -> bool {
        if self.contains(&mv) {
            return false;
        }
        self.moves.push(mv);
        true
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the set holds no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Destination squares, in insertion order, without repeats.
    pub fn destinations(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves
            .iter()
            .enumerate()
            .filter(|(i, mv)| !self.moves[..*i].iter().any(|prev| prev.end == mv.end))
            .map(|(_, mv)| mv.end)
    }

    /// True if any move lands on `target`.
    #[must_use]
    pub fn reaches(&self, target: Position) -> bool {
        self.moves.iter().any(|mv| mv.end == target)
    }
}

impl From<Vec<Move>> for MoveSet {
    fn from(moves: Vec<Move>) -> Self {
        moves.into_iter().collect()
    }
}

impl From<MoveSet> for Vec<Move> {
    fn from(set: MoveSet) -> Self {
        set.moves.into_vec()
    }
}

impl PartialEq for MoveSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|mv| other.contains(mv))
    }
}

impl Eq for MoveSet {}

impl Extend<Move> for MoveSet {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.insert(mv);
        }
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 28]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A committed move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Half-move number, starting at 1.
    pub ply: u32,

    /// Side that moved.
    pub color: Color,

    /// The move played.
    pub mv: Move,

    /// The piece as it stood on the start square (a pawn, for promotions).
    pub piece: Piece,

    /// The piece removed from the end square, if any.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, color: Color, mv: Move, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            ply,
            color,
            mv,
            piece,
            captured,
        }
    }
}
