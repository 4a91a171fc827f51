//! The board: a mapping from `Position` to an optional `Piece`.
//!
//! Backed by an `im::OrdMap`, so:
//! - cloning is O(1) and clones share no observable state, which keeps the
//!   legality filter's per-candidate simulation cheap;
//! - iteration is row-major and deterministic;
//! - equality is structural (identical occupancy on every square).
//!
//! `place` is an unconditional overwrite with no rule checking. Rule checking
//! belongs to `rules` and `game`.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::moves::Move;
use super::piece::{Piece, PieceType};
use super::position::{Position, BOARD_SIZE};

/// Back-row layout from column 1 to column 8.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 board. Absent entries are empty squares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<(Position, Piece)>", into = "Vec<(Position, Piece)>")]
pub struct Board {
    squares: OrdMap<Position, Piece>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board in the standard starting layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_to_standard_setup();
        board
    }

    /// Clear every square, then place the 32 standard pieces.
    pub fn reset_to_standard_setup(&mut self) {
        self.squares.clear();
        for color in Color::ALL {
            for (i, kind) in BACK_ROW.into_iter().enumerate() {
                let column = i as i32 + 1;
                self.squares
                    .insert(Position::at(color.back_row(), column), Piece::new(color, kind));
                self.squares.insert(
                    Position::at(color.pawn_row(), column),
                    Piece::new(color, PieceType::Pawn),
                );
            }
        }
    }

    /// Put `piece` on `position`, replacing any occupant. `None` empties the square.
    pub fn place(&mut self, position: Position, piece: Option<Piece>) {
        match piece {
            Some(piece) => {
                self.squares.insert(position, piece);
            }
            None => {
                self.squares.remove(&position);
            }
        }
    }

    /// Empty a square, returning what stood there.
    pub fn clear_square(&mut self, position: Position) -> Option<Piece> {
        self.squares.remove(&position)
    }

    /// The piece on `position`, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares.get(&position).copied()
    }

    /// True if nothing stands on `position`.
    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        !self.squares.contains_key(&position)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().map(|(pos, piece)| (*pos, *piece))
    }

    /// Squares occupied by `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// The first king of `color` in row-major order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(pos, _)| pos)
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// Number of pieces of each (color, kind) present.
    #[must_use]
    pub fn piece_counts(&self) -> FxHashMap<Piece, usize> {
        let mut counts = FxHashMap::default();
        for (_, piece) in self.pieces() {
            *counts.entry(piece).or_insert(0) += 1;
        }
        counts
    }

    /// A copy of this board with the piece on `mv.start` relocated to `mv.end`.
    ///
    /// The relocated piece keeps its kind; promotion is applied only when a
    /// move is committed. Used to test king safety, where the kind of the
    /// arriving piece does not change whether the own king is attacked.
    #[must_use]
    pub fn with_move_applied(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        if let Some(piece) = next.squares.remove(&mv.start) {
            next.squares.insert(mv.end, piece);
        }
        next
    }
}

impl From<Vec<(Position, Piece)>> for Board {
    fn from(pieces: Vec<(Position, Piece)>) -> Self {
        Self {
            squares: pieces.into_iter().collect(),
        }
    }
}

impl From<Board> for Vec<(Position, Piece)> {
    fn from(board: Board) -> Self {
        board.pieces().collect()
    }
}

/// Diagram with row 8 on top and `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            let line: String = (1..=BOARD_SIZE)
                .map(|column| {
                    self.get(Position::at(row, column))
                        .map_or('.', Piece::symbol)
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(kind: PieceType) -> Piece {
        Piece::new(Color::White, kind)
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        let pos = Position::at(4, 4);

        assert_eq!(board.get(pos), None);
        board.place(pos, Some(white(PieceType::Rook)));
        assert_eq!(board.get(pos), Some(white(PieceType::Rook)));

        // Overwrite
        board.place(pos, Some(white(PieceType::Queen)));
        assert_eq!(board.get(pos), Some(white(PieceType::Queen)));
        assert_eq!(board.piece_count(), 1);

        board.place(pos, None);
        assert!(board.is_empty_at(pos));
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_standard_setup() {
        let board = Board::standard();
        let counts = board.piece_counts();

        assert_eq!(board.piece_count(), 32);
        for color in Color::ALL {
            assert_eq!(board.pieces_of(color).count(), 16);
            assert_eq!(counts[&Piece::new(color, PieceType::Pawn)], 8);
            assert_eq!(counts[&Piece::new(color, PieceType::King)], 1);
            assert_eq!(counts[&Piece::new(color, PieceType::Queen)], 1);
            assert_eq!(board.find_king(color), Some(Position::at(color.back_row(), 5)));
        }
        assert_eq!(board.get(Position::at(1, 4)), Some(white(PieceType::Queen)));
        assert_eq!(
            board.get(Position::at(8, 2)),
            Some(Piece::new(Color::Black, PieceType::Knight))
        );
    }

    #[test]
    fn test_reset_clears_extra_pieces() {
        let mut board = Board::new();
        board.place(Position::at(5, 5), Some(white(PieceType::Queen)));
        board.reset_to_standard_setup();

        assert!(board.is_empty_at(Position::at(5, 5)));
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.clear_square(Position::at(2, 5));

        assert_eq!(original.piece_count(), 32);
        assert_eq!(copy.piece_count(), 31);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_with_move_applied() {
        let board = Board::standard();
        let mv = Move::with_promotion(Position::at(2, 5), Position::at(4, 5), PieceType::Queen);
        let next = board.with_move_applied(&mv);

        assert!(next.is_empty_at(Position::at(2, 5)));
        // Kind is preserved; promotion is only applied on commit.
        assert_eq!(next.get(Position::at(4, 5)), Some(white(PieceType::Pawn)));
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_display() {
        let text = Board::standard().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[1], "pppppppp");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }

    #[test]
    fn test_serialization_round_trip() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
