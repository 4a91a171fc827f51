//! # chess-rules
//!
//! A chess rules engine: board state, per-piece move generation, king-safety
//! legality filtering, and check/checkmate/stalemate evaluation.
//!
//! ## Design Principles
//!
//! 1. **Data apart from rules**: `Board` and `GameState` hold state; the
//!    functions in `rules` are pure and take only the board they inspect.
//!
//! 2. **Simulate on clones**: every candidate move is tested on a copy of the
//!    board. Queries never change the caller's board; only
//!    `GameState::make_move` commits.
//!
//! 3. **Explicit preconditions**: king-dependent queries require a king of the
//!    queried color and fail with `ChessError::InvalidState` otherwise.
//!
//! ## Scope
//!
//! Castling, en passant, and repetition or fifty-move draws are not modeled.
//!
//! ## Modules
//!
//! - `core`: positions, pieces, board, moves, configuration, errors
//! - `rules`: move generation, check detection, legality, status
//! - `game`: the live `GameState`
//!
//! ## Example
//!
//! ```
//! use chess_rules::{Color, GameState, Move, Position};
//!
//! let mut game = GameState::new();
//! let e2 = Position::new(2, 5).unwrap();
//! let e4 = Position::new(4, 5).unwrap();
//!
//! game.make_move(Move::new(e2, e4)).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(!game.is_in_check(Color::Black).unwrap());
//! ```

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, ChessError, Color, ColorMap, GameConfig, Move, MoveRecord, MoveRejection, MoveSet, Piece,
    PieceType, Position, Result, Setup,
};

pub use crate::rules::{GameResult, GameStatus};

pub use crate::game::GameState;
