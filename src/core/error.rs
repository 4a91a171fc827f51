//! Error taxonomy for the rules engine.
//!
//! Every failure is raised synchronously at the point of violation and
//! propagated to the caller with `?`. There are three kinds:
//!
//! - `InvalidArgument`: malformed input, e.g. a coordinate outside 1..=8.
//! - `InvalidMove`: `make_move` was asked to play something that is not legal
//!   for the side to move.
//! - `InvalidState`: a king-dependent query ran against a board without a king
//!   of the queried color. This is a precondition violation, not a game outcome.

use thiserror::Error;

use super::color::Color;
use super::moves::Move;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ChessError>;

/// Domain errors for the chess rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Malformed input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A move rejected by `make_move`.
    #[error("invalid move {mv}: {reason}")]
    InvalidMove {
        /// The rejected move.
        mv: Move,
        /// Why it was rejected.
        reason: MoveRejection,
    },

    /// The board lacks a king of the queried color.
    #[error("invalid state: no {0} king on the board")]
    InvalidState(Color),
}

impl ChessError {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for an `InvalidMove` error.
    #[must_use]
    pub fn invalid_move(mv: Move, reason: MoveRejection) -> Self {
        Self::InvalidMove { mv, reason }
    }

    /// True for `InvalidMove`.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Self::InvalidMove { .. })
    }
}

/// Reason a move was rejected by `make_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// Nothing stands on the start square.
    #[error("no piece at the start square")]
    NoPiece,

    /// The piece belongs to the side not on move.
    #[error("it is {0}'s turn")]
    WrongTurn(Color),

    /// The move is not in the piece's legal move set.
    #[error("not a legal move for this piece")]
    NotLegal,
}
