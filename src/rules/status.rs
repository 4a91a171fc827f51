//! Game status evaluation: check, checkmate, stalemate.
//!
//! Both terminal predicates are defined purely by the legal move count:
//! - checkmate: in check and no legal move for any piece of that color;
//! - stalemate: not in check and no legal move for any piece of that color.
//!
//! Repetition and fifty-move draws are not modeled.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, Result};

use super::check;
use super::legality;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side won.
    Winner(Color),
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        match self {
            GameResult::Winner(c) => *c == color,
            GameResult::Draw => false,
        }
    }
}

/// Status of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check(Color),
    /// In check with no legal move.
    Checkmate {
        /// The mated side.
        loser: Color,
    },
    /// Not in check with no legal move.
    Stalemate(Color),
}

impl GameStatus {
    /// True for checkmate and stalemate.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate(_))
    }

    /// Final result, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Checkmate { loser } => Some(GameResult::Winner(loser.opposite())),
            GameStatus::Stalemate(_) => Some(GameResult::Draw),
            GameStatus::Ongoing | GameStatus::Check(_) => None,
        }
    }
}

/// True if `color` is in check and has no legal move.
pub fn is_in_checkmate(board: &Board, color: Color) -> Result<bool> {
    if !check::is_in_check(board, color)? {
        return Ok(false);
    }
    Ok(!legality::has_any_valid_move(board, color)?)
}

/// True if `color` is not in check and has no legal move.
pub fn is_in_stalemate(board: &Board, color: Color) -> Result<bool> {
    if check::is_in_check(board, color)? {
        return Ok(false);
    }
    Ok(!legality::has_any_valid_move(board, color)?)
}

/// Status of `to_move` on `board`.
pub fn evaluate(board: &Board, to_move: Color) -> Result<GameStatus> {
    let in_check = check::is_in_check(board, to_move)?;
    let can_move = legality::has_any_valid_move(board, to_move)?;

    Ok(match (in_check, can_move) {
        (true, true) => GameStatus::Check(to_move),
        (true, false) => GameStatus::Checkmate { loser: to_move },
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate(to_move),
    })
}
