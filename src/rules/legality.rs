//! Legal move filtering.
//!
//! Each pseudo-legal candidate is played on a clone of the board and kept only
//! if the mover's king is not in check afterwards. The caller's board is never
//! touched.

use log::trace;

use crate::core::{Board, Color, Move, MoveSet, Position, Result};

use super::check;
use super::movegen;

/// Legal moves of the piece on `position`.
///
/// Returns `Ok(None)` for an empty square, never an empty set. Fails with
/// `InvalidState` if the mover's color has no king on the board.
pub fn valid_moves(board: &Board, position: Position) -> Result<Option<MoveSet>> {
    let Some(piece) = board.get(position) else {
        return Ok(None);
    };

    let candidates = movegen::piece_moves(board, position);
    let mut legal = MoveSet::new();
    for mv in candidates {
        if leaves_king_safe(board, &mv, piece.color)? {
            legal.insert(mv);
        } else {
            trace!("rejecting {mv}: leaves the {} king in check", piece.color);
        }
    }
    Ok(Some(legal))
}

/// True if playing `mv` on a copy of `board` leaves the `color` king unattacked.
pub fn leaves_king_safe(board: &Board, mv: &Move, color: Color) -> Result<bool> {
    let simulated = board.with_move_applied(mv);
    Ok(!check::is_in_check(&simulated, color)?)
}

/// Every legal move of `color`, grouped by source square in row-major order.
pub fn all_valid_moves(board: &Board, color: Color) -> Result<Vec<Move>> {
    let mut out = Vec::new();
    for (from, _) in board.pieces_of(color) {
        if let Some(moves) = valid_moves(board, from)? {
            out.extend(moves);
        }
    }
    Ok(out)
}

/// True if some piece of `color` has at least one legal move.
pub fn has_any_valid_move(board: &Board, color: Color) -> Result<bool> {
    for (from, _) in board.pieces_of(color) {
        if valid_moves(board, from)?.is_some_and(|moves| !moves.is_empty()) {
            return Ok(true);
        }
    }
    Ok(false)
}
