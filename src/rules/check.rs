//! Check detection.
//!
//! A side is in check when its king's square is the destination of some
//! pseudo-legal move of an opposing piece. The board must hold a king of the
//! queried color; a missing king is reported as `InvalidState`.

use crate::core::{Board, ChessError, Color, MoveSet, Position, Result};

use super::movegen;

/// Where the king of `color` stands, or `InvalidState` if there is none.
pub fn king_position(board: &Board, color: Color) -> Result<Position> {
    board.find_king(color).ok_or(ChessError::InvalidState(color))
}

/// True if the king of `color` is attacked on `board`.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool> {
    let king = king_position(board, color)?;
    Ok(is_attacked_by(board, king, color.opposite()))
}

/// True if any piece of `attacker` has a pseudo-legal move ending on `target`.
#[must_use]
pub fn is_attacked_by(board: &Board, target: Position, attacker: Color) -> bool {
    board.pieces_of(attacker).any(|(from, piece)| {
        let mut moves = MoveSet::new();
        movegen::generate(board, from, piece, &mut moves);
        moves.reaches(target)
    })
}
