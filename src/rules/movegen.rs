//! Pseudo-legal move generation.
//!
//! `piece_moves` lists every move consistent with a piece's movement pattern
//! and the board's occupancy, without asking whether the mover's own king ends
//! up attacked. That question is answered by `rules::legality`.
//!
//! Moves come out in a fixed order: direction tables below are walked in
//! declaration order, and pawn promotions follow `PieceType::PROMOTIONS`.

use crate::core::{Board, Color, Move, MoveSet, Piece, PieceType, Position};

/// Unit steps for rooks.
pub const ROOK_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps for bishops.
pub const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Unit steps for queens: rook steps, then bishop steps.
pub const QUEEN_DIRS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight jumps.
pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King steps.
pub const KING_STEPS: [(i32, i32); 8] = QUEEN_DIRS;

/// Pseudo-legal moves of the piece on `position`. Empty if the square is empty.
#[must_use]
pub fn piece_moves(board: &Board, position: Position) -> MoveSet {
    let mut moves = MoveSet::new();
    if let Some(piece) = board.get(position) {
        generate(board, position, piece, &mut moves);
    }
    moves
}

/// Append the pseudo-legal moves of `piece` standing on `from` to `moves`.
pub fn generate(board: &Board, from: Position, piece: Piece, moves: &mut MoveSet) {
    match piece.kind {
        PieceType::Pawn => generate_pawn_moves(board, from, piece.color, moves),
        PieceType::Knight => generate_leaper_moves(board, from, piece.color, &KNIGHT_DELTAS, moves),
        PieceType::King => generate_leaper_moves(board, from, piece.color, &KING_STEPS, moves),
        PieceType::Rook => generate_slider_moves(board, from, piece.color, &ROOK_DIRS, moves),
        PieceType::Bishop => generate_slider_moves(board, from, piece.color, &BISHOP_DIRS, moves),
        PieceType::Queen => generate_slider_moves(board, from, piece.color, &QUEEN_DIRS, moves),
    }
}

fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut MoveSet) {
    let step = color.forward();

    if let Some(one_step) = from.offset(step, 0) {
        if board.is_empty_at(one_step) {
            push_pawn_move(moves, from, one_step, color);

            if from.row() == color.pawn_row() {
                if let Some(two_step) = from.offset(2 * step, 0) {
                    if board.is_empty_at(two_step) {
                        moves.insert(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for column_delta in [-1, 1] {
        let Some(target) = from.offset(step, column_delta) else {
            continue;
        };
        if let Some(occupant) = board.get(target) {
            if occupant.color != color {
                push_pawn_move(moves, from, target, color);
            }
        }
    }
}

/// A pawn move, expanded into the four promotions on the last row.
fn push_pawn_move(moves: &mut MoveSet, from: Position, to: Position, color: Color) {
    if to.row() == color.promotion_row() {
        for kind in PieceType::PROMOTIONS {
            moves.insert(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}

fn generate_leaper_moves(
    board: &Board,
    from: Position,
    color: Color,
    deltas: &[(i32, i32)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_column) in deltas {
        let Some(to) = from.offset(d_row, d_column) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color == color => {}
            _ => {
                moves.insert(Move::new(from, to));
            }
        }
    }
}

fn generate_slider_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i32, i32)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_column) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_column) {
            if let Some(occupant) = board.get(to) {
                if occupant.color != color {
                    moves.insert(Move::new(from, to));
                }
                break;
            }
            moves.insert(Move::new(from, to));
            cursor = to;
        }
    }
}
