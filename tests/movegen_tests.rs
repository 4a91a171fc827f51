//! Move generation and legality integration tests.
//!
//! These tests drive the public `GameState::valid_moves` surface with
//! hand-built positions, checking both pseudo-legal patterns and the
//! king-safety filter.

use chess_rules::rules::{self, movegen};
use chess_rules::{Board, Color, GameState, Move, Piece, PieceType, Position};

fn pos(row: i32, column: i32) -> Position {
    Position::new(row, column).unwrap()
}

fn with_kings(pieces: &[(i32, i32, Color, PieceType)]) -> Board {
    let mut board = Board::new();
    board.place(pos(1, 1), Some(Piece::new(Color::White, PieceType::King)));
    board.place(pos(8, 8), Some(Piece::new(Color::Black, PieceType::King)));
    for &(row, column, color, kind) in pieces {
        board.place(pos(row, column), Some(Piece::new(color, kind)));
    }
    board
}

// =============================================================================
// Empty Squares
// =============================================================================

/// An empty square has no move set at all, not an empty one.
#[test]
fn test_empty_square_is_none() {
    let game = GameState::new();
    for row in 3..=6 {
        for column in 1..=8 {
            assert_eq!(game.valid_moves(pos(row, column)).unwrap(), None);
        }
    }
}

// =============================================================================
// Pawns
// =============================================================================

/// Every white pawn in the opening can push one or two squares.
#[test]
fn test_white_pawn_single_and_double_push() {
    let game = GameState::new();
    for column in 1..=8 {
        let moves = game.valid_moves(pos(2, column)).unwrap().unwrap();
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos(2, column), pos(3, column))));
        assert!(moves.contains(&Move::new(pos(2, column), pos(4, column))));
    }
}

/// Black pawns advance toward row 1.
#[test]
fn test_black_pawn_direction() {
    let board = with_kings(&[(7, 4, Color::Black, PieceType::Pawn)]);
    let game = GameState::from_board(board, Color::Black);
    let moves = game.valid_moves(pos(7, 4)).unwrap().unwrap();

    assert!(moves.contains(&Move::new(pos(7, 4), pos(6, 4))));
    assert!(moves.contains(&Move::new(pos(7, 4), pos(5, 4))));
    assert_eq!(moves.len(), 2);
}

/// A black pawn reaching row 1 promotes, including on captures.
#[test]
fn test_black_pawn_promotion_captures() {
    let board = with_kings(&[
        (2, 7, Color::Black, PieceType::Pawn),
        (1, 6, Color::White, PieceType::Rook),
        (1, 7, Color::White, PieceType::Knight),
    ]);
    let moves = rules::valid_moves(&board, pos(2, 7)).unwrap().unwrap();

    // Blocked forward; captures to f1 only (h1 is empty).
    assert_eq!(moves.len(), 4);
    for kind in PieceType::PROMOTIONS {
        assert!(moves.contains(&Move::with_promotion(pos(2, 7), pos(1, 6), kind)));
    }
}

// =============================================================================
// Sliders
// =============================================================================

/// The rook's walk includes the capture square and stops there.
#[test]
fn test_rook_stops_after_capture() {
    let board = with_kings(&[
        (4, 4, Color::White, PieceType::Rook),
        (4, 7, Color::Black, PieceType::Bishop),
    ]);
    let moves = rules::valid_moves(&board, pos(4, 4)).unwrap().unwrap();

    assert!(moves.contains(&Move::new(pos(4, 4), pos(4, 5))));
    assert!(moves.contains(&Move::new(pos(4, 4), pos(4, 6))));
    assert!(moves.contains(&Move::new(pos(4, 4), pos(4, 7))));
    assert!(!moves.contains(&Move::new(pos(4, 4), pos(4, 8))));
}

/// A bishop never changes square color.
#[test]
fn test_bishop_stays_on_color() {
    let board = with_kings(&[(3, 6, Color::White, PieceType::Bishop)]);
    let parity = (3 + 6) % 2;
    let moves = movegen::piece_moves(&board, pos(3, 6));

    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| (m.end.row() + m.end.column()) % 2 == parity));
}

/// The queen's moves are exactly the rook's plus the bishop's.
#[test]
fn test_queen_is_rook_plus_bishop() {
    let blockers = [(4, 7, Color::Black, PieceType::Pawn), (6, 2, Color::White, PieceType::Pawn)];
    let mut count = 0;
    for kind in [PieceType::Rook, PieceType::Bishop] {
        let mut pieces = blockers.to_vec();
        pieces.push((4, 4, Color::White, kind));
        count += movegen::piece_moves(&with_kings(&pieces), pos(4, 4)).len();
    }

    let mut pieces = blockers.to_vec();
    pieces.push((4, 4, Color::White, PieceType::Queen));
    assert_eq!(movegen::piece_moves(&with_kings(&pieces), pos(4, 4)).len(), count);
}

// =============================================================================
// King Safety
// =============================================================================

/// Kings may not move next to each other.
#[test]
fn test_kings_keep_distance() {
    let mut board = Board::new();
    board.place(pos(4, 4), Some(Piece::new(Color::White, PieceType::King)));
    board.place(pos(4, 6), Some(Piece::new(Color::Black, PieceType::King)));

    let moves = rules::valid_moves(&board, pos(4, 4)).unwrap().unwrap();
    assert!(moves.iter().all(|m| m.end.column() != 5));
    assert_eq!(moves.len(), 5);
}

/// A king may capture an undefended attacker but not a defended one.
#[test]
fn test_king_captures_only_undefended() {
    let board = with_kings(&[(2, 2, Color::Black, PieceType::Queen)]);
    let moves = rules::valid_moves(&board, pos(1, 1)).unwrap().unwrap();
    assert_eq!(moves.destinations().collect::<Vec<_>>(), vec![pos(2, 2)]);

    let board = with_kings(&[
        (2, 2, Color::Black, PieceType::Queen),
        (4, 4, Color::Black, PieceType::Bishop),
    ]);
    let moves = rules::valid_moves(&board, pos(1, 1)).unwrap().unwrap();
    assert!(moves.is_empty());
}

/// Legal moves are always a subset of pseudo-legal moves.
#[test]
fn test_legal_subset_of_pseudo_legal() {
    let game = GameState::new();
    for (from, _) in game.board().pieces() {
        let pseudo = movegen::piece_moves(game.board(), from);
        let legal = game.valid_moves(from).unwrap().unwrap();
        assert!(legal.iter().all(|m| pseudo.contains(m)));
    }
}
