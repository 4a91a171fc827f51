//! The live game: one board plus the side to move.
//!
//! ## GameState
//!
//! Owns exactly one `Board` and one side-to-move flag. Queries delegate to
//! the pure functions in `rules` and never mutate the board. The only ways to
//! change state are:
//! - `make_move`, which validates, commits and flips the turn;
//! - `set_board` / `set_turn`, for injecting positions in tests and
//!   simulations.
//!
//! The engine does no locking. Callers sharing a `GameState` across threads
//! must serialize access themselves.

use im::Vector;
use log::debug;

use crate::core::{
    Board, ChessError, Color, ColorMap, GameConfig, Move, MoveRecord, MoveRejection, MoveSet, Piece,
    PieceType, Position, Result,
};
use crate::rules::{self, GameStatus};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,

    /// Side to move.
    turn: Color,

    /// Committed moves, oldest first. Empty when history is disabled.
    history: Vector<MoveRecord>,

    /// Pieces of each color removed by captures, in capture order.
    captured: ColorMap<Vec<Piece>>,

    /// Number of moves committed through `make_move`.
    ply: u32,

    record_history: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game in the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A new game as described by `config`.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: config.setup.build(),
            turn: config.first_turn,
            history: Vector::new(),
            captured: ColorMap::default(),
            ply: 0,
            record_history: config.record_history,
        }
    }

    /// A game on `board` with `turn` to move.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self::with_config(GameConfig::new().with_board(board).with_first_turn(turn))
    }

    // === Turn ===

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Override the side to move.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    // === Board ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the live board. History and captures are left as they are.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    // === Queries ===

    /// Legal moves of the piece on `position`, or `None` if the square is empty.
    pub fn valid_moves(&self, position: Position) -> Result<Option<MoveSet>> {
        rules::valid_moves(&self.board, position)
    }

    /// Every legal move of `color`.
    pub fn all_valid_moves(&self, color: Color) -> Result<Vec<Move>> {
        rules::all_valid_moves(&self.board, color)
    }

    /// True if the `color` king is attacked.
    pub fn is_in_check(&self, color: Color) -> Result<bool> {
        rules::is_in_check(&self.board, color)
    }

    /// True if `color` is in check with no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> Result<bool> {
        rules::is_in_checkmate(&self.board, color)
    }

    /// True if `color` is not in check and has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> Result<bool> {
        rules::is_in_stalemate(&self.board, color)
    }

    /// Status of the side to move.
    pub fn status(&self) -> Result<GameStatus> {
        rules::evaluate(&self.board, self.turn)
    }

    // === State Transition ===

    /// Validate and commit `mv`, then pass the turn.
    ///
    /// Fails with `InvalidMove` if the start square is empty, holds a piece of
    /// the side not on move, or `mv` is not among that piece's legal moves.
    /// A rejected move leaves the game unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        let piece = self
            .board
            .get(mv.start)
            .ok_or_else(|| self.reject(mv, MoveRejection::NoPiece))?;
        if piece.color != self.turn {
            return Err(self.reject(mv, MoveRejection::WrongTurn(self.turn)));
        }

        if mv.promotion.is_some_and(|kind| !kind.is_promotion_target()) {
            return Err(self.reject(mv, MoveRejection::NotLegal));
        }

        let legal = self.valid_moves(mv.start)?.unwrap_or_default();
        if !legal.contains(&mv) {
            return Err(self.reject(mv, MoveRejection::NotLegal));
        }

        let placed = match mv.promotion {
            Some(kind) if piece.kind == PieceType::Pawn => Piece::new(piece.color, kind),
            _ => piece,
        };
        let captured = self.board.get(mv.end);

        self.board.clear_square(mv.start);
        self.board.place(mv.end, Some(placed));
        self.ply += 1;

        if let Some(victim) = captured {
            self.captured[victim.color].push(victim);
        }
        if self.record_history {
            self.history
                .push_back(MoveRecord::new(self.ply, self.turn, mv, piece, captured));
        }

        debug!("ply {}: {} played {mv}", self.ply, self.turn);
        self.turn = self.turn.opposite();
        Ok(())
    }

    fn reject(&self, mv: Move, reason: MoveRejection) -> ChessError {
        debug!("rejected {mv} with {} to move: {reason}", self.turn);
        ChessError::invalid_move(mv, reason)
    }

    // === History ===

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent committed move, if history is recorded.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Pieces of `color` that have been captured.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color]
    }

    /// Number of moves committed so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }
}
