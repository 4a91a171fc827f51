//! Game configuration.
//!
//! `GameConfig` decides how a `GameState` starts:
//! - `setup`: which pieces are on the board (standard, empty, or a given board)
//! - `first_turn`: which side moves first
//! - `record_history`: whether committed moves are kept as `MoveRecord`s
//!
//! The defaults reproduce a normal game: standard layout, White to move,
//! history on.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::Color;

/// Initial piece layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Setup {
    /// The 32-piece starting position.
    #[default]
    Standard,
    /// No pieces. Callers place pieces through `GameState::set_board`.
    Empty,
    /// A caller-supplied position.
    Custom(Board),
}

impl Setup {
    /// Build the board this setup describes.
    #[must_use]
    pub fn build(&self) -> Board {
        match self {
            Setup::Standard => Board::standard(),
            Setup::Empty => Board::new(),
            Setup::Custom(board) => board.clone(),
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use chess_rules::core::{Color, GameConfig, Setup};
///
/// let config = GameConfig::new()
///     .with_setup(Setup::Empty)
///     .with_first_turn(Color::Black)
///     .without_history();
///
/// assert_eq!(config.first_turn, Color::Black);
/// assert!(!config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side to move when the game starts.
    pub first_turn: Color,

    /// Initial layout.
    pub setup: Setup,

    /// Keep a `MoveRecord` for every committed move.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_turn: Color::White,
            setup: Setup::Standard,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial layout.
    #[must_use]
    pub fn with_setup(mut self, setup: Setup) -> Self {
        self.setup = setup;
        self
    }

    /// Start from a given board.
    #[must_use]
    pub fn with_board(self, board: Board) -> Self {
        self.with_setup(Setup::Custom(board))
    }

    /// Set the side to move first.
    #[must_use]
    pub fn with_first_turn(mut self, color: Color) -> Self {
        self.first_turn = color;
        self
    }

    /// Do not record move history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, PieceType, Position};

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.first_turn, Color::White);
        assert_eq!(config.setup, Setup::Standard);
        assert!(config.record_history);
    }

    #[test]
    fn test_setup_build() {
        assert_eq!(Setup::Standard.build(), Board::standard());
        assert_eq!(Setup::Empty.build().piece_count(), 0);

        let mut board = Board::new();
        board.place(Position::at(1, 1), Some(Piece::new(Color::White, PieceType::King)));
        assert_eq!(Setup::Custom(board.clone()).build(), board);
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::new()
            .with_board(Board::new())
            .with_first_turn(Color::Black);

        assert_eq!(config.setup, Setup::Custom(Board::new()));
        assert_eq!(config.first_turn, Color::Black);
        assert!(config.record_history);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_first_turn(Color::Black).without_history();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
