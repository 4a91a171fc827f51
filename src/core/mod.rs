//! Core engine types: positions, pieces, board, moves, configuration, errors.
//!
//! Everything here is plain data. Movement and king-safety rules live in
//! `rules`; the owning game object lives in `game`.

pub mod color;
pub mod position;
pub mod piece;
pub mod board;
pub mod moves;
pub mod config;
pub mod error;

pub use color::{Color, ColorMap};
pub use position::{Position, BOARD_SIZE};
pub use piece::{Piece, PieceType};
pub use board::Board;
pub use moves::{Move, MoveRecord, MoveSet};
pub use config::{GameConfig, Setup};
pub use error::{ChessError, MoveRejection, Result};
