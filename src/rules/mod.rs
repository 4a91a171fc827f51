//! Pure rule functions over a `Board`.
//!
//! - `movegen`: pseudo-legal moves per piece type
//! - `check`: is a side's king attacked
//! - `legality`: pseudo-legal moves that keep the mover's king safe
//! - `status`: check, checkmate and stalemate evaluation
//!
//! None of these mutate the board they are given. Simulation always happens
//! on a clone.

pub mod movegen;
pub mod check;
pub mod legality;
pub mod status;

pub use movegen::piece_moves;
pub use check::{is_attacked_by, is_in_check, king_position};
pub use legality::{all_valid_moves, has_any_valid_move, valid_moves};
pub use status::{evaluate, is_in_checkmate, is_in_stalemate, GameResult, GameStatus};
