//! The owning game object.
//!
//! `GameState` ties a live `Board` to the side to move and exposes the public
//! operations collaborators (UIs, transports, storage) build on.

pub mod state;

pub use state::GameState;
