//! Core types: stones, positions, the board, moves, game state, configuration.
//!
//! Nothing here knows the rules. [`GameState`] owns the mutation entry
//! points the engine drives; the rules decide when to call them.

pub mod stone;
pub mod position;
pub mod board;
pub mod action;
pub mod state;
pub mod config;
pub mod error;

pub use stone::Stone;
pub use position::Position;
pub use board::{Board, Edge};
pub use action::{Move, PositionList};
pub use state::{GameState, GameStatus};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
pub use error::{GameError, PieRuleRefusal, Result};
