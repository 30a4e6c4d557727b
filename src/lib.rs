//! # brique
//!
//! Rule engine for Brique, a two-player connection game on an N×N board.
//!
//! ## Rules in brief
//!
//! - Black moves first and wins by joining the top and bottom edges with an
//!   orthogonally connected chain; White does the same between left and
//!   right.
//! - Each cell has two **escorts** fixed by checkerboard parity. After every
//!   placement, any cell whose two escorts hold the mover's color is filled
//!   with that color. Filling over an opponent stone is a **capture**.
//! - On White's first turn, White may apply the **pie rule** instead of
//!   placing: every stone on the board changes color.
//!
//! ## Modules
//!
//! - `core`: Stones, positions, board, moves, game state, config, errors
//! - `rules`: `GameRules` trait and the standard rule set
//! - `game`: `GameEngine` turn orchestration and the game-mode factory
//! - `session`: Engine-owner thread fed by an intent channel
//!
//! ## Example
//!
//! ```
//! use brique::{GameEngine, Position, Stone};
//!
//! let mut engine = GameEngine::new(3).unwrap();
//! for (row, col) in [(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)] {
//!     assert!(engine.play_move(Position::new(row, col)).unwrap());
//! }
//! assert!(engine.is_game_over());
//! assert_eq!(engine.winner(), Stone::Black);
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Edge, GameConfig, GameError, GameState, GameStatus, Move, PieRuleRefusal, Position,
    Result, Stone,
};

pub use crate::rules::{create_rules, GameRules, RuleType, StandardRules};

pub use crate::game::{create_engine, GameEngine, GameMode};

pub use crate::session::{Intent, IntentOutcome, Session, SessionHandle};
