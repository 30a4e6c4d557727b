//! Error types for the rule engine.
//!
//! Illegal placements are not errors: `GameEngine::play_move` reports them
//! as `Ok(false)`. Everything here is either a configuration mistake or a
//! protocol violation by the caller.

use derive_more::{Display, Error};

use super::state::GameStatus;
use crate::game::GameMode;

/// Why a pie-rule swap was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum PieRuleRefusal {
    /// The swap was already used, or White placed a stone instead.
    #[display("pie rule is no longer available")]
    AlreadyUsed,
    /// Only White may swap.
    #[display("only White may apply the pie rule")]
    NotWhitesTurn,
}

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board size must be a positive integer.
    #[display("invalid board size {size}: boards must have at least one cell per side")]
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },

    /// A mutating call was made after the game ended.
    #[display("game has already ended ({status})")]
    GameOver {
        /// Terminal status at the time of the call.
        status: GameStatus,
    },

    /// The pie rule cannot be applied right now.
    #[display("cannot apply pie rule: {reason}")]
    PieRuleUnavailable {
        /// Which eligibility condition failed.
        reason: PieRuleRefusal,
    },

    /// The requested game mode has no engine.
    #[display("game mode '{mode}' is not supported")]
    UnsupportedMode {
        /// The requested mode.
        mode: GameMode,
    },

    /// The engine-owner thread has stopped.
    #[display("game session is closed")]
    SessionClosed,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
