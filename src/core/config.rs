//! Game configuration.
//!
//! Board size is the only parameter a shell normally supplies. Rule set and
//! game mode exist so new variants can be selected without touching the engine.

use super::error::{GameError, Result};
use crate::game::GameMode;
use crate::rules::RuleType;

/// Default side length.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Settings for a new game.
///
/// ```
/// use brique::core::GameConfig;
///
/// let config = GameConfig::default().with_board_size(9);
/// assert_eq!(config.board_size, 9);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::default().with_board_size(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board. Must be positive.
    pub board_size: usize,

    /// Rule set used by the engine.
    pub rule_type: RuleType,

    /// Who sits on the other side of the board.
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            rule_type: RuleType::Standard,
            mode: GameMode::Local,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the rule set.
    #[must_use]
    pub fn with_rule_type(mut self, rule_type: RuleType) -> Self {
        self.rule_type = rule_type;
        self
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject configurations no board can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(GameError::InvalidBoardSize { size: self.board_size });
        }
        Ok(())
    }
}
