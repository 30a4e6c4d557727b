//! Game modes and the engine factory.

use tracing::debug;

use super::engine::GameEngine;
use crate::core::{GameConfig, GameError, Result};

/// Who plays the other side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Two players sharing one engine.
    #[default]
    Local,
    /// Remote opponent. No engine yet.
    Online,
    /// Computer opponent. No engine yet.
    VsBot,
}

impl GameMode {
    /// Every mode, in menu order.
    pub const ALL: [GameMode; 3] = [GameMode::Local, GameMode::Online, GameMode::VsBot];

    /// Label for menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GameMode::Local => "1 vs 1 (Local)",
            GameMode::Online => "Online",
            GameMode::VsBot => "vs Bot",
        }
    }

    /// Does this mode have an engine?
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, GameMode::Local)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Build an engine for `config`.
///
/// Fails with [`GameError::UnsupportedMode`] for modes without an engine,
/// and with [`GameError::InvalidBoardSize`] for a zero board size.
pub fn create_engine(config: &GameConfig) -> Result<GameEngine> {
    if !config.mode.is_supported() {
        return Err(GameError::UnsupportedMode { mode: config.mode });
    }
    debug!(
        size = config.board_size,
        rules = %config.rule_type,
        mode = %config.mode,
        "creating engine"
    );
    GameEngine::from_config(config)
}
