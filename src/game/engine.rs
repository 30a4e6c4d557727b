//! Turn orchestration.
//!
//! `GameEngine` runs one full turn per call: validate, apply, record,
//! check for a win, retire the pie rule if White placed instead of
//! swapping, and hand over the turn.
//!
//! Status transitions: `InProgress → {BlackWon, WhiteWon, Aborted}`.
//! Terminal states are final; any further `play_move` or `apply_pie_rule`
//! fails with [`GameError::GameOver`].

use tracing::{debug, instrument};

use crate::core::{GameConfig, GameError, GameState, Move, Position, Result, Stone};
use crate::rules::{create_rules, GameRules};

/// Drives a single game.
///
/// ```
/// use brique::game::GameEngine;
/// use brique::core::{Position, Stone};
///
/// let mut engine = GameEngine::new(3).unwrap();
/// assert!(engine.play_move(Position::new(1, 1)).unwrap());
/// assert_eq!(engine.state().current_player(), Stone::White);
///
/// // occupied: rejected, nothing changes
/// assert!(!engine.play_move(Position::new(1, 1)).unwrap());
/// assert_eq!(engine.state().move_count(), 1);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    rules: Box<dyn GameRules>,
}

impl GameEngine {
    /// Standard rules on a `board_size`×`board_size` board.
    pub fn new(board_size: usize) -> Result<Self> {
        Self::from_config(&GameConfig::default().with_board_size(board_size))
    }

    /// Engine for the board size and rule set in `config`.
    ///
    /// The game mode is not consulted here; see
    /// [`create_engine`](super::create_engine).
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::with_rules(config.board_size, create_rules(config.rule_type))
    }

    /// Engine using a caller-supplied rule set.
    pub fn with_rules(board_size: usize, rules: Box<dyn GameRules>) -> Result<Self> {
        Ok(Self {
            state: GameState::new(board_size)?,
            rules,
        })
    }

    /// Read access for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active rule set.
    #[must_use]
    pub fn rules(&self) -> &dyn GameRules {
        self.rules.as_ref()
    }

    /// Place the current player's stone at `position`.
    ///
    /// Returns `Ok(false)` for an illegal placement (off the board or
    /// occupied); board, history and turn are then untouched. Returns
    /// `Ok(true)` once the move has been applied, whether or not it won.
    ///
    /// Fails with [`GameError::GameOver`] if the game has already ended.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play_move(&mut self, position: Position) -> Result<bool> {
        self.ensure_in_progress()?;

        let player = self.state.current_player();
        let mv = Move::new(position, player);

        if !self.rules.is_valid_move(&self.state, &mv) {
            debug!(%position, "illegal move rejected");
            return Ok(false);
        }

        let mv = self.rules.process_move(&mut self.state, mv);
        self.state.record_move(mv);

        if self.rules.check_win_condition(&self.state, player) {
            self.state.declare_winner(player);
            return Ok(true);
        }

        if player == Stone::White && self.state.is_pie_rule_available() {
            self.state.turn_off_pie_rule();
        }

        self.state.switch_player();
        Ok(true)
    }

    /// Swap colors instead of placing a stone.
    ///
    /// See [`GameState::apply_pie_rule`] for the eligibility rules.
    #[instrument(skip(self))]
    pub fn apply_pie_rule(&mut self) -> Result<()> {
        self.state.apply_pie_rule()
    }

    /// End the game without a winner (player quit, input closed).
    #[instrument(skip(self))]
    pub fn abort(&mut self) {
        self.state.abort();
    }

    /// True once the game has a winner or was aborted.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.state.is_in_progress()
    }

    /// Winner's color, `Empty` if none.
    #[must_use]
    pub fn winner(&self) -> Stone {
        self.state.winner()
    }

    /// Give up the engine and keep the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.state.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::GameOver { status: self.state.status() })
        }
    }
}
