//! Game state: board, turn, status, pie-rule flag and move history.
//!
//! ## Lifecycle
//!
//! A new state has an empty board, Black to move, status `InProgress`,
//! the pie rule available and no history. It becomes terminal through
//! [`GameState::declare_winner`] or [`GameState::abort`].
//!
//! ## Invariants
//!
//! - `pie_rule_available` only goes from true to false.
//! - `current_player` is always `Black` or `White`. It changes only through
//!   [`GameState::switch_player`].
//! - History is append-only.
//!
//! History is an `im::Vector`, so cloning a state for a snapshot is cheap
//! apart from the board itself.

use im::Vector;
use tracing::info;

use super::action::Move;
use super::board::Board;
use super::error::{GameError, PieRuleRefusal, Result};
use super::stone::Stone;

/// Overall game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are still being played.
    InProgress,
    /// Black connected top to bottom.
    BlackWon,
    /// White connected left to right.
    WhiteWon,
    /// A player quit or the input stream closed.
    Aborted,
}

impl GameStatus {
    /// True for every status except `InProgress`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning color, or `Empty` if nobody won.
    #[must_use]
    pub fn winner(self) -> Stone {
        match self {
            GameStatus::BlackWon => Stone::Black,
            GameStatus::WhiteWon => Stone::White,
            GameStatus::InProgress | GameStatus::Aborted => Stone::Empty,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::BlackWon => write!(f, "Black won"),
            GameStatus::WhiteWon => write!(f, "White won"),
            GameStatus::Aborted => write!(f, "aborted"),
        }
    }
}

/// Mutable game aggregate.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    status: GameStatus,
    pie_rule_available: bool,
    history: Vector<Move>,
}

impl GameState {
    /// Create a fresh game on an empty `board_size`×`board_size` board.
    pub fn new(board_size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(board_size)?,
            current_player: Stone::Black,
            status: GameStatus::InProgress,
            pie_rule_available: true,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for rule implementations.
    ///
    /// Writing through this bypasses move validation and history.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while the game accepts moves.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Can White still swap colors?
    #[must_use]
    pub fn is_pie_rule_available(&self) -> bool {
        self.pie_rule_available
    }

    /// Winner's color, or `Empty` while in progress or after an abort.
    #[must_use]
    pub fn winner(&self) -> Stone {
        self.status.winner()
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    // === Transitions ===

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    /// Append a processed move to history.
    pub fn record_move(&mut self, mv: Move) {
        self.history.push_back(mv);
    }

    /// Permanently disable the pie rule. Idempotent.
    pub fn turn_off_pie_rule(&mut self) {
        self.pie_rule_available = false;
    }

    /// Mark `stone` as the winner. Ignored for `Empty` and once the game is over.
    pub fn declare_winner(&mut self, stone: Stone) {
        if self.status.is_terminal() {
            return;
        }
        match stone {
            Stone::Black => self.status = GameStatus::BlackWon,
            Stone::White => self.status = GameStatus::WhiteWon,
            Stone::Empty => return,
        }
        info!(winner = %stone, moves = self.history.len(), "game won");
    }

    /// End the game without a winner.
    pub fn abort(&mut self) {
        self.status = GameStatus::Aborted;
        info!(moves = self.history.len(), "game aborted");
    }

    /// Swap every stone on the board to the other color.
    ///
    /// Allowed only while the game is in progress, the pie rule is still
    /// available and White is to move. The pie rule is disabled afterwards
    /// and the current player is left unchanged.
    pub fn apply_pie_rule(&mut self) -> Result<()> {
        if !self.is_in_progress() {
            return Err(GameError::GameOver { status: self.status });
        }
        if !self.pie_rule_available {
            return Err(GameError::PieRuleUnavailable { reason: PieRuleRefusal::AlreadyUsed });
        }
        if self.current_player != Stone::White {
            return Err(GameError::PieRuleUnavailable { reason: PieRuleRefusal::NotWhitesTurn });
        }

        self.board.swap_colors();
        self.turn_off_pie_rule();
        info!(moves = self.history.len(), "pie rule applied, colors swapped");
        Ok(())
    }
}
