//! Rules trait and rule-set registry.
//!
//! Rule sets implement `GameRules` to define:
//! - Which placements are legal
//! - How a placement changes the board
//! - When a player has won
//!
//! The engine calls into `GameRules` but never interprets board geometry
//! itself.

use crate::core::{Board, GameState, Move, Position, Stone};

use super::escort::Escorts;
use super::standard::StandardRules;

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `is_valid_move` must not consider whether the game is over; the
///   engine checks that first.
/// - `process_move` is only called on moves `is_valid_move` accepted. It
///   applies every side effect in one call and returns the move annotated
///   with them.
/// - Implementations hold no per-game state.
pub trait GameRules: std::fmt::Debug + Send {
    /// Is `mv` a legal placement in `state`?
    fn is_valid_move(&self, state: &GameState, mv: &Move) -> bool;

    /// Apply `mv` to the board and return it with its fills and captures.
    fn process_move(&self, state: &mut GameState, mv: Move) -> Move;

    /// Has `player` connected their two edges?
    fn check_win_condition(&self, state: &GameState, player: Stone) -> bool;

    /// On-board escorts of `position`.
    fn escorts(&self, position: Position, board: &Board) -> Escorts;
}

/// Available rule sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// Standard Brique rules: single-pass escort fills, edge connection wins.
    #[default]
    Standard,
}

impl RuleType {
    /// Every registered rule set.
    pub const ALL: [RuleType; 1] = [RuleType::Standard];
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleType::Standard => write!(f, "standard"),
        }
    }
}

/// Build the rules object for `rule_type`.
#[must_use]
pub fn create_rules(rule_type: RuleType) -> Box<dyn GameRules> {
    match rule_type {
        RuleType::Standard => Box::new(StandardRules::new()),
    }
}
