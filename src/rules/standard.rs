//! Standard Brique rules.

use tracing::debug;

use crate::core::{Board, GameState, Move, Position, Stone};

use super::connect::{connects, goal_edges};
use super::escort::{apply_fills, cells_to_fill, escorts_of, Escorts};
use super::traits::GameRules;

/// The standard rule set.
///
/// A placement is legal on any empty cell by the player to move. After the
/// stone lands, one row-major scan finds every cell whose two escorts hold
/// the mover's color, and all of them are filled. Fills made by that scan
/// do not trigger a second scan within the same move.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl StandardRules {
    /// Create the rule set.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GameRules for StandardRules {
    fn is_valid_move(&self, state: &GameState, mv: &Move) -> bool {
        let board = state.board();
        board.get(mv.position()) == Some(Stone::Empty) && mv.stone() == state.current_player()
    }

    fn process_move(&self, state: &mut GameState, mut mv: Move) -> Move {
        let board = state.board_mut();
        board.set_stone(mv.position(), mv.stone());

        let targets = cells_to_fill(board, mv.stone());
        apply_fills(board, &mut mv, &targets);

        if !mv.filled().is_empty() {
            debug!(
                player = %mv.stone(),
                at = %mv.position(),
                filled = mv.filled().len(),
                captured = mv.captured().len(),
                "escort fill"
            );
        }
        mv
    }

    fn check_win_condition(&self, state: &GameState, player: Stone) -> bool {
        goal_edges(player).is_some_and(|(from, to)| connects(state.board(), player, from, to))
    }

    fn escorts(&self, position: Position, board: &Board) -> Escorts {
        escorts_of(position, board)
    }
}
