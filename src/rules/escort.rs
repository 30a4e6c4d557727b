//! Escort geometry and the escort-fill scan.
//!
//! Every cell is shaded by checkerboard parity. A light cell is escorted
//! by the cells above and to its left; a dark cell by the cells below and
//! to its right. When both escorts of a cell hold the same color, that
//! color fills the cell, overwriting an opponent stone if one is there.
//!
//! Escorts off the board are dropped, never wrapped, so edge and corner
//! cells have fewer than two escorts and can never be filled.

use smallvec::SmallVec;

use crate::core::{Board, Move, Position, Stone};

/// Escort positions of a cell: up to two, in lookup order.
pub type Escorts = SmallVec<[Position; 2]>;

/// Checkerboard parity of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareShade {
    /// `row + col` is even.
    Light,
    /// `row + col` is odd.
    Dark,
}

impl SquareShade {
    /// Shade of the cell at `pos`.
    #[must_use]
    pub fn at(pos: Position) -> Self {
        if (pos.row ^ pos.col) & 1 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// Offsets of the two escorts, front-or-behind first.
    #[must_use]
    const fn escort_offsets(self) -> [(i32, i32); 2] {
        match self {
            // front (up), left
            SquareShade::Light => [(-1, 0), (0, -1)],
            // behind (down), right
            SquareShade::Dark => [(1, 0), (0, 1)],
        }
    }
}

/// On-board escorts of `pos`, in order `[front|behind, left|right]`.
#[must_use]
pub fn escorts_of(pos: Position, board: &Board) -> Escorts {
    SquareShade::at(pos)
        .escort_offsets()
        .iter()
        .filter_map(|&(dr, dc)| pos.checked_offset(dr, dc))
        .filter(|&escort| board.is_valid_position(escort))
        .collect()
}

/// Cells `stone` would fill on the current board, in row-major order.
///
/// A single pass: cells already holding `stone` are skipped, and a cell
/// qualifies only if it has two escorts that both hold `stone`.
#[must_use]
pub fn cells_to_fill(board: &Board, stone: Stone) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| board.stone(pos) != stone)
        .filter(|&pos| {
            let escorts = escorts_of(pos, board);
            escorts.len() == 2 && escorts.iter().all(|&e| board.stone(e) == stone)
        })
        .collect()
}

/// Fill every cell in `targets` with the mover's color, recording fills
/// and captures on `mv`.
pub fn apply_fills(board: &mut Board, mv: &mut Move, targets: &[Position]) {
    let stone = mv.stone();
    let opponent = stone.opposite();
    for &pos in targets {
        let captured = board.stone(pos) == opponent;
        board.set_stone(pos, stone);
        mv.record_fill(pos, captured);
    }
}
