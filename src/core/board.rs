//! Square grid of cell occupancy.
//!
//! The board knows nothing about turns or rules. Writes are unconditional;
//! legality is decided one layer up by [`GameRules`](crate::rules::GameRules).

use super::error::{GameError, Result};
use super::position::Position;
use super::stone::Stone;

/// An N×N grid of [`Stone`]s, stored row-major.
///
/// `Clone` produces an independent deep copy.
///
/// ```
/// use brique::core::{Board, Position, Stone};
///
/// let mut board = Board::new(3).unwrap();
/// board.set_stone(Position::new(1, 1), Stone::Black);
///
/// let copy = board.clone();
/// board.set_stone(Position::new(1, 1), Stone::White);
/// assert_eq!(copy.stone(Position::new(1, 1)), Stone::Black);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board of `size`×`size` cells.
    ///
    /// Fails with [`GameError::InvalidBoardSize`] when `size` is zero or
    /// too large for an `i32` coordinate.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || i32::try_from(size).is_err() {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= row < size` and `0 <= col < size`.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        let in_range = |v: i32| v >= 0 && (v as usize) < self.size;
        in_range(pos.row) && in_range(pos.col)
    }

    /// Stone at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Check with
    /// [`is_valid_position`](Self::is_valid_position) or use [`get`](Self::get).
    #[must_use]
    pub fn stone(&self, pos: Position) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Stone at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Stone> {
        self.is_valid_position(pos).then(|| self.cells[self.index(pos)])
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn set_stone(&mut self, pos: Position, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Positions along one edge.
    pub fn edge(&self, edge: Edge) -> impl Iterator<Item = Position> {
        let last = self.size as i32 - 1;
        (0..=last).map(move |i| match edge {
            Edge::Top => Position::new(0, i),
            Edge::Bottom => Position::new(last, i),
            Edge::Left => Position::new(i, 0),
            Edge::Right => Position::new(i, last),
        })
    }

    /// True if `pos` lies on `edge`.
    #[must_use]
    pub fn is_on_edge(&self, pos: Position, edge: Edge) -> bool {
        let last = self.size as i32 - 1;
        match edge {
            Edge::Top => pos.row == 0,
            Edge::Bottom => pos.row == last,
            Edge::Left => pos.col == 0,
            Edge::Right => pos.col == last,
        }
    }

    /// Number of cells holding `stone`.
    #[must_use]
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Replace every Black stone with White and vice versa.
    pub fn swap_colors(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.opposite();
        }
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.is_valid_position(pos),
            "position {} is off a {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }
}

/// One of the four board edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row `size - 1`.
    Bottom,
    /// Column 0.
    Left,
    /// Column `size - 1`.
    Right,
}
