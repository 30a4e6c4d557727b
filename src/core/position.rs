//! Board coordinates.

/// A (row, col) coordinate.
///
/// Coordinates are signed so that neighbors of edge cells can be expressed
/// before they are checked. A `Position` carries no board; use
/// [`Board::is_valid_position`](crate::core::Board::is_valid_position) to
/// decide whether it lies on a particular board.
///
/// ```
/// use brique::core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.offset(-1, 0), Position::new(1, 3));
/// assert_eq!(format!("{}", pos), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, 0 at the top edge.
    pub row: i32,
    /// Column index, 0 at the left edge.
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position shifted by `(dr, dc)`.
    ///
    /// Plain `i32` addition; use [`checked_offset`](Self::checked_offset)
    /// for positions that may sit at the coordinate limits.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The position shifted by `(dr, dc)`, or `None` if a coordinate overflows.
    #[must_use]
    pub fn checked_offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// The four orthogonal neighbors: up, down, left, right.
    ///
    /// Neighbors may lie off the board.
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Position; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
