//! Cell occupancy marker.
//!
//! Players are represented by the two non-empty variants; `Empty` only
//! ever describes a cell.

/// Occupancy of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    /// Black stone. Black moves first and connects top to bottom.
    Black,
    /// White stone. White connects left to right.
    White,
    /// No stone.
    #[default]
    Empty,
}

impl Stone {
    /// The other player's color. `Empty` maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for `Black` and `White`.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Stone::Empty)
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
            Stone::Empty => write!(f, "Empty"),
        }
    }
}
