//! Move representation: a placement plus the cells it filled as a side effect.
//!
//! A `Move` starts life as a bare placement intent (position + color). The
//! rules take it by value, apply it, and hand back the same move annotated
//! with its escort fills and captures. Once recorded in history it is never
//! touched again.

use smallvec::SmallVec;

use super::position::Position;
use super::stone::Stone;

/// Positions touched by a cascade. Most moves fill nothing or a couple of cells.
pub type PositionList = SmallVec<[Position; 4]>;

/// A stone placement and its side effects.
///
/// ```
/// use brique::core::{Move, Position, Stone};
///
/// let mv = Move::new(Position::new(1, 2), Stone::Black);
/// assert_eq!(mv.stone(), Stone::Black);
/// assert!(mv.filled().is_empty());
/// assert!(mv.captured().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    position: Position,
    stone: Stone,
    /// Opponent stones overwritten by the cascade. Subset of `filled`.
    captured: PositionList,
    /// Every cell the cascade placed the mover's stone into, in scan order.
    filled: PositionList,
}

impl Move {
    /// Create a placement with no side effects yet.
    #[must_use]
    pub fn new(position: Position, stone: Stone) -> Self {
        Self {
            position,
            stone,
            captured: PositionList::new(),
            filled: PositionList::new(),
        }
    }

    /// Target cell of the placement.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Color of the player who made the move.
    #[must_use]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Opponent stones captured by escort fills, in scan order.
    #[must_use]
    pub fn captured(&self) -> &[Position] {
        &self.captured
    }

    /// All escort-filled cells (captures included), in scan order.
    #[must_use]
    pub fn filled(&self) -> &[Position] {
        &self.filled
    }

    /// True if the move captured at least one opponent stone.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Record an escort fill. `captured` marks an overwritten opponent stone.
    pub(crate) fn record_fill(&mut self, pos: Position, captured: bool) {
        debug_assert!(!self.filled.contains(&pos), "{} filled twice", pos);
        if captured {
            self.captured.push(pos);
        }
        self.filled.push(pos);
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.stone, self.position)?;
        if !self.filled.is_empty() {
            write!(f, " (+{} filled", self.filled.len())?;
            if !self.captured.is_empty() {
                write!(f, ", {} captured", self.captured.len())?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
