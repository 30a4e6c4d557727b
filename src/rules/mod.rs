//! Rules trait and the standard Brique rule set.
//!
//! Rule sets implement `GameRules` to define:
//! - Legal placements
//! - Escort fills and captures triggered by a placement
//! - Win conditions
//!
//! The engine calls into `GameRules` but never interprets board geometry
//! directly.

pub mod traits;
pub mod standard;
pub mod escort;
pub mod connect;

pub use traits::{create_rules, GameRules, RuleType};
pub use standard::StandardRules;
pub use escort::{Escorts, SquareShade};
