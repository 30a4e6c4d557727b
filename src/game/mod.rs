//! Game engine and game-mode factory.

mod engine;
mod mode;

pub use engine::GameEngine;
pub use mode::{create_engine, GameMode};
