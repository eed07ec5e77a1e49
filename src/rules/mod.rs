//! Game rules.
//!
//! - How a higher/lower call is judged (ties always lose)
//! - When the game ends and how it is scored
//! - Which commands are legal in each phase

pub mod engine;

pub use engine::{evaluate_end, legal_commands, Direction, GameResult, Outcome};
