//! Core game types: state machine, commands, phases, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Command, CommandKind, CommandRecord};
pub use config::{GameConfig, DEFAULT_LEADERBOARD_CAPACITY};
pub use error::GameError;
pub use phase::Phase;
pub use rng::GameRng;
pub use state::GameState;
pub use view::{GameSnapshot, SlotView};
