//! # hilo-grid
//!
//! Game core for a single-player Hi-Lo card game played on a 3×3 grid.
//!
//! Nine cards are dealt face-up from a shuffled 52-card deck. The player
//! selects an active slot and calls whether the next card from the deck is
//! higher or lower. A correct call replaces the card and keeps the slot in
//! play; a wrong call (ties included) replaces the card and retires the slot
//! for good. Emptying the deck wins; losing every slot first ends the game.
//! The score is the number of cards left in the deck, so lower is better.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, input capture, or storage. Hosts
//!    send `Command`s, read `GameSnapshot`s, and drain `GameEvent`s.
//!
//! 2. **Atomic Transitions**: Every command is validated before anything
//!    changes. Rejected commands leave the state untouched.
//!
//! 3. **Deterministic**: A seed fully determines every deal, including deals
//!    after restarts.
//!
//! ## Modules
//!
//! - `core`: State machine, commands, phases, errors, RNG, configuration
//! - `cards`: Cards and the deck
//! - `grid`: The nine slots
//! - `stats`: Used-card tally, band probabilities, call odds
//! - `rules`: Prediction check, end condition, legal commands
//! - `events`: Events emitted for presentation layers
//! - `policy`: Automated play
//! - `leaderboard`: Top-N score ranking

pub mod core;
pub mod cards;
pub mod grid;
pub mod stats;
pub mod rules;
pub mod events;
pub mod policy;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandKind, CommandRecord,
    GameConfig, GameError, GameRng,
    GameSnapshot, GameState, Phase, SlotView,
};

pub use crate::cards::{Card, CardId, Deck, Rank, Suit, DECK_SIZE};

pub use crate::grid::{Grid, GridSlot, SlotPos, GRID_DIM, SLOT_COUNT};

pub use crate::stats::{GroupProbabilities, PredictionOdds, RankBand, UsedCardCounts};

pub use crate::rules::{Direction, GameResult, Outcome};

pub use crate::events::GameEvent;

pub use crate::policy::{play_out, GreedyPolicy, Policy, RandomPolicy};

pub use crate::leaderboard::{Leaderboard, ScoreEntry};
