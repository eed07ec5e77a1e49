//! Error taxonomy for the game core.
//!
//! Every variant describes a rejected operation. Rejections happen before any
//! mutation, so a returned error always leaves the state untouched.

use thiserror::Error;

use super::action::CommandKind;
use super::phase::Phase;
use crate::cards::Card;
use crate::grid::SlotPos;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("deck is empty")]
    EmptyDeck,
    #[error("{command} is not allowed while {phase}")]
    InvalidTransition { command: CommandKind, phase: Phase },
    #[error("slot ({row}, {col}) is outside the grid")]
    SlotOutOfBounds { row: usize, col: usize },
    #[error("slot {0} is inactive")]
    InactiveSlot(SlotPos),
    #[error("no slot is selected")]
    NoSelection,
    #[error("deck too small: need {needed} cards, have {available}")]
    DeckTooSmall { needed: usize, available: usize },
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
    #[error("config error: {0}")]
    Config(String),
    #[error("leaderboard error: {0}")]
    Leaderboard(String),
}

impl From<serde_json::Error> for GameError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
