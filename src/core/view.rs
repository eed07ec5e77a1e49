//! Read-only views for presentation layers.
//!
//! A `GameSnapshot` is a plain serializable copy of everything a UI shows:
//! deck count, the nine slots, used-card tracker, probabilities, phase, and
//! the result once finished. Hover state is not part of the core.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::state::GameState;
use crate::cards::Card;
use crate::rules::GameResult;
use crate::stats::{GroupProbabilities, UsedCardCounts};

/// One slot as the UI sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub row: u8,
    pub col: u8,
    pub card: Card,
    pub active: bool,
    pub is_selected: bool,
}

/// Full game view at one moment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub deck_remaining: usize,
    /// Row-major.
    pub slots: Vec<SlotView>,
    pub used_counts: UsedCardCounts,
    pub probabilities: GroupProbabilities,
    pub result: Option<GameResult>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let selection = state.selection();
        let slots = state
            .grid()
            .iter()
            .map(|slot| SlotView {
                row: slot.pos.row,
                col: slot.pos.col,
                card: slot.card(),
                active: slot.is_active(),
                is_selected: selection == Some(slot.pos),
            })
            .collect();

        Self {
            phase: state.phase(),
            deck_remaining: state.deck_remaining(),
            slots,
            used_counts: *state.used_counts(),
            probabilities: state.probabilities(),
            result: state.result(),
        }
    }
}
