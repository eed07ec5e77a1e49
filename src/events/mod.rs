//! Events emitted by the game core.
//!
//! The core never drives rendering. It queues `GameEvent`s describing each
//! accepted transition, and the host drains them to animate cards, flash
//! results, or show the game-over panel. Data state is already updated when
//! an event is queued; only its visual reflection may lag.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::grid::SlotPos;
use crate::rules::{Direction, GameResult};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was dealt face-up into a slot at game start.
    CardDealt { slot: SlotPos, card: Card },

    /// A slot became the selection.
    SlotSelected(SlotPos),

    /// The selected slot was released without a prediction.
    SlotDeselected(SlotPos),

    /// A prediction was resolved against `previous`.
    ///
    /// When `correct` is false the slot is now permanently inactive.
    PredictionResolved {
        slot: SlotPos,
        previous: Card,
        drawn: Card,
        direction: Direction,
        correct: bool,
    },

    Paused,
    Resumed,

    /// The game ended.
    GameOver(GameResult),

    /// The previous game was discarded; `CardDealt` events follow.
    Restarted,
}

impl GameEvent {
    /// The slot this event concerns, if any.
    #[must_use]
    pub fn slot(&self) -> Option<SlotPos> {
        match self {
            GameEvent::CardDealt { slot, .. }
            | GameEvent::PredictionResolved { slot, .. }
            | GameEvent::SlotSelected(slot)
            | GameEvent::SlotDeselected(slot) => Some(*slot),
            GameEvent::Paused
            | GameEvent::Resumed
            | GameEvent::GameOver(_)
            | GameEvent::Restarted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_event_slot() {
        let pos = SlotPos::new(2, 0);
        let event = GameEvent::PredictionResolved {
            slot: pos,
            previous: Card::new(Rank::Four, Suit::Clubs),
            drawn: Card::new(Rank::Nine, Suit::Hearts),
            direction: Direction::Higher,
            correct: true,
        };

        assert_eq!(event.slot(), Some(pos));
        assert_eq!(GameEvent::Paused.slot(), None);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::CardDealt {
            slot: SlotPos::new(0, 1),
            card: Card::new(Rank::King, Suit::Diamonds),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
