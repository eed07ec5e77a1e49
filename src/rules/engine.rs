//! Hi-Lo rules: the prediction check, the end condition, and which commands
//! the state machine currently accepts.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::action::Command;
use crate::core::phase::Phase;
use crate::core::state::GameState;

/// The player's call on the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Higher, Direction::Lower];

    /// `Higher` for true, `Lower` for false.
    #[must_use]
    pub const fn from_is_higher(is_higher: bool) -> Self {
        if is_higher {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }

    /// Whether `next` satisfies this call against `current`.
    ///
    /// Equal values fail in both directions.
    #[must_use]
    pub fn is_correct(self, current: Card, next: Card) -> bool {
        match self {
            Direction::Higher => next.value() > current.value(),
            Direction::Lower => next.value() < current.value(),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Higher => f.write_str("higher"),
            Direction::Lower => f.write_str("lower"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The whole deck was played.
    Victory,
    /// Every slot went inactive first.
    Defeat,
}

/// Result of a completed game.
///
/// `score` is the number of cards left in the deck; lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub score: usize,
}

impl GameResult {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }
}

/// End check run after every prediction.
///
/// An empty deck wins even if the last call also deactivated the last slot.
#[must_use]
pub fn evaluate_end(deck_remaining: usize, active_slots: usize) -> Option<GameResult> {
    if deck_remaining == 0 {
        Some(GameResult {
            outcome: Outcome::Victory,
            score: 0,
        })
    } else if active_slots == 0 {
        Some(GameResult {
            outcome: Outcome::Defeat,
            score: deck_remaining,
        })
    } else {
        None
    }
}

/// Every command `state` would accept right now.
#[must_use]
pub fn legal_commands(state: &GameState) -> Vec<Command> {
    let mut commands = Vec::new();
    let phase = state.phase();

    if phase.is_running() {
        commands.extend(state.grid().active_slots().map(|s| Command::SelectSlot(s.pos)));
    }

    if phase == Phase::Predicting {
        commands.push(Command::Deselect);
        if state.deck_remaining() > 0 {
            commands.extend(Direction::ALL.map(Command::Predict));
        }
    }

    match phase {
        Phase::Selecting | Phase::Predicting => commands.push(Command::Pause),
        Phase::Paused => commands.push(Command::Resume),
        Phase::Finished => {}
    }
    if phase != Phase::Finished {
        commands.push(Command::TogglePause);
    }

    commands.push(Command::Restart);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_higher_and_lower() {
        assert!(Direction::Higher.is_correct(card(Rank::Ten), card(Rank::Ace)));
        assert!(!Direction::Higher.is_correct(card(Rank::Ten), card(Rank::Nine)));
        assert!(Direction::Lower.is_correct(card(Rank::Ten), card(Rank::Nine)));
        assert!(!Direction::Lower.is_correct(card(Rank::Ten), card(Rank::Jack)));
    }

    #[test]
    fn test_ties_always_fail() {
        let current = Card::new(Rank::Two, Suit::Hearts);
        let next = Card::new(Rank::Two, Suit::Clubs);

        assert!(!Direction::Higher.is_correct(current, next));
        assert!(!Direction::Lower.is_correct(current, next));
    }

    #[test]
    fn test_from_is_higher() {
        assert_eq!(Direction::from_is_higher(true), Direction::Higher);
        assert_eq!(Direction::from_is_higher(false), Direction::Lower);
    }

    #[test]
    fn test_evaluate_end() {
        assert_eq!(evaluate_end(10, 3), None);

        let defeat = evaluate_end(17, 0).unwrap();
        assert_eq!(defeat.outcome, Outcome::Defeat);
        assert_eq!(defeat.score, 17);

        let victory = evaluate_end(0, 4).unwrap();
        assert!(victory.is_victory());
        assert_eq!(victory.score, 0);

        // Empty deck takes precedence over no active slots
        assert!(evaluate_end(0, 0).unwrap().is_victory());
    }
}
