//! Exact odds for a single higher/lower call.

use serde::{Deserialize, Serialize};

use super::usage::UsedCardCounts;
use crate::cards::Rank;

/// Chance (in percent) that the next card is higher, lower, or equal.
///
/// Derived from unseen cards per rank, so it assumes the game started from a
/// full deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionOdds {
    pub higher: f64,
    pub lower: f64,
    pub tie: f64,
}

impl PredictionOdds {
    /// Odds against a card of comparison value `value`.
    #[must_use]
    pub fn against(value: u8, used: &UsedCardCounts, deck_remaining: usize) -> Self {
        if deck_remaining == 0 {
            return Self::default();
        }

        let (mut higher, mut lower, mut tie) = (0usize, 0usize, 0usize);
        for rank in Rank::ALL {
            let unseen = used.unseen(rank) as usize;
            match rank.value().cmp(&value) {
                std::cmp::Ordering::Greater => higher += unseen,
                std::cmp::Ordering::Less => lower += unseen,
                std::cmp::Ordering::Equal => tie += unseen,
            }
        }

        let pct = |n: usize| n as f64 / deck_remaining as f64 * 100.0;
        Self {
            higher: pct(higher),
            lower: pct(lower),
            tie: pct(tie),
        }
    }

    /// The better of the two calls and its chance of success.
    #[must_use]
    pub fn best(&self) -> (crate::rules::Direction, f64) {
        if self.higher >= self.lower {
            (crate::rules::Direction::Higher, self.higher)
        } else {
            (crate::rules::Direction::Lower, self.lower)
        }
    }
}
