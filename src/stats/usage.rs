//! Per-rank tally of cards that have left the deck.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Copies of each rank in a full deck.
pub const CARDS_PER_RANK: u8 = 4;

/// How many cards of each rank have left the deck, by deal or draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsedCardCounts {
    counts: [u8; Rank::COUNT],
}

impl UsedCardCounts {
    /// All counts zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more card of `rank` as used.
    pub fn record(&mut self, rank: Rank) {
        let count = &mut self.counts[rank.index()];
        debug_assert!(*count < CARDS_PER_RANK, "more than four {rank}s used");
        *count += 1;
    }

    #[must_use]
    pub fn get(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    /// Cards of `rank` still unseen, assuming a full deck.
    #[must_use]
    pub fn unseen(&self, rank: Rank) -> u8 {
        CARDS_PER_RANK.saturating_sub(self.get(rank))
    }

    /// Total cards used across all ranks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// (rank, count) pairs, lowest rank first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.iter().map(move |&rank| (rank, self.get(rank)))
    }
}
