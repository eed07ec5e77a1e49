//! Rank bands and the live group probability estimate.
//!
//! The 13 ranks are grouped into LOW (2-5), MID (6-9) and HIGH (10-A). For
//! each band the estimate is the share of unseen band cards among the cards
//! still in the deck, as a percentage.

use serde::{Deserialize, Serialize};

use super::usage::{UsedCardCounts, CARDS_PER_RANK};
use crate::cards::Rank;

/// A group of ranks shown together in the probability panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankBand {
    Low,
    Mid,
    High,
}

impl RankBand {
    pub const ALL: [RankBand; 3] = [RankBand::Low, RankBand::Mid, RankBand::High];

    /// Ranks in this band.
    #[must_use]
    pub const fn ranks(self) -> &'static [Rank] {
        match self {
            RankBand::Low => &[Rank::Two, Rank::Three, Rank::Four, Rank::Five],
            RankBand::Mid => &[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine],
            RankBand::High => &[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace],
        }
    }

    /// Cards of this band in a full deck (16, 16, 20).
    #[must_use]
    pub const fn population(self) -> usize {
        self.ranks().len() * CARDS_PER_RANK as usize
    }

    /// Band containing `rank`.
    #[must_use]
    pub const fn of(rank: Rank) -> RankBand {
        match rank {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five => RankBand::Low,
            Rank::Six | Rank::Seven | Rank::Eight | Rank::Nine => RankBand::Mid,
            _ => RankBand::High,
        }
    }

    /// Band cards not yet used.
    #[must_use]
    pub fn remaining(self, used: &UsedCardCounts) -> usize {
        let used_in_band: usize = self.ranks().iter().map(|&r| used.get(r) as usize).sum();
        self.population().saturating_sub(used_in_band)
    }
}

impl std::fmt::Display for RankBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RankBand::Low => "LOW",
            RankBand::Mid => "MID",
            RankBand::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Chance (in percent) that the next card falls in each band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupProbabilities {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl GroupProbabilities {
    /// Estimate from the used tally and the cards left in the deck.
    ///
    /// An empty deck reports zero for every band.
    #[must_use]
    pub fn compute(used: &UsedCardCounts, deck_remaining: usize) -> Self {
        if deck_remaining == 0 {
            return Self::default();
        }

        let pct = |band: RankBand| band.remaining(used) as f64 / deck_remaining as f64 * 100.0;
        Self {
            low: pct(RankBand::Low),
            mid: pct(RankBand::Mid),
            high: pct(RankBand::High),
        }
    }

    #[must_use]
    pub fn get(&self, band: RankBand) -> f64 {
        match band {
            RankBand::Low => self.low,
            RankBand::Mid => self.mid,
            RankBand::High => self.high,
        }
    }

    /// Sum of the three bands.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.low + self.mid + self.high
    }
}
