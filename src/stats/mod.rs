//! Deck bookkeeping derived from the cards that have left the deck.
//!
//! - `UsedCardCounts`: per-rank tally of dealt and drawn cards
//! - `GroupProbabilities`: LOW/MID/HIGH estimate for the next card
//! - `PredictionOdds`: higher/lower/tie chances against one card

pub mod bands;
pub mod odds;
pub mod usage;

pub use bands::{GroupProbabilities, RankBand};
pub use odds::PredictionOdds;
pub use usage::{UsedCardCounts, CARDS_PER_RANK};
