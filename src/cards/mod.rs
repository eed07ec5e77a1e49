//! Card system: suits, ranks, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (suit, rank) pair with a comparison value in `[2, 14]`
//! - `CardId`: Unique id per (suit, rank)
//! - `Deck`: Shuffled draw pile, top = end

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
