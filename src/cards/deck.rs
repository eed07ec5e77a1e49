//! The draw pile.
//!
//! Cards are stored bottom-first: the top of the deck is the end of the vec,
//! so drawing is a `pop`.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered, duplicate-free stack of cards that only ever shrinks.
///
/// ```
/// use hilo_grid::cards::Deck;
/// use hilo_grid::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let mut deck = Deck::shuffled(&mut rng);
/// assert_eq!(deck.remaining(), 52);
///
/// deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// ```
///
/// Serializes as the remaining cards, bottom first. Deserializing goes
/// through [`Deck::from_cards`], so the result is a fresh deck with no
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
    initial_len: usize,
}

impl Deck {
    /// All 52 cards in canonical (unshuffled) order.
    #[must_use]
    pub fn standard() -> Self {
        let cards: Vec<Card> = Card::standard().collect();
        Self {
            initial_len: cards.len(),
            cards,
        }
    }

    /// All 52 cards in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit order (last element is the top).
    ///
    /// Partial decks are allowed; duplicates are not.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[card.id().raw() as usize];
            if *slot {
                return Err(GameError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self {
            initial_len: cards.len(),
            cards,
        })
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Size of the deck when it was built.
    #[must_use]
    pub fn initial_len(&self) -> usize {
        self.initial_len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = GameError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
