//! Shared helpers for integration tests.

#![allow(dead_code)]

use hilo_grid::{Card, Deck, SLOT_COUNT};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Full 52-card deck that deals `grid` row-major, then draws `draws` in
/// order, then the rest of the deck in canonical order.
pub fn stacked_deck(grid: [Card; SLOT_COUNT], draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = Card::standard()
        .filter(|c| !grid.contains(c) && !draws.contains(c))
        .collect();
    cards.extend(draws.iter().rev());
    cards.extend(grid.iter().rev());
    Deck::from_cards(cards).expect("stacked deck has duplicates")
}

/// Partial deck: `grid` then exactly `draws`.
pub fn short_deck(grid: [Card; SLOT_COUNT], draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.iter().rev().copied().collect();
    cards.extend(grid.iter().rev());
    Deck::from_cards(cards).expect("short deck has duplicates")
}
