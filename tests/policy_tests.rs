//! Automated play tests.
//!
//! Full games driven through `play_out` and through the raw command API.

mod common;

use common::init_logging;
use hilo_grid::core::{GameState, Phase};
use hilo_grid::grid::SlotPos;
use hilo_grid::policy::{play_out, GreedyPolicy, Policy, RandomPolicy};
use hilo_grid::rules::{Direction, Outcome};
use hilo_grid::DECK_SIZE;

/// Cheats by peeking at the deck; never makes a wrong call.
struct Oracle;

impl Policy for Oracle {
    fn choose(&mut self, state: &GameState) -> Option<(SlotPos, Direction)> {
        let next = state.deck().peek()?;
        state.grid().active_slots().find_map(|slot| {
            let value = slot.card().value();
            if next.value() > value {
                Some((slot.pos, Direction::Higher))
            } else if next.value() < value {
                Some((slot.pos, Direction::Lower))
            } else {
                None
            }
        })
    }
}

#[test]
fn test_perfect_play_wins() {
    init_logging();
    for seed in 0..20 {
        let mut game = GameState::from_seed(seed).unwrap();
        let result = play_out(&mut game, &mut Oracle).unwrap();

        assert_eq!(result.outcome, Outcome::Victory);
        assert_eq!(result.score, 0);
        assert_eq!(game.active_slots(), 9);
        assert_eq!(game.turn() as usize, DECK_SIZE - 9);
        assert_eq!(game.used_counts().total(), DECK_SIZE);
    }
}

#[test]
fn test_random_games_always_end() {
    init_logging();
    for seed in 0..50 {
        let mut game = GameState::from_seed(seed).unwrap();
        let result = play_out(&mut game, &mut RandomPolicy::new(seed ^ 0xABCD)).unwrap();

        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(result.score, game.deck_remaining());
        match result.outcome {
            Outcome::Victory => assert_eq!(result.score, 0),
            Outcome::Defeat => {
                assert!(result.score > 0);
                assert_eq!(game.active_slots(), 0);
            }
        }
    }
}

#[test]
fn test_greedy_beats_random_on_average() {
    let games = 40;
    let mut greedy_total = 0;
    let mut random_total = 0;

    for seed in 0..games {
        let mut game = GameState::from_seed(seed).unwrap();
        greedy_total += play_out(&mut game, &mut GreedyPolicy).unwrap().score;

        let mut game = GameState::from_seed(seed).unwrap();
        random_total += play_out(&mut game, &mut RandomPolicy::new(seed)).unwrap().score;
    }

    assert!(
        greedy_total < random_total,
        "greedy {} vs random {}",
        greedy_total,
        random_total
    );
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::from_seed(1234).unwrap();
    let mut b = GameState::from_seed(1234).unwrap();

    let ra = play_out(&mut a, &mut GreedyPolicy);
    let rb = play_out(&mut b, &mut GreedyPolicy);

    assert_eq!(ra, rb);
    assert_eq!(a.history(), b.history());
    assert_eq!(a.drain_events(), b.drain_events());
}
