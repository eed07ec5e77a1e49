//! Automated play.
//!
//! Policies choose a slot and a call; `play_out` feeds those choices through
//! the public commands until the game ends. Used for soak tests and for
//! estimating how well a strategy scores.

use tracing::debug;

use crate::core::{GameRng, GameState, Phase};
use crate::grid::SlotPos;
use crate::rules::{Direction, GameResult};

/// Chooses the next move from the visible state.
pub trait Policy {
    /// Pick a slot and a call, or `None` if there is nothing to play.
    fn choose(&mut self, state: &GameState) -> Option<(SlotPos, Direction)>;
}

/// Plays the active slot whose best call has the highest odds.
///
/// Ties keep the earliest slot in row-major order.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState) -> Option<(SlotPos, Direction)> {
        state
            .grid()
            .active_slots()
            .filter_map(|slot| {
                let (direction, chance) = state.odds_for(slot.pos)?.best();
                Some((slot.pos, direction, chance))
            })
            .fold(None, |best: Option<(SlotPos, Direction, f64)>, candidate| match best {
                Some(b) if b.2 >= candidate.2 => Some(b),
                _ => Some(candidate),
            })
            .map(|(pos, direction, _)| (pos, direction))
    }
}

/// Uniformly random active slot and call.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, state: &GameState) -> Option<(SlotPos, Direction)> {
        let active: Vec<SlotPos> = state.grid().active_slots().map(|s| s.pos).collect();
        let pos = *self.rng.choose(&active)?;
        let direction = Direction::from_is_higher(self.rng.gen_bool(0.5));
        Some((pos, direction))
    }
}

/// Play `state` to completion with `policy`.
///
/// Resumes a paused game and drops any existing selection first. Returns
/// the result, or `None` if the policy stops choosing before the end.
pub fn play_out<P: Policy + ?Sized>(state: &mut GameState, policy: &mut P) -> Option<GameResult> {
    if state.phase() == Phase::Paused {
        state.resume();
    }
    if state.phase() == Phase::Predicting {
        state.deselect();
    }

    while !state.is_finished() {
        let (pos, direction) = policy.choose(state)?;
        if !state.select_slot(pos.row as usize, pos.col as usize) {
            debug!(slot = %pos, "policy chose an unplayable slot");
            return None;
        }
        if !state.predict(direction == Direction::Higher) {
            return None;
        }
    }
    state.result()
}
