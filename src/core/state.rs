//! Game state and the turn state machine.
//!
//! `GameState` exclusively owns the deck, the grid, the used-card tally, the
//! selection, and the phase. Every mutation goes through `apply`, which
//! validates a command's guards before touching anything, so a rejected
//! command leaves the state exactly as it was.
//!
//! ## Turn Structure
//!
//! | From | Command | To |
//! |---|---|---|
//! | Selecting | select active slot | Predicting |
//! | Predicting | select same slot / deselect | Selecting |
//! | Predicting | select other active slot | Predicting |
//! | Selecting, Predicting | pause | Paused |
//! | Paused | resume | phase before pause |
//! | Predicting | predict | Selecting or Finished |
//! | any | restart | Selecting |

use im::Vector;
use tracing::{debug, info, trace};

use super::action::{Command, CommandKind, CommandRecord};
use super::config::GameConfig;
use super::error::GameError;
use super::phase::Phase;
use super::rng::GameRng;
use super::view::GameSnapshot;
use crate::cards::{Card, Deck, Rank, Suit};
use crate::events::GameEvent;
use crate::grid::{Grid, GridSlot, SlotPos, SLOT_COUNT};
use crate::rules::{evaluate_end, Direction, GameResult, Outcome};
use crate::stats::{GroupProbabilities, PredictionOdds, UsedCardCounts};

/// A single Hi-Lo game.
///
/// ```
/// use hilo_grid::core::{GameConfig, GameState, Phase};
///
/// let mut game = GameState::new(GameConfig::new().with_seed(42)).unwrap();
/// assert_eq!(game.deck_remaining(), 43);
///
/// assert!(game.select_slot(1, 1));
/// assert_eq!(game.phase(), Phase::Predicting);
///
/// assert!(game.predict(true));
/// assert_eq!(game.deck_remaining(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    grid: Grid,
    used: UsedCardCounts,
    selection: Option<SlotPos>,
    phase: Phase,
    pre_pause_phase: Option<Phase>,
    probabilities: GroupProbabilities,
    result: Option<GameResult>,
    turn: u32,
    history: Vector<CommandRecord>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a game from a freshly shuffled deck.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::shuffled(&mut rng);
        Self::start(config, rng, deck)
    }

    /// Start a seeded game with default settings.
    pub fn from_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(GameConfig::new().with_seed(seed))
    }

    /// Start a game from a prepared deck (top = last card).
    ///
    /// The config's seed still drives later restarts.
    pub fn from_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::start(config, rng, deck)
    }

    fn start(config: GameConfig, rng: GameRng, mut deck: Deck) -> Result<Self, GameError> {
        let mut used = UsedCardCounts::new();
        let grid = deal_grid(&mut deck, &mut used)?;

        let mut state = Self {
            config,
            rng,
            deck,
            grid,
            used,
            selection: None,
            phase: Phase::Selecting,
            pre_pause_phase: None,
            probabilities: GroupProbabilities::default(),
            result: None,
            turn: 0,
            history: Vector::new(),
            events: Vec::new(),
        };
        state.refresh_probabilities();
        state.push_deal_events();

        info!(
            seed = state.rng.seed(),
            deck_remaining = state.deck.remaining(),
            "game dealt"
        );
        Ok(state)
    }

    // === Commands ===

    /// Apply a command, or reject it without changing anything.
    pub fn apply(&mut self, command: Command) -> Result<(), GameError> {
        let turn = self.turn;
        let result = match command {
            Command::SelectSlot(pos) => self.select(pos),
            Command::Deselect => self.clear_selection(),
            Command::Predict(direction) => self.resolve_prediction(direction),
            Command::Pause => self.enter_pause(),
            Command::Resume => self.leave_pause(),
            Command::TogglePause => {
                if self.phase == Phase::Paused {
                    self.leave_pause()
                } else {
                    self.enter_pause()
                }
            }
            Command::Restart => self.redeal(),
        };

        match &result {
            Ok(()) => {
                if self.config.record_history && command != Command::Restart {
                    let sequence = self.history.len() as u32;
                    self.history.push_back(CommandRecord::new(command, turn, sequence));
                }
            }
            Err(err) => debug!(?command, phase = %self.phase, %err, "command rejected"),
        }
        result
    }

    /// Select, switch to, or deselect the slot at (row, col).
    ///
    /// Returns whether the command was accepted.
    pub fn select_slot(&mut self, row: usize, col: usize) -> bool {
        match SlotPos::checked(row, col) {
            Ok(pos) => self.apply(Command::SelectSlot(pos)).is_ok(),
            Err(err) => {
                debug!(%err, "command rejected");
                false
            }
        }
    }

    /// Clear the selection (click on empty table).
    pub fn deselect(&mut self) -> bool {
        self.apply(Command::Deselect).is_ok()
    }

    /// Call the next card higher (`true`) or lower (`false`) than the selection.
    pub fn predict(&mut self, is_higher: bool) -> bool {
        self.apply(Command::Predict(Direction::from_is_higher(is_higher)))
            .is_ok()
    }

    pub fn pause(&mut self) -> bool {
        self.apply(Command::Pause).is_ok()
    }

    pub fn resume(&mut self) -> bool {
        self.apply(Command::Resume).is_ok()
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply(Command::TogglePause).is_ok()
    }

    /// Discard this game and deal a new one. Accepted in every phase.
    pub fn restart(&mut self) -> bool {
        self.apply(Command::Restart).is_ok()
    }

    // === Transitions ===

    fn require_running(&self, command: CommandKind) -> Result<(), GameError> {
        if self.phase.is_running() {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                command,
                phase: self.phase,
            })
        }
    }

    fn select(&mut self, pos: SlotPos) -> Result<(), GameError> {
        self.require_running(CommandKind::SelectSlot)?;
        let slot = *self.grid.slot(pos)?;
        if !slot.is_active() {
            return Err(GameError::InactiveSlot(pos));
        }

        match self.selection {
            Some(current) if current == pos => {
                self.selection = None;
                self.phase = Phase::Selecting;
                self.events.push(GameEvent::SlotDeselected(pos));
                debug!(slot = %pos, "slot deselected");
            }
            previous => {
                if let Some(previous) = previous {
                    self.events.push(GameEvent::SlotDeselected(previous));
                }
                self.selection = Some(pos);
                self.phase = Phase::Predicting;
                self.events.push(GameEvent::SlotSelected(pos));
                debug!(slot = %pos, card = %slot.card(), "slot selected");
            }
        }
        Ok(())
    }

    fn clear_selection(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Predicting {
            return Err(GameError::InvalidTransition {
                command: CommandKind::Deselect,
                phase: self.phase,
            });
        }
        let pos = self.selection.take().ok_or(GameError::NoSelection)?;
        self.phase = Phase::Selecting;
        self.events.push(GameEvent::SlotDeselected(pos));
        debug!(slot = %pos, "slot deselected");
        Ok(())
    }

    fn resolve_prediction(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.phase != Phase::Predicting {
            return Err(GameError::InvalidTransition {
                command: CommandKind::Predict,
                phase: self.phase,
            });
        }
        let pos = self.selection.ok_or(GameError::NoSelection)?;
        let previous = self.grid.slot(pos)?.card();
        if self.deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        let drawn = self.deck.draw()?;
        self.used.record(drawn.rank);
        let correct = direction.is_correct(previous, drawn);
        self.grid.replace(pos, drawn, correct)?;

        self.selection = None;
        self.phase = Phase::Selecting;
        self.turn += 1;
        self.refresh_probabilities();

        self.events.push(GameEvent::PredictionResolved {
            slot: pos,
            previous,
            drawn,
            direction,
            correct,
        });
        debug!(
            slot = %pos,
            %previous,
            %drawn,
            %direction,
            correct,
            deck_remaining = self.deck.remaining(),
            "prediction resolved"
        );

        if let Some(result) = evaluate_end(self.deck.remaining(), self.grid.active_count()) {
            self.phase = Phase::Finished;
            self.result = Some(result);
            self.events.push(GameEvent::GameOver(result));
            info!(outcome = ?result.outcome, score = result.score, turns = self.turn, "game over");
        }
        Ok(())
    }

    fn enter_pause(&mut self) -> Result<(), GameError> {
        self.require_running(CommandKind::Pause)?;
        self.pre_pause_phase = Some(self.phase);
        self.phase = Phase::Paused;
        self.events.push(GameEvent::Paused);
        debug!("paused");
        Ok(())
    }

    fn leave_pause(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Paused {
            return Err(GameError::InvalidTransition {
                command: CommandKind::Resume,
                phase: self.phase,
            });
        }
        self.phase = self.pre_pause_phase.take().unwrap_or(Phase::Selecting);
        self.events.push(GameEvent::Resumed);
        debug!(phase = %self.phase, "resumed");
        Ok(())
    }

    fn redeal(&mut self) -> Result<(), GameError> {
        let mut rng = self.rng.fork();
        let mut deck = Deck::shuffled(&mut rng);
        let mut used = UsedCardCounts::new();
        let grid = deal_grid(&mut deck, &mut used)?;

        self.rng = rng;
        self.deck = deck;
        self.grid = grid;
        self.used = used;
        self.selection = None;
        self.phase = Phase::Selecting;
        self.pre_pause_phase = None;
        self.result = None;
        self.turn = 0;
        self.history = Vector::new();
        self.refresh_probabilities();

        // Undrained events belong to the discarded game
        self.events.clear();
        self.events.push(GameEvent::Restarted);
        self.push_deal_events();
        info!(seed = self.rng.seed(), "game restarted");
        Ok(())
    }

    fn refresh_probabilities(&mut self) {
        self.probabilities = GroupProbabilities::compute(&self.used, self.deck.remaining());
        trace!(
            low = self.probabilities.low,
            mid = self.probabilities.mid,
            high = self.probabilities.high,
            "probabilities updated"
        );
    }

    fn push_deal_events(&mut self) {
        let dealt = self.grid.iter().map(|slot| GameEvent::CardDealt {
            slot: slot.pos,
            card: slot.card(),
        });
        self.events.extend(dealt);
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase to return to on resume, while paused.
    #[must_use]
    pub fn pre_pause_phase(&self) -> Option<Phase> {
        self.pre_pause_phase
    }

    #[must_use]
    pub fn selection(&self) -> Option<SlotPos> {
        self.selection
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed that reproduces the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The draw pile. Its order is visible to the host; hiding the next card
    /// is a presentation concern.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn slot(&self, pos: SlotPos) -> Option<&GridSlot> {
        self.grid.get(pos)
    }

    #[must_use]
    pub fn active_slots(&self) -> usize {
        self.grid.active_count()
    }

    #[must_use]
    pub fn used_counts(&self) -> &UsedCardCounts {
        &self.used
    }

    /// LOW/MID/HIGH estimate for the next card.
    #[must_use]
    pub fn probabilities(&self) -> GroupProbabilities {
        self.probabilities
    }

    /// Higher/lower/tie odds against the card in `pos`.
    #[must_use]
    pub fn odds_for(&self, pos: SlotPos) -> Option<PredictionOdds> {
        let slot = self.grid.get(pos)?;
        Some(PredictionOdds::against(
            slot.card().value(),
            &self.used,
            self.deck.remaining(),
        ))
    }

    /// Odds for the selected slot, if any.
    #[must_use]
    pub fn selected_odds(&self) -> Option<PredictionOdds> {
        self.selection.and_then(|pos| self.odds_for(pos))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Outcome and score once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|r| r.outcome)
    }

    /// Final score (cards left in the deck) once finished.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.result.map(|r| r.score)
    }

    /// Predictions resolved this game.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Accepted commands since the last deal.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Events queued since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

/// Draw one card per slot, row-major, counting each as used.
fn deal_grid(deck: &mut Deck, used: &mut UsedCardCounts) -> Result<Grid, GameError> {
    if deck.remaining() < SLOT_COUNT {
        return Err(GameError::DeckTooSmall {
            needed: SLOT_COUNT,
            available: deck.remaining(),
        });
    }

    let mut cards = [Card::new(Rank::Two, Suit::Hearts); SLOT_COUNT];
    for card in cards.iter_mut() {
        *card = deck.draw()?;
        used.record(card.rank);
    }
    Ok(Grid::deal(cards))
}
