//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the game is in its turn structure.
///
/// ```text
/// Selecting --select--> Predicting --predict--> Selecting | Finished
///     ^                     |
///     +------deselect-------+
/// Selecting | Predicting --pause--> Paused --resume--> (prior phase)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick an active slot.
    #[default]
    Selecting,
    /// A slot is selected; waiting for higher/lower.
    Predicting,
    /// Gameplay commands are suspended.
    Paused,
    /// Deck exhausted or no active slots left.
    Finished,
}

impl Phase {
    /// Select/predict/deselect may be accepted in this phase.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Phase::Selecting | Phase::Predicting)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Selecting => "selecting",
            Phase::Predicting => "predicting",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}
