//! Game configuration.
//!
//! Grid size, deck composition, and scoring are fixed by the rules. What a
//! host can configure is how a session is seeded, whether commands are
//! recorded, and how many leaderboard entries are kept.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Default number of leaderboard entries kept.
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 10;

/// Session configuration.
///
/// ```
/// use hilo_grid::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Record accepted commands in the state's history.
    pub record_history: bool,

    /// Maximum leaderboard entries.
    pub leaderboard_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable command history recording.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }

    /// Set the leaderboard capacity.
    #[must_use]
    pub fn with_leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.leaderboard_capacity == 0 {
            return Err(GameError::Config(
                "leaderboard_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
