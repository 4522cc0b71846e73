//! Engine configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::notation::NotationMode;

/// Maximum number of items a selection may hold.
pub const MAX_SELECTION_ITEMS: usize = 6;

/// Default number of records returned by "recent" history queries.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Configuration shared by the dice and selector services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grammar used when parsing dice notation.
    pub notation_mode: NotationMode,
    /// Number of records returned by recent-history queries.
    pub recent_limit: usize,
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            notation_mode: NotationMode::Strict,
            recent_limit: DEFAULT_RECENT_LIMIT,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the notation grammar.
    pub fn with_notation_mode(mut self, mode: NotationMode) -> Self {
        self.notation_mode = mode;
        self
    }

    /// Set the recent-history limit (at least 1).
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit.max(1);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
