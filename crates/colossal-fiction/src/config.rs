//! Settings fixed when a game starts.

use std::path::PathBuf;

/// How a new [`Game`](crate::Game) should be set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the game's generator. `None` draws one at random.
    pub seed: Option<u64>,
    /// Legacy behaviour: numeric words are accepted, single-letter
    /// `i` and `l` are ignored, and the big-word failure is terse.
    pub oldstyle: bool,
    /// File rewritten after every command while the game is running.
    pub autosave: Option<PathBuf>,
    /// Ask whether the player wants instructions at the start.
    pub novice_prompt: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            oldstyle: false,
            autosave: None,
            novice_prompt: true,
        }
    }
}

impl GameConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn legacy mode on or off.
    pub fn with_oldstyle(mut self, oldstyle: bool) -> Self {
        self.oldstyle = oldstyle;
        self
    }

    /// Keep a running snapshot at `path`.
    pub fn with_autosave(mut self, path: impl Into<PathBuf>) -> Self {
        self.autosave = Some(path.into());
        self
    }

    /// Turn the opening instructions question on or off.
    pub fn with_novice_prompt(mut self, ask: bool) -> Self {
        self.novice_prompt = ask;
        self
    }

    /// The seed to play with, drawing one if none was fixed.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
