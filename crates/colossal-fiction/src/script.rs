//! Scripted input.
//!
//! A script is a plain text file of commands, one per line. Blank lines
//! and lines starting with `#` are skipped. Scripts feed a game exactly
//! as a player would, which makes whole sessions reproducible from a seed.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{GameError, GameResult};
use crate::game::Game;

/// Commands waiting to be fed to a game, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<String>,
    position: usize,
}

impl Script {
    /// Build a script from lines of text.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self {
            commands,
            position: 0,
        }
    }

    /// Load a script file.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GameError::Script {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let script = Self::from_lines(text.lines());
        debug!("loaded {} commands from {}", script.len(), path.display());
        Ok(script)
    }

    /// Append another script's remaining commands.
    pub fn extend(&mut self, other: Script) {
        self.commands
            .extend(other.commands.into_iter().skip(other.position));
    }

    /// Total commands, played or not.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the script has no commands at all.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// True while commands remain.
    pub fn has_more(&self) -> bool {
        self.position < self.commands.len()
    }
}

impl Iterator for Script {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let command = self.commands.get(self.position)?.clone();
        self.position += 1;
        Some(command)
    }
}

/// One step of a replay: what was typed and what the game said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// The command fed to the game.
    pub input: String,
    /// The game's reply.
    pub output: String,
}

/// Feed a script to a game until the script runs out or the game ends.
pub fn replay(game: &mut Game, script: Script) -> Vec<Exchange> {
    let mut exchanges = Vec::new();
    for input in script {
        if game.is_over() {
            break;
        }
        let output = game.process(&input);
        exchanges.push(Exchange { input, output });
    }
    exchanges
}
