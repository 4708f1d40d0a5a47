//! Interactive layer for Colossal Cave.
//!
//! A [`Game`] owns one [`World`](colossal_sim::World) and turns lines of
//! player input into narration: it splits and classifies the words, applies
//! the preprocessing rewrites, dispatches to the verb handlers, runs the
//! questions that suspend normal input, and offers hints. Games can be
//! saved to and restored from JSON snapshot files, and replayed from
//! scripts.

/// Settings fixed at game start.
pub mod config;
/// Action dispatch and handler outcomes.
pub mod dispatch;
/// Error types for the interactive layer.
pub mod error;
/// The game session.
pub mod game;
/// Hint offers.
pub mod hints;
/// Location and object descriptions.
pub mod narrator;
/// Command parsing and vocabulary completion.
pub mod parser;
/// Snapshot files.
pub mod persist;
/// Questions that suspend normal input.
pub mod question;
/// Scripted input.
pub mod script;
/// End of game and ranking.
pub mod terminate;
/// Verb handlers.
pub mod verbs;

/// Re-export of [`config::GameConfig`].
pub use config::GameConfig;
/// Re-exports of [`error::GameError`] and [`error::GameResult`].
pub use error::{GameError, GameResult};
/// Re-export of [`game::Game`].
pub use game::Game;
/// Re-exports of the parser entry points.
pub use parser::{Command, Tokens, Word, WordClass, tokenize};
/// Re-export of [`persist::Snapshot`].
pub use persist::Snapshot;
/// Re-export of [`script::Script`].
pub use script::Script;
