//! Per-game world state and the mechanisms that run on it.
//!
//! A [`World`] is the mutable overlay on top of the static tables in
//! `colossal-core`: where every object is, what state it is in, where the
//! dwarves are, the clocks and counters, and the random generator. Mechanisms
//! that both change the world and narrate take a [`SimContext`], which pairs
//! the world with the current turn's [`Narration`]. Nothing here reads input;
//! the command loop lives in `colossal-fiction`.

/// Closing clocks, turn penalties and the lamp timer.
pub mod clock;
/// Mutable context handed to narrating mechanisms.
pub mod context;
/// Reincarnation after a death.
pub mod death;
/// Dwarf and pirate movement.
pub mod dwarves;
/// Error types for the simulation crate.
pub mod error;
/// Narration collected during a turn.
pub mod narration;
/// Object placement primitives and presence queries.
pub mod placement;
/// The game's random generator.
pub mod rng;
/// Scoring.
pub mod score;
/// Player movement through the travel table.
pub mod travel;
/// Snapshot consistency checks.
pub mod validate;
/// The mutable world overlay.
pub mod world;

/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-export of [`dwarves::DwarfHere`].
pub use dwarves::DwarfHere;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`narration::Narration`].
pub use narration::Narration;
/// Re-export of [`placement::has_weight`].
pub use placement::has_weight;
/// Re-export of [`rng::Lcg`].
pub use rng::Lcg;
/// Re-exports of [`score::Score`], [`score::Termination`] and [`score::score`].
pub use score::{Score, Termination, score};
/// Re-export of [`travel::Fate`].
pub use travel::Fate;
/// Re-exports of the world state types.
pub use world::{Bonus, Dwarf, Fixed, HintState, Knife, Place, Prop, Slot, World};
