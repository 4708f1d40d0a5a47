//! Static world data for Colossal Cave.
//!
//! Everything in this crate is immutable: locations and their travel rules,
//! objects and their per-state text, vocabulary, hints, ranks and fixed
//! messages. Mutable game state lives in `colossal-sim` and refers back
//! here by [`LocationId`] and [`ObjectId`].

/// Static per-location condition bits.
pub mod conditions;
/// Error types for out-of-range table lookups.
pub mod error;
/// Hints, score ranks, turn penalties and obituaries.
pub mod hints;
/// Typed indices into the location and object tables.
pub mod ids;
/// Timers and counts that shape a game.
pub mod limits;
/// The location table.
pub mod locations;
/// Fixed narration strings.
pub mod messages;
/// The object table and named object states.
pub mod objects;
/// Travel rule types.
pub mod travel;
/// Vocabulary and word matching.
pub mod vocab;

/// Re-export condition bits.
pub use conditions::Conditions;
/// Re-export error types.
pub use error::{DataError, DataResult};
/// Re-export table indices.
pub use ids::{LocationId, ObjectId};
/// Re-export table entries.
pub use locations::{LocationDef, location};
/// Re-export object entries.
pub use objects::{FixedDef, ObjectDef, object};
/// Re-export travel rule types.
pub use travel::{TravelCond, TravelDest, TravelRule};
/// Re-export vocabulary types.
pub use vocab::{Motion, Verb, WordKind};
