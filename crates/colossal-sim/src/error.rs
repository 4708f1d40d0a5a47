use colossal_core::{LocationId, ObjectId};

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Structural problems found when checking a world, usually one loaded from
/// a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A location field names no location.
    #[error("{field} names unknown location {raw}")]
    BadLocation {
        /// Which field held the value.
        field: String,
        /// The offending raw index.
        raw: u16,
    },

    /// A chain entry names no object.
    #[error("chain at {at} names unknown object {raw}")]
    BadObject {
        /// The chain holding the entry.
        at: LocationId,
        /// The offending raw index.
        raw: u16,
    },

    /// The per-location tables do not have one entry per location.
    #[error("expected {expected} locations, found {found}")]
    LocationCount {
        /// Table size the game expects.
        expected: usize,
        /// Size actually present.
        found: usize,
    },

    /// The per-object tables do not have one entry per object.
    #[error("expected {expected} objects, found {found}")]
    ObjectCount {
        /// Table size the game expects.
        expected: usize,
        /// Size actually present.
        found: usize,
    },

    /// A chain entry names an object that is not placed there.
    #[error("{object} is listed at {at} but is not placed there")]
    StrayChainEntry {
        /// The object found in the chain.
        object: ObjectId,
        /// The chain it was found in.
        at: LocationId,
    },

    /// An object placed at a location is missing from that chain, or listed twice.
    #[error("{object} appears {count} times in the chain at {at}")]
    ChainMismatch {
        /// The object.
        object: ObjectId,
        /// Where it is placed.
        at: LocationId,
        /// How many chain entries it has there.
        count: usize,
    },

    /// The tally does not match the undiscovered treasures.
    #[error("tally is {found} but {expected} treasures are undiscovered")]
    TallyMismatch {
        /// Count of undiscovered treasures.
        expected: i32,
        /// Stored tally.
        found: i32,
    },

    /// The generator state lies outside its modulus.
    #[error("random generator state {0} is out of range")]
    BadRngState(i64),

    /// Dwarf activity or kill counters are impossible.
    #[error("dwarf counters out of range: dflag {dflag}, dkill {dkill}")]
    DwarfCounters {
        /// Activity stage.
        dflag: i32,
        /// Dwarves killed.
        dkill: i32,
    },

    /// The player has died more often than the game allows.
    #[error("death count {0} exceeds the limit")]
    DeathCount(i32),

    /// An object's state is outside the states it can take.
    #[error("{object} has impossible state {state}")]
    PropRange {
        /// The object.
        object: ObjectId,
        /// Its raw state.
        state: i32,
    },

    /// The description interval is zero.
    #[error("abbreviation interval must be non-zero")]
    ZeroAbbnum,

    /// The inventory weight does not match what is carried.
    #[error("holding {found} but carrying {expected}")]
    HoldingMismatch {
        /// Weight of carried objects.
        expected: i32,
        /// Stored weight.
        found: i32,
    },

    /// The magic word is malformed.
    #[error("magic word {0:?} is malformed")]
    BadMagicWord(String),
}
