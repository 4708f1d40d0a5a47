use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::locations::NLOCATIONS;
use crate::objects::NOBJECTS;

/// Index into the static location table.
///
/// Index 0 is the "nowhere" sentinel; real locations start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u16);

impl LocationId {
    /// Validate a raw index read from outside the crate.
    pub fn checked(raw: u16) -> DataResult<Self> {
        if usize::from(raw) < NLOCATIONS {
            Ok(Self(raw))
        } else {
            Err(DataError::LocationOutOfRange(raw))
        }
    }

    /// Position in the location table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the "nowhere" sentinel.
    pub const fn is_nowhere(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc#{}", self.0)
    }
}

/// Index into the static object table, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u16);

impl ObjectId {
    /// Validate a raw index read from outside the crate.
    pub fn checked(raw: u16) -> DataResult<Self> {
        if raw >= 1 && usize::from(raw) <= NOBJECTS {
            Ok(Self(raw))
        } else {
            Err(DataError::ObjectOutOfRange(raw))
        }
    }

    /// Position in the object table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every object id in table order.
    pub fn all() -> impl DoubleEndedIterator<Item = ObjectId> {
        (1..=NOBJECTS as u16).map(ObjectId)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(LocationId::checked(0).is_ok());
        assert!(LocationId::checked(NLOCATIONS as u16 - 1).is_ok());
        assert!(matches!(
            LocationId::checked(NLOCATIONS as u16),
            Err(DataError::LocationOutOfRange(_))
        ));
    }

    #[test]
    fn object_bounds() {
        assert!(ObjectId::checked(0).is_err());
        assert!(ObjectId::checked(1).is_ok());
        assert!(ObjectId::checked(NOBJECTS as u16 + 1).is_err());
        assert_eq!(ObjectId::all().count(), NOBJECTS);
    }
}
