//! Travel rules: the per-location table consulted when the player moves.

use crate::ids::{LocationId, ObjectId};
use crate::vocab::Motion;

/// Guard on a travel rule. A failed guard falls through to the next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelCond {
    /// Always taken.
    Always,
    /// Taken with the given percent probability.
    Pct(u8),
    /// Taken only while the player carries the object.
    Carrying(ObjectId),
    /// Taken while the object is carried or at the player's location.
    With(ObjectId),
    /// Taken unless the object is in the given state.
    NotState(ObjectId, i32),
}

/// Where a travel rule leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDest {
    /// Move to a location.
    Goto(LocationId),
    /// Print a message and stay put.
    Speak(&'static str),
    /// Run one of the hard-coded movement routines.
    Special(u8),
}

/// One entry in a location's travel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelRule {
    /// Motions that select this rule. Empty means forced motion.
    pub motions: &'static [Motion],
    /// Guard.
    pub cond: TravelCond,
    /// Destination.
    pub dest: TravelDest,
    /// Dwarves never follow this edge.
    pub nodwarves: bool,
}

impl TravelRule {
    /// A rule that moves to `loc`.
    pub const fn to(motions: &'static [Motion], loc: LocationId) -> Self {
        Self {
            motions,
            cond: TravelCond::Always,
            dest: TravelDest::Goto(loc),
            nodwarves: false,
        }
    }

    /// A rule that only prints `msg`.
    pub const fn say(motions: &'static [Motion], msg: &'static str) -> Self {
        Self {
            motions,
            cond: TravelCond::Always,
            dest: TravelDest::Speak(msg),
            nodwarves: false,
        }
    }

    /// A rule that runs special routine `n`.
    pub const fn special(motions: &'static [Motion], n: u8) -> Self {
        Self {
            motions,
            cond: TravelCond::Always,
            dest: TravelDest::Special(n),
            nodwarves: false,
        }
    }

    /// An unconditional forced move.
    pub const fn forced(loc: LocationId) -> Self {
        Self::to(&[], loc)
    }

    /// Attach a guard.
    pub const fn when(mut self, cond: TravelCond) -> Self {
        self.cond = cond;
        self
    }

    /// Mark the edge as closed to dwarves.
    pub const fn no_dwarves(mut self) -> Self {
        self.nodwarves = true;
        self
    }

    /// True when the rule is keyed on `motion` or is a forced rule.
    pub fn accepts(&self, motion: Motion) -> bool {
        self.motions.is_empty() || self.motions.contains(&motion)
    }

    /// True for an unconditional forced rule.
    pub fn is_forced(&self) -> bool {
        self.motions.is_empty() && self.cond == TravelCond::Always
    }

    /// Goto destination, if any.
    pub fn goto(&self) -> Option<LocationId> {
        match self.dest {
            TravelDest::Goto(loc) => Some(loc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let rule = TravelRule::to(&[Motion::North], LocationId(3))
            .when(TravelCond::Pct(50))
            .no_dwarves();
        assert_eq!(rule.cond, TravelCond::Pct(50));
        assert!(rule.nodwarves);
        assert_eq!(rule.goto(), Some(LocationId(3)));
        assert!(rule.accepts(Motion::North));
        assert!(!rule.accepts(Motion::South));
        assert!(!rule.is_forced());
    }

    #[test]
    fn forced_rules_accept_everything() {
        let rule = TravelRule::forced(LocationId(0));
        assert!(rule.is_forced());
        assert!(rule.accepts(Motion::Xyzzy));
    }
}
