use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Static per-location condition bits.
    ///
    /// The low group describes the place itself; the `HINT_*` group marks
    /// locations where a particular hint may be offered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Conditions: u32 {
        /// Lit without a lamp.
        const LIT = 1 << 0;
        /// Liquid available here (water unless `OILY`).
        const FLUID = 1 << 1;
        /// The liquid here is oil.
        const OILY = 1 << 2;
        /// The pirate never comes here.
        const NOARRR = 1 << 3;
        /// BACK is refused: the passages twist too much.
        const NOBACK = 1 << 4;
        /// Above ground.
        const ABOVE = 1 << 5;
        /// Far enough in to wake the dwarves.
        const DEEP = 1 << 6;
        /// Surrounded by trees.
        const FOREST = 1 << 7;

        /// Trying to get into the cave.
        const HINT_CAVE = 1 << 8;
        /// Trying to catch the bird.
        const HINT_BIRD = 1 << 9;
        /// Trying to get past the snake.
        const HINT_SNAKE = 1 << 10;
        /// Lost in the maze.
        const HINT_MAZE = 1 << 11;
        /// Exploring the dark room.
        const HINT_DARK = 1 << 12;
        /// Stuck at Witt's End.
        const HINT_WITT = 1 << 13;
        /// Puzzling over the urn.
        const HINT_URN = 1 << 14;
        /// Lost in the woods.
        const HINT_WOODS = 1 << 15;
        /// Facing the ogre.
        const HINT_OGRE = 1 << 16;
        /// Missing the last treasure.
        const HINT_JADE = 1 << 17;
    }
}

impl Conditions {
    /// Every hint bit, in hint-table order.
    pub const HINTS: [Conditions; 10] = [
        Self::HINT_CAVE,
        Self::HINT_BIRD,
        Self::HINT_SNAKE,
        Self::HINT_MAZE,
        Self::HINT_DARK,
        Self::HINT_WITT,
        Self::HINT_URN,
        Self::HINT_WOODS,
        Self::HINT_OGRE,
        Self::HINT_JADE,
    ];

    /// True when any hint bit is set.
    pub fn has_any_hint(self) -> bool {
        Self::HINTS.iter().any(|bit| self.contains(*bit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_bits_are_distinct_from_place_bits() {
        let place = Conditions::LIT
            | Conditions::FLUID
            | Conditions::OILY
            | Conditions::NOARRR
            | Conditions::NOBACK
            | Conditions::ABOVE
            | Conditions::DEEP
            | Conditions::FOREST;
        assert!(!place.has_any_hint());
        for bit in Conditions::HINTS {
            assert!(!place.intersects(bit));
            assert!(bit.has_any_hint());
        }
    }
}
