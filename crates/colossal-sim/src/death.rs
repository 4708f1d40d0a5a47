//! Losing a life and coming back in the well house.

use colossal_core::ObjectId;
use colossal_core::locations::{BUILDING, START};
use colossal_core::objects::{LAMP, LAMP_DARK, OIL, WATER};
use log::debug;

use crate::world::World;

impl World {
    /// Bring the player back to life in the building.
    ///
    /// Liquids are spilled, the lamp is switched off and left at the road,
    /// and everything else carried stays where the player last stood.
    pub fn reincarnate(&mut self) {
        self.destroy(WATER);
        self.destroy(OIL);
        if self.toting(LAMP) {
            self.set_state(LAMP, LAMP_DARK);
        }
        let carried: Vec<ObjectId> = self.carried().collect();
        for obj in carried.into_iter().rev() {
            let to = if obj == LAMP { START } else { self.oldlc2 };
            self.drop_at(obj, to);
        }
        self.loc = BUILDING;
        self.oldloc = BUILDING;
        self.newloc = BUILDING;
        debug!("reincarnated after death {}", self.numdie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Place;
    use colossal_core::locations::MISTHALL;
    use colossal_core::objects::{BOTTLE, KEYS, LAMP_BRIGHT, WATER_BOTTLE};

    #[test]
    fn belongings_are_left_behind() {
        let mut world = World::new(1);
        world.carry(LAMP);
        world.set_state(LAMP, LAMP_BRIGHT);
        world.carry(KEYS);
        world.carry(BOTTLE);
        world.set_state(BOTTLE, WATER_BOTTLE);
        world.carry(WATER);
        world.loc = MISTHALL;
        world.oldlc2 = MISTHALL;
        world.numdie = 1;

        world.reincarnate();

        assert_eq!(world.loc, BUILDING);
        assert_eq!(world.newloc, BUILDING);
        assert_eq!(world.place(LAMP), Place::At(START));
        assert_eq!(world.state(LAMP), LAMP_DARK);
        assert_eq!(world.place(KEYS), Place::At(MISTHALL));
        assert_eq!(world.place(BOTTLE), Place::At(MISTHALL));
        assert_eq!(world.place(WATER), Place::Nowhere);
        assert_eq!(world.holdng, 0);
        assert!(world.validate().is_ok());
    }
}
