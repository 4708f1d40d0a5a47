//! Turn-driven timers: dawdling penalties, the two closing clocks and the
//! lamp's battery.

use colossal_core::hints::TURN_THRESHOLDS;
use colossal_core::limits::{BATTERYLIFE, WARNTIME};
use colossal_core::locations::{NE, NOWHERE, SW, Y2};
use colossal_core::objects::{
    self, AXE, AXE_HERE, BATTERY, BEAR, BEAR_DEAD, BIRD, BIRD_CAGED, BOTTLE, CAGE, CHAIN,
    CHAIN_HEAP, CHASM, DEAD_BATTERIES, DWARF, EMPTY_BOTTLE, ENDGAME_SIGN, FISSURE,
    FRESH_BATTERIES, GRATE, GRATE_CLOSED, LAMP, LAMP_BRIGHT, LAMP_DARK, MIRROR, OYSTER, PILLOW,
    PLANT, PLANT_THIRSTY, ROD, ROD2, SIGN, SNAKE, SNAKE_CHASED, TROLL, TROLL2, UNBRIDGED,
};
use colossal_core::{ObjectId, messages};
use log::debug;

use crate::context::SimContext;
use crate::world::{Fixed, Place, Prop, World};

impl SimContext<'_> {
    /// Advance the closing clocks for one accepted command.
    ///
    /// Returns true on the turn the cave closes, when the player has just
    /// been moved into the repository and the turn should start over.
    pub fn closecheck(&mut self) -> bool {
        for threshold in &TURN_THRESHOLDS {
            if self.world.turns == threshold.turns + 1 {
                self.world.trnluz += threshold.penalty;
                self.out.say(threshold.message);
            }
        }

        let world = &mut *self.world;
        if world.tally == 0 && World::indeep(world.loc) && world.loc != Y2 {
            world.clock1 -= 1;
        }

        if world.clock1 == 0 {
            self.start_closing();
            return self.world.closed;
        } else if world.clock1 < 0 {
            world.clock2 -= 1;
        }

        if self.world.clock2 == 0 {
            self.close_cave();
            return true;
        }

        self.lampcheck();
        false
    }

    /// Lock the cave down: no more dwarves, troll or bridge, and the
    /// surface is out of reach.
    fn start_closing(&mut self) {
        let world = &mut *self.world;
        world.set_state(GRATE, GRATE_CLOSED);
        world.set_state(FISSURE, UNBRIDGED);
        for dwarf in &mut world.dwarves {
            dwarf.loc = NOWHERE;
            dwarf.seen = false;
        }

        let troll = objects::object(TROLL);
        world.destroy(TROLL);
        world.set_fixed(TROLL, Fixed::Free);
        world.move_to(TROLL2, Place::from(troll.plac));
        world.set_fixed(TROLL2, Fixed::from(troll.fixd));
        world.juggle(CHASM);

        if world.state(BEAR) != BEAR_DEAD {
            world.destroy(BEAR);
        }
        world.set_state(CHAIN, CHAIN_HEAP);
        world.set_fixed(CHAIN, Fixed::Free);
        world.set_state(AXE, AXE_HERE);
        world.set_fixed(AXE, Fixed::Free);

        self.out.say(messages::CAVE_CLOSING);
        world.clock1 = -1;
        world.closing = true;
        debug!("cave closing at turn {}", world.turns);
    }

    /// Build the repository tableau and put the player in it.
    fn close_cave(&mut self) {
        let world = &mut *self.world;
        world.put(BOTTLE, NE, EMPTY_BOTTLE);
        world.put(PLANT, NE, PLANT_THIRSTY);
        world.put(OYSTER, NE, 0);
        world.put(LAMP, NE, LAMP_DARK);
        world.put(ROD, NE, 0);
        world.put(DWARF, NE, 0);
        world.loc = NE;
        world.oldloc = NE;
        world.newloc = NE;

        world.move_to(GRATE, Place::At(SW));
        world.move_to(SIGN, Place::At(SW));
        world.set_state(SIGN, ENDGAME_SIGN);
        world.put(SNAKE, SW, SNAKE_CHASED);
        world.put(BIRD, SW, BIRD_CAGED);
        world.put(CAGE, SW, 0);
        world.put(ROD2, SW, 0);
        world.put(PILLOW, SW, 0);
        world.put(MIRROR, NE, 0);
        world.set_fixed(MIRROR, Fixed::At(SW));

        let carried: Vec<ObjectId> = world.carried().collect();
        for obj in carried {
            world.destroy(obj);
        }

        self.out.say(messages::CAVE_CLOSED);
        world.closed = true;
        debug!("cave closed at turn {}", world.turns);
    }

    /// Drain the lamp, swap in fresh batteries if they are at hand, and
    /// warn as the light fails.
    pub fn lampcheck(&mut self) {
        let world = &mut *self.world;
        if world.prop(LAMP) == Prop::Visible(LAMP_BRIGHT) {
            world.limit -= 1;
        }

        if world.limit <= WARNTIME {
            if world.here(BATTERY) && world.state(BATTERY) == FRESH_BATTERIES && world.here(LAMP) {
                self.out.say(messages::REPLACE_BATTERIES);
                world.set_state(BATTERY, DEAD_BATTERIES);
                world.limit += BATTERYLIFE;
                world.lmwarn = false;
            } else if !world.lmwarn && world.here(LAMP) {
                world.lmwarn = true;
                if world.state(BATTERY) == DEAD_BATTERIES {
                    self.out.say(messages::MISSING_BATTERIES);
                } else if world.place(BATTERY) == Place::Nowhere {
                    self.out.say(messages::LAMP_DIM);
                } else {
                    self.out.say(messages::GET_BATTERIES);
                }
            }
        }

        if world.limit == 0 {
            world.limit = -1;
            world.set_state(LAMP, LAMP_DARK);
            if world.here(LAMP) {
                self.out.say(messages::LAMP_OUT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::Narration;
    use colossal_core::locations::{self, BUILDING, MISTHALL};
    use colossal_core::objects::KEYS;

    fn tick(world: &mut World) -> (bool, String) {
        let mut out = Narration::new();
        let closed = SimContext::new(world, &mut out).closecheck();
        (closed, out.take())
    }

    fn closing_world() -> World {
        let mut world = World::new(3);
        world.tally = 0;
        world.loc = MISTHALL;
        world
    }

    #[test]
    fn clock1_only_runs_deep_with_everything_found() {
        let mut world = World::new(3);
        world.loc = MISTHALL;
        tick(&mut world);
        assert_eq!(world.clock1, colossal_core::limits::CLOCK1);
        world.tally = 0;
        world.loc = Y2;
        tick(&mut world);
        assert_eq!(world.clock1, colossal_core::limits::CLOCK1);
        world.loc = MISTHALL;
        tick(&mut world);
        assert_eq!(world.clock1, colossal_core::limits::CLOCK1 - 1);
    }

    #[test]
    fn closing_happens_exactly_once() {
        let mut world = closing_world();
        world.set_state(GRATE, objects::GRATE_OPEN);
        world.dwarves[0].seen = true;
        let mut warnings = 0;
        for _ in 0..colossal_core::limits::CLOCK1 + 5 {
            let (_, text) = tick(&mut world);
            warnings += text.matches(messages::CAVE_CLOSING).count();
        }
        assert_eq!(warnings, 1);
        assert!(world.closing);
        assert!(!world.closed);
        assert_eq!(world.state(GRATE), GRATE_CLOSED);
        assert!(world.dwarves.iter().all(|d| d.loc == NOWHERE && !d.seen));
        assert_eq!(world.place(TROLL), Place::Nowhere);
        assert_eq!(world.place(TROLL2), Place::At(locations::SWCHASM));
        assert_eq!(world.fixed(AXE), Fixed::Free);
    }

    #[test]
    fn second_clock_builds_the_repository() {
        let mut world = closing_world();
        world.carry(KEYS);
        world.clock1 = 1;
        let (closed, _) = tick(&mut world);
        assert!(!closed);
        let mut closed = false;
        for _ in 0..colossal_core::limits::CLOCK2 {
            let (done, _) = tick(&mut world);
            closed |= done;
        }
        assert!(closed);
        assert!(world.closed);
        assert_eq!(world.loc, NE);
        assert_eq!(world.place(KEYS), Place::Nowhere);
        assert_eq!(world.holdng, 0);
        assert_eq!(world.prop(BOTTLE), Prop::Hidden(EMPTY_BOTTLE));
        assert_eq!(world.prop(SIGN), Prop::Visible(ENDGAME_SIGN));
        assert_eq!(world.place(GRATE), Place::At(SW));
        assert_eq!(world.fixed(MIRROR), Fixed::At(SW));
        assert!(world.validate_placement().is_ok());
    }

    #[test]
    fn turn_threshold_charges_once() {
        let mut world = World::new(3);
        world.turns = 351;
        let (_, text) = tick(&mut world);
        assert_eq!(world.trnluz, 2);
        assert!(text.starts_with("Tsk!"));
        world.turns = 352;
        tick(&mut world);
        assert_eq!(world.trnluz, 2);
    }

    #[test]
    fn lamp_burns_down_and_warns() {
        let mut world = World::new(3);
        world.loc = BUILDING;
        world.carry(LAMP);
        world.set_state(LAMP, LAMP_BRIGHT);
        world.limit = WARNTIME + 1;
        let mut out = Narration::new();
        SimContext::new(&mut world, &mut out).lampcheck();
        assert_eq!(world.limit, WARNTIME);
        assert!(world.lmwarn);
        assert_eq!(out.take(), messages::LAMP_DIM);

        world.limit = 1;
        SimContext::new(&mut world, &mut out).lampcheck();
        assert_eq!(world.limit, -1);
        assert_eq!(world.state(LAMP), LAMP_DARK);
        assert_eq!(out.take(), messages::LAMP_OUT);
    }

    #[test]
    fn fresh_batteries_are_swapped_in() {
        let mut world = World::new(3);
        world.loc = BUILDING;
        world.carry(LAMP);
        world.drop_at(BATTERY, BUILDING);
        world.set_state(LAMP, LAMP_BRIGHT);
        world.limit = 10;
        let mut out = Narration::new();
        SimContext::new(&mut world, &mut out).lampcheck();
        assert_eq!(world.limit, 9 + BATTERYLIFE);
        assert_eq!(world.state(BATTERY), DEAD_BATTERIES);
        assert_eq!(out.take(), messages::REPLACE_BATTERIES);
    }
}
