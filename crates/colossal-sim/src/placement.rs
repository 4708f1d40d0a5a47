//! Object placement primitives.
//!
//! Every change to where an object is goes through these methods, which
//! keep each location's list of objects in step with the objects' own
//! `place` and `fixed` fields.

use colossal_core::locations;
use colossal_core::objects::{BIRD, BOTTLE, LAMP, LAMP_DARK, OIL, OIL_BOTTLE, WATER, WATER_BOTTLE};
use colossal_core::{Conditions, LocationId, ObjectId};

use crate::world::{Fixed, Place, Prop, Slot, World};

/// True for objects that count toward the inventory limit. The bird rides
/// in its cage and liquids ride in the bottle.
pub fn has_weight(obj: ObjectId) -> bool {
    !matches!(obj, BIRD | WATER | OIL)
}

impl World {
    fn unlink(&mut self, loc: LocationId, slot: Slot) {
        let chain = &mut self.locations[loc.index()].atloc;
        if let Some(pos) = chain.iter().position(|s| *s == slot) {
            chain.remove(pos);
        }
    }

    fn link(&mut self, loc: LocationId, slot: Slot) {
        if !loc.is_nowhere() {
            self.locations[loc.index()].atloc.push_front(slot);
        }
    }

    /// Start carrying an object. Carrying something already carried does nothing.
    pub fn carry(&mut self, obj: ObjectId) {
        match self.place(obj) {
            Place::Carried => return,
            Place::At(loc) => self.unlink(loc, Slot::Main(obj)),
            Place::Nowhere => {}
        }
        self.objects[obj.index()].place = Place::Carried;
        if has_weight(obj) {
            self.holdng += 1;
        }
    }

    /// Put an object down at `to`, at the front of that location's list.
    ///
    /// An object lying elsewhere is taken from there first, so a drop can
    /// never leave it listed in two places.
    pub fn drop(&mut self, obj: ObjectId, to: Place) {
        match self.place(obj) {
            Place::Carried => {
                if has_weight(obj) {
                    self.holdng -= 1;
                }
            }
            Place::At(loc) => self.unlink(loc, Slot::Main(obj)),
            Place::Nowhere => {}
        }
        self.objects[obj.index()].place = to;
        if let Place::At(loc) = to {
            self.link(loc, Slot::Main(obj));
        }
    }

    /// Drop an object at a location.
    pub fn drop_at(&mut self, obj: ObjectId, loc: LocationId) {
        self.drop(obj, Place::from(loc));
    }

    /// Move an object anywhere. Equivalent to picking it up and dropping it.
    pub fn move_to(&mut self, obj: ObjectId, to: Place) {
        self.drop(obj, to);
    }

    /// Remove an object from the world.
    pub fn destroy(&mut self, obj: ObjectId) {
        self.move_to(obj, Place::Nowhere);
    }

    /// Move an object and stash it in `state` until the player picks it up.
    pub fn put(&mut self, obj: ObjectId, loc: LocationId, state: i32) {
        self.move_to(obj, Place::from(loc));
        self.set_prop(obj, Prop::Hidden(state));
    }

    /// Re-anchor an object, moving its second half if it has one.
    pub fn set_fixed(&mut self, obj: ObjectId, fixed: Fixed) {
        if let Fixed::At(loc) = self.fixed(obj) {
            self.unlink(loc, Slot::Second(obj));
        }
        self.objects[obj.index()].fixed = fixed;
        if let Fixed::At(loc) = fixed {
            self.link(loc, Slot::Second(obj));
        }
    }

    /// Bring both halves of an object to the front of their lists.
    pub fn juggle(&mut self, obj: ObjectId) {
        let place = self.place(obj);
        if let Place::At(loc) = place {
            self.unlink(loc, Slot::Main(obj));
            self.link(loc, Slot::Main(obj));
        }
        let fixed = self.fixed(obj);
        self.set_fixed(obj, fixed);
    }

    /// True while the player carries the object.
    pub fn toting(&self, obj: ObjectId) -> bool {
        self.place(obj) == Place::Carried
    }

    /// True when either half of the object is at the player's location.
    pub fn at(&self, obj: ObjectId) -> bool {
        self.place(obj) == Place::At(self.loc) || self.fixed(obj) == Fixed::At(self.loc)
    }

    /// True when the object is carried or at the player's location.
    pub fn here(&self, obj: ObjectId) -> bool {
        self.at(obj) || self.toting(obj)
    }

    /// Liquid in the bottle, if any.
    pub fn liquid(&self) -> Option<ObjectId> {
        match self.prop(BOTTLE) {
            Prop::Visible(WATER_BOTTLE) => Some(WATER),
            Prop::Visible(OIL_BOTTLE) => Some(OIL),
            _ => None,
        }
    }

    /// Liquid naturally present at a location, if any.
    pub fn liqloc(&self, loc: LocationId) -> Option<ObjectId> {
        let conds = locations::location(loc).conditions;
        if !conds.contains(Conditions::FLUID) {
            None
        } else if conds.contains(Conditions::OILY) {
            Some(OIL)
        } else {
            Some(WATER)
        }
    }

    /// True when the lamp is lit.
    pub fn lamp_lit(&self) -> bool {
        self.state(LAMP) != LAMP_DARK
    }

    /// True when the player's location is dark.
    pub fn dark(&self) -> bool {
        let lit = locations::location(self.loc)
            .conditions
            .contains(Conditions::LIT);
        !lit && (!self.lamp_lit() || !self.here(LAMP))
    }

    /// True for a location above ground or in the forest.
    pub fn outside(loc: LocationId) -> bool {
        let conds = locations::location(loc).conditions;
        conds.intersects(Conditions::ABOVE | Conditions::FOREST)
    }

    /// True for a location in the cave proper, counting the building.
    pub fn inside(loc: LocationId) -> bool {
        !Self::outside(loc) || loc == locations::BUILDING
    }

    /// True for a location deep enough to wake the dwarves.
    pub fn indeep(loc: LocationId) -> bool {
        locations::location(loc)
            .conditions
            .contains(Conditions::DEEP)
    }

    /// True for a location with the given condition bits.
    pub fn has_condition(loc: LocationId, bits: Conditions) -> bool {
        !loc.is_nowhere() && locations::location(loc).conditions.contains(bits)
    }

    /// Objects carried by the player, in table order.
    pub fn carried(&self) -> impl Iterator<Item = ObjectId> + '_ {
        ObjectId::all().filter(|obj| self.toting(*obj))
    }

    /// Weight of everything carried, recomputed from scratch.
    pub fn carried_weight(&self) -> i32 {
        self.carried().filter(|obj| has_weight(*obj)).count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colossal_core::locations::{BUILDING, START};
    use colossal_core::objects::{CAGE, FOOD, KEYS, NOBJECTS};
    use proptest::prelude::*;

    fn chain(world: &World, loc: LocationId) -> Vec<Slot> {
        world.atloc(loc).collect()
    }

    #[test]
    fn carry_and_drop_track_weight() {
        let mut world = World::new(3);
        world.loc = BUILDING;
        world.carry(LAMP);
        assert!(world.toting(LAMP));
        assert_eq!(world.holdng, 1);
        assert!(!chain(&world, BUILDING).contains(&Slot::Main(LAMP)));
        world.drop_at(LAMP, START);
        assert_eq!(world.holdng, 0);
        assert_eq!(chain(&world, START).first(), Some(&Slot::Main(LAMP)));
    }

    #[test]
    fn bird_is_weightless() {
        let mut world = World::new(3);
        world.carry(BIRD);
        world.carry(CAGE);
        assert_eq!(world.holdng, 1);
        world.drop_at(BIRD, BUILDING);
        assert_eq!(world.holdng, 1);
    }

    #[test]
    fn liquids_are_weightless() {
        let mut world = World::new(3);
        world.carry(WATER);
        assert_eq!(world.holdng, 0);
        world.destroy(WATER);
        assert_eq!(world.holdng, 0);
    }

    #[test]
    fn carrying_twice_is_harmless() {
        let mut world = World::new(3);
        world.carry(KEYS);
        world.carry(KEYS);
        assert_eq!(world.holdng, 1);
    }

    #[test]
    fn drop_from_a_location_relinks() {
        let mut world = World::new(3);
        world.drop_at(FOOD, START);
        assert!(!chain(&world, BUILDING).contains(&Slot::Main(FOOD)));
        assert_eq!(chain(&world, START).first(), Some(&Slot::Main(FOOD)));
    }

    #[test]
    fn juggle_moves_to_front() {
        let mut world = World::new(3);
        let before = chain(&world, BUILDING);
        let last = before.last().copied().map(Slot::object);
        if let Some(obj) = last {
            world.juggle(obj);
            assert_eq!(chain(&world, BUILDING).first().map(|s| s.object()), Some(obj));
        }
    }

    #[test]
    fn put_stashes_the_state() {
        let mut world = World::new(3);
        world.put(LAMP, START, LAMP_DARK);
        assert_eq!(world.prop(LAMP), Prop::Hidden(LAMP_DARK));
        assert_eq!(world.place(LAMP), Place::At(START));
    }

    #[test]
    fn liquid_follows_bottle_state() {
        let mut world = World::new(3);
        world.set_state(BOTTLE, WATER_BOTTLE);
        assert_eq!(world.liquid(), Some(WATER));
        world.set_state(BOTTLE, OIL_BOTTLE);
        assert_eq!(world.liquid(), Some(OIL));
        world.set_state(BOTTLE, 1);
        assert_eq!(world.liquid(), None);
    }

    #[test]
    fn dark_needs_lamp_here_and_lit() {
        let mut world = World::new(3);
        world.loc = colossal_core::locations::DEBRIS;
        world.drop_at(LAMP, BUILDING);
        assert!(world.dark());
        world.carry(LAMP);
        assert!(world.dark());
        world.set_state(LAMP, colossal_core::objects::LAMP_BRIGHT);
        assert!(!world.dark());
    }

    proptest! {
        #[test]
        fn chains_stay_consistent(ops in prop::collection::vec((1u16..=NOBJECTS as u16, 0u8..4, 1u16..100), 1..60)) {
            let mut world = World::new(11);
            for (raw, op, loc) in ops {
                let obj = ObjectId(raw);
                let loc = LocationId(loc);
                match op {
                    0 => world.carry(obj),
                    1 => world.drop_at(obj, loc),
                    2 => world.destroy(obj),
                    _ => world.juggle(obj),
                }
            }
            prop_assert!(world.validate_placement().is_ok());
            prop_assert_eq!(world.holdng, world.carried_weight());
        }

        #[test]
        fn carry_drop_round_trip_keeps_other_order(pick in 0usize..8) {
            let mut world = World::new(5);
            let before = chain(&world, BUILDING);
            let Some(slot) = before.get(pick % before.len().max(1)).copied() else {
                return Ok(());
            };
            let obj = slot.object();
            world.carry(obj);
            world.drop_at(obj, BUILDING);
            let after: Vec<_> = chain(&world, BUILDING).into_iter().filter(|s| *s != slot).collect();
            let expected: Vec<_> = before.into_iter().filter(|s| *s != slot).collect();
            prop_assert_eq!(after, expected);
        }
    }
}
