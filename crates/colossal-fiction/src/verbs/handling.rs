//! Picking things up, putting them down, and the liquids.

use colossal_core::limits::PANICTIME;
use colossal_core::objects::{
    self, BATTERY, BEAR, BIRD, BIRD_CAGED, BIRD_FOREST_UNCAGED, BIRD_UNCAGED, BLOOD, BOTTLE, CAGE,
    CAVITY, CAVITY_EMPTY, CAVITY_FULL, CHAIN, CHASM, CLAM, COINS, DOOR, DOOR_RUSTED, DOOR_UNRUSTED,
    DRAGON, DRAGON_BARS, DRAGON_BLOODLESS, EMERALD, EMPTY_BOTTLE, FOOD, FRESH_BATTERIES, INVLIMIT,
    MESSAG, OIL, OIL_BOTTLE, PILLOW, PLANT, PLANT_THIRSTY, PLANT2, RUBY, RUG, RUG_FLOOR, RUG_HOVER,
    SAPPH, SIGN, SITTING_BEAR, SNAKE, SNAKE_CHASED, STATE_IN_CAVITY, TROLL, TROLL_GONE, TROLL2,
    UNTAMED_BEAR, URN, URN_DARK, URN_EMPTY, VASE, VASE_BROKEN, VASE_DROPPED, VASE_WHOLE, VEND,
    WATER, WATER_BOTTLE, is_gemstone,
};
use colossal_core::{Conditions, ObjectId, Verb, messages};
use colossal_sim::{DwarfHere, Fixed, Place, Prop, World};

use crate::dispatch::{Phase, Target};
use crate::game::Game;

impl Game {
    /// CARRY, TAKE, GET.
    pub(crate) fn vcarry(&mut self, verb: Verb, target: Target) -> Phase {
        let obj = match target {
            Some(obj) => obj,
            None => {
                let loc = self.world.loc;
                let mut slots = self.world.atloc(loc);
                match (slots.next(), slots.next()) {
                    (Some(only), None)
                        if !matches!(self.world.atdwrf(loc), DwarfHere::Present(_)) =>
                    {
                        only.object()
                    }
                    _ => return Phase::Unknown,
                }
            }
        };

        if self.world.toting(obj) {
            return self.decline(verb);
        }
        if obj == MESSAG {
            self.world.destroy(MESSAG);
            return self.reply(messages::REMOVE_MESSAGE);
        }
        if self.world.fixed(obj) != Fixed::Free {
            return self.reply(self.immovable(obj));
        }

        let mut obj = obj;
        if obj == WATER || obj == OIL {
            if !self.world.here(BOTTLE) || self.world.liquid() != Some(obj) {
                if !self.world.toting(BOTTLE) {
                    return self.reply(messages::NO_CONTAINER);
                }
                if self.world.state(BOTTLE) == EMPTY_BOTTLE {
                    return self.fill(verb, Some(BOTTLE));
                }
                return self.reply(messages::BOTTLE_FULL);
            }
            obj = BOTTLE;
        }

        if self.world.holdng >= INVLIMIT as i32 {
            return self.reply(messages::CARRY_LIMIT);
        }

        if obj == BIRD
            && self.world.state(BIRD) != BIRD_CAGED
            && !self.world.prop(BIRD).is_hidden()
        {
            if self.world.state(BIRD) == BIRD_FOREST_UNCAGED {
                self.world.destroy(BIRD);
                return self.reply(messages::BIRD_CRAP);
            }
            if !self.world.toting(CAGE) {
                return self.reply(messages::CANNOT_CARRY);
            }
            if self.world.toting(objects::ROD) {
                return self.reply(messages::BIRD_EVADES);
            }
            self.world.set_state(BIRD, BIRD_CAGED);
        }
        if (obj == BIRD || obj == CAGE) && self.world.state(BIRD) == BIRD_CAGED {
            let other = if obj == BIRD { CAGE } else { BIRD };
            self.world.carry(other);
        }

        self.world.carry(obj);
        if obj == BOTTLE {
            if let Some(liquid) = self.world.liquid() {
                self.world.carry(liquid);
            }
        }
        if is_gemstone(obj) && self.world.state(obj) != 0 {
            self.world.set_state(obj, 0);
            self.world.set_state(CAVITY, CAVITY_EMPTY);
        }
        self.reply(messages::OK_MAN)
    }

    /// Why a fixed object stays where it is.
    fn immovable(&self, obj: ObjectId) -> &'static str {
        let world = &self.world;
        match obj {
            PLANT if world.prop(PLANT).raw() <= PLANT_THIRSTY => messages::DEEP_ROOTS,
            BEAR if world.state(BEAR) == SITTING_BEAR => messages::BEAR_CHAINED,
            CHAIN if world.state(BEAR) != UNTAMED_BEAR => messages::STILL_LOCKED,
            RUG if world.state(RUG) == RUG_HOVER => messages::RUG_HOVERS,
            URN => messages::URN_NOBUDGE,
            CAVITY => messages::DOUGHNUT_HOLES,
            BLOOD => messages::FEW_DROPS,
            SIGN => messages::HAND_PASSTHROUGH,
            _ => messages::YOU_JOKING,
        }
    }

    /// DROP. THROW lands here for most objects too.
    pub(crate) fn discard(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        let mut obj = obj;
        if obj == objects::ROD
            && !self.world.toting(objects::ROD)
            && self.world.toting(objects::ROD2)
        {
            obj = objects::ROD2;
        }
        if !self.world.toting(obj) {
            return self.decline(verb);
        }
        let loc = self.world.loc;

        if is_gemstone(obj) && self.world.at(CAVITY) && self.world.state(CAVITY) != CAVITY_FULL {
            self.say(messages::GEM_FITS);
            self.world.set_state(obj, STATE_IN_CAVITY);
            self.world.set_state(CAVITY, CAVITY_FULL);
            self.settle_rug(obj);
            self.world.drop_at(obj, loc);
            return Phase::ClearObj;
        }

        if obj == COINS && self.world.here(VEND) {
            self.world.destroy(COINS);
            self.world.drop_at(BATTERY, loc);
            self.ctx().describe_object(BATTERY, FRESH_BATTERIES);
            return Phase::ClearObj;
        }

        if self.world.liquid() == Some(obj) {
            obj = BOTTLE;
        }
        if obj == BOTTLE {
            if let Some(liquid) = self.world.liquid() {
                self.world.destroy(liquid);
            }
        }

        if obj == BEAR && self.world.at(TROLL) {
            self.state_change(TROLL, TROLL_GONE);
            self.troll_leaves();
            self.world.drop_at(obj, loc);
            return Phase::ClearObj;
        }

        if obj == VASE && loc != objects::object(PILLOW).plac {
            let state = if self.world.at(PILLOW) {
                VASE_WHOLE
            } else {
                VASE_DROPPED
            };
            self.state_change(VASE, state);
            if self.world.state(VASE) != VASE_WHOLE {
                self.world.set_fixed(VASE, Fixed::Immovable);
            }
            self.world.drop_at(obj, loc);
            return Phase::ClearObj;
        }

        if obj == CAGE && self.world.state(BIRD) == BIRD_CAGED {
            self.world.drop_at(BIRD, loc);
        }

        if obj == BIRD {
            if self.world.at(DRAGON) && self.world.state(DRAGON) == DRAGON_BARS {
                self.world.destroy(BIRD);
                return self.reply(messages::BIRD_BURNT);
            }
            if self.world.here(SNAKE) {
                self.say(messages::BIRD_ATTACKS);
                if self.world.closed {
                    return Phase::DwarfWake;
                }
                self.world.destroy(SNAKE);
                self.world.set_state(SNAKE, SNAKE_CHASED);
            } else {
                self.say(messages::OK_MAN);
            }
            let state = if World::has_condition(loc, Conditions::FOREST) {
                BIRD_FOREST_UNCAGED
            } else {
                BIRD_UNCAGED
            };
            self.world.set_state(BIRD, state);
            self.world.drop_at(BIRD, loc);
            return Phase::ClearObj;
        }

        self.say(messages::OK_MAN);
        self.world.drop_at(obj, loc);
        Phase::ClearObj
    }

    /// A gem set in the cavity may lift or lower the rug.
    fn settle_rug(&mut self, gem: ObjectId) {
        let hovering = self.world.state(RUG) == RUG_HOVER;
        let moves = (gem == EMERALD && !hovering) || (gem == RUBY && hovering);
        if !self.world.here(RUG) || !moves {
            return;
        }
        let carried = self.world.toting(RUG);
        let text = if gem == RUBY {
            messages::RUG_SETTLES
        } else if carried {
            messages::RUG_WIGGLES
        } else {
            messages::RUG_RISES
        };
        self.say(text);
        if !carried || gem == RUBY {
            if hovering {
                self.world.set_state(RUG, RUG_FLOOR);
                self.world.set_fixed(RUG, Fixed::Free);
            } else {
                self.world.set_state(RUG, RUG_HOVER);
                self.world
                    .set_fixed(RUG, Fixed::At(objects::object(SAPPH).plac));
            }
        }
    }

    /// Send the troll away and leave his marker at the bridge.
    pub(crate) fn troll_leaves(&mut self) {
        let troll = objects::object(TROLL);
        self.world.destroy(TROLL);
        self.world.set_fixed(TROLL, Fixed::Free);
        self.world.move_to(TROLL2, Place::from(troll.plac));
        self.world.set_fixed(TROLL2, Fixed::from(troll.fixd));
        self.world.juggle(CHASM);
    }

    /// INVENTORY on its own.
    pub(crate) fn inventory_list(&mut self) -> Phase {
        let lines: Vec<&'static str> = self
            .world
            .carried()
            .filter(|obj| *obj != BEAR)
            .filter_map(|obj| objects::object(obj).inventory)
            .collect();
        if !lines.is_empty() {
            self.say(messages::NOW_HOLDING);
        }
        for line in &lines {
            self.say(*line);
        }
        if self.world.toting(BEAR) {
            self.say(messages::TAME_BEAR);
        }
        if lines.is_empty() {
            self.say(messages::NO_CARRY);
        }
        Phase::ClearObj
    }

    /// FIND, WHERE.
    pub(crate) fn find(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        let world = &self.world;
        if world.toting(obj) {
            return self.reply(messages::ALREADY_CARRYING);
        }
        if world.closed {
            return self.reply(messages::NEEDED_NEARBY);
        }
        let here = world.at(obj)
            || (world.liquid() == Some(obj) && world.at(BOTTLE))
            || world.liqloc(world.loc) == Some(obj)
            || (obj == objects::DWARF && matches!(world.atdwrf(world.loc), DwarfHere::Present(_)));
        if here {
            return self.reply(messages::YES_HERE);
        }
        self.decline(verb)
    }

    /// FILL. Bottle or urn must be empty, and liquid available.
    pub(crate) fn fill(&mut self, verb: Verb, target: Target) -> Phase {
        let loc = self.world.loc;
        match target {
            Some(VASE) => {
                if self.world.liqloc(loc).is_none() {
                    return self.reply(messages::FILL_INVALID);
                }
                if !self.world.toting(VASE) {
                    return self.reply(messages::ARENT_CARRYING);
                }
                self.say(messages::SHATTER_VASE);
                self.world.set_state(VASE, VASE_BROKEN);
                self.world.set_fixed(VASE, Fixed::Immovable);
                self.world.drop_at(VASE, loc);
                return Phase::ClearObj;
            }
            Some(URN) => {
                if self.world.state(URN) != URN_EMPTY {
                    return self.reply(messages::FULL_URN);
                }
                if !self.world.here(BOTTLE) {
                    return self.reply(messages::FILL_INVALID);
                }
                let Some(liquid) = self.world.liquid() else {
                    return self.reply(messages::FILL_INVALID);
                };
                self.world.set_state(BOTTLE, EMPTY_BOTTLE);
                if liquid == OIL {
                    self.world.set_state(URN, URN_DARK);
                    self.say(messages::OIL_URN);
                } else {
                    self.say(messages::WATER_URN);
                }
                self.world.destroy(liquid);
                return Phase::ClearObj;
            }
            Some(BOTTLE) => {}
            Some(_) => return self.decline(verb),
            None if !self.world.here(BOTTLE) => return Phase::Unknown,
            None => {}
        }

        if self.world.here(URN) && self.world.state(URN) != URN_EMPTY {
            return self.reply(messages::URN_NOPOUR);
        }
        if self.world.liquid().is_some() {
            return self.reply(messages::BOTTLE_FULL);
        }
        let state = match self.world.liqloc(loc) {
            None => return self.reply(messages::NO_LIQUID),
            Some(OIL) => OIL_BOTTLE,
            Some(_) => WATER_BOTTLE,
        };
        self.state_change(BOTTLE, state);
        if self.world.toting(BOTTLE) {
            if let Some(liquid) = self.world.liquid() {
                self.world.carry(liquid);
            }
        }
        Phase::ClearObj
    }

    /// POUR. With no object, or the bottle, pour whatever the bottle holds.
    pub(crate) fn pour(&mut self, verb: Verb, target: Target) -> Phase {
        let obj = match target {
            None | Some(BOTTLE) => self.world.liquid(),
            other => other,
        };
        let Some(obj) = obj else {
            return Phase::Unknown;
        };
        if !self.world.toting(obj) {
            return self.decline(verb);
        }
        if obj != OIL && obj != WATER {
            return self.reply(messages::CANT_POUR);
        }
        if self.world.here(URN) && self.world.state(URN) == URN_EMPTY {
            return self.fill(verb, Some(URN));
        }

        self.world.set_state(BOTTLE, EMPTY_BOTTLE);
        self.world.destroy(obj);
        if !self.world.at(PLANT) && !self.world.at(DOOR) {
            return self.reply(messages::GROUND_WET);
        }
        if self.world.at(DOOR) {
            let state = if obj == OIL {
                DOOR_UNRUSTED
            } else {
                DOOR_RUSTED
            };
            self.state_change(DOOR, state);
            return Phase::ClearObj;
        }
        if obj == OIL {
            return self.reply(messages::SHAKING_LEAVES);
        }
        let grown = (self.world.state(PLANT) + 1) % 3;
        self.state_change(PLANT, grown);
        self.world.set_state(PLANT2, grown);
        Phase::Move
    }

    /// EAT. On its own, eats the food if there is any.
    pub(crate) fn eat(&mut self, verb: Verb, target: Target) -> Phase {
        match target {
            None if !self.world.here(FOOD) => Phase::Unknown,
            None | Some(FOOD) => {
                self.world.destroy(FOOD);
                self.reply(messages::THANKS_DELICIOUS)
            }
            Some(
                BIRD | SNAKE | CLAM | objects::OYSTER | objects::DWARF | DRAGON | TROLL | BEAR
                | objects::OGRE,
            ) => self.reply(messages::LOST_APPETITE),
            Some(_) => self.decline(verb),
        }
    }

    /// DRINK. On its own, drinks water from the bottle or the stream.
    pub(crate) fn drink(&mut self, verb: Verb, target: Target) -> Phase {
        let loc = self.world.loc;
        let bottled_water = self.world.liquid() == Some(WATER) && self.world.here(BOTTLE);
        if target.is_none() && self.world.liqloc(loc) != Some(WATER) && !bottled_water {
            return Phase::Unknown;
        }
        match target {
            Some(BLOOD) => {
                self.world.destroy(BLOOD);
                self.state_change(DRAGON, DRAGON_BLOODLESS);
                self.world.blooded = true;
                Phase::ClearObj
            }
            Some(obj) if obj != WATER => self.reply(messages::RIDICULOUS_ATTEMPT),
            _ if bottled_water => {
                self.world.destroy(WATER);
                self.state_change(BOTTLE, EMPTY_BOTTLE);
                Phase::ClearObj
            }
            _ => self.decline(verb),
        }
    }

    /// Count down the exit when the player tries to leave a closing cave.
    pub(crate) fn exit_closed(&mut self) {
        self.say(messages::EXIT_CLOSED);
        if !self.world.panic {
            self.world.clock2 = PANICTIME;
        }
        self.world.panic = true;
    }

    /// Mark a treasure found, keeping the tally in step.
    pub(crate) fn reveal(&mut self, obj: ObjectId, state: i32) {
        if self.world.is_undiscovered(obj) {
            self.world.tally -= 1;
        }
        self.world.set_prop(obj, Prop::Visible(state));
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{BUILDING, EASTPIT, IMMENSE, ORIENTAL, START};
    use colossal_core::objects::*;
    use colossal_core::{Verb, messages};
    use colossal_sim::{Fixed, Place};

    fn game_at(loc: colossal_core::LocationId) -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(31).with_novice_prompt(false));
        game.opening();
        game.world.loc = loc;
        game.world.newloc = loc;
        game
    }

    #[test]
    fn carrying_twice_is_refused() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("take keys"), messages::OK_MAN);
        assert_eq!(game.process("take keys"), messages::ALREADY_CARRYING);
    }

    #[test]
    fn carry_alone_needs_a_single_object() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("take"), "Take what?");
        let mut game = game_at(START);
        game.world.drop_at(KEYS, START);
        assert_eq!(game.process("take"), messages::OK_MAN);
        assert!(game.world().toting(KEYS));
    }

    #[test]
    fn inventory_limit_holds() {
        let mut game = game_at(BUILDING);
        for obj in [CAGE, ROD, PILLOW, MAGAZINE, AXE, BATTERY, NUGGET] {
            game.world.carry(obj);
        }
        assert_eq!(game.process("take keys"), messages::CARRY_LIMIT);
        assert!(!game.world().toting(KEYS));
    }

    #[test]
    fn bird_needs_the_cage_and_no_rod() {
        let mut game = game_at(colossal_core::locations::BIRDCHAMBER);
        assert_eq!(game.process("take bird"), messages::CANNOT_CARRY);
        game.world.carry(CAGE);
        game.world.carry(ROD);
        assert_eq!(game.process("take bird"), messages::BIRD_EVADES);
        game.world.drop_at(ROD, START);
        assert_eq!(game.process("take bird"), messages::OK_MAN);
        assert_eq!(game.world().state(BIRD), BIRD_CAGED);
        assert!(game.world().toting(BIRD));

        game.process("drop cage");
        assert_eq!(game.world().place(BIRD), game.world().place(CAGE));
    }

    #[test]
    fn bird_drives_off_the_snake() {
        let mut game = game_at(colossal_core::locations::KINGHALL);
        game.world.carry(CAGE);
        game.world.carry(BIRD);
        game.world.set_state(BIRD, BIRD_CAGED);
        let text = game.process("drop bird");
        assert!(text.starts_with(messages::BIRD_ATTACKS));
        assert_eq!(game.world().place(SNAKE), Place::Nowhere);
        assert_eq!(game.world().state(SNAKE), SNAKE_CHASED);
        assert_eq!(game.world().state(BIRD), BIRD_UNCAGED);
    }

    #[test]
    fn fixed_things_stay_put() {
        let mut game = game_at(IMMENSE);
        assert_eq!(game.process("take door"), messages::YOU_JOKING);
        let mut game = game_at(colossal_core::locations::WESTPIT);
        assert_eq!(game.process("take plant"), messages::DEEP_ROOTS);
    }

    #[test]
    fn vase_breaks_without_the_pillow() {
        let mut game = game_at(BUILDING);
        game.world.carry(VASE);
        game.world.set_state(VASE, VASE_WHOLE);
        game.process("drop vase");
        assert_eq!(game.world().state(VASE), VASE_DROPPED);
        assert_eq!(game.world().fixed(VASE), Fixed::Immovable);

        let mut game = game_at(ORIENTAL);
        game.world.carry(VASE);
        game.world.set_state(VASE, VASE_WHOLE);
        game.world.drop_at(PILLOW, ORIENTAL);
        game.process("drop vase");
        assert_eq!(game.world().state(VASE), VASE_WHOLE);
        assert_eq!(game.world().fixed(VASE), Fixed::Free);
    }

    #[test]
    fn water_makes_the_plant_grow() {
        let mut game = game_at(colossal_core::locations::WESTPIT);
        game.world.carry(BOTTLE);
        game.world.carry(WATER);
        game.world.set_state(BOTTLE, WATER_BOTTLE);
        game.process("pour water");
        assert_eq!(game.world().state(PLANT), PLANT_BELLOWING);
        assert_eq!(game.world().state(PLANT2), PLANT_BELLOWING);
        assert_eq!(game.world().state(BOTTLE), EMPTY_BOTTLE);
        assert_eq!(game.world().place(WATER), Place::Nowhere);
    }

    #[test]
    fn pouring_elsewhere_wets_the_ground() {
        let mut game = game_at(EASTPIT);
        game.world.carry(BOTTLE);
        game.world.carry(WATER);
        game.world.set_state(BOTTLE, WATER_BOTTLE);
        assert_eq!(game.process("pour"), messages::GROUND_WET);
        assert!(game.world().liquid().is_none());
    }

    #[test]
    fn oil_frees_the_door() {
        let mut game = game_at(IMMENSE);
        game.world.carry(BOTTLE);
        game.world.carry(OIL);
        game.world.set_state(BOTTLE, OIL_BOTTLE);
        game.process("pour oil");
        assert_eq!(game.world().state(DOOR), DOOR_UNRUSTED);
        assert_eq!(game.process("open door"), messages::OK_MAN);
    }

    #[test]
    fn eating_and_drinking() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("eat"), messages::THANKS_DELICIOUS);
        assert_eq!(game.world().place(FOOD), Place::Nowhere);
        assert_eq!(game.process("eat keys"), Verb::Eat.message());
        game.world.destroy(BOTTLE);
        assert_eq!(game.process("drink"), Verb::Drink.message());
    }

    #[test]
    fn inventory_lists_what_is_carried() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("inventory"), messages::NO_CARRY);
        game.process("get lamp");
        let text = game.process("i");
        assert!(text.starts_with(messages::NOW_HOLDING));
        assert!(text.contains("Brass lantern"));
    }

    #[test]
    fn coins_buy_batteries() {
        let mut game = game_at(colossal_core::locations::DEADEND13);
        game.world.carry(COINS);
        game.world.drop_at(VEND, colossal_core::locations::DEADEND13);
        game.process("drop coins");
        assert_eq!(game.world().place(COINS), Place::Nowhere);
        assert_eq!(game.world().place(BATTERY), Place::At(colossal_core::locations::DEADEND13));
    }
}
