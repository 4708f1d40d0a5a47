//! Attacking, feeding and provoking the cave's inhabitants.

use colossal_core::limits::{NDWARVES, PIRATE};
use colossal_core::locations::{LONGWEST, NOWHERE};
use colossal_core::objects::{
    self, AXE, AXE_HERE, AXE_LOST, BEAR, BEAR_DEAD, BIRD, CLAM, CONTENTED_BEAR, DRAGON,
    DRAGON_BARS, DWARF, FOOD, OGRE, OYSTER, SITTING_BEAR, SNAKE, TROLL, UNTAMED_BEAR, VEND,
    VEND_BLOCKS, VEND_UNBLOCKS,
};
use colossal_core::{ObjectId, Verb, messages};
use colossal_sim::{DwarfHere, Fixed};
use log::debug;

use crate::dispatch::{Phase, Target};
use crate::game::Game;
use crate::question::Question;

impl Game {
    /// The single obvious thing to attack here, if there is one.
    fn attack_target(&self, verb: Verb) -> Result<Target, ()> {
        let world = &self.world;
        let mut found: Vec<ObjectId> = Vec::new();
        if matches!(world.atdwrf(world.loc), DwarfHere::Present(_)) {
            found.push(DWARF);
        }
        if world.here(SNAKE) {
            found.push(SNAKE);
        }
        if world.at(DRAGON) && world.state(DRAGON) == DRAGON_BARS {
            found.push(DRAGON);
        }
        if world.at(TROLL) {
            found.push(TROLL);
        }
        if world.at(OGRE) {
            found.push(OGRE);
        }
        if world.here(BEAR) && world.state(BEAR) == UNTAMED_BEAR {
            found.push(BEAR);
        }
        if found.is_empty() {
            if world.here(BIRD) && verb != Verb::Throw {
                found.push(BIRD);
            }
            if world.here(VEND) && verb != Verb::Throw {
                found.push(VEND);
            }
            if world.here(CLAM) || world.here(OYSTER) {
                found.push(CLAM);
            }
        }
        match found.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            _ => Err(()),
        }
    }

    /// ATTACK, KILL. THROW comes here when there is nothing better to hit.
    pub(crate) fn attack(&mut self, verb: Verb, target: Target) -> Phase {
        let target = match target {
            Some(obj) => Some(obj),
            None => match self.attack_target(verb) {
                Ok(found) => found,
                Err(()) => return Phase::Unknown,
            },
        };
        let Some(obj) = target else {
            return self.reply(messages::NO_TARGET);
        };

        match obj {
            BIRD if self.world.closed => self.reply(messages::UNHAPPY_BIRD),
            BIRD => {
                self.world.destroy(BIRD);
                self.reply(messages::BIRD_DEAD)
            }
            VEND => {
                let state = if self.world.state(VEND) == VEND_BLOCKS {
                    VEND_UNBLOCKS
                } else {
                    VEND_BLOCKS
                };
                self.state_change(VEND, state);
                Phase::ClearObj
            }
            BEAR => {
                let text = match self.world.state(BEAR) {
                    UNTAMED_BEAR => messages::BEAR_HANDS,
                    SITTING_BEAR | CONTENTED_BEAR => messages::BEAR_CONFUSED,
                    _ => messages::ALREADY_DEAD,
                };
                self.reply(text)
            }
            DRAGON if self.world.state(DRAGON) == DRAGON_BARS => {
                self.ask(Question::DragonBareHands);
                Phase::ClearObj
            }
            DRAGON => self.reply(messages::ALREADY_DEAD),
            OGRE => self.attack_ogre(),
            CLAM | OYSTER => self.reply(messages::SHELL_IMPERVIOUS),
            SNAKE => self.reply(messages::SNAKE_WARNING),
            DWARF if self.world.closed => Phase::DwarfWake,
            DWARF => self.reply(messages::BARE_HANDS_QUERY),
            TROLL => self.reply(messages::ROCKY_TROLL),
            _ => self.decline(verb),
        }
    }

    /// The ogre dodges; any dwarves here take the chance to finish him.
    fn attack_ogre(&mut self) -> Phase {
        self.say(messages::OGRE_DODGE);
        if !matches!(self.world.atdwrf(self.world.loc), DwarfHere::Present(_)) {
            return Phase::ClearObj;
        }
        self.say(messages::KNIFE_THROWN);
        self.world.destroy(OGRE);
        let loc = self.world.loc;
        let mut routed = 0;
        for dwarf in self.world.dwarves[..PIRATE].iter_mut() {
            if dwarf.loc == loc {
                routed += 1;
                dwarf.loc = LONGWEST;
                dwarf.seen = false;
            }
        }
        debug!("ogre killed, {routed} dwarves fled");
        let text = if routed > 1 {
            messages::OGRE_PANIC1
        } else {
            messages::OGRE_PANIC2
        };
        self.reply(text)
    }

    /// THROW. Treasures pay the troll, food goes to the bear, the axe flies,
    /// and anything else is just dropped.
    pub(crate) fn throw(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        if !self.world.toting(obj) {
            return self.decline(verb);
        }
        if objects::object(obj).treasure && self.world.at(TROLL) {
            self.world.destroy(obj);
            self.troll_leaves();
            return self.reply(messages::TROLL_SATISFIED);
        }
        if obj == FOOD && self.world.here(BEAR) {
            return self.feed(verb, BEAR);
        }
        if obj != AXE {
            return self.discard(verb, obj);
        }

        let loc = self.world.loc;
        let DwarfHere::Present(i) = self.world.atdwrf(loc) else {
            return self.throw_axe_elsewhere(verb);
        };
        let dflag = self.world.dflag;
        if self.ctx().randrange(NDWARVES as i32 + 1) < dflag {
            self.say(messages::DWARF_DODGES);
        } else {
            let dwarf = &mut self.world.dwarves[i];
            dwarf.seen = false;
            dwarf.loc = NOWHERE;
            self.world.dkill += 1;
            debug!("dwarf {i} killed ({} so far)", self.world.dkill);
            let text = if self.world.dkill == 1 {
                messages::DWARF_SMOKE
            } else {
                messages::KILLED_DWARF
            };
            self.say(text);
        }
        self.world.drop_at(AXE, loc);
        Phase::Move
    }

    /// The axe thrown with no dwarf to aim at.
    fn throw_axe_elsewhere(&mut self, verb: Verb) -> Phase {
        let loc = self.world.loc;
        let bounce = if self.world.at(DRAGON) && self.world.state(DRAGON) == DRAGON_BARS {
            Some(messages::DRAGON_SCALES)
        } else if self.world.at(TROLL) {
            Some(messages::TROLL_RETURNS)
        } else if self.world.at(OGRE) {
            Some(messages::OGRE_DODGE)
        } else {
            None
        };
        if let Some(text) = bounce {
            self.say(text);
            self.world.drop_at(AXE, loc);
            return Phase::Move;
        }
        if self.world.here(BEAR) && self.world.state(BEAR) == UNTAMED_BEAR {
            self.world.drop_at(AXE, loc);
            self.world.set_fixed(AXE, Fixed::Immovable);
            self.world.juggle(BEAR);
            self.state_change(AXE, AXE_LOST);
            return Phase::ClearObj;
        }
        self.attack(verb, None)
    }

    /// FEED.
    pub(crate) fn feed(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        let food_here = self.world.here(FOOD);
        match obj {
            BIRD => self.reply(messages::BIRD_PINING),
            DRAGON if self.world.state(DRAGON) != DRAGON_BARS => {
                self.reply(messages::RIDICULOUS_ATTEMPT)
            }
            DRAGON => self.reply(messages::NOTHING_EDIBLE),
            SNAKE if !self.world.closed && self.world.here(BIRD) => {
                self.world.destroy(BIRD);
                self.reply(messages::BIRD_DEVOURED)
            }
            SNAKE => self.reply(messages::NOTHING_EDIBLE),
            TROLL => self.reply(messages::TROLL_VICES),
            DWARF if food_here => {
                self.world.dflag += 2;
                self.reply(messages::REALLY_MAD)
            }
            BEAR if self.world.state(BEAR) == BEAR_DEAD => self.reply(messages::RIDICULOUS_ATTEMPT),
            BEAR if self.world.state(BEAR) == UNTAMED_BEAR && food_here => {
                self.world.destroy(FOOD);
                self.world.set_fixed(AXE, Fixed::Free);
                self.world.set_state(AXE, AXE_HERE);
                self.state_change(BEAR, SITTING_BEAR);
                Phase::ClearObj
            }
            BEAR if self.world.state(BEAR) == UNTAMED_BEAR => self.reply(messages::NOTHING_EDIBLE),
            OGRE if food_here => self.reply(messages::OGRE_FULL),
            DWARF | BEAR | OGRE => self.decline(verb),
            _ => self.reply(messages::AM_GAME),
        }
    }

    /// WAKE. Only the dwarves in the closed cave can be disturbed.
    pub(crate) fn wake(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        if obj != DWARF || !self.world.closed {
            return self.decline(verb);
        }
        self.say(messages::PROD_DWARF);
        Phase::DwarfWake
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{BARREN, BUILDING, NE, SWCHASM};
    use colossal_core::objects::*;
    use colossal_core::{Verb, messages};
    use colossal_sim::{Fixed, Place};

    fn game_at(loc: colossal_core::LocationId) -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(51).with_novice_prompt(false));
        game.opening();
        game.world.loc = loc;
        game.world.newloc = loc;
        game.world.carry(LAMP);
        game.world.set_state(LAMP, LAMP_BRIGHT);
        game
    }

    #[test]
    fn nothing_to_attack() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("kill"), messages::NO_TARGET);
    }

    #[test]
    fn bear_is_fed_and_calmed() {
        let mut game = game_at(BARREN);
        assert_eq!(game.process("kill"), messages::BEAR_HANDS);
        assert_eq!(game.process("feed bear"), messages::NOTHING_EDIBLE);
        game.world.carry(FOOD);
        game.process("feed bear");
        assert_eq!(game.world().state(BEAR), SITTING_BEAR);
        assert_eq!(game.world().place(FOOD), Place::Nowhere);
        assert_eq!(game.world().fixed(AXE), Fixed::Free);
    }

    #[test]
    fn feeding_odd_things() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("feed keys"), messages::AM_GAME);
    }

    #[test]
    fn treasure_pays_the_troll() {
        let mut game = game_at(SWCHASM);
        game.world.carry(NUGGET);
        assert_eq!(game.process("throw nugget"), messages::TROLL_SATISFIED);
        assert_eq!(game.world().place(TROLL), Place::Nowhere);
        assert_eq!(game.world().place(NUGGET), Place::Nowhere);
        assert!(game.world().at(TROLL2));
    }

    #[test]
    fn throwing_ordinary_things_drops_them() {
        let mut game = game_at(BUILDING);
        game.world.carry(KEYS);
        assert_eq!(game.process("throw keys"), messages::OK_MAN);
        assert_eq!(game.world().place(KEYS), Place::At(BUILDING));
        assert_eq!(game.process("toss keys"), Verb::Throw.message());
    }

    #[test]
    fn waking_dwarves_ends_a_closed_game() {
        let mut game = game_at(NE);
        game.world.closed = true;
        game.world.drop_at(DWARF, NE);
        let text = game.process("wake dwarf");
        assert!(text.starts_with(messages::PROD_DWARF));
        assert!(text.contains(messages::DWARVES_AWAKEN));
        assert!(game.is_over());
    }
}
