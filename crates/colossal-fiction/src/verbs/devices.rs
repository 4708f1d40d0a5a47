//! Locks, lights, the rod and rug, and the other things that do something
//! when handled the right way.

use colossal_core::locations::{CLIFF, CULDESAC, LEDGE, NE, NOWHERE, RESBOTTOM};
use colossal_core::objects::{
    self, AMBER, AMBER_IN_URN, BEAR, BEAR_DEAD, BIRD, BIRD_CAGED, BIRD_ENDSTATE, BIRD_UNCAGED,
    BRIDGED, CAGE, CAVITY, CHAIN, CHAIN_FIXED, CHAIN_HEAP, CLAM, CONTENTED_BEAR, DOOR,
    DOOR_UNRUSTED, DRAGON, FISSURE, GRATE, GRATE_CLOSED, GRATE_OPEN, JADE, KEYS, LAMP, LAMP_BRIGHT,
    LAMP_DARK, MIRROR, MIRROR_BROKEN, OYSTER, PEARL, RESER, ROD, ROD2, RUG, RUG_HOVER, STEPS,
    TRIDENT, UNBRIDGED, URN, URN_DARK, URN_EMPTY, URN_LIT, VASE, VASE_BROKEN, VASE_WHOLE, VOLCANO,
    WATERS_PARTED, WATERS_UNPARTED,
};
use colossal_core::{ObjectId, Verb, location, messages};
use colossal_sim::{Bonus, Fixed, Termination};

use super::state_text;
use crate::dispatch::{Phase, Target};
use crate::game::Game;
use crate::question::Question;

impl Game {
    /// LOCK, UNLOCK, OPEN, CLOSE.
    pub(crate) fn lock(&mut self, verb: Verb, target: Target) -> Phase {
        let obj = match target {
            Some(obj) => obj,
            None => {
                let world = &self.world;
                let candidates = [
                    (CHAIN, world.here(CHAIN)),
                    (GRATE, world.at(GRATE)),
                    (DOOR, world.at(DOOR)),
                    (OYSTER, world.here(OYSTER)),
                    (CLAM, world.here(CLAM)),
                ];
                match candidates.iter().find(|(_, present)| *present) {
                    Some((obj, _)) => *obj,
                    None => return self.reply(messages::NOTHING_LOCKED),
                }
            }
        };
        let locking = verb == Verb::Lock;
        let keys = self.world.here(KEYS);

        match obj {
            CHAIN if keys => return self.chain(locking),
            CHAIN | GRATE if !keys => self.say(messages::NO_KEYS),
            GRATE if self.world.closing => self.exit_closed(),
            GRATE => {
                let state = if locking { GRATE_CLOSED } else { GRATE_OPEN };
                self.state_change(GRATE, state);
            }
            CLAM | OYSTER if locking => self.say(messages::HUH_MAN),
            CLAM if self.world.toting(CLAM) => self.say(messages::DROP_CLAM),
            CLAM if !self.world.toting(TRIDENT) => self.say(messages::CLAM_OPENER),
            CLAM => {
                let loc = self.world.loc;
                self.world.destroy(CLAM);
                self.world.drop_at(OYSTER, loc);
                self.world.drop_at(PEARL, CULDESAC);
                self.say(messages::PEARL_FALLS);
            }
            OYSTER if self.world.toting(OYSTER) => self.say(messages::DROP_OYSTER),
            OYSTER if !self.world.toting(TRIDENT) => self.say(messages::OYSTER_OPENER),
            OYSTER => self.say(messages::OYSTER_OPENS),
            DOOR if self.world.state(DOOR) == DOOR_UNRUSTED => self.say(messages::OK_MAN),
            DOOR => self.say(messages::RUSTY_DOOR),
            CAGE => self.say(messages::NO_LOCK),
            KEYS => self.say(messages::CANNOT_UNLOCK),
            _ => self.say(verb.message()),
        }
        Phase::ClearObj
    }

    /// Lock or unlock the bear's chain. The keys are already known to be here.
    fn chain(&mut self, locking: bool) -> Phase {
        if !locking {
            if self.world.state(BEAR) == objects::UNTAMED_BEAR {
                return self.reply(messages::BEAR_BLOCKS);
            }
            if self.world.state(CHAIN) == CHAIN_HEAP {
                return self.reply(messages::ALREADY_UNLOCKED);
            }
            self.world.set_state(CHAIN, CHAIN_HEAP);
            self.world.set_fixed(CHAIN, Fixed::Free);
            if self.world.state(BEAR) == BEAR_DEAD {
                self.world.set_fixed(BEAR, Fixed::Immovable);
            } else {
                self.world.set_state(BEAR, CONTENTED_BEAR);
                self.world.set_fixed(BEAR, Fixed::Free);
            }
            return self.reply(messages::CHAIN_UNLOCKED);
        }

        if self.world.state(CHAIN) != CHAIN_HEAP {
            return self.reply(messages::ALREADY_LOCKED);
        }
        let loc = self.world.loc;
        if loc != objects::object(CHAIN).plac {
            return self.reply(messages::NO_LOCKSITE);
        }
        self.world.set_state(CHAIN, CHAIN_FIXED);
        if self.world.toting(CHAIN) {
            self.world.drop_at(CHAIN, loc);
        }
        self.world.set_fixed(CHAIN, Fixed::Immovable);
        self.reply(messages::CHAIN_LOCKED)
    }

    /// LIGHT. Only the lamp and the urn burn.
    pub(crate) fn light(&mut self, verb: Verb, target: Target) -> Phase {
        let obj = match target {
            Some(obj) => obj,
            None => {
                let world = &self.world;
                let lamp = world.here(LAMP) && world.state(LAMP) == LAMP_DARK && world.limit >= 0;
                let urn = world.here(URN) && world.state(URN) == URN_DARK;
                match (lamp, urn) {
                    (true, false) => LAMP,
                    (false, true) => URN,
                    _ => return Phase::Unknown,
                }
            }
        };

        match obj {
            URN => {
                let state = if self.world.state(URN) == URN_EMPTY {
                    URN_EMPTY
                } else {
                    URN_LIT
                };
                self.state_change(URN, state);
                Phase::ClearObj
            }
            LAMP if self.world.limit < 0 => self.reply(messages::LAMP_OUT),
            LAMP => {
                self.state_change(LAMP, LAMP_BRIGHT);
                if self.world.wzdark {
                    Phase::Top
                } else {
                    Phase::ClearObj
                }
            }
            _ => self.decline(verb),
        }
    }

    /// EXTINGUISH, OFF.
    pub(crate) fn extinguish(&mut self, verb: Verb, target: Target) -> Phase {
        let obj = match target {
            Some(obj) => obj,
            None => {
                let world = &self.world;
                if world.here(URN) && world.state(URN) == URN_LIT {
                    URN
                } else if world.here(LAMP) && world.state(LAMP) == LAMP_BRIGHT {
                    LAMP
                } else {
                    return Phase::Unknown;
                }
            }
        };

        match obj {
            URN if self.world.state(URN) != URN_EMPTY => self.state_change(URN, URN_DARK),
            URN => self.say(state_text(objects::object(URN).changes, URN_DARK)),
            LAMP => {
                self.state_change(LAMP, LAMP_DARK);
                if self.world.dark() {
                    self.say(messages::PITCH_DARK);
                }
            }
            DRAGON | VOLCANO => self.say(messages::BEYOND_POWER),
            _ => self.say(verb.message()),
        }
        Phase::ClearObj
    }

    /// WAVE. Only the rod does anything, at the fissure or near the bird.
    pub(crate) fn wave(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        let world = &self.world;
        let useful = obj == ROD
            && world.toting(ROD)
            && (world.here(BIRD) || (!world.closing && world.at(FISSURE)));
        if !useful {
            if !world.toting(obj) && (obj != ROD || !world.toting(ROD2)) {
                return self.reply(messages::ARENT_CARRYING);
            }
            return self.decline(verb);
        }

        let loc = world.loc;
        if world.state(BIRD) == BIRD_UNCAGED
            && loc == objects::object(STEPS).plac
            && world.is_undiscovered(JADE)
        {
            self.world.drop_at(JADE, loc);
            self.reveal(JADE, 0);
            return self.reply(messages::NECKLACE_FLY);
        }

        let flight = if self.world.state(BIRD) == BIRD_CAGED {
            messages::CAGE_FLY
        } else {
            messages::FREE_FLY
        };
        if self.world.closed {
            self.say(flight);
            return Phase::DwarfWake;
        }
        if self.world.closing || !self.world.at(FISSURE) {
            return self.reply(flight);
        }
        if self.world.here(BIRD) {
            self.say(flight);
        }
        let state = if self.world.state(FISSURE) == BRIDGED {
            UNBRIDGED
        } else {
            BRIDGED
        };
        self.state_change(FISSURE, state);
        Phase::ClearObj
    }

    /// BLAST. Nothing happens without the dynamite in the closed cave.
    pub(crate) fn blast(&mut self) -> Phase {
        if self.world.is_undiscovered(ROD2) || !self.world.closed {
            return self.decline(Verb::Blast);
        }
        let (bonus, text) = if self.world.here(ROD2) {
            (Bonus::Splatter, messages::SPLATTER_MESSAGE)
        } else if self.world.loc == NE {
            (Bonus::Defeat, messages::DEFEAT_MESSAGE)
        } else {
            (Bonus::Victory, messages::VICTORY_MESSAGE)
        };
        self.world.bonus = bonus;
        self.say(text);
        self.terminate(Termination::EndGame);
        Phase::ClearObj
    }

    /// FLY. Only the hovering rug will carry the player.
    pub(crate) fn fly(&mut self, verb: Verb, target: Target) -> Phase {
        let hovering = self.world.state(RUG) == RUG_HOVER;
        match target {
            None if !self.world.here(RUG) => return self.reply(messages::FLAP_ARMS),
            None if !hovering => return self.reply(messages::RUG_NOTHING2),
            None | Some(RUG) => {}
            Some(_) => return self.decline(verb),
        }
        if !hovering {
            return self.reply(messages::RUG_NOTHING1);
        }

        let world = &mut self.world;
        let (to, text) = match world.loc {
            CLIFF => (LEDGE, messages::RUG_GOES),
            LEDGE => (CLIFF, messages::RUG_RETURNS),
            _ => {
                self.say(messages::NOTHING_HAPPENS);
                return Phase::Terminate;
            }
        };
        world.oldlc2 = world.oldloc;
        world.oldloc = world.loc;
        world.newloc = to;
        self.say(text);
        Phase::Terminate
    }

    /// The magic word that parts the reservoir.
    pub(crate) fn reservoir(&mut self) -> Phase {
        let at_reservoir = self.world.at(RESER);
        if !at_reservoir && self.world.loc != RESBOTTOM {
            return self.reply(messages::NOTHING_HAPPENS);
        }
        let state = if self.world.state(RESER) == WATERS_PARTED {
            WATERS_UNPARTED
        } else {
            WATERS_PARTED
        };
        self.state_change(RESER, state);
        if at_reservoir {
            return Phase::ClearObj;
        }
        self.world.oldlc2 = self.world.loc;
        self.world.newloc = NOWHERE;
        self.say(messages::NOT_BRIGHT);
        Phase::Terminate
    }

    /// RUB. Only the burning urn rewards it.
    pub(crate) fn rub(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        if obj == URN && self.world.state(URN) == URN_LIT {
            let loc = self.world.loc;
            self.world.destroy(URN);
            self.world.drop_at(AMBER, loc);
            self.reveal(AMBER, AMBER_IN_URN);
            self.world.drop_at(CAVITY, loc);
            return self.reply(messages::URN_GENIES);
        }
        if obj != LAMP {
            return self.reply(messages::PECULIAR_NOTHING);
        }
        self.decline(verb)
    }

    /// BREAK. Works on the mirror, once the cave is closed, and the vase.
    pub(crate) fn vbreak(&mut self, verb: Verb, obj: ObjectId) -> Phase {
        match obj {
            MIRROR if self.world.closed => {
                self.state_change(MIRROR, MIRROR_BROKEN);
                Phase::DwarfWake
            }
            MIRROR => self.reply(messages::TOO_FAR),
            VASE if self.world.state(VASE) == VASE_WHOLE => {
                if self.world.toting(VASE) {
                    let loc = self.world.loc;
                    self.world.drop_at(VASE, loc);
                }
                self.state_change(VASE, VASE_BROKEN);
                self.world.set_fixed(VASE, Fixed::Immovable);
                Phase::ClearObj
            }
            _ => self.decline(verb),
        }
    }

    /// READ. On its own, reads the one readable thing in sight.
    pub(crate) fn read(&mut self, verb: Verb, target: Target, word: &str) -> Phase {
        let obj = match target {
            Some(obj) => obj,
            None => {
                let world = &self.world;
                let mut readable = ObjectId::all().filter(|obj| {
                    world.here(*obj)
                        && !objects::object(*obj).texts.is_empty()
                        && !world.prop(*obj).is_hidden()
                });
                match (readable.next(), readable.next()) {
                    (Some(only), None) if !world.dark() => only,
                    _ => return Phase::Unknown,
                }
            }
        };

        if self.world.dark() {
            return self.reply(messages::no_see(word));
        }
        if obj == OYSTER {
            if !self.world.toting(OYSTER) || !self.world.closed {
                return self.decline(verb);
            }
            if !self.world.clshnt {
                self.ask(Question::Clue);
                return Phase::ClearObj;
            }
            return self.reply(state_text(objects::object(OYSTER).sounds, 1));
        }
        let texts = objects::object(obj).texts;
        if texts.is_empty() || self.world.is_undiscovered(obj) {
            return self.decline(verb);
        }
        let state = self.world.state(obj);
        self.reply(state_text(texts, state))
    }

    /// LISTEN. The location's sound first, then anything here that makes one.
    pub(crate) fn listen(&mut self) -> Phase {
        let mut heard = false;
        if let Some(sound) = location(self.world.loc).sound {
            self.say(sound);
            heard = true;
        }
        let audible: Vec<ObjectId> = ObjectId::all()
            .filter(|obj| {
                self.world.here(*obj)
                    && !objects::object(*obj).sounds.is_empty()
                    && !self.world.prop(*obj).is_hidden()
            })
            .collect();
        for obj in audible {
            let mut state = self.world.state(obj);
            if obj == BIRD && self.world.blooded {
                state += 3;
            }
            let text =
                state_text(objects::object(obj).sounds, state).replace("%s", &self.world.zzword);
            self.say(text);
            if obj == BIRD && state == BIRD_ENDSTATE {
                self.world.destroy(BIRD);
            }
            heard = true;
        }
        if !heard {
            self.say(messages::ALL_SILENT);
        }
        Phase::ClearObj
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{BUILDING, CLIFF, EASTBANK, GRATE_ROOM, LEDGE, START};
    use colossal_core::objects::*;
    use colossal_core::{Verb, messages};
    use colossal_sim::Place;

    fn game_at(loc: colossal_core::LocationId) -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(41).with_novice_prompt(false));
        game.opening();
        game.world.loc = loc;
        game.world.newloc = loc;
        game
    }

    fn lit(mut game: Game) -> Game {
        game.world.carry(LAMP);
        game.world.set_state(LAMP, LAMP_BRIGHT);
        game
    }

    #[test]
    fn grate_needs_the_keys() {
        let mut game = game_at(GRATE_ROOM);
        assert_eq!(game.process("unlock"), messages::NO_KEYS);
        game.world.carry(KEYS);
        game.process("unlock grate");
        assert_eq!(game.world().state(GRATE), GRATE_OPEN);
        game.process("lock");
        assert_eq!(game.world().state(GRATE), GRATE_CLOSED);
    }

    #[test]
    fn nothing_to_lock_in_the_open() {
        let mut game = game_at(START);
        assert_eq!(game.process("lock"), messages::NOTHING_LOCKED);
    }

    #[test]
    fn grate_will_not_open_while_closing() {
        let mut game = game_at(GRATE_ROOM);
        game.world.carry(KEYS);
        game.world.closing = true;
        game.process("open grate");
        assert!(game.world().panic);
        assert_eq!(game.world().clock2, colossal_core::limits::PANICTIME);
        assert_eq!(game.world().state(GRATE), GRATE_CLOSED);
    }

    #[test]
    fn lamp_goes_on_and_off() {
        let mut game = game_at(BUILDING);
        game.world.carry(LAMP);
        game.process("light");
        assert!(game.world().lamp_lit());
        game.process("off");
        assert!(!game.world().lamp_lit());
        game.world.limit = -1;
        game.world.lmwarn = true;
        assert_eq!(game.process("light lamp"), messages::LAMP_OUT);
    }

    #[test]
    fn rod_bridges_the_fissure() {
        let mut game = lit(game_at(EASTBANK));
        game.world.carry(ROD);
        game.world.drop_at(KEYS, EASTBANK);
        game.process("wave rod");
        assert_eq!(game.world().state(FISSURE), BRIDGED);
        game.process("wave rod");
        assert_eq!(game.world().state(FISSURE), UNBRIDGED);
        assert_eq!(game.process("wave keys"), messages::ARENT_CARRYING);
    }

    #[test]
    fn rug_flies_between_cliff_and_ledge() {
        let mut game = lit(game_at(CLIFF));
        game.world.drop_at(RUG, CLIFF);
        assert_eq!(game.process("fly"), messages::RUG_NOTHING2);
        game.world.set_state(RUG, RUG_HOVER);
        let text = game.process("fly rug");
        assert!(text.starts_with(messages::RUG_GOES));
        assert_eq!(game.location(), LEDGE);
    }

    #[test]
    fn flapping_arms_goes_nowhere() {
        let mut game = game_at(START);
        assert_eq!(game.process("fly"), messages::FLAP_ARMS);
    }

    #[test]
    fn blast_needs_the_closed_cave() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("blast"), Verb::Blast.message());
        assert!(!game.is_over());
    }

    #[test]
    fn reading_and_listening() {
        let mut game = lit(game_at(colossal_core::locations::ANTEROOM));
        let text = game.process("read magazine");
        assert!(text.contains("dwarvish"));
        let mut game = game_at(colossal_core::locations::BIRDCHAMBER);
        let text = game.process("listen");
        assert!(text.contains("melodious"));
    }

    #[test]
    fn silence_when_nothing_makes_a_sound() {
        let mut game = game_at(colossal_core::locations::DIFF1);
        assert_eq!(game.process("listen"), messages::ALL_SILENT);
    }

    #[test]
    fn vase_breaks_on_request() {
        let mut game = game_at(BUILDING);
        game.world.carry(VASE);
        game.world.set_state(VASE, VASE_WHOLE);
        game.process("break vase");
        assert_eq!(game.world().state(VASE), VASE_BROKEN);
        assert_eq!(game.world().place(VASE), Place::At(BUILDING));
        assert_eq!(game.process("break mirror"), messages::no_see("mirror"));
    }
}
