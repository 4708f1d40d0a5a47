//! Action dispatch.
//!
//! A command is analysed one word at a time. Motions go straight to the
//! travel table; objects are checked for presence and paired with a verb;
//! verbs run their handler, which reports a [`Phase`] telling the
//! dispatcher what to do next. The dispatcher in turn hands a [`Flow`] to
//! the session loop.

use colossal_core::objects::{BOTTLE, DWARF, OIL, PLANT, PLANT2, PLANT_THIRSTY, ROD, ROD2, URN, URN_EMPTY};
use colossal_core::{Motion, ObjectId, Verb, messages};
use colossal_sim::{DwarfHere, Fate, Termination};

use crate::game::Game;
use crate::parser::{Command, Preprocessed, WordClass, preprocess};

/// Where the session loop picks up after a command or an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Commit the staged move, then describe.
    Executed,
    /// Describe the location and list what is here.
    Describe,
    /// Get ready for the next command.
    Ready,
    /// Wait for input as things stand.
    Idle,
}

/// What a verb handler asks the dispatcher to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Done; wait for the next command.
    ClearObj,
    /// Done; finish the turn and commit any staged move.
    Terminate,
    /// Re-evaluate the location, as after a null motion.
    Move,
    /// Analyse the second word in place of the first.
    Word2,
    /// The verb needs an object; ask for one.
    Unknown,
    /// An object with no verb; the player may need a hint.
    CheckHint,
    /// A hostile act in the closed cave wakes the dwarves.
    DwarfWake,
    /// Describe the location again.
    Top,
}

/// The object a verb is applied to, if any.
pub type Target = Option<ObjectId>;

impl Game {
    /// Preprocess and dispatch an accepted command.
    pub(crate) fn dispatch(&mut self, cmd: Command, pending: Option<Verb>) -> Flow {
        let mut cmd = match preprocess(cmd, &self.world) {
            Preprocessed::Answered(text) => {
                self.say(text);
                return Flow::Ready;
            }
            Preprocessed::Ready(cmd) => cmd,
        };
        if self.ctx().closecheck() {
            return Flow::Executed;
        }

        let mut verb = pending;
        loop {
            self.count_shortcuts(&cmd);
            let phase = match cmd.first.class {
                WordClass::Motion(motion) => {
                    return match self.ctx().player_move(Some(motion)) {
                        Fate::Killed => self.croak(),
                        Fate::Alive => Flow::Executed,
                    };
                }
                WordClass::Object(obj) => self.analyse_object(&cmd, obj, verb),
                WordClass::Action(action) => {
                    verb = Some(action);
                    self.intransitive(&cmd, action)
                }
                WordClass::Numeric(_) => {
                    self.say(messages::CANT_APPLY);
                    Phase::ClearObj
                }
                WordClass::Unknown => {
                    self.say(messages::dont_know(&cmd.first.raw));
                    Phase::ClearObj
                }
            };

            match phase {
                Phase::ClearObj => return Flow::Ready,
                Phase::Terminate => return Flow::Executed,
                Phase::Move => {
                    self.ctx().player_move(Some(Motion::Null));
                    return Flow::Executed;
                }
                Phase::Word2 => match cmd.second.take() {
                    Some(second) => cmd.first = second,
                    None => return Flow::Ready,
                },
                Phase::Unknown => {
                    self.say(messages::do_what(&cmd.first.raw));
                    self.pending_verb = verb;
                    return Flow::Ready;
                }
                Phase::CheckHint => {
                    self.pending_verb = verb;
                    return Flow::Ready;
                }
                Phase::DwarfWake => {
                    self.say(messages::DWARVES_AWAKEN);
                    self.terminate(Termination::EndGame);
                    return Flow::Idle;
                }
                Phase::Top => return Flow::Describe,
            }
        }
    }

    /// Count the shortcut habits worth a word of advice.
    fn count_shortcuts(&mut self, cmd: &Command) {
        if cmd.first.raw.eq_ignore_ascii_case("west") {
            self.world.iwest += 1;
            if self.world.iwest == 10 {
                self.say(messages::W_IS_WEST);
            }
        }
        if cmd.first.raw.eq_ignore_ascii_case("go") && cmd.second.is_some() {
            self.world.igo += 1;
            if self.world.igo == 10 {
                self.say(messages::GO_UNNEEDED);
            }
        }
    }

    /// Work out whether a named object is within reach, then apply the
    /// verb to it.
    fn analyse_object(&mut self, cmd: &Command, named: ObjectId, verb: Option<Verb>) -> Phase {
        if let Some(v) = verb.filter(|v| v.is_noaction()) {
            self.say(v.message());
            return Phase::ClearObj;
        }

        let Some(obj) = self.reachable(cmd, named, verb) else {
            return Phase::ClearObj;
        };
        self.world.oldobj = Some(obj);
        match verb {
            Some(v) => self.transitive(cmd, v, obj),
            None => {
                self.say(messages::what_do(&cmd.first.raw));
                Phase::CheckHint
            }
        }
    }

    /// The object the player can actually reach by naming `named`, or
    /// `None` after explaining why not.
    fn reachable(&mut self, cmd: &Command, named: ObjectId, verb: Option<Verb>) -> Option<ObjectId> {
        let world = &self.world;
        if world.here(named) {
            return Some(named);
        }
        if named == DWARF && matches!(world.atdwrf(world.loc), DwarfHere::Present(_)) {
            return Some(named);
        }
        if !world.closed
            && ((world.liquid() == Some(named) && world.here(BOTTLE))
                || world.liqloc(world.loc) == Some(named))
        {
            return Some(named);
        }
        if named == OIL && world.here(URN) && world.state(URN) != URN_EMPTY {
            return Some(URN);
        }
        if named == PLANT && world.at(PLANT2) && world.state(PLANT2) != PLANT_THIRSTY {
            return Some(PLANT2);
        }
        if named == colossal_core::objects::KNIFE && self.knife_here() {
            self.knife_vanishes();
            return None;
        }
        if named == ROD && world.here(ROD2) {
            return Some(ROD2);
        }
        if matches!(verb, Some(Verb::Find | Verb::Inventory)) && cmd.second.is_none() {
            return Some(named);
        }
        self.say(messages::no_see(&cmd.first.raw));
        None
    }

    /// A verb on its own, or a verb still waiting to see its second word.
    fn intransitive(&mut self, cmd: &Command, verb: Verb) -> Phase {
        if verb.is_noaction() {
            self.say(verb.message());
            return Phase::ClearObj;
        }
        if let Some(second) = &cmd.second {
            if verb == Verb::Say {
                return self.say_word(second);
            }
            return Phase::Word2;
        }

        match verb {
            Verb::Carry => self.vcarry(verb, None),
            Verb::Unlock | Verb::Lock => self.lock(verb, None),
            Verb::Light => self.light(verb, None),
            Verb::Extinguish => self.extinguish(verb, None),
            Verb::Pour => self.pour(verb, None),
            Verb::Eat => self.eat(verb, None),
            Verb::Drink => self.drink(verb, None),
            Verb::Fill => self.fill(verb, None),
            Verb::Fly => self.fly(verb, None),
            Verb::Attack => self.attack(verb, None),
            Verb::Read => self.read(verb, None, &cmd.first.raw),
            Verb::Drop
            | Verb::Say
            | Verb::Wave
            | Verb::Tame
            | Verb::Rub
            | Verb::Throw
            | Verb::Find
            | Verb::Feed
            | Verb::Break
            | Verb::Wake => Phase::Unknown,
            Verb::Nothing => {
                self.say(messages::OK_MAN);
                Phase::ClearObj
            }
            Verb::Go => {
                self.say(verb.message());
                Phase::ClearObj
            }
            Verb::Quit => {
                self.ask(crate::question::Question::ReallyQuit);
                Phase::ClearObj
            }
            Verb::Inventory => self.inventory_list(),
            Verb::Blast => self.blast(),
            Verb::Score => self.score_report(),
            Verb::Fee | Verb::Fie | Verb::Foe | Verb::Foo | Verb::Fum => self.bigwords(verb),
            Verb::Brief => self.brief(),
            Verb::Save => self.suspend(),
            Verb::Resume => self.resume(),
            Verb::Listen => self.listen(),
            Verb::Part => self.reservoir(),
            _ => {
                self.say(verb.message());
                Phase::ClearObj
            }
        }
    }

    /// A verb applied to an object within reach.
    fn transitive(&mut self, cmd: &Command, verb: Verb, obj: ObjectId) -> Phase {
        let target = Some(obj);
        match verb {
            Verb::Carry => self.vcarry(verb, target),
            Verb::Drop => self.discard(verb, obj),
            Verb::Say => match &cmd.second {
                Some(second) => self.say_word(second),
                None => self.say_word(&cmd.first),
            },
            Verb::Unlock | Verb::Lock => self.lock(verb, target),
            Verb::Nothing => {
                self.say(messages::OK_MAN);
                Phase::ClearObj
            }
            Verb::Light => self.light(verb, target),
            Verb::Extinguish => self.extinguish(verb, target),
            Verb::Wave => self.wave(verb, obj),
            Verb::Attack => self.attack(verb, target),
            Verb::Pour => self.pour(verb, target),
            Verb::Eat => self.eat(verb, target),
            Verb::Drink => self.drink(verb, target),
            Verb::Rub => self.rub(verb, obj),
            Verb::Throw => self.throw(verb, obj),
            Verb::Find | Verb::Inventory => self.find(verb, obj),
            Verb::Feed => self.feed(verb, obj),
            Verb::Fill => self.fill(verb, target),
            Verb::Blast => self.blast(),
            Verb::Read => self.read(verb, target, &cmd.first.raw),
            Verb::Break => self.vbreak(verb, obj),
            Verb::Wake => self.wake(verb, obj),
            Verb::Fly => self.fly(verb, target),
            Verb::Part => self.reservoir(),
            _ => {
                self.say(verb.message());
                Phase::ClearObj
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{BUILDING, NE, WESTEND_TWOPIT, WESTPIT};
    use colossal_core::objects::{BOTTLE, DWARF, KNIFE, LAMP, PLANT2, ROD, ROD2, WATER};
    use colossal_core::{Verb, messages};
    use colossal_sim::{Knife, Place};

    fn game_at(loc: colossal_core::LocationId) -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(21).with_novice_prompt(false));
        game.opening();
        game.world.loc = loc;
        game.world.newloc = loc;
        game
    }

    #[test]
    fn noaction_verbs_only_talk() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("help"), Verb::Help.message());
        assert_eq!(game.process("swim"), Verb::Swim.message());
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn liquid_at_a_spring_is_reachable() {
        let mut game = game_at(BUILDING);
        game.world.carry(BOTTLE);
        game.world.set_state(BOTTLE, colossal_core::objects::EMPTY_BOTTLE);
        game.world.destroy(WATER);
        let text = game.process("fill bottle");
        assert!(text.contains("Your bottle is now full of water."));
        assert!(game.world().toting(WATER));
    }

    #[test]
    fn rod_names_the_dynamite_when_only_it_is_here() {
        let mut game = game_at(NE);
        game.world.drop_at(ROD2, NE);
        game.world.destroy(ROD);
        game.process("get rod");
        assert!(game.world().toting(ROD2));
    }

    #[test]
    fn beanstalk_top_answers_to_plant() {
        let mut game = game_at(WESTEND_TWOPIT);
        game.world.set_state(PLANT2, 1);
        game.world.destroy(colossal_core::objects::PLANT);
        let text = game.process("get plant");
        assert!(!text.contains("I see no"));
        assert!(game.world().here(PLANT2));
    }

    #[test]
    fn reaching_for_the_knife_makes_it_vanish() {
        let mut game = game_at(BUILDING);
        game.world.knife = Knife::At(BUILDING);
        assert_eq!(game.process("get knife"), messages::KNIVES_VANISH);
        assert_eq!(game.world().knife, Knife::Gone);
        assert_eq!(game.world().place(KNIFE), Place::Nowhere);
    }

    #[test]
    fn find_works_at_a_distance() {
        let mut game = game_at(WESTPIT);
        assert_eq!(game.process("find lamp"), Verb::Find.message());
        game.world.loc = BUILDING;
        game.world.carry(LAMP);
        assert_eq!(game.process("where lamp"), messages::ALREADY_CARRYING);
    }

    #[test]
    fn dwarf_must_be_present() {
        let mut game = game_at(BUILDING);
        assert_eq!(game.process("kill dwarf"), messages::no_see("dwarf"));
        assert!(!game.world().here(DWARF));
    }

    #[test]
    fn say_echoes_ordinary_words() {
        let mut game = game_at(BUILDING);
        game.world.carry(LAMP);
        game.world.set_state(LAMP, colossal_core::objects::LAMP_BRIGHT);
        assert_eq!(game.process("say hello"), messages::okey_dokey("hello"));
        let text = game.process("say xyzzy");
        assert!(text.contains(colossal_core::location(colossal_core::locations::DEBRIS).long));
    }
}
