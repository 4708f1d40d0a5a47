//! Words that talk to the game rather than the cave: SAY, the giant's
//! magic words, BRIEF, SCORE, SUSPEND and RESUME.

use colossal_core::objects::{
    self, EGGS, EGGS_DONE, EGGS_HERE, EGGS_VANISHED, TROLL, TROLL_PAIDONCE, TROLL_UNPAID,
};
use colossal_core::{Motion, Verb, messages};
use colossal_sim::{Place, Termination, score};
use log::debug;

use crate::dispatch::Phase;
use crate::game::Game;
use crate::parser::{Word, WordClass};
use crate::question::Question;

impl Game {
    /// SAY a word. Magic words take effect; anything else is just echoed.
    pub(crate) fn say_word(&mut self, word: &Word) -> Phase {
        match word.class {
            WordClass::Motion(Motion::Xyzzy | Motion::Plugh | Motion::Plover) => Phase::Word2,
            WordClass::Action(Verb::Part) => self.reservoir(),
            WordClass::Action(verb) if verb.big_word().is_some() => self.bigwords(verb),
            _ => self.reply(messages::okey_dokey(&word.raw)),
        }
    }

    /// FEE FIE FOE FOO, said in order on consecutive turns, brings the
    /// golden eggs home.
    pub(crate) fn bigwords(&mut self, verb: Verb) -> Phase {
        let Some(n) = verb.big_word() else {
            return self.decline(verb);
        };
        let foobar = self.world.foobar.abs();

        if foobar == 0 && n != 1 {
            return self.reply(messages::NOTHING_HAPPENS);
        }
        if n != foobar + 1 || n > 4 {
            let text = if self.config.oldstyle || self.world.seenbigwords {
                messages::START_OVER
            } else {
                messages::WELL_POINTLESS
            };
            self.world.foobar = 0;
            return self.reply(text);
        }

        self.world.foobar = n;
        if n != 4 {
            return self.reply(messages::OK_MAN);
        }
        self.world.foobar = 0;

        let nest = Place::from(objects::object(EGGS).plac);
        let loc = Place::At(self.world.loc);
        let eggs = self.world.place(EGGS);
        if eggs == nest || (self.world.toting(EGGS) && loc == nest) {
            return self.reply(messages::NOTHING_HAPPENS);
        }
        if eggs == Place::Nowhere
            && self.world.place(TROLL) == Place::Nowhere
            && self.world.state(TROLL) == TROLL_UNPAID
        {
            self.world.set_state(TROLL, TROLL_PAIDONCE);
        }
        let state = if self.world.here(EGGS) {
            EGGS_VANISHED
        } else if loc == nest {
            EGGS_HERE
        } else {
            EGGS_DONE
        };
        self.ctx().describe_object(EGGS, state);
        self.world.move_to(EGGS, nest);
        debug!("eggs recalled to the nest");
        Phase::ClearObj
    }

    /// BRIEF: long descriptions only on the first visit.
    pub(crate) fn brief(&mut self) -> Phase {
        self.world.abbnum = 10000;
        self.world.detail = 3;
        self.reply(messages::BRIEF_CONFIRM)
    }

    /// SCORE, with an offer to stop here.
    pub(crate) fn score_report(&mut self) -> Phase {
        let now = score(&self.world, Termination::Score);
        self.say(messages::garnered_points(now.points, now.max));
        self.ask(Question::ScoreQuit);
        Phase::ClearObj
    }

    /// SUSPEND: warn about the cost and ask to go ahead.
    pub(crate) fn suspend(&mut self) -> Phase {
        self.say(messages::SUSPEND_WARNING);
        self.ask(Question::SuspendConfirm);
        Phase::ClearObj
    }

    /// RESUME: a game in progress must be abandoned first.
    pub(crate) fn resume(&mut self) -> Phase {
        if self.fresh_start() {
            self.ask(Question::ResumeFile);
        } else {
            self.say(messages::RESUME_ABANDON);
            self.ask(Question::ResumeConfirm);
        }
        Phase::ClearObj
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{BUILDING, GIANTROOM};
    use colossal_core::messages;
    use colossal_core::objects::{EGGS, LAMP, LAMP_BRIGHT};
    use colossal_sim::Place;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(61).with_novice_prompt(false));
        game.opening();
        game
    }

    #[test]
    fn saying_ordinary_words() {
        let mut game = game();
        assert_eq!(game.process("say hello"), messages::okey_dokey("hello"));
        assert_eq!(game.process("say"), "Say what?");
    }

    #[test]
    fn magic_words_recall_the_eggs() {
        let mut game = game();
        game.world.carry(LAMP);
        game.world.set_state(LAMP, LAMP_BRIGHT);
        game.world.drop_at(EGGS, BUILDING);
        game.world.loc = GIANTROOM;
        game.world.newloc = GIANTROOM;
        assert_eq!(game.process("fee"), messages::OK_MAN);
        assert_eq!(game.process("fie"), messages::OK_MAN);
        assert_eq!(game.process("foe"), messages::OK_MAN);
        let text = game.process("foo");
        assert_eq!(text, "There is a large nest here, full of golden eggs!");
        assert_eq!(game.world().place(EGGS), Place::At(GIANTROOM));
        assert_eq!(game.world().foobar, 0);
    }

    #[test]
    fn magic_words_out_of_order() {
        let mut game = game();
        assert_eq!(game.process("fie"), messages::NOTHING_HAPPENS);
        assert_eq!(game.process("fee"), messages::OK_MAN);
        assert_eq!(game.process("foe"), messages::WELL_POINTLESS);
        assert_eq!(game.world().foobar, 0);
        game.process("fee");
        game.process("look");
        assert_eq!(game.process("fie"), messages::NOTHING_HAPPENS);
    }

    #[test]
    fn brief_shortens_descriptions() {
        let mut game = game();
        assert_eq!(game.process("brief"), messages::BRIEF_CONFIRM);
        assert_eq!(game.world().abbnum, 10000);
        assert_eq!(game.world().detail, 3);
    }

    #[test]
    fn score_offers_to_quit() {
        let mut game = game();
        let text = game.process("score");
        assert!(text.starts_with(&messages::garnered_points(32, 430)));
        assert!(text.ends_with(messages::INDEED_QUIT));
        assert!(game.awaiting_answer());
        game.process("n");
        assert!(!game.is_over());
    }

    #[test]
    fn resume_at_the_start_asks_for_a_file() {
        let mut fresh = game();
        assert_eq!(fresh.process("resume"), messages::FILE_NAME);
        let mut moved = game();
        moved.process("in");
        let text = moved.process("resume");
        assert!(text.starts_with(messages::RESUME_ABANDON));
    }
}
