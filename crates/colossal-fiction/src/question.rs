//! Questions that suspend normal input.
//!
//! Asking pushes a [`Question`] and narrates its prompt. The next line
//! the player types answers the most recent question, which may in turn
//! ask another, so chains resolve last-in first-out.

use colossal_core::hints::{HINTS, NDEATHS, OBITUARIES};
use colossal_core::limits::{DEFAULT_SAVE, WARNTIME};
use colossal_core::locations::SECRET5;
use colossal_core::objects::{self, BLOOD, DRAGON, DRAGON_DEAD, RUG, RUG_FLOOR};
use colossal_core::{FixedDef, Motion, ObjectId, messages};
use colossal_sim::{Fixed, Place, Prop, Termination};
use log::debug;

use crate::dispatch::Flow;
use crate::game::Game;
use crate::persist;

/// Something the game is waiting for the player to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Whether to print instructions at the start.
    Instructions,
    /// Whether to reincarnate after the death with this index.
    Obituary(usize),
    /// Whether the player wants to hear about this hint.
    HintOffer(usize),
    /// Whether the player will pay for this hint.
    HintConfirm(usize),
    /// Confirmation of QUIT.
    ReallyQuit,
    /// Offer to quit after SCORE.
    ScoreQuit,
    /// Whether to kill the dragon with bare hands.
    DragonBareHands,
    /// Whether to pay for the oyster's clue.
    Clue,
    /// Confirmation of SUSPEND.
    SuspendConfirm,
    /// File to save into.
    SaveFile,
    /// Confirmation of abandoning the current game for RESUME.
    ResumeConfirm,
    /// File to restore from.
    ResumeFile,
}

impl Question {
    /// Text put to the player.
    pub fn prompt(self) -> &'static str {
        match self {
            Question::Instructions => messages::WELCOME_YOU,
            Question::Obituary(i) => OBITUARIES.get(i).map_or("", |o| o.query),
            Question::HintOffer(i) => HINTS.get(i).map_or("", |h| h.question),
            Question::HintConfirm(_) => messages::WANT_HINT,
            Question::ReallyQuit => messages::REALLY_QUIT,
            Question::ScoreQuit => messages::INDEED_QUIT,
            Question::DragonBareHands => messages::BARE_HANDS_QUERY,
            Question::Clue => messages::CLUE_QUERY,
            Question::SuspendConfirm | Question::ResumeConfirm => messages::THIS_ACCEPTABLE,
            Question::SaveFile | Question::ResumeFile => messages::FILE_NAME,
        }
    }

    fn wants_file_name(self) -> bool {
        matches!(self, Question::SaveFile | Question::ResumeFile)
    }
}

/// Read a yes or no from the first word of a line.
pub fn yes_or_no(line: &str) -> Option<bool> {
    let word = line.split_whitespace().next()?.to_ascii_lowercase();
    match word.as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl Game {
    /// Put a question to the player.
    pub(crate) fn ask(&mut self, question: Question) {
        self.say(question.prompt());
        self.questions.push(question);
    }

    /// Route a line to the most recent question.
    pub(crate) fn answer(&mut self, line: &str) -> Flow {
        let Some(question) = self.questions.pop() else {
            return Flow::Idle;
        };
        if question.wants_file_name() {
            let name = match line.trim() {
                "" => DEFAULT_SAVE,
                name => name,
            };
            return match question {
                Question::SaveFile => self.save_answer(name),
                _ => self.resume_answer(name),
            };
        }
        let Some(yes) = yes_or_no(line) else {
            self.say(messages::PLEASE_ANSWER);
            self.ask(question);
            return Flow::Idle;
        };

        match question {
            Question::Instructions => {
                if yes {
                    self.take_instructions();
                }
                Flow::Executed
            }
            Question::Obituary(i) => self.obituary_answer(i, yes),
            Question::HintOffer(i) => {
                if yes {
                    let penalty = HINTS.get(i).map_or(0, |h| h.penalty);
                    self.say(messages::hint_cost(penalty));
                    self.ask(Question::HintConfirm(i));
                } else {
                    self.say(messages::OK_MAN);
                }
                Flow::Idle
            }
            Question::HintConfirm(i) => {
                match (yes, HINTS.get(i)) {
                    (true, Some(hint)) => {
                        self.say(hint.hint);
                        self.world.hints[i].used = true;
                        if self.world.limit > WARNTIME {
                            self.world.limit += WARNTIME * hint.penalty;
                        }
                    }
                    _ => self.say(messages::OK_MAN),
                }
                Flow::Idle
            }
            Question::ReallyQuit => {
                self.say(messages::OK_MAN);
                if yes {
                    self.terminate(Termination::Quit);
                }
                Flow::Ready
            }
            Question::ScoreQuit => {
                self.say(messages::OK_MAN);
                if yes {
                    self.terminate(Termination::Quit);
                }
                Flow::Ready
            }
            Question::DragonBareHands => {
                if yes {
                    self.slay_dragon();
                } else {
                    self.say(messages::NASTY_DRAGON);
                }
                self.ctx().player_move(Some(Motion::Null));
                Flow::Executed
            }
            Question::Clue => {
                if yes {
                    self.say(messages::WAYOUT_CLUE);
                    self.world.clshnt = true;
                } else {
                    self.say(messages::OK_MAN);
                }
                Flow::Ready
            }
            Question::SuspendConfirm => {
                self.say(messages::OK_MAN);
                if yes {
                    self.world.saved += 5;
                    self.ask(Question::SaveFile);
                }
                Flow::Ready
            }
            Question::ResumeConfirm => {
                self.say(messages::OK_MAN);
                if yes {
                    self.ask(Question::ResumeFile);
                }
                Flow::Ready
            }
            Question::SaveFile | Question::ResumeFile => Flow::Idle,
        }
    }

    fn obituary_answer(&mut self, index: usize, yes: bool) -> Flow {
        if !yes {
            self.say(messages::OK_MAN);
            self.terminate(Termination::EndGame);
            return Flow::Idle;
        }
        if let Some(obituary) = OBITUARIES.get(index) {
            self.say(obituary.yes_response);
        }
        if self.world.numdie >= NDEATHS as i32 {
            self.terminate(Termination::EndGame);
            return Flow::Idle;
        }
        self.world.reincarnate();
        Flow::Describe
    }

    /// Kill the dragon and lay out the scene around its body.
    fn slay_dragon(&mut self) {
        self.state_change(DRAGON, DRAGON_DEAD);
        self.world.set_prop(RUG, Prop::Visible(RUG_FLOOR));
        self.world.set_fixed(DRAGON, Fixed::Immovable);
        self.world.set_fixed(RUG, Fixed::Free);
        self.world.move_to(DRAGON, Place::At(SECRET5));
        self.world.move_to(RUG, Place::At(SECRET5));
        self.world.drop_at(BLOOD, SECRET5);

        let lair = objects::object(DRAGON);
        let mut corners = vec![Place::from(lair.plac)];
        if let FixedDef::At(loc) = lair.fixd {
            corners.push(Place::At(loc));
        }
        let strewn: Vec<ObjectId> = ObjectId::all()
            .filter(|obj| corners.contains(&self.world.place(*obj)))
            .collect();
        for obj in strewn {
            self.world.move_to(obj, Place::At(SECRET5));
        }
        self.world.loc = SECRET5;
        debug!("dragon slain");
    }

    fn save_answer(&mut self, name: &str) -> Flow {
        match persist::save(name, &self.world) {
            Ok(()) => {
                debug!("game saved to {name}");
                self.say(messages::RESUME_HELP);
                self.over = true;
            }
            Err(e) => {
                self.say(messages::save_failed(&e.to_string()));
                self.ask(Question::SaveFile);
            }
        }
        Flow::Idle
    }

    fn resume_answer(&mut self, name: &str) -> Flow {
        match persist::load(name) {
            Ok(world) => {
                debug!("game restored from {name}");
                self.world = world;
                self.pending_verb = None;
                Flow::Describe
            }
            Err(e) => {
                self.say(messages::restore_failed(&e.to_string()));
                Flow::Ready
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use colossal_core::hints::OBITUARIES;
    use colossal_core::locations::{BUILDING, SECRET4, START};
    use colossal_core::objects::{KEYS, LAMP};

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(11).with_novice_prompt(false));
        game.opening();
        game
    }

    #[test]
    fn answers_are_read_from_the_first_word() {
        assert_eq!(yes_or_no("Yes please"), Some(true));
        assert_eq!(yes_or_no("y"), Some(true));
        assert_eq!(yes_or_no(" NO"), Some(false));
        assert_eq!(yes_or_no("nope"), None);
        assert_eq!(yes_or_no(""), None);
    }

    #[test]
    fn declining_to_quit_keeps_playing() {
        let mut game = game();
        assert_eq!(game.process("quit"), messages::REALLY_QUIT);
        assert_eq!(game.prompt(), Some(messages::REALLY_QUIT));
        assert_eq!(game.process("no"), messages::OK_MAN);
        assert!(!game.is_over());
        assert!(!game.awaiting_answer());
    }

    #[test]
    fn nested_questions_resolve_last_first() {
        let mut game = game();
        game.ask(Question::ReallyQuit);
        game.ask(Question::Clue);
        game.out.take();
        assert_eq!(game.prompt(), Some(messages::CLUE_QUERY));
        game.process("no");
        assert_eq!(game.prompt(), Some(messages::REALLY_QUIT));
        game.process("no");
        assert!(!game.awaiting_answer());
    }

    #[test]
    fn reincarnation_after_first_death() {
        let mut game = game();
        game.world.carry(KEYS);
        game.world.carry(LAMP);
        game.world.oldlc2 = START;
        game.croak();
        assert_eq!(game.out.take(), OBITUARIES[0].query);
        let text = game.process("yes");
        assert!(text.starts_with(OBITUARIES[0].yes_response));
        assert_eq!(game.location(), BUILDING);
        assert_eq!(game.world().numdie, 1);
        assert_eq!(game.world().place(LAMP), Place::At(START));
        assert!(!game.is_over());
    }

    #[test]
    fn third_death_ends_the_game() {
        let mut game = game();
        game.world.numdie = 2;
        game.croak();
        game.out.take();
        let text = game.process("yes");
        assert!(text.starts_with(OBITUARIES[2].yes_response));
        assert!(game.is_over());
    }

    #[test]
    fn refusing_reincarnation_ends_the_game() {
        let mut game = game();
        game.croak();
        game.out.take();
        let text = game.process("no");
        assert!(text.starts_with(messages::OK_MAN));
        assert!(game.is_over());
    }

    #[test]
    fn dragon_dies_by_hand() {
        let mut game = game();
        game.world.loc = SECRET4;
        game.world.carry(KEYS);
        game.process("kill dragon");
        assert_eq!(game.prompt(), Some(messages::BARE_HANDS_QUERY));
        game.process("yes");
        assert_eq!(game.location(), SECRET5);
        assert_eq!(game.world().state(DRAGON), DRAGON_DEAD);
        assert_eq!(game.world().place(DRAGON), Place::At(SECRET5));
        assert_eq!(game.world().place(RUG), Place::At(SECRET5));
        assert_eq!(game.world().fixed(RUG), Fixed::Free);
        assert_eq!(game.world().place(BLOOD), Place::At(SECRET5));
        assert!(game.world().validate_placement().is_ok());
    }
}
