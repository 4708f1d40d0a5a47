//! The game session: one world, one player, one line of input at a time.

use std::path::Path;

use colossal_core::limits::NOVICELIMIT;
use colossal_core::locations::{self, START};
use colossal_core::objects::{self, LAMP, OYSTER};
use colossal_core::{LocationId, Motion, ObjectId, Verb, messages};
use colossal_sim::{Fate, Knife, Narration, Prop, SimContext, Termination, World, score};
use log::{debug, warn};

use crate::config::GameConfig;
use crate::dispatch::Flow;
use crate::error::GameResult;
use crate::parser::{self, Tokens};
use crate::persist;
use crate::question::Question;

/// An interactive game of Colossal Cave.
///
/// Feed it lines with [`Game::process`]; each call returns the narration
/// for that line. While a question is pending the next line is taken as
/// its answer instead of a command.
#[derive(Debug)]
pub struct Game {
    pub(crate) world: World,
    pub(crate) config: GameConfig,
    pub(crate) questions: Vec<Question>,
    pub(crate) pending_verb: Option<Verb>,
    pub(crate) over: bool,
    pub(crate) out: Narration,
}

impl Game {
    /// Start a new game.
    ///
    /// The opening narration, either the instructions question or the
    /// first room, is waiting in [`Game::opening`].
    pub fn new(config: GameConfig) -> Self {
        let seed = config.resolve_seed();
        debug!("new game with seed {seed}");
        let ask = config.novice_prompt;
        let mut game = Self::with_world(config, World::new(seed));
        if ask {
            game.ask(Question::Instructions);
        } else {
            game.advance(Flow::Executed);
        }
        game
    }

    /// Resume a game from a snapshot file.
    pub fn restore(config: GameConfig, path: impl AsRef<Path>) -> GameResult<Self> {
        let world = persist::load(path)?;
        let mut game = Self::with_world(config, world);
        game.advance(Flow::Describe);
        Ok(game)
    }

    /// Wrap an existing world without narrating anything.
    pub fn with_world(config: GameConfig, world: World) -> Self {
        Self {
            world,
            config,
            questions: Vec::new(),
            pending_verb: None,
            over: false,
            out: Narration::new(),
        }
    }

    /// Narration produced before the first command.
    pub fn opening(&mut self) -> String {
        self.out.take()
    }

    /// Handle one line of input and return what the game says.
    pub fn process(&mut self, line: &str) -> String {
        if self.over {
            return messages::GAME_IS_OVER.to_string();
        }
        let flow = if self.questions.is_empty() {
            self.command(line)
        } else {
            self.answer(line)
        };
        self.advance(flow);
        self.autosave();
        self.out.take()
    }

    fn command(&mut self, line: &str) -> Flow {
        let cmd = match parser::tokenize(line, &self.world.zzword, self.config.oldstyle) {
            Tokens::Empty => return Flow::Idle,
            Tokens::TooMany => {
                self.say(messages::TWO_WORDS);
                return Flow::Idle;
            }
            Tokens::Command(cmd) => cmd,
        };
        let pending = self.pending_verb.take();
        if let Some(rejected) = self.rejected_word(&cmd) {
            self.say(messages::dont_know(&rejected));
            return Flow::Idle;
        }

        self.world.foobar = if self.world.foobar > 0 {
            -self.world.foobar
        } else {
            0
        };
        self.world.turns += 1;
        self.dispatch(cmd, pending)
    }

    /// A word the parser could not place, if any.
    fn rejected_word(&self, cmd: &parser::Command) -> Option<String> {
        let oldstyle = self.config.oldstyle;
        let bad = |word: &parser::Word| match word.class {
            parser::WordClass::Unknown => true,
            parser::WordClass::Numeric(_) => !oldstyle,
            _ => false,
        };
        if bad(&cmd.first) {
            return Some(cmd.first.raw.clone());
        }
        let says = cmd.first.verb() == Some(Verb::Say);
        cmd.second
            .as_ref()
            .filter(|word| !says && bad(word))
            .map(|word| word.raw.clone())
    }

    /// Run the turn forward until it needs input.
    pub(crate) fn advance(&mut self, mut flow: Flow) {
        loop {
            if self.over || !self.questions.is_empty() {
                return;
            }
            flow = match flow {
                Flow::Executed => match self.ctx().arrive() {
                    Fate::Killed => self.croak(),
                    Fate::Alive => Flow::Describe,
                },
                Flow::Describe => {
                    self.describe_location();
                    if self.world.forced_here() {
                        match self.ctx().player_move(None) {
                            Fate::Killed => self.croak(),
                            Fate::Alive => Flow::Executed,
                        }
                    } else {
                        self.list_objects();
                        Flow::Ready
                    }
                }
                Flow::Ready => {
                    self.prepare_input();
                    Flow::Idle
                }
                Flow::Idle => return,
            };
        }
    }

    /// Housekeeping before reading the next command.
    fn prepare_input(&mut self) {
        if self.world.closed {
            if self.world.prop(OYSTER).is_hidden() && self.world.toting(OYSTER) {
                self.ctx().describe_object(OYSTER, 1);
            }
            let stashed: Vec<ObjectId> = self
                .world
                .carried()
                .filter(|obj| self.world.prop(*obj).is_hidden())
                .collect();
            for obj in stashed {
                let state = self.world.state(obj);
                self.world.set_prop(obj, Prop::Visible(state));
            }
        }
        self.world.wzdark = self.world.dark();
        if matches!(self.world.knife, Knife::At(loc) if loc != self.world.loc) {
            self.world.knife = Knife::Unseen;
        }
        self.checkhints();
    }

    /// Die, then either ask about reincarnation or end the game.
    pub(crate) fn croak(&mut self) -> Flow {
        self.world.numdie += 1;
        debug!("player died ({} so far)", self.world.numdie);
        if self.world.closing {
            self.say(messages::DEATH_CLOSING);
            self.terminate(Termination::EndGame);
        } else {
            let index = (self.world.numdie - 1) as usize;
            self.ask(Question::Obituary(index));
        }
        Flow::Idle
    }

    /// Accept the instructions question.
    pub(crate) fn take_instructions(&mut self) {
        self.say(messages::CAVE_NEARBY);
        self.world.novice = true;
        self.world.limit = NOVICELIMIT;
    }

    fn autosave(&self) {
        if self.over || !self.questions.is_empty() {
            return;
        }
        if let Some(path) = &self.config.autosave {
            if let Err(e) = persist::save(path, &self.world) {
                warn!("autosave to {} failed: {e}", path.display());
            }
        }
    }

    /// Borrow the world and narration together for a mechanism.
    pub(crate) fn ctx(&mut self) -> SimContext<'_> {
        SimContext::new(&mut self.world, &mut self.out)
    }

    /// Add a message to this turn's narration.
    pub(crate) fn say(&mut self, text: impl Into<String>) {
        self.out.say(text);
    }

    /// Set an object's state and narrate the change.
    pub(crate) fn state_change(&mut self, obj: ObjectId, state: i32) {
        self.ctx().state_change(obj, state);
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Settings the game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Points scored so far.
    pub fn score(&self) -> i32 {
        score(&self.world, Termination::Score).points
    }

    /// Most points the game can award.
    pub fn max_score(&self) -> i32 {
        score(&self.world, Termination::Score).max
    }

    /// The player's location.
    pub fn location(&self) -> LocationId {
        self.world.loc
    }

    /// Full description of the player's surroundings.
    pub fn location_text(&self) -> &'static str {
        if !self.world.forced_here() && self.world.dark() {
            messages::PITCH_DARK
        } else {
            locations::location(self.world.loc).long
        }
    }

    /// Objects the player can see here, in listing order.
    pub fn visible_objects(&self) -> Vec<ObjectId> {
        if self.world.dark() {
            return Vec::new();
        }
        let mut seen: Vec<ObjectId> = Vec::new();
        for slot in self.world.atloc(self.world.loc) {
            let obj = slot.object();
            if !self.world.prop(obj).is_hidden() && !seen.contains(&obj) {
                seen.push(obj);
            }
        }
        seen
    }

    /// Inventory lines for everything carried.
    pub fn inventory(&self) -> Vec<&'static str> {
        self.world
            .carried()
            .filter_map(|obj| objects::object(obj).inventory)
            .collect()
    }

    /// True when the player cannot see.
    pub fn is_dark(&self) -> bool {
        self.world.dark()
    }

    /// True when the lamp is switched on.
    pub fn lamp_lit(&self) -> bool {
        self.world.lamp_lit()
    }

    /// True when the player carries the lamp.
    pub fn has_lamp(&self) -> bool {
        self.world.toting(LAMP)
    }

    /// Commands accepted so far.
    pub fn turns(&self) -> i32 {
        self.world.turns
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// True when the next line answers a question.
    pub fn awaiting_answer(&self) -> bool {
        !self.questions.is_empty()
    }

    /// The pending question, if any.
    pub fn prompt(&self) -> Option<&'static str> {
        self.questions.last().map(|q| q.prompt())
    }

    /// Vocabulary words completing `partial`.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        parser::complete(partial)
    }

    /// Motion words with a travel rule from here.
    pub fn directions(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for rule in locations::location(self.world.loc).travel {
            for motion in rule.motions {
                let name = motion.name();
                if *motion != Motion::Null && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Primary words of every verb the player can type.
    pub fn verbs(&self) -> Vec<&'static str> {
        Verb::ALL
            .iter()
            .filter(|verb| !verb.words().is_empty())
            .map(|verb| verb.name())
            .collect()
    }

    /// True at the very start of a game, before the player has moved.
    pub(crate) fn fresh_start(&self) -> bool {
        self.world.loc == START && self.world.location_state(START).abbrev == 1
    }

    /// The knife lying where it was thrown at the player.
    pub(crate) fn knife_here(&self) -> bool {
        self.world.knife == Knife::At(self.world.loc)
    }

    /// Vanish the knife when the player reaches for it.
    pub(crate) fn knife_vanishes(&mut self) {
        self.world.knife = Knife::Gone;
        self.say(messages::KNIVES_VANISH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colossal_core::locations::{BELOWGRATE, BUILDING, KINGHALL, NE, PITTOP};
    use colossal_core::objects::{KEYS, NUGGET};

    fn quiet(seed: u64) -> Game {
        Game::new(GameConfig::new().with_seed(seed).with_novice_prompt(false))
    }

    #[test]
    fn opening_describes_the_road() {
        let mut game = quiet(1);
        let text = game.opening();
        assert!(text.starts_with(locations::location(START).long));
        assert_eq!(game.location(), START);
        assert!(!game.awaiting_answer());
    }

    #[test]
    fn instructions_question_comes_first() {
        let mut game = Game::new(GameConfig::new().with_seed(1));
        assert_eq!(game.opening(), messages::WELCOME_YOU);
        assert!(game.awaiting_answer());
        assert_eq!(game.prompt(), Some(messages::WELCOME_YOU));
        let text = game.process("yes");
        assert!(text.starts_with(messages::CAVE_NEARBY));
        assert!(game.world().novice);
        assert_eq!(game.world().limit, NOVICELIMIT);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn questions_insist_on_yes_or_no() {
        let mut game = Game::new(GameConfig::new().with_seed(1));
        game.opening();
        let text = game.process("maybe");
        assert_eq!(text, format!("{}\n{}", messages::PLEASE_ANSWER, messages::WELCOME_YOU));
        assert!(game.awaiting_answer());
        game.process("n");
        assert!(!game.world().novice);
    }

    #[test]
    fn scenario_a_get_lamp_in_the_building() {
        let mut game = quiet(2);
        game.opening();
        game.process("building");
        assert_eq!(game.location(), BUILDING);
        let before = game.world().holdng;
        let text = game.process("get lamp");
        assert_eq!(text, messages::OK_MAN);
        assert!(game.world().toting(LAMP));
        assert_eq!(game.world().holdng, before + 1);
        assert!(game.has_lamp());
        assert!(game.inventory().contains(&"Brass lantern"));
    }

    #[test]
    fn scenario_b_blocked_direction_costs_a_turn() {
        let mut game = quiet(3);
        game.opening();
        game.process("building");
        let before = game.world().clone();
        let text = game.process("north");
        assert!(text.starts_with(messages::BAD_DIRECTION));
        assert_eq!(game.location(), BUILDING);
        assert_eq!(game.turns(), before.turns + 1);
        for obj in ObjectId::all() {
            assert_eq!(game.world().object(obj), before.object(obj));
        }
    }

    #[test]
    fn parse_errors_do_not_cost_turns() {
        let mut game = quiet(4);
        game.opening();
        assert_eq!(game.process("xyzzq"), messages::dont_know("xyzzq"));
        assert_eq!(game.process("get the lamp"), messages::TWO_WORDS);
        assert_eq!(game.process("   "), "");
        assert_eq!(game.process("17"), messages::dont_know("17"));
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn verb_without_object_waits_for_one() {
        let mut game = quiet(5);
        game.opening();
        game.process("in");
        assert_eq!(game.process("get"), "Get what?");
        assert_eq!(game.process("keys"), messages::OK_MAN);
        assert!(game.world().toting(KEYS));
    }

    #[test]
    fn bare_object_asks_what_to_do() {
        let mut game = quiet(5);
        game.opening();
        game.process("in");
        assert_eq!(game.process("keys"), messages::what_do("keys"));
        assert_eq!(game.process("nugget"), messages::no_see("nugget"));
        assert!(!game.world().toting(NUGGET));
    }

    #[test]
    fn finished_games_refuse_input() {
        let mut game = quiet(6);
        game.opening();
        game.process("quit");
        game.process("y");
        assert!(game.is_over());
        assert_eq!(game.process("look"), messages::GAME_IS_OVER);
    }

    #[test]
    fn query_surface_tracks_the_player() {
        let mut game = quiet(7);
        game.opening();
        assert!(!game.is_dark());
        assert!(!game.lamp_lit());
        assert_eq!(game.max_score(), 430);
        assert_eq!(game.score(), 32);
        assert!(game.directions().contains(&"road"));
        assert!(game.verbs().contains(&"carry"));
        assert!(!game.verbs().contains(&"z'zzz"));
        assert_eq!(game.location_text(), locations::location(START).long);
        game.process("in");
        let visible = game.visible_objects();
        assert!(visible.contains(&KEYS));
        assert!(visible.contains(&LAMP));
    }

    #[test]
    fn scenario_c_clocks_close_the_cave() {
        let mut game = quiet(9);
        game.opening();
        game.world.carry(LAMP);
        game.world.set_state(LAMP, objects::LAMP_BRIGHT);
        game.world.loc = KINGHALL;
        game.world.newloc = KINGHALL;
        game.world.tally = 0;
        game.world.clock1 = 1;

        let text = game.process("inventory");
        assert!(text.starts_with(messages::CAVE_CLOSING));
        assert!(game.world().closing);
        assert!(!game.world().closed);
        assert_eq!(game.world().clock1, -1);

        game.world.clock2 = 2;
        game.process("inventory");
        assert_eq!(game.world().clock2, 1);
        let text = game.process("inventory");
        assert!(text.starts_with(messages::CAVE_CLOSED));
        assert!(game.world().closed);
        assert_eq!(game.location(), NE);
        assert!(!game.world().toting(LAMP));
    }

    #[test]
    fn scenario_d_violence_in_the_repository_ends_the_game() {
        let mut game = quiet(10);
        game.opening();
        game.world.loc = KINGHALL;
        game.world.tally = 0;
        game.world.clock1 = 1;
        game.process("inventory");
        game.world.clock2 = 1;
        game.process("inventory");
        assert_eq!(game.location(), NE);

        let text = game.process("kill dwarf");
        assert!(text.starts_with(messages::DWARVES_AWAKEN));
        assert!(text.contains("You scored"));
        assert!(game.is_over());
    }

    #[test]
    fn grate_at_the_pit_top_leads_back_to_the_grate() {
        let mut game = quiet(11);
        game.opening();
        game.world.carry(LAMP);
        game.world.set_state(LAMP, objects::LAMP_BRIGHT);
        game.world.loc = PITTOP;
        game.world.newloc = PITTOP;

        game.process("grate");
        assert_eq!(game.location(), BELOWGRATE);
    }

    #[test]
    fn shortcut_advice_after_ten_wests() {
        let mut game = quiet(8);
        game.opening();
        let mut advised = 0;
        for _ in 0..12 {
            game.process("in");
            let text = game.process("west");
            advised += text.matches(messages::W_IS_WEST).count();
        }
        assert_eq!(advised, 1);
        assert_eq!(game.world().iwest, 12);
    }
}
