//! Location and object descriptions.

use colossal_core::locations::{self, Y2};
use colossal_core::objects::{
    BEAR, CHAIN, CHAINING_BEAR, EGGS, NUGGET, RUG, RUG_DRAGON, STEPS, STEPS_DOWN, STEPS_UP,
};
use colossal_core::{ObjectId, messages};
use colossal_sim::Fixed;

use crate::game::Game;

impl Game {
    /// Describe where the player is: the long text on every `abbnum`th
    /// visit, the short one otherwise, and nothing useful in the dark.
    pub(crate) fn describe_location(&mut self) {
        let def = locations::location(self.world.loc);
        let mut text = match def.short {
            Some(short) if !self.world.wants_long_description() => short,
            _ => def.long,
        };
        if !self.world.forced_here() && self.world.dark() {
            text = messages::PITCH_DARK;
        }
        if self.world.toting(BEAR) {
            self.say(messages::TAME_BEAR);
        }
        self.say(text);
        if self.world.loc == Y2 && !self.world.closing && self.ctx().pct(25) {
            self.say(messages::SAYS_PLUGH);
        }
    }

    /// List what lies here, counting the visit. Hidden objects seen for
    /// the first time are marked found.
    pub(crate) fn list_objects(&mut self) {
        if self.world.dark() {
            return;
        }
        let loc = self.world.loc;
        self.world.bump_abbrev(loc);

        let here: Vec<ObjectId> = self.world.atloc(loc).map(|slot| slot.object()).collect();
        for obj in here {
            if obj == STEPS && self.world.toting(NUGGET) {
                continue;
            }
            if self.world.prop(obj).is_hidden() {
                if self.world.closed {
                    continue;
                }
                let found = match obj {
                    RUG => RUG_DRAGON,
                    CHAIN => CHAINING_BEAR,
                    _ => 0,
                };
                if obj == EGGS {
                    self.world.seenbigwords = true;
                }
                self.reveal(obj, found);
            }
            let state = if obj == STEPS {
                if self.world.fixed(STEPS) == Fixed::At(loc) {
                    STEPS_UP
                } else {
                    STEPS_DOWN
                }
            } else {
                self.world.state(obj)
            };
            self.ctx().describe_object(obj, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::locations::{self, ANTEROOM, BUILDING, START};
    use colossal_core::messages;
    use colossal_core::objects::{BEAR, LAMP, NUGGET};
    use colossal_sim::Prop;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(71).with_novice_prompt(false));
        game.opening();
        game
    }

    #[test]
    fn building_lists_its_contents_in_order() {
        let mut game = game();
        let text = game.process("in");
        insta::assert_snapshot!(text, @r"
        You are inside a building, a well house for a large spring.
        There are some keys on the ground here.
        There is a shiny brass lamp nearby.
        There is food here.
        There is a bottle of water here.
        ");
    }

    #[test]
    fn repeat_visits_are_abbreviated() {
        let mut game = game();
        game.process("in");
        game.process("out");
        let text = game.process("in");
        assert!(text.starts_with("You're inside building."));
        assert_eq!(game.world().location_state(BUILDING).abbrev, 2);
    }

    #[test]
    fn look_forces_the_long_text() {
        let mut game = game();
        game.world.reset_abbrev(START);
        game.describe_location();
        assert_eq!(game.out.take(), locations::location(START).long);
    }

    #[test]
    fn darkness_hides_the_room() {
        let mut game = game();
        game.world.loc = ANTEROOM;
        game.describe_location();
        game.list_objects();
        assert_eq!(game.out.take(), messages::PITCH_DARK);
    }

    #[test]
    fn first_sight_of_a_treasure_counts_it() {
        let mut game = game();
        let tally = game.world().tally;
        game.world.drop_at(NUGGET, BUILDING);
        game.process("in");
        assert_eq!(game.world().prop(NUGGET), Prop::Visible(0));
        assert_eq!(game.world().tally, tally - 1);
        game.process("out");
        game.process("in");
        assert_eq!(game.world().tally, tally - 1);
    }

    #[test]
    fn a_tame_bear_follows() {
        let mut game = game();
        game.world.carry(BEAR);
        game.world.carry(LAMP);
        game.describe_location();
        assert!(game.out.take().starts_with(messages::TAME_BEAR));
    }
}
