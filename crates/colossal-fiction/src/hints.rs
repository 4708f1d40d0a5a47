//! Hint offers.
//!
//! Each hint belongs to a group of locations. Every turn spent in the group
//! counts toward the hint's threshold; leaving resets the count. Once the
//! threshold is reached the hint is offered if the player looks stuck in
//! the way that hint addresses.

use colossal_core::hints::{HINTS, NHINTS};
use colossal_core::objects::{
    BIRD, EMERALD, GRATE, GRATE_CLOSED, JADE, KEYS, OGRE, PYRAMID, ROD, SNAKE,
};
use colossal_core::{Conditions, locations};
use colossal_sim::{DwarfHere, Place, World};
use log::debug;

use crate::game::Game;
use crate::question::Question;

/// What to do about a hint whose threshold has been reached.
enum Verdict {
    /// The player looks stuck; offer it.
    Offer,
    /// Not yet; keep counting.
    Wait,
    /// Not relevant; start counting again.
    Reset,
}

/// True when none of the last three locations holds anything.
fn empty_trail(world: &World) -> bool {
    [world.loc, world.oldloc, world.oldlc2]
        .into_iter()
        .all(|loc| world.is_empty_at(loc))
}

fn verdict(world: &World, hint: usize) -> Verdict {
    let offer = |stuck: bool| if stuck { Verdict::Offer } else { Verdict::Reset };
    match hint {
        0 => offer(world.state(GRATE) == GRATE_CLOSED && !world.here(KEYS)),
        1 => {
            let stuck = world.place(BIRD) == Place::At(world.loc)
                && world.toting(ROD)
                && world.oldobj == Some(BIRD);
            if stuck { Verdict::Offer } else { Verdict::Wait }
        }
        2 => offer(world.here(SNAKE) && !world.here(BIRD)),
        3 => offer(empty_trail(world) && world.holdng > 1),
        4 => offer(!world.is_undiscovered(EMERALD) && world.is_undiscovered(PYRAMID)),
        5 => Verdict::Offer,
        6 => offer(world.dflag == 0),
        7 => {
            if empty_trail(world) {
                Verdict::Offer
            } else {
                Verdict::Wait
            }
        }
        8 => match world.atdwrf(world.loc) {
            DwarfHere::AllDead => Verdict::Reset,
            DwarfHere::Absent if world.here(OGRE) => Verdict::Offer,
            _ => Verdict::Wait,
        },
        9 => offer(world.tally == 1 && world.prop(JADE).is_hidden()),
        _ => Verdict::Wait,
    }
}

impl Game {
    /// Count time spent in hint locations and offer at most one hint.
    pub(crate) fn checkhints(&mut self) {
        let loc = self.world.loc;
        if !locations::location(loc).conditions.has_any_hint() {
            return;
        }
        for hint in 0..NHINTS {
            if self.world.hints[hint].used {
                continue;
            }
            let bit = Conditions::HINTS[hint];
            let state = &mut self.world.hints[hint];
            if !World::has_condition(loc, bit) {
                state.lc = -1;
            }
            state.lc += 1;
            if state.lc < HINTS[hint].turns {
                continue;
            }
            match verdict(&self.world, hint) {
                Verdict::Wait => {}
                Verdict::Reset => self.world.hints[hint].lc = 0,
                Verdict::Offer => {
                    debug!("offering hint {hint}");
                    self.world.hints[hint].lc = 0;
                    self.ask(Question::HintOffer(hint));
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use colossal_core::locations::{BUILDING, KINGHALL, WITTSEND};
    use colossal_core::messages;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(81).with_novice_prompt(false));
        game.opening();
        game
    }

    #[test]
    fn no_counting_outside_hint_locations() {
        let mut game = game();
        game.process("in");
        assert!(!World::has_condition(BUILDING, Conditions::HINT_CAVE));
        assert!(game.world().hints.iter().all(|h| h.lc == 0));
    }

    #[test]
    fn witt_hint_offered_after_threshold() {
        let mut game = game();
        game.world.loc = WITTSEND;
        game.world.hints[5].lc = HINTS[5].turns - 1;
        game.checkhints();
        assert_eq!(game.prompt(), Some(HINTS[5].question));
        assert!(game.out.take().contains(HINTS[5].question));
        assert_eq!(game.world().hints[5].lc, 0);

        let text = game.process("yes");
        assert!(text.starts_with(&messages::hint_cost(HINTS[5].penalty)));
        game.process("yes");
        assert!(game.world().hints[5].used);
    }

    #[test]
    fn declined_hint_can_come_back() {
        let mut game = game();
        game.world.loc = WITTSEND;
        game.world.hints[5].lc = HINTS[5].turns - 1;
        game.checkhints();
        game.out.take();
        assert_eq!(game.process("no"), messages::OK_MAN);
        assert!(!game.world().hints[5].used);
    }

    #[test]
    fn snake_hint_waits_for_the_bird() {
        let mut world = World::new(1);
        world.loc = KINGHALL;
        assert!(matches!(verdict(&world, 2), Verdict::Offer));
        world.drop_at(BIRD, KINGHALL);
        assert!(matches!(verdict(&world, 2), Verdict::Reset));
    }
}
