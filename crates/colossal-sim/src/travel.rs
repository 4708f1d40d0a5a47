//! Player movement: resolving a motion against the travel table and
//! committing the staged destination at the start of the next turn.

use colossal_core::limits::{PANICTIME, PIRATE, PIT_CHANCE};
use colossal_core::locations::{self, ALCOVE, GRATE_ROOM, PLOVER};
use colossal_core::messages;
use colossal_core::objects::{
    self, BEAR, BEAR_DEAD, BRIDGE_WRECKED, CHASM, EMERALD, TROLL, TROLL_GONE, TROLL_PAIDONCE,
    TROLL2, TROLL_UNPAID,
};
use colossal_core::{Conditions, FixedDef, Motion, TravelCond, TravelDest, TravelRule};
use log::{trace, warn};

use crate::context::SimContext;
use crate::world::{Fixed, Place, World};

/// Whether the player survived a mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Still alive.
    Alive,
    /// Killed; the caller runs the death sequence.
    Killed,
}

fn selects(rule: &TravelRule, motion: Option<Motion>) -> bool {
    match motion {
        Some(m) => rule.accepts(m),
        None => rule.motions.is_empty(),
    }
}

fn refusal(motion: Option<Motion>) -> &'static str {
    match motion {
        Some(m) if m.is_compass() => messages::BAD_DIRECTION,
        Some(Motion::Forward | Motion::Left | Motion::Right) => messages::UNSURE_FACING,
        Some(Motion::Outside | Motion::Inside) => messages::NO_INOUT_HERE,
        Some(Motion::Xyzzy | Motion::Plugh) => messages::NOTHING_HAPPENS,
        Some(Motion::Crawl) => messages::WHICH_WAY,
        _ => messages::CANT_APPLY,
    }
}

impl SimContext<'_> {
    /// Resolve a motion into a staged destination in `world.newloc`.
    ///
    /// `None` takes the forced exit of the current location. The move is
    /// committed by [`SimContext::arrive`].
    pub fn player_move(&mut self, motion: Option<Motion>) -> Fate {
        let loc = self.world.loc;
        self.world.newloc = loc;
        let motion = match motion {
            Some(Motion::Null) => return Fate::Alive,
            Some(Motion::Back) => match self.back_motion() {
                Some(m) => Some(m),
                None => return Fate::Alive,
            },
            Some(Motion::Look) => {
                if self.world.detail < 3 {
                    self.out.say(messages::NO_MORE_DETAIL);
                }
                self.world.detail += 1;
                self.world.wzdark = false;
                self.world.reset_abbrev(loc);
                return Fate::Alive;
            }
            Some(Motion::Cave) => {
                if World::outside(loc) && loc != GRATE_ROOM {
                    self.out.say(messages::FOLLOW_STREAM);
                } else {
                    self.out.say(messages::NEED_DETAIL);
                }
                return Fate::Alive;
            }
            other => {
                self.world.oldlc2 = self.world.oldloc;
                self.world.oldloc = loc;
                other
            }
        };

        let rules = locations::location(loc).travel;
        match rules.iter().position(|rule| selects(rule, motion)) {
            Some(start) => self.follow(rules, start),
            None => {
                self.out.say(refusal(motion));
                Fate::Alive
            }
        }
    }

    /// Pick the motion that leads back where the player came from.
    fn back_motion(&mut self) -> Option<Motion> {
        let world = &mut *self.world;
        let mut target = world.oldloc;
        if locations::is_forced(target) {
            target = world.oldlc2;
        }
        world.oldlc2 = world.oldloc;
        world.oldloc = world.loc;

        if World::has_condition(world.loc, Conditions::NOBACK) {
            self.out.say(messages::TWIST_TURN);
            return None;
        }
        if target == world.loc {
            self.out.say(messages::FORGOT_PATH);
            return None;
        }

        let rules = locations::location(world.loc).travel;
        let direct = rules.iter().find(|rule| rule.goto() == Some(target));
        let via_forced = rules.iter().rev().find(|rule| {
            rule.goto().is_some_and(|dest| {
                locations::is_forced(dest) && locations::forced_destination(dest) == Some(target)
            })
        });
        let back = direct
            .or(via_forced)
            .and_then(|rule| rule.motions.first().copied());
        if back.is_none() {
            self.out.say(messages::NOT_CONNECTED);
        }
        back
    }

    fn guard_passes(&mut self, cond: TravelCond) -> bool {
        match cond {
            TravelCond::Always => true,
            TravelCond::Pct(n) => self.pct(i32::from(n)),
            TravelCond::Carrying(obj) => self.world.toting(obj),
            TravelCond::With(obj) => self.world.here(obj),
            TravelCond::NotState(obj, state) => self.world.state(obj) != state,
        }
    }

    /// Walk the rules from `index`, falling through failed guards.
    fn follow(&mut self, rules: &'static [TravelRule], mut index: usize) -> Fate {
        loop {
            let Some(rule) = rules.get(index) else {
                warn!("travel table at {} ran out of rules", self.world.loc);
                return Fate::Alive;
            };
            if !self.guard_passes(rule.cond) {
                index += 1;
                continue;
            }
            trace!("travel rule {index} at {} selected", self.world.loc);
            return match rule.dest {
                TravelDest::Goto(dest) => {
                    self.world.newloc = dest;
                    Fate::Alive
                }
                TravelDest::Speak(msg) => {
                    self.out.say(msg);
                    Fate::Alive
                }
                TravelDest::Special(1) => {
                    self.plover_passage();
                    Fate::Alive
                }
                TravelDest::Special(2) => {
                    let here = self.world.loc;
                    self.world.drop_at(EMERALD, here);
                    index += 1;
                    continue;
                }
                TravelDest::Special(3) => self.cross_troll_bridge(),
                TravelDest::Special(n) => {
                    warn!("unknown special travel routine {n}");
                    Fate::Alive
                }
            };
        }
    }

    /// The passage between the plover room and the alcove admits nothing
    /// but the emerald.
    fn plover_passage(&mut self) {
        let world = &mut *self.world;
        if world.holdng > 1 || (world.holdng == 1 && !world.toting(EMERALD)) {
            self.out.say(messages::MUST_DROP);
        } else if world.loc == PLOVER {
            world.newloc = ALCOVE;
        } else {
            world.newloc = PLOVER;
        }
    }

    fn cross_troll_bridge(&mut self) -> Fate {
        let def = objects::object(TROLL);
        if self.world.state(TROLL) == TROLL_PAIDONCE {
            self.describe_object(TROLL, TROLL_PAIDONCE);
            let world = &mut *self.world;
            world.set_state(TROLL, TROLL_UNPAID);
            world.destroy(TROLL2);
            world.set_fixed(TROLL2, Fixed::Free);
            world.move_to(TROLL, Place::from(def.plac));
            world.set_fixed(TROLL, Fixed::from(def.fixd));
            world.juggle(CHASM);
            return Fate::Alive;
        }

        let world = &mut *self.world;
        world.newloc = match def.fixd {
            FixedDef::At(far) if world.loc == def.plac => far,
            _ => def.plac,
        };
        if world.state(TROLL) == TROLL_UNPAID {
            world.set_state(TROLL, TROLL_PAIDONCE);
        }
        if !world.toting(BEAR) {
            return Fate::Alive;
        }

        self.state_change(CHASM, BRIDGE_WRECKED);
        let world = &mut *self.world;
        world.set_state(TROLL, TROLL_GONE);
        let far = world.newloc;
        world.drop_at(BEAR, far);
        world.set_fixed(BEAR, Fixed::Immovable);
        world.set_state(BEAR, BEAR_DEAD);
        world.oldlc2 = far;
        Fate::Killed
    }

    /// Commit the staged move, then let the dwarves act and check for a
    /// fall in the dark.
    pub fn arrive(&mut self) -> Fate {
        let world = &mut *self.world;
        if world.closing && World::outside(world.newloc) && !world.newloc.is_nowhere() {
            world.newloc = world.loc;
            if !world.panic {
                world.clock2 = PANICTIME;
            }
            world.panic = true;
            self.out.say(messages::EXIT_CLOSED);
        }

        let world = &mut *self.world;
        if world.newloc != world.loc
            && !locations::is_forced(world.loc)
            && !World::has_condition(world.loc, Conditions::NOARRR)
            && world.dwarves[..PIRATE]
                .iter()
                .any(|d| d.oldloc == world.newloc && d.seen)
        {
            world.newloc = world.loc;
            self.out.say(messages::DWARF_BLOCK);
        }

        self.world.loc = self.world.newloc;
        if self.dwarf_move() == Fate::Killed {
            return Fate::Killed;
        }
        if self.world.loc.is_nowhere() {
            return Fate::Killed;
        }
        let loc = self.world.loc;
        if !locations::is_forced(loc) && self.world.dark() && self.world.wzdark && self.pct(PIT_CHANCE)
        {
            self.out.say(messages::PIT_FALL);
            self.world.oldlc2 = loc;
            return Fate::Killed;
        }
        Fate::Alive
    }
}
