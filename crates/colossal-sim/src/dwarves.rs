//! Dwarves and the pirate.
//!
//! The dwarves wake the first time the player goes deep, thin out, and
//! from then on wander the deep cave one travel edge per turn. A dwarf
//! that has seen the player follows them and throws knives. The pirate
//! moves the same way but steals treasure instead of fighting.

use colossal_core::limits::{NDWARVES, PIRATE};
use colossal_core::locations::{self, DALTLC};
use colossal_core::objects::{self, AXE, CHEST, EMERALD, LAMP, LAMP_BRIGHT, MESSAG, PYRAMID};
use colossal_core::{Conditions, LocationId, ObjectId, messages};
use log::debug;

use crate::context::SimContext;
use crate::travel::Fate;
use crate::world::{Fixed, Knife, Place, Prop, World};

/// Which dwarf, if any, is with the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwarfHere {
    /// No dwarf at the location, or the dwarves are not yet about.
    Absent,
    /// Every ordinary dwarf has been killed.
    AllDead,
    /// The dwarf with this index is here.
    Present(usize),
}

/// Result of one turn's dwarf movement, before narration.
#[derive(Debug, Default)]
struct Encounter {
    present: usize,
    attacks: usize,
    hits: usize,
}

impl World {
    /// Look for an ordinary dwarf at `loc`.
    pub fn atdwrf(&self, loc: LocationId) -> DwarfHere {
        if self.dflag < 2 {
            return DwarfHere::Absent;
        }
        let mut found = DwarfHere::AllDead;
        for (i, dwarf) in self.dwarves[..PIRATE].iter().enumerate() {
            if dwarf.loc == loc {
                return DwarfHere::Present(i);
            }
            if dwarf.alive() {
                found = DwarfHere::Absent;
            }
        }
        found
    }

    /// Treasures the pirate leaves alone where the player is standing.
    fn pirate_proof(&self, obj: ObjectId) -> bool {
        obj == PYRAMID
            && (self.loc == objects::object(PYRAMID).plac || self.loc == objects::object(EMERALD).plac)
    }

    /// Places dwarf `i` could wander to next, in travel-table order.
    fn dwarf_destinations(&self, i: usize) -> Vec<LocationId> {
        let dwarf = self.dwarves[i];
        let mut picks: Vec<LocationId> = Vec::new();
        for rule in locations::location(dwarf.loc).travel {
            let Some(dest) = rule.goto() else {
                continue;
            };
            if !World::indeep(dest)
                || dest == dwarf.oldloc
                || picks.last() == Some(&dest)
                || dest == dwarf.loc
                || locations::is_forced(dest)
                || (i == PIRATE && World::has_condition(dest, Conditions::NOARRR))
                || rule.nodwarves
            {
                continue;
            }
            picks.push(dest);
        }
        picks
    }
}

impl SimContext<'_> {
    /// Move every dwarf one step and resolve any attack on the player.
    pub fn dwarf_move(&mut self) -> Fate {
        let loc = self.world.loc;
        if loc.is_nowhere()
            || locations::is_forced(loc)
            || World::has_condition(self.world.newloc, Conditions::NOARRR)
        {
            return Fate::Alive;
        }

        match self.world.dflag {
            0 => {
                if World::indeep(loc) {
                    self.world.dflag = 1;
                }
                return Fate::Alive;
            }
            1 => {
                self.wake_dwarves();
                return Fate::Alive;
            }
            _ => {}
        }

        let mut encounter = Encounter::default();
        for i in 0..NDWARVES {
            if !self.world.dwarves[i].alive() {
                continue;
            }
            let picks = self.world.dwarf_destinations(i);
            let choices = picks.len().max(1) as i32;
            let pick = self.randrange(choices) as usize;
            let dwarf = &mut self.world.dwarves[i];
            let next = picks.get(pick).copied().unwrap_or(dwarf.oldloc);
            dwarf.oldloc = dwarf.loc;
            dwarf.loc = next;
            dwarf.seen = (dwarf.seen && World::indeep(loc)) || dwarf.loc == loc || dwarf.oldloc == loc;
            if !dwarf.seen {
                continue;
            }
            dwarf.loc = loc;
            if self.spotted_by_pirate(i) {
                continue;
            }

            encounter.present += 1;
            if self.world.dwarves[i].oldloc == loc {
                encounter.attacks += 1;
                if self.world.knife != Knife::Gone {
                    self.world.knife = Knife::At(loc);
                }
                if self.randrange(1000) < 95 * (self.world.dflag - 2) {
                    encounter.hits += 1;
                }
            }
        }

        self.narrate_encounter(&encounter)
    }

    /// First deep visit: kill up to two dwarves, move any survivor off the
    /// player's square, and leave the axe behind.
    fn wake_dwarves(&mut self) {
        let loc = self.world.loc;
        let twisty = World::has_condition(loc, Conditions::NOBACK);
        if !World::indeep(loc) || (self.pct(95) && (!twisty || self.pct(85))) {
            return;
        }
        self.world.dflag = 2;
        debug!("dwarves activated at {loc}");
        for _ in 0..2 {
            let j = self.randrange(PIRATE as i32) as usize;
            if self.pct(50) {
                self.world.dwarves[j].loc = locations::NOWHERE;
            }
        }
        for dwarf in &mut self.world.dwarves[..PIRATE] {
            if dwarf.loc == loc {
                dwarf.loc = DALTLC;
            }
            dwarf.oldloc = dwarf.loc;
        }
        self.out.say(messages::DWARF_RAN);
        self.world.drop_at(AXE, loc);
    }

    fn narrate_encounter(&mut self, encounter: &Encounter) -> Fate {
        match encounter.present {
            0 => return Fate::Alive,
            1 => self.out.say(messages::DWARF_SINGLE),
            n => self.out.say(messages::dwarf_pack(n)),
        }
        if encounter.attacks == 0 {
            return Fate::Alive;
        }
        if self.world.dflag == 2 {
            self.world.dflag = 3;
        }
        if encounter.attacks > 1 {
            self.out.say(messages::thrown_knives(encounter.attacks));
            match encounter.hits {
                0 => self.out.say(messages::NONE_HIT),
                1 => self.out.say(messages::ONE_HIT),
                n => self.out.say(messages::multiple_hits(n)),
            }
        } else {
            self.out.say(messages::KNIFE_THROWN);
            if encounter.hits > 0 {
                self.out.say(messages::GETS_YOU);
            } else {
                self.out.say(messages::MISSES_YOU);
            }
        }
        if encounter.hits == 0 {
            return Fate::Alive;
        }
        self.world.oldlc2 = self.world.loc;
        Fate::Killed
    }

    /// The pirate's turn once he has caught up with the player. Returns
    /// true when dwarf `i` was the pirate, who never attacks.
    fn spotted_by_pirate(&mut self, i: usize) -> bool {
        if i != PIRATE {
            return false;
        }
        let world = &mut *self.world;
        if world.loc == world.chloc || !world.is_undiscovered(CHEST) {
            return true;
        }

        let mut snarfed = 0;
        let mut movechest = false;
        let mut robplayer = false;
        for treasure in ObjectId::all().filter(|obj| objects::object(*obj).treasure) {
            if world.pirate_proof(treasure) {
                continue;
            }
            if world.here(treasure) {
                snarfed += 1;
            }
            if world.toting(treasure) {
                movechest = true;
                robplayer = true;
            }
        }

        // The chest goes into the maze before the last treasure is found.
        if world.tally == 1
            && snarfed == 0
            && world.place(CHEST) == Place::Nowhere
            && world.here(LAMP)
            && world.prop(LAMP) == Prop::Visible(LAMP_BRIGHT)
        {
            self.out.say(messages::PIRATE_SPOTTED);
            movechest = true;
        }

        let world = &mut *self.world;
        if movechest {
            let (chloc, chloc2) = (world.chloc, world.chloc2);
            world.move_to(CHEST, Place::from(chloc));
            world.move_to(MESSAG, Place::from(chloc2));
            let pirate = &mut world.dwarves[PIRATE];
            pirate.loc = chloc;
            pirate.oldloc = chloc;
            pirate.seen = false;
            debug!("pirate hid the chest at {chloc}");
        } else if world.dwarves[PIRATE].oldloc != world.dwarves[PIRATE].loc && self.pct(20) {
            self.out.say(messages::PIRATE_RUSTLES);
        }

        if robplayer {
            self.out.say(messages::PIRATE_POUNCES);
            let world = &mut *self.world;
            let chloc = world.chloc;
            for treasure in ObjectId::all().filter(|obj| objects::object(*obj).treasure) {
                if world.pirate_proof(treasure) {
                    continue;
                }
                if world.at(treasure) && world.fixed(treasure) == Fixed::Free {
                    world.carry(treasure);
                }
                if world.toting(treasure) {
                    world.drop_at(treasure, chloc);
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::Narration;
    use colossal_core::locations::{BUILDING, CHLOC, MISTHALL, START};
    use colossal_core::objects::{NUGGET, SILVER};

    fn active_world() -> World {
        let mut world = World::new(17);
        world.dflag = 2;
        world
    }

    #[test]
    fn atdwrf_ignores_sleeping_dwarves() {
        let mut world = World::new(1);
        let at = world.dwarves[0].loc;
        assert_eq!(world.atdwrf(at), DwarfHere::Absent);
        world.dflag = 2;
        assert_eq!(world.atdwrf(at), DwarfHere::Present(0));
        assert_eq!(world.atdwrf(BUILDING), DwarfHere::Absent);
    }

    #[test]
    fn atdwrf_reports_extinction() {
        let mut world = active_world();
        for dwarf in &mut world.dwarves[..PIRATE] {
            dwarf.loc = locations::NOWHERE;
        }
        assert_eq!(world.atdwrf(BUILDING), DwarfHere::AllDead);
    }

    #[test]
    fn first_deep_visit_arms_the_dwarves() {
        let mut world = World::new(1);
        world.loc = MISTHALL;
        world.newloc = MISTHALL;
        let mut out = Narration::new();
        let fate = SimContext::new(&mut world, &mut out).dwarf_move();
        assert_eq!(fate, Fate::Alive);
        assert_eq!(world.dflag, 1);
    }

    #[test]
    fn surface_keeps_dwarves_dormant() {
        let mut world = World::new(1);
        let mut out = Narration::new();
        SimContext::new(&mut world, &mut out).dwarf_move();
        assert_eq!(world.dflag, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn activation_eventually_drops_the_axe() {
        let mut world = World::new(5);
        world.loc = MISTHALL;
        world.newloc = MISTHALL;
        world.dflag = 1;
        let mut out = Narration::new();
        for _ in 0..500 {
            SimContext::new(&mut world, &mut out).dwarf_move();
            if world.dflag == 2 {
                break;
            }
        }
        assert_eq!(world.dflag, 2);
        assert_eq!(world.place(AXE), Place::At(MISTHALL));
        assert!(out.take().contains(messages::DWARF_RAN));
        assert!(world.dwarves[..PIRATE].iter().all(|d| d.loc != MISTHALL));
    }

    #[test]
    fn wandering_dwarves_stay_deep() {
        let mut world = active_world();
        world.loc = START;
        world.newloc = START;
        let mut out = Narration::new();
        for _ in 0..200 {
            SimContext::new(&mut world, &mut out).dwarf_move();
        }
        for dwarf in world.dwarves.iter().filter(|d| d.alive()) {
            assert!(World::indeep(dwarf.loc), "dwarf wandered to {}", dwarf.loc);
        }
    }

    #[test]
    fn pirate_robs_a_treasure_carrier() {
        let mut world = active_world();
        world.loc = MISTHALL;
        world.carry(NUGGET);
        world.carry(SILVER);
        world.set_prop(NUGGET, Prop::Visible(0));
        let mut out = Narration::new();
        let mut ctx = SimContext::new(&mut world, &mut out);
        assert!(ctx.spotted_by_pirate(PIRATE));
        assert_eq!(world.place(NUGGET), Place::At(CHLOC));
        assert_eq!(world.place(SILVER), Place::At(CHLOC));
        assert_eq!(world.place(CHEST), Place::At(CHLOC));
        assert_eq!(world.holdng, 0);
        assert!(out.take().contains(messages::PIRATE_POUNCES));
    }

    #[test]
    fn pirate_leaves_once_chest_is_found() {
        let mut world = active_world();
        world.loc = MISTHALL;
        world.carry(NUGGET);
        world.set_prop(CHEST, Prop::Visible(0));
        let mut out = Narration::new();
        assert!(SimContext::new(&mut world, &mut out).spotted_by_pirate(PIRATE));
        assert!(world.toting(NUGGET));
    }

    #[test]
    fn ordinary_dwarves_are_not_pirates() {
        let mut world = active_world();
        let mut out = Narration::new();
        assert!(!SimContext::new(&mut world, &mut out).spotted_by_pirate(0));
    }
}
