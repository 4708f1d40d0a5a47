//! Consistency checks for a world that did not come from [`World::new`].

use colossal_core::hints::NDEATHS;
use colossal_core::limits::PIRATE;
use colossal_core::locations::NLOCATIONS;
use colossal_core::objects::{self, NOBJECTS};
use colossal_core::{LocationId, ObjectId};

use crate::error::{SimError, SimResult};
use crate::world::{Fixed, Knife, Place, Slot, World};

fn check_location(field: impl Into<String>, loc: LocationId) -> SimResult<()> {
    LocationId::checked(loc.0).map(|_| ()).map_err(|_| SimError::BadLocation {
        field: field.into(),
        raw: loc.0,
    })
}

/// Number of states an object can be in.
fn state_count(obj: ObjectId) -> usize {
    let def = objects::object(obj);
    [
        def.descriptions.len(),
        def.changes.len(),
        def.sounds.len(),
        def.texts.len(),
        1,
    ]
    .into_iter()
    .max()
    .unwrap_or(1)
}

impl World {
    /// Check every structural invariant: table sizes, ids, the placement
    /// chains, counters and the generator.
    pub fn validate(&self) -> SimResult<()> {
        if self.objects.len() != NOBJECTS + 1 {
            return Err(SimError::ObjectCount {
                expected: NOBJECTS + 1,
                found: self.objects.len(),
            });
        }
        if self.locations.len() != NLOCATIONS {
            return Err(SimError::LocationCount {
                expected: NLOCATIONS,
                found: self.locations.len(),
            });
        }

        for (field, loc) in [
            ("loc", self.loc),
            ("newloc", self.newloc),
            ("oldloc", self.oldloc),
            ("oldlc2", self.oldlc2),
            ("chloc", self.chloc),
            ("chloc2", self.chloc2),
        ] {
            check_location(field, loc)?;
        }
        for (i, dwarf) in self.dwarves.iter().enumerate() {
            check_location(format!("dwarf {i} location"), dwarf.loc)?;
            check_location(format!("dwarf {i} previous location"), dwarf.oldloc)?;
        }
        if let Knife::At(loc) = self.knife {
            check_location("knife", loc)?;
        }

        self.validate_placement()?;

        let undiscovered = ObjectId::all()
            .filter(|obj| objects::object(*obj).treasure && self.is_undiscovered(*obj))
            .count() as i32;
        if undiscovered != self.tally {
            return Err(SimError::TallyMismatch {
                expected: undiscovered,
                found: self.tally,
            });
        }

        if !self.rng.is_valid() {
            return Err(SimError::BadRngState(self.rng.state()));
        }
        if self.dflag < 0 || !(0..=PIRATE as i32).contains(&self.dkill) {
            return Err(SimError::DwarfCounters {
                dflag: self.dflag,
                dkill: self.dkill,
            });
        }
        if !(0..NDEATHS as i32).contains(&self.numdie) {
            return Err(SimError::DeathCount(self.numdie));
        }

        for obj in ObjectId::all() {
            let state = self.state(obj);
            if state < 0 || state as usize >= state_count(obj) {
                return Err(SimError::PropRange { object: obj, state });
            }
        }

        if self.abbnum == 0 {
            return Err(SimError::ZeroAbbnum);
        }
        let weight = self.carried_weight();
        if weight != self.holdng {
            return Err(SimError::HoldingMismatch {
                expected: weight,
                found: self.holdng,
            });
        }

        let letters: Vec<char> = self.zzword.chars().collect();
        let well_formed = letters.len() == 5
            && letters[1] == '\''
            && letters
                .iter()
                .enumerate()
                .all(|(i, c)| i == 1 || c.is_ascii_uppercase());
        if !well_formed {
            return Err(SimError::BadMagicWord(self.zzword.clone()));
        }
        Ok(())
    }

    /// Check that every placed object is listed exactly once where it lies
    /// and that nothing else is listed anywhere.
    pub fn validate_placement(&self) -> SimResult<()> {
        for (index, state) in self.objects.iter().enumerate().skip(1) {
            let obj = ObjectId(index as u16);
            if let Place::At(loc) = state.place {
                check_location(format!("place of {obj}"), loc)?;
            }
            if let Fixed::At(loc) = state.fixed {
                check_location(format!("second half of {obj}"), loc)?;
            }
        }

        for (index, location) in self.locations.iter().enumerate() {
            let at = LocationId(index as u16);
            for slot in &location.atloc {
                let raw = slot.object().0;
                let Ok(obj) = ObjectId::checked(raw) else {
                    return Err(SimError::BadObject { at, raw });
                };
                let listed_here = match slot {
                    Slot::Main(_) => self.place(obj) == Place::At(at),
                    Slot::Second(_) => self.fixed(obj) == Fixed::At(at),
                };
                if !listed_here {
                    return Err(SimError::StrayChainEntry { object: obj, at });
                }
            }
        }

        for obj in ObjectId::all() {
            let halves = [
                self.place(obj).location().map(|loc| (loc, Slot::Main(obj))),
                self.fixed(obj).location().map(|loc| (loc, Slot::Second(obj))),
            ];
            for (loc, slot) in halves.into_iter().flatten() {
                if loc.is_nowhere() {
                    continue;
                }
                let count = self.atloc(loc).filter(|s| *s == slot).count();
                if count != 1 {
                    return Err(SimError::ChainMismatch {
                        object: obj,
                        at: loc,
                        count,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{LCG_M, Lcg};
    use crate::world::Prop;
    use colossal_core::locations::{BUILDING, START};
    use colossal_core::objects::{KEYS, LAMP, NUGGET};

    #[test]
    fn fresh_world_is_valid() {
        for seed in [0, 1, 42, 1_838_473_132] {
            assert!(World::new(seed).validate().is_ok());
        }
    }

    #[test]
    fn out_of_range_location_is_rejected() {
        let mut world = World::new(1);
        world.loc = LocationId(999);
        assert!(matches!(
            world.validate(),
            Err(SimError::BadLocation { raw: 999, .. })
        ));
    }

    #[test]
    fn stray_chain_entry_is_rejected() {
        let mut world = World::new(1);
        world.locations[START.index()].atloc.push_back(Slot::Main(KEYS));
        assert!(matches!(
            world.validate_placement(),
            Err(SimError::StrayChainEntry { .. })
        ));
    }

    #[test]
    fn missing_chain_entry_is_rejected() {
        let mut world = World::new(1);
        world.locations[BUILDING.index()].atloc.retain(|s| *s != Slot::Main(LAMP));
        assert!(matches!(
            world.validate_placement(),
            Err(SimError::ChainMismatch { count: 0, .. })
        ));
    }

    #[test]
    fn tally_must_match_hidden_treasures() {
        let mut world = World::new(1);
        world.set_prop(NUGGET, Prop::Visible(0));
        assert!(matches!(
            world.validate(),
            Err(SimError::TallyMismatch { expected: 19, found: 20 })
        ));
        world.tally = 19;
        assert!(world.validate().is_ok());
    }

    #[test]
    fn counters_are_range_checked() {
        let mut world = World::new(1);
        world.rng = Lcg::from_state(LCG_M);
        assert!(matches!(world.validate(), Err(SimError::BadRngState(_))));

        let mut world = World::new(1);
        world.dflag = -1;
        assert!(matches!(world.validate(), Err(SimError::DwarfCounters { .. })));

        let mut world = World::new(1);
        world.numdie = NDEATHS as i32;
        assert!(matches!(world.validate(), Err(SimError::DeathCount(_))));

        let mut world = World::new(1);
        world.abbnum = 0;
        assert!(matches!(world.validate(), Err(SimError::ZeroAbbnum)));

        let mut world = World::new(1);
        world.holdng = 3;
        assert!(matches!(world.validate(), Err(SimError::HoldingMismatch { .. })));
    }

    #[test]
    fn impossible_state_is_rejected() {
        let mut world = World::new(1);
        world.set_state(KEYS, 4);
        assert!(matches!(world.validate(), Err(SimError::PropRange { .. })));
    }

    #[test]
    fn played_world_survives_json() {
        let mut world = World::new(7);
        world.carry(KEYS);
        world.drop_at(LAMP, START);
        let json = serde_json::to_string(&world).expect("serialize");
        let back: World = serde_json::from_str(&json).expect("deserialize");
        assert!(back.validate().is_ok());
        assert_eq!(back, world);
    }

    #[test]
    fn magic_word_shape_is_checked() {
        let mut world = World::new(1);
        world.zzword = "XYZZY".to_string();
        assert!(matches!(world.validate(), Err(SimError::BadMagicWord(_))));
    }
}
