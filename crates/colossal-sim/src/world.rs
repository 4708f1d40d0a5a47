//! The per-game mutable overlay on top of the static tables.

use std::collections::VecDeque;

use colossal_core::hints::NHINTS;
use colossal_core::limits::{CLOCK1, CLOCK2, GAMELIMIT, NDWARVES, PIRATE};
use colossal_core::locations::{self, CHLOC, CHLOC2, DWARF_STARTS, NLOCATIONS, NOWHERE, START};
use colossal_core::objects::{self, NOBJECTS};
use colossal_core::{FixedDef, LocationId, ObjectId};
use serde::{Deserialize, Serialize};

use crate::rng::Lcg;

/// Where an object's main half is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Place {
    /// Not in the world.
    Nowhere,
    /// In the player's inventory.
    Carried,
    /// At a location.
    At(LocationId),
}

impl Place {
    /// Location, if the object lies somewhere.
    pub fn location(self) -> Option<LocationId> {
        match self {
            Place::At(loc) => Some(loc),
            _ => None,
        }
    }
}

impl From<LocationId> for Place {
    fn from(loc: LocationId) -> Self {
        if loc.is_nowhere() {
            Place::Nowhere
        } else {
            Place::At(loc)
        }
    }
}

/// Anchoring of an object, and where its second half is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fixed {
    /// Can be picked up.
    Free,
    /// Cannot be picked up.
    Immovable,
    /// Cannot be picked up; its second half is visible at this location.
    At(LocationId),
}

impl Fixed {
    /// Location of the second half, if any.
    pub fn location(self) -> Option<LocationId> {
        match self {
            Fixed::At(loc) => Some(loc),
            _ => None,
        }
    }
}

impl From<FixedDef> for Fixed {
    fn from(def: FixedDef) -> Self {
        match def {
            FixedDef::Free => Fixed::Free,
            FixedDef::Immovable => Fixed::Immovable,
            FixedDef::At(loc) => Fixed::At(loc),
        }
    }
}

/// Descriptive state of an object and whether the player has noticed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prop {
    /// Described normally in the given state.
    Visible(i32),
    /// Not yet described. `Hidden(0)` is an undiscovered object; other
    /// states are objects stashed in the repository at closing time.
    Hidden(i32),
}

impl Prop {
    /// The underlying state, whether hidden or not.
    pub fn state(self) -> i32 {
        match self {
            Prop::Visible(s) | Prop::Hidden(s) => s,
        }
    }

    /// True for a hidden prop.
    pub fn is_hidden(self) -> bool {
        matches!(self, Prop::Hidden(_))
    }

    /// The legacy signed encoding: hidden states are stored as `-1 - state`.
    pub fn raw(self) -> i32 {
        match self {
            Prop::Visible(s) => s,
            Prop::Hidden(s) => -1 - s,
        }
    }
}

/// Mutable fields of one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectState {
    /// Main half.
    pub place: Place,
    /// Anchoring and second half.
    pub fixed: Fixed,
    /// Descriptive state.
    pub prop: Prop,
}

/// One entry in the list of things at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// An object's main half.
    Main(ObjectId),
    /// The second half of a two-location object.
    Second(ObjectId),
}

impl Slot {
    /// The object either half belongs to.
    pub fn object(self) -> ObjectId {
        match self {
            Slot::Main(obj) | Slot::Second(obj) => obj,
        }
    }
}

/// Mutable fields of one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    /// Visits counted toward the long/short description cycle.
    pub abbrev: i32,
    /// Objects here, front first.
    pub atloc: VecDeque<Slot>,
}

/// A dwarf, or the pirate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dwarf {
    /// Current location; [`NOWHERE`] once dead.
    pub loc: LocationId,
    /// Location before the last move.
    pub oldloc: LocationId,
    /// Has the player been spotted.
    pub seen: bool,
}

impl Dwarf {
    /// True unless killed.
    pub fn alive(&self) -> bool {
        !self.loc.is_nowhere()
    }
}

/// Whereabouts of the knife last thrown at the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Knife {
    /// No knife in play.
    #[default]
    Unseen,
    /// Lying where it missed.
    At(LocationId),
    /// Vanished when the player reached for it.
    Gone,
}

/// How the endgame was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bonus {
    /// Not resolved by the rod.
    #[default]
    None,
    /// Blew up the player.
    Splatter,
    /// Blew up the wrong end of the repository.
    Defeat,
    /// Blew up the dwarves.
    Victory,
}

/// Progress toward offering a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HintState {
    /// Read and paid for.
    pub used: bool,
    /// Consecutive turns spent where the hint applies.
    pub lc: i32,
}

/// Everything about one game that changes as it is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Player's location.
    pub loc: LocationId,
    /// Where the player is about to go.
    pub newloc: LocationId,
    /// Previous location.
    pub oldloc: LocationId,
    /// Location before that; also where the player's belongings end up on death.
    pub oldlc2: LocationId,
    /// Commands accepted so far.
    pub turns: i32,
    /// Dwarf activity stage, 0 to 3. Each feeding of a dwarf adds two more.
    pub dflag: i32,
    /// Dwarves killed.
    pub dkill: i32,
    /// Treasures not yet discovered.
    pub tally: i32,
    /// Inventory weight.
    pub holdng: i32,
    /// Turns until the cave starts closing.
    pub clock1: i32,
    /// Turns until the cave closes.
    pub clock2: i32,
    /// Lamp power left.
    pub limit: i32,
    /// Low-lamp warning given.
    pub lmwarn: bool,
    /// Cave is closing.
    pub closing: bool,
    /// Cave has closed.
    pub closed: bool,
    /// Player tried to leave while closing.
    pub panic: bool,
    /// Player asked for instructions.
    pub novice: bool,
    /// Location was dark when the last command was read.
    pub wzdark: bool,
    /// Player drank the dragon's blood.
    pub blooded: bool,
    /// Player read the repository clue.
    pub clshnt: bool,
    /// Player has seen the giant's eggs.
    pub seenbigwords: bool,
    /// Deaths so far.
    pub numdie: i32,
    /// Progress through the fee-fie-foe-foo sequence; negative means armed for one turn.
    pub foobar: i32,
    /// Times LOOK has been told there is no more detail.
    pub detail: i32,
    /// Long descriptions are given every `abbnum` visits.
    pub abbnum: i32,
    /// Times "west" was typed in full.
    pub iwest: i32,
    /// Times "go" was typed before a direction.
    pub igo: i32,
    /// Points charged for saving.
    pub saved: i32,
    /// Points lost to turn thresholds.
    pub trnluz: i32,
    /// Endgame outcome.
    pub bonus: Bonus,
    /// Knife state.
    pub knife: Knife,
    /// Object the last command named.
    pub oldobj: Option<ObjectId>,
    /// This game's magic word, upper case.
    pub zzword: String,
    /// The random generator.
    pub rng: Lcg,
    /// Where the pirate hides the chest.
    pub chloc: LocationId,
    /// Where the pirate leaves his message.
    pub chloc2: LocationId,
    /// Dwarves; the last one is the pirate.
    pub dwarves: [Dwarf; NDWARVES],
    /// Hint progress.
    pub hints: [HintState; NHINTS],
    pub(crate) objects: Vec<ObjectState>,
    pub(crate) locations: Vec<LocationState>,
}

impl World {
    /// Build a fresh game from the static tables.
    pub fn new(seed: u64) -> Self {
        let mut rng = Lcg::new(seed);
        let zzword = magic_word(&mut rng);

        let mut dwarves = [Dwarf {
            loc: NOWHERE,
            oldloc: NOWHERE,
            seen: false,
        }; NDWARVES];
        for (dwarf, start) in dwarves.iter_mut().zip(DWARF_STARTS) {
            dwarf.loc = start;
        }
        dwarves[PIRATE].loc = CHLOC;

        let unplaced = ObjectState {
            place: Place::Nowhere,
            fixed: Fixed::Free,
            prop: Prop::Visible(0),
        };

        let mut world = World {
            loc: START,
            newloc: START,
            oldloc: NOWHERE,
            oldlc2: NOWHERE,
            turns: 0,
            dflag: 0,
            dkill: 0,
            tally: 0,
            holdng: 0,
            clock1: CLOCK1,
            clock2: CLOCK2,
            limit: GAMELIMIT,
            lmwarn: false,
            closing: false,
            closed: false,
            panic: false,
            novice: false,
            wzdark: false,
            blooded: false,
            clshnt: false,
            seenbigwords: false,
            numdie: 0,
            foobar: 0,
            detail: 0,
            abbnum: 5,
            iwest: 0,
            igo: 0,
            saved: 0,
            trnluz: 0,
            bonus: Bonus::None,
            knife: Knife::Unseen,
            oldobj: None,
            zzword,
            rng,
            chloc: CHLOC,
            chloc2: CHLOC2,
            dwarves,
            hints: [HintState::default(); NHINTS],
            objects: vec![unplaced; NOBJECTS + 1],
            locations: vec![LocationState::default(); NLOCATIONS],
        };

        // Two-location objects go in first so they end up last in each
        // chain; everything is dropped in reverse so chains read in table order.
        for obj in ObjectId::all().rev() {
            let def = objects::object(obj);
            if let FixedDef::At(second) = def.fixd {
                world.set_fixed(obj, Fixed::At(second));
                world.move_to(obj, Place::from(def.plac));
            }
        }
        for obj in ObjectId::all().rev() {
            let def = objects::object(obj);
            if !matches!(def.fixd, FixedDef::At(_)) {
                world.objects[obj.index()].fixed = Fixed::from(def.fixd);
                world.move_to(obj, Place::from(def.plac));
            }
        }
        for obj in ObjectId::all() {
            if objects::object(obj).treasure {
                world.tally += 1;
                world.objects[obj.index()].prop = Prop::Hidden(0);
            }
        }
        world
    }

    /// Mutable fields of an object.
    pub fn object(&self, obj: ObjectId) -> &ObjectState {
        &self.objects[obj.index()]
    }

    /// Main-half placement.
    pub fn place(&self, obj: ObjectId) -> Place {
        self.objects[obj.index()].place
    }

    /// Anchoring.
    pub fn fixed(&self, obj: ObjectId) -> Fixed {
        self.objects[obj.index()].fixed
    }

    /// Descriptive state with its visibility.
    pub fn prop(&self, obj: ObjectId) -> Prop {
        self.objects[obj.index()].prop
    }

    /// Descriptive state, ignoring visibility.
    pub fn state(&self, obj: ObjectId) -> i32 {
        self.prop(obj).state()
    }

    /// Set a visible state without narration.
    pub fn set_state(&mut self, obj: ObjectId, state: i32) {
        self.objects[obj.index()].prop = Prop::Visible(state);
    }

    /// Replace the prop outright.
    pub fn set_prop(&mut self, obj: ObjectId, prop: Prop) {
        self.objects[obj.index()].prop = prop;
    }

    /// True for an object that has never been described.
    pub fn is_undiscovered(&self, obj: ObjectId) -> bool {
        self.prop(obj) == Prop::Hidden(0)
    }

    /// Mutable fields of a location.
    pub fn location_state(&self, loc: LocationId) -> &LocationState {
        &self.locations[loc.index()]
    }

    /// Objects at a location, front first.
    pub fn atloc(&self, loc: LocationId) -> impl Iterator<Item = Slot> + '_ {
        self.locations[loc.index()].atloc.iter().copied()
    }

    /// True when nothing lies at the location.
    pub fn is_empty_at(&self, loc: LocationId) -> bool {
        self.locations[loc.index()].atloc.is_empty()
    }

    /// Count a visit toward the long/short description cycle.
    pub fn bump_abbrev(&mut self, loc: LocationId) {
        self.locations[loc.index()].abbrev += 1;
    }

    /// Force the next description of a location to be the long one.
    pub fn reset_abbrev(&mut self, loc: LocationId) {
        self.locations[loc.index()].abbrev = 0;
    }

    /// True when the next description of the player's location is the long one.
    pub fn wants_long_description(&self) -> bool {
        let abbrev = self.locations[self.loc.index()].abbrev;
        self.abbnum != 0 && abbrev % self.abbnum == 0
    }

    /// True when the player's location moves them on without input.
    pub fn forced_here(&self) -> bool {
        locations::is_forced(self.loc)
    }
}

fn magic_word(rng: &mut Lcg) -> String {
    let mut letters: Vec<char> = (0..5)
        .map(|_| char::from(b'A' + rng.randrange(26) as u8))
        .collect();
    letters[1] = '\'';
    letters.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colossal_core::locations::{BUILDING, SWCHASM};
    use colossal_core::objects::{CHASM, KEYS, LAMP, NUGGET, TROLL};

    #[test]
    fn fresh_world_places_objects() {
        let world = World::new(1);
        assert_eq!(world.place(LAMP), Place::At(BUILDING));
        assert_eq!(world.place(KEYS), Place::At(BUILDING));
        assert_eq!(world.fixed(TROLL).location(), Some(locations::NECHASM));
        assert_eq!(world.holdng, 0);
        assert_eq!(world.loc, START);
    }

    #[test]
    fn building_lists_in_table_order() {
        let world = World::new(1);
        let here: Vec<_> = world.atloc(BUILDING).map(Slot::object).collect();
        let mut sorted = here.clone();
        sorted.sort();
        assert_eq!(here, sorted);
        assert!(here.contains(&KEYS));
    }

    #[test]
    fn two_location_objects_hold_both_chains() {
        let world = World::new(1);
        assert!(world.atloc(SWCHASM).any(|s| s == Slot::Main(CHASM)));
        assert!(world.atloc(locations::NECHASM).any(|s| s == Slot::Second(CHASM)));
    }

    #[test]
    fn treasures_start_hidden() {
        let world = World::new(1);
        assert!(world.is_undiscovered(NUGGET));
        assert_eq!(world.prop(LAMP), Prop::Visible(0));
        assert_eq!(world.tally, 20);
    }

    #[test]
    fn magic_word_has_apostrophe() {
        let world = World::new(99);
        let chars: Vec<char> = world.zzword.chars().collect();
        assert_eq!(chars.len(), 5);
        assert_eq!(chars[1], '\'');
        assert!(chars.iter().all(|c| *c == '\'' || c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_raw_encoding() {
        assert_eq!(Prop::Visible(2).raw(), 2);
        assert_eq!(Prop::Hidden(0).raw(), -1);
        assert_eq!(Prop::Hidden(1).raw(), -2);
        assert_eq!(Prop::Hidden(3).state(), 3);
    }
}
