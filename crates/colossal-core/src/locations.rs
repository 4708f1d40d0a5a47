//! The location table and its travel rules.
//!
//! Travel rules are tried in order. A rule whose motions match but whose
//! guard fails hands over to the next rule in the list regardless of that
//! rule's motions, so fallback chains share a motion list.

use crate::conditions::Conditions as C;
use crate::ids::LocationId;
use crate::objects::{
    CHASM, CLAM, DOOR, DRAGON, EMERALD, FISSURE, GRATE, NUGGET, OGRE, OYSTER, PLANT, RESER, SNAKE,
    TROLL, VEND,
};
use crate::travel::TravelCond::{Carrying, NotState, Pct, With};
use crate::travel::TravelRule as R;
use crate::vocab::Motion as M;

/// Number of locations, including [`NOWHERE`].
pub const NLOCATIONS: usize = 105;

/// Static description of a location.
#[derive(Debug, Clone, Copy)]
pub struct LocationDef {
    /// The location's own id.
    pub id: LocationId,
    /// Full description.
    pub long: &'static str,
    /// Abbreviated description for repeat visits.
    pub short: Option<&'static str>,
    /// Ambient sound reported by LISTEN.
    pub sound: Option<&'static str>,
    /// Static condition bits.
    pub conditions: C,
    /// Travel rules, tried in order.
    pub travel: &'static [R],
}

impl LocationDef {
    /// True when the first rule moves the player without input.
    pub fn is_forced(&self) -> bool {
        self.travel.first().is_some_and(R::is_forced)
    }
}

const BLANK: LocationDef = LocationDef {
    id: LocationId(0),
    long: "",
    short: None,
    sound: None,
    conditions: C::empty(),
    travel: &[],
};

macro_rules! location_ids {
    ($($name:ident = $n:literal, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub const $name: LocationId = LocationId($n);
        )*
    };
}

location_ids! {
    NOWHERE = 0, "Sentinel for objects and dwarves that are nowhere.";
    START = 1, "End of the road, outside the building.";
    HILL = 2, "Hill in the road.";
    BUILDING = 3, "Inside the well house.";
    VALLEY = 4, "Valley beside the stream.";
    FOREST1 = 5, "Forest near the valley.";
    FOREST2 = 6, "Forest near the road.";
    SLIT = 7, "Slit in the streambed.";
    GRATE_ROOM = 8, "Outside the grate.";
    BELOWGRATE = 9, "Below the grate.";
    COBBLE = 10, "Cobble crawl.";
    DEBRIS = 11, "Debris room.";
    AWKWARD = 12, "Awkward sloping canyon.";
    BIRDCHAMBER = 13, "Bird chamber.";
    PITTOP = 14, "Top of the small pit.";
    MISTHALL = 15, "Hall of Mists.";
    NUGGET_ROOM = 16, "Low room with the gold nugget.";
    EASTBANK = 17, "East bank of the fissure.";
    WESTBANK = 18, "West side of the fissure.";
    WESTEND = 19, "West end of the Hall of Mists.";
    LONGEAST = 20, "East end of the long hall.";
    LONGWEST = 21, "West end of the long hall.";
    CROSSOVER = 22, "Crossover of two passages.";
    DEADEND1 = 23, "Dead end north of the crossover.";
    KINGHALL = 24, "Hall of the Mountain King.";
    LOWN_S = 25, "Low north/south passage.";
    SOUTHSIDE = 26, "South side chamber.";
    WESTSIDE = 27, "West side chamber.";
    Y2 = 28, "Room marked Y2.";
    JUMBLE = 29, "Jumble of rock.";
    WINDOW1 = 30, "Window on the pit.";
    PLOVER = 31, "Plover room.";
    ALCOVE = 32, "Alcove by the plover tunnel.";
    DARKROOM = 33, "The dark-room.";
    ALIKE1 = 34, "Maze of twisty passages, all alike (1).";
    ALIKE2 = 35, "Maze of twisty passages, all alike (2).";
    ALIKE3 = 36, "Maze of twisty passages, all alike (3).";
    ALIKE4 = 37, "Maze of twisty passages, all alike (4).";
    ALIKE5 = 38, "Maze of twisty passages, all alike (5).";
    ALIKE6 = 39, "Maze of twisty passages, all alike (6).";
    ALIKE7 = 40, "Maze of twisty passages, all alike (7).";
    DEADEND_A = 41, "Dead end in the maze.";
    DEADEND_B = 42, "Another dead end in the maze.";
    BRINK = 43, "Brink of a pit in the maze.";
    MAZEEND12 = 44, "Dead end where the pirate hides his chest.";
    DIFF1 = 45, "Maze of twisty passages, all different (1).";
    DIFF2 = 46, "Maze of twisty passages, all different (2).";
    DIFF3 = 47, "Maze of twisty passages, all different (3).";
    DIFF4 = 48, "Maze of twisty passages, all different (4).";
    DEADEND13 = 49, "Dead end with the vending machine.";
    DIRTY = 50, "Dirty broken passage.";
    DUSTY = 51, "Dusty rock room.";
    COMPLEX = 52, "Complex junction.";
    BEDQUILT = 53, "Bedquilt.";
    SWISS = 54, "Swiss cheese room.";
    SLAB = 55, "Slab room.";
    EASTEND_TWOPIT = 56, "East end of the twopit room.";
    WESTEND_TWOPIT = 57, "West end of the twopit room.";
    EASTPIT = 58, "Bottom of the eastern pit.";
    WESTPIT = 59, "Bottom of the western pit.";
    NARROW = 60, "Narrow corridor.";
    GIANTROOM = 61, "Giant room.";
    IMMENSE = 62, "Immense north/south passage.";
    CAVERN = 63, "Magnificent cavern with a waterfall.";
    STEEP = 64, "Steep incline above a large room.";
    SOFTROOM = 65, "Soft room.";
    ORIENTAL = 66, "Oriental room.";
    MISTY = 67, "Misty cavern.";
    LOWROOM = 68, "Large low room.";
    OGRECRAWL = 69, "Crawl leading to the ogre.";
    OGREROOM = 70, "Ogre's room.";
    STOREROOM = 71, "Storeroom past the ogre.";
    SHELLROOM = 72, "Shell room.";
    ARCHED = 73, "Arched hall.";
    RAGGED = 74, "Ragged corridor.";
    CULDESAC = 75, "Cul-de-sac.";
    SECRET_EW = 76, "Secret east/west canyon.";
    SECRET_NS = 77, "Secret north/south canyon.";
    SECRET4 = 78, "East side of the dragon's cave.";
    SECRET5 = 79, "Dragon's cave.";
    SECRET6 = 80, "North side of the dragon's cave.";
    CLIFF = 81, "Cliff face with the urn.";
    LEDGE = 82, "Ledge across the chasm.";
    MIRRORCANYON = 83, "Mirror canyon.";
    RESERVOIR = 84, "Edge of the reservoir.";
    RESBOTTOM = 85, "Bottom of the reservoir.";
    RESNORTH = 86, "North shore of the reservoir.";
    SLOPING = 87, "Sloping corridor.";
    SWCHASM = 88, "Southwest side of the chasm.";
    NECHASM = 89, "Northeast side of the chasm.";
    CORRIDOR = 90, "Long east/west corridor.";
    FORK = 91, "Fork in the path.";
    WARMWALLS = 92, "Warm walls junction.";
    BREATHTAKING = 93, "Breath-taking view.";
    BOULDERS2 = 94, "Chamber of boulders.";
    LIMESTONE = 95, "Limestone passage.";
    FBARREN = 96, "Front of the barren room.";
    BARREN = 97, "Barren room.";
    WITTSEND = 98, "Witt's End.";
    ANTEROOM = 99, "Anteroom.";
    NE = 100, "Northeast end of the repository.";
    SW = 101, "Southwest end of the repository.";
    NECKBROKE = 102, "Fatal fall.";
    NOMAKE = 103, "Fatal jump.";
    CLIMBSTALK = 104, "Climbing the beanstalk.";
}

/// Where the treasures must be left for full credit.
pub const DEPOSIT: LocationId = BUILDING;

/// Pirate's hiding place for his chest.
pub const CHLOC: LocationId = MAZEEND12;

/// Where the maze message is left when the chest is placed.
pub const CHLOC2: LocationId = DEADEND13;

/// Where the two dwarves killed on activation may reappear instead.
pub const DALTLC: LocationId = NUGGET_ROOM;

/// Starting positions of the five dwarves; the pirate starts at [`CHLOC`].
pub const DWARF_STARTS: [LocationId; 5] = [KINGHALL, WESTBANK, Y2, ALIKE3, COMPLEX];

/// Entry in the location table.
pub fn location(id: LocationId) -> &'static LocationDef {
    &LOCATIONS[id.index()]
}

/// True when `id` has a forced first rule.
pub fn is_forced(id: LocationId) -> bool {
    location(id).is_forced()
}

/// Destination of the forced rule at `id`, if it has one.
pub fn forced_destination(id: LocationId) -> Option<LocationId> {
    let def = location(id);
    if def.is_forced() {
        def.travel.first().and_then(R::goto)
    } else {
        None
    }
}

const SURFACE: C = C::ABOVE.union(C::LIT);
const WOODS: C = SURFACE.union(C::FOREST).union(C::HINT_WOODS);
const MAZE: C = C::DEEP.union(C::NOBACK).union(C::HINT_MAZE);
const BRIDGE: C = C::DEEP.union(C::NOARRR);

const GRATE_LOCKED: &str = "You can't go through a locked steel grate!";
const CRAWLED_AROUND: &str = "You have crawled around in some little holes and wound up back in the main passage.";
const CAVE_IN: &str = "You have crawled around in some little holes and found your way blocked by a recent cave-in.  You are now back in the main passage.";
const SNAKE_BLOCKS: &str = "You can't get by the snake.";
const NO_FISSURE_WAY: &str = "There is no way across the fissure.";
const JUMP_BRIDGE: &str = "I respectfully suggest you go across the bridge instead of jumping.";
const DOME_UNCLIMBABLE: &str = "The dome is unclimbable.";
const NASTY_DRAGON: &str = "The dragon looks rather nasty.  You'd best not try to get by.";
const VEND_BLOCKS: &str = "The vending machine blocks the way.";
const RUSTY_DOOR: &str = "The door is extremely rusty and refuses to open.";
const NO_CROSS_WATER: &str = "I can't swim across the reservoir.  You'd best find some other way.";
const TROLL_REFUSES: &str = "The troll refuses to let you cross.";
const BRIDGE_GONE: &str = "There is no longer any way across the chasm.";
const WALL_DEAD: &str = "Don't be ridiculous!";
const MAZE_DESC: &str = "You are in a maze of twisty little passages, all alike.";
const DEADEND: &str = "Dead end.";

/// The location table, indexed by [`LocationId`].
pub static LOCATIONS: [LocationDef; NLOCATIONS] = [
    BLANK,
    LocationDef {
        id: START,
        long: "You are standing at the end of a road before a small brick building.  Around you is a forest.  A small stream flows out of the building and down a gully.",
        short: Some("You're in front of building."),
        sound: Some("The stream flows out through a pair of 1 foot diameter sewer pipes."),
        conditions: SURFACE.union(C::FLUID),
        travel: &[
            R::to(&[M::Road, M::West, M::Up], HILL),
            R::to(&[M::Enter, M::Building, M::Inside, M::East], BUILDING),
            R::to(&[M::Downstream, M::Gully, M::Stream, M::South, M::Down], VALLEY),
            R::to(&[M::Forest, M::North], FOREST1),
            R::to(&[M::Depression], GRATE_ROOM),
        ],
    },
    LocationDef {
        id: HILL,
        long: "You have walked up a hill, still in the forest.  The road slopes back down the other side of the hill.  There is a building in the distance.",
        short: Some("You're at hill in road."),
        conditions: SURFACE,
        travel: &[
            R::to(&[M::Road, M::Building, M::Forward, M::East, M::Down], START),
            R::to(&[M::Forest, M::North, M::South], FOREST1),
            R::to(&[M::West], FOREST2),
        ],
        ..BLANK
    },
    LocationDef {
        id: BUILDING,
        long: "You are inside a building, a well house for a large spring.",
        short: Some("You're inside building."),
        sound: Some("The stream flows out through a pair of 1 foot diameter sewer pipes."),
        conditions: SURFACE.union(C::FLUID),
        travel: &[
            R::to(&[M::Enter, M::Outside, M::Outdoors, M::West], START),
            R::to(&[M::Xyzzy], DEBRIS),
            R::to(&[M::Plugh], Y2),
            R::say(&[M::Downstream, M::Stream], "The stream flows out through a pair of 1 foot diameter sewer pipes.  It would be advisable to use the exit."),
        ],
    },
    LocationDef {
        id: VALLEY,
        long: "You are in a valley in the forest beside a stream tumbling along a rocky bed.",
        short: Some("You're in valley."),
        sound: Some("The stream is gurgling along its rocky bed."),
        conditions: SURFACE.union(C::FLUID),
        travel: &[
            R::to(&[M::Upstream, M::Building, M::North], START),
            R::to(&[M::Forest, M::East, M::West, M::Up], FOREST1),
            R::to(&[M::Downstream, M::South, M::Down], SLIT),
            R::to(&[M::Depression], GRATE_ROOM),
        ],
    },
    LocationDef {
        id: FOREST1,
        long: "You are in open forest, with a deep valley to one side.",
        short: Some("You're in forest."),
        conditions: WOODS,
        travel: &[
            R::to(&[M::Valley, M::East, M::Down], VALLEY),
            R::to(&[M::Forest, M::Forward, M::West, M::South], FOREST2),
        ],
        ..BLANK
    },
    LocationDef {
        id: FOREST2,
        long: "You are in open forest near both a valley and a road.",
        short: Some("You're in forest."),
        conditions: WOODS,
        travel: &[
            R::to(&[M::Road, M::North], START),
            R::to(&[M::Valley, M::East, M::West, M::Down], VALLEY),
            R::to(&[M::Forest, M::South], FOREST1),
        ],
        ..BLANK
    },
    LocationDef {
        id: SLIT,
        long: "At your feet all the water of the stream splashes into a 2-inch slit in the rock.  Downstream the streambed is bare rock.",
        short: Some("You're at slit in streambed."),
        sound: Some("The stream is gurgling along its rocky bed."),
        conditions: SURFACE.union(C::FLUID),
        travel: &[
            R::to(&[M::Building], START),
            R::to(&[M::Upstream, M::North], VALLEY),
            R::to(&[M::Forest, M::East, M::West], FOREST1),
            R::to(&[M::Downstream, M::Bed, M::South], GRATE_ROOM),
            R::say(&[M::Stream, M::Down], "You don't fit through a two-inch slit!"),
        ],
    },
    LocationDef {
        id: GRATE_ROOM,
        long: "You are in a 20-foot depression floored with bare dirt.  Set into the dirt is a strong steel grate mounted in concrete.  A dry streambed leads into the depression.",
        short: Some("You're outside grate."),
        conditions: SURFACE.union(C::HINT_CAVE),
        travel: &[
            R::to(&[M::Forest, M::East, M::West, M::South], FOREST1),
            R::to(&[M::Building], START),
            R::to(&[M::Upstream, M::Gully, M::North], SLIT),
            R::to(&[M::Enter, M::Inside, M::Down], BELOWGRATE).when(NotState(GRATE, 0)),
            R::say(&[M::Enter, M::Inside, M::Down], GRATE_LOCKED),
        ],
        ..BLANK
    },
    LocationDef {
        id: BELOWGRATE,
        long: "You are in a small chamber beneath a 3x3 steel grate to the surface.  A low crawl over cobbles leads inward to the west.",
        short: Some("You're below the grate."),
        conditions: C::LIT.union(C::HINT_CAVE),
        travel: &[
            R::to(&[M::Outside, M::Up], GRATE_ROOM).when(NotState(GRATE, 0)),
            R::say(&[M::Outside, M::Up], GRATE_LOCKED),
            R::to(&[M::Crawl, M::Cobble, M::Inside, M::West], COBBLE),
            R::to(&[M::Pit], PITTOP),
            R::to(&[M::Debris], DEBRIS),
        ],
        ..BLANK
    },
    LocationDef {
        id: COBBLE,
        long: "You are crawling over cobbles in a low passage.  There is a dim light at the east end of the passage.",
        short: Some("You're in cobble crawl."),
        conditions: C::LIT,
        travel: &[
            R::to(&[M::Outside, M::Surface, M::East], BELOWGRATE),
            R::to(&[M::Inside, M::Dark, M::West, M::Debris], DEBRIS),
            R::to(&[M::Pit], PITTOP),
        ],
        ..BLANK
    },
    LocationDef {
        id: DEBRIS,
        long: "You are in a debris room filled with stuff washed in from the surface.  A low wide passage with cobbles becomes plugged with mud and debris here, but an awkward canyon leads upward and west.  A note on the wall says, \"Magic word XYZZY\".",
        short: Some("You're in debris room."),
        travel: &[
            R::to(&[M::Depression], GRATE_ROOM).when(NotState(GRATE, 0)),
            R::to(&[M::Entrance], BELOWGRATE),
            R::to(&[M::Crawl, M::Cobble, M::Passage, M::Low, M::East], COBBLE),
            R::to(&[M::Canyon, M::Inside, M::Up, M::West], AWKWARD),
            R::to(&[M::Xyzzy], BUILDING),
            R::to(&[M::Pit], PITTOP),
        ],
        ..BLANK
    },
    LocationDef {
        id: AWKWARD,
        long: "You are in an awkward sloping east/west canyon.",
        travel: &[
            R::to(&[M::Depression], GRATE_ROOM).when(NotState(GRATE, 0)),
            R::to(&[M::Entrance], BELOWGRATE),
            R::to(&[M::Down, M::East, M::Debris], DEBRIS),
            R::to(&[M::Inside, M::Up, M::West], BIRDCHAMBER),
            R::to(&[M::Pit], PITTOP),
        ],
        ..BLANK
    },
    LocationDef {
        id: BIRDCHAMBER,
        long: "You are in a splendid chamber thirty feet high.  The walls are frozen rivers of orange stone.  An awkward canyon and a good passage exit from east and west sides of the chamber.",
        short: Some("You're in bird chamber."),
        conditions: C::HINT_BIRD,
        travel: &[
            R::to(&[M::Depression], GRATE_ROOM).when(NotState(GRATE, 0)),
            R::to(&[M::Entrance], BELOWGRATE),
            R::to(&[M::Debris], DEBRIS),
            R::to(&[M::Canyon, M::East], AWKWARD),
            R::to(&[M::Passage, M::Pit, M::West], PITTOP),
        ],
        ..BLANK
    },
    LocationDef {
        id: PITTOP,
        long: "At your feet is a small pit breathing traces of white mist.  An east passage ends here except for a small crack leading on.",
        short: Some("You're at top of small pit."),
        travel: &[
            R::to(&[M::Depression], GRATE_ROOM).when(NotState(GRATE, 0)),
            R::to(&[M::Entrance], BELOWGRATE),
            R::to(&[M::Debris], DEBRIS),
            R::to(&[M::Passage, M::East], BIRDCHAMBER),
            R::to(&[M::Down, M::Pit, M::Steps], NECKBROKE).when(Carrying(NUGGET)),
            R::to(&[M::Down, M::Pit, M::Steps], MISTHALL),
            R::say(&[M::Crack, M::West], "The crack is far too small for you to follow."),
        ],
        ..BLANK
    },
    LocationDef {
        id: MISTHALL,
        long: "You are at one end of a vast hall stretching forward out of sight to the west.  There are openings to either side.  Nearby, a wide stone staircase leads downward.  The hall is filled with wisps of white mist swaying to and fro almost as if alive.  A cold wind blows up the staircase.  There is a passage at the top of a dome behind you.",
        short: Some("You're in Hall of Mists."),
        conditions: C::DEEP.union(C::HINT_JADE),
        travel: &[
            R::to(&[M::Left, M::South], NUGGET_ROOM),
            R::to(&[M::Forward, M::Hall, M::West], EASTBANK),
            R::to(&[M::Stairs, M::Down, M::North], KINGHALL),
            R::say(&[M::Up, M::Pit, M::Steps, M::Dome, M::Passage, M::East], DOME_UNCLIMBABLE).when(Carrying(NUGGET)),
            R::to(&[M::Up, M::Pit, M::Steps, M::Dome, M::Passage, M::East], PITTOP),
            R::to(&[M::Y2], JUMBLE),
        ],
        ..BLANK
    },
    LocationDef {
        id: NUGGET_ROOM,
        long: "This is a low room with a crude note on the wall.  The note says, \"You won't get it up the steps\".",
        short: Some("You're in nugget of gold room."),
        conditions: C::DEEP,
        travel: &[R::to(&[M::Hall, M::Outside, M::North], MISTHALL)],
        ..BLANK
    },
    LocationDef {
        id: EASTBANK,
        long: "You are on the east bank of a fissure slicing clear across the hall.  The mist is quite thick here, and the fissure is too wide to jump.",
        short: Some("You're on east bank of fissure."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Hall, M::East], MISTHALL),
            R::say(&[M::Jump], JUMP_BRIDGE).when(NotState(FISSURE, 0)),
            R::to(&[M::Jump], NOMAKE),
            R::say(&[M::Forward, M::Over, M::Across, M::West, M::Cross], NO_FISSURE_WAY).when(NotState(FISSURE, 1)),
            R::to(&[M::Forward, M::Over, M::Across, M::West, M::Cross], WESTBANK).no_dwarves(),
        ],
        ..BLANK
    },
    LocationDef {
        id: WESTBANK,
        long: "You are on the west side of the fissure in the Hall of Mists.",
        conditions: C::DEEP,
        travel: &[
            R::say(&[M::Jump], JUMP_BRIDGE).when(NotState(FISSURE, 0)),
            R::to(&[M::Jump], NOMAKE),
            R::say(&[M::Forward, M::Over, M::Across, M::East, M::Cross], NO_FISSURE_WAY).when(NotState(FISSURE, 1)),
            R::to(&[M::Forward, M::Over, M::Across, M::East, M::Cross], EASTBANK).no_dwarves(),
            R::to(&[M::West], WESTEND),
        ],
        ..BLANK
    },
    LocationDef {
        id: WESTEND,
        long: "You are at the west end of the Hall of Mists.  A low wide crawl continues west and another goes north.  To the south is a little passage 6 feet off the floor.",
        short: Some("You're at west end of Hall of Mists."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South, M::Up, M::Passage, M::Climb], ALIKE1),
            R::to(&[M::East], WESTBANK),
            R::to(&[M::West, M::Crawl], LONGEAST),
        ],
        ..BLANK
    },
    LocationDef {
        id: LONGEAST,
        long: "You are at the east end of a very long hall apparently without side chambers.  To the east a low wide crawl slants up.  To the north a round two foot hole slants down.",
        short: Some("You're at east end of long hall."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Up, M::Crawl], WESTEND),
            R::to(&[M::West], LONGWEST),
            R::to(&[M::North, M::Down, M::Hole], CROSSOVER),
        ],
        ..BLANK
    },
    LocationDef {
        id: LONGWEST,
        long: "You are at the west end of a very long featureless hall.  The hall joins up with a narrow north/south passage.",
        short: Some("You're at west end of long hall."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East], LONGEAST),
            R::to(&[M::North], CROSSOVER),
            R::to(&[M::South], DIFF1).no_dwarves(),
        ],
        ..BLANK
    },
    LocationDef {
        id: CROSSOVER,
        long: "You are at a crossover of a high N/S passage and a low E/W one.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::West], LONGEAST),
            R::to(&[M::North], DEADEND1),
            R::to(&[M::East], WESTSIDE),
            R::to(&[M::South], LONGWEST),
        ],
        ..BLANK
    },
    LocationDef {
        id: DEADEND1,
        long: DEADEND,
        conditions: C::DEEP,
        travel: &[R::to(&[M::South, M::Outside], CROSSOVER)],
        ..BLANK
    },
    LocationDef {
        id: KINGHALL,
        long: "You are in the Hall of the Mountain King, with passages off in all directions.",
        short: Some("You're in Hall of Mt King."),
        conditions: C::DEEP.union(C::HINT_SNAKE),
        travel: &[
            R::to(&[M::Stairs, M::Up, M::East], MISTHALL),
            R::say(&[M::North, M::Right], SNAKE_BLOCKS).when(With(SNAKE)),
            R::to(&[M::North, M::Right], LOWN_S),
            R::say(&[M::South, M::Left], SNAKE_BLOCKS).when(With(SNAKE)),
            R::to(&[M::South, M::Left], SOUTHSIDE),
            R::say(&[M::West, M::Forward], SNAKE_BLOCKS).when(With(SNAKE)),
            R::to(&[M::West, M::Forward], WESTSIDE),
            R::to(&[M::Sw], SECRET_EW).when(Pct(35)),
            R::say(&[M::Sw], SNAKE_BLOCKS).when(With(SNAKE)),
            R::to(&[M::Sw], SECRET_EW),
        ],
        ..BLANK
    },
    LocationDef {
        id: LOWN_S,
        long: "You are in a low N/S passage at a hole in the floor.  The hole goes down to an E/W passage.",
        short: Some("You're in N/S passage."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Hall, M::Outside, M::South], KINGHALL),
            R::to(&[M::North, M::Y2], Y2),
            R::to(&[M::Down, M::Hole], DIRTY),
        ],
        ..BLANK
    },
    LocationDef {
        id: SOUTHSIDE,
        long: "You are in the south side chamber.",
        conditions: C::DEEP,
        travel: &[R::to(&[M::Hall, M::Outside, M::North], KINGHALL)],
        ..BLANK
    },
    LocationDef {
        id: WESTSIDE,
        long: "You are in the west side chamber of the Hall of the Mountain King.  A passage continues west and up here.",
        short: Some("You're in west side chamber."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Hall, M::Outside, M::East], KINGHALL),
            R::to(&[M::West, M::Up], CROSSOVER),
        ],
        ..BLANK
    },
    LocationDef {
        id: Y2,
        long: "You are in a large room, with a passage to the south, a passage to the west, and a wall of broken rock to the east.  There is a large \"Y2\" on a rock in the room's center.",
        short: Some("You're at \"Y2\"."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Plugh], BUILDING),
            R::to(&[M::South], LOWN_S),
            R::to(&[M::East, M::Wall, M::Broken], JUMBLE),
            R::to(&[M::West], WINDOW1),
            R::special(&[M::Plover], 2).when(Carrying(EMERALD)),
            R::to(&[M::Plover], PLOVER).no_dwarves(),
        ],
        ..BLANK
    },
    LocationDef {
        id: JUMBLE,
        long: "You are in a jumble of rock, with cracks everywhere.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Down, M::Y2], Y2),
            R::to(&[M::Up], MISTHALL),
        ],
        ..BLANK
    },
    LocationDef {
        id: WINDOW1,
        long: "You're at a low window overlooking a huge pit, which extends up out of sight.  A floor is indistinctly visible over 50 feet below.  Traces of white mist cover the floor of the pit, becoming thicker to the right.  Marks in the dust around the window would seem to indicate that someone has been here recently.  Directly across the pit from you and 25 feet away there is a similar window looking into a lighted room.  A shadowy figure can be seen there peering back at you.",
        short: Some("You're at window on pit."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Y2], Y2),
            R::to(&[M::Jump], NECKBROKE),
        ],
        ..BLANK
    },
    LocationDef {
        id: PLOVER,
        long: "You're in a small chamber lit by an eerie green light.  An extremely narrow tunnel exits to the west.  A dark corridor leads northeast.",
        short: Some("You're in Plover Room."),
        conditions: C::DEEP.union(C::LIT),
        travel: &[
            R::special(&[M::West, M::Passage, M::Outside], 1),
            R::to(&[M::West, M::Passage, M::Outside], ALCOVE).no_dwarves(),
            R::special(&[M::Plugh], 2).when(Carrying(EMERALD)),
            R::to(&[M::Plugh], Y2).no_dwarves(),
            R::to(&[M::Ne, M::Dark], DARKROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALCOVE,
        long: "You are in an alcove.  A small northwest path seems to widen after a short distance.  An extremely tight tunnel leads east.  It looks like a very tight squeeze.  An eerie light can be seen at the other end.",
        short: Some("You're in alcove."),
        conditions: C::DEEP.union(C::HINT_DARK),
        travel: &[
            R::to(&[M::Nw], MISTY),
            R::special(&[M::East, M::Passage], 1),
            R::to(&[M::East, M::Passage], PLOVER).no_dwarves(),
        ],
        ..BLANK
    },
    LocationDef {
        id: DARKROOM,
        long: "You're in the dark-room.  A corridor leading south is the only exit.",
        short: Some("You're in dark-room."),
        conditions: C::DEEP.union(C::HINT_DARK),
        travel: &[R::to(&[M::South, M::Plover, M::Outside], PLOVER)],
        ..BLANK
    },
    LocationDef {
        id: ALIKE1,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::Up], WESTEND),
            R::to(&[M::North], ALIKE1),
            R::to(&[M::East], ALIKE2),
            R::to(&[M::South], ALIKE4),
            R::to(&[M::West], ALIKE5),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE2,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::West], ALIKE1),
            R::to(&[M::South], ALIKE3),
            R::to(&[M::East], ALIKE4),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE3,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::East], ALIKE2),
            R::to(&[M::Down], DEADEND_A),
            R::to(&[M::South], ALIKE6),
            R::to(&[M::North], DEADEND_B),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE4,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::West], ALIKE1),
            R::to(&[M::North], ALIKE2),
            R::to(&[M::East], DEADEND_A),
            R::to(&[M::South], ALIKE5),
            R::to(&[M::Up, M::Down], ALIKE6),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE5,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::North], ALIKE4),
            R::to(&[M::East], ALIKE6),
            R::to(&[M::West], ALIKE7),
            R::to(&[M::Up], ALIKE1),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE6,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::East], ALIKE3),
            R::to(&[M::West], ALIKE5),
            R::to(&[M::Down], ALIKE4),
            R::to(&[M::South], ALIKE7),
        ],
        ..BLANK
    },
    LocationDef {
        id: ALIKE7,
        long: MAZE_DESC,
        conditions: MAZE,
        travel: &[
            R::to(&[M::North], ALIKE6),
            R::to(&[M::East], ALIKE5),
            R::to(&[M::South], MAZEEND12),
            R::to(&[M::Down], BRINK),
        ],
        ..BLANK
    },
    LocationDef {
        id: DEADEND_A,
        long: DEADEND,
        conditions: MAZE,
        travel: &[R::to(&[M::West, M::Up, M::Outside], ALIKE4)],
        ..BLANK
    },
    LocationDef {
        id: DEADEND_B,
        long: DEADEND,
        conditions: MAZE,
        travel: &[R::to(&[M::South, M::Outside], ALIKE3)],
        ..BLANK
    },
    LocationDef {
        id: BRINK,
        long: "You are on the brink of a thirty foot pit with a massive orange column down one wall.  You could climb down here but you could not get back up.  The maze continues at this level.",
        short: Some("You're at brink of pit."),
        conditions: MAZE,
        travel: &[
            R::to(&[M::Down, M::Climb], BIRDCHAMBER),
            R::to(&[M::Up, M::North], ALIKE7),
            R::to(&[M::East], ALIKE6),
        ],
        ..BLANK
    },
    LocationDef {
        id: MAZEEND12,
        long: "This is the pirate's dead end.",
        short: Some(DEADEND),
        conditions: MAZE,
        travel: &[R::to(&[M::North, M::Outside], ALIKE7)],
        ..BLANK
    },
    LocationDef {
        id: DIFF1,
        long: "You are in a maze of twisty little passages, all different.",
        conditions: C::DEEP.union(C::NOBACK),
        travel: &[
            R::to(&[M::North], LONGWEST),
            R::to(&[M::South], DIFF2),
            R::to(&[M::East], DIFF3),
            R::to(&[M::West], DIFF4),
        ],
        ..BLANK
    },
    LocationDef {
        id: DIFF2,
        long: "You are in a little maze of twisting passages, all different.",
        conditions: C::DEEP.union(C::NOBACK),
        travel: &[
            R::to(&[M::North], DIFF1),
            R::to(&[M::East], DIFF4),
            R::to(&[M::West], DIFF3),
            R::to(&[M::South], DEADEND13),
        ],
        ..BLANK
    },
    LocationDef {
        id: DIFF3,
        long: "You are in a twisting maze of little passages, all different.",
        conditions: C::DEEP.union(C::NOBACK),
        travel: &[
            R::to(&[M::West], DIFF1),
            R::to(&[M::East], DIFF2),
            R::to(&[M::South], DIFF4),
        ],
        ..BLANK
    },
    LocationDef {
        id: DIFF4,
        long: "You are in a twisting little maze of passages, all different.",
        conditions: C::DEEP.union(C::NOBACK),
        travel: &[
            R::to(&[M::North], DIFF3),
            R::to(&[M::West], DIFF2),
            R::to(&[M::East], DIFF1),
        ],
        ..BLANK
    },
    LocationDef {
        id: DEADEND13,
        long: DEADEND,
        conditions: C::DEEP.union(C::NOBACK),
        travel: &[
            R::to(&[M::North, M::Outside], DIFF2),
            R::to(&[M::South], MIRRORCANYON).when(NotState(VEND, 0)).no_dwarves(),
            R::say(&[M::South], VEND_BLOCKS),
        ],
        ..BLANK
    },
    LocationDef {
        id: DIRTY,
        long: "You are in a dirty broken passage.  To the east is a crawl.  To the west is a large passage.  Above you is a hole to another passage.",
        short: Some("You're in dirty passage."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Crawl], DUSTY),
            R::to(&[M::Up, M::Hole], LOWN_S),
            R::to(&[M::West], BEDQUILT),
        ],
        ..BLANK
    },
    LocationDef {
        id: DUSTY,
        long: "You are in a large room full of dusty rocks.  There is a big hole in the floor.  There are cracks everywhere, and a passage leading east.",
        short: Some("You're in dusty rock room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Passage], DIRTY),
            R::to(&[M::Down, M::Hole], COMPLEX),
        ],
        ..BLANK
    },
    LocationDef {
        id: COMPLEX,
        long: "You are at a complex junction.  A low hands and knees passage from the north joins a higher crawl from the east to make a walking passage going west.  There is also a large room above.  The air is damp here.",
        short: Some("You're at complex junction."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up, M::Climb], DUSTY),
            R::to(&[M::West, M::Bedquilt], BEDQUILT),
            R::to(&[M::North, M::Shell], SHELLROOM),
            R::to(&[M::East], ANTEROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: BEDQUILT,
        long: "You are in Bedquilt, a long east/west passage with holes everywhere.  To explore at random select north, south, up, or down.",
        short: Some("You're in Bedquilt."),
        conditions: C::DEEP.union(C::HINT_JADE),
        travel: &[
            R::to(&[M::East], COMPLEX),
            R::to(&[M::West], SWISS),
            R::say(&[M::South], CRAWLED_AROUND).when(Pct(65)),
            R::to(&[M::South], SLAB),
            R::say(&[M::Up], CRAWLED_AROUND).when(Pct(50)),
            R::to(&[M::Up], DUSTY),
            R::say(&[M::North], CRAWLED_AROUND).when(Pct(60)),
            R::to(&[M::North], LOWROOM),
            R::say(&[M::Down], CRAWLED_AROUND).when(Pct(50)),
            R::to(&[M::Down], ANTEROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: SWISS,
        long: "You are in a room whose walls resemble Swiss cheese.  Obvious passages go west, east, NE, and NW.  Part of the room is occupied by a large bedrock block.",
        short: Some("You're in Swiss cheese room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Ne], BEDQUILT),
            R::to(&[M::West], EASTEND_TWOPIT),
            R::to(&[M::East], SOFTROOM),
            R::to(&[M::Oriental], ORIENTAL),
            R::say(&[M::Nw], CRAWLED_AROUND).when(Pct(50)),
            R::to(&[M::Nw], ORIENTAL),
            R::say(&[M::South], CRAWLED_AROUND).when(Pct(80)),
            R::to(&[M::South], BEDQUILT),
        ],
        ..BLANK
    },
    LocationDef {
        id: SLAB,
        long: "You are in a large low circular chamber whose floor is an immense slab fallen from the ceiling (Slab Room).  East and west there once were large passages, but they are now filled with boulders.  Low small passages go north and south, and the south one quickly bends west around the boulders.",
        short: Some("You're in Slab Room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South], WESTEND_TWOPIT),
            R::to(&[M::Up, M::Climb], SECRET_NS),
            R::to(&[M::North], BEDQUILT),
        ],
        ..BLANK
    },
    LocationDef {
        id: EASTEND_TWOPIT,
        long: "You are at the east end of the Twopit Room.  The floor here is littered with thin rock slabs, which make it easy to descend the pits.  There is a path here bypassing the pits to connect passages from east and west.  There are holes all over, but the only big one is on the wall directly over the west pit where you can't get to it.",
        short: Some("You're at east end of Twopit Room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East], SWISS),
            R::to(&[M::West, M::Across], WESTEND_TWOPIT),
            R::to(&[M::Down, M::Pit], EASTPIT),
        ],
        ..BLANK
    },
    LocationDef {
        id: WESTEND_TWOPIT,
        long: "You are at the west end of the Twopit Room.  There is a large hole in the wall above the pit at this end of the room.",
        short: Some("You're at west end of Twopit Room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Across], EASTEND_TWOPIT),
            R::to(&[M::West, M::Slab], SLAB),
            R::to(&[M::Down, M::Pit], WESTPIT),
            R::say(&[M::Up, M::Hole], "It is too far up for you to reach."),
        ],
        ..BLANK
    },
    LocationDef {
        id: EASTPIT,
        long: "You are at the bottom of the eastern pit in the Twopit Room.  There is a small pool of oil in one corner of the pit.",
        short: Some("You're in east pit."),
        conditions: C::DEEP.union(C::FLUID).union(C::OILY),
        travel: &[R::to(&[M::Up, M::Outside], EASTEND_TWOPIT)],
        ..BLANK
    },
    LocationDef {
        id: WESTPIT,
        long: "You are at the bottom of the western pit in the Twopit Room.  There is a large hole in the wall about 25 feet above you.",
        short: Some("You're in west pit."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up, M::Outside], WESTEND_TWOPIT),
            R::say(&[M::Climb], "There is nothing here to climb.  Use \"up\" or \"out\" to leave the pit.").when(NotState(PLANT, 2)),
            R::to(&[M::Climb], CLIMBSTALK),
        ],
        ..BLANK
    },
    LocationDef {
        id: NARROW,
        long: "You are in a long, narrow corridor stretching out of sight to the west.  At the eastern end is a hole through which you can see a profusion of leaves.",
        short: Some("You're in narrow corridor."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Down, M::Climb, M::East], WESTPIT),
            R::to(&[M::Jump], NECKBROKE),
            R::to(&[M::West, M::Giant], GIANTROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: GIANTROOM,
        long: "You are in the Giant Room.  The ceiling here is too high up for your lamp to show it.  Cavernous passages lead east, north, and south.  On the west wall is scrawled the inscription, \"FEE FIE FOE FOO\" [sic].",
        short: Some("You're in Giant Room."),
        conditions: C::DEEP.union(C::HINT_JADE),
        travel: &[
            R::to(&[M::South], NARROW),
            R::say(&[M::East], "The passage here is blocked by a recent cave-in."),
            R::to(&[M::North], IMMENSE),
        ],
        ..BLANK
    },
    LocationDef {
        id: IMMENSE,
        long: "You are at one end of an immense north/south passage.",
        short: Some("You're in immense N/S passage."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South, M::Giant, M::Passage], GIANTROOM),
            R::to(&[M::North, M::Enter, M::Cavern], CAVERN).when(NotState(DOOR, 0)).no_dwarves(),
            R::say(&[M::North, M::Enter, M::Cavern], RUSTY_DOOR),
        ],
        ..BLANK
    },
    LocationDef {
        id: CAVERN,
        long: "You are in a magnificent cavern with a rushing stream, which cascades over a sparkling waterfall into a roaring whirlpool which disappears through a hole in the floor.  Passages exit to the south and west.",
        short: Some("You're in cavern with waterfall."),
        sound: Some("The roar of the waterfall is so loud that it nearly drowns out all other sounds."),
        conditions: C::DEEP.union(C::FLUID),
        travel: &[
            R::to(&[M::South, M::Outside], IMMENSE).when(NotState(DOOR, 0)).no_dwarves(),
            R::say(&[M::South, M::Outside], RUSTY_DOOR),
            R::to(&[M::West], STEEP),
        ],
    },
    LocationDef {
        id: STEEP,
        long: "You are at the top of a steep incline above a large room.  You could climb down here, but you would not be able to climb up.  There is a passage leading back to the north.",
        short: Some("You're at steep incline above large room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::North, M::Cavern, M::Passage], CAVERN),
            R::to(&[M::Down, M::Climb], LOWROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: SOFTROOM,
        long: "You are in the Soft Room.  The walls are covered with heavy curtains, the floor with a thick pile carpet.  Moss covers the ceiling.",
        short: Some("You're in Soft Room."),
        sound: Some("It is very quiet here; the curtains absorb every sound."),
        conditions: C::DEEP,
        travel: &[R::to(&[M::West, M::Outside], SWISS)],
    },
    LocationDef {
        id: ORIENTAL,
        long: "This is the Oriental Room.  Ancient oriental cave drawings cover the walls.  A gently sloping passage leads upward to the north, another passage leads SE, and a hands and knees crawl leads west.",
        short: Some("You're in Oriental Room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Se], SWISS),
            R::to(&[M::West, M::Crawl], LOWROOM),
            R::to(&[M::Up, M::North, M::Cavern], MISTY),
        ],
        ..BLANK
    },
    LocationDef {
        id: MISTY,
        long: "You are following a wide path around the outer edge of a large cavern.  Far below, through a heavy white mist, strange splashing noises can be heard.  The mist rises up through a fissure in the ceiling.  The path exits to the south and west.",
        short: Some("You're in misty cavern."),
        sound: Some("Strange splashing noises rise up through the mist from far below."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South, M::Oriental], ORIENTAL),
            R::to(&[M::West], ALCOVE),
        ],
    },
    LocationDef {
        id: LOWROOM,
        long: "You are in a large low room.  Crawls lead north, SE, and SW.",
        short: Some("You're in large low room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Bedquilt], BEDQUILT),
            R::to(&[M::Sw], SLOPING),
            R::to(&[M::North], OGRECRAWL),
            R::to(&[M::Se, M::Oriental], ORIENTAL),
        ],
        ..BLANK
    },
    LocationDef {
        id: OGRECRAWL,
        long: "You are in a low hands and knees crawl which leads north from the large low room.  The crawl opens into a wider room a little further on.",
        short: Some("You're in crawl near ogre's room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South, M::Crawl, M::Outside], LOWROOM),
            R::to(&[M::North], OGREROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: OGREROOM,
        long: "You are in a high, narrow room with a low exit to the south and a broad opening leading north.",
        short: Some("You're in ogre's room."),
        conditions: C::DEEP.union(C::HINT_OGRE),
        travel: &[
            R::to(&[M::South, M::Crawl], OGRECRAWL),
            R::say(&[M::North], "The ogre is in the way.").when(With(OGRE)),
            R::to(&[M::North], STOREROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: STOREROOM,
        long: "You are in the ogre's storeroom.  The only exit is to the south.",
        short: Some("You're in storeroom."),
        conditions: C::DEEP,
        travel: &[R::to(&[M::South, M::Outside], OGREROOM)],
        ..BLANK
    },
    LocationDef {
        id: SHELLROOM,
        long: "You're in a large room carved out of sedimentary rock.  The floor and walls are littered with bits of shells imbedded in the stone.  A shallow passage proceeds downward, and a somewhat steeper one leads up.  A low hands and knees passage enters from the south.",
        short: Some("You're in Shell Room."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up, M::Hall], ARCHED),
            R::to(&[M::Down], RAGGED),
            R::say(&[M::South], "You can't fit this five-foot clam through that little passage!").when(Carrying(CLAM)),
            R::say(&[M::South], "You can't fit this five-foot oyster through that little passage!").when(Carrying(OYSTER)),
            R::to(&[M::South], COMPLEX),
        ],
        ..BLANK
    },
    LocationDef {
        id: ARCHED,
        long: "You are in an arched hall.  A coral passage once continued up and east from here, but is now blocked by debris.  The air smells of sea water.",
        short: Some("You're in arched hall."),
        conditions: C::DEEP,
        travel: &[R::to(&[M::Down, M::Shell, M::Outside], SHELLROOM)],
        ..BLANK
    },
    LocationDef {
        id: RAGGED,
        long: "You are in a long sloping corridor with ragged sharp walls.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up, M::Shell], SHELLROOM),
            R::to(&[M::Down], CULDESAC),
        ],
        ..BLANK
    },
    LocationDef {
        id: CULDESAC,
        long: "You are in a cul-de-sac about eight feet across.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up, M::Outside], RAGGED),
            R::to(&[M::Shell], SHELLROOM),
        ],
        ..BLANK
    },
    LocationDef {
        id: SECRET_EW,
        long: "You are in a secret canyon which here runs E/W.  It crosses over a very tight canyon 15 feet below.  If you go down you may not be able to get back up.",
        short: Some("You're in secret E/W canyon above tight canyon."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East], KINGHALL),
            R::to(&[M::West], SECRET5).when(NotState(DRAGON, 0)),
            R::to(&[M::West], SECRET4),
            R::to(&[M::Down], CLIFF),
        ],
        ..BLANK
    },
    LocationDef {
        id: SECRET_NS,
        long: "You are in a secret N/S canyon above a large room.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Down], SLAB),
            R::to(&[M::South], SECRET5).when(NotState(DRAGON, 0)),
            R::to(&[M::South], SECRET6),
            R::to(&[M::North], MIRRORCANYON),
        ],
        ..BLANK
    },
    LocationDef {
        id: SECRET4,
        long: "You are in a secret canyon which exits to the north and east.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::East, M::Outside], SECRET_EW),
            R::say(&[M::North, M::Forward], NASTY_DRAGON),
        ],
        ..BLANK
    },
    LocationDef {
        id: SECRET5,
        long: "You are in a secret canyon which exits to the north and east.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::North], SECRET_NS),
            R::to(&[M::East], SECRET_EW),
        ],
        ..BLANK
    },
    LocationDef {
        id: SECRET6,
        long: "You are in a secret canyon which exits to the north and east.",
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::North, M::Outside], SECRET_NS),
            R::say(&[M::East, M::Forward], NASTY_DRAGON),
        ],
        ..BLANK
    },
    LocationDef {
        id: CLIFF,
        long: "You are on a small ledge on one face of a sheer cliff.  There are no paths away from the ledge.  Across the chasm is a small clearing surrounded by forbidding walls.  A tight canyon climbs back up to the north.",
        short: Some("You're at cliff."),
        conditions: C::DEEP.union(C::HINT_URN),
        travel: &[
            R::to(&[M::North, M::Up], SECRET_EW),
            R::to(&[M::Jump], NOMAKE),
        ],
        ..BLANK
    },
    LocationDef {
        id: LEDGE,
        long: "You are on another ledge.  Across the chasm the cliff you came from rises against the far wall.  There is no path down from here.",
        short: Some("You're on ledge."),
        conditions: C::DEEP,
        travel: &[R::to(&[M::Jump], NECKBROKE)],
        ..BLANK
    },
    LocationDef {
        id: MIRRORCANYON,
        long: "You are in a north/south canyon about 25 feet across.  The floor is covered by white mist seeping in from the north.  The walls extend upward for well over 100 feet.  Suspended from some unseen point far above you, an enormous two-sided mirror is hanging parallel to and midway between the canyon walls.  (The mirror is obviously provided for the use of the dwarves, who as you know, are extremely vain.)  A small window can be seen in either wall, some fifty feet up.",
        short: Some("You're in mirror canyon."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::South], SECRET_NS),
            R::to(&[M::North, M::Reservoir], RESERVOIR),
            R::to(&[M::West], DEADEND13).when(NotState(VEND, 0)).no_dwarves(),
            R::say(&[M::West], VEND_BLOCKS),
        ],
        ..BLANK
    },
    LocationDef {
        id: RESERVOIR,
        long: "You are at the edge of a large underground reservoir.  An opaque cloud of white mist fills the room and rises rapidly upward.  The lake is fed by a stream, which tumbles out of a hole in the wall about 10 feet overhead and splashes noisily into the water somewhere within the mist.  The indistinct shape of the opposite shore can be dimly seen to the north.  The only passage goes back toward the south.",
        short: Some("You're at reservoir."),
        sound: Some("The waters are crashing loudly against the shore."),
        conditions: C::DEEP.union(C::FLUID),
        travel: &[
            R::to(&[M::South, M::Outside], MIRRORCANYON),
            R::to(&[M::North, M::Across, M::Cross], RESBOTTOM).when(NotState(RESER, 0)).no_dwarves(),
            R::say(&[M::North, M::Across, M::Cross], NO_CROSS_WATER),
        ],
    },
    LocationDef {
        id: RESBOTTOM,
        long: "You are walking across the bottom of the reservoir.  Walls of water rear up on either side.  The roar of the water cascading past is nearly deafening, and the mist is so thick you can barely see.",
        short: Some("You're at bottom of reservoir."),
        sound: Some("The roar of the water cascading past is nearly deafening."),
        conditions: C::DEEP.union(C::FLUID),
        travel: &[
            R::to(&[M::North], RESNORTH),
            R::to(&[M::South], RESERVOIR),
        ],
    },
    LocationDef {
        id: RESNORTH,
        long: "You are at the northern edge of the reservoir.  A northwest passage leads sharply up from here.",
        short: Some("You're north of reservoir."),
        sound: Some("The waters are crashing loudly against the shore."),
        conditions: C::DEEP.union(C::FLUID),
        travel: &[
            R::to(&[M::South, M::Across, M::Cross], RESBOTTOM).when(NotState(RESER, 0)).no_dwarves(),
            R::say(&[M::South, M::Across, M::Cross], NO_CROSS_WATER),
            R::say(&[M::Nw, M::Up], CAVE_IN),
        ],
    },
    LocationDef {
        id: SLOPING,
        long: "You are in a long winding corridor sloping out of sight in both directions.",
        short: Some("You're in sloping corridor."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Down], LOWROOM),
            R::to(&[M::Up], SWCHASM),
        ],
        ..BLANK
    },
    LocationDef {
        id: SWCHASM,
        long: "You are on one side of a large, deep chasm.  A heavy white mist rising up from below obscures all view of the far side.  A SW path leads away from the chasm into a winding corridor.",
        short: Some("You're on SW side of chasm."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Sw], SLOPING),
            R::say(&[M::Over, M::Across, M::Cross, M::Ne], TROLL_REFUSES).when(With(TROLL)),
            R::say(&[M::Over, M::Across, M::Cross, M::Ne], BRIDGE_GONE).when(NotState(CHASM, 0)),
            R::special(&[M::Over, M::Across, M::Cross, M::Ne], 3),
            R::to(&[M::Jump], NOMAKE).when(NotState(CHASM, 0)),
            R::say(&[M::Jump], JUMP_BRIDGE),
        ],
        ..BLANK
    },
    LocationDef {
        id: NECHASM,
        long: "You are on the far side of the chasm.  A NE path leads away from the chasm on this side.",
        short: Some("You're on NE side of chasm."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::Ne], CORRIDOR),
            R::to(&[M::Fork], FORK),
            R::say(&[M::Over, M::Across, M::Cross, M::Sw], TROLL_REFUSES).when(With(TROLL)),
            R::say(&[M::Over, M::Across, M::Cross, M::Sw], BRIDGE_GONE).when(NotState(CHASM, 0)),
            R::special(&[M::Over, M::Across, M::Cross, M::Sw], 3),
            R::to(&[M::Jump], NOMAKE).when(NotState(CHASM, 0)),
            R::say(&[M::Jump], JUMP_BRIDGE),
        ],
        ..BLANK
    },
    LocationDef {
        id: CORRIDOR,
        long: "You're in a long east/west corridor.  A faint rumbling noise can be heard in the distance.",
        short: Some("You're in corridor."),
        sound: Some("A faint rumbling noise can be heard in the distance."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::West], NECHASM),
            R::to(&[M::East, M::Fork], FORK),
        ],
    },
    LocationDef {
        id: FORK,
        long: "The path forks here.  The left fork leads northeast.  A dull rumbling seems to get louder in that direction.  The right fork leads southeast down a gentle slope.  The main corridor enters from the west.",
        short: Some("You're at fork in path."),
        sound: Some("A dull rumbling comes from the northeast."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::West], CORRIDOR),
            R::to(&[M::Ne, M::Left], WARMWALLS),
            R::to(&[M::Se, M::Right, M::Down], LIMESTONE),
        ],
    },
    LocationDef {
        id: WARMWALLS,
        long: "The walls are quite warm here.  From the north can be heard a steady roar, so loud that the entire cave seems to be trembling.  Another passage leads south, and a low crawl goes east.",
        short: Some("You're at junction with warm walls."),
        sound: Some("A steady roar makes the entire cave seem to tremble."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::South, M::Fork], FORK),
            R::to(&[M::North, M::View], BREATHTAKING),
            R::to(&[M::East, M::Crawl], BOULDERS2),
        ],
    },
    LocationDef {
        id: BREATHTAKING,
        long: "You are on the edge of a breath-taking view.  Far below you is an active volcano, from which great gouts of molten lava come surging out, cascading back down into the depths.  The glowing rock fills the farthest reaches of the cavern with a blood-red glare, giving everything an eerie, macabre appearance.  The air is filled with flickering sparks of ash and a heavy smell of brimstone.  The walls are hot to the touch, and the thundering of the volcano drowns out all other sounds.",
        short: Some("You're at breath-taking view."),
        sound: Some("The thundering of the volcano drowns out all other sounds."),
        conditions: BRIDGE.union(C::LIT),
        travel: &[
            R::to(&[M::South, M::Passage, M::Outside], WARMWALLS),
            R::to(&[M::Fork], FORK),
            R::say(&[M::Down, M::Jump], WALL_DEAD),
        ],
    },
    LocationDef {
        id: BOULDERS2,
        long: "You are in a small chamber filled with large boulders.  The walls are very warm, causing the air in the room to be almost stifling from the heat.  The only exit is a crawl heading west, through which is coming a low rumbling.",
        short: Some("You're in Chamber of Boulders."),
        sound: Some("A low rumbling comes through the crawl."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::West, M::Outside, M::Crawl], WARMWALLS),
            R::to(&[M::Fork], FORK),
        ],
    },
    LocationDef {
        id: LIMESTONE,
        long: "You are walking along a gently sloping north/south passage lined with oddly shaped limestone formations.",
        short: Some("You're in limestone passage."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::North, M::Up, M::Fork], FORK),
            R::to(&[M::South, M::Down, M::Barren], FBARREN),
        ],
        ..BLANK
    },
    LocationDef {
        id: FBARREN,
        long: "You are standing at the entrance to a large, barren room.  A notice above the entrance reads:  \"Caution!  Bear in room!\"",
        short: Some("You're in front of Barren Room."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::West, M::Up], LIMESTONE),
            R::to(&[M::Fork], FORK),
            R::to(&[M::East, M::Inside, M::Barren, M::Enter], BARREN),
        ],
        ..BLANK
    },
    LocationDef {
        id: BARREN,
        long: "You are inside a barren room.  The center of the room is completely empty except for some dust.  Marks in the dust lead away toward the far end of the room.  The only exit is the way you came in.",
        short: Some("You're in Barren Room."),
        conditions: BRIDGE,
        travel: &[
            R::to(&[M::West, M::Outside], FBARREN),
            R::to(&[M::Fork], FORK),
        ],
        ..BLANK
    },
    LocationDef {
        id: WITTSEND,
        long: "You are at Witt's End.  Passages lead off in *ALL* directions.",
        short: Some("You're at Witt's End."),
        conditions: C::DEEP.union(C::NOBACK).union(C::HINT_WITT),
        travel: &[
            R::say(&[M::East, M::North, M::South, M::Ne, M::Se, M::Sw, M::Nw, M::Up, M::Down], CAVE_IN).when(Pct(95)),
            R::to(&[M::East, M::North, M::South, M::Ne, M::Se, M::Sw, M::Nw, M::Up, M::Down], ANTEROOM),
            R::say(&[M::West], CAVE_IN),
        ],
        ..BLANK
    },
    LocationDef {
        id: ANTEROOM,
        long: "You are in an anteroom leading to a large passage to the east.  Small passages go west and up.  The remnants of recent digging are evident.  A sign in midair here says \"Cave under construction beyond this point.  Proceed at own risk.  [Witt Construction Company]\"",
        short: Some("You're in anteroom."),
        conditions: C::DEEP,
        travel: &[
            R::to(&[M::Up], COMPLEX),
            R::to(&[M::West], BEDQUILT),
            R::to(&[M::East], WITTSEND),
        ],
        ..BLANK
    },
    LocationDef {
        id: NE,
        long: "You're at the northeast end of an immense room, even larger than the Giant Room.  It appears to be a repository for the \"Adventure\" program.  Massive torches far overhead bathe the room with smoky yellow light.  Scattered about you can be seen a pile of bottles (all of them empty), a nursery of young beanstalks murmuring quietly, a bed of oysters, a bundle of black rods with rusty stars on their ends, and a collection of brass lanterns.  Off to one side a great many dwarves are sleeping on the floor, snoring loudly.  A notice nearby reads: \"Do not disturb the dwarves!\"  An immense mirror is hanging against one wall, and stretches to the other end of the room, where various other sundry objects can be glimpsed dimly in the distance.",
        short: Some("You're at NE end."),
        sound: Some("The dwarves are snoring loudly."),
        conditions: C::DEEP.union(C::LIT),
        travel: &[R::to(&[M::Sw], SW)],
    },
    LocationDef {
        id: SW,
        long: "You're at the southwest end of the repository.  To one side is a pit full of fierce green snakes.  On the other side is a row of small wicker cages, each of which contains a little sulking bird.  In one corner is a bundle of black rods with rusty marks on their ends.  A large number of velvet pillows are scattered about on the floor.  A vast mirror stretches off to the northeast.  At your feet is a large steel grate, next to which is a sign that reads, \"Treasure Vault.  Keys in main office.\"",
        short: Some("You're at SW end."),
        sound: Some("The snakes are hissing."),
        conditions: C::DEEP.union(C::LIT),
        travel: &[
            R::to(&[M::Ne], NE),
            R::say(&[M::Down], GRATE_LOCKED),
        ],
    },
    LocationDef {
        id: NECKBROKE,
        long: "You are at the bottom of the pit with a broken neck.",
        travel: &[R::forced(NOWHERE)],
        ..BLANK
    },
    LocationDef {
        id: NOMAKE,
        long: "You didn't make it.",
        travel: &[R::forced(NOWHERE)],
        ..BLANK
    },
    LocationDef {
        id: CLIMBSTALK,
        long: "You clamber up the plant and scurry through the hole at the top.",
        travel: &[R::forced(NARROW)],
        ..BLANK
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::TravelDest;

    #[test]
    fn ids_match_table_positions() {
        for (i, def) in LOCATIONS.iter().enumerate() {
            assert_eq!(def.id.index(), i, "location {i}");
        }
    }

    #[test]
    fn every_real_location_has_text_and_exits() {
        for def in LOCATIONS.iter().skip(1) {
            assert!(!def.long.is_empty(), "{}", def.id);
            assert!(!def.travel.is_empty(), "{}", def.id);
        }
    }

    #[test]
    fn travel_targets_and_specials_are_valid() {
        for def in LOCATIONS.iter().skip(1) {
            for rule in def.travel {
                match rule.dest {
                    TravelDest::Goto(loc) => assert!(loc.index() < NLOCATIONS),
                    TravelDest::Special(n) => assert!((1..=3).contains(&n)),
                    TravelDest::Speak(msg) => assert!(!msg.is_empty()),
                }
            }
        }
    }

    #[test]
    fn forced_rooms() {
        assert!(is_forced(NECKBROKE));
        assert_eq!(forced_destination(CLIMBSTALK), Some(NARROW));
        assert_eq!(forced_destination(NOMAKE), Some(NOWHERE));
        assert!(!is_forced(START));
        assert_eq!(forced_destination(START), None);
    }

    #[test]
    fn only_forced_rules_have_empty_motion_lists() {
        for def in LOCATIONS.iter().skip(1) {
            for (i, rule) in def.travel.iter().enumerate() {
                if rule.motions.is_empty() {
                    assert_eq!(i, 0, "{}", def.id);
                    assert!(rule.is_forced(), "{}", def.id);
                }
            }
        }
    }

    #[test]
    fn surface_and_deep_do_not_overlap() {
        for def in LOCATIONS.iter() {
            assert!(
                !(def.conditions.contains(C::ABOVE) && def.conditions.contains(C::DEEP)),
                "{}",
                def.id
            );
        }
        assert!(location(MISTHALL).conditions.contains(C::DEEP));
        assert!(location(START).conditions.contains(C::ABOVE));
    }
}
