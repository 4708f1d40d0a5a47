//! The object table.
//!
//! Entry 0 is a placeholder so that [`ObjectId`] values index the table
//! directly. Objects with a second location (bridges, the dragon, the
//! grate) carry it in [`FixedDef::At`].

use crate::ids::{LocationId, ObjectId};
use crate::locations::*;

/// Number of real objects.
pub const NOBJECTS: usize = 63;

/// Objects the player may hold at once, not counting weightless ones.
pub const INVLIMIT: usize = 7;

/// Static anchoring of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedDef {
    /// Can be picked up.
    Free,
    /// Cannot be picked up and occupies one location.
    Immovable,
    /// Cannot be picked up and is visible from a second location too.
    At(LocationId),
}

/// Static description of an object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectDef {
    /// The object's own id.
    pub id: ObjectId,
    /// Vocabulary words.
    pub words: &'static [&'static str],
    /// Inventory line. Objects without one are never listed as carried.
    pub inventory: Option<&'static str>,
    /// Starting location.
    pub plac: LocationId,
    /// Anchoring.
    pub fixd: FixedDef,
    /// Counts toward the tally and the score.
    pub treasure: bool,
    /// Room description per state.
    pub descriptions: &'static [&'static str],
    /// LISTEN response per state.
    pub sounds: &'static [&'static str],
    /// READ response per state.
    pub texts: &'static [&'static str],
    /// Message printed on entering each state.
    pub changes: &'static [&'static str],
}

const BLANK: ObjectDef = ObjectDef {
    id: ObjectId(0),
    words: &[],
    inventory: None,
    plac: NOWHERE,
    fixd: FixedDef::Free,
    treasure: false,
    descriptions: &[],
    sounds: &[],
    texts: &[],
    changes: &[],
};

macro_rules! object_ids {
    ($($name:ident = $n:literal, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub const $name: ObjectId = ObjectId($n);
        )*
    };
}

object_ids! {
    KEYS = 1, "Set of keys.";
    LAMP = 2, "Brass lantern.";
    GRATE = 3, "Steel grate over the cave entrance.";
    CAGE = 4, "Wicker cage.";
    ROD = 5, "Black rod with a star.";
    ROD2 = 6, "Black rod with a rusty mark; the dynamite.";
    STEPS = 7, "Stone steps between the pit and the dome.";
    BIRD = 8, "Little bird.";
    DOOR = 9, "Rusty iron door.";
    PILLOW = 10, "Velvet pillow.";
    SNAKE = 11, "Green snake in the king's hall.";
    FISSURE = 12, "Fissure, bridged by waving the rod.";
    TABLET = 13, "Stone tablet.";
    CLAM = 14, "Giant clam.";
    OYSTER = 15, "Giant oyster.";
    MAGAZINE = 16, "Spelunker Today.";
    DWARF = 17, "Dwarf, as a word the player can name.";
    KNIFE = 18, "Thrown knife.";
    FOOD = 19, "Food rations.";
    BOTTLE = 20, "Small bottle.";
    WATER = 21, "Water in the bottle.";
    OIL = 22, "Oil in the bottle.";
    MIRROR = 23, "Mirror in the canyon.";
    PLANT = 24, "Beanstalk in the west pit.";
    PLANT2 = 25, "Top of the beanstalk.";
    DRAWINGS = 26, "Cave drawings.";
    FIGURE = 27, "Shadowy figure.";
    AXE = 28, "Dwarvish axe.";
    DRAGON = 29, "Green dragon.";
    CHASM = 30, "Chasm and its bridge.";
    TROLL = 31, "Troll guarding the bridge.";
    TROLL2 = 32, "Marker for the absent troll.";
    BEAR = 33, "Cave bear.";
    MESSAG = 34, "Message in the second maze.";
    VOLCANO = 35, "Volcano and geyser.";
    VEND = 36, "Vending machine.";
    BATTERY = 37, "Fresh batteries.";
    OGRE = 38, "Ogre.";
    URN = 39, "Urn in the rock.";
    CAVITY = 40, "Cavity left by the urn.";
    BLOOD = 41, "Dragon's blood.";
    RESER = 42, "Reservoir.";
    SIGN = 43, "Vault sign.";
    NUGGET = 44, "Gold nugget.";
    DIAMONDS = 45, "Diamonds.";
    SILVER = 46, "Bars of silver.";
    JEWELRY = 47, "Precious jewelry.";
    COINS = 48, "Rare coins.";
    CHEST = 49, "Pirate's treasure chest.";
    EGGS = 50, "Golden eggs.";
    TRIDENT = 51, "Jeweled trident.";
    VASE = 52, "Ming vase.";
    EMERALD = 53, "Egg-sized emerald.";
    PYRAMID = 54, "Platinum pyramid.";
    PEARL = 55, "Glistening pearl.";
    RUG = 56, "Persian rug.";
    SPICES = 57, "Rare spices.";
    CHAIN = 58, "Golden chain.";
    RUBY = 59, "Giant ruby.";
    JADE = 60, "Jade necklace.";
    AMBER = 61, "Amber gemstone.";
    SAPPH = 62, "Star sapphire.";
    STATUETTE = 63, "Soapstone statuette.";
}

macro_rules! states {
    ($($name:ident = $n:literal, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub const $name: i32 = $n;
        )*
    };
}

states! {
    LAMP_DARK = 0, "Lamp off.";
    LAMP_BRIGHT = 1, "Lamp on.";
    GRATE_CLOSED = 0, "Grate locked.";
    GRATE_OPEN = 1, "Grate unlocked.";
    WATER_BOTTLE = 0, "Bottle holds water.";
    EMPTY_BOTTLE = 1, "Bottle is empty.";
    OIL_BOTTLE = 2, "Bottle holds oil.";
    BIRD_UNCAGED = 0, "Bird is loose in the cave.";
    BIRD_CAGED = 1, "Bird is in the cage.";
    BIRD_FOREST_UNCAGED = 2, "Bird was released in the forest.";
    BIRD_ENDSTATE = 5, "Bird sings its farewell and flies off.";
    DOOR_RUSTED = 0, "Door will not open.";
    DOOR_UNRUSTED = 1, "Door has been oiled.";
    SNAKE_BLOCKS = 0, "Snake bars the hall.";
    SNAKE_CHASED = 1, "Snake has been driven off.";
    UNBRIDGED = 0, "No bridge over the fissure.";
    BRIDGED = 1, "Crystal bridge spans the fissure.";
    PLANT_THIRSTY = 0, "Plant is tiny.";
    PLANT_BELLOWING = 1, "Plant is twelve feet tall.";
    PLANT_GROWN = 2, "Plant reaches the hole above.";
    AXE_HERE = 0, "Axe lies where it can be taken.";
    AXE_LOST = 1, "Axe lies beside the bear, out of reach.";
    DRAGON_BARS = 0, "Dragon is alive.";
    DRAGON_DEAD = 1, "Dragon is dead and bloody.";
    DRAGON_BLOODLESS = 2, "Dragon is dead and its blood drunk.";
    TROLL_BRIDGE = 0, "Bridge is intact.";
    BRIDGE_WRECKED = 1, "Bridge collapsed under the bear.";
    TROLL_UNPAID = 0, "Troll wants a treasure.";
    TROLL_PAIDONCE = 1, "Troll was paid and will return.";
    TROLL_GONE = 2, "Troll has been chased off for good.";
    UNTAMED_BEAR = 0, "Bear is hostile.";
    SITTING_BEAR = 1, "Bear is fed and chained.";
    CONTENTED_BEAR = 2, "Bear is free and follows the player.";
    BEAR_DEAD = 3, "Bear fell with the bridge.";
    VEND_BLOCKS = 0, "Vending machine closes the passage.";
    VEND_UNBLOCKS = 1, "Vending machine is swung aside.";
    FRESH_BATTERIES = 0, "Batteries unused.";
    DEAD_BATTERIES = 1, "Batteries spent.";
    URN_EMPTY = 0, "Urn holds nothing.";
    URN_DARK = 1, "Urn holds oil.";
    URN_LIT = 2, "Urn is burning.";
    CAVITY_FULL = 0, "Cavity holds a gem.";
    CAVITY_EMPTY = 1, "Cavity is empty.";
    WATERS_UNPARTED = 0, "Reservoir is whole.";
    WATERS_PARTED = 1, "Reservoir is parted.";
    EGGS_HERE = 0, "Eggs are in their nest.";
    EGGS_VANISHED = 1, "Eggs have been recalled.";
    EGGS_DONE = 2, "Eggs were recalled while in view.";
    VASE_WHOLE = 0, "Vase is intact.";
    VASE_DROPPED = 1, "Vase was dropped.";
    VASE_BROKEN = 2, "Vase is in pieces.";
    RUG_FLOOR = 0, "Rug lies on the floor.";
    RUG_DRAGON = 1, "Dragon lies on the rug.";
    RUG_HOVER = 2, "Rug is floating.";
    CHAIN_HEAP = 0, "Chain lies loose.";
    CHAINING_BEAR = 1, "Chain holds the bear.";
    CHAIN_FIXED = 2, "Chain is locked to the wall.";
    MIRROR_UNBROKEN = 0, "Mirror is whole.";
    MIRROR_BROKEN = 1, "Mirror is shattered.";
    STATE_IN_CAVITY = 1, "A gemstone is set into a cavity.";
    AMBER_IN_URN = 1, "Amber sits in the cavity the urn left behind.";
    STEPS_DOWN = 0, "Steps seen from the top of the pit.";
    STEPS_UP = 1, "Steps seen from the hall below.";
    ENDGAME_SIGN = 1, "Sign as it reads in the repository.";
}

/// Entry in the object table.
pub fn object(id: ObjectId) -> &'static ObjectDef {
    &OBJECTS[id.index()]
}

/// True for the four gems that fit the cavity.
pub fn is_gemstone(id: ObjectId) -> bool {
    matches!(id, EMERALD | RUBY | AMBER | SAPPH)
}

/// The object table, indexed by [`ObjectId`].
pub static OBJECTS: [ObjectDef; NOBJECTS + 1] = [
    BLANK,
    ObjectDef {
        id: KEYS,
        words: &["keys", "key"],
        inventory: Some("Set of keys"),
        plac: BUILDING,
        descriptions: &["There are some keys on the ground here."],
        ..BLANK
    },
    ObjectDef {
        id: LAMP,
        words: &["lamp", "lante", "headl"],
        inventory: Some("Brass lantern"),
        plac: BUILDING,
        descriptions: &[
            "There is a shiny brass lamp nearby.",
            "There is a lamp shining nearby.",
        ],
        changes: &["Your lamp is now off.", "Your lamp is now on."],
        ..BLANK
    },
    ObjectDef {
        id: GRATE,
        words: &["grate"],
        inventory: Some("*grate"),
        plac: GRATE_ROOM,
        fixd: FixedDef::At(BELOWGRATE),
        descriptions: &["The grate is locked.", "The grate is open."],
        changes: &["The grate is now locked.", "The grate is now unlocked."],
        ..BLANK
    },
    ObjectDef {
        id: CAGE,
        words: &["cage"],
        inventory: Some("Wicker cage"),
        plac: COBBLE,
        descriptions: &["There is a small wicker cage discarded nearby."],
        ..BLANK
    },
    ObjectDef {
        id: ROD,
        words: &["rod"],
        inventory: Some("Black rod"),
        plac: DEBRIS,
        descriptions: &["A three foot black rod with a rusty star on an end lies nearby."],
        ..BLANK
    },
    ObjectDef {
        id: ROD2,
        words: &["rod"],
        inventory: Some("Black rod"),
        descriptions: &["A three foot black rod with a rusty mark on an end lies nearby."],
        ..BLANK
    },
    ObjectDef {
        id: STEPS,
        words: &["steps"],
        plac: PITTOP,
        fixd: FixedDef::At(MISTHALL),
        descriptions: &[
            "Rough stone steps lead down the pit.",
            "Rough stone steps lead up the dome.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: BIRD,
        words: &["bird"],
        inventory: Some("Little bird in cage"),
        plac: BIRDCHAMBER,
        descriptions: &[
            "A cheerful little bird is sitting here singing.",
            "There is a little bird in the cage.",
            "A cheerful little bird is sitting here singing.",
        ],
        sounds: &[
            "The bird's singing is quite melodious.",
            "The bird does not seem inclined to sing while in the cage.",
            "It almost seems as though the bird is trying to tell you something.",
            "To your surprise, you can understand the bird's chirping; it is singing about the joys of its forest home.",
            "The bird does not seem inclined to sing while in the cage.",
            "The bird is singing to you in gratitude for your having returned it to its home.  In return, it informs you of a magic word which it thinks you may find useful somewhere near the Hall of Mists.  The magic word changes frequently, but for now the bird believes it is \"%s\".  You thank the bird for this information, and it flies off into the forest.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: DOOR,
        words: &["door"],
        plac: IMMENSE,
        fixd: FixedDef::Immovable,
        descriptions: &[
            "The way north is barred by a massive, rusty, iron door.",
            "The way north leads through a massive, rusty, iron door.",
        ],
        changes: &[
            "The hinges are quite thoroughly rusted now and won't budge.",
            "The oil has freed up the hinges so that the door will now move, although it requires some effort.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: PILLOW,
        words: &["pillo", "velve"],
        inventory: Some("Velvet pillow"),
        plac: SOFTROOM,
        descriptions: &["A small velvet pillow lies on the floor."],
        ..BLANK
    },
    ObjectDef {
        id: SNAKE,
        words: &["snake"],
        plac: KINGHALL,
        fixd: FixedDef::Immovable,
        descriptions: &["A huge green fierce snake bars the way!", ""],
        sounds: &["The snake is hissing venomously.", ""],
        ..BLANK
    },
    ObjectDef {
        id: FISSURE,
        words: &["fissu"],
        plac: EASTBANK,
        fixd: FixedDef::At(WESTBANK),
        descriptions: &["", "A crystal bridge spans the fissure."],
        changes: &[
            "The crystal bridge has vanished!",
            "A crystal bridge now spans the fissure.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: TABLET,
        words: &["table"],
        plac: DARKROOM,
        fixd: FixedDef::Immovable,
        descriptions: &["A massive stone tablet embedded in the wall reads: \"Congratulations on bringing light into the dark-room!\""],
        texts: &["\"Congratulations on bringing light into the dark-room!\""],
        ..BLANK
    },
    ObjectDef {
        id: CLAM,
        words: &["clam"],
        inventory: Some("Giant clam  >GRUNT!<"),
        plac: SHELLROOM,
        descriptions: &["There is an enormous clam here with its shell tightly closed."],
        ..BLANK
    },
    ObjectDef {
        id: OYSTER,
        words: &["oyste"],
        inventory: Some("Giant oyster  >GROAN!<"),
        descriptions: &[
            "There is an enormous oyster here with its shell tightly closed.",
            "Interesting.  There seems to be something written on the underside of the oyster.",
        ],
        sounds: &[
            "Even though it's an oyster, the critter's as tight-mouthed as a clam.",
            "It says the same thing it did before.  Hm, maybe it's a pun?",
        ],
        ..BLANK
    },
    ObjectDef {
        id: MAGAZINE,
        words: &["magaz", "issue", "spelu"],
        inventory: Some("\"Spelunker Today\""),
        plac: ANTEROOM,
        descriptions: &["There are a few recent issues of \"Spelunker Today\" magazine here."],
        texts: &["I'm afraid the magazine is written in dwarvish.  But pencilled on one cover you see, \"Please leave the magazines at the construction site.\""],
        ..BLANK
    },
    ObjectDef {
        id: DWARF,
        words: &["dwarf", "dwarv"],
        fixd: FixedDef::Immovable,
        descriptions: &[""],
        ..BLANK
    },
    ObjectDef {
        id: KNIFE,
        words: &["knife", "knive"],
        ..BLANK
    },
    ObjectDef {
        id: FOOD,
        words: &["food", "ratio"],
        inventory: Some("Tasty food"),
        plac: BUILDING,
        descriptions: &["There is food here."],
        ..BLANK
    },
    ObjectDef {
        id: BOTTLE,
        words: &["bottl", "jar"],
        inventory: Some("Small bottle"),
        plac: BUILDING,
        descriptions: &[
            "There is a bottle of water here.",
            "There is an empty bottle here.",
            "There is a bottle of oil here.",
        ],
        changes: &[
            "Your bottle is now full of water.",
            "The bottle of water is now empty.",
            "Your bottle is now full of oil.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: WATER,
        words: &["water", "h2o"],
        inventory: Some("Water in the bottle"),
        ..BLANK
    },
    ObjectDef {
        id: OIL,
        words: &["oil"],
        inventory: Some("Oil in the bottle"),
        ..BLANK
    },
    ObjectDef {
        id: MIRROR,
        words: &["mirro"],
        plac: MIRRORCANYON,
        fixd: FixedDef::Immovable,
        descriptions: &["", ""],
        changes: &[
            "",
            "You strike the mirror a resounding blow, whereupon it shatters into a myriad tiny fragments.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: PLANT,
        words: &["plant", "beans"],
        plac: WESTPIT,
        fixd: FixedDef::Immovable,
        descriptions: &[
            "There is a tiny little plant in the pit, murmuring \"water, water, ...\"",
            "There is a 12-foot-tall beanstalk stretching up out of the pit, bellowing \"WATER!!  WATER!!\"",
            "There is a gigantic beanstalk stretching all the way up to the hole.",
        ],
        sounds: &[
            "The plant continues to ask plaintively for water.",
            "The plant continues to demand water.",
            "The plant now seems quite contented.",
        ],
        changes: &[
            "You've over-watered the plant!  It's shriveling up!  And now . . .",
            "The plant spurts into furious growth for a few seconds.",
            "The plant grows explosively, almost filling the bottom of the pit.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: PLANT2,
        words: &["plant", "beans"],
        plac: WESTEND_TWOPIT,
        fixd: FixedDef::At(EASTEND_TWOPIT),
        descriptions: &[
            "",
            "The top of a 12-foot-tall beanstalk is poking out of the west pit.",
            "There is a huge beanstalk growing out of the west pit up to the hole.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: DRAWINGS,
        words: &["drawi"],
        plac: ORIENTAL,
        fixd: FixedDef::Immovable,
        descriptions: &[""],
        ..BLANK
    },
    ObjectDef {
        id: FIGURE,
        words: &["figur", "shado"],
        plac: WINDOW1,
        fixd: FixedDef::Immovable,
        descriptions: &["The shadowy figure seems to be trying to attract your attention."],
        ..BLANK
    },
    ObjectDef {
        id: AXE,
        words: &["axe"],
        inventory: Some("Dwarf's axe"),
        descriptions: &[
            "There is a little axe here.",
            "There is a little axe lying beside the bear.",
        ],
        changes: &[
            "",
            "The axe misses and lands near the bear where you can't get at it.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: DRAGON,
        words: &["drago"],
        plac: SECRET4,
        fixd: FixedDef::At(SECRET6),
        descriptions: &[
            "A huge green fierce dragon bars the way!",
            "The blood-specked body of a huge green dead dragon lies to one side.",
            "The body of a huge green dead dragon is lying off to one side.",
        ],
        sounds: &[
            "The dragon's ominous hissing does not bode well for you.",
            "The dragon is, not surprisingly, silent.",
            "The dragon is, not surprisingly, silent.",
        ],
        changes: &[
            "",
            "Congratulations!  You have just vanquished a dragon with your bare hands!  (Unbelievable, isn't it?)",
            "Your head buzzes strangely for a moment.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: CHASM,
        words: &["bridg", "chasm"],
        plac: SWCHASM,
        fixd: FixedDef::At(NECHASM),
        descriptions: &[
            "A rickety wooden bridge extends across the chasm, vanishing into the mist.  A notice posted on the bridge reads, \"Stop!  Pay troll!\"",
            "The wreckage of a bridge (and a dead bear) can be seen at the bottom of the chasm.",
        ],
        changes: &[
            "",
            "Just as you reach the other side, the bridge buckles beneath the weight of the bear, which was still following you around.  You scrabble desperately for support, but as the bridge collapses you stumble back and fall into the chasm.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: TROLL,
        words: &["troll"],
        plac: SWCHASM,
        fixd: FixedDef::At(NECHASM),
        descriptions: &[
            "A burly troll stands by the bridge and insists you throw him a treasure before you may cross.",
            "The troll steps out from beneath the bridge and blocks your way.",
            "",
        ],
        sounds: &[
            "The troll sounds quite adamant in his demand for a treasure.",
            "The troll sounds quite adamant in his demand for a treasure.",
            "",
        ],
        changes: &[
            "",
            "",
            "The bear lumbers toward the troll, who lets out a startled shriek and scurries away.  The bear soon gives up the pursuit and wanders back.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: TROLL2,
        fixd: FixedDef::Immovable,
        descriptions: &["The troll is nowhere to be seen."],
        ..BLANK
    },
    ObjectDef {
        id: BEAR,
        words: &["bear"],
        plac: BARREN,
        fixd: FixedDef::Immovable,
        descriptions: &[
            "There is a ferocious cave bear eyeing you from the far end of the room!",
            "There is a gentle cave bear sitting placidly in one corner.",
            "There is a contented-looking bear wandering about nearby.",
            "",
        ],
        changes: &[
            "",
            "The bear eagerly wolfs down your food, after which he seems to calm down considerably and even becomes rather friendly.",
            "",
            "",
        ],
        ..BLANK
    },
    ObjectDef {
        id: MESSAG,
        words: &["messa"],
        fixd: FixedDef::Immovable,
        descriptions: &["There is a message scrawled in the dust in a flowery script, reading: \"This is not the maze where the pirate leaves his treasure chest.\""],
        texts: &["\"This is not the maze where the pirate leaves his treasure chest.\""],
        ..BLANK
    },
    ObjectDef {
        id: VOLCANO,
        words: &["volca", "geyse"],
        plac: BREATHTAKING,
        fixd: FixedDef::Immovable,
        descriptions: &[""],
        ..BLANK
    },
    ObjectDef {
        id: VEND,
        words: &["machi", "vendi"],
        plac: DEADEND13,
        fixd: FixedDef::Immovable,
        descriptions: &[
            "There is a massive and somewhat battered vending machine here.  The instructions on it read: \"Drop coins here to receive fresh batteries.\"",
            "There is a massive vending machine here, swung back to reveal a southward passage.",
        ],
        texts: &[
            "\"Drop coins here to receive fresh batteries.\"",
            "\"Drop coins here to receive fresh batteries.\"",
        ],
        changes: &[
            "The vending machine swings back to block the passage.",
            "As you strike the vending machine, it pivots backward along with a section of wall, revealing a dark passage leading south.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: BATTERY,
        words: &["batte"],
        inventory: Some("Batteries"),
        descriptions: &[
            "There are fresh batteries here.",
            "Some worn-out batteries have been discarded nearby.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: OGRE,
        words: &["ogre"],
        plac: OGREROOM,
        fixd: FixedDef::Immovable,
        descriptions: &["A formidable ogre bars the northern exit."],
        sounds: &["The ogre is apparently the strong, silent type."],
        ..BLANK
    },
    ObjectDef {
        id: URN,
        words: &["urn"],
        plac: CLIFF,
        fixd: FixedDef::Immovable,
        descriptions: &[
            "A small urn is embedded in the rock.",
            "A small urn full of oil is embedded in the rock.",
            "A small oil flame extrudes from an urn embedded in the rock.",
        ],
        changes: &[
            "The urn is empty and will not light.",
            "The urn is now dark.",
            "The urn is now lit.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: CAVITY,
        words: &["cavit"],
        fixd: FixedDef::Immovable,
        descriptions: &["", "There is an empty cavity in the rock, about the size of a gemstone."],
        ..BLANK
    },
    ObjectDef {
        id: BLOOD,
        words: &["blood"],
        fixd: FixedDef::Immovable,
        descriptions: &[""],
        ..BLANK
    },
    ObjectDef {
        id: RESER,
        words: &["lake"],
        plac: RESERVOIR,
        fixd: FixedDef::At(RESNORTH),
        descriptions: &[
            "",
            "The waters have parted to form a narrow path across the reservoir.",
            "The waters crash together again.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: SIGN,
        words: &["sign"],
        fixd: FixedDef::Immovable,
        descriptions: &["", ""],
        texts: &["", "\"Treasure Vault.  Keys in main office.\""],
        ..BLANK
    },
    ObjectDef {
        id: NUGGET,
        words: &["gold", "nugge"],
        inventory: Some("Large gold nugget"),
        plac: NUGGET_ROOM,
        treasure: true,
        descriptions: &["There is a large sparkling nugget of gold here!"],
        ..BLANK
    },
    ObjectDef {
        id: DIAMONDS,
        words: &["diamo"],
        inventory: Some("Several diamonds"),
        plac: WESTBANK,
        treasure: true,
        descriptions: &["There are diamonds here!"],
        ..BLANK
    },
    ObjectDef {
        id: SILVER,
        words: &["silve", "bars"],
        inventory: Some("Bars of silver"),
        plac: LOWN_S,
        treasure: true,
        descriptions: &["There are bars of silver here!"],
        ..BLANK
    },
    ObjectDef {
        id: JEWELRY,
        words: &["jewel"],
        inventory: Some("Precious jewelry"),
        plac: SOUTHSIDE,
        treasure: true,
        descriptions: &["There is precious jewelry here!"],
        ..BLANK
    },
    ObjectDef {
        id: COINS,
        words: &["coins"],
        inventory: Some("Rare coins"),
        plac: WESTSIDE,
        treasure: true,
        descriptions: &["There are many coins here!"],
        ..BLANK
    },
    ObjectDef {
        id: CHEST,
        words: &["chest", "box", "treas"],
        inventory: Some("Treasure chest"),
        treasure: true,
        descriptions: &["The pirate's treasure chest is here!"],
        ..BLANK
    },
    ObjectDef {
        id: EGGS,
        words: &["eggs", "egg", "nest"],
        inventory: Some("Golden eggs"),
        plac: GIANTROOM,
        treasure: true,
        descriptions: &[
            "There is a large nest here, full of golden eggs!",
            "The nest of golden eggs has vanished!",
            "Done!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: TRIDENT,
        words: &["tride"],
        inventory: Some("Jeweled trident"),
        plac: CAVERN,
        treasure: true,
        descriptions: &["There is a jewel-encrusted trident here!"],
        ..BLANK
    },
    ObjectDef {
        id: VASE,
        words: &["vase", "ming", "shard", "potte"],
        inventory: Some("Ming vase"),
        plac: ORIENTAL,
        treasure: true,
        descriptions: &[
            "There is a delicate, precious, ming vase here!",
            "The floor is littered with worthless shards of pottery.",
            "The floor is littered with worthless shards of pottery.",
        ],
        changes: &[
            "The vase is now resting, delicately, on a velvet pillow.",
            "The ming vase drops with a delicate crash.",
            "You have taken the vase and hurled it delicately to the ground.",
        ],
        ..BLANK
    },
    ObjectDef {
        id: EMERALD,
        words: &["emera"],
        inventory: Some("Egg-sized emerald"),
        plac: PLOVER,
        treasure: true,
        descriptions: &[
            "There is an emerald here the size of a plover's egg!",
            "There is an emerald resting in a small cavity in the rock!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: PYRAMID,
        words: &["plati", "pyram"],
        inventory: Some("Platinum pyramid"),
        plac: DARKROOM,
        treasure: true,
        descriptions: &["There is a platinum pyramid here, 8 inches on a side!"],
        ..BLANK
    },
    ObjectDef {
        id: PEARL,
        words: &["pearl"],
        inventory: Some("Glistening pearl"),
        treasure: true,
        descriptions: &["Off to one side lies a glistening pearl!"],
        ..BLANK
    },
    ObjectDef {
        id: RUG,
        words: &["rug", "persi"],
        inventory: Some("Persian rug"),
        plac: SECRET4,
        fixd: FixedDef::At(SECRET6),
        treasure: true,
        descriptions: &[
            "There is a Persian rug spread out on the floor!",
            "The dragon is sprawled out on a Persian rug!!",
            "There is a Persian rug here, hovering in mid-air!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: SPICES,
        words: &["spice"],
        inventory: Some("Rare spices"),
        plac: BOULDERS2,
        treasure: true,
        descriptions: &["There are rare spices here!"],
        ..BLANK
    },
    ObjectDef {
        id: CHAIN,
        words: &["chain"],
        inventory: Some("Golden chain"),
        plac: BARREN,
        fixd: FixedDef::Immovable,
        treasure: true,
        descriptions: &[
            "There is a golden chain lying in a heap on the floor!",
            "The bear is locked to the wall with a golden chain!",
            "There is a golden chain locked to the wall!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: RUBY,
        words: &["ruby"],
        inventory: Some("Giant ruby"),
        plac: STOREROOM,
        treasure: true,
        descriptions: &[
            "There is an enormous ruby here!",
            "There is a ruby resting in a small cavity in the rock!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: JADE,
        words: &["jade", "neckl"],
        inventory: Some("Jade necklace"),
        treasure: true,
        descriptions: &["A precious jade necklace has been dropped here!"],
        ..BLANK
    },
    ObjectDef {
        id: AMBER,
        words: &["amber", "gemst"],
        inventory: Some("Amber gemstone"),
        treasure: true,
        descriptions: &[
            "There is a rare amber gemstone here!",
            "There is a rare amber gemstone resting in a small cavity in the rock!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: SAPPH,
        words: &["sapph"],
        inventory: Some("Star sapphire"),
        plac: LEDGE,
        treasure: true,
        descriptions: &[
            "There is a star sapphire here!",
            "There is a star sapphire resting in a small cavity in the rock!",
        ],
        ..BLANK
    },
    ObjectDef {
        id: STATUETTE,
        words: &["statu", "soaps"],
        inventory: Some("Soapstone statuette"),
        plac: CULDESAC,
        treasure: true,
        descriptions: &["There is a small soapstone statuette here!"],
        ..BLANK
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::NLOCATIONS;

    #[test]
    fn ids_match_table_positions() {
        for (i, def) in OBJECTS.iter().enumerate().skip(1) {
            assert_eq!(def.id.index(), i, "object {i}");
        }
    }

    #[test]
    fn starting_places_are_real_locations() {
        for def in OBJECTS.iter().skip(1) {
            assert!(def.plac.index() < NLOCATIONS, "{}", def.id);
            if let FixedDef::At(loc) = def.fixd {
                assert!(!loc.is_nowhere() && loc.index() < NLOCATIONS, "{}", def.id);
            }
        }
    }

    #[test]
    fn placed_objects_describe_themselves() {
        for def in OBJECTS.iter().skip(1) {
            if !def.plac.is_nowhere() {
                assert!(!def.descriptions.is_empty(), "{}", def.id);
            }
        }
    }

    #[test]
    fn treasures_and_gems() {
        let treasures = OBJECTS.iter().filter(|d| d.treasure).count();
        assert_eq!(treasures, 20);
        assert!(is_gemstone(RUBY));
        assert!(!is_gemstone(PEARL));
        assert!(object(CHEST).treasure);
    }
}
