//! Vocabulary: motion words, action words, and word matching.
//!
//! Player input is compared against vocabulary entries on their first
//! [`TOKLEN`] characters, ignoring case. Motion words are tried first, then
//! object words, then action words.

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;
use crate::messages::{ALREADY_CARRYING, AM_GAME, ARENT_CARRYING};
use crate::objects::OBJECTS;

/// Number of significant characters in a vocabulary word.
pub const TOKLEN: usize = 5;

/// True when `input` and `vocab` agree on their first [`TOKLEN`] characters.
pub fn word_matches(input: &str, vocab: &str) -> bool {
    let a = input.chars().take(TOKLEN).map(|c| c.to_ascii_uppercase());
    let b = vocab.chars().take(TOKLEN).map(|c| c.to_ascii_uppercase());
    a.eq(b)
}

/// The category a vocabulary word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordKind {
    /// A direction or place name.
    Motion,
    /// A thing.
    Object,
    /// A verb.
    Action,
}

macro_rules! motions {
    ($($variant:ident => [$($word:literal),* $(,)?]),* $(,)?) => {
        /// A movement word. Travel rules are keyed on these.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum Motion {
            $($variant,)*
        }

        impl Motion {
            /// Every motion in vocabulary order.
            pub const ALL: &'static [Motion] = &[$(Motion::$variant,)*];

            /// The words that name this motion.
            pub const fn words(self) -> &'static [&'static str] {
                match self {
                    $(Motion::$variant => &[$($word),*],)*
                }
            }
        }
    };
}

motions! {
    Road => ["road", "hill"],
    Enter => ["enter"],
    Upstream => ["upstr"],
    Downstream => ["downs"],
    Forest => ["fores"],
    Forward => ["forwa", "conti", "onwar"],
    Back => ["back", "retur", "retre"],
    Valley => ["valle"],
    Stairs => ["stair"],
    Outside => ["out", "outsi", "exit", "leave"],
    Building => ["build", "house"],
    Gully => ["gully"],
    Stream => ["strea"],
    Fork => ["fork"],
    Bed => ["bed"],
    Crawl => ["crawl"],
    Cobble => ["cobbl"],
    Inside => ["inwar", "insid", "in"],
    Surface => ["surfa"],
    Null => ["null", "nowhe"],
    Dark => ["dark"],
    Passage => ["passa", "tunne"],
    Low => ["low"],
    Canyon => ["canyo"],
    Awkward => ["awkwa"],
    Giant => ["giant"],
    View => ["view"],
    Up => ["upwar", "up", "u", "above", "ascen"],
    Down => ["d", "downw", "down", "desce"],
    Pit => ["pit"],
    Outdoors => ["outdo"],
    Crack => ["crack"],
    Steps => ["steps"],
    Dome => ["dome"],
    Left => ["left"],
    Right => ["right"],
    Hall => ["hall"],
    Jump => ["jump"],
    Barren => ["barre"],
    Over => ["over"],
    Across => ["acros"],
    East => ["east", "e"],
    West => ["west", "w"],
    North => ["north", "n"],
    South => ["south", "s"],
    Ne => ["ne"],
    Se => ["se"],
    Sw => ["sw"],
    Nw => ["nw"],
    Debris => ["debri"],
    Hole => ["hole"],
    Wall => ["wall"],
    Broken => ["broke"],
    Y2 => ["y2"],
    Climb => ["climb"],
    Look => ["look", "exami", "touch", "descr", "l"],
    Xyzzy => ["xyzzy"],
    Depression => ["depre"],
    Entrance => ["entra"],
    Plugh => ["plugh"],
    Secret => ["secre"],
    Cave => ["cave"],
    Cross => ["cross"],
    Bedquilt => ["bedqu"],
    Plover => ["plove"],
    Oriental => ["orien"],
    Cavern => ["caver"],
    Shell => ["shell"],
    Reservoir => ["reser"],
    Office => ["main", "offic"],
    Slab => ["slab"],
}

impl Motion {
    /// Primary word, used when echoing a motion back to the player.
    pub fn name(self) -> &'static str {
        self.words().first().copied().unwrap_or("")
    }

    /// Compass and vertical directions, used for the "which way" message class.
    pub fn is_compass(self) -> bool {
        matches!(
            self,
            Motion::East
                | Motion::West
                | Motion::North
                | Motion::South
                | Motion::Ne
                | Motion::Se
                | Motion::Sw
                | Motion::Nw
                | Motion::Up
                | Motion::Down
        )
    }
}

macro_rules! verbs {
    ($($variant:ident => [$($word:literal),* $(,)?], $msg:expr, $noaction:literal);* $(;)?) => {
        /// An action word.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum Verb {
            $($variant,)*
        }

        impl Verb {
            /// Every verb in vocabulary order.
            pub const ALL: &'static [Verb] = &[$(Verb::$variant,)*];

            /// The words that name this verb.
            pub const fn words(self) -> &'static [&'static str] {
                match self {
                    $(Verb::$variant => &[$($word),*],)*
                }
            }

            /// Default response when the verb does not apply.
            pub const fn message(self) -> &'static str {
                match self {
                    $(Verb::$variant => $msg,)*
                }
            }

            /// Verbs that only ever print their message.
            pub const fn is_noaction(self) -> bool {
                match self {
                    $(Verb::$variant => $noaction,)*
                }
            }
        }
    };
}

const NO_LOCK: &str = "I don't know how to lock or unlock such a thing.";
const NO_LIGHT: &str = "You have no source of light.";
const RIDICULOUS: &str = "Don't be ridiculous!";
const EH: &str = "Eh?";
const REMOTE_THINGS: &str = "I can only tell you what you see as you move about and manipulate things.  I cannot tell you where remote things are.";
const NOT_KNOW_HOW: &str = "I don't know how.";
const NOTHING_HAPPENS: &str = "Nothing happens.";

const HELP: &str = "I know of places, actions, and things.  Most of my vocabulary describes places and is used to move you there.  To move, try words like forest, building, downstream, enter, east, west, north, south, up, or down.  I know about a few special objects, like a black rod hidden in the cave.  These objects can be manipulated using some of the action words that I know.  Usually you will need to give both the object and action words (in either order), but sometimes I can infer the object from the verb alone.  Some objects also imply verbs; in particular, \"inventory\" implies \"take inventory\", which causes me to give you a list of what you're carrying.  Some objects have unexpected effects; for example, \"water\" implies \"pour water\" when you are standing next to the plant.  Usually people having trouble moving just need to try a few more words.  Usually people trying unsuccessfully to manipulate an object are attempting something beyond their (or my!) capabilities and should try a completely different tack.  One point often confused by beginners: \"take\" (or \"get\") is a verb, it's not a way to move places.";

const INFO: &str = "If you want to end your adventure early, say \"quit\".  To suspend your adventure such that you can continue later, say \"suspend\" (or \"pause\" or \"save\").  To see how well you're doing, say \"score\".  To get full credit for a treasure, you must have left it safely in the building, though you get partial credit just for locating it.  You lose points for getting killed, or for quitting, though the former costs you more.  There are also points based on how much (if any) of the cave you've managed to explore; in particular, there is a large bonus just for getting in (to distinguish the beginners from the rest of the pack), and there are other ways to determine whether you've been through some of the more harrowing sections.  If you think you've found all the treasures, just keep exploring for a while.  If nothing interesting happens, you haven't found them all yet.  If something interesting *does* happen, it means you're getting a bonus and have an opportunity to garner many more points in the Master's section.  I may occasionally offer hints if you seem to be having trouble.  If I do, I'll warn you in advance how much it will affect your score to accept the hints.  Finally, to save time, you may specify \"brief\", which tells me never to repeat the full description of a place unless you explicitly ask me to.";

const TREES: &str = "The trees of the forest are large hardwood oak and maple, with an occasional grove of pine or spruce.  There is quite a bit of undergrowth, largely birch and ash saplings plus nondescript bushes of various sorts.  This time of year visibility is quite restricted by all the leaves, but travel is quite easy if you detour around the spruce and berry bushes.";

const MIST: &str = "Mist is a white vapor, usually water, seen from time to time in caverns.  It can be found anywhere but is frequently a sign of a deep pit leading down to water.";

verbs! {
    Carry => ["carry", "take", "keep", "catch", "steal", "captu", "get", "tote", "snarf"], ALREADY_CARRYING, false;
    Drop => ["drop", "relea", "free", "disca", "dump"], ARENT_CARRYING, false;
    Say => ["say", "chant", "sing", "utter", "mumbl"], "", false;
    Unlock => ["unloc", "open"], NO_LOCK, false;
    Nothing => ["nothi"], "", false;
    Lock => ["lock", "close"], NO_LOCK, false;
    Light => ["light", "on"], NO_LIGHT, false;
    Extinguish => ["extin", "off"], NO_LIGHT, false;
    Wave => ["wave", "shake", "swing"], NOTHING_HAPPENS, false;
    Tame => ["calm", "placa", "tame"], AM_GAME, false;
    Go => ["walk", "run", "trave", "go", "proce", "explo", "goto", "follo", "turn"], "Where?", false;
    Attack => ["attac", "kill", "fight", "hit", "strik", "slay"], RIDICULOUS, false;
    Pour => ["pour"], ARENT_CARRYING, false;
    Eat => ["eat", "devou"], RIDICULOUS, false;
    Drink => ["drink"], "You have taken a drink from the stream.  The water tastes strongly of minerals, but is not unpleasant.  It is extremely cold.", false;
    Rub => ["rub"], "Rubbing the electric lamp is not particularly rewarding.  Anyway, nothing exciting happens.", false;
    Throw => ["throw", "toss"], ARENT_CARRYING, false;
    Quit => ["quit"], EH, false;
    Find => ["find", "where"], REMOTE_THINGS, false;
    Inventory => ["inven", "i"], REMOTE_THINGS, false;
    Feed => ["feed"], "There is nothing here to eat.", false;
    Fill => ["fill"], "You can't fill that.", false;
    Blast => ["blast", "deton", "ignit", "blowu"], "Blasting requires dynamite.", false;
    Score => ["score"], EH, false;
    Fee => ["fee"], NOT_KNOW_HOW, false;
    Fie => ["fie"], NOT_KNOW_HOW, false;
    Foe => ["foe"], NOT_KNOW_HOW, false;
    Foo => ["foo"], NOT_KNOW_HOW, false;
    Fum => ["fum"], NOT_KNOW_HOW, false;
    Brief => ["brief"], "On what?", false;
    Read => ["read", "perus"], "I'm afraid I don't understand.", false;
    Break => ["break", "shatt", "smash"], "It is beyond your power to do that.", false;
    Wake => ["wake", "distu"], RIDICULOUS, false;
    Save => ["suspe", "pause", "save"], EH, false;
    Resume => ["resum", "resta", "load"], EH, false;
    Fly => ["fly"], AM_GAME, false;
    Listen => ["liste"], EH, false;
    Part => [], NOTHING_HAPPENS, false;
    Help => ["help"], HELP, true;
    Info => ["info", "infor"], INFO, true;
    Swim => ["swim"], NOT_KNOW_HOW, true;
    Dig => ["dig", "excav"], "Digging without a shovel is quite impractical.  Even with a shovel progress is unlikely.", true;
    Lost => ["lost"], "I'm as confused as you are.", true;
    Mist => ["mist"], MIST, true;
    Curse => ["fuck", "damn", "shit"], "Watch it!", true;
    Stop => ["stop"], "I don't know the word \"stop\".  Use \"quit\" if you want to give up.", true;
    OldMagic => ["sesam", "opens", "abra", "abrac", "shaza", "hocus", "pocus"], "Good try, but that is an old worn-out magic word.", true;
    Tree => ["tree", "trees"], TREES, true;
    Thank => ["thank"], "You're quite welcome.", true;
}

impl Verb {
    /// Primary word, used in "<verb> what?" prompts.
    pub fn name(self) -> &'static str {
        match self {
            Verb::Part => "z'zzz",
            _ => self.words().first().copied().unwrap_or(""),
        }
    }

    /// Position in the FEE FIE FOE FOO sequence, 1-based.
    pub const fn big_word(self) -> Option<i32> {
        match self {
            Verb::Fee => Some(1),
            Verb::Fie => Some(2),
            Verb::Foe => Some(3),
            Verb::Foo => Some(4),
            Verb::Fum => Some(5),
            _ => None,
        }
    }
}

/// Find the motion named by `word`.
pub fn lookup_motion(word: &str) -> Option<Motion> {
    Motion::ALL
        .iter()
        .copied()
        .find(|m| m.words().iter().any(|w| word_matches(word, w)))
}

/// Find the object named by `word`.
pub fn lookup_object(word: &str) -> Option<ObjectId> {
    OBJECTS
        .iter()
        .skip(1)
        .find(|def| def.words.iter().any(|w| word_matches(word, w)))
        .map(|def| def.id)
}

/// Find the verb named by `word`.
pub fn lookup_verb(word: &str) -> Option<Verb> {
    Verb::ALL
        .iter()
        .copied()
        .find(|v| v.words().iter().any(|w| word_matches(word, w)))
}

/// Every vocabulary word with its category, in lookup order.
pub fn all_words() -> Vec<(&'static str, WordKind)> {
    let motions = Motion::ALL
        .iter()
        .flat_map(|m| m.words().iter().map(|w| (*w, WordKind::Motion)));
    let objects = OBJECTS
        .iter()
        .skip(1)
        .flat_map(|def| def.words.iter().map(|w| (*w, WordKind::Object)));
    let verbs = Verb::ALL
        .iter()
        .flat_map(|v| v.words().iter().map(|w| (*w, WordKind::Action)));
    motions.chain(objects).chain(verbs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{BIRD, LAMP, PLANT, ROD};
    use proptest::prelude::*;

    #[test]
    fn matching_uses_five_characters() {
        assert!(word_matches("DOWNSTREAM", "downs"));
        assert!(word_matches("lanter", "lante"));
        assert!(!word_matches("dow", "down"));
        assert!(word_matches("Xyzzy", "xyzzy"));
    }

    #[test]
    fn motion_lookup() {
        assert_eq!(lookup_motion("north"), Some(Motion::North));
        assert_eq!(lookup_motion("N"), Some(Motion::North));
        assert_eq!(lookup_motion("downstream"), Some(Motion::Downstream));
        assert_eq!(lookup_motion("down"), Some(Motion::Down));
        assert_eq!(lookup_motion("lamp"), None);
    }

    #[test]
    fn object_lookup() {
        assert_eq!(lookup_object("lamp"), Some(LAMP));
        assert_eq!(lookup_object("LANTERN"), Some(LAMP));
        assert_eq!(lookup_object("bird"), Some(BIRD));
        assert_eq!(lookup_object("rod"), Some(ROD));
        assert_eq!(lookup_object("beanstalk"), Some(PLANT));
        assert_eq!(lookup_object("xyzzy"), None);
    }

    #[test]
    fn verb_lookup() {
        assert_eq!(lookup_verb("get"), Some(Verb::Carry));
        assert_eq!(lookup_verb("EXTINGUISH"), Some(Verb::Extinguish));
        assert_eq!(lookup_verb("i"), Some(Verb::Inventory));
        assert_eq!(lookup_verb("plugh"), None);
        assert!(Verb::Help.is_noaction());
        assert!(!Verb::Carry.is_noaction());
    }

    #[test]
    fn part_has_no_fixed_word() {
        assert!(Verb::Part.words().is_empty());
        assert_eq!(Verb::Part.name(), "z'zzz");
    }

    #[test]
    fn steps_is_a_motion_before_an_object() {
        assert_eq!(lookup_motion("steps"), Some(Motion::Steps));
    }

    #[test]
    fn slab_is_a_motion() {
        assert_eq!(lookup_motion("slab"), Some(Motion::Slab));
        assert_eq!(lookup_motion("SLAB"), Some(Motion::Slab));
    }

    #[test]
    fn every_word_fits_the_token_length() {
        for (word, _) in all_words() {
            assert!(word.chars().count() <= TOKLEN, "{word}");
        }
    }

    proptest! {
        #[test]
        fn matching_ignores_case_and_tail(word in "[a-z]{1,8}", tail in "[a-z]{0,4}") {
            prop_assert!(word_matches(&word.to_uppercase(), &word));
            if word.len() >= TOKLEN {
                let longer = format!("{word}{tail}");
                prop_assert!(word_matches(&longer, &word));
            }
        }

        #[test]
        fn every_motion_word_finds_its_motion(pick in 0usize..Motion::ALL.len()) {
            let motion = Motion::ALL[pick];
            for word in motion.words() {
                prop_assert_eq!(lookup_motion(word), Some(motion));
            }
        }
    }
}
