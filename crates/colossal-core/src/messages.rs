//! Fixed narration strings.
//!
//! Plain messages are constants whose doc comment is the text itself.
//! Messages that embed a word or a number are functions.

macro_rules! messages {
    ($($name:ident = $text:literal;)*) => {
        $(
            #[doc = $text]
            pub const $name: &str = $text;
        )*
    };
}

messages! {
    WELCOME_YOU = "Welcome to Adventure!!  Would you like instructions?";
    CAVE_NEARBY = "Somewhere nearby is Colossal Cave, where others have found fortunes in treasure and gold, though it is rumored that some who enter are never seen again.  Magic is said to work in the cave.  I will be your eyes and hands.  Direct me with commands of 1 or 2 words.  I should warn you that I look at only the first five letters of each word, so you'll have to enter \"northeast\" as \"ne\" to distinguish it from \"north\".  You can type \"help\" for some general hints.  For information on how to end your adventure, scoring, etc., type \"info\".\n\t\t\t      - - -\nThis program was originally developed by Willie Crowther.  Most of the features of the current program were added by Don Woods.";
    OK_MAN = "OK";
    TWO_WORDS = "Please stick to 1- and 2-word commands.";
    PLEASE_ANSWER = "Please answer the question.";
    GAME_IS_OVER = "The game is over.  Start a new one to play again.";

    BAD_DIRECTION = "There is no way to go that direction.";
    UNSURE_FACING = "I am unsure how you are facing.  Use compass points or nearby objects.";
    NO_INOUT_HERE = "I don't know in from out here.  Use compass points or name something in the general direction you want to go.";
    NOTHING_HAPPENS = "Nothing happens.";
    WHICH_WAY = "Which way?";
    CANT_APPLY = "I don't know how to apply that word here.";
    TWIST_TURN = "Sorry, but the path twisted and turned so much that I can't figure out which way to go to get back.";
    FORGOT_PATH = "Sorry, but I no longer seem to remember how it was you got here.";
    NOT_CONNECTED = "You can't get there from here.";
    NO_MORE_DETAIL = "Sorry, but I am not allowed to give more detail.  I will repeat the long description of your location.";
    FOLLOW_STREAM = "I don't know where the cave is, but hereabouts no stream can run on the surface for long.  I would try the stream.";
    NEED_DETAIL = "I need more detailed instructions to do that.";
    MUST_DROP = "Something you're carrying won't fit through the tunnel with you.  You'd best take inventory and drop something.";
    PITCH_DARK = "It is now pitch dark.  If you proceed you will likely fall into a pit.";
    PIT_FALL = "You fell into a pit and broke every bone in your body!";
    SAYS_PLUGH = "A hollow voice says \"PLUGH\".";
    TAME_BEAR = "You are being followed by a very large, tame bear.";
    W_IS_WEST = "If you prefer, simply type W rather than WEST.";
    GO_UNNEEDED = "You don't need to say \"go\".  Just name a direction or a place.";
    FEET_WET = "Your feet are now wet.";
    WHERE_QUERY = "Where?";
    GRATE_NOWAY = "You can't go through a locked steel grate!";

    DWARF_BLOCK = "A little dwarf with a big knife blocks your way.";
    DWARF_RAN = "A little dwarf just walked around a corner, saw you, threw a little axe at you which missed, cursed, and ran away.";
    DWARF_SINGLE = "There is a threatening little dwarf in the room with you!";
    KNIFE_THROWN = "One sharp nasty knife is thrown at you!";
    MISSES_YOU = "It misses!";
    GETS_YOU = "It gets you!";
    ONE_HIT = "One of them gets you!";
    NONE_HIT = "None of them hit you!";
    KNIVES_VANISH = "The dwarves' knives vanish as they strike the walls of the cave.";
    PIRATE_SPOTTED = "There are faint rustling noises from the darkness behind you.  As you turn toward them, the beam of your lamp falls across a bearded pirate.  He is carrying a large chest.  \"Shiver me timbers!\" he cries, \"I've been spotted!  I'd best hie meself off to the maze to hide me chest!\"  With that, he vanishes into the gloom.";
    PIRATE_RUSTLES = "There are faint rustling noises from the darkness behind you.";
    PIRATE_POUNCES = "Out from the shadows behind you pounces a bearded pirate!  \"Har, har,\" he chortles, \"I'll just take all this booty and hide it away with me chest deep in the maze!\"  He snatches your treasure and vanishes into the gloom.";

    CAVE_CLOSING = "A sepulchral voice reverberating through the cave, says, \"Cave closing soon.  All adventurers exit immediately through main office.\"";
    EXIT_CLOSED = "A mysterious recorded voice groans into life and announces: \"This exit is closed.  Please leave via main office.\"";
    CAVE_CLOSED = "The sepulchral voice intones, \"The cave is now closed.\"  As the echoes fade, there is a blinding flash of light (and a small puff of orange smoke). . . .  As your eyes refocus, you look around and find...";
    DEATH_CLOSING = "It looks as though you're dead.  Well, seeing as how it's so close to closing time anyway, I think we'll just call it a day.";
    DWARVES_AWAKEN = "The resulting ruckus has awakened the dwarves.  There are now several threatening little dwarves in the room with you!  Most of them throw knives at you!  All of them get you!";
    SPLATTER_MESSAGE = "There is a loud explosion, and you are suddenly splashed across the walls of the room.";
    DEFEAT_MESSAGE = "There is a loud explosion, and a twenty-foot hole appears in the far wall, burying the snakes in the rubble.  A river of molten lava pours in through the hole, destroying everything in its path, including you!";
    VICTORY_MESSAGE = "There is a loud explosion, and a twenty-foot hole appears in the far wall, burying the dwarves in the rubble.  You march through the hole and find yourself in the main office, where a cheering band of friendly elves carry the conquering adventurer off into the sunset.";

    REPLACE_BATTERIES = "Your lamp is getting dim.  I'm taking the liberty of replacing the batteries.";
    MISSING_BATTERIES = "Your lamp is getting dim, and you're out of spare batteries.  You'd best start wrapping this up.";
    LAMP_DIM = "Your lamp is getting dim.  You'd best start wrapping this up, unless you can find some fresh batteries.  I seem to recall there's a vending machine in the maze.  Bring some coins with you.";
    GET_BATTERIES = "Your lamp is getting dim.  You'd best go back for those batteries.";
    LAMP_OUT = "Your lamp has run out of power.";

    NOW_HOLDING = "You are currently holding the following:";
    NO_CARRY = "You're not carrying anything.";
    CARRY_LIMIT = "You can't carry anything more.  You'll have to drop something first.";
    BIRD_EVADES = "The bird was unafraid when you entered, but as you approach it becomes disturbed and you cannot catch it.";
    CANNOT_CARRY = "You can catch the bird, but you cannot carry it.";
    BIRD_CRAP = "The bird eyes you suspiciously and flutters away.  A moment later you feel something wet land on your head, but upon looking up you can see no sign of the culprit.";
    DEEP_ROOTS = "The plant has exceptionally deep roots and cannot be pulled free.";
    YOU_JOKING = "You can't be serious!";
    BEAR_CHAINED = "The bear is still chained to the wall.";
    STILL_LOCKED = "The chain is still locked.";
    RUG_HOVERS = "You can't get at the rug; it's hovering too high above the ground.";
    URN_NOBUDGE = "The urn is far too firmly embedded for your puny strength to budge it.";
    DOUGHNUT_HOLES = "You can't pick up a hole in the rock.";
    FEW_DROPS = "There are only a few drops of blood, not enough to carry.";
    HAND_PASSTHROUGH = "Your hand passes through it as though it weren't there.";
    REMOVE_MESSAGE = "You brush at the message and it crumbles into the dust.";
    NO_CONTAINER = "You have nothing in which to carry it.";
    BOTTLE_FULL = "Your bottle is already full.";

    GEM_FITS = "The gem fits easily into the cavity.";
    RUG_SETTLES = "The Persian rug settles gently to the ground.";
    RUG_WIGGLES = "The rug wiggles slightly in your hands.";
    RUG_RISES = "The Persian rug stiffens and rises a foot or so off the ground.";
    BIRD_BURNT = "The little bird attacks the green dragon, and in an astounding flurry gets burnt to a cinder.  The ashes blow away.";
    BIRD_ATTACKS = "The little bird attacks the green snake, and in an astounding flurry drives the snake away.";

    NOTHING_LOCKED = "There is nothing here with a lock!";
    NO_KEYS = "You have no keys!";
    HUH_MAN = "Huh?";
    CLAM_OPENER = "You don't have anything strong enough to open the clam.";
    DROP_CLAM = "I advise you to put down the clam before opening it.  >STRAIN!<";
    DROP_OYSTER = "I advise you to put down the oyster before opening it.  >WRENCH!<";
    OYSTER_OPENER = "You don't have anything strong enough to open the oyster.";
    OYSTER_OPENS = "The oyster creaks open, revealing nothing but oyster inside.  It promptly snaps shut again.";
    PEARL_FALLS = "A glistening pearl falls out of the clam and rolls away.  Goodness, this must really be an oyster.  (I never was very good at identifying bivalves.)  Whatever it is, it has now snapped shut again.";
    RUSTY_DOOR = "The door is extremely rusty and refuses to open.";
    CANNOT_UNLOCK = "You can't unlock the keys.";
    NO_LOCK = "It has no lock.";
    BEAR_BLOCKS = "There is no way to get past the bear to unlock the chain, which is probably just as well.";
    ALREADY_UNLOCKED = "It was already unlocked.";
    CHAIN_UNLOCKED = "The chain is now unlocked.";
    ALREADY_LOCKED = "It was already locked.";
    NO_LOCKSITE = "There is nothing here to which the chain can be locked.";
    CHAIN_LOCKED = "The chain is now locked.";
    BEYOND_POWER = "It is beyond your power to do that.";

    UNHAPPY_BIRD = "Oh, leave the poor unhappy bird alone.";
    BIRD_DEAD = "The little bird is now dead.  Its body disappears.";
    BEAR_HANDS = "With what?  Your bare hands?  Against *HIS* bear hands??";
    BEAR_CONFUSED = "The bear is confused; he only wants to be your friend.";
    ALREADY_DEAD = "For crying out loud, the poor thing is already dead!";
    BARE_HANDS_QUERY = "With what?  Your bare hands?";
    NASTY_DRAGON = "The dragon looks rather nasty.  You'd best not try to get by.";
    OGRE_DODGE = "The ogre, who despite his bulk is quite agile, easily dodges your attack.  He seems almost amused by your puny effort.";
    OGRE_PANIC1 = "The ogre, distracted by your rush, is struck by the knife.  With a blood-curdling yell he turns and bounds after the dwarves, who flee in panic.  You are left alone in the room.";
    OGRE_PANIC2 = "The ogre, distracted by your rush, is struck by the knife.  With a blood-curdling yell he turns and bounds after the dwarf, who flees in panic.  You are left alone in the room.";
    NO_TARGET = "There is nothing here to attack.";
    SHELL_IMPERVIOUS = "The shell is very strong and is impervious to attack.";
    SNAKE_WARNING = "Attacking the snake both doesn't work and is very dangerous.";
    ROCKY_TROLL = "Trolls are close relatives with the rocks and have skin as tough as that of a rhinoceros.  The troll fends off your blows effortlessly.";

    CANT_POUR = "You can't pour that.";
    GROUND_WET = "Your bottle is empty and the ground is wet.";
    SHAKING_LEAVES = "The plant indignantly shakes the oil off its leaves and asks, \"Water?\"";
    THANKS_DELICIOUS = "Thank you, it was delicious!";
    LOST_APPETITE = "I think I just lost my appetite.";
    RIDICULOUS_ATTEMPT = "Don't be ridiculous!";
    URN_GENIES = "As you rub the urn, there is a flash of light and a genie appears.  His aspect is stern as he advises: \"One who wouldst traffic in precious stones must first learn to recognize the signals thereof.\"  He then vanishes in a puff of smoke, and you notice that the urn has been replaced by a cavity in the rock, in which lies a rare amber gemstone.";
    PECULIAR_NOTHING = "Peculiar.  Nothing unexpected happens.";

    TROLL_SATISFIED = "The troll catches your treasure and scurries away out of sight.";
    DRAGON_SCALES = "The axe bounces harmlessly off the dragon's thick scales.";
    TROLL_RETURNS = "The troll deftly catches the axe, examines it carefully, and tosses it back, declaring, \"Good workmanship, but it's not valuable enough.\"";
    DWARF_DODGES = "You attack a little dwarf, but he dodges out of the way.";
    DWARF_SMOKE = "You killed a little dwarf.  The body vanishes in a cloud of greasy black smoke.";
    KILLED_DWARF = "You killed a little dwarf.";

    NEEDED_NEARBY = "I daresay whatever you want is around here somewhere.";
    YES_HERE = "I believe what you want is right here with you.";
    BIRD_PINING = "It's not hungry (it's merely pinin' for the fjords).  Besides, you have no bird seed.";
    NOTHING_EDIBLE = "There is nothing here it wants to eat (except perhaps you).";
    BIRD_DEVOURED = "The snake has now devoured your bird.";
    TROLL_VICES = "Gluttony is not one of the troll's vices.  Avarice, however, is.";
    REALLY_MAD = "You fool, dwarves eat only coal!  Now you've made him *REALLY* mad!!";
    OGRE_FULL = "The ogre doesn't appear to be hungry.";

    FILL_INVALID = "There is nothing here with which to fill it.";
    SHATTER_VASE = "The sudden change in temperature has delicately shattered the vase.";
    FULL_URN = "The urn is already full of oil.";
    WATER_URN = "The water flows into the urn and promptly evaporates.";
    OIL_URN = "Your bottle is now empty and the urn is full of oil.";
    URN_NOPOUR = "There is no way to get the oil back out of the urn.";
    NO_LIQUID = "There is nothing here with which to fill the bottle.";
    ARENT_CARRYING = "You aren't carrying it!";
    ALREADY_CARRYING = "You are already carrying it!";
    AM_GAME = "I'm game.  Would you care to explain how?";

    START_OVER = "What's the matter, can't you read?  Now you'd best start over.";
    WELL_POINTLESS = "Well, that was remarkably pointless!";
    CLUE_QUERY = "Hmmm, this looks like a clue, which means it'll cost you 10 points to read it.  Should I go ahead and read it anyway?";
    WAYOUT_CLUE = "It says, \"There is something strange about this place, such that one of the words I've always known now has a new effect.\"";
    TOO_FAR = "It is too far up for you to reach.";
    PROD_DWARF = "You prod the nearest dwarf, who wakes up grumpily, takes one look at you, curses, and grabs for his axe.";

    FLAP_ARMS = "Though you flap your arms furiously, it is to no avail.";
    RUG_NOTHING1 = "The rug is lying flat on the ground and shows no inclination to fly.";
    RUG_NOTHING2 = "You can't fly that!";
    RUG_GOES = "You board the Persian rug, which promptly whisks you across the chasm.  You have time for a fleeting glimpse of a two thousand foot drop to a mighty river; then you find yourself on the other side.";
    RUG_RETURNS = "The rug ferries you back across the chasm.";
    ALL_SILENT = "The room is eerily silent.";
    NOT_BRIGHT = "You are not exactly the brightest of adventurers, are you?  The waters crash together again and you are swept away and drowned.";
    NECKLACE_FLY = "The bird flies agitatedly about the cave, then lands on a ledge high above.  A jade necklace, dislodged by its claws, drops at your feet.";
    CAGE_FLY = "The bird flies about agitatedly for a moment.";
    FREE_FLY = "The bird flies agitatedly about the cave.";

    BRIEF_CONFIRM = "Okay, from now on I'll only describe a place in full the first time you come to it.  To get the full description, say \"LOOK\".";
    REALLY_QUIT = "Do you really want to quit now?";
    INDEED_QUIT = "Do you indeed wish to quit now?";
    WANT_HINT = "Do you want the hint?";
    SUSPEND_WARNING = "I can suspend your Adventure for you so that you can resume later, but it will cost you 5 points.";
    THIS_ACCEPTABLE = "Is this acceptable?";
    RESUME_HELP = "To resume your Adventure, start a new game and then say \"RESUME\".";
    RESUME_ABANDON = "To resume an earlier Adventure, you must abandon the current one.";
    FILE_NAME = "File name:";
    TOOK_LONG = "You would have scored better if you hadn't taken so long.";
    WITHOUT_SUSPENDS = "You would have scored better if you hadn't suspended your game.";
    NO_HIGHER = "To achieve the next higher rating would be a neat trick!\nCongratulations!!";
    OFF_SCALE = "You just went off my scale!!";
}

/// Response to a word that is in no vocabulary table.
pub fn dont_know(word: &str) -> String {
    format!("Sorry, I don't know the word \"{word}\".")
}

/// Response to a bare object word with no verb.
pub fn what_do(word: &str) -> String {
    format!("What do you want to do with the {word}?")
}

/// Response to a verb whose object could not be inferred.
pub fn do_what(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{} what?", first.to_ascii_uppercase(), chars.as_str()),
        None => " what?".to_string(),
    }
}

/// Response to an object word that names nothing present.
pub fn no_see(word: &str) -> String {
    format!("I see no {word} here.")
}

/// SAY with an ordinary word.
pub fn okey_dokey(word: &str) -> String {
    format!("Okay, \"{word}\".")
}

/// Several dwarves in the room.
pub fn dwarf_pack(count: usize) -> String {
    format!("There are {count} threatening little dwarves in the room with you.")
}

/// Several knives in flight.
pub fn thrown_knives(count: usize) -> String {
    format!("{count} of them throw knives at you!")
}

/// Several knives land.
pub fn multiple_hits(count: usize) -> String {
    format!("{count} of them get you!")
}

/// SCORE while still playing.
pub fn garnered_points(score: i32, max: i32) -> String {
    format!("If you were to quit now, you would score {score} out of a possible {max}.")
}

/// Final score line.
pub fn total_score(score: i32, max: i32, turns: i32) -> String {
    let plural = if turns == 1 { "" } else { "s" };
    format!("You scored {score} out of a possible {max}, using {turns} turn{plural}.")
}

/// Distance to the next rank.
pub fn next_higher(points: i32) -> String {
    let plural = if points == 1 { "" } else { "s" };
    format!("To achieve the next higher rating, you need {points} more point{plural}.")
}

/// Price of a hint.
pub fn hint_cost(points: i32) -> String {
    let plural = if points == 1 { "" } else { "s" };
    format!("I am prepared to give you a hint, but it will cost you {points} point{plural}.")
}

/// A save file could not be written.
pub fn save_failed(reason: &str) -> String {
    format!("Can't save your game: {reason}.  Try again with another file name.")
}

/// A save file could not be loaded.
pub fn restore_failed(reason: &str) -> String {
    format!("Can't restore that game: {reason}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn do_what_capitalizes() {
        assert_eq!(do_what("take"), "Take what?");
        assert_eq!(do_what(""), " what?");
    }

    #[test]
    fn plurals() {
        assert_eq!(
            next_higher(1),
            "To achieve the next higher rating, you need 1 more point."
        );
        assert_eq!(
            hint_cost(4),
            "I am prepared to give you a hint, but it will cost you 4 points."
        );
        insta::assert_snapshot!(total_score(32, 430, 1), @"You scored 32 out of a possible 430, using 1 turn.");
    }
}
