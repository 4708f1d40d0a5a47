//! Hints, score ranks, turn penalties and obituaries.

use crate::error::{DataError, DataResult};

/// A hint the game may offer after the player lingers somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Turns the player must spend in a hint location before the offer.
    pub turns: i32,
    /// Points charged if the hint is read.
    pub penalty: i32,
    /// Offer shown to the player.
    pub question: &'static str,
    /// The hint itself.
    pub hint: &'static str,
}

/// Number of hints, one per `HINT_*` location bit.
pub const NHINTS: usize = 10;

/// Hints in the same order as [`Conditions::HINTS`](crate::conditions::Conditions::HINTS).
pub static HINTS: [Hint; NHINTS] = [
    Hint {
        turns: 4,
        penalty: 2,
        question: "Are you trying to get into the cave?",
        hint: "The grate is very solid and has a hardened steel lock.  You cannot enter without a key, and there are no keys nearby.  I would recommend looking elsewhere for the keys.",
    },
    Hint {
        turns: 5,
        penalty: 2,
        question: "Are you trying to catch the bird?",
        hint: "Something about you seems to be frightening the bird.  Perhaps you might figure out what it is.",
    },
    Hint {
        turns: 8,
        penalty: 2,
        question: "Are you trying to somehow deal with the snake?",
        hint: "You can't kill the snake, or drive it away, or avoid it, or anything like that.  There is a way to get by, but you don't have the necessary resources right now.",
    },
    Hint {
        turns: 75,
        penalty: 4,
        question: "Do you need help getting out of the maze?",
        hint: "You can make the passages look less alike by dropping things.",
    },
    Hint {
        turns: 25,
        penalty: 5,
        question: "Are you trying to explore beyond the plover room?",
        hint: "There is a way to explore that region without having to worry about falling into a pit.  None of the objects available is immediately useful in discovering the secret.",
    },
    Hint {
        turns: 20,
        penalty: 3,
        question: "Do you need help getting out of here?",
        hint: "Don't go west.",
    },
    Hint {
        turns: 8,
        penalty: 2,
        question: "Are you wondering what to do here?",
        hint: "The urn is empty.  It would make a fine lamp if there were something in it to burn.",
    },
    Hint {
        turns: 25,
        penalty: 1,
        question: "Would you like to be shown out of the forest?",
        hint: "Go east ten times.  If that doesn't get you out, then go south, then west twice, then south.",
    },
    Hint {
        turns: 10,
        penalty: 4,
        question: "Do you need help dealing with the ogre?",
        hint: "There is nothing the presence of which will prevent you from defeating him; thus it can't hurt to fetch everything you possess.",
    },
    Hint {
        turns: 4,
        penalty: 4,
        question: "You've found everything but the necklace.  Would you like a hint?",
        hint: "The bird knows more than it lets on.  Try waving the rod where the bird can see it, somewhere near the top of the small pit.",
    },
];

/// Look up a hint by its position in [`HINTS`].
pub fn hint(index: usize) -> DataResult<&'static Hint> {
    HINTS.get(index).ok_or(DataError::HintOutOfRange(index))
}

/// A rank awarded at the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreClass {
    /// Highest score that earns this rank.
    pub threshold: i32,
    /// Verdict shown to the player.
    pub message: &'static str,
}

/// Ranks in ascending order of threshold.
pub static CLASSES: [ScoreClass; 10] = [
    ScoreClass {
        threshold: 45,
        message: "You are obviously a rank amateur.  Better luck next time.",
    },
    ScoreClass {
        threshold: 120,
        message: "Your score qualifies you as a novice class adventurer.",
    },
    ScoreClass {
        threshold: 170,
        message: "You have achieved the rating: \"Experienced Adventurer\".",
    },
    ScoreClass {
        threshold: 250,
        message: "You may now consider yourself a \"Seasoned Adventurer\".",
    },
    ScoreClass {
        threshold: 320,
        message: "You have reached \"Junior Master\" status.",
    },
    ScoreClass {
        threshold: 375,
        message: "Your score puts you in Master Adventurer Class C.",
    },
    ScoreClass {
        threshold: 410,
        message: "Your score puts you in Master Adventurer Class B.",
    },
    ScoreClass {
        threshold: 426,
        message: "Your score puts you in Master Adventurer Class A.",
    },
    ScoreClass {
        threshold: 429,
        message: "All of Adventuredom gives tribute to you, Adventurer Grandmaster!",
    },
    ScoreClass {
        threshold: 9999,
        message: "Adventuredom stands in awe -- you have now joined the ranks of the W O R L D   C H A M P I O N   A D V E N T U R E R S !  It may interest you to know that the Dungeon-Master himself has, to my knowledge, never achieved this feat.",
    },
];

/// A one-time penalty for dawdling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnThreshold {
    /// Turn count that triggers it.
    pub turns: i32,
    /// Points lost.
    pub penalty: i32,
    /// Rebuke shown to the player.
    pub message: &'static str,
}

/// Turn penalties in ascending order.
pub static TURN_THRESHOLDS: [TurnThreshold; 4] = [
    TurnThreshold {
        turns: 350,
        penalty: 2,
        message: "Tsk!  A wizard wouldn't have to take 350 turns.  This is going to cost you a couple of points.",
    },
    TurnThreshold {
        turns: 500,
        penalty: 3,
        message: "500 turns?  That's another few points you've lost.",
    },
    TurnThreshold {
        turns: 1000,
        penalty: 5,
        message: "Are you still at it?  Five points off for exceeding 1000 turns!",
    },
    TurnThreshold {
        turns: 2500,
        penalty: 10,
        message: "Good grief, don't you *EVER* give up?  Do you realize you've spent over 2500 turns at this?  That's another ten points off, a total of twenty points lost for taking so long.",
    },
];

/// Reincarnation offer and the reply if the player accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obituary {
    /// Question put to the dead player.
    pub query: &'static str,
    /// Shown when the player says yes.
    pub yes_response: &'static str,
}

/// Number of deaths allowed; the last obituary ends the game either way.
pub const NDEATHS: usize = 3;

/// One obituary per death.
pub static OBITUARIES: [Obituary; NDEATHS] = [
    Obituary {
        query: "Oh dear, you seem to have gotten yourself killed.  I might be able to help you out, but I've never really done this before.  Do you want me to try to reincarnate you?",
        yes_response: "All right.  But don't blame me if something goes wr......\n                    --- POOF!! ---\nYou are engulfed in a cloud of orange smoke.  Coughing and gasping, you emerge from the smoke and find....",
    },
    Obituary {
        query: "You clumsy oaf, you've done it again!  I don't know how long I can keep this up.  Do you want me to try reincarnating you again?",
        yes_response: "Okay, now where did I put my orange smoke?....  >POOF!<\nEverything disappears in a dense cloud of orange smoke.",
    },
    Obituary {
        query: "Now you've really done it!  I'm out of orange smoke!  You don't expect me to do a decent reincarnation without any orange smoke, do you?",
        yes_response: "Okay, if you're so smart, do it yourself!  I'm leaving!",
    },
];

/// Index of the rank for `score`.
pub fn class_for(score: i32) -> usize {
    CLASSES
        .iter()
        .position(|class| score <= class.threshold)
        .unwrap_or(CLASSES.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::Conditions;

    #[test]
    fn one_hint_per_hint_bit() {
        assert_eq!(HINTS.len(), Conditions::HINTS.len());
        assert!(hint(NHINTS).is_err());
        assert_eq!(hint(5).map(|h| h.hint).ok(), Some("Don't go west."));
    }

    #[test]
    fn classes_ascend() {
        assert!(CLASSES.windows(2).all(|w| w[0].threshold < w[1].threshold));
        assert_eq!(class_for(0), 0);
        assert_eq!(class_for(45), 0);
        assert_eq!(class_for(46), 1);
        assert_eq!(class_for(430), 9);
    }

    #[test]
    fn thresholds_ascend() {
        assert!(
            TURN_THRESHOLDS
                .windows(2)
                .all(|w| w[0].turns < w[1].turns)
        );
        let total: i32 = TURN_THRESHOLDS.iter().map(|t| t.penalty).sum();
        assert_eq!(total, 20);
    }
}
