//! Splitting an input line into at most two classified words.

use colossal_core::vocab::{lookup_motion, lookup_object, lookup_verb};
use colossal_core::{Motion, ObjectId, Verb};

/// What a word turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// A direction or place name.
    Motion(Motion),
    /// A thing.
    Object(ObjectId),
    /// A verb, including the game's magic word.
    Action(Verb),
    /// An integer, only meaningful in legacy mode.
    Numeric(i32),
    /// Not in any vocabulary.
    Unknown,
}

/// One word of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word as the player typed it.
    pub raw: String,
    /// Its classification.
    pub class: WordClass,
}

impl Word {
    /// Classify `raw` against the vocabulary.
    pub fn new(raw: impl Into<String>, zzword: &str, oldstyle: bool) -> Self {
        let raw = raw.into();
        let class = classify(&raw, zzword, oldstyle);
        Self { raw, class }
    }

    /// The object this word names, if it is an object word.
    pub fn object(&self) -> Option<ObjectId> {
        match self.class {
            WordClass::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The verb this word names, if it is an action word.
    pub fn verb(&self) -> Option<Verb> {
        match self.class {
            WordClass::Action(verb) => Some(verb),
            _ => None,
        }
    }
}

/// A one- or two-word command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// First word.
    pub first: Word,
    /// Optional second word.
    pub second: Option<Word>,
}

/// Outcome of splitting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens {
    /// Nothing but whitespace.
    Empty,
    /// More than two words.
    TooMany,
    /// A command ready for preprocessing.
    Command(Command),
}

/// Classify a single word.
///
/// Motion words are tried first, then objects, then verbs, then the
/// game's magic word, then integers. In legacy mode a lone `i` or `l` is
/// not taken as a motion or verb.
pub fn classify(raw: &str, zzword: &str, oldstyle: bool) -> WordClass {
    let ignored = oldstyle && matches!(raw, "i" | "I" | "l" | "L");
    if let Some(motion) = lookup_motion(raw).filter(|_| !ignored) {
        return WordClass::Motion(motion);
    }
    if let Some(obj) = lookup_object(raw) {
        return WordClass::Object(obj);
    }
    if let Some(verb) = lookup_verb(raw).filter(|_| !ignored) {
        return WordClass::Action(verb);
    }
    if raw.eq_ignore_ascii_case(zzword) {
        return WordClass::Action(Verb::Part);
    }
    match raw.parse::<i32>() {
        Ok(n) => WordClass::Numeric(n),
        Err(_) => WordClass::Unknown,
    }
}

/// Split `line` into a command of one or two classified words.
pub fn tokenize(line: &str, zzword: &str, oldstyle: bool) -> Tokens {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Tokens::Empty;
    };
    let second = words.next();
    if words.next().is_some() {
        return Tokens::TooMany;
    }
    Tokens::Command(Command {
        first: Word::new(first, zzword, oldstyle),
        second: second.map(|w| Word::new(w, zzword, oldstyle)),
    })
}
