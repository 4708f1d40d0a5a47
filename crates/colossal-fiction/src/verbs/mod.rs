//! Verb handlers.
//!
//! Each handler is a method on [`Game`](crate::game::Game) that takes the
//! verb and, where it applies, the object it was given. A `None` object
//! means the verb was typed on its own and the handler may infer one from
//! what is at hand. Handlers return a [`Phase`](crate::dispatch::Phase).

mod creatures;
mod devices;
mod handling;
mod meta;

use colossal_core::Verb;

use crate::dispatch::Phase;
use crate::game::Game;

/// Per-state text from an object table, blank when the state has none.
pub(crate) fn state_text(table: &'static [&'static str], state: i32) -> &'static str {
    usize::try_from(state)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or("")
}

impl Game {
    /// Give the verb's stock response and wait for the next command.
    pub(crate) fn decline(&mut self, verb: Verb) -> Phase {
        self.say(verb.message());
        Phase::ClearObj
    }

    /// Say a message and wait for the next command.
    pub(crate) fn reply(&mut self, text: impl Into<String>) -> Phase {
        self.say(text);
        Phase::ClearObj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_text_is_blank_out_of_range() {
        let table: &'static [&'static str] = &["zero", "one"];
        assert_eq!(state_text(table, 1), "one");
        assert_eq!(state_text(table, 2), "");
        assert_eq!(state_text(table, -1), "");
    }
}
