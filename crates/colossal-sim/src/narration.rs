//! Collected narration for one turn.

/// Messages produced while a command runs, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Empty messages are dropped.
    pub fn say(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.lines.push(text);
        }
    }

    /// True when nothing has been said.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Messages so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the buffer into one string, one message per line.
    pub fn take(&mut self) -> String {
        let text = self.lines.join("\n");
        self.lines.clear();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_are_skipped() {
        let mut out = Narration::new();
        out.say("");
        assert!(out.is_empty());
        out.say("one");
        out.say(String::from("two"));
        assert_eq!(out.lines().len(), 2);
        assert_eq!(out.take(), "one\ntwo");
        assert!(out.is_empty());
    }
}
