//! Command parsing: splitting a line into vocabulary words, the
//! context-sensitive rewrites applied before dispatch, and completion
//! support for front ends.

mod completion;
mod preprocess;
mod token;

pub use completion::{FUZZY_THRESHOLD, complete, suggest};
pub use preprocess::{Preprocessed, preprocess};
pub use token::{Command, Tokens, Word, WordClass, classify, tokenize};
