pub mod check;
pub mod play;
pub mod replay;
pub mod transcript;
pub mod words;
