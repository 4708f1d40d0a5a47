//! Log of the commands typed during a session.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

/// Appends each input line to a file. Write failures are reported once
/// and then ignored so the game can carry on.
pub struct Transcript {
    path: PathBuf,
    file: Option<File>,
    failed: bool,
}

impl Transcript {
    /// Open `path` for appending, or keep no log at all.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self {
                path: PathBuf::new(),
                file: None,
                failed: false,
            };
        };
        let mut transcript = Self {
            path: path.to_path_buf(),
            file: None,
            failed: false,
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => transcript.file = Some(file),
            Err(e) => transcript.fail(&e),
        }
        transcript
    }

    /// Record one line of input.
    pub fn record(&mut self, line: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(e) = writeln!(file, "{line}") {
            self.file = None;
            self.fail(&e);
        }
    }

    fn fail(&mut self, e: &std::io::Error) {
        if !self.failed {
            warn!("cannot write log {}: {e}", self.path.display());
            self.failed = true;
        }
    }
}
