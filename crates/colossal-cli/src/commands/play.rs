//! Interactive play.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use colossal_fiction::{Game, GameConfig, Script};

use super::transcript::Transcript;

/// Settings for an interactive session, as given on the command line.
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub oldstyle: bool,
    pub autosave: Option<PathBuf>,
    pub restore: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub scripts: Vec<PathBuf>,
    pub intro: bool,
}

pub fn run(options: PlayOptions) -> Result<(), String> {
    let mut config = GameConfig::new()
        .with_oldstyle(options.oldstyle)
        .with_novice_prompt(options.intro);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &options.autosave {
        config = config.with_autosave(path.clone());
    }

    let mut script = Script::default();
    for path in &options.scripts {
        script.extend(Script::load(path).map_err(|e| e.to_string())?);
    }

    let mut game = match &options.restore {
        Some(path) => Game::restore(config, path).map_err(|e| format!("cannot restore: {e}"))?,
        None => Game::new(config),
    };
    let mut transcript = Transcript::open(options.log.as_deref());

    show(&game.opening());

    for line in script {
        if game.is_over() {
            return Ok(());
        }
        println!("{} {}", prompt(&game), line.dimmed());
        transcript.record(&line);
        show(&game.process(&line));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !game.is_over() {
        print!("{} ", prompt(&game));
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim_end_matches(['\r', '\n']);
        transcript.record(input);
        show(&game.process(input));
    }

    Ok(())
}

fn prompt(game: &Game) -> colored::ColoredString {
    if game.awaiting_answer() {
        "?".yellow().bold()
    } else {
        ">".bold()
    }
}

fn show(text: &str) {
    if !text.is_empty() {
        println!("{text}\n");
    }
}
