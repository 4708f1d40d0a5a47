//! Command-line player for Colossal Cave.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "advent",
    about = "Colossal Cave Adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine internals at debug level (otherwise RUST_LOG decides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play {
        /// Seed for the game's random generator (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Behave like the original 1970s game
        #[arg(long)]
        oldstyle: bool,

        /// Rewrite this save file after every command
        #[arg(long, value_name = "FILE")]
        autosave: Option<PathBuf>,

        /// Start from a saved game instead of a new one
        #[arg(short, long, value_name = "FILE")]
        restore: Option<PathBuf>,

        /// Append every command typed to this file
        #[arg(short, long, value_name = "FILE")]
        log: Option<PathBuf>,

        /// Play these command files before reading the keyboard
        #[arg(long, value_name = "FILE", num_args = 1..)]
        script: Vec<PathBuf>,

        /// Skip the offer of instructions
        #[arg(long)]
        no_intro: bool,
    },

    /// Run a command file and print the whole session
    Replay {
        /// Command file, one command per line
        script: PathBuf,

        /// Seed for the game's random generator
        #[arg(short, long, default_value = "1")]
        seed: u64,

        /// Behave like the original 1970s game
        #[arg(long)]
        oldstyle: bool,
    },

    /// List the vocabulary
    Words {
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Validate a save file and summarise it
    Check {
        /// Save file to check
        save: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Play {
            seed,
            oldstyle,
            autosave,
            restore,
            log,
            script,
            no_intro,
        } => commands::play::run(commands::play::PlayOptions {
            seed,
            oldstyle,
            autosave,
            restore,
            log,
            scripts: script,
            intro: !no_intro,
        }),
        Commands::Replay {
            script,
            seed,
            oldstyle,
        } => commands::replay::run(&script, seed, oldstyle),
        Commands::Words { json } => commands::words::run(json),
        Commands::Check { save } => commands::check::run(&save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
