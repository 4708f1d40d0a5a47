//! Batch replay of a command file.

use std::path::Path;

use colossal_fiction::script::replay;
use colossal_fiction::{Game, GameConfig, Script};

pub fn run(path: &Path, seed: u64, oldstyle: bool) -> Result<(), String> {
    let script = Script::load(path).map_err(|e| e.to_string())?;
    let config = GameConfig::new()
        .with_seed(seed)
        .with_oldstyle(oldstyle)
        .with_novice_prompt(false);
    let mut game = Game::new(config);

    println!("{}", game.opening());
    for exchange in replay(&mut game, script) {
        println!("\n> {}", exchange.input);
        if !exchange.output.is_empty() {
            println!("{}", exchange.output);
        }
    }

    if game.is_over() {
        println!("\n[game over after {} turns]", game.turns());
    } else {
        println!("\n[end of script: {} of {} points]", game.score(), game.max_score());
    }
    Ok(())
}
