//! Save file validation.

use std::path::Path;

use colored::Colorize;
use colossal_core::locations;
use colossal_fiction::Snapshot;
use colossal_sim::{Termination, score};

pub fn run(path: &Path) -> Result<(), String> {
    let snapshot = Snapshot::read(path).map_err(|e| e.to_string())?;
    let world = &snapshot.game;
    let points = score(world, Termination::Score);
    let place = locations::location(world.loc);
    let here = place.short.unwrap_or(place.long);

    println!("  {} {}", "Valid save file:".bold(), path.display());
    println!("  Saved:     {}", snapshot.saved_at.to_rfc3339());
    println!("  Location:  {here}");
    println!("  Turns:     {}", world.turns);
    println!("  Score:     {} of {}", points.points, points.max);
    println!("  Deaths:    {}", world.numdie);
    println!("  Treasures: {} still unseen", world.tally);
    if world.closed {
        println!("  The cave is closed.");
    } else if world.closing {
        println!("  The cave is closing.");
    }
    Ok(())
}
