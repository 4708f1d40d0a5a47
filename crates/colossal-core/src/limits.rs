//! Timers and counts that shape a game.

/// Dwarves, including the pirate.
pub const NDWARVES: usize = 6;

/// Index of the pirate in the dwarf array.
pub const PIRATE: usize = NDWARVES - 1;

/// Lamp power at the start of a game.
pub const GAMELIMIT: i32 = 330;

/// Lamp power for a player who asked for instructions.
pub const NOVICELIMIT: i32 = 1000;

/// Power added by fresh batteries.
pub const BATTERYLIFE: i32 = 2500;

/// Lamp power at which warnings start.
pub const WARNTIME: i32 = 30;

/// Turns between the last treasure being found and the closing announcement.
pub const CLOCK1: i32 = 30;

/// Turns between the closing announcement and the cave closing.
pub const CLOCK2: i32 = 50;

/// What the second clock drops to when the player tries to leave while closing.
pub const PANICTIME: i32 = 15;

/// Percent chance per turn of the hollow voice at Y2.
pub const PLUGH_CHANCE: i32 = 25;

/// Percent chance of falling into a pit when moving in the dark.
pub const PIT_CHANCE: i32 = 35;

/// Default save file name.
pub const DEFAULT_SAVE: &str = "advent.sav";
