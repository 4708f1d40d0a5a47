//! Snapshot files.
//!
//! A snapshot is the whole [`World`] wrapped in a small header, written as
//! pretty-printed JSON. Loading is all or nothing: the header is checked
//! first, then the world is parsed and validated before anything is
//! handed back, so a bad file never disturbs the game in progress.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use colossal_sim::World;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Format tag written into every snapshot.
pub const FORMAT: &str = "colossal-adventure";

/// Snapshot layout version this build reads and writes.
pub const VERSION: u32 = 1;

/// A saved game as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Always [`FORMAT`].
    pub format: String,
    /// Layout version.
    pub version: u32,
    /// When the snapshot was taken. Informational only.
    pub saved_at: DateTime<Utc>,
    /// The game itself.
    pub game: World,
}

/// Just enough of a snapshot to tell whether the rest is worth parsing.
#[derive(Deserialize)]
struct Header {
    format: String,
    version: u32,
}

impl Snapshot {
    /// Wrap a world, stamped with the current time.
    pub fn new(world: World) -> Self {
        Self {
            format: FORMAT.to_string(),
            version: VERSION,
            saved_at: Utc::now(),
            game: world,
        }
    }

    /// Parse and validate snapshot text.
    pub fn parse(text: &str) -> GameResult<Self> {
        let header: Header = serde_json::from_str(text)?;
        if header.format != FORMAT {
            return Err(GameError::BadFormat(header.format));
        }
        if header.version != VERSION {
            return Err(GameError::Version {
                expected: VERSION,
                found: header.version,
            });
        }
        let snapshot: Snapshot = serde_json::from_str(text)?;
        snapshot.game.validate()?;
        Ok(snapshot)
    }

    /// Read and validate a snapshot file.
    pub fn read(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        Self::parse(&text)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn write(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| GameError::io(path, e))
    }
}

/// Save a world to `path`.
pub fn save(path: impl AsRef<Path>, world: &World) -> GameResult<()> {
    let path = path.as_ref();
    Snapshot::new(world.clone()).write(path)?;
    debug!("snapshot written to {}", path.display());
    Ok(())
}

/// Load a validated world from `path`.
pub fn load(path: impl AsRef<Path>) -> GameResult<World> {
    let path = path.as_ref();
    let snapshot = Snapshot::read(path)?;
    debug!(
        "snapshot read from {} (saved {})",
        path.display(),
        snapshot.saved_at.to_rfc3339()
    );
    Ok(snapshot.game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::messages;
    use colossal_core::objects::LAMP;

    fn played() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(101).with_novice_prompt(false));
        game.opening();
        game.process("in");
        game.process("get lamp");
        game
    }

    #[test]
    fn round_trip_keeps_the_whole_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cave.json");
        let game = played();
        save(&path, game.world()).unwrap();
        let back = load(&path).unwrap();
        assert_eq!(&back, game.world());
        assert!(back.toting(LAMP));
    }

    #[test]
    fn header_is_checked_before_the_body() {
        let text = r#"{"format": "something-else", "version": 1}"#;
        assert!(matches!(Snapshot::parse(text), Err(GameError::BadFormat(f)) if f == "something-else"));
        let text = r#"{"format": "colossal-adventure", "version": 7}"#;
        assert!(matches!(
            Snapshot::parse(text),
            Err(GameError::Version { expected: 1, found: 7 })
        ));
        assert!(matches!(Snapshot::parse("not json"), Err(GameError::Json(_))));
    }

    #[test]
    fn corrupt_location_is_rejected() {
        let game = played();
        let mut value = serde_json::to_value(Snapshot::new(game.world().clone())).unwrap();
        value["game"]["loc"] = serde_json::json!(9999);
        let text = value.to_string();
        assert!(matches!(Snapshot::parse(&text), Err(GameError::Invalid(_))));
    }

    #[test]
    fn failed_restore_leaves_the_game_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.json");
        fs::write(&path, "{}").unwrap();

        let mut game = played();
        game.process("out");
        let before = game.world().clone();
        let text = game.process("resume");
        assert!(text.starts_with(messages::RESUME_ABANDON));
        game.process("yes");
        let text = game.process(path.to_str().unwrap());
        assert!(text.starts_with("Can't"), "{text}");
        assert_eq!(game.world().loc, before.loc);
        assert!(game.world().toting(LAMP));
        assert!(!game.is_over());
    }

    #[test]
    fn suspend_then_restore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let mut game = played();
        game.process("suspend");
        game.process("yes");
        let text = game.process(path.to_str().unwrap());
        assert_eq!(text, messages::RESUME_HELP);
        assert!(game.is_over());

        let restored = Game::restore(GameConfig::new(), &path).unwrap();
        assert_eq!(restored.world().saved, 5);
        assert!(restored.world().toting(LAMP));
    }
}
