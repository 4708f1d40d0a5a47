//! The context every turn mechanism runs in: the world plus its narration.

use colossal_core::ObjectId;
use colossal_core::objects;

use crate::narration::Narration;
use crate::world::World;

/// Mutable context handed to every mechanism that can both change the world
/// and say something about it.
pub struct SimContext<'a> {
    /// The game being played.
    pub world: &'a mut World,
    /// Narration for the current turn.
    pub out: &'a mut Narration,
}

impl<'a> SimContext<'a> {
    /// Bundle a world and its narration buffer.
    pub fn new(world: &'a mut World, out: &'a mut Narration) -> Self {
        Self { world, out }
    }

    /// Add a message to this turn's narration.
    pub fn say(&mut self, text: impl Into<String>) {
        self.out.say(text);
    }

    /// Set an object's state and print its message for entering that state.
    pub fn state_change(&mut self, obj: ObjectId, state: i32) {
        self.world.set_state(obj, state);
        let change = usize::try_from(state)
            .ok()
            .and_then(|i| objects::object(obj).changes.get(i))
            .copied()
            .unwrap_or("");
        self.out.say(change);
    }

    /// Print an object's room description for a given state.
    pub fn describe_object(&mut self, obj: ObjectId, state: i32) {
        let text = usize::try_from(state)
            .ok()
            .and_then(|i| objects::object(obj).descriptions.get(i))
            .copied()
            .unwrap_or("");
        self.out.say(text);
    }

    /// True `n` percent of the time, drawing from the game's generator.
    pub fn pct(&mut self, n: i32) -> bool {
        self.world.rng.pct(n)
    }

    /// Uniform draw in `0..range` from the game's generator.
    pub fn randrange(&mut self, range: i32) -> i32 {
        self.world.rng.randrange(range)
    }
}
