//! Context-sensitive rewrites applied to a command before dispatch.

use colossal_core::locations::{AWKWARD, BIRDCHAMBER, COBBLE, PITTOP, SLIT, START, VALLEY};
use colossal_core::objects::{BIRD, CAGE, DOOR, GRATE, OIL, PLANT, WATER};
use colossal_core::{Motion, Verb, messages};
use colossal_sim::World;

use super::token::{Command, Word, WordClass};

/// Result of preprocessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preprocessed {
    /// The command was answered outright and goes no further.
    Answered(&'static str),
    /// The command, rewritten, ready for dispatch.
    Ready(Command),
}

fn grate_motion(world: &World) -> Option<Motion> {
    let loc = world.loc;
    if [START, VALLEY, SLIT].contains(&loc) {
        Some(Motion::Depression)
    } else if [COBBLE, AWKWARD, BIRDCHAMBER, PITTOP].contains(&loc) {
        Some(Motion::Entrance)
    } else {
        None
    }
}

/// Apply the rewrites, in order:
///
/// 1. `ENTER STREAM` or `ENTER WATER` is answered on the spot.
/// 2. Object followed by verb is turned round.
/// 3. `GRATE` in first place near the entrance becomes a motion toward it.
/// 4. `WATER PLANT` and the like become `POUR` when the target is here.
/// 5. `CAGE BIRD` with both present becomes `CARRY BIRD`.
pub fn preprocess(mut cmd: Command, world: &World) -> Preprocessed {
    let second_class = cmd.second.as_ref().map(|w| w.class);

    if cmd.first.class == WordClass::Motion(Motion::Enter)
        && matches!(
            second_class,
            Some(WordClass::Motion(Motion::Stream) | WordClass::Object(WATER))
        )
    {
        return Preprocessed::Answered(if world.liqloc(world.loc) == Some(WATER) {
            messages::FEET_WET
        } else {
            messages::WHERE_QUERY
        });
    }

    if let (
        WordClass::Object(_),
        Some(
            second @ Word {
                class: WordClass::Action(_),
                ..
            },
        ),
    ) = (cmd.first.class, cmd.second.as_mut())
    {
        std::mem::swap(&mut cmd.first, second);
    }

    if let (WordClass::Object(GRATE), Some(motion)) = (cmd.first.class, grate_motion(world)) {
        cmd.first.class = WordClass::Motion(motion);
    }

    let first_obj = cmd.first.object();
    let second_obj = cmd.second.as_ref().and_then(Word::object);
    let target_here = second_obj.is_some_and(|obj| world.at(obj));
    if let (Some(liquid @ (WATER | OIL)), Some(PLANT | DOOR), true) =
        (first_obj, second_obj, target_here)
    {
        let liquid_word = Word {
            raw: std::mem::take(&mut cmd.first.raw),
            class: WordClass::Object(liquid),
        };
        cmd.first = Word {
            raw: "pour".to_string(),
            class: WordClass::Action(Verb::Pour),
        };
        cmd.second = Some(liquid_word);
    }

    if first_obj == Some(CAGE) && second_obj == Some(BIRD) && world.here(CAGE) && world.here(BIRD) {
        cmd.first.class = WordClass::Action(Verb::Carry);
    }

    Preprocessed::Ready(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{Tokens, tokenize};
    use colossal_core::locations::{BIRDCHAMBER, BUILDING, DEBRIS, WESTPIT};
    use colossal_core::objects::LAMP;

    fn run(line: &str, world: &World) -> Preprocessed {
        match tokenize(line, &world.zzword, false) {
            Tokens::Command(cmd) => preprocess(cmd, world),
            other => panic!("expected a command, got {other:?}"),
        }
    }

    fn ready(line: &str, world: &World) -> Command {
        match run(line, world) {
            Preprocessed::Ready(cmd) => cmd,
            other => panic!("expected a command, got {other:?}"),
        }
    }

    #[test]
    fn entering_the_stream() {
        let mut world = World::new(1);
        world.loc = BUILDING;
        assert_eq!(run("enter stream", &world), Preprocessed::Answered(messages::FEET_WET));
        world.loc = WESTPIT;
        assert_eq!(run("enter water", &world), Preprocessed::Answered(messages::WHERE_QUERY));
    }

    #[test]
    fn object_verb_is_swapped() {
        let world = World::new(1);
        let cmd = ready("lamp light", &world);
        assert_eq!(cmd.first.verb(), Some(Verb::Light));
        assert_eq!(cmd.second.and_then(|w| w.object()), Some(LAMP));
    }

    #[test]
    fn grate_becomes_a_motion_nearby() {
        let mut world = World::new(1);
        assert_eq!(ready("grate", &world).first.class, WordClass::Motion(Motion::Depression));
        world.loc = BIRDCHAMBER;
        assert_eq!(ready("grate", &world).first.class, WordClass::Motion(Motion::Entrance));
        world.loc = PITTOP;
        assert_eq!(ready("grate", &world).first.class, WordClass::Motion(Motion::Entrance));
        world.loc = DEBRIS;
        assert_eq!(ready("grate", &world).first.class, WordClass::Object(GRATE));
        world.loc = BUILDING;
        assert_eq!(ready("grate", &world).first.class, WordClass::Object(GRATE));
    }

    #[test]
    fn grate_is_promoted_with_a_second_word() {
        let world = World::new(1);
        let cmd = ready("grate north", &world);
        assert_eq!(cmd.first.class, WordClass::Motion(Motion::Depression));
        assert_eq!(cmd.second.map(|w| w.class), Some(WordClass::Motion(Motion::North)));
    }

    #[test]
    fn watering_the_plant_needs_the_plant() {
        let mut world = World::new(1);
        let cmd = ready("water plant", &world);
        assert_eq!(cmd.first.object(), Some(WATER));

        world.loc = WESTPIT;
        let cmd = ready("water plant", &world);
        assert_eq!(cmd.first.verb(), Some(Verb::Pour));
        assert_eq!(cmd.first.raw, "pour");
        let second = cmd.second.expect("liquid word");
        assert_eq!(second.object(), Some(WATER));
        assert_eq!(second.raw, "water");
    }

    #[test]
    fn caging_the_bird() {
        let mut world = World::new(1);
        world.loc = BIRDCHAMBER;
        world.carry(CAGE);
        let cmd = ready("cage bird", &world);
        assert_eq!(cmd.first.verb(), Some(Verb::Carry));
        assert_eq!(cmd.second.and_then(|w| w.object()), Some(BIRD));
    }
}
