//! Scoring.

use colossal_core::ObjectId;
use colossal_core::hints::{HINTS, NDEATHS};
use colossal_core::locations::{BUILDING, WITTSEND};
use colossal_core::objects::{self, CHEST, MAGAZINE};
use serde::{Deserialize, Serialize};

use crate::world::{Bonus, Place, Prop, World};

/// How the game is being wound up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Played to the end: killed out, closed, or blown up.
    EndGame,
    /// The player quit.
    Quit,
    /// The SCORE command asked for a running total.
    Score,
}

/// A score and the most the game could have awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Points earned, net of penalties.
    pub points: i32,
    /// Highest possible total.
    pub max: i32,
}

fn treasure_value(obj: ObjectId) -> i32 {
    if obj == CHEST {
        14
    } else if obj > CHEST {
        16
    } else {
        12
    }
}

/// Score the game as it stands.
pub fn score(world: &World, mode: Termination) -> Score {
    let mut points = 0;
    let mut max = 0;

    for obj in ObjectId::all().filter(|obj| objects::object(*obj).treasure) {
        let value = treasure_value(obj);
        let prop = world.prop(obj);
        if !prop.is_hidden() {
            points += 2;
        }
        if world.place(obj) == Place::At(BUILDING) && prop == Prop::Visible(0) {
            points += value - 2;
        }
        max += value;
    }

    let lives = NDEATHS as i32;
    points += (lives - world.numdie) * 10;
    max += lives * 10;
    if mode == Termination::EndGame {
        points += 4;
    }
    max += 4;
    if world.dflag != 0 {
        points += 25;
    }
    max += 25;
    if world.closing {
        points += 25;
    }
    max += 25;
    if world.closed {
        points += match world.bonus {
            Bonus::None => 10,
            Bonus::Splatter => 25,
            Bonus::Defeat => 30,
            Bonus::Victory => 45,
        };
    }
    max += 45;
    if world.place(MAGAZINE) == Place::At(WITTSEND) {
        points += 1;
    }
    max += 1;
    points += 2;
    max += 2;

    for (hint, state) in HINTS.iter().zip(&world.hints) {
        if state.used {
            points -= hint.penalty;
        }
    }
    if world.novice {
        points -= 5;
    }
    if world.clshnt {
        points -= 10;
    }
    points -= world.trnluz + world.saved;

    Score { points, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colossal_core::objects::{NUGGET, STATUETTE};
    use proptest::prelude::*;

    #[test]
    fn fresh_game_scores_survival_and_rounding() {
        let world = World::new(1);
        assert_eq!(score(&world, Termination::Quit), Score { points: 32, max: 430 });
        assert_eq!(score(&world, Termination::EndGame).points, 36);
    }

    #[test]
    fn deposited_treasures_count_by_tier() {
        let mut world = World::new(1);
        let base = score(&world, Termination::Quit).points;
        world.set_prop(NUGGET, Prop::Visible(0));
        assert_eq!(score(&world, Termination::Quit).points, base + 2);
        world.drop_at(NUGGET, BUILDING);
        assert_eq!(score(&world, Termination::Quit).points, base + 12);
        world.set_prop(STATUETTE, Prop::Visible(0));
        world.drop_at(STATUETTE, BUILDING);
        assert_eq!(score(&world, Termination::Quit).points, base + 28);
    }

    #[test]
    fn penalties_are_deducted() {
        let mut world = World::new(1);
        let base = score(&world, Termination::Quit).points;
        world.novice = true;
        world.clshnt = true;
        world.hints[3].used = true;
        world.trnluz = 2;
        world.saved = 5;
        assert_eq!(score(&world, Termination::Quit).points, base - 5 - 10 - 4 - 2 - 5);
    }

    #[test]
    fn endgame_bonus_needs_closed() {
        let mut world = World::new(1);
        world.bonus = Bonus::Victory;
        let open = score(&world, Termination::EndGame).points;
        world.closed = true;
        assert_eq!(score(&world, Termination::EndGame).points, open + 45);
    }

    proptest! {
        #[test]
        fn depositing_never_lowers_the_score(picks in prop::collection::vec(0usize..20, 0..20)) {
            let mut world = World::new(9);
            let treasures: Vec<ObjectId> = ObjectId::all()
                .filter(|obj| objects::object(*obj).treasure)
                .collect();
            let mut last = score(&world, Termination::Quit).points;
            for pick in picks {
                let obj = treasures[pick % treasures.len()];
                world.set_prop(obj, Prop::Visible(0));
                world.drop_at(obj, BUILDING);
                let now = score(&world, Termination::Quit).points;
                prop_assert!(now >= last);
                last = now;
            }
        }

        #[test]
        fn dying_never_raises_the_score(deaths in 0i32..3) {
            let mut world = World::new(9);
            let alive = score(&world, Termination::EndGame).points;
            world.numdie = deaths;
            prop_assert_eq!(score(&world, Termination::EndGame).points, alive - 10 * deaths);
        }
    }
}
