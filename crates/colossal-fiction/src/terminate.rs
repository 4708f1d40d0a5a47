//! End of game and ranking.

use colossal_core::hints::CLASSES;
use colossal_core::messages;
use colossal_sim::{Termination, score};
use log::debug;

use crate::game::Game;

impl Game {
    /// Finish the game: final score, rank and the points to the next rank.
    pub(crate) fn terminate(&mut self, mode: Termination) {
        let total = score(&self.world, mode);
        let (points, max) = (total.points, total.max);
        debug!("game over ({mode:?}) with {points} of {max} points");

        if self.world.trnluz != 0 && points + self.world.trnluz + 1 >= max {
            self.say(messages::TOOK_LONG);
        }
        if self.world.saved != 0 && points + self.world.saved + 1 >= max {
            self.say(messages::WITHOUT_SUSPENDS);
        }
        self.say(messages::total_score(points, max, self.world.turns));

        match CLASSES.iter().position(|class| points <= class.threshold) {
            Some(rank) => {
                self.say(CLASSES[rank].message);
                if rank + 1 < CLASSES.len() {
                    self.say(messages::next_higher(CLASSES[rank].threshold + 1 - points));
                } else {
                    self.say(messages::NO_HIGHER);
                }
            }
            None => self.say(messages::OFF_SCALE),
        }

        self.questions.clear();
        self.pending_verb = None;
        self.over = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::Game;
    use colossal_core::hints::CLASSES;
    use colossal_core::messages;
    use colossal_sim::Termination;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new().with_seed(91).with_novice_prompt(false));
        game.opening();
        game
    }

    #[test]
    fn quitting_at_once_ranks_an_amateur() {
        let mut game = game();
        game.terminate(Termination::Quit);
        let text = game.out.take();
        insta::assert_snapshot!(text, @r"
        You scored 32 out of a possible 430, using 0 turns.
        You are obviously a rank amateur.  Better luck next time.
        To achieve the next higher rating, you need 14 more points.
        ");
        assert!(game.is_over());
    }

    #[test]
    fn endgame_counts_the_bonus() {
        let mut game = game();
        game.terminate(Termination::EndGame);
        let text = game.out.take();
        assert!(text.starts_with(&messages::total_score(36, 430, 0)));
        assert!(text.contains(CLASSES[0].message));
    }

    #[test]
    fn suspending_costs_a_note() {
        let mut game = game();
        game.world.saved = 5;
        game.world.turns = 3;
        game.terminate(Termination::Quit);
        let text = game.out.take();
        assert!(text.starts_with(&messages::total_score(27, 430, 3)));
        assert!(!text.contains(messages::WITHOUT_SUSPENDS));
    }
}
