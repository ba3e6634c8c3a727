use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::{agent::Agent, error::UctError, game::Game};

/// Baseline that plays a uniformly random legal move. Does no search.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn decide<G: Game>(&self, game: &G) -> Result<G::Action, UctError> {
        self.decide_with(game, &mut thread_rng())
    }

    pub fn decide_with<G: Game, R: Rng + ?Sized>(&self, game: &G, rng: &mut R) -> Result<G::Action, UctError> {
        game.available_moves()
            .choose(rng)
            .copied()
            .ok_or(UctError::NoLegalActions)
    }
}

impl<G: Game> Agent<G> for RandomPlayer {
    fn pick(&mut self, game: &G) -> Result<G::Action, UctError> {
        self.decide(game)
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}
