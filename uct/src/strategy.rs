use std::ops::RangeInclusive;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    exploration::{lower_confidence_bound, upper_confidence_bound},
    game::Game,
    node::Node,
};

/// The pluggable parts of a UCT variant.
///
/// Values are always from the maximizer's perspective. The search owns the
/// tree; a strategy only ever sees nodes by shared reference.
pub trait Strategy<G: Game> {
    /// The children of a leaf, one per legal move, each with the position
    /// reached by playing that move.
    fn expand_children(&mut self, node: &Node<G>) -> Vec<(G::Action, G)> {
        let state = node.state();
        state
            .available_moves()
            .into_iter()
            .map(|action| {
                let mut child = state.clone();
                child.play(action);
                (action, child)
            })
            .collect()
    }

    /// Estimate the outcome of the game from `scratch`, which holds the
    /// position reached by the simulation so far. Must also handle positions
    /// that are already over.
    fn rollout(&mut self, node: &Node<G>, scratch: &mut G) -> f32;

    /// Score of `action` when the maximizer is to move at `node`.
    fn ucb_max(&self, node: &Node<G>, action: G::Action, c: f32) -> f32 {
        upper_confidence_bound(
            node.q_a(action),
            c,
            node.visits() as f32,
            node.n_a(action) as f32,
        )
    }

    /// Score of `action` when the minimizer is to move at `node`.
    fn ucb_min(&self, node: &Node<G>, action: G::Action, c: f32) -> f32 {
        lower_confidence_bound(
            node.q_a(action),
            c,
            node.visits() as f32,
            node.n_a(action) as f32,
        )
    }

    /// Values [`Strategy::rollout`] is allowed to return.
    fn value_range(&self) -> RangeInclusive<f32> {
        -1.0..=1.0
    }
}

/// Canonical UCT: play uniformly random moves until the game ends.
pub struct RandomRollout<R: Rng = StdRng> {
    rng: R,
}

impl RandomRollout<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomRollout {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRollout<StdRng> {
    fn default() -> Self {
        RandomRollout {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomRollout<R> {
    pub fn new(rng: R) -> Self {
        RandomRollout { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for RandomRollout<R> {
    fn rollout(&mut self, _node: &Node<G>, scratch: &mut G) -> f32 {
        loop {
            let result = scratch.result();
            if !result.is_ongoing() {
                return result.value();
            }
            match scratch.available_moves().choose(&mut self.rng) {
                Some(&action) => scratch.play(action),
                None => return result.value(),
            }
        }
    }
}
