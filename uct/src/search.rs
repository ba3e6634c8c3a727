use std::collections::BTreeMap;

use log::{debug, log_enabled, trace, warn, Level};

use crate::{
    agent::Agent,
    config::UctConfig,
    error::{ContractViolation, UctError},
    game::{Game, Player},
    node::Node,
    strategy::Strategy,
};

/// Probability of each action taken from the root, proportional to visits.
pub type Distribution<A> = BTreeMap<A, f32>;

pub struct Uct<G: Game, S: Strategy<G>> {
    config: UctConfig,
    strategy: S,
    root: Option<Node<G>>,
    last_decision: Option<(G::Action, Distribution<G::Action>)>,
}

impl<G: Game, S: Strategy<G>> Uct<G, S> {
    pub fn new(config: UctConfig, strategy: S) -> Result<Self, UctError> {
        config.validate()?;
        Ok(Uct {
            config,
            strategy,
            root: None,
            last_decision: None,
        })
    }

    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The tree retained from previous decisions.
    pub fn root(&self) -> Option<&Node<G>> {
        self.root.as_ref()
    }

    /// Distribution of the last successful decision.
    pub fn distribution(&self) -> Option<&Distribution<G::Action>> {
        self.last_decision.as_ref().map(|(_, distribution)| distribution)
    }

    pub fn last_action(&self) -> Option<G::Action> {
        self.last_decision.as_ref().map(|(action, _)| *action)
    }

    /// Drop the retained tree.
    pub fn reset(&mut self) {
        self.root = None;
    }

    /// Follow a move made outside of the search (usually the opponent's
    /// reply) so that the next decision starts from the matching sub-tree.
    pub fn advance(&mut self, action: G::Action) {
        self.root = self.root.take().and_then(|root| root.play(action));
        match &self.root {
            Some(root) => debug!("advanced by {action:?}, reusing {} visits", root.visits()),
            None => debug!("advanced by {action:?}, no sub-tree to reuse"),
        }
    }

    /// Search the position and pick the most visited move.
    pub fn decide(&mut self, game: &G) -> Result<(G::Action, Distribution<G::Action>), UctError> {
        self.last_decision = None;
        let root = self.search(game)?;
        self.conclude(root)
    }

    /// Run all simulations for `game`. On error the tree is discarded.
    pub(crate) fn search(&mut self, game: &G) -> Result<Node<G>, UctError> {
        let mut root = match self.root.take() {
            Some(mut root) if root.matches_moves(&game.available_moves()) => {
                root.set_state(game.clone());
                root
            }
            Some(_) => {
                debug!("retained tree does not match the position, searching from scratch");
                Node::new(game.clone())
            }
            None => Node::new(game.clone()),
        };

        if !root.is_expanded() && !self.expand(&mut root)? {
            return Err(UctError::NoLegalActions);
        }

        for i in 0..self.config.simulations {
            let (depth, value) = self.simulate(&mut root, game)?;
            trace!("simulation {i}: depth {depth}, value {value}");
        }
        Ok(root)
    }

    /// Pick the action and keep the sub-tree behind it if configured to.
    pub(crate) fn conclude(
        &mut self,
        root: Node<G>,
    ) -> Result<(G::Action, Distribution<G::Action>), UctError> {
        let distribution = root.distribution();
        let action = root.most_visited().ok_or(UctError::NoLegalActions)?;

        if log_enabled!(Level::Debug) {
            debug!("search tree:\n{}", root.debug(Some(5)));
        }
        debug!(
            "decided {action:?} after {} simulations ({} root visits)",
            self.config.simulations,
            root.visits()
        );

        self.root = if self.config.reuse_tree {
            root.play(action)
        } else {
            None
        };
        self.last_decision = Some((action, distribution.clone()));
        Ok((action, distribution))
    }

    /// One select, expand-or-rollout, backpropagate cycle.
    /// Returns the length of the path and the value that was backpropagated.
    fn simulate(&mut self, root: &mut Node<G>, game: &G) -> Result<(usize, f32), UctError> {
        let mut scratch = game.clone();
        let mut path = Vec::new();

        // Select.
        let mut node = &mut *root;
        while node.is_expanded() {
            let action = self.select(node)?;
            scratch.play(action);
            path.push(action);
            node = node.child_mut(action).expect("selected action must have a child");
        }

        // Roll out from new leaves, expand leaves on their second visit.
        let value = if node.visits() == 0 {
            self.rollout(node, &mut scratch)?
        } else if self.expand(node)? {
            let action = self.select(node)?;
            scratch.play(action);
            path.push(action);
            let child = node.child_mut(action).expect("selected action must have a child");
            self.rollout(child, &mut scratch)?
        } else {
            // Nothing to expand, the game is over here.
            self.rollout(node, &mut scratch)?
        };

        root.backpropagate(&mut path.iter().copied(), value);
        Ok((path.len(), value))
    }

    /// Highest upper bound for the maximizer, lowest lower bound for the
    /// minimizer. Unvisited children come first, lowest action wins ties.
    fn select(&self, node: &Node<G>) -> Result<G::Action, UctError> {
        let maximizing = node.state().player_turn() == Player::Max;
        let c = self.config.exploration;

        let mut best: Option<(G::Action, f32)> = None;
        for (action, child) in node.children() {
            let score = match (maximizing, child.visits()) {
                (true, 0) => f32::INFINITY,
                (false, 0) => f32::NEG_INFINITY,
                (true, _) => self.strategy.ucb_max(node, action, c),
                (false, _) => self.strategy.ucb_min(node, action, c),
            };
            if score.is_nan() {
                warn!("confidence bound of {action:?} is NaN");
                return Err(ContractViolation::NanScore.into());
            }
            let better = best.map_or(true, |(_, best_score)| {
                if maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            });
            if better {
                best = Some((action, score));
            }
        }
        best.map(|(action, _)| action).ok_or(UctError::NoLegalActions)
    }

    /// Expand a leaf. Returns whether it got any children.
    fn expand(&mut self, node: &mut Node<G>) -> Result<bool, UctError> {
        let children = self.strategy.expand_children(node);
        if children.is_empty() {
            let legal = node.state().available_moves().len();
            if legal > 0 {
                warn!("expansion produced no children for a position with {legal} legal moves");
                return Err(ContractViolation::EmptyExpansion { legal }.into());
            }
            return Ok(false);
        }
        node.expand(children);
        Ok(true)
    }

    fn rollout(&mut self, node: &Node<G>, scratch: &mut G) -> Result<f32, UctError> {
        let value = self.strategy.rollout(node, scratch);
        let range = self.strategy.value_range();
        if range.contains(&value) {
            Ok(value)
        } else {
            warn!("rollout returned {value}, expected a value in {range:?}");
            Err(ContractViolation::RolloutValue {
                value,
                min: *range.start(),
                max: *range.end(),
            }
            .into())
        }
    }
}

impl<G: Game, S: Strategy<G>> Agent<G> for Uct<G, S> {
    fn pick(&mut self, game: &G) -> Result<G::Action, UctError> {
        self.decide(game).map(|(action, _)| action)
    }

    fn observe(&mut self, action: G::Action) {
        self.advance(action);
    }

    fn name(&self) -> String {
        format!("uct({} simulations)", self.config.simulations)
    }
}
