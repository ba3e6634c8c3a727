use std::collections::BTreeMap;

use crate::{game::Game, search::Distribution};

/// Statistics of one action taken from a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edge {
    pub visits: u32,  // N(s, a)
    pub q_value: f32, // Q(s, a)
}

impl Edge {
    fn update(&mut self, value: f32) {
        let scaled_value = self.q_value * self.visits as f32;
        self.visits += 1;
        self.q_value = (scaled_value + value) / self.visits as f32;
    }
}

#[derive(Debug)]
pub struct Node<G: Game> {
    state: G,
    visits: u32, // N(s)
    edges: BTreeMap<G::Action, Edge>,
    children: BTreeMap<G::Action, Node<G>>,
}

impl<G: Game> Node<G> {
    pub fn new(state: G) -> Self {
        Node {
            state,
            visits: 0,
            edges: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> &G {
        &self.state
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = (G::Action, &Node<G>)> {
        self.children.iter().map(|(action, child)| (*action, child))
    }

    pub fn child(&self, action: G::Action) -> Option<&Node<G>> {
        self.children.get(&action)
    }

    /// Actions taken from this node so far, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (G::Action, &Edge)> {
        self.edges.iter().map(|(action, edge)| (*action, edge))
    }

    pub fn edge(&self, action: G::Action) -> Option<&Edge> {
        self.edges.get(&action)
    }

    pub fn n_a(&self, action: G::Action) -> u32 {
        self.edge(action).map_or(0, |edge| edge.visits)
    }

    pub fn q_a(&self, action: G::Action) -> f32 {
        self.edge(action).map_or(0.0, |edge| edge.q_value)
    }

    /// The child with the most visits, lowest action on ties.
    pub fn most_visited(&self) -> Option<G::Action> {
        let mut best: Option<(G::Action, u32)> = None;
        for (action, child) in self.children() {
            if best.map_or(true, |(_, visits)| child.visits > visits) {
                best = Some((action, child.visits));
            }
        }
        best.map(|(action, _)| action)
    }

    /// Visit counts of the actions taken from this node, normalized.
    pub fn distribution(&self) -> Distribution<G::Action> {
        let total: u32 = self.edges.values().map(|edge| edge.visits).sum();
        if total == 0 {
            return Distribution::new();
        }
        self.edges
            .iter()
            .map(|(action, edge)| (*action, edge.visits as f32 / total as f32))
            .collect()
    }

    /// Whether the children (if any) are exactly the given legal moves.
    pub(crate) fn matches_moves(&self, moves: &[G::Action]) -> bool {
        if !self.is_expanded() {
            return true;
        }
        let mut moves = moves.to_vec();
        moves.sort_unstable();
        moves.dedup();
        self.children.keys().copied().eq(moves)
    }

    pub(crate) fn set_state(&mut self, state: G) {
        self.state = state;
    }

    pub(crate) fn expand(&mut self, children: Vec<(G::Action, G)>) {
        debug_assert!(!self.is_expanded(), "tried to expand an expanded node");
        self.children = children
            .into_iter()
            .map(|(action, state)| (action, Node::new(state)))
            .collect();
    }

    pub(crate) fn child_mut(&mut self, action: G::Action) -> Option<&mut Node<G>> {
        self.children.get_mut(&action)
    }

    /// Count a visit, crediting `value` to the action taken from here if any.
    pub(crate) fn record(&mut self, action: Option<G::Action>, value: f32) {
        self.visits += 1;
        if let Some(action) = action {
            self.edges.entry(action).or_default().update(value);
        }
    }

    /// Walk the path of a simulation and update the statistics on the way.
    /// The node at the end of the path is where the rollout started.
    /// That node is counted in `visits` but no action is credited, so a
    /// non-root expanded node has one more visit than its action visits.
    pub(crate) fn backpropagate<I: Iterator<Item = G::Action>>(&mut self, path: &mut I, value: f32) {
        match path.next() {
            Some(action) => {
                self.record(Some(action), value);
                if let Some(child) = self.children.get_mut(&action) {
                    child.backpropagate(path, value);
                }
            }
            None => self.record(None, value),
        }
    }

    /// Get the sub-tree for the given move.
    /// This allows tree reuse.
    #[must_use]
    pub fn play(mut self, action: G::Action) -> Option<Node<G>> {
        self.children.remove(&action)
    }
}
