use std::{cmp::Reverse, collections::VecDeque};

use crate::{game::Game, node::Node};

impl<G: Game> Node<G> {
    pub fn debug(&self, limit: Option<usize>) -> String {
        const MAX_CONTINUATION_LEN: usize = 8;
        const MIN_VISIT_COUNT: u32 = 10;
        format!("action         visits     mean | continuation\n{}", {
            let mut edges: Vec<_> = self.edges().collect();
            edges.sort_by_key(|(_action, edge)| Reverse(edge.visits));
            edges
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|(action, edge)| {
                    let continuation = self
                        .child(*action)
                        .map(|child| child.continuation(MIN_VISIT_COUNT, MAX_CONTINUATION_LEN))
                        .unwrap_or_default()
                        .into_iter()
                        .map(|a| format!("{a:?}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    format!(
                        "{: <12} {: >8} {: >8.4} | {}\n",
                        format!("{action:?}"),
                        edge.visits,
                        edge.q_value,
                        continuation,
                    )
                })
                .collect::<String>()
        })
    }

    /// The most visited line of play below this node.
    pub fn continuation(&self, min_visit_count: u32, depth: usize) -> VecDeque<G::Action> {
        if depth == 0 || self.visits() <= min_visit_count {
            return VecDeque::new();
        }
        match self.most_visited() {
            Some(action) => {
                let mut actions = self
                    .child(action)
                    .map(|child| child.continuation(min_visit_count, depth - 1))
                    .unwrap_or_default();
                actions.push_front(action);
                actions
            }
            None => VecDeque::new(),
        }
    }
}
