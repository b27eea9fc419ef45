use std::collections::VecDeque;
use std::rc::Rc;

use fnv::{FnvHashMap, FnvHashSet};

use crate::state::State;

use super::engine::SearchEngine;
use super::node::Node;
use super::stats::Stats;

type Visited = FnvHashMap<State, Rc<Node>>;

impl SearchEngine {
    /// Goal states from which the backward search starts: every box on a target
    /// and the agent next to one of them, where it stood after the last push.
    pub fn backward_roots(&self) -> Vec<State> {
        let boxes = self.map.targets().to_vec();

        let mut seen = FnvHashSet::default();
        let mut roots = Vec::new();
        for &target in self.map.targets() {
            for &agent in &target.neighbors() {
                if !self.map.is_passable(agent) || boxes.binary_search(&agent).is_ok() {
                    continue;
                }
                if seen.insert(agent) {
                    roots.push(State::new(agent, boxes.clone()));
                }
            }
        }
        roots
    }

    /// Breadth-first search from the start and backwards from the goal at the same time.
    ///
    /// Returns the forward and backward node of the first state reached from both sides,
    /// or `None` if there is no solution.
    pub fn run_bidirectional(&mut self) -> Option<(Rc<Node>, Rc<Node>)> {
        self.reset_stats();

        if let Some(root) = self.start_is_goal() {
            self.stats.add_created(0);
            self.stats.add_unique_visited(0);
            return Some((Rc::clone(&root), root));
        }

        let mut forward_frontier = VecDeque::new();
        let mut backward_frontier = VecDeque::new();
        let mut forward_visited = Visited::default();
        let mut backward_visited = Visited::default();

        self.stats.add_created(0);
        forward_frontier.push_back(Node::root(self.start.clone()));
        for state in self.backward_roots() {
            self.backward_stats.add_created(0);
            backward_frontier.push_back(Node::root(state));
        }
        debug!(
            "Bidirectional search started with {} backward roots",
            backward_frontier.len()
        );

        // Both frontiers advance one node per iteration. When one is exhausted its visited
        // table is complete so the other one keeps going until it finds a match or runs out too.
        while !forward_frontier.is_empty() || !backward_frontier.is_empty() {
            let forward = forward_frontier.pop_front();
            let backward = backward_frontier.pop_front();

            let forward_new = match forward {
                Some(ref node) => record(&mut forward_visited, &mut self.stats, node, "forward"),
                None => false,
            };
            let backward_new = match backward {
                Some(ref node) => {
                    record(&mut backward_visited, &mut self.backward_stats, node, "backward")
                }
                None => false,
            };

            if let Some(ref node) = backward {
                if let Some(met) = forward_visited.get(&node.state) {
                    debug!("Frontiers met at forward depth {}, backward depth {}", met.depth, node.depth);
                    return Some((Rc::clone(met), Rc::clone(node)));
                }
            }
            if let Some(ref node) = forward {
                if let Some(met) = backward_visited.get(&node.state) {
                    debug!("Frontiers met at forward depth {}, backward depth {}", node.depth, met.depth);
                    return Some((Rc::clone(node), Rc::clone(met)));
                }
            }

            // a duplicate's children were already queued by the first node with its state
            if let (true, Some(node)) = (forward_new, forward) {
                for child in Node::expand(&node, node.state.successors(&self.map, false)) {
                    self.stats.add_created(child.depth);
                    forward_frontier.push_back(child);
                }
            }
            if let (true, Some(node)) = (backward_new, backward) {
                for child in Node::expand(&node, node.state.successors(&self.map, true)) {
                    self.backward_stats.add_created(child.depth);
                    backward_frontier.push_back(child);
                }
            }
        }

        debug!(
            "Bidirectional search exhausted after {} forward and {} backward states",
            forward_visited.len(),
            backward_visited.len()
        );
        None
    }
}

/// Remembers the first node to reach a state. Returns false for duplicates.
fn record(visited: &mut Visited, stats: &mut Stats, node: &Rc<Node>, direction: &str) -> bool {
    if visited.contains_key(&node.state) {
        stats.add_reached_duplicate(node.depth);
        return false;
    }

    visited.insert(node.state.clone(), Rc::clone(node));
    if stats.add_unique_visited(node.depth) {
        info!("Visited new {} depth: {}", direction, node.depth);
        trace!("{:?}", stats);
    }
    true
}
