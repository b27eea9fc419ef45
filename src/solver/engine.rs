use std::rc::Rc;

use crate::map::Map;
use crate::state::State;

use super::backtracking;
use super::node::Node;
use super::stats::Stats;
use super::SolverErr;

/// Searches the state space of one level.
///
/// The engine owns the map and the start state. Frontiers and visited tables
/// are created by each search call and dropped when it returns, only the stats
/// of the last run are kept.
#[derive(Debug)]
pub struct SearchEngine {
    pub(super) map: Map,
    pub(super) start: State,
    pub(super) stats: Stats,
    pub(super) backward_stats: Stats,
}

impl SearchEngine {
    pub fn new(map: Map, start: State) -> Self {
        Self {
            map,
            start,
            stats: Stats::new(),
            backward_stats: Stats::new(),
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    /// Stats of the last iterative deepening run or of the forward half of the last bidirectional run.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn backward_stats(&self) -> &Stats {
        &self.backward_stats
    }

    /// States from `node` back to its root (inclusive).
    pub fn reconstruct_path(node: &Node, max_len: usize) -> Result<Vec<State>, SolverErr> {
        let chain = backtracking::chain(node, max_len)?;
        Ok(chain.into_iter().map(|n| n.state.clone()).collect())
    }

    pub(super) fn reset_stats(&mut self) {
        self.stats = Stats::new();
        self.backward_stats = Stats::new();
    }

    pub(super) fn start_is_goal(&self) -> Option<Rc<Node>> {
        if self.start.is_goal(self.map.targets()) {
            debug!("Start state is already solved");
            Some(Node::root(self.start.clone()))
        } else {
            None
        }
    }
}
