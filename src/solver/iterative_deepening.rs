use std::rc::Rc;
use std::time::{Duration, Instant};

use fnv::FnvHashSet;

use crate::map::Map;
use crate::state::State;

use super::engine::SearchEngine;
use super::node::Node;
use super::stats::Stats;
use super::SolverErr;

impl SearchEngine {
    /// Depth-limited search with limits `min_depth..max_depth`.
    ///
    /// Returns the first goal node found in depth-first order, which is not necessarily
    /// the shortest solution. Exceeding `time_budget` during any single limit aborts
    /// the whole search.
    pub fn run_iterative_deepening(
        &mut self,
        min_depth: u32,
        max_depth: u32,
        time_budget: Duration,
    ) -> Result<Option<Rc<Node>>, SolverErr> {
        self.reset_stats();

        if let Some(root) = self.start_is_goal() {
            self.stats.add_created(0);
            self.stats.add_unique_visited(0);
            return Ok(Some(root));
        }

        for limit in min_depth..max_depth {
            info!("Starting with depth limit {}", limit);

            let mut dls = DepthLimitedSearch {
                map: &self.map,
                stats: &mut self.stats,
                visited: FnvHashSet::default(),
                limit,
                started: Instant::now(),
                time_budget,
            };
            let root = Node::root(self.start.clone());
            dls.stats.add_created(0);
            if let Some(goal) = dls.search(&root, 0)? {
                debug!("Found goal at depth {} with limit {}", goal.depth, limit);
                return Ok(Some(goal));
            }
        }

        debug!("No solution with depth limits {}..{}", min_depth, max_depth);
        Ok(None)
    }
}

/// One iteration of iterative deepening.
///
/// `visited` only ever holds the states on the path from the root to the current node,
/// a state is removed again when the search backtracks out of it.
struct DepthLimitedSearch<'a> {
    map: &'a Map,
    stats: &'a mut Stats,
    visited: FnvHashSet<State>,
    limit: u32,
    started: Instant,
    time_budget: Duration,
}

impl<'a> DepthLimitedSearch<'a> {
    fn search(&mut self, node: &Rc<Node>, depth: u32) -> Result<Option<Rc<Node>>, SolverErr> {
        if self.started.elapsed() > self.time_budget {
            debug!("Time budget exceeded at depth {} with limit {}", depth, self.limit);
            return Err(SolverErr::TimeExceeded(self.time_budget));
        }

        if depth >= self.limit {
            return Ok(None);
        }
        if self.visited.contains(&node.state) {
            self.stats.add_reached_duplicate(depth);
            return Ok(None);
        }

        self.visited.insert(node.state.clone());
        if self.stats.add_unique_visited(depth) {
            info!("Visited new depth: {}", depth);
            trace!("{:?}", self.stats);
        }

        let children = Node::expand(node, node.state.successors(self.map, false));
        for child in &children {
            self.stats.add_created(child.depth);
        }
        for child in children {
            if child.state.is_goal(self.map.targets()) {
                return Ok(Some(child));
            }
            if let Some(goal) = self.search(&child, depth + 1)? {
                return Ok(Some(goal));
            }
        }

        // only this call's own entry, an ancestor with the same state keeps its mark
        self.visited.remove(&node.state);
        Ok(None)
    }
}
