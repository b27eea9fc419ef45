mod backtracking;
mod bidirectional;
mod engine;
mod iterative_deepening;
mod node;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use crate::config::{Config, Method};
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

pub use self::engine::SearchEngine;
pub use self::node::Node;
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// A single depth limit of iterative deepening took longer than the budget.
    TimeExceeded(Duration),
    /// A parent chain was longer than allowed.
    PathReconstructionOverflow(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::TimeExceeded(budget) => write!(
                f,
                "Time limit of {}.{:03} s exceeded",
                budget.as_secs(),
                budget.subsec_millis()
            ),
            SolverErr::PathReconstructionOverflow(max_len) => {
                write!(f, "Path reconstruction exceeded {} states", max_len)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// Start to goal inclusive, `None` if there is no solution.
    pub path_states: Option<Vec<State>>,
    pub moves: Option<Moves>,
    /// Forward stats for bidirectional search.
    pub stats: Stats,
    pub backward_stats: Option<Stats>,
    pub method: Method,
}

impl SolverOk {
    fn new(
        solution: Option<(Vec<State>, Moves)>,
        stats: Stats,
        backward_stats: Option<Stats>,
        method: Method,
    ) -> Self {
        let (path_states, moves) = match solution {
            Some((states, moves)) => (Some(states), Some(moves)),
            None => (None, None),
        };
        Self {
            path_states,
            moves,
            stats,
            backward_stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves)?,
        }
        write!(f, "{:?}", self.stats)?;
        if let Some(ref backward_stats) = self.backward_stats {
            write!(f, "backward:\n{:?}", backward_stats)?;
        }
        Ok(())
    }
}

impl Solve for Level {
    fn solve(&self, config: Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

pub fn solve(level: &Level, config: Config) -> Result<SolverOk, SolverErr> {
    let mut engine = SearchEngine::new(level.map.clone(), level.state.clone());
    debug!("Solving using {}", config.method);

    match config.method {
        Method::Bidirectional => {
            let solution = match engine.run_bidirectional() {
                Some((forward, backward)) => Some(backtracking::bidirectional_solution(
                    &forward,
                    &backward,
                    config.max_path_len,
                )?),
                None => None,
            };
            Ok(SolverOk::new(
                solution,
                engine.stats,
                Some(engine.backward_stats),
                config.method,
            ))
        }
        Method::IterativeDeepening => {
            let limits = config.limits;
            let goal = engine.run_iterative_deepening(
                limits.min_depth,
                limits.max_depth,
                limits.time_budget,
            )?;
            let solution = match goal {
                Some(goal) => Some(backtracking::forward_solution(&goal, config.max_path_len)?),
                None => None,
            };
            Ok(SolverOk::new(solution, engine.stats, None, config.method))
        }
    }
}
