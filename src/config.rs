use std::fmt::{self, Display, Formatter};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `height width` header followed by rows of cell tokens
    Grid,
    Xsb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bidirectional,
    IterativeDeepening,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bidirectional => write!(f, "bidirectional"),
            Method::IterativeDeepening => write!(f, "iterative-deepening"),
        }
    }
}

/// Bounds for iterative deepening.
///
/// Depth limits `min_depth..max_depth` are tried in order (upper bound exclusive).
/// `time_budget` applies to each limit separately, exceeding it aborts the whole search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthLimits {
    pub min_depth: u32,
    pub max_depth: u32,
    pub time_budget: Duration,
}

impl Default for DepthLimits {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: 50,
            time_budget: Duration::from_secs(30),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    pub limits: DepthLimits,
    /// Longest parent chain accepted when reconstructing a path.
    pub max_path_len: usize,
}

impl Config {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            limits: DepthLimits::default(),
            max_path_len: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Method::Bidirectional)
    }
}
