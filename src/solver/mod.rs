use crate::error::{Endpoint, Result, SearchError};
use crate::search::{SearchResult, SearchSpace};

use core::fmt;
use log::{debug, warn};
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

pub trait Solver {
    /// Short lowercase name used in logs and on the wire.
    fn name(&self) -> &'static str;

    /// Runs the search without checking that the endpoints belong to `space`. Prefer
    /// [find_path](Self::find_path), which does.
    fn search_unchecked<S: SearchSpace>(
        &self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> SearchResult<S::Node>;

    /// Searches from start to goal. An unreachable goal is not an error and gives an empty
    /// path together with every node that was expanded before the frontier ran dry.
    fn find_path<S: SearchSpace>(
        &self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> Result<SearchResult<S::Node>> {
        for (endpoint, node) in [(Endpoint::Start, start), (Endpoint::End, goal)] {
            if !space.contains(node) {
                warn!("{} rejected {} node {:?}", self.name(), endpoint, node);
                return Err(SearchError::InvalidEndpoint {
                    endpoint,
                    node: format!("{:?}", node),
                });
            }
        }
        let result = self.search_unchecked(space, start, goal);
        debug!(
            "{} from {:?} to {:?}: expanded {} nodes, path of {} nodes",
            self.name(),
            start,
            goal,
            result.visited.len(),
            result.path.len()
        );
        Ok(result)
    }
}

/// The interchangeable search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dfs => DfsSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
            Algorithm::Astar => AstarSolver::new().name(),
        }
    }

    /// Runs the selected strategy with its default settings.
    pub fn find_path<S: SearchSpace>(
        self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> Result<SearchResult<S::Node>> {
        match self {
            Algorithm::Bfs => BfsSolver.find_path(space, start, goal),
            Algorithm::Dfs => DfsSolver.find_path(space, start, goal),
            Algorithm::Dijkstra => DijkstraSolver.find_path(space, start, goal),
            Algorithm::Astar => AstarSolver::new().find_path(space, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_owned()))
    }
}
