//! Errors reported by the search entry points.

use std::fmt;
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Which end of a search a node was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Error type.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end node is a wall, lies outside the grid or is not a known label.
    #[error("{endpoint} node {node} is not part of the search space")]
    InvalidEndpoint { endpoint: Endpoint, node: String },
    #[error("unknown algorithm {0:?}, expected one of bfs, dfs, dijkstra, astar")]
    UnknownAlgorithm(String),
}
