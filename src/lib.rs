//! # pathfinder_engine
//!
//! Path search for visualization front-ends. Four interchangeable strategies,
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), run over either a square
//! 4-connected grid with walls ([PathingGrid]) or an arbitrary graph of string labels
//! ([LabelGraph]). Every search reports the path it found together with the nodes it
//! expanded, in expansion order, so the exploration can be played back step by step.
//!
//! All edges have unit cost. Each search allocates its own frontier and bookkeeping and
//! shares nothing with other searches.
pub mod error;
pub mod label_graph;
pub mod pathing_grid;
pub mod query;
pub mod search;
pub mod solver;

pub use error::{Endpoint, Result, SearchError};
pub use label_graph::LabelGraph;
pub use pathing_grid::PathingGrid;
pub use query::{GraphQuery, GridQuery};
pub use search::{path_is_connected, SearchResult, SearchSpace};
pub use solver::{Algorithm, Solver};

/// Cost of traversing any edge.
pub const UNIT_COST: i32 = 1;
/// Side length used when a grid query does not state one.
pub const DEFAULT_GRID_SIZE: usize = 20;
