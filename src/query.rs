//! The two call shapes through which a request layer drives a search. Coordinates travel
//! as `(row, column)` pairs and labels as plain strings; results come back in the same form.
use crate::error::{Endpoint, Result, SearchError};
use crate::label_graph::LabelGraph;
use crate::pathing_grid::PathingGrid;
use crate::search::SearchResult;
use crate::solver::Algorithm;

use grid_util::point::Point;
use log::warn;

/// Search on a `grid_size` × `grid_size` grid with blocked cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridQuery {
    #[cfg_attr(feature = "serde", serde(default = "default_grid_size"))]
    pub grid_size: usize,
    pub start: (i32, i32),
    pub end: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<(i32, i32)>,
    pub algorithm: Algorithm,
}

#[cfg(feature = "serde")]
fn default_grid_size() -> usize {
    crate::DEFAULT_GRID_SIZE
}

fn to_point((row, column): (i32, i32)) -> Point {
    Point::new(row, column)
}

impl GridQuery {
    pub fn new(grid_size: usize, start: (i32, i32), end: (i32, i32), algorithm: Algorithm) -> Self {
        GridQuery {
            grid_size,
            start,
            end,
            walls: Vec::new(),
            algorithm,
        }
    }

    pub fn with_walls<I>(mut self, walls: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.walls.extend(walls);
        self
    }

    pub fn pathing_grid(&self) -> PathingGrid {
        PathingGrid::with_walls(self.grid_size, self.walls.iter().copied().map(to_point))
    }

    pub fn run(&self) -> Result<SearchResult<(i32, i32)>> {
        let pathing_grid = self.pathing_grid();
        let result =
            self.algorithm
                .find_path(&pathing_grid, &to_point(self.start), &to_point(self.end))?;
        Ok(result.map(|p| (p.x, p.y)))
    }
}

/// Search on a caller-supplied undirected graph of labels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphQuery {
    pub nodes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub edges: Vec<(String, String)>,
    pub start: String,
    pub end: String,
    pub algorithm: Algorithm,
}

impl GraphQuery {
    pub fn label_graph(&self) -> LabelGraph {
        LabelGraph::from_parts(
            &self.nodes,
            self.edges.iter().map(|(a, b)| (a, b)),
        )
    }

    /// Searches the graph. `start` and `end` must be listed in `nodes`; a label that only
    /// appears in an edge still joins the graph, but is not accepted as an endpoint.
    pub fn run(&self) -> Result<SearchResult<String>> {
        for (endpoint, label) in [(Endpoint::Start, &self.start), (Endpoint::End, &self.end)] {
            if !self.nodes.contains(label) {
                warn!("{} label {:?} is not in the node list", endpoint, label);
                return Err(SearchError::InvalidEndpoint {
                    endpoint,
                    node: format!("{:?}", label),
                });
            }
        }
        let label_graph = self.label_graph();
        self.algorithm
            .find_path(&label_graph, &self.start, &self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn open_grid_bfs() {
        let result = GridQuery::new(3, (0, 0), (2, 2), Algorithm::Bfs)
            .run()
            .unwrap();
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.path[0], (0, 0));
        assert_eq!(result.path[4], (2, 2));
        assert_eq!(result.visited.len(), 9);
        assert!(result.visited.iter().all_unique());
    }

    #[test]
    fn centre_wall_any_algorithm() {
        for algorithm in Algorithm::ALL {
            let result = GridQuery::new(3, (0, 0), (2, 2), algorithm)
                .with_walls([(1, 1)])
                .run()
                .unwrap();
            assert_eq!(result.path.len(), 5);
            assert!(!result.path.contains(&(1, 1)));
            assert!(!result.visited.contains(&(1, 1)));
        }
    }

    #[test]
    fn start_on_wall() {
        let err = GridQuery::new(4, (1, 1), (3, 3), Algorithm::Dijkstra)
            .with_walls([(1, 1)])
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                ..
            }
        ));
    }

    #[test]
    fn empty_grid_has_no_endpoints() {
        let query = GridQuery::new(0, (0, 0), (0, 0), Algorithm::Bfs);
        assert!(query.run().is_err());
    }

    #[test]
    fn disconnected_graph() {
        for algorithm in Algorithm::ALL {
            let query = GraphQuery {
                nodes: vec!["A".into(), "B".into(), "C".into()],
                edges: vec![("A".into(), "B".into())],
                start: "A".into(),
                end: "C".into(),
                algorithm,
            };
            let result = query.run().unwrap();
            assert!(result.path.is_empty());
            assert!(!result.visited.contains(&"C".to_owned()));
        }
    }

    #[test]
    fn graph_path() {
        let query = GraphQuery {
            nodes: ["A", "B", "C", "D"].map(String::from).to_vec(),
            edges: vec![
                ("A".into(), "B".into()),
                ("B".into(), "C".into()),
                ("C".into(), "D".into()),
                ("A".into(), "C".into()),
            ],
            start: "A".into(),
            end: "D".into(),
            algorithm: Algorithm::Bfs,
        };
        assert_eq!(query.run().unwrap().path, vec!["A", "C", "D"]);
    }

    #[test]
    fn endpoints_named_only_by_edges_are_rejected() {
        let query = GraphQuery {
            nodes: vec!["A".into(), "B".into()],
            edges: vec![("A".into(), "B".into()), ("B".into(), "Z".into())],
            start: "A".into(),
            end: "Z".into(),
            algorithm: Algorithm::Bfs,
        };
        assert_eq!(
            query.run(),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::End,
                node: "\"Z\"".to_owned(),
            })
        );
        let reversed = GraphQuery {
            start: "Z".into(),
            end: "A".into(),
            ..query.clone()
        };
        assert!(matches!(
            reversed.run(),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                ..
            })
        ));
        // Z still takes part in the search as an intermediate node.
        let through = GraphQuery {
            nodes: vec!["A".into(), "B".into(), "C".into()],
            edges: vec![("A".into(), "Z".into()), ("Z".into(), "C".into())],
            start: "A".into(),
            end: "C".into(),
            algorithm: Algorithm::Bfs,
        };
        assert_eq!(through.run().unwrap().path, vec!["A", "Z", "C"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format() {
        let query: GridQuery = serde_json::from_str(
            r#"{"start": [0, 0], "end": [0, 2], "walls": [[0, 1]], "algorithm": "astar"}"#,
        )
        .unwrap();
        assert_eq!(query.grid_size, crate::DEFAULT_GRID_SIZE);
        assert_eq!(query.algorithm, Algorithm::Astar);
        let result = query.run().unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["path"][0], serde_json::json!([0, 0]));
        assert_eq!(json["path"].as_array().map(Vec::len), Some(5));

        let bad = serde_json::from_str::<GraphQuery>(
            r#"{"nodes": ["A"], "start": "A", "end": "A", "algorithm": "greedy"}"#,
        );
        assert!(bad.is_err());
    }
}
