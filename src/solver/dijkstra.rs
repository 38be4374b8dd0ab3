use crate::search::{best_first, SearchResult, SearchSpace};
use crate::solver::Solver;
use crate::UNIT_COST;

/// Dijkstra's algorithm. Every edge costs [UNIT_COST], so paths are as short as those of
/// breadth-first search, but expansion goes through the same priority queue as A*.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl Solver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search_unchecked<S: SearchSpace>(
        &self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> SearchResult<S::Node> {
        best_first(
            start,
            |node| {
                space
                    .neighbours(node)
                    .into_iter()
                    .map(|n| (n, UNIT_COST))
            },
            |_| 0,
            |node| node == goal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_graph::LabelGraph;
    use crate::pathing_grid::PathingGrid;
    use crate::solver::bfs::BfsSolver;
    use grid_util::point::Point;
    use itertools::Itertools;

    #[test]
    fn matches_bfs_length() {
        let walls = [
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 3),
            Point::new(3, 3),
            Point::new(4, 3),
        ];
        let pathing_grid = PathingGrid::with_walls(5, walls);
        let start = Point::new(0, 0);
        let end = Point::new(0, 4);
        let dijkstra = DijkstraSolver.find_path(&pathing_grid, &start, &end).unwrap();
        let bfs = BfsSolver.find_path(&pathing_grid, &start, &end).unwrap();
        assert_eq!(dijkstra.edge_count(), Some(10));
        assert_eq!(dijkstra.edge_count(), bfs.edge_count());
    }

    #[test]
    fn expands_by_distance() {
        let label_graph = LabelGraph::from_parts(
            ["S", "A", "B", "C", "G"],
            [("S", "A"), ("A", "B"), ("B", "G"), ("S", "C"), ("C", "G")],
        );
        let result = DijkstraSolver
            .find_path(&label_graph, &"S".to_owned(), &"G".to_owned())
            .unwrap();
        assert_eq!(result.path, vec!["S", "C", "G"]);
        // Ties on distance go to the node discovered first.
        assert_eq!(result.visited, vec!["S", "A", "C", "B", "G"]);
        assert!(result.visited.iter().all_unique());
    }
}
