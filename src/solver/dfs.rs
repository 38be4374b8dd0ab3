use crate::search::{uninformed, Frontier, SearchResult, SearchSpace};
use crate::solver::Solver;

/// Depth-first search on an explicit stack. The path found follows the neighbour
/// enumeration order of the space and is not necessarily the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl Solver for DfsSolver {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search_unchecked<S: SearchSpace>(
        &self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> SearchResult<S::Node> {
        uninformed(
            start,
            Frontier::Lifo,
            |node| space.neighbours(node),
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

    #[test]
    fn follows_last_pushed_neighbour() {
        let pathing_grid = PathingGrid::square(3);
        let start = Point::new(0, 0);
        let end = Point::new(2, 2);
        let result = DfsSolver.find_path(&pathing_grid, &start, &end).unwrap();
        let expected = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(result.path, expected);
        assert_eq!(result.visited, expected);
    }

    /// A -- B -- D
    ///  \        |
    ///   C ---- E
    #[test]
    fn not_necessarily_shortest() {
        let label_graph = LabelGraph::from_parts(
            ["A", "B", "C", "D", "E"],
            [("A", "B"), ("A", "C"), ("B", "D"), ("C", "E"), ("E", "D")],
        );
        let start = "A".to_owned();
        let end = "D".to_owned();
        let dfs = DfsSolver.find_path(&label_graph, &start, &end).unwrap();
        let bfs = BfsSolver.find_path(&label_graph, &start, &end).unwrap();
        assert_eq!(dfs.path, vec!["A", "C", "E", "D"]);
        assert_eq!(bfs.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        const N: usize = 20_000;
        let labels = (0..N).map(|i| i.to_string()).collect::<Vec<_>>();
        let edges = labels
            .iter()
            .zip(labels.iter().skip(1))
            .map(|(a, b)| (a.clone(), b.clone()));
        let label_graph = LabelGraph::from_parts(labels.clone(), edges);
        let result = DfsSolver
            .find_path(&label_graph, &labels[0], &labels[N - 1])
            .unwrap();
        assert_eq!(result.path.len(), N);
    }
}
