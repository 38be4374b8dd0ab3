use crate::search::{uninformed, Frontier, SearchResult, SearchSpace};
use crate::solver::Solver;

/// Breadth-first search. Returns a path with the fewest edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl Solver for BfsSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search_unchecked<S: SearchSpace>(
        &self,
        space: &S,
        start: &S::Node,
        goal: &S::Node,
    ) -> SearchResult<S::Node> {
        uninformed(
            start,
            Frontier::Fifo,
            |node| space.neighbours(node),
            |node| node == goal,
        )
    }
}
