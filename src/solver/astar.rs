use crate::search::{best_first, SearchResult, SearchSpace};
use crate::solver::Solver;
use crate::UNIT_COST;

/// A* search guided by [SearchSpace::heuristic], scaled by `heuristic_factor`. With the
/// default factor of 1.0 the path is optimal whenever the heuristic is admissible; larger
/// factors expand fewer nodes at the price of possibly longer paths. On spaces without a
/// heuristic this expands nodes exactly like [DijkstraSolver](super::dijkstra::DijkstraSolver).
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl Solver for AstarSolver {
    fn name(&self) -> &'static str {
        "astar"
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
            |node| (space.heuristic(node, goal) as f32 * self.heuristic_factor) as i32,
            |node| node == goal,
        )
    }
}
