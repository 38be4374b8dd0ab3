//! The search core shared by every solver. Two drivers live here: [uninformed] walks a FIFO
//! or LIFO frontier for breadth- and depth-first search, while [best_first] pops from a
//! binary heap ordered on estimated cost for Dijkstra and A*. Both keep their predecessor
//! map in an [IndexMap] so that a node can be referred to by its insertion index, which is
//! what the open structures store.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use itertools::Itertools;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node in a predecessor map.
const NO_PARENT: usize = usize::MAX;

/// Adapter between a concrete graph representation and the search algorithms.
pub trait SearchSpace {
    type Node: Eq + Hash + Clone + Debug;
    type Neighbours: IntoIterator<Item = Self::Node>;

    /// Whether the node is part of the space. Searches refuse endpoints for which this is false.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Nodes adjacent to `node`, in a fixed enumeration order.
    fn neighbours(&self, node: &Self::Node) -> Self::Neighbours;

    /// Estimate of the remaining cost from `node` to `goal`. Must never overestimate for
    /// A* to stay optimal. Zero is always admissible.
    fn heuristic(&self, _node: &Self::Node, _goal: &Self::Node) -> i32 {
        0
    }
}

/// Outcome of a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N> {
    /// Nodes from start to goal inclusive, empty if the goal could not be reached.
    pub path: Vec<N>,
    /// Nodes in the order they were expanded.
    pub visited: Vec<N>,
}

impl<N> SearchResult<N> {
    pub fn not_found(visited: Vec<N>) -> Self {
        SearchResult {
            path: Vec::new(),
            visited,
        }
    }
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of edges on the path, [None] if no path was found.
    pub fn edge_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
    /// Converts every node of the result, keeping the order of both sequences.
    pub fn map<M, F>(self, mut f: F) -> SearchResult<M>
    where
        F: FnMut(N) -> M,
    {
        SearchResult {
            path: self.path.into_iter().map(&mut f).collect(),
            visited: self.visited.into_iter().map(f).collect(),
        }
    }
}

/// Checks that every node of the path is in the space and consecutive nodes are adjacent.
pub fn path_is_connected<S: SearchSpace>(space: &S, path: &[S::Node]) -> bool {
    path.iter().all(|node| space.contains(node))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| space.neighbours(a).into_iter().any(|n| n == *b))
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, parent: F, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: Fn(&V) -> usize,
{
    let mut cursor = goal;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(cursor).map(|(node, value)| {
            cursor = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Frontier {
    Fifo,
    Lifo,
}

/// Breadth- or depth-first search depending on `frontier`. Nodes are claimed in the
/// predecessor map when they are pushed, so each node enters the frontier at most once
/// and keeps the first predecessor it was discovered from.
pub(crate) fn uninformed<N, FN, IN, FS>(
    start: &N,
    frontier: Frontier,
    mut successors: FN,
    mut success: FS,
) -> SearchResult<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut open = VecDeque::new();
    open.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    let mut visited = Vec::new();
    loop {
        let next = match frontier {
            Frontier::Fifo => open.pop_front(),
            Frontier::Lifo => open.pop_back(),
        };
        let Some(index) = next else {
            break;
        };
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            visited.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchResult { path, visited };
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                open.push_back(e.index());
                e.insert(index);
            }
        }
    }
    SearchResult::not_found(visited)
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest estimate first, then smallest cost so far,
        // then the node discovered earliest.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Best-first search over non-negative edge costs, keyed on `cost + heuristic`. With a zero
/// heuristic this is Dijkstra's algorithm.
///
/// The heap may hold several entries for the same node when a cheaper route to it is found
/// after it was first pushed. Those entries are not removed on push; whichever is popped
/// first expands the node and later ones are discarded because the node is already closed.
pub(crate) fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchResult<N>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut visited = Vec::new();
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        if !closed.insert(index) {
            continue;
        }
        let (successors, cost) = {
            let Some((node, &(_, cost))) = parents.get_index(index) else {
                continue;
            };
            visited.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return SearchResult { path, visited };
            }
            (successors(node), cost)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    SearchResult::not_found(visited)
}
