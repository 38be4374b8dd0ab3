//! Arbitrary undirected graphs whose nodes are identified by string labels.
use crate::search::{FxIndexMap, SearchSpace};

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected unit-cost graph over string labels, backed by a petgraph [UnGraph]. Adding a
/// node or an edge twice has no effect. Self-loops are stored but never lead anywhere new.
#[derive(Clone, Debug, Default)]
pub struct LabelGraph {
    graph: UnGraph<String, ()>,
    indices: FxIndexMap<String, NodeIndex>,
}

impl LabelGraph {
    pub fn new() -> LabelGraph {
        LabelGraph::default()
    }

    /// Builds a graph from a node list and an edge list. Labels that only occur in an edge
    /// are added as nodes.
    pub fn from_parts<N, E, S>(nodes: N, edges: E) -> LabelGraph
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut label_graph = LabelGraph::new();
        for node in nodes {
            label_graph.add_node(node.as_ref());
        }
        for (a, b) in edges {
            label_graph.add_edge(a.as_ref(), b.as_ref());
        }
        label_graph
    }

    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&ix) = self.indices.get(label) {
            return ix;
        }
        let ix = self.graph.add_node(label.to_owned());
        self.indices.insert(label.to_owned(), ix);
        ix
    }

    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, ());
        }
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.indices.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Labels in the order they were first added.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    /// Labels adjacent to `label` in the order their edges were added. Unknown labels have
    /// no neighbours.
    pub fn neighbour_labels(&self, label: &str) -> Vec<String> {
        let Some(&ix) = self.indices.get(label) else {
            return Vec::new();
        };
        self.graph
            .edges(ix)
            .map(|edge| {
                let other = if edge.source() == ix {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other)
            })
            .sorted_by_key(|(id, _)| *id)
            .dedup()
            .map(|(_, other)| self.graph[other].clone())
            .collect()
    }
}

impl SearchSpace for LabelGraph {
    type Node = String;
    type Neighbours = Vec<String>;

    fn contains(&self, node: &String) -> bool {
        self.contains_node(node)
    }
    fn neighbours(&self, node: &String) -> Vec<String> {
        self.neighbour_labels(node)
    }
    // Labels carry no geometry, so the heuristic stays at the default of zero and A* expands
    // nodes in the same order as Dijkstra on these graphs.
}
