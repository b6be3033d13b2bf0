use std::collections::HashMap;

/// Opaque identifier naming a graph vertex.
pub type NodeId = String;

/// Directed, weighted edge within the search graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub cost: u64,
}

/// Adjacency structure consumed by the search engine.
///
/// Edges keep their declaration order and duplicates are retained; the
/// search relaxes every one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge `from -> to` with the given cost.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, cost: u64) {
        self.adjacency.entry(from.into()).or_default().push(Edge {
            target: to.into(),
            cost,
        });
    }

    /// Return the outgoing edges for a node, or an empty slice when the node
    /// has no adjacency entry.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes that have at least one outgoing edge.
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<F, T> FromIterator<(F, T, u64)> for Graph
where
    F: Into<NodeId>,
    T: Into<NodeId>,
{
    fn from_iter<I: IntoIterator<Item = (F, T, u64)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (from, to, cost) in iter {
            graph.add_edge(from, to, cost);
        }
        graph
    }
}

/// Per-node estimates of the remaining cost to the goal.
///
/// Nodes without an entry estimate to zero, which keeps a sparse table
/// admissible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicTable {
    values: HashMap<NodeId, u64>,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate for a node, replacing any earlier value.
    pub fn insert(&mut self, node: impl Into<NodeId>, value: u64) {
        self.values.insert(node.into(), value);
    }

    /// Estimate for `node`, defaulting to zero.
    pub fn get(&self, node: &str) -> u64 {
        self.values.get(node).copied().unwrap_or(0)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.values.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<NodeId>> FromIterator<(N, u64)> for HeuristicTable {
    fn from_iter<I: IntoIterator<Item = (N, u64)>>(iter: I) -> Self {
        let mut table = HeuristicTable::new();
        for (node, value) in iter {
            table.insert(node, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_nodes_have_no_neighbours() {
        let graph = Graph::new();
        assert!(graph.neighbours("A").is_empty());
    }

    #[test]
    fn duplicate_edges_are_kept_in_order() {
        let graph: Graph = [("A", "B", 3), ("A", "B", 1), ("A", "C", 2)]
            .into_iter()
            .collect();

        let targets: Vec<_> = graph
            .neighbours("A")
            .iter()
            .map(|edge| (edge.target.as_str(), edge.cost))
            .collect();
        assert_eq!(targets, vec![("B", 3), ("B", 1), ("C", 2)]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.source_count(), 1);
    }

    #[test]
    fn missing_heuristic_defaults_to_zero() {
        let table: HeuristicTable = [("A", 4)].into_iter().collect();
        assert_eq!(table.get("A"), 4);
        assert_eq!(table.get("Z"), 0);
        assert!(!table.contains("Z"));
    }

    #[test]
    fn later_heuristic_overrides_earlier() {
        let table: HeuristicTable = [("A", 4), ("A", 7)].into_iter().collect();
        assert_eq!(table.get("A"), 7);
        assert_eq!(table.len(), 1);
    }
}
